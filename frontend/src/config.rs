use crate::scroll::RetryPolicy;

pub const BUSINESS_NAME: &str = "Peaceful Living Home Care LLC";
pub const PHONE_DISPLAY: &str = "317-600-7994";
pub const PHONE_TEL: &str = "tel:3176007994";
pub const EMAIL: &str = "Peacefullivinghc@outlook.com";
pub const CAREERS_LINK: &str = "https://14002.axiscare.com";

/// Pixels scrolled before the header switches to its compact style.
pub const HEADER_SCROLL_THRESHOLD: f64 = 80.0;

/// Height of the sticky header bar.
pub const HEADER_HEIGHT_REM: f64 = 5.0;

/// Inline style for scroll anchors so `scrollIntoView` stops below the sticky header.
pub fn anchor_style() -> String {
    format!("scroll-margin-top: {}rem;", HEADER_HEIGHT_REM)
}

/// Formspree form id, baked in at build time: `FORMSPREE_ID=xyzabc trunk build`.
pub fn form_id() -> Option<&'static str> {
    option_env!("FORMSPREE_ID").filter(|id| !id.trim().is_empty())
}

// Local builds can point at a mock: FORM_SERVICE_URL=http://localhost:3001/f
#[cfg(debug_assertions)]
fn form_service_url() -> &'static str {
    option_env!("FORM_SERVICE_URL").unwrap_or("https://formspree.io/f")
}

#[cfg(not(debug_assertions))]
fn form_service_url() -> &'static str {
    "https://formspree.io/f"
}

pub fn form_endpoint() -> Option<String> {
    form_id().map(|id| format!("{}/{}", form_service_url(), id))
}

pub fn anchor_retry_policy() -> RetryPolicy {
    RetryPolicy::default()
}

/// `317-600-7994` -> `317.600.7994`, as printed in the footer.
pub fn dotted_phone() -> String {
    PHONE_DISPLAY.replace('-', ".")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn footer_phone_uses_dots() {
        assert_eq!(dotted_phone(), "317.600.7994");
    }

    #[test]
    fn anchors_clear_the_sticky_header() {
        assert_eq!(anchor_style(), "scroll-margin-top: 5rem;");
    }

    #[test]
    fn tel_link_matches_display_digits() {
        let digits: String = PHONE_DISPLAY.chars().filter(|c| c.is_ascii_digit()).collect();
        assert_eq!(PHONE_TEL, format!("tel:{}", digits));
    }
}
