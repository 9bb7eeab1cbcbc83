//! Copy and card data for the marketing pages.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CareStep {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub const CARE_STEPS: [CareStep; 6] = [
    CareStep { id: "transport", title: "Non-Medical", description: "Safe and reliable travel for appointments and errands." },
    CareStep { id: "companion", title: "Companion Care", description: "Support and engagement for activities." },
    CareStep { id: "meals", title: "Meal Preparation", description: "Nutritious meal planning and assistance." },
    CareStep { id: "adls", title: "Assistance with Activities of Daily Living (ADLs)", description: "Help with personal care tasks to promote independence." },
    CareStep { id: "social", title: "Social Interaction", description: "Encouragement and companionship to enhance well-being." },
    CareStep { id: "errands", title: "Errand Running", description: "Support with grocery shopping and other errands." },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ServiceCard {
    pub id: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
    pub gradient: &'static str,
    pub accent: &'static str,
}

pub const SERVICE_CARDS: [ServiceCard; 6] = [
    ServiceCard {
        id: "homecare",
        title: "Home Care",
        subtitle: "Personalized In-Home Support",
        description: "Comprehensive in-home care services tailored to meet individual needs, ensuring comfort and dignity in the familiar surroundings of your own home.",
        icon: "🏠",
        gradient: "linear-gradient(135deg, #8b5cf6, #a855f7, #d946ef)",
        accent: "#8b5cf6",
    },
    ServiceCard {
        id: "attendant-care",
        title: "Attendant Care",
        subtitle: "Daily Living Assistance",
        description: "Professional attendants provide essential daily living support including bathing, dressing, grooming, and mobility assistance with compassion and respect.",
        icon: "🤝",
        gradient: "linear-gradient(135deg, #ec4899, #f43f5e, #fb923c)",
        accent: "#ec4899",
    },
    ServiceCard {
        id: "homemaker",
        title: "Homemaker Services",
        subtitle: "Household Management",
        description: "Light housekeeping, meal preparation, laundry, grocery shopping, and errands to maintain a clean, comfortable, and well-organized living environment.",
        icon: "🧺",
        gradient: "linear-gradient(135deg, #f59e0b, #f97316, #ef4444)",
        accent: "#f59e0b",
    },
    ServiceCard {
        id: "structured-family",
        title: "Structured Family Care",
        subtitle: "Family-Centered Support",
        description: "Specialized programs that empower families to provide quality care for loved ones at home, with professional guidance, training, and ongoing support.",
        icon: "👪",
        gradient: "linear-gradient(135deg, #06b6d4, #0ea5e9, #3b82f6)",
        accent: "#0ea5e9",
    },
    ServiceCard {
        id: "pediatric",
        title: "Pediatric Homecare",
        subtitle: "Specialized Child Care",
        description: "Expert pediatric care services for children with special healthcare needs, delivered with warmth and expertise to support the whole family.",
        icon: "🧸",
        gradient: "linear-gradient(135deg, #3b82f6, #6366f1, #8b5cf6)",
        accent: "#6366f1",
    },
    ServiceCard {
        id: "transportation",
        title: "Non-Emergency Transport",
        subtitle: "Safe & Reliable Rides",
        description: "Dependable non-emergency medical transportation to appointments, therapy sessions, and healthcare facilities with trained, caring drivers.",
        icon: "🚐",
        gradient: "linear-gradient(135deg, #10b981, #22c55e, #84cc16)",
        accent: "#10b981",
    },
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ResourceLink {
    pub title: &'static str,
    pub description: &'static str,
    pub link: &'static str,
    pub gradient: &'static str,
}

pub const RESOURCES: [ResourceLink; 2] = [
    ResourceLink {
        title: "Indiana FSSA",
        description: "The Family and Social Services Administration helps Hoosiers live healthy, productive, and safe lives. Support for families, children, and individuals.",
        link: "https://www.in.gov/fssa/",
        gradient: "linear-gradient(135deg, #3b82f6, #4f46e5)",
    },
    ResourceLink {
        title: "CICOA Aging & In-Home Solutions",
        description: "Empowering older adults, people with disabilities, and family caregivers with the resources they need to remain independent at home.",
        link: "https://cicoa.org",
        gradient: "linear-gradient(135deg, #10b981, #0d9488)",
    },
];

pub const PAYMENT_OPTIONS: [&str; 3] = ["Private Pay", "Medicaid Waivers", "Pathways For Aging"];

pub const YEARS_IN_HEALTHCARE: u32 = 25;

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn card_ids_are_unique() {
        let steps: HashSet<_> = CARE_STEPS.iter().map(|s| s.id).collect();
        assert_eq!(steps.len(), CARE_STEPS.len());
        let cards: HashSet<_> = SERVICE_CARDS.iter().map(|c| c.id).collect();
        assert_eq!(cards.len(), SERVICE_CARDS.len());
    }

    #[test]
    fn resource_links_are_https() {
        assert!(RESOURCES.iter().all(|r| r.link.starts_with("https://")));
    }
}
