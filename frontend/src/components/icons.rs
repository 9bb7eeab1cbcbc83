use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or(AttrValue::Static("logo-icon"))]
    pub class: AttrValue,
    /// Gradient id; must be unique per logo on the page.
    #[prop_or(AttrValue::Static("logo-grad"))]
    pub id: AttrValue,
}

#[function_component(LogoIcon)]
pub fn logo_icon(props: &LogoProps) -> Html {
    let stroke = format!("url(#{})", props.id);
    html! {
        <svg viewBox="0 0 400 400" fill="none" xmlns="http://www.w3.org/2000/svg" class={props.class.to_string()}>
            <defs>
                <linearGradient id={props.id.clone()} x1="0%" y1="0%" x2="100%" y2="0%">
                    <stop offset="0%" stop-color="#8b5cf6" />
                    <stop offset="50%" stop-color="#ec4899" />
                    <stop offset="100%" stop-color="#fb923c" />
                </linearGradient>
            </defs>
            // heart above the two roofs
            <path class="logo-heart"
                d="M200,225 C200,225 185,185 150,185 C115,185 95,210 95,240 C95,275 135,310 200,350 C265,310 305,275 305,240 C305,210 285,185 250,185 C215,185 200,225 200,225 Z"
                stroke={stroke.clone()} stroke-width="12" stroke-linecap="round" stroke-linejoin="round"
                transform="translate(0, -100)" />
            <path d="M70,260 V200 L145,135 L200,190 L255,135 L330,200 V260"
                stroke={stroke.clone()} stroke-width="14" stroke-linecap="round" stroke-linejoin="round" />
            <path d="M200,190 V260" stroke={stroke.clone()} stroke-width="14" stroke-linecap="round" />
            <path d="M110,215 A8,8 0 0 1 126,215 V235 H110 Z" stroke={stroke.clone()} stroke-width="4" />
            <path d="M110,225 H126 M118,215 V235" stroke={stroke.clone()} stroke-width="2" />
            <path d="M274,215 A8,8 0 0 1 290,215 V235 H274 Z" stroke={stroke.clone()} stroke-width="4" />
            <path d="M274,225 H290 M282,215 V235" stroke={stroke.clone()} stroke-width="2" />
            <path d="M40,275 H360" stroke={stroke} stroke-width="14" stroke-linecap="round" />
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    #[prop_or(AttrValue::Static("icon"))]
    pub class: AttrValue,
}

#[function_component(PhoneIcon)]
pub fn phone_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.to_string()} fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                d="M3 5a2 2 0 012-2h3.28a1 1 0 01.948.684l1.498 4.493a1 1 0 01-.502 1.21l-2.257 1.13a11.042 11.042 0 005.516 5.516l1.13-2.257a1 1 0 011.21-.502l4.493 1.498a1 1 0 01.684.949V19a2 2 0 01-2 2h-1C9.716 21 3 14.284 3 6V5z" />
        </svg>
    }
}

#[function_component(MailIcon)]
pub fn mail_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.to_string()} fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                d="M3 8l7.89 5.26a2 2 0 002.22 0L21 8M5 19h14a2 2 0 002-2V7a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z" />
        </svg>
    }
}

#[function_component(ExternalLinkIcon)]
pub fn external_link_icon(props: &IconProps) -> Html {
    html! {
        <svg class={props.class.to_string()} fill="none" viewBox="0 0 24 24" stroke="currentColor">
            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2"
                d="M10 6H6a2 2 0 00-2 2v10a2 2 0 002 2h10a2 2 0 002-2v-4M14 4h6m0 0v6m0-6L10 14" />
        </svg>
    }
}
