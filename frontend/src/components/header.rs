use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::use_scrolled_past;
use crate::components::icons::{LogoIcon, PhoneIcon};
use crate::config::{self, PHONE_DISPLAY, PHONE_TEL};
use crate::navigation::Page;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub current: Page,
    pub on_navigate: Callback<Page>,
}

#[function_component(Header)]
pub fn header(props: &HeaderProps) -> Html {
    let HeaderProps { current, on_navigate } = props;
    let menu_open = use_state(|| false);
    let is_scrolled = use_scrolled_past(config::HEADER_SCROLL_THRESHOLD);

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Every nav control closes the mobile menu before navigating.
    let go_to = |page: Page| {
        let menu_open = menu_open.clone();
        let on_navigate = on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(false);
            on_navigate.emit(page);
        })
    };

    let menu_class = if *menu_open {
        "nav-links mobile-menu-open"
    } else {
        "nav-links"
    };

    html! {
        <header class={classes!("site-header", is_scrolled.then(|| "scrolled"))}>
            <style>
                {r#"
                    .site-header {
                        position: sticky;
                        top: 0;
                        z-index: 50;
                        width: 100%;
                        background: rgba(253, 251, 247, 0.85);
                        backdrop-filter: blur(12px);
                        border-bottom: 1px solid rgba(139, 92, 246, 0.1);
                        transition: box-shadow 0.3s ease, background 0.3s ease;
                    }
                    .site-header.scrolled {
                        background: rgba(255, 255, 255, 0.95);
                        box-shadow: 0 4px 20px rgba(0, 0, 0, 0.06);
                    }
                    .header-content {
                        max-width: 80rem;
                        margin: 0 auto;
                        padding: 0 1.5rem;
                        height: 5rem;
                        display: flex;
                        align-items: center;
                        justify-content: space-between;
                    }
                    .brand {
                        display: flex;
                        align-items: center;
                        gap: 0.75rem;
                        cursor: pointer;
                        background: none;
                        border: none;
                    }
                    .brand .logo-icon { width: 3rem; height: 3rem; transition: transform 0.3s; }
                    .brand:hover .logo-icon { transform: scale(1.1); }
                    .brand-name {
                        font-family: Georgia, serif;
                        font-weight: 700;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                        color: #0f172a;
                        line-height: 1;
                    }
                    .brand-tagline {
                        display: block;
                        font-size: 0.55rem;
                        letter-spacing: 0.2em;
                        color: #64748b;
                        margin-top: 0.2rem;
                    }
                    .nav-links { display: flex; gap: 2.5rem; }
                    .nav-link {
                        position: relative;
                        background: none;
                        border: none;
                        cursor: pointer;
                        font-size: 0.75rem;
                        font-weight: 700;
                        letter-spacing: 0.25em;
                        text-transform: uppercase;
                        color: #64748b;
                    }
                    .nav-link::after {
                        content: '';
                        position: absolute;
                        left: 0;
                        bottom: -0.25rem;
                        width: 100%;
                        height: 2px;
                        transform: scaleX(0);
                        transform-origin: left;
                        transition: transform 0.3s;
                    }
                    .nav-link:hover { color: #a855f7; }
                    .nav-link:hover::after { transform: scaleX(0.5); }
                    .nav-link.active { color: #9333ea; }
                    .nav-link.active::after { transform: scaleX(1); }
                    .nav-link::after, .header-cta { background: linear-gradient(90deg, #8b5cf6, #ec4899, #fb923c); }
                    .header-actions { display: flex; align-items: center; gap: 1.5rem; }
                    .header-phone {
                        display: flex;
                        align-items: center;
                        gap: 0.5rem;
                        color: #334155;
                        font-weight: 700;
                        font-size: 0.875rem;
                        text-decoration: none;
                    }
                    .header-phone .icon { width: 1rem; height: 1rem; color: #9333ea; }
                    .header-cta {
                        color: white;
                        border: none;
                        border-radius: 9999px;
                        padding: 0.75rem 1.75rem;
                        font-size: 0.75rem;
                        font-weight: 800;
                        cursor: pointer;
                        box-shadow: 0 10px 20px rgba(139, 92, 246, 0.2);
                        transition: transform 0.2s;
                    }
                    .header-cta:hover { transform: translateY(-2px); }
                    .burger-menu { display: none; background: none; border: none; cursor: pointer; }
                    .burger-menu span { display: block; width: 24px; height: 2px; margin: 5px 0; background: #334155; }
                    @media (max-width: 900px) {
                        .burger-menu { display: block; }
                        .header-phone { display: none; }
                        .nav-links {
                            display: none;
                            position: absolute;
                            top: 5rem;
                            left: 0;
                            right: 0;
                            flex-direction: column;
                            gap: 1.5rem;
                            padding: 1.5rem;
                            background: white;
                            box-shadow: 0 10px 20px rgba(0, 0, 0, 0.08);
                        }
                        .nav-links.mobile-menu-open { display: flex; }
                    }
                "#}
            </style>
            <div class="header-content">
                <button class="brand" onclick={go_to(Page::Home)}>
                    <LogoIcon id="header-logo-identity" />
                    <span class="brand-name">
                        {"Peaceful Living"}
                        <span class="brand-tagline">{"Home Care"}</span>
                    </span>
                </button>

                <nav class={menu_class}>
                    {
                        for Page::ALL.iter().map(|&page| html! {
                            <button
                                key={page.key()}
                                class={classes!("nav-link", (page == *current).then(|| "active"))}
                                onclick={go_to(page)}
                            >
                                {page.label()}
                            </button>
                        })
                    }
                </nav>

                <div class="header-actions">
                    <a href={PHONE_TEL} class="header-phone">
                        <PhoneIcon />
                        {PHONE_DISPLAY}
                    </a>
                    <button class="header-cta" onclick={go_to(Page::Contact)}>
                        {"Get Care Plan"}
                    </button>
                    <button class="burger-menu" onclick={toggle_menu} aria-label="Toggle menu">
                        <span></span>
                        <span></span>
                        <span></span>
                    </button>
                </div>
            </div>
        </header>
    }
}
