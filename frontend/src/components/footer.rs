use web_sys::{Element, MouseEvent};
use yew::prelude::*;

use crate::components::icons::MailIcon;
use crate::config::{self, EMAIL, PHONE_TEL};

const FOOTER_LINKS: [(&str, &str); 3] = [
    ("services", "Our Services"),
    ("resources", "Resources"),
    ("contact", "Contact"),
];

#[derive(Properties, PartialEq)]
pub struct FooterProps {
    /// Receives the `data-page` key of the clicked link.
    pub on_navigate_key: Callback<String>,
}

#[function_component(Footer)]
pub fn footer(props: &FooterProps) -> Html {
    let on_link = {
        let on_navigate_key = props.on_navigate_key.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            let key = e
                .target_dyn_into::<Element>()
                .and_then(|el| el.get_attribute("data-page"));
            if let Some(key) = key {
                on_navigate_key.emit(key);
            }
        })
    };

    html! {
        <footer class="site-footer">
            <style>
                {r#"
                    .site-footer {
                        background: #4a3a3a;
                        color: white;
                        padding: 4rem 1.5rem;
                        text-align: center;
                    }
                    .site-footer h2 { font-family: Georgia, serif; font-size: 2.25rem; margin: 0 0 0.5rem; }
                    .footer-phone {
                        display: inline-block;
                        font-size: 3rem;
                        font-weight: 800;
                        color: white;
                        text-decoration: none;
                        transition: color 0.2s;
                    }
                    .footer-phone:hover { color: #d8b4fe; }
                    .footer-contact {
                        display: flex;
                        flex-wrap: wrap;
                        justify-content: center;
                        align-items: center;
                        gap: 2rem;
                        margin: 2rem 0;
                        color: rgba(255, 255, 255, 0.8);
                    }
                    .footer-contact a { color: inherit; text-decoration: none; display: flex; gap: 0.5rem; align-items: center; }
                    .footer-contact .icon { width: 1.25rem; height: 1.25rem; }
                    .footer-links { display: flex; justify-content: center; gap: 2rem; margin-bottom: 2rem; }
                    .footer-links button {
                        background: none;
                        border: none;
                        color: rgba(255, 255, 255, 0.7);
                        cursor: pointer;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                        font-size: 0.75rem;
                    }
                    .footer-links button:hover { color: white; }
                    .footer-copyright {
                        padding-top: 2rem;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        color: rgba(255, 255, 255, 0.4);
                        font-size: 0.8rem;
                        letter-spacing: 0.15em;
                        text-transform: uppercase;
                    }
                "#}
            </style>
            <h2>{"Call us today"}</h2>
            <a href={PHONE_TEL} class="footer-phone">{config::dotted_phone()}</a>

            <div class="footer-contact">
                <a href={format!("mailto:{}", EMAIL)}>
                    <MailIcon />
                    <span>{EMAIL}</span>
                </a>
                <span>{"Available 24/7 for your family"}</span>
            </div>

            <div class="footer-links">
                { for FOOTER_LINKS.iter().map(|(key, label)| html! {
                    <button key={*key} data-page={*key} onclick={on_link.clone()}>{*label}</button>
                }) }
            </div>

            <p class="footer-copyright">
                {format!("© 2024 by {}", config::BUSINESS_NAME)}
            </p>
        </footer>
    }
}
