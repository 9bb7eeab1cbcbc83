use log::{info, Level};
use yew::prelude::*;

mod animation;
mod config;
mod contact;
mod form_backend;
mod navigation;
mod scroll;
mod site;
mod components {
    pub mod about_section;
    pub mod contact_section;
    pub mod counter_bar;
    pub mod footer;
    pub mod header;
    pub mod hero;
    pub mod icons;
    pub mod peaceful_path;
    pub mod trust_ribbon;
    pub mod video_showcase;
}
mod pages {
    pub mod home;
    pub mod resources;
    pub mod services;
}

use components::{footer::Footer, header::Header};
use navigation::{NavAction, NavState, Page, RenderTarget, StandalonePage};
use pages::{home::Home, resources::Resources, services::Services};
use scroll::use_scroll_coordinator;

fn render_page(target: RenderTarget, on_navigate: Callback<Page>) -> Html {
    match target {
        RenderTarget::CompositeHome => {
            info!("Rendering Home page");
            html! { <Home on_navigate={on_navigate} /> }
        }
        RenderTarget::StandalonePage(StandalonePage::Services) => {
            info!("Rendering Services page");
            html! { <Services /> }
        }
        RenderTarget::StandalonePage(StandalonePage::Resources) => {
            info!("Rendering Resources page");
            html! { <Resources /> }
        }
    }
}

#[function_component]
fn App() -> Html {
    let nav = use_reducer(NavState::default);
    use_scroll_coordinator(&nav);

    let on_navigate = {
        let nav = nav.clone();
        Callback::from(move |page: Page| nav.dispatch(NavAction::Navigate(page)))
    };
    let on_navigate_key = {
        let nav = nav.clone();
        Callback::from(move |key: String| nav.dispatch(NavAction::NavigateKey(key)))
    };

    html! {
        <>
            <style>
                {r#"
                    html, body { margin: 0; padding: 0; }
                    body {
                        font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
                        background: #fdfbf7;
                        color: #0f172a;
                        -webkit-font-smoothing: antialiased;
                    }
                    *, *::before, *::after { box-sizing: border-box; }
                    button { font: inherit; }
                    .gradient-text {
                        background: linear-gradient(90deg, #8b5cf6, #ec4899, #fb923c);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    main { min-height: 100vh; }
                "#}
            </style>
            <Header current={nav.current} on_navigate={on_navigate.clone()} />
            <main>
                { render_page(nav.render_target(), on_navigate) }
            </main>
            <Footer on_navigate_key={on_navigate_key} />
        </>
    }
}

fn main() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    // Initialize logging
    let level = if cfg!(debug_assertions) { Level::Debug } else { Level::Info };
    console_log::init_with_level(level).expect("error initializing log");

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}
