use yew::prelude::*;

use crate::components::{
    about_section::AboutSection, contact_section::ContactSection, counter_bar::CounterBar,
    hero::Hero, peaceful_path::PeacefulPath, trust_ribbon::TrustRibbon,
    video_showcase::VideoShowcase,
};
use crate::config;
use crate::navigation::{Page, ABOUT_ANCHOR, CONTACT_ANCHOR, HOME_ANCHOR};
use crate::site::YEARS_IN_HEALTHCARE;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub on_navigate: Callback<Page>,
}

/// Home, About and Contact share this one view; navigation scrolls between
/// their anchors.
#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    html! {
        <div class="home-page">
            <style>
                {r#"
                    .testimonial { padding: 8rem 1.5rem; background: white; text-align: center; }
                    .testimonial blockquote {
                        max-width: 48rem;
                        margin: 0 auto;
                        font-family: Georgia, serif;
                        font-size: 1.75rem;
                        font-style: italic;
                        line-height: 1.5;
                        color: #334155;
                    }
                    .testimonial .quote-mark { font-size: 5rem; line-height: 1; }
                    .testimonial cite { display: block; margin-top: 2rem; font-style: normal; font-weight: 700; letter-spacing: 0.2em; text-transform: uppercase; font-size: 0.8rem; color: #64748b; }
                "#}
            </style>
            <div id={HOME_ANCHOR}>
                <Hero on_navigate={props.on_navigate.clone()} />
            </div>
            <TrustRibbon />
            <CounterBar target={YEARS_IN_HEALTHCARE} />
            <VideoShowcase />
            <div id="path-section">
                <PeacefulPath on_navigate={props.on_navigate.clone()} />
            </div>
            <div id={ABOUT_ANCHOR} style={config::anchor_style()}>
                <AboutSection />
            </div>
            <div id={CONTACT_ANCHOR} style={config::anchor_style()}>
                <ContactSection />
            </div>
            <section class="testimonial">
                <span class="quote-mark gradient-text">{"\u{201C}"}</span>
                <blockquote>
                    {"The caregivers treated my mother like family. For the first time in years, we could simply enjoy our time together instead of worrying."}
                </blockquote>
                <cite>{"Regina C."}</cite>
            </section>
        </div>
    }
}
