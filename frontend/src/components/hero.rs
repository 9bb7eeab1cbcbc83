use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::LogoIcon;
use crate::config::{BUSINESS_NAME, PHONE_DISPLAY, PHONE_TEL};
use crate::navigation::Page;

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let on_cta = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Contact);
        })
    };

    html! {
        <section class="hero">
            <style>
                {r#"
                    .hero {
                        position: relative;
                        overflow: hidden;
                        padding: 3rem 1.5rem 8rem;
                        background: white;
                        text-align: center;
                    }
                    .hero-glow {
                        position: absolute;
                        width: 50%;
                        height: 50%;
                        border-radius: 50%;
                        filter: blur(120px);
                    }
                    .hero-glow.top { top: -10%; left: -10%; background: rgba(243, 232, 255, 0.5); }
                    .hero-glow.bottom { bottom: -10%; right: -10%; background: rgba(255, 247, 237, 0.6); }
                    .hero-logo { width: 100%; max-width: 700px; margin: 0 auto; }
                    .hero-logo .logo-icon { width: 100%; height: auto; }
                    .hero-logo path {
                        stroke-dasharray: 1200;
                        stroke-dashoffset: 1200;
                        animation: drawPath 3.5s cubic-bezier(0.16, 1, 0.3, 1) forwards;
                    }
                    .hero-logo path:nth-of-type(2) { animation-delay: 0.2s; }
                    .hero-logo path:nth-of-type(3) { animation-delay: 0.4s; }
                    .hero-logo path:nth-of-type(n+4) { animation-delay: 0.6s; }
                    .hero-logo .logo-heart {
                        transform-origin: center 70%;
                        animation: drawPath 3.5s cubic-bezier(0.16, 1, 0.3, 1) forwards, breathe 3s ease-in-out 3.5s infinite alternate;
                    }
                    @keyframes drawPath { to { stroke-dashoffset: 0; } }
                    @keyframes breathe { to { scale: 1.05; } }
                    .hero-animate-in {
                        opacity: 0;
                        animation: riseIn 1s cubic-bezier(0.22, 1, 0.36, 1) forwards;
                    }
                    .hero-animate-in:nth-child(1) { animation-delay: 1.5s; }
                    .hero-animate-in:nth-child(2) { animation-delay: 1.65s; }
                    .hero-animate-in:nth-child(3) { animation-delay: 1.8s; }
                    .hero-animate-in:nth-child(4) { animation-delay: 1.95s; }
                    @keyframes riseIn {
                        from { opacity: 0; transform: translateY(30px); }
                        to { opacity: 1; transform: translateY(0); }
                    }
                    .hero-brand {
                        font-family: Georgia, serif;
                        font-size: 3rem;
                        letter-spacing: 0.25em;
                        color: #423a5a;
                        text-transform: uppercase;
                        margin: 1.5rem 0 0.5rem;
                    }
                    .hero-motto { font-family: Georgia, serif; font-style: italic; font-size: 1.75rem; color: #00a3cc; }
                    .hero h1 { font-family: Georgia, serif; font-size: 4rem; color: #0f172a; line-height: 1.15; max-width: 48rem; margin: 3rem auto 2rem; }
                    .hero-lead { font-size: 1.25rem; color: #475569; max-width: 42rem; margin: 0 auto; line-height: 1.7; }
                    .hero-actions { display: flex; flex-wrap: wrap; gap: 1.5rem; justify-content: center; padding-top: 2.5rem; }
                    .hero-cta, .hero-call {
                        padding: 1.25rem 3rem;
                        border-radius: 9999px;
                        font-weight: 700;
                        text-decoration: none;
                        cursor: pointer;
                        transition: transform 0.2s;
                    }
                    .hero-cta { color: white; border: none; background: linear-gradient(90deg, #8b5cf6, #ec4899, #fb923c); box-shadow: 0 25px 50px -12px rgba(139, 92, 246, 0.35); }
                    .hero-cta:hover { transform: translateY(-4px); }
                    .hero-call { border: 2px solid #f1f5f9; color: #1e293b; background: white; }
                    .hero-call:hover { background: #f8fafc; }
                    @media (max-width: 768px) {
                        .hero h1 { font-size: 2.25rem; }
                        .hero-brand { font-size: 1.5rem; }
                    }
                "#}
            </style>
            <div class="hero-glow top"></div>
            <div class="hero-glow bottom"></div>

            <div class="hero-logo">
                <LogoIcon id="hero-primary-logo" />
            </div>
            <div>
                <h2 class="hero-animate-in hero-brand">{"Peaceful Living Home Care"}</h2>
                <p class="hero-animate-in hero-motto">{"Home is Where the Heart Is"}</p>
                <h1 class="hero-animate-in">
                    {"Your Loved One's Health is "}
                    <span class="gradient-text">{"Our Priority"}</span>
                </h1>
                <div class="hero-animate-in">
                    <p class="hero-lead">
                        {format!("At {}, we deliver exceptional in-home care services, providing personalized support that brings peace of mind to families.", BUSINESS_NAME)}
                    </p>
                    <div class="hero-actions">
                        <button class="hero-cta" onclick={on_cta}>{"Get Your Care Plan"}</button>
                        <a href={PHONE_TEL} class="hero-call">{format!("Call {}", PHONE_DISPLAY)}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
