use web_sys::MouseEvent;
use yew::prelude::*;

use crate::components::icons::PhoneIcon;
use crate::config::{PHONE_DISPLAY, PHONE_TEL};
use crate::site::{ServiceCard, SERVICE_CARDS};

#[derive(Properties, PartialEq)]
struct ServiceCardProps {
    card: ServiceCard,
}

#[function_component(ServiceCardView)]
fn service_card(props: &ServiceCardProps) -> Html {
    let is_flipped = use_state(|| false);
    let is_hovered = use_state(|| false);
    let card = props.card;

    let toggle = {
        let is_flipped = is_flipped.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_flipped.set(!*is_flipped);
        })
    };
    let on_enter = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(true))
    };
    let on_leave = {
        let is_hovered = is_hovered.clone();
        Callback::from(move |_: MouseEvent| is_hovered.set(false))
    };
    // The call link sits on the flippable face; don't flip back when it's used.
    let on_call = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class={classes!(
                "service-card",
                (*is_flipped).then(|| "flipped"),
                (*is_hovered).then(|| "hovered"),
            )}
            style={format!("--accent: {};", card.accent)}
            onclick={toggle}
            onmouseenter={on_enter}
            onmouseleave={on_leave}
        >
            <div class="service-card-inner">
                <div class="service-face front">
                    <div class="service-icon" style={format!("background: {};", card.gradient)}>
                        {card.icon}
                    </div>
                    <h3>{card.title}</h3>
                    <p class="service-subtitle">{card.subtitle}</p>
                    <p class="service-description">{card.description}</p>
                    <span class="service-hint">{"Tap to learn more"}</span>
                </div>
                <div class="service-face back" style={format!("background: {};", card.gradient)}>
                    <h3>{card.title}</h3>
                    <p>{format!("Ready to learn more about our {} services?", card.title)}</p>
                    <a class="service-call" href={PHONE_TEL} onclick={on_call}>
                        <PhoneIcon />
                        <span>{format!("Call {}", PHONE_DISPLAY)}</span>
                    </a>
                </div>
            </div>
        </div>
    }
}

#[function_component(Services)]
pub fn services() -> Html {
    html! {
        <div class="services-page">
            <style>
                {r#"
                    .services-page { background: #fdfbf7; padding: 10rem 1.5rem 6rem; }
                    .services-hero { text-align: center; max-width: 48rem; margin: 0 auto 5rem; }
                    .services-hero .eyebrow { font-size: 0.7rem; font-weight: 800; letter-spacing: 0.3em; text-transform: uppercase; color: #a855f7; }
                    .services-hero h1 { font-family: Georgia, serif; font-size: 3.5rem; color: #0f172a; margin: 1rem 0; }
                    .services-hero p { font-size: 1.125rem; color: #475569; }
                    .services-grid {
                        max-width: 80rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fill, minmax(20rem, 1fr));
                        gap: 2rem;
                    }
                    .service-card { perspective: 1200px; height: 26rem; cursor: pointer; }
                    .service-card-inner {
                        position: relative;
                        width: 100%;
                        height: 100%;
                        transition: transform 0.7s cubic-bezier(0.4, 0.2, 0.2, 1);
                        transform-style: preserve-3d;
                    }
                    .service-card.hovered .service-card-inner { transform: translateY(-8px); }
                    .service-card.flipped .service-card-inner { transform: rotateY(180deg); }
                    .service-face {
                        position: absolute;
                        inset: 0;
                        backface-visibility: hidden;
                        border-radius: 2rem;
                        padding: 2.5rem;
                        display: flex;
                        flex-direction: column;
                    }
                    .service-face.front {
                        background: white;
                        border: 1px solid #f1f5f9;
                        box-shadow: 0 20px 40px -15px rgba(0, 0, 0, 0.08);
                        transition: box-shadow 0.4s, border-color 0.4s;
                    }
                    .service-card.hovered .service-face.front { border-color: var(--accent); box-shadow: 0 30px 60px -20px var(--accent); }
                    .service-face.back {
                        transform: rotateY(180deg);
                        color: white;
                        justify-content: center;
                        align-items: center;
                        text-align: center;
                    }
                    .service-icon {
                        width: 4rem;
                        height: 4rem;
                        border-radius: 1.25rem;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        font-size: 2rem;
                    }
                    .service-face h3 { font-family: Georgia, serif; font-size: 1.6rem; margin: 1.5rem 0 0.25rem; }
                    .service-face.front h3 { color: #0f172a; }
                    .service-subtitle { font-size: 0.8rem; font-weight: 700; letter-spacing: 0.1em; text-transform: uppercase; color: var(--accent); }
                    .service-description { color: #64748b; line-height: 1.6; flex: 1; }
                    .service-hint { font-size: 0.75rem; color: #94a3b8; }
                    .service-call {
                        display: inline-flex;
                        align-items: center;
                        gap: 0.6rem;
                        margin-top: 1.5rem;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        background: white;
                        color: #0f172a;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    .service-call .icon { width: 1.25rem; height: 1.25rem; }
                    @media (max-width: 768px) {
                        .services-hero h1 { font-size: 2.5rem; }
                    }
                "#}
            </style>
            <div class="services-hero">
                <span class="eyebrow">{"What We Offer"}</span>
                <h1>{"Care Designed Around "}<span class="gradient-text">{"Your Life"}</span></h1>
                <p>{"From a few hours of companionship to full daily living support, every service is delivered by trained, compassionate caregivers."}</p>
            </div>
            <div class="services-grid">
                { for SERVICE_CARDS.iter().map(|card| html! {
                    <ServiceCardView key={card.id} card={*card} />
                }) }
            </div>
        </div>
    }
}
