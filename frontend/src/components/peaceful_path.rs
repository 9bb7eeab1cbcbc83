use web_sys::MouseEvent;
use yew::prelude::*;

use crate::animation::{use_scroll_progress, use_scroll_reveal};
use crate::config::PHONE_TEL;
use crate::navigation::Page;
use crate::site::{CareStep, CARE_STEPS};

#[derive(Properties, PartialEq)]
struct StepCardProps {
    step: CareStep,
    index: usize,
}

/// Slides in from alternating sides as it scrolls into view.
#[function_component(StepCard)]
fn step_card(props: &StepCardProps) -> Html {
    let node = use_node_ref();
    let progress = use_scroll_progress(node.clone(), 0.9, 0.5);
    let from_left = props.index % 2 == 0;
    let offset = (if from_left { -100.0 } else { 100.0 }) * (1.0 - progress);
    let rotate = (if from_left { -5.0 } else { 5.0 }) * (1.0 - progress);
    let style = format!(
        "opacity: {progress}; transform: translateX({offset}%) rotate({rotate}deg);"
    );

    html! {
        <div ref={node} class={classes!("path-row", (!from_left).then(|| "reverse"))}>
            <div class="path-card" style={style}>
                <span class="path-step">{format!("Step {:02}", props.index + 1)}</span>
                <h3>{props.step.title}</h3>
                <p>{props.step.description}</p>
            </div>
            <div class="path-node"></div>
            <div class="path-spacer"></div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct PeacefulPathProps {
    pub on_navigate: Callback<Page>,
}

#[function_component(PeacefulPath)]
pub fn peaceful_path(props: &PeacefulPathProps) -> Html {
    let container = use_node_ref();
    let end_marker = use_node_ref();
    let line_progress = use_scroll_progress(container.clone(), 0.2, -0.6);
    let cta_visible = use_scroll_reveal(end_marker.clone(), 0.5);

    let on_contact = {
        let on_navigate = props.on_navigate.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            on_navigate.emit(Page::Contact);
        })
    };

    html! {
        <section ref={container} class="peaceful-path">
            <style>
                {r#"
                    .peaceful-path { position: relative; overflow: hidden; padding: 8rem 1rem; background: #fdfbf7; }
                    .path-bloom {
                        position: absolute;
                        top: 50%;
                        left: 50%;
                        width: 80vw;
                        height: 80vw;
                        transform: translate(-50%, -50%);
                        border-radius: 50%;
                        filter: blur(120px);
                        pointer-events: none;
                        background: radial-gradient(circle, #8b5cf6 0%, transparent 70%);
                        opacity: 0.1;
                        animation: bloom 3s ease-in-out infinite alternate;
                    }
                    @keyframes bloom { to { opacity: 0.25; scale: 1.15; } }
                    .path-inner { position: relative; max-width: 64rem; margin: 0 auto; }
                    .path-heading { text-align: center; margin-bottom: 6rem; }
                    .path-heading h2 { font-family: Georgia, serif; font-size: 3rem; color: #0f172a; }
                    .path-heading p { color: #475569; font-size: 1.125rem; }
                    .path-line { position: absolute; left: 50%; top: 12rem; bottom: 8rem; width: 6px; transform: translateX(-50%); background: #f1f5f9; border-radius: 9999px; }
                    .path-line-fill { width: 100%; height: 100%; transform-origin: top; border-radius: 9999px; background: linear-gradient(180deg, #8b5cf6, #ec4899, #fb923c); }
                    .path-rows { display: flex; flex-direction: column; gap: 12rem; position: relative; }
                    .path-row { display: flex; align-items: center; justify-content: space-between; gap: 3rem; }
                    .path-row.reverse { flex-direction: row-reverse; }
                    .path-card { flex: 1; background: white; border-radius: 2rem; padding: 2.5rem; box-shadow: 0 20px 40px -15px rgba(0, 0, 0, 0.08); will-change: transform, opacity; }
                    .path-card h3 { font-family: Georgia, serif; font-size: 1.5rem; color: #0f172a; }
                    .path-card p { color: #64748b; }
                    .path-step { font-size: 0.7rem; font-weight: 800; letter-spacing: 0.3em; text-transform: uppercase; color: #a855f7; }
                    .path-node { width: 1.25rem; height: 1.25rem; border-radius: 50%; background: white; border: 4px solid #ec4899; z-index: 1; }
                    .path-spacer { flex: 1; }
                    .path-end-marker { height: 1px; }
                    .sticky-cta {
                        margin: 6rem auto 0;
                        max-width: 40rem;
                        text-align: center;
                        background: #0f172a;
                        color: white;
                        padding: 3rem;
                        border-radius: 2.5rem;
                        opacity: 0;
                        transform: translateY(50px);
                        transition: opacity 0.6s, transform 0.6s;
                    }
                    .sticky-cta.visible { opacity: 1; transform: none; }
                    .sticky-cta h3 { font-family: Georgia, serif; font-size: 2rem; }
                    .sticky-cta-actions { display: flex; justify-content: center; gap: 1rem; flex-wrap: wrap; margin-top: 1.5rem; }
                    .sticky-cta button, .sticky-cta a {
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        font-weight: 700;
                        cursor: pointer;
                        text-decoration: none;
                    }
                    .sticky-cta button { border: none; color: white; background: linear-gradient(90deg, #8b5cf6, #ec4899, #fb923c); }
                    .sticky-cta a { border: 1px solid rgba(255, 255, 255, 0.3); color: white; }
                    @media (max-width: 768px) {
                        .path-line, .path-node, .path-spacer { display: none; }
                        .path-row, .path-row.reverse { flex-direction: column; }
                        .path-rows { gap: 4rem; }
                    }
                "#}
            </style>
            <div class="path-bloom"></div>
            <div class="path-inner">
                <div class="path-heading">
                    <h2>{"The Peaceful Path"}</h2>
                    <p>{"A guided journey of care, tailored specifically for your family's needs."}</p>
                </div>

                <div class="path-line">
                    <div class="path-line-fill" style={format!("transform: scaleY({});", line_progress)}></div>
                </div>

                <div class="path-rows">
                    {
                        for CARE_STEPS.iter().enumerate().map(|(index, step)| html! {
                            <StepCard key={step.id} step={*step} index={index} />
                        })
                    }
                </div>

                <div ref={end_marker} class="path-end-marker"></div>
                <div class={classes!("sticky-cta", cta_visible.then(|| "visible"))}>
                    <h3>{"Ready to start your path?"}</h3>
                    <p>{"Talk with a care coordinator about the right mix of services."}</p>
                    <div class="sticky-cta-actions">
                        <button onclick={on_contact}>{"Request a Care Plan"}</button>
                        <a href={PHONE_TEL}>{"Call Now"}</a>
                    </div>
                </div>
            </div>
        </section>
    }
}
