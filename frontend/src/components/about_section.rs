use yew::prelude::*;

use crate::animation::use_scroll_progress;
use crate::config::BUSINESS_NAME;
use crate::site::PAYMENT_OPTIONS;

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let image = use_node_ref();
    let text = use_node_ref();
    let image_progress = use_scroll_progress(image.clone(), 0.85, 0.4);
    let text_progress = use_scroll_progress(text.clone(), 0.8, 0.4);

    let image_style = format!(
        "opacity: {}; transform: translateY({}px) scale({});",
        image_progress,
        80.0 * (1.0 - image_progress),
        0.9 + 0.1 * image_progress
    );
    // Children trail the block by a fixed stagger.
    let stagger = |index: usize| {
        let p = (text_progress * 1.6 - index as f64 * 0.2).clamp(0.0, 1.0);
        format!("opacity: {}; transform: translateY({}px);", p, 60.0 * (1.0 - p))
    };

    html! {
        <section class="about-section">
            <style>
                {r#"
                    .about-section { padding: 8rem 1.5rem; background: white; overflow: hidden; border-top: 1px solid #f8fafc; }
                    .about-grid { max-width: 80rem; margin: 0 auto; display: grid; grid-template-columns: 1fr 1fr; gap: 5rem; align-items: center; }
                    .about-image { position: relative; will-change: transform, opacity; }
                    .about-image-frame {
                        aspect-ratio: 1.5 / 1;
                        border-radius: 2.5rem;
                        overflow: hidden;
                        border: 8px solid white;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                    }
                    .about-image-frame img { width: 100%; height: 100%; object-fit: cover; filter: grayscale(0.2); transition: filter 1s; }
                    .about-image-frame img:hover { filter: none; }
                    .about-badge {
                        position: absolute;
                        bottom: -2.5rem;
                        right: -1.5rem;
                        width: 12rem;
                        height: 12rem;
                        border-radius: 50%;
                        background: #0f172a;
                        color: white;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        transform: rotate(6deg);
                        transition: transform 0.7s;
                    }
                    .about-image:hover .about-badge { transform: rotate(0); }
                    .about-badge .label { font-size: 0.65rem; letter-spacing: 0.2em; text-transform: uppercase; opacity: 0.6; }
                    .about-badge .year { font-family: Georgia, serif; font-size: 2rem; font-weight: 700; }
                    .about-badge .motto { font-family: Georgia, serif; font-size: 0.65rem; font-style: italic; color: #22d3ee; }
                    .about-text > * { will-change: transform, opacity; }
                    .about-text h2 { font-family: Georgia, serif; font-size: 3.5rem; color: #0f172a; line-height: 1.1; }
                    .about-rule { height: 6px; width: 6rem; border-radius: 9999px; background: linear-gradient(90deg, #8b5cf6, #ec4899, #fb923c); }
                    .about-lead { font-size: 1.25rem; color: #475569; line-height: 1.7; font-weight: 300; }
                    .about-features { display: grid; grid-template-columns: 1fr 1fr; gap: 2rem; }
                    .about-features h4 { font-size: 1.125rem; color: #0f172a; margin: 0.5rem 0; }
                    .about-features p { font-size: 0.875rem; color: #64748b; }
                    .about-payments { padding-top: 2.5rem; border-top: 1px solid #f1f5f9; }
                    .about-payments .caption { font-size: 0.65rem; letter-spacing: 0.3em; font-weight: 800; color: #94a3b8; text-transform: uppercase; }
                    .payment-tags { display: flex; flex-wrap: wrap; gap: 1rem; }
                    .payment-tag { padding: 0.6rem 1.25rem; background: #f8fafc; color: #334155; font-size: 0.75rem; font-weight: 700; border-radius: 0.75rem; border: 1px solid rgba(226, 232, 240, 0.5); }
                    @media (max-width: 1024px) {
                        .about-grid { grid-template-columns: 1fr; }
                        .about-text h2 { font-size: 2.5rem; }
                    }
                "#}
            </style>
            <div class="about-grid">
                <div ref={image} class="about-image" style={image_style}>
                    <div class="about-image-frame">
                        <img
                            src="https://images.unsplash.com/photo-1573497620053-ea5310f94a17?auto=format&fit=crop&q=80&w=1200"
                            alt="Compassionate Home Care Journey"
                            loading="lazy"
                        />
                    </div>
                    <div class="about-badge">
                        <span class="label">{"Established"}</span>
                        <span class="year">{"2024"}</span>
                        <span class="motto">{"A Peaceful Life"}</span>
                    </div>
                </div>

                <div ref={text} class="about-text">
                    <div style={stagger(0)}>
                        <h2>{"A Tradition of "}<span class="gradient-text">{"Trust"}</span></h2>
                        <div class="about-rule"></div>
                    </div>
                    <p class="about-lead" style={stagger(1)}>
                        {format!("At {}, we are passionate about providing high-quality care and support to our clients and their families. Our team is professional, reliable, and ready to assist you every step of the way.", BUSINESS_NAME)}
                    </p>
                    <div class="about-features" style={stagger(2)}>
                        <div>
                            <h4>{"Personalized Support"}</h4>
                            <p>{"Every plan is as unique as the heart it serves."}</p>
                        </div>
                        <div>
                            <h4>{"Home Comfort"}</h4>
                            <p>{"Ensuring safety and independence in your cherished home."}</p>
                        </div>
                    </div>
                    <div class="about-payments" style={stagger(3)}>
                        <p class="caption">{"We Proudly Accept"}</p>
                        <div class="payment-tags">
                            { for PAYMENT_OPTIONS.iter().map(|option| html! {
                                <span key={*option} class="payment-tag">{*option}</span>
                            }) }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
