use yew::prelude::*;

use crate::site::YEARS_IN_HEALTHCARE;

const REPEATS: usize = 8;

/// Endless marquee. The track holds two identical halves and slides by -50%,
/// so the loop point is invisible.
#[function_component(TrustRibbon)]
pub fn trust_ribbon() -> Html {
    let item = |half: &'static str, idx: usize| html! {
        <div class="ribbon-item" key={format!("{}-{}", half, idx)}>
            <span>{format!("Over {} Years in Healthcare", YEARS_IN_HEALTHCARE)}</span>
            <div class="ribbon-dot"></div>
        </div>
    };

    html! {
        <div class="trust-ribbon">
            <style>
                {r#"
                    .trust-ribbon {
                        position: relative;
                        overflow: hidden;
                        background: #0f172a;
                        border-top: 1px solid rgba(255, 255, 255, 0.1);
                        border-bottom: 1px solid rgba(255, 255, 255, 0.1);
                        padding: 1rem 0;
                    }
                    .ribbon-track {
                        display: flex;
                        width: 200%;
                        white-space: nowrap;
                        animation: ribbonScroll 20s linear infinite;
                    }
                    .ribbon-half { display: flex; width: 50%; justify-content: space-around; }
                    .ribbon-item { display: flex; align-items: center; gap: 3rem; padding: 0 1.5rem; }
                    .ribbon-item span {
                        color: rgba(255, 255, 255, 0.9);
                        font-weight: 700;
                        letter-spacing: 0.2em;
                        text-transform: uppercase;
                        font-size: 0.9rem;
                    }
                    .ribbon-dot { width: 6px; height: 6px; border-radius: 50%; background: #fb923c; }
                    @keyframes ribbonScroll { to { transform: translateX(-50%); } }
                    @media (prefers-reduced-motion: reduce) { .ribbon-track { animation: none; } }
                "#}
            </style>
            <div class="ribbon-track">
                <div class="ribbon-half">{ for (0..REPEATS).map(|i| item("a", i)) }</div>
                <div class="ribbon-half">{ for (0..REPEATS).map(|i| item("b", i)) }</div>
            </div>
        </div>
    }
}
