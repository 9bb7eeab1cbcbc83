use yew::prelude::*;

use crate::animation::{use_count_up, use_scroll_reveal};

const COUNT_UP_MS: u32 = 1500;

#[derive(Properties, PartialEq)]
pub struct CounterBarProps {
    pub target: u32,
    #[prop_or(AttrValue::Static("Years of Compassionate Care"))]
    pub label: AttrValue,
}

/// Slides up and counts to `target` the first time it scrolls into view.
#[function_component(CounterBar)]
pub fn counter_bar(props: &CounterBarProps) -> Html {
    let node = use_node_ref();
    let in_view = use_scroll_reveal(node.clone(), 0.7);
    // Latches: scrolling back up must not restart the count.
    let has_animated = use_state_eq(|| false);
    {
        let has_animated = has_animated.clone();
        use_effect_with_deps(
            move |in_view| {
                if *in_view {
                    has_animated.set(true);
                }
                || ()
            },
            in_view,
        );
    }
    let count = use_count_up(props.target, COUNT_UP_MS, *has_animated);

    html! {
        <div ref={node} class={classes!("counter-bar", (*has_animated).then(|| "visible"))}>
            <style>
                {r#"
                    .counter-bar {
                        overflow: hidden;
                        opacity: 0;
                        transform: translateY(100%);
                        transition: opacity 0.7s ease-out, transform 0.7s ease-out;
                    }
                    .counter-bar.visible { opacity: 1; transform: translateY(0); }
                    .counter-inner {
                        position: relative;
                        display: flex;
                        flex-wrap: wrap;
                        align-items: center;
                        justify-content: center;
                        gap: 1.5rem;
                        padding: 1.5rem 2rem;
                        background: linear-gradient(90deg, #8b5cf6, #ec4899, #fb923c);
                        color: white;
                    }
                    .counter-bar.visible .counter-inner::before {
                        content: '';
                        position: absolute;
                        inset: 0;
                        background: linear-gradient(90deg, transparent, rgba(255, 255, 255, 0.2), transparent);
                        background-size: 200% 100%;
                        animation: shimmer 2.5s linear infinite;
                    }
                    @keyframes shimmer { from { background-position: 200% 0; } to { background-position: -200% 0; } }
                    .counter-number {
                        font-family: Georgia, serif;
                        font-size: 4rem;
                        font-weight: 700;
                        min-width: 100px;
                        display: inline-block;
                        text-shadow: 0 4px 20px rgba(0, 0, 0, 0.3);
                    }
                    .counter-plus { font-size: 2.5rem; font-weight: 700; opacity: 0.8; }
                    .counter-label { font-size: 1.5rem; font-weight: 500; }
                    .counter-sub { display: block; font-size: 1rem; font-style: italic; opacity: 0.7; }
                "#}
            </style>
            <div class="counter-inner">
                <div>
                    <span class="counter-number">{count}</span>
                    <span class="counter-plus">{"+"}</span>
                </div>
                <div class="counter-label">
                    {props.label.clone()}
                    <span class="counter-sub">{"Trusted by families across Indiana"}</span>
                </div>
            </div>
        </div>
    }
}
