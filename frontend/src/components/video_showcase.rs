use yew::prelude::*;

use crate::animation::use_scroll_reveal;

#[function_component(VideoShowcase)]
pub fn video_showcase() -> Html {
    let section = use_node_ref();
    let visible = use_scroll_reveal(section.clone(), 0.8);

    html! {
        <section ref={section} class="video-showcase">
            <style>
                {r#"
                    .video-showcase { position: relative; overflow: hidden; padding: 6rem 1rem; background: #fdfbf7; text-align: center; }
                    .video-showcase h2 { font-family: Georgia, serif; font-size: 3rem; color: #0f172a; margin-bottom: 1.5rem; }
                    .video-showcase > p { font-size: 1.125rem; color: #475569; max-width: 42rem; margin: 0 auto 3rem; }
                    .video-frame {
                        max-width: 64rem;
                        margin: 0 auto;
                        aspect-ratio: 16 / 9;
                        border-radius: 1.5rem;
                        overflow: hidden;
                        background: #0f172a;
                        border: 1px solid #e2e8f0;
                        box-shadow: 0 25px 50px -12px rgba(0, 0, 0, 0.25);
                        opacity: 0;
                        transform: translateY(20px) scale(0.95);
                        transition: opacity 1s ease-out, transform 1s ease-out;
                    }
                    .video-frame.visible { opacity: 1; transform: none; }
                    .video-frame video { width: 100%; height: 100%; object-fit: cover; }
                "#}
            </style>
            <h2>{"Discover Compassionate Care"}</h2>
            <p>{"See how we bring peace and comfort to your loved ones' lives through our dedicated service."}</p>
            <div class={classes!("video-frame", visible.then(|| "visible"))}>
                <video controls=true playsinline=true poster="/assets/video_thumbnail_brand.png" src="/assets/marketing-intro.mp4">
                    {"Your browser does not support the video tag."}
                </video>
            </div>
        </section>
    }
}
