use yew::prelude::*;

use crate::components::icons::ExternalLinkIcon;
use crate::site::RESOURCES;

#[function_component(Resources)]
pub fn resources() -> Html {
    html! {
        <div class="resources-page">
            <style>
                {r#"
                    .resources-page { background: #fdfbf7; padding: 10rem 1.5rem 6rem; min-height: 70vh; }
                    .resources-hero { text-align: center; max-width: 48rem; margin: 0 auto 4rem; }
                    .resources-hero h1 { font-family: Georgia, serif; font-size: 3.5rem; color: #0f172a; margin-bottom: 1rem; }
                    .resources-hero p { font-size: 1.125rem; color: #475569; }
                    .resources-grid {
                        max-width: 64rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: repeat(auto-fit, minmax(20rem, 1fr));
                        gap: 2rem;
                    }
                    .resource-card {
                        display: flex;
                        flex-direction: column;
                        gap: 1rem;
                        padding: 2.5rem;
                        border-radius: 2rem;
                        background: white;
                        color: inherit;
                        text-decoration: none;
                        border: 1px solid #f1f5f9;
                        box-shadow: 0 20px 40px -15px rgba(0, 0, 0, 0.08);
                        transition: transform 0.3s, box-shadow 0.3s;
                    }
                    .resource-card:hover { transform: translateY(-6px); box-shadow: 0 30px 60px -20px rgba(0, 0, 0, 0.15); }
                    .resource-bar { height: 6px; width: 4rem; border-radius: 9999px; }
                    .resource-card h3 { font-family: Georgia, serif; font-size: 1.6rem; color: #0f172a; margin: 0; }
                    .resource-card p { color: #64748b; line-height: 1.6; margin: 0; flex: 1; }
                    .resource-visit { display: inline-flex; align-items: center; gap: 0.5rem; font-weight: 700; color: #7c3aed; }
                    .resource-visit .icon { width: 1rem; height: 1rem; }
                "#}
            </style>
            <div class="resources-hero">
                <h1>{"Helpful "}<span class="gradient-text">{"Resources"}</span></h1>
                <p>{"Trusted Indiana organizations that support families, seniors and caregivers."}</p>
            </div>
            <div class="resources-grid">
                { for RESOURCES.iter().map(|resource| html! {
                    <a
                        key={resource.link}
                        class="resource-card"
                        href={resource.link}
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        <div class="resource-bar" style={format!("background: {};", resource.gradient)}></div>
                        <h3>{resource.title}</h3>
                        <p>{resource.description}</p>
                        <span class="resource-visit">
                            {"Visit Website"}
                            <ExternalLinkIcon />
                        </span>
                    </a>
                }) }
            </div>
        </div>
    }
}
