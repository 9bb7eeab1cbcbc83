use gloo_console::log;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::icons::{MailIcon, PhoneIcon};
use crate::config::{self, CAREERS_LINK, EMAIL, PHONE_DISPLAY, PHONE_TEL};
use crate::contact::{
    submit_action, ContactSubmission, DraftAction, Field, FormAction, FormState, FormStatus,
};
use crate::form_backend::submit_contact;

fn event_value(e: &InputEvent) -> String {
    if let Some(input) = e.target_dyn_into::<HtmlInputElement>() {
        input.value()
    } else if let Some(area) = e.target_dyn_into::<HtmlTextAreaElement>() {
        area.value()
    } else {
        String::new()
    }
}

fn field_errors(form: &FormState, field: Field) -> Html {
    html! {
        { for form.errors_for(field).map(|error| html! {
            <p class="field-error">{error.message.clone()}</p>
        }) }
    }
}

/// Three side-by-side panels: the contact form, careers, and direct lines.
#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let draft = use_reducer(ContactSubmission::default);
    let form = use_reducer(FormState::default);
    let configured = config::form_id().is_some();

    let on_input = |field: Field| {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            draft.dispatch(DraftAction::Set(field, event_value(&e)));
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let form = form.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if form.is_sending() {
                return;
            }
            let action = submit_action(&draft);
            let send = matches!(action, FormAction::Submit);
            form.dispatch(action);
            if !send {
                log!("Contact form has missing or invalid fields");
                return;
            }

            let submission = (*draft).clone();
            let form = form.clone();
            spawn_local(async move {
                let endpoint = config::form_endpoint();
                let result = submit_contact(endpoint.as_deref(), &submission).await;
                match &result {
                    Ok(()) => log!("Contact request sent"),
                    Err(e) => log!("Contact request failed:", e.to_string()),
                }
                form.dispatch(FormAction::from(result));
            });
        })
    };

    let on_send_another = {
        let draft = draft.clone();
        let form = form.clone();
        Callback::from(move |_: MouseEvent| {
            draft.dispatch(DraftAction::Clear);
            form.dispatch(FormAction::Reset);
        })
    };

    let sending = form.is_sending();

    let form_panel = if form.status == FormStatus::Success {
        html! {
            <div class="contact-success">
                <h3>{"Thank you!"}</h3>
                <p>{"We received your message and will reach out shortly."}</p>
                <button type="button" class="contact-secondary" onclick={on_send_another}>
                    {"Send another"}
                </button>
            </div>
        }
    } else {
        html! {
            <form class="contact-form" onsubmit={onsubmit}>
                if let FormStatus::Failed(message) = &form.status {
                    <div class="form-banner failed">
                        <p>{message.clone()}</p>
                        <p>{"Please try again, or call us directly."}</p>
                    </div>
                }
                { for form.form_errors().map(|error| html! {
                    <div class="form-banner">{error.message.clone()}</div>
                }) }
                <label>
                    <span>{"Full Name"}</span>
                    <input
                        type="text"
                        name="name"
                        required={true}
                        value={draft.name.clone()}
                        oninput={on_input(Field::Name)}
                    />
                    { field_errors(&form, Field::Name) }
                </label>
                <div class="contact-row">
                    <label>
                        <span>{"Email"}</span>
                        <input
                            type="email"
                            name="email"
                            required={true}
                            value={draft.email.clone()}
                            oninput={on_input(Field::Email)}
                        />
                        { field_errors(&form, Field::Email) }
                    </label>
                    <label>
                        <span>{"Phone"}</span>
                        <input
                            type="tel"
                            name="phone"
                            required={true}
                            value={draft.phone.clone()}
                            oninput={on_input(Field::Phone)}
                        />
                        { field_errors(&form, Field::Phone) }
                    </label>
                </div>
                <label>
                    <span>{"How can we help?"}</span>
                    <textarea
                        name="message"
                        rows="4"
                        required={true}
                        value={draft.message.clone()}
                        oninput={on_input(Field::Message)}
                    />
                    { field_errors(&form, Field::Message) }
                </label>
                if !configured {
                    <p class="form-notice">
                        {format!("Online requests are unavailable right now. Call {} instead.", PHONE_DISPLAY)}
                    </p>
                }
                <button type="submit" class="contact-submit" disabled={sending || !configured}>
                    { if sending { "Sending..." } else { "Send Message" } }
                </button>
            </form>
        }
    };

    html! {
        <section class="contact-section">
            <style>
                {r#"
                    .contact-section { background: #fdfbf7; padding: 6rem 0; }
                    .contact-heading { text-align: center; padding: 0 1.5rem 3rem; }
                    .contact-heading h2 { font-family: Georgia, serif; font-size: 3rem; color: #0f172a; }
                    .contact-heading p { color: #475569; }
                    .contact-panels {
                        display: flex;
                        gap: 2rem;
                        padding: 0 1.5rem 1.5rem;
                        overflow-x: auto;
                        scroll-snap-type: x mandatory;
                    }
                    .contact-panel {
                        flex: 0 0 min(90vw, 36rem);
                        scroll-snap-align: center;
                        background: white;
                        border-radius: 2rem;
                        padding: 2.5rem;
                        box-shadow: 0 20px 40px -15px rgba(0, 0, 0, 0.08);
                    }
                    .contact-panel h3 { font-family: Georgia, serif; font-size: 1.75rem; color: #0f172a; margin-top: 0; }
                    .contact-form { display: flex; flex-direction: column; gap: 1.25rem; }
                    .contact-form label { display: flex; flex-direction: column; gap: 0.4rem; flex: 1; }
                    .contact-form label span { font-size: 0.75rem; font-weight: 700; letter-spacing: 0.1em; text-transform: uppercase; color: #64748b; }
                    .contact-form input, .contact-form textarea {
                        padding: 0.9rem 1rem;
                        border: 1px solid #e2e8f0;
                        border-radius: 0.75rem;
                        font: inherit;
                        background: #f8fafc;
                    }
                    .contact-form input:focus, .contact-form textarea:focus { outline: 2px solid #a855f7; background: white; }
                    .contact-row { display: flex; gap: 1rem; flex-wrap: wrap; }
                    .field-error { color: #dc2626; font-size: 0.8rem; margin: 0; }
                    .form-banner { background: #fef2f2; color: #b91c1c; border-radius: 0.75rem; padding: 0.75rem 1rem; font-size: 0.9rem; }
                    .form-banner p { margin: 0.2rem 0; }
                    .form-notice { color: #92400e; background: #fffbeb; border-radius: 0.75rem; padding: 0.75rem 1rem; font-size: 0.9rem; }
                    .contact-submit {
                        padding: 1rem 2rem;
                        border: none;
                        border-radius: 9999px;
                        color: white;
                        font-weight: 700;
                        cursor: pointer;
                        background: linear-gradient(90deg, #8b5cf6, #ec4899, #fb923c);
                    }
                    .contact-submit:disabled { opacity: 0.6; cursor: not-allowed; }
                    .contact-secondary { padding: 0.8rem 1.8rem; border-radius: 9999px; border: 1px solid #cbd5e1; background: white; cursor: pointer; font-weight: 600; }
                    .contact-success { text-align: center; padding: 3rem 0; }
                    .contact-success h3 { font-size: 2rem; }
                    .contact-panel.dark { background: #0f172a; color: white; }
                    .contact-panel.dark h3 { color: white; }
                    .contact-panel.dark p { color: #cbd5e1; }
                    .careers-link {
                        display: inline-block;
                        margin-top: 1.5rem;
                        padding: 1rem 2rem;
                        border-radius: 9999px;
                        background: white;
                        color: #0f172a;
                        font-weight: 700;
                        text-decoration: none;
                    }
                    .direct-line {
                        display: flex;
                        align-items: center;
                        gap: 1rem;
                        padding: 1.25rem;
                        margin-bottom: 1rem;
                        border-radius: 1rem;
                        background: #f8fafc;
                        color: #0f172a;
                        text-decoration: none;
                        font-weight: 600;
                    }
                    .direct-line .icon { width: 1.5rem; height: 1.5rem; color: #a855f7; }
                "#}
            </style>
            <div class="contact-heading">
                <h2>{"Let's "}<span class="gradient-text">{"Talk"}</span></h2>
                <p>{"Reach out for a free consultation. We respond within one business day."}</p>
            </div>
            <div class="contact-panels">
                <div class="contact-panel">
                    <h3>{"Send us a message"}</h3>
                    { form_panel }
                </div>
                <div class="contact-panel dark">
                    <h3>{"Join Our Team"}</h3>
                    <p>{"We are always looking for caring, dependable people to support families across Indiana."}</p>
                    <a class="careers-link" href={CAREERS_LINK} target="_blank" rel="noopener noreferrer">
                        {"View Open Positions"}
                    </a>
                </div>
                <div class="contact-panel">
                    <h3>{"Reach Us Directly"}</h3>
                    <a class="direct-line" href={PHONE_TEL}>
                        <PhoneIcon />
                        <span>{PHONE_DISPLAY}</span>
                    </a>
                    <a class="direct-line" href={format!("mailto:{}", EMAIL)}>
                        <MailIcon />
                        <span>{EMAIL}</span>
                    </a>
                    <p>{"Available 24/7 for urgent care needs."}</p>
                </div>
            </div>
        </section>
    }
}
