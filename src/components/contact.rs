use gloo_console::error;
use gloo_net::http::Request;
use serde::Deserialize;
use wasm_bindgen_futures::spawn_local;
use web_sys::{FormData, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::modal::Notice;
use crate::config;
use crate::validate::{self, ContactData, FieldErrors};

const PROJECT_TYPES: &[&str] = &[
    "IoT Automation",
    "AI & Machine Learning",
    "RFID Systems",
    "Web Development",
    "Embedded Systems",
    "Other",
];

#[derive(Deserialize)]
struct RelayResponse {
    success: bool,
    #[serde(default)]
    message: Option<String>,
}

/// One best-effort POST of the form fields to the relay. Any transport
/// failure, non-JSON body or non-success flag collapses into `Err`.
async fn submit(data: &ContactData) -> Result<(), String> {
    let form = FormData::new().map_err(|_| "form data unavailable".to_string())?;
    for (key, value) in [
        ("access_key", config::get_form_access_key()),
        ("name", data.name.as_str()),
        ("email", data.email.as_str()),
        ("phone", data.phone.as_str()),
        ("project-type", data.project_type.as_str()),
        ("message", data.message.as_str()),
    ] {
        form.append_with_str(key, value)
            .map_err(|_| format!("could not append field {}", key))?;
    }

    let response = Request::post(config::FORM_ENDPOINT)
        .body(form)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    let parsed: RelayResponse = response.json().await.map_err(|e| e.to_string())?;
    if parsed.success {
        Ok(())
    } else {
        Err(parsed.message.unwrap_or_else(|| "Submission failed".to_string()))
    }
}

#[derive(Properties, PartialEq)]
pub struct ContactFormProps {
    pub on_notify: Callback<Notice>,
}

#[function_component(ContactForm)]
pub fn contact_form(props: &ContactFormProps) -> Html {
    let data = use_state(ContactData::default);
    let errors = use_state(FieldErrors::default);
    let sending = use_state(|| false);

    let onsubmit = {
        let data = data.clone();
        let errors = errors.clone();
        let sending = sending.clone();
        let on_notify = props.on_notify.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *sending {
                return;
            }

            let current = (*data).clone();
            let checked = validate::validate(&current);
            if !checked.is_valid() {
                errors.set(checked);
                on_notify.emit(Notice::new(
                    "❌ Validation Error",
                    "Please correct the highlighted errors and try again.",
                ));
                return;
            }
            errors.set(FieldErrors::default());
            sending.set(true);

            let data = data.clone();
            let sending = sending.clone();
            let on_notify = on_notify.clone();
            spawn_local(async move {
                match submit(&current).await {
                    Ok(()) => {
                        on_notify.emit(Notice::new(
                            "✅ Message Sent!",
                            format!(
                                "Thank you {}! We have received your {} inquiry and will respond within 24 hours.",
                                current.name, current.project_type
                            ),
                        ));
                        data.set(ContactData::default());
                    }
                    Err(err) => {
                        error!("Form submission failed:", err);
                        on_notify.emit(Notice::new(
                            "❌ Submission Failed",
                            "An error occurred while sending your message. Please try again later or email us directly.",
                        ));
                    }
                }
                sending.set(false);
            });
        })
    };

    let field_class = |slot: &Option<String>| classes!("form-control", slot.is_some().then_some("error"));
    let field_error = |id: &str, slot: &Option<String>| {
        html! {
            <span class="error-message" id={format!("{}-error", id)}>
                { slot.clone().unwrap_or_default() }
            </span>
        }
    };

    html! {
        <form id="contact-form" class="contact__form" novalidate=true {onsubmit}>
            <div class="form-group">
                <input
                    id="name"
                    name="name"
                    type="text"
                    placeholder="Your Name"
                    class={field_class(&errors.name)}
                    value={data.name.clone()}
                    onchange={let data = data.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        data.set(ContactData { name: input.value(), ..(*data).clone() });
                    }}
                />
                { field_error("name", &errors.name) }
            </div>
            <div class="form-group">
                <input
                    id="email"
                    name="email"
                    type="email"
                    placeholder="Email Address"
                    class={field_class(&errors.email)}
                    value={data.email.clone()}
                    onchange={let data = data.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        data.set(ContactData { email: input.value(), ..(*data).clone() });
                    }}
                />
                { field_error("email", &errors.email) }
            </div>
            <div class="form-group">
                <input
                    id="phone"
                    name="phone"
                    type="tel"
                    placeholder="Phone Number"
                    class={field_class(&errors.phone)}
                    value={data.phone.clone()}
                    onchange={let data = data.clone(); move |e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        data.set(ContactData { phone: input.value(), ..(*data).clone() });
                    }}
                />
                { field_error("phone", &errors.phone) }
            </div>
            <div class="form-group">
                <select
                    id="project-type"
                    name="project-type"
                    class={field_class(&errors.project_type)}
                    onchange={let data = data.clone(); move |e: Event| {
                        let select: HtmlSelectElement = e.target_unchecked_into();
                        data.set(ContactData { project_type: select.value(), ..(*data).clone() });
                    }}
                >
                    <option value="" selected={data.project_type.is_empty()}>
                        {"Select Project Type"}
                    </option>
                    { for PROJECT_TYPES.iter().map(|kind| html! {
                        <option value={*kind} selected={data.project_type == *kind}>{ *kind }</option>
                    }) }
                </select>
                { field_error("project-type", &errors.project_type) }
            </div>
            <div class="form-group">
                <textarea
                    id="message"
                    name="message"
                    rows="6"
                    placeholder="Tell us about your project..."
                    class={field_class(&errors.message)}
                    value={data.message.clone()}
                    onchange={let data = data.clone(); move |e: Event| {
                        let area: HtmlTextAreaElement = e.target_unchecked_into();
                        data.set(ContactData { message: area.value(), ..(*data).clone() });
                    }}
                />
                { field_error("message", &errors.message) }
            </div>
            <button type="submit" class="contact__submit" disabled={*sending}>
                { if *sending { "📤 Sending..." } else { "Send Message" } }
            </button>
        </form>
    }
}
