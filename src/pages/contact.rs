//! Contact page - typewriter hero, the contact form and social links.
//!
//! A valid submission goes to the log sink, the button reads "Submitted!"
//! for a moment, then the form clears. Leaving the page cancels the reset.

use dioxus::prelude::*;
use folio_core::contact::SUBMITTED_DISPLAY;
use folio_core::scheduler;
use folio_core::{ContactForm, FormField, LogSink, SubmitOutcome};
use folio_ui::{
    use_task_scope, Input, ParticleButton, Reveal, SocialLinks, TextArea, TypewriterText,
};

use crate::context::use_site_config;

/// Label of the submit button in each phase
fn submit_label(submitted: bool) -> &'static str {
    if submitted {
        "Submitted!"
    } else {
        "Send Message"
    }
}

/// HTML input type for a single-line field
fn input_type(field: FormField) -> &'static str {
    match field {
        FormField::Email => "email",
        FormField::Name | FormField::Message => "text",
    }
}

#[component]
pub fn Contact() -> Element {
    let config = use_site_config();
    let token = use_task_scope();
    let mut form = use_signal(ContactForm::new);

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let outcome = form.write().submit(&LogSink);
        match outcome {
            Ok(SubmitOutcome::Accepted) => {
                let token = token.clone();
                spawn(async move {
                    scheduler::after(SUBMITTED_DISPLAY, token, move || {
                        form.write().finish_submission();
                    })
                    .await;
                });
            }
            Ok(SubmitOutcome::Rejected(errors)) => {
                tracing::debug!(fields = errors.len(), "Contact form has errors");
            }
            Ok(SubmitOutcome::Pending) => {}
            Err(e) => {
                tracing::error!("Contact submission failed: {}", e);
            }
        }
    };

    let state = form.read();
    let submitted = state.is_submitted();
    let label = submit_label(submitted);
    let fields: Vec<(FormField, String, Option<String>)> = FormField::ALL
        .into_iter()
        .map(|field| {
            let value = state.data().get(field).to_string();
            let error = state.errors().get(field).map(str::to_string);
            (field, value, error)
        })
        .collect();
    drop(state);

    rsx! {
        div { class: "page contact",
            section { class: "hero",
                h1 { class: "hero-title",
                    TypewriterText {
                        text: config.contact_hero.text.clone(),
                        interval_ms: config.contact_hero.interval_ms,
                    }
                }
                p { class: "hero-tagline", "{config.contact_intro}" }
            }

            Reveal { class: "contact-panel glass",
                form { class: "contact-form", novalidate: true, onsubmit: on_submit,
                    for (field, value, error) in fields {
                        if field == FormField::Message {
                            TextArea {
                                name: field.key().to_string(),
                                label: field.label().to_string(),
                                placeholder: field.placeholder().to_string(),
                                value: value,
                                error: error,
                                oninput: move |v: String| form.write().set_field(field, v),
                            }
                        } else {
                            Input {
                                name: field.key().to_string(),
                                label: field.label().to_string(),
                                placeholder: field.placeholder().to_string(),
                                input_type: input_type(field).to_string(),
                                value: value,
                                error: error,
                                oninput: move |v: String| form.write().set_field(field, v),
                            }
                        }
                    }
                    div { class: "form-actions",
                        ParticleButton {
                            button_type: "submit".to_string(),
                            disabled: submitted,
                            effect: config.effects.button,
                            "{label}"
                        }
                    }
                }
            }

            Reveal { class: "section connect",
                h2 { class: "section-title", "Connect with Me" }
                SocialLinks { links: config.socials.clone(), effect: config.effects.social }
            }
        }
    }
}
