//=============================================================================
// File: src/screens/contact.rs
//=============================================================================
use crate::components::pico::{Button, Card, Grid, Input, Modal, TextArea};
use crate::hooks::use_lang::use_lang;
use crate::hooks::use_loader::use_loader;
use crate::i18n::tr;
use api::records::{ContactStatus, ContactSubmission};
use dioxus::prelude::*;

#[component]
pub fn ContactScreen() -> Element {
    let lang = use_lang();
    let mut loader = use_loader();
    let app_state = use_context::<crate::app_state::AppState>();

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut phone = use_signal(String::new);
    let mut subject = use_signal(String::new);
    let mut message = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);
    let mut sent = use_signal(|| false);
    let mut show_error_modal = use_signal(|| false);

    let can_send = use_memo(move || {
        !name.read().trim().is_empty()
            && !email.read().trim().is_empty()
            && !message.read().trim().is_empty()
    });

    let on_send = move |_| {
        if is_submitting() || !can_send() {
            return;
        }
        let submission = ContactSubmission {
            id: None,
            name: name(),
            email: email(),
            phone: phone(),
            subject: subject(),
            message: message(),
            status: ContactStatus::New,
            created_at: String::new(),
        };
        is_submitting.set(true);
        spawn(async move {
            loader.show(Some(tr(lang, "wizard.submitting")));
            let result = api::submit_contact(submission).await;
            loader.hide();
            is_submitting.set(false);
            match result {
                Ok(outcome) if outcome.succeeded() => {
                    sent.set(true);
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    subject.set(String::new());
                    message.set(String::new());
                }
                Ok(_) => show_error_modal.set(true),
                Err(e) => {
                    dioxus_logger::tracing::warn!("contact submission failed: {e}");
                    show_error_modal.set(true);
                }
            }
        });
    };

    rsx! {
        Modal {
            is_open: show_error_modal,
            title: tr(lang, "wizard.error_title").to_string(),
            p { {tr(lang, "wizard.error_body")} }
        }

        h2 { {tr(lang, "contact.title")} }
        Grid {
            Card {
                if sent() {
                    p { ins { {tr(lang, "contact.success")} } }
                }
                Grid {
                    Input {
                        label: tr(lang, "contact.name").to_string(),
                        name: "name",
                        required: true,
                        value: name(),
                        on_input: move |event: FormEvent| name.set(event.value()),
                    }
                    Input {
                        label: tr(lang, "wizard.email").to_string(),
                        name: "email",
                        input_type: "email".to_string(),
                        required: true,
                        value: email(),
                        on_input: move |event: FormEvent| email.set(event.value()),
                    }
                }
                Grid {
                    Input {
                        label: tr(lang, "wizard.phone").to_string(),
                        name: "phone",
                        input_type: "tel".to_string(),
                        value: phone(),
                        on_input: move |event: FormEvent| phone.set(event.value()),
                    }
                    Input {
                        label: tr(lang, "contact.subject").to_string(),
                        name: "subject",
                        value: subject(),
                        on_input: move |event: FormEvent| subject.set(event.value()),
                    }
                }
                TextArea {
                    label: tr(lang, "contact.message").to_string(),
                    name: "message",
                    rows: 6,
                    required: true,
                    value: message(),
                    on_input: move |event: FormEvent| message.set(event.value()),
                }
                Button {
                    disabled: is_submitting() || !can_send(),
                    on_click: on_send,
                    {tr(lang, "common.send")}
                }
            }
            Card {
                h4 { "Fresh Maison" }
                p { "{app_state.config.business_email}" }
                p { "{app_state.config.business_phone}" }
            }
        }
    }
}
