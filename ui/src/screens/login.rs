//=============================================================================
// File: src/screens/login.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::pico::{Button, Card, Input};
use crate::hooks::use_lang::use_lang;
use crate::hooks::use_loader::use_loader;
use crate::i18n::tr;
use crate::Screen;
use dioxus::prelude::*;

#[component]
pub fn LoginScreen() -> Element {
    let lang = use_lang();
    let mut loader = use_loader();
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();

    let mut password = use_signal(String::new);
    let mut is_submitting = use_signal(|| false);
    let mut failed = use_signal(|| false);

    let on_submit = move |_| {
        if is_submitting() || password.read().is_empty() {
            return;
        }
        is_submitting.set(true);
        failed.set(false);
        spawn(async move {
            loader.show(None);
            let result = api::admin_login(password()).await;
            loader.hide();
            is_submitting.set(false);
            match result {
                Ok(token) => {
                    app_state_mut.admin.set(Some(token));
                    password.set(String::new());
                    active_screen.set(Screen::Admin);
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("admin login rejected: {e}");
                    failed.set(true);
                }
            }
        });
    };

    rsx! {
        h2 { {tr(lang, "login.title")} }
        Card {
            if failed() {
                p { del { {tr(lang, "login.failed")} } }
            }
            Input {
                label: tr(lang, "login.password").to_string(),
                name: "password",
                input_type: "password".to_string(),
                required: true,
                value: password(),
                on_input: move |event: FormEvent| password.set(event.value()),
            }
            Button {
                disabled: is_submitting() || password.read().is_empty(),
                on_click: on_submit,
                {tr(lang, "login.submit")}
            }
        }
    }
}
