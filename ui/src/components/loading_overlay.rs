//! Full-screen overlay driven by the global loading coordinator.

#![allow(non_snake_case)]

use crate::app_state_mut::AppStateMut;
use crate::i18n;
use crate::loader::Loader;
use dioxus::prelude::*;

/// Renders above everything while the loader is visible. The message falls
/// back to the translated default when no caller supplied one.
#[component]
pub fn LoadingOverlay() -> Element {
    let loader = use_context::<Loader>();
    let state = use_context::<AppStateMut>();
    let lang = (state.lang)();

    if !loader.is_visible() {
        return rsx! {};
    }
    let message = loader.message();
    let message = if message.is_empty() {
        i18n::tr(lang, "loader.default").to_string()
    } else {
        message
    };

    rsx! {
        div {
            class: "loading-overlay",
            "aria-busy": "true",
            article {
                p { "aria-busy": "true", "{message}" }
            }
        }
    }
}
