//=============================================================================
// File: src/screens/not_found.rs
//=============================================================================
use crate::components::pico::{Button, Card};
use crate::hooks::use_lang::use_lang;
use crate::i18n::tr;
use crate::Screen;
use dioxus::prelude::*;

#[component]
pub fn NotFoundScreen() -> Element {
    let lang = use_lang();
    let mut active_screen = use_context::<Signal<Screen>>();

    rsx! {
        Card {
            h2 { "404 · " {tr(lang, "notfound.title")} }
            p { {tr(lang, "notfound.body")} }
            Button {
                on_click: move |_| active_screen.set(Screen::Home),
                {tr(lang, "notfound.home")}
            }
        }
    }
}
