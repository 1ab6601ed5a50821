//=============================================================================
// File: src/screens/about.rs
//=============================================================================
use crate::components::pico::{Button, Card};
use crate::hooks::use_lang::use_lang;
use crate::i18n::tr;
use crate::Screen;
use dioxus::prelude::*;

#[component]
pub fn AboutScreen() -> Element {
    let lang = use_lang();
    let mut active_screen = use_context::<Signal<Screen>>();

    rsx! {
        h2 { {tr(lang, "about.title")} }
        Card {
            p { {tr(lang, "about.body")} }
            Button {
                on_click: move |_| active_screen.set(Screen::Booking),
                {tr(lang, "home.cta_book")}
            }
        }
    }
}
