//=============================================================================
// File: src/screens/home.rs
//=============================================================================
use crate::components::pico::{Button, ButtonType, Card, Grid};
use crate::hooks::use_lang::use_lang;
use crate::i18n::tr;
use crate::Screen;
use dioxus::prelude::*;

#[component]
pub fn HomeScreen() -> Element {
    let lang = use_lang();
    let mut active_screen = use_context::<Signal<Screen>>();

    rsx! {
        section {
            class: "hero",
            h1 { {tr(lang, "home.title")} }
            p { {tr(lang, "home.tagline")} }
            div {
                style: "display: flex; gap: 1rem;",
                Button {
                    on_click: move |_| active_screen.set(Screen::Booking),
                    {tr(lang, "home.cta_book")}
                }
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| active_screen.set(Screen::Services),
                    {tr(lang, "home.cta_services")}
                }
            }
        }
        h3 { {tr(lang, "home.why_title")} }
        Grid {
            Card {
                h4 { "🛡 " {tr(lang, "home.why_insured")} }
            }
            Card {
                h4 { "🌿 " {tr(lang, "home.why_eco")} }
            }
            Card {
                h4 { "✔ " {tr(lang, "home.why_satisfaction")} }
            }
        }
    }
}
