//=============================================================================
// File: src/screens/services.rs
//=============================================================================
use crate::components::pico::{Button, Card, Grid};
use crate::hooks::use_lang::use_lang;
use crate::i18n::tr;
use crate::Screen;
use api::catalog;
use dioxus::prelude::*;

#[component]
pub fn ServicesScreen() -> Element {
    let lang = use_lang();
    let mut active_screen = use_context::<Signal<Screen>>();

    rsx! {
        h2 { {tr(lang, "services.title")} }
        Grid {
            for service in catalog::services() {
                Card {
                    if service.popular {
                        mark { {tr(lang, "common.popular")} }
                    }
                    h3 { "{service.icon} " {tr(lang, service.name_key)} }
                    p {
                        strong { "{service.base_price} $" }
                        small { " · " {tr(lang, service.duration_key)} }
                    }
                    ul {
                        for feature in service.feature_keys {
                            li { {tr(lang, feature)} }
                        }
                    }
                    Button {
                        on_click: move |_| active_screen.set(Screen::Booking),
                        {tr(lang, "home.cta_book")}
                    }
                }
            }
        }
    }
}
