//=============================================================================
// File: src/screens/legal.rs
//=============================================================================
use crate::components::pico::Card;
use crate::hooks::use_lang::use_lang;
use crate::i18n::tr;
use dioxus::prelude::*;

#[component]
pub fn PrivacyScreen() -> Element {
    let lang = use_lang();
    rsx! {
        h2 { {tr(lang, "privacy.title")} }
        Card {
            p { {tr(lang, "privacy.body")} }
        }
    }
}

#[component]
pub fn TermsScreen() -> Element {
    let lang = use_lang();
    rsx! {
        h2 { {tr(lang, "terms.title")} }
        Card {
            p { {tr(lang, "terms.body")} }
        }
    }
}
