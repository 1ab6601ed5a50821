//=============================================================================
// File: src/screens/faq.rs
//=============================================================================
use crate::components::pico::Accordion;
use crate::hooks::use_lang::use_lang;
use crate::i18n::tr;
use dioxus::prelude::*;

const ENTRIES: [(&str, &str); 5] = [
    ("faq.q_products", "faq.a_products"),
    ("faq.q_presence", "faq.a_presence"),
    ("faq.q_confirm", "faq.a_confirm"),
    ("faq.q_cancel", "faq.a_cancel"),
    ("faq.q_payment", "faq.a_payment"),
];

#[component]
pub fn FaqScreen() -> Element {
    let lang = use_lang();

    rsx! {
        h2 { {tr(lang, "faq.title")} }
        for (question, answer) in ENTRIES {
            Accordion {
                title: tr(lang, question).to_string(),
                p { {tr(lang, answer)} }
            }
        }
    }
}
