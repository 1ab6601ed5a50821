//=============================================================================
// File: src/screens/pricing.rs
//=============================================================================
use crate::components::pico::Card;
use crate::hooks::use_lang::use_lang;
use crate::i18n::tr;
use api::catalog;
use api::catalog::Frequency;
use dioxus::prelude::*;
use strum::IntoEnumIterator;

#[component]
pub fn PricingScreen() -> Element {
    let lang = use_lang();

    rsx! {
        h2 { {tr(lang, "pricing.title")} }
        Card {
            table {
                thead {
                    tr {
                        th { {tr(lang, "services.title")} }
                        th { {tr(lang, "pricing.base_price")} }
                    }
                }
                tbody {
                    for service in catalog::services() {
                        tr {
                            td { {tr(lang, service.name_key)} }
                            td { "{service.base_price} $" }
                        }
                    }
                }
            }
        }
        Card {
            h4 { {tr(lang, "pricing.addons_title")} }
            table {
                tbody {
                    for addon in catalog::addons() {
                        tr {
                            td { {tr(lang, addon.name_key)} }
                            td { "+{addon.price} $" }
                        }
                    }
                }
            }
        }
        Card {
            h4 { {tr(lang, "pricing.discounts_title")} }
            table {
                tbody {
                    for frequency in Frequency::iter() {
                        tr {
                            td { {tr(lang, frequency.name_key())} }
                            td { "-{frequency.discount_percent()} %" }
                        }
                    }
                }
            }
        }
        p { small { {tr(lang, "pricing.tax_note")} } }
    }
}
