//=============================================================================
// File: src/screens/booking.rs
//=============================================================================
use crate::compat;
use crate::components::pico::{
    Button, ButtonType, Card, Checkbox, Grid, Input, Modal, Select, TextArea,
};
use crate::hooks::use_lang::use_lang;
use crate::hooks::use_loader::use_loader;
use crate::i18n::tr;
use crate::wizard::{BookingDraft, WizardStep};
use crate::Screen;
use api::catalog;
use api::catalog::{Frequency, PropertyType};
use dioxus::prelude::*;
use std::str::FromStr;
use std::time::Duration;
use strum::IntoEnumIterator;

/// How long the success modal stays up before the auto-redirect home.
const REDIRECT_DELAY: Duration = Duration::from_secs(3);

const BEDROOM_CHOICES: [&str; 5] = ["1", "2", "3", "4", "5+"];
const BATHROOM_CHOICES: [&str; 5] = ["1", "1.5", "2", "2.5", "3+"];

const ALL_STEPS: [WizardStep; 5] = [
    WizardStep::ServiceSelect,
    WizardStep::PropertyDetails,
    WizardStep::Scheduling,
    WizardStep::ContactInfo,
    WizardStep::Review,
];

#[component]
pub fn BookingScreen() -> Element {
    let lang = use_lang();
    let mut loader = use_loader();
    let mut active_screen = use_context::<Signal<Screen>>();

    // The draft lives only as long as this screen; navigating away or a
    // successful submission discards it.
    let mut draft = use_signal(BookingDraft::new);
    let mut is_submitting = use_signal(|| false);
    let mut show_success_modal = use_signal(|| false);
    let mut show_error_modal = use_signal(|| false);

    let quote = use_memo(move || draft.read().quote());
    let step = draft.read().step();

    let mut go_next = move |_| {
        if draft.write().next_step() {
            compat::scroll_to_top();
        }
    };
    let mut go_back = move |_| {
        if draft.write().previous_step() {
            compat::scroll_to_top();
        }
    };

    let on_confirm = move |_| {
        if is_submitting() {
            return;
        }
        let Some(request) = draft.read().to_request() else {
            return;
        };
        is_submitting.set(true);
        spawn(async move {
            loader.show(Some(tr(lang, "wizard.submitting")));
            let result = api::submit_booking(request).await;
            loader.hide();
            is_submitting.set(false);
            match result {
                Ok(outcome) if outcome.succeeded() => {
                    show_success_modal.set(true);
                    spawn(async move {
                        compat::sleep(REDIRECT_DELAY).await;
                        show_success_modal.set(false);
                        draft.set(BookingDraft::new());
                        active_screen.set(Screen::Home);
                    });
                }
                Ok(_) => {
                    // Notification reported failure; the draft stays so the
                    // user can resubmit.
                    show_error_modal.set(true);
                }
                Err(e) => {
                    dioxus_logger::tracing::warn!("booking submission failed: {e}");
                    show_error_modal.set(true);
                }
            }
        });
    };

    rsx! {
        // --- Modals ---
        Modal {
            is_open: show_success_modal,
            title: tr(lang, "wizard.success_title").to_string(),
            p { {tr(lang, "wizard.success_body")} }
        }
        Modal {
            is_open: show_error_modal,
            title: tr(lang, "wizard.error_title").to_string(),
            p { {tr(lang, "wizard.error_body")} }
            footer {
                Button {
                    on_click: move |_| show_error_modal.set(false),
                    {tr(lang, "common.close")}
                }
            }
        }

        h2 { {tr(lang, "wizard.title")} }

        // --- Progress bar ---
        nav {
            class: "wizard-progress",
            ul {
                for s in ALL_STEPS {
                    li {
                        class: {
                            if s == step {
                                "step current"
                            } else if draft.read().is_completed(s) {
                                "step done"
                            } else {
                                "step"
                            }
                        },
                        small { "{s.number()}. " {tr(lang, s.title_key())} }
                    }
                }
            }
        }

        // --- Step content ---
        match step {
            WizardStep::ServiceSelect => rsx! {
                Card {
                    h3 { {tr(lang, "wizard.choose_service")} }
                    Grid {
                        for service in catalog::services() {
                            div {
                                class: {
                                    let selected = draft.read().service_id.as_deref() == Some(service.id);
                                    if selected { "service-card selected" } else { "service-card" }
                                },
                                onclick: move |_| draft.write().select_service(service.id),
                                if service.popular {
                                    mark { {tr(lang, "common.popular")} }
                                }
                                h4 { "{service.icon} " {tr(lang, service.name_key)} }
                                p { strong { "{service.base_price} $" } }
                                small { {tr(lang, service.duration_key)} }
                            }
                        }
                    }
                }
            },
            WizardStep::PropertyDetails => rsx! {
                Card {
                    h3 { {tr(lang, "wizard.step.property")} }
                    Grid {
                        Select {
                            label: tr(lang, "wizard.property_type").to_string(),
                            name: "property_type",
                            placeholder: "—".to_string(),
                            value: draft.read().property_type.map(|p| p.to_string()).unwrap_or_default(),
                            options: PropertyType::iter()
                                .map(|p| (p.to_string(), tr(lang, p.name_key()).to_string()))
                                .collect::<Vec<_>>(),
                            on_change: move |event: FormEvent| {
                                draft.write().property_type = PropertyType::from_str(&event.value()).ok();
                            },
                        }
                        Input {
                            label: tr(lang, "wizard.size").to_string(),
                            name: "property_size",
                            input_type: "number".to_string(),
                            value: draft.read().property_size.clone(),
                            on_input: move |event: FormEvent| {
                                draft.write().property_size = event.value();
                            },
                        }
                    }
                    Grid {
                        Select {
                            label: tr(lang, "wizard.bedrooms").to_string(),
                            name: "bedrooms",
                            placeholder: "—".to_string(),
                            value: draft.read().bedrooms.clone(),
                            options: BEDROOM_CHOICES
                                .iter()
                                .map(|c| ((*c).to_string(), (*c).to_string()))
                                .collect::<Vec<_>>(),
                            on_change: move |event: FormEvent| {
                                draft.write().bedrooms = event.value();
                            },
                        }
                        Select {
                            label: tr(lang, "wizard.bathrooms").to_string(),
                            name: "bathrooms",
                            placeholder: "—".to_string(),
                            value: draft.read().bathrooms.clone(),
                            options: BATHROOM_CHOICES
                                .iter()
                                .map(|c| ((*c).to_string(), (*c).to_string()))
                                .collect::<Vec<_>>(),
                            on_change: move |event: FormEvent| {
                                draft.write().bathrooms = event.value();
                            },
                        }
                    }
                    TextArea {
                        label: tr(lang, "wizard.instructions").to_string(),
                        name: "special_instructions",
                        value: draft.read().special_instructions.clone(),
                        on_input: move |event: FormEvent| {
                            draft.write().special_instructions = event.value();
                        },
                    }
                    h4 { {tr(lang, "wizard.addons")} }
                    Grid {
                        for addon in catalog::addons() {
                            Checkbox {
                                label: format!("{} (+{} $)", tr(lang, addon.name_key), addon.price),
                                checked: draft.read().addons.contains(addon.id),
                                on_change: move |_| draft.write().toggle_addon(addon.id),
                            }
                        }
                    }
                }
            },
            WizardStep::Scheduling => rsx! {
                Card {
                    h3 { {tr(lang, "wizard.step.schedule")} }
                    Input {
                        label: tr(lang, "wizard.date").to_string(),
                        name: "date",
                        input_type: "date".to_string(),
                        // The date floor is enforced here and only here.
                        min: BookingDraft::min_date(),
                        value: draft.read().date.clone(),
                        required: true,
                        on_input: move |event: FormEvent| {
                            draft.write().date = event.value();
                        },
                    }
                    label { {tr(lang, "wizard.time")} }
                    div {
                        class: "slot-grid",
                        for slot in catalog::time_slots() {
                            Button {
                                button_type: ButtonType::Secondary,
                                outline: draft.read().time_slot != slot.time,
                                disabled: !slot.available,
                                on_click: move |_| draft.write().select_time_slot(slot.time),
                                "{slot.time}"
                            }
                        }
                    }
                    Select {
                        label: tr(lang, "wizard.frequency").to_string(),
                        name: "frequency",
                        value: draft.read().frequency.to_string(),
                        options: Frequency::iter()
                            .map(|f| {
                                let discount = f.discount_percent();
                                let display = if discount == 0 {
                                    tr(lang, f.name_key()).to_string()
                                } else {
                                    format!("{} (-{discount} %)", tr(lang, f.name_key()))
                                };
                                (f.to_string(), display)
                            })
                            .collect::<Vec<_>>(),
                        on_change: move |event: FormEvent| {
                            if let Some(frequency) = catalog::frequency(&event.value()) {
                                draft.write().frequency = frequency;
                            }
                        },
                    }
                }
            },
            WizardStep::ContactInfo => rsx! {
                Card {
                    h3 { {tr(lang, "wizard.step.contact")} }
                    Grid {
                        Input {
                            label: tr(lang, "wizard.first_name").to_string(),
                            name: "first_name",
                            required: true,
                            value: draft.read().contact.first_name.clone(),
                            on_input: move |event: FormEvent| {
                                draft.write().contact.first_name = event.value();
                            },
                        }
                        Input {
                            label: tr(lang, "wizard.last_name").to_string(),
                            name: "last_name",
                            required: true,
                            value: draft.read().contact.last_name.clone(),
                            on_input: move |event: FormEvent| {
                                draft.write().contact.last_name = event.value();
                            },
                        }
                    }
                    Grid {
                        Input {
                            label: tr(lang, "wizard.email").to_string(),
                            name: "email",
                            input_type: "email".to_string(),
                            required: true,
                            value: draft.read().contact.email.clone(),
                            on_input: move |event: FormEvent| {
                                draft.write().contact.email = event.value();
                            },
                        }
                        Input {
                            label: tr(lang, "wizard.phone").to_string(),
                            name: "phone",
                            input_type: "tel".to_string(),
                            required: true,
                            value: draft.read().contact.phone.clone(),
                            on_input: move |event: FormEvent| {
                                draft.write().contact.phone = event.value();
                            },
                        }
                    }
                    Input {
                        label: tr(lang, "wizard.address").to_string(),
                        name: "address",
                        required: true,
                        value: draft.read().contact.address.clone(),
                        on_input: move |event: FormEvent| {
                            draft.write().contact.address = event.value();
                        },
                    }
                    Checkbox {
                        label: tr(lang, "wizard.email_updates").to_string(),
                        checked: draft.read().contact.accepts_email_updates,
                        on_change: move |_| {
                            let current = draft.read().contact.accepts_email_updates;
                            draft.write().contact.accepts_email_updates = !current;
                        },
                    }
                    Checkbox {
                        label: tr(lang, "wizard.sms_updates").to_string(),
                        checked: draft.read().contact.accepts_sms_updates,
                        on_change: move |_| {
                            let current = draft.read().contact.accepts_sms_updates;
                            draft.write().contact.accepts_sms_updates = !current;
                        },
                    }
                }
            },
            WizardStep::Review => rsx! {
                Card {
                    h3 { {tr(lang, "wizard.review_title")} }
                    {
                        let d = draft.read();
                        let service_name = d
                            .service_id
                            .as_deref()
                            .and_then(catalog::service)
                            .map(|s| tr(lang, s.name_key))
                            .unwrap_or("—");
                        let addon_names: Vec<&str> = d
                            .addons
                            .iter()
                            .filter_map(|id| catalog::addon(id))
                            .map(|a| tr(lang, a.name_key))
                            .collect();
                        rsx! {
                            table {
                                tbody {
                                    tr {
                                        td { {tr(lang, "wizard.step.service")} }
                                        td { "{service_name}" }
                                    }
                                    if !addon_names.is_empty() {
                                        tr {
                                            td { {tr(lang, "wizard.addons")} }
                                            td { "{addon_names.join(\", \")}" }
                                        }
                                    }
                                    tr {
                                        td { {tr(lang, "wizard.date")} }
                                        td { "{d.date} · {d.time_slot}" }
                                    }
                                    tr {
                                        td { {tr(lang, "wizard.frequency")} }
                                        td { {tr(lang, d.frequency.name_key())} }
                                    }
                                    tr {
                                        td { {tr(lang, "wizard.step.contact")} }
                                        td { "{d.contact.full_name()} · {d.contact.email}" }
                                    }
                                }
                            }
                        }
                    }
                    if let Some(q) = quote() {
                        hr {}
                        p { {tr(lang, "common.subtotal")} ": {q.subtotal} $" }
                        p { {tr(lang, "common.tax")} ": {q.tax} $" }
                        h4 { {tr(lang, "common.total")} ": {q.total} $" }
                    }
                    Button {
                        disabled: is_submitting(),
                        on_click: on_confirm,
                        if is_submitting() {
                            {tr(lang, "wizard.submitting")}
                        } else {
                            {tr(lang, "wizard.confirm")}
                        }
                    }
                }
            },
        }

        // --- Live total + navigation ---
        footer {
            style: "display: flex; justify-content: space-between; align-items: center; margin-top: 1rem;",
            div {
                if step != WizardStep::Review {
                    if let Some(q) = quote() {
                        strong { {tr(lang, "common.total")} ": {q.total} $" }
                    }
                }
            }
            div {
                style: "display: flex; gap: 1rem;",
                if step != WizardStep::ServiceSelect {
                    Button {
                        button_type: ButtonType::Secondary,
                        outline: true,
                        on_click: move |evt| go_back(evt),
                        {tr(lang, "common.back")}
                    }
                }
                if step != WizardStep::Review {
                    Button {
                        disabled: !draft.read().can_advance(),
                        on_click: move |evt| go_next(evt),
                        {tr(lang, "common.continue")}
                    }
                }
            }
        }
    }
}
