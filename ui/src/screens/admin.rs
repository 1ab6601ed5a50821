//=============================================================================
// File: src/screens/admin.rs
//=============================================================================
use crate::app_state_mut::AppStateMut;
use crate::components::pico::{Button, ButtonType, Card};
use crate::hooks::use_lang::use_lang;
use crate::i18n::tr;
use crate::screens::login::LoginScreen;
use crate::Screen;
use api::records::BookingStatus;
use dioxus::prelude::*;
use std::str::FromStr;

const STATUS_CHOICES: [BookingStatus; 4] = [
    BookingStatus::Pending,
    BookingStatus::Confirmed,
    BookingStatus::Completed,
    BookingStatus::Cancelled,
];

#[component]
pub fn AdminScreen() -> Element {
    let lang = use_lang();
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut active_screen = use_context::<Signal<Screen>>();
    let admin = app_state_mut.admin;

    let mut bookings = use_resource(move || async move {
        let token = admin.read().clone()?;
        Some(api::booking_requests(token).await.map_err(|e| e.to_string()))
    });
    let mut contacts = use_resource(move || async move {
        let token = admin.read().clone()?;
        Some(api::contact_submissions(token).await.map_err(|e| e.to_string()))
    });

    // A session token is the only way in.
    if admin.read().is_none() {
        return rsx! { LoginScreen {} };
    }

    let mut set_status = move |id: i64, status: BookingStatus| {
        let token = admin.read().clone();
        spawn(async move {
            let Some(token) = token else { return };
            match api::update_booking_status(token, id, status).await {
                Ok(()) => bookings.restart(),
                Err(e) => {
                    dioxus_logger::tracing::warn!(id, "status update failed: {e}");
                }
            }
        });
    };

    rsx! {
        div {
            style: "display: flex; justify-content: space-between; align-items: baseline;",
            h2 { {tr(lang, "admin.title")} }
            div {
                style: "display: flex; gap: 1rem;",
                Button {
                    button_type: ButtonType::Secondary,
                    outline: true,
                    on_click: move |_| {
                        bookings.restart();
                        contacts.restart();
                    },
                    {tr(lang, "admin.refresh")}
                }
                Button {
                    button_type: ButtonType::Contrast,
                    outline: true,
                    on_click: move |_| {
                        app_state_mut.admin.set(None);
                        active_screen.set(Screen::Home);
                    },
                    {tr(lang, "login.logout")}
                }
            }
        }

        Card {
            h4 { {tr(lang, "admin.bookings")} }
            match &*bookings.read() {
                Some(Some(Err(e))) => rsx! {
                    p { del { {tr(lang, "admin.load_failed")} " {e}" } }
                },
                Some(Some(Ok(rows))) if !rows.is_empty() => rsx! {
                    div {
                        class: "overflow-auto",
                        table {
                            thead {
                                tr {
                                    th { {tr(lang, "wizard.date")} }
                                    th { {tr(lang, "contact.name")} }
                                    th { {tr(lang, "wizard.step.service")} }
                                    th { {tr(lang, "common.total")} }
                                    th { {tr(lang, "admin.status")} }
                                }
                            }
                            tbody {
                                for row in rows.clone() {
                                    tr {
                                        td { "{row.date} · {row.time_slot}" }
                                        td { "{row.contact.full_name()}" }
                                        td {
                                            {
                                                api::catalog::service(&row.service_id)
                                                    .map(|s| tr(lang, s.name_key))
                                                    .unwrap_or(row.service_id.as_str())
                                                    .to_string()
                                            }
                                        }
                                        td { "{row.total} $" }
                                        td {
                                            if let Some(id) = row.id {
                                                select {
                                                    value: "{row.status}",
                                                    onchange: move |event| {
                                                        if let Ok(status) = BookingStatus::from_str(&event.value()) {
                                                            set_status(id, status);
                                                        }
                                                    },
                                                    for choice in STATUS_CHOICES {
                                                        option {
                                                            value: "{choice}",
                                                            selected: choice == row.status,
                                                            "{choice}"
                                                        }
                                                    }
                                                }
                                            } else {
                                                "{row.status}"
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(_) => rsx! { p { {tr(lang, "admin.empty")} } },
                None => rsx! { p { "aria-busy": "true", {tr(lang, "loader.default")} } },
            }
        }

        Card {
            h4 { {tr(lang, "admin.messages")} }
            match &*contacts.read() {
                Some(Some(Err(e))) => rsx! {
                    p { del { {tr(lang, "admin.load_failed")} " {e}" } }
                },
                Some(Some(Ok(rows))) if !rows.is_empty() => rsx! {
                    div {
                        class: "overflow-auto",
                        table {
                            thead {
                                tr {
                                    th { {tr(lang, "contact.name")} }
                                    th { {tr(lang, "wizard.email")} }
                                    th { {tr(lang, "contact.subject")} }
                                    th { {tr(lang, "contact.message")} }
                                }
                            }
                            tbody {
                                for row in rows.clone() {
                                    tr {
                                        td { "{row.name}" }
                                        td { "{row.email}" }
                                        td { "{row.subject}" }
                                        td { "{row.message}" }
                                    }
                                }
                            }
                        }
                    }
                },
                Some(_) => rsx! { p { {tr(lang, "admin.empty")} } },
                None => rsx! { p { "aria-busy": "true", {tr(lang, "loader.default")} } },
            }
        }
    }
}
