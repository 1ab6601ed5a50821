// The client-side Dioxus application logic.

use dioxus::prelude::*;

mod app_state;
mod app_state_mut;
pub mod compat;
mod components;
pub mod hooks;
pub mod i18n;
pub mod loader;
mod screens;
pub mod wizard;

use api::config::SiteConfig;
use app_state::AppState;
use app_state_mut::AppStateMut;
use components::loading_overlay::LoadingOverlay;
use components::pico::Button;
use components::pico::ButtonType;
use components::pico::Container;
use i18n::tr;
use i18n::Lang;
use loader::Loader;
use loader::LoaderCore;
use screens::about::AboutScreen;
use screens::admin::AdminScreen;
use screens::booking::BookingScreen;
use screens::contact::ContactScreen;
use screens::faq::FaqScreen;
use screens::home::HomeScreen;
use screens::legal::PrivacyScreen;
use screens::legal::TermsScreen;
use screens::login::LoginScreen;
use screens::not_found::NotFoundScreen;
use screens::pricing::PricingScreen;
use screens::services::ServicesScreen;

/// Enum to represent the different screens in our application.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum Screen {
    #[default]
    Home,
    Services,
    Pricing,
    Booking,
    Contact,
    Faq,
    About,
    Privacy,
    Terms,
    Login,
    Admin,
    NotFound,
}

impl Screen {
    /// The translation key for each screen's display name.
    fn name_key(self) -> &'static str {
        match self {
            Screen::Home => "nav.home",
            Screen::Services => "nav.services",
            Screen::Pricing => "nav.pricing",
            Screen::Booking => "nav.booking",
            Screen::Contact => "nav.contact",
            Screen::Faq => "nav.faq",
            Screen::About => "nav.about",
            Screen::Privacy => "footer.privacy",
            Screen::Terms => "footer.terms",
            Screen::Login | Screen::Admin => "nav.admin",
            Screen::NotFound => "notfound.title",
        }
    }
}

/// The screens reachable from the main navigation, in tab order.
const NAV_SCREENS: [Screen; 7] = [
    Screen::Home,
    Screen::Services,
    Screen::Pricing,
    Screen::Booking,
    Screen::Contact,
    Screen::Faq,
    Screen::About,
];

/// The desktop navigation tabs component.
#[component]
fn Tabs(active_screen: Signal<Screen>) -> Element {
    let lang = hooks::use_lang::use_lang();
    rsx! {
        nav {
            class: "tab-menu",
            ul {
                for screen in NAV_SCREENS {
                    li {
                        a {
                            href: "#",
                            class: {
                                if *active_screen.read() == screen { "active-tab" } else { "" }
                            },
                            "aria-current": {
                                if *active_screen.read() == screen { "page" } else { "false" }
                            },
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                            },
                            {tr(lang, screen.name_key())}
                        }
                    }
                }
            }
        }
    }
}

/// The mobile "hamburger" dropdown menu component.
#[component]
fn HamburgerMenu(active_screen: Signal<Screen>) -> Element {
    let lang = hooks::use_lang::use_lang();
    let mut is_open = use_signal(|| false);

    rsx! {
        div {
            class: "hamburger-menu-container",
            Button {
                button_type: ButtonType::Secondary,
                outline: true,
                on_click: move |_| is_open.toggle(),
                "≡"
            }
            if is_open() {
                div {
                    class: "menu-backdrop",
                    onclick: move |_| is_open.set(false),
                }
                article {
                    class: "custom-dropdown-menu",
                    for screen in NAV_SCREENS {
                        a {
                            class: {
                                if *active_screen.read() == screen {
                                    "custom-dropdown-item active-tab"
                                } else {
                                    "custom-dropdown-item"
                                }
                            },
                            href: "#",
                            onclick: move |event| {
                                event.prevent_default();
                                active_screen.set(screen);
                                is_open.set(false);
                            },
                            {tr(lang, screen.name_key())}
                        }
                    }
                }
            }
        }
    }
}

/// Language switcher. Flipping it persists the choice and pings the
/// overlay so the copy swap does not look like a glitch.
#[component]
fn LangToggle() -> Element {
    let mut app_state_mut = use_context::<AppStateMut>();
    let mut loader = use_context::<Loader>();
    let next = app_state_mut.lang.read().other();

    rsx! {
        Button {
            button_type: ButtonType::Contrast,
            outline: true,
            on_click: move |_| {
                app_state_mut.lang.set(next);
                next.store();
                loader.show_language_change(next.label());
            },
            "{next.label()}"
        }
    }
}

//=============================================================================
// MAIN APPLICATION COMPONENT (Client-side)
//=============================================================================

#[allow(non_snake_case)]
pub fn App() -> Element {
    let responsive_css = r#"
    * { box-sizing: border-box; }

    .site-header {
        display: flex;
        justify-content: space-between;
        align-items: center;
        gap: 1rem;
        padding: 0.5rem 0;
    }

    .site-header h1 {
        margin: 0;
        font-size: 1.4rem;
        white-space: nowrap;
    }

    /* --- NAVIGATION TABS --- */
    .tab-menu ul {
        display: flex;
        gap: 0.25rem;
        margin: 0;
        padding: 0;
    }

    .tab-menu a {
        padding: 0.5rem 0.75rem;
        text-decoration: none;
    }

    .tab-menu a.active-tab {
        color: var(--pico-primary);
        border-bottom: 3px solid var(--pico-primary);
    }

    .tab-menu a:not(.active-tab) {
        color: var(--pico-muted-color);
        border-bottom: 3px solid transparent;
    }

    /* --- MOBILE MENU --- */
    .hamburger-menu-container { position: relative; }
    .menu-backdrop { position: fixed; inset: 0; z-index: 90; }
    .custom-dropdown-menu {
        position: absolute;
        right: 0;
        z-index: 95;
        min-width: 12rem;
        padding: 0.5rem 0;
        display: flex;
        flex-direction: column;
    }
    .custom-dropdown-item { padding: 0.5rem 1rem; text-decoration: none; }
    .custom-dropdown-item.active-tab {
        color: var(--pico-primary);
        font-weight: bold;
        border-left: 4px solid var(--pico-primary);
        padding-left: calc(1rem - 4px);
    }

    .tab-menu { display: block; }
    .hamburger-menu-container { display: none; }
    @media (max-width: 768px) {
        .tab-menu { display: none; }
        .hamburger-menu-container { display: block; }
    }

    /* --- WIZARD --- */
    .wizard-progress ul {
        display: flex;
        gap: 0.5rem;
        padding: 0;
        margin-bottom: 1rem;
    }
    .wizard-progress .step {
        list-style: none;
        flex: 1;
        text-align: center;
        border-bottom: 3px solid var(--pico-muted-border-color);
        padding-bottom: 0.25rem;
    }
    .wizard-progress .step.current { border-color: var(--pico-primary); }
    .wizard-progress .step.done { border-color: var(--pico-ins-color); }

    .service-card {
        border: 1px solid var(--pico-muted-border-color);
        border-radius: var(--pico-border-radius);
        padding: 1rem;
        cursor: pointer;
    }
    .service-card.selected {
        border-color: var(--pico-primary);
        box-shadow: 0 0 0 2px var(--pico-primary);
    }

    .slot-grid {
        display: grid;
        grid-template-columns: repeat(auto-fill, minmax(6rem, 1fr));
        gap: 0.5rem;
        margin-bottom: 1rem;
    }

    /* --- LOADING OVERLAY --- */
    .loading-overlay {
        position: fixed;
        inset: 0;
        z-index: 1000;
        display: flex;
        justify-content: center;
        align-items: center;
        background: rgba(0, 0, 0, 0.45);
    }
    .loading-overlay article {
        min-width: 14rem;
        text-align: center;
    }

    .site-footer {
        margin-top: 2rem;
        padding: 1rem 0;
        border-top: 1px solid var(--pico-muted-border-color);
        display: flex;
        flex-wrap: wrap;
        justify-content: space-between;
        gap: 1rem;
    }
"#;

    rsx! {
        document::Meta {
            name: "viewport",
            content: "width=device-width, initial-scale=1.0",
        }
        document::Stylesheet {
            href: "https://cdn.jsdelivr.net/npm/@picocss/pico@2/css/pico.min.css",
        }
        style {
            "{responsive_css}"
        }
        AppBody {}
    }
}

#[component]
fn AppBody() -> Element {
    // Processed on the server before the initial page is delivered.
    let initial_data_future = use_server_future(move || async move {
        let config = match api::site_config().await {
            Ok(c) => c,
            Err(e) => return Err(e),
        };
        dioxus_logger::tracing::info!("site config: {:?}", config);
        Ok(config)
    })?;

    // Read from the future so it is polled during SSR.
    let body = match &*initial_data_future.read() {
        Some(Ok(config)) => rsx! {
            LoadedApp {
                config: config.clone(),
            }
        },
        Some(Err(e)) => rsx! {
            p {
                "An error occurred: {e}"
            }
        },
        _ => rsx! {
            p {
                "Loading..."
            }
        },
    };
    body
}

/// This component holds the main app logic and only runs when config is ready.
#[component]
fn LoadedApp(config: SiteConfig) -> Element {
    // Provide the stable, non-reactive AppState.
    let app_state = AppState::new(config.clone());
    use_context_provider(|| app_state.clone());

    // Create signals for mutable state at the top level of the component.
    let lang_signal = use_signal(|| Lang::load(&config.default_lang));
    let admin_signal = use_signal(|| None);
    use_context_provider(|| AppStateMut {
        lang: lang_signal,
        admin: admin_signal,
    });

    // The loader handle is one shared context; every show() must be paired
    // with a hide() by its caller.
    let core_signal = use_signal(LoaderCore::new);
    let visible_signal = use_signal(|| false);
    let message_signal = use_signal(String::new);
    let loader = Loader::from_signals(core_signal, visible_signal, message_signal);
    use_context_provider(|| loader);

    let active_screen = use_signal(Screen::default);
    use_context_provider(|| active_screen);

    // Every navigation pings the overlay with the destination name and
    // resets the scroll position.
    use_effect(move || {
        let screen = *active_screen.read();
        let lang = *lang_signal.peek();
        let mut loader = loader;
        loader.show_page_load(tr(lang, screen.name_key()));
        compat::scroll_to_top();
    });

    let lang = lang_signal();

    rsx! {
        Container {
            header {
                class: "site-header",
                h1 { "Fresh Maison" }
                Tabs {
                    active_screen,
                }
                div {
                    style: "display: flex; gap: 0.5rem; align-items: center;",
                    LangToggle {}
                    HamburgerMenu {
                        active_screen,
                    }
                }
            }
            div {
                class: "content",
                match active_screen() {
                    Screen::Home => rsx! { HomeScreen {} },
                    Screen::Services => rsx! { ServicesScreen {} },
                    Screen::Pricing => rsx! { PricingScreen {} },
                    Screen::Booking => rsx! { BookingScreen {} },
                    Screen::Contact => rsx! { ContactScreen {} },
                    Screen::Faq => rsx! { FaqScreen {} },
                    Screen::About => rsx! { AboutScreen {} },
                    Screen::Privacy => rsx! { PrivacyScreen {} },
                    Screen::Terms => rsx! { TermsScreen {} },
                    Screen::Login => rsx! { LoginScreen {} },
                    Screen::Admin => rsx! { AdminScreen {} },
                    Screen::NotFound => rsx! { NotFoundScreen {} },
                }
            }
            footer {
                class: "site-footer",
                small {
                    "© 2026 Fresh Maison · " {tr(lang, "footer.rights")}
                }
                small {
                    {
                        let mut screen_signal = active_screen;
                        rsx! {
                            a {
                                href: "#",
                                onclick: move |event| {
                                    event.prevent_default();
                                    screen_signal.set(Screen::Privacy);
                                },
                                {tr(lang, "footer.privacy")}
                            }
                            " · "
                            a {
                                href: "#",
                                onclick: move |event| {
                                    event.prevent_default();
                                    screen_signal.set(Screen::Terms);
                                },
                                {tr(lang, "footer.terms")}
                            }
                            " · "
                            a {
                                href: "#",
                                onclick: move |event| {
                                    event.prevent_default();
                                    screen_signal.set(Screen::Login);
                                },
                                {tr(lang, "nav.admin")}
                            }
                        }
                    }
                }
                small {
                    "{app_state.config.business_email} · {app_state.config.business_phone}"
                }
            }
        }
        LoadingOverlay {}
    }
}
