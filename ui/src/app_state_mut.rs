//! Defines the mutable, reactive state for the application's UI.

use crate::i18n::Lang;
use api::AdminToken;
use dioxus::prelude::*;

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for any UI-related state that needs to change
/// and trigger automatic re-renders in the view. It is separate from the
/// core, immutable `AppState`.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The active UI language. Persisted to localStorage on change.
    pub lang: Signal<Lang>,
    /// A live admin session, if the user logged in. Never persisted; a
    /// reload means logging in again.
    pub admin: Signal<Option<AdminToken>>,
}
