use crate::app_state_mut::AppStateMut;
use crate::i18n::Lang;
use dioxus::prelude::*;

/// The active UI language, read from the mutable app state.
pub fn use_lang() -> Lang {
    (use_context::<AppStateMut>().lang)()
}
