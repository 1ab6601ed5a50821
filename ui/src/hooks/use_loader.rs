use crate::loader::Loader;
use dioxus::prelude::*;

/// The app-wide loading coordinator handle.
pub fn use_loader() -> Loader {
    use_context::<Loader>()
}
