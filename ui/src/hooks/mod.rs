//! Small context-access hooks shared by every screen.
pub mod use_lang;
pub mod use_loader;
