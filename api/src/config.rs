//! Site-wide configuration handed to the client during first render.

use serde::Deserialize;
use serde::Serialize;

/// Static site settings: the default UI language and the business contact
/// details shown in the footer and on the contact page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub default_lang: String,
    pub business_email: String,
    pub business_phone: String,
}

impl SiteConfig {
    /// Creates the configuration from environment variables with
    /// conservative in-code defaults.
    ///
    /// # Environment Variables
    /// - `DEFAULT_LANG`: "fr" or "en". Anything else falls back to "fr".
    /// - `BUSINESS_EMAIL`: inbox shown on the site and used as the email
    ///   sender identity.
    /// - `BUSINESS_PHONE`: display-only phone number.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        let default_lang = match std::env::var("DEFAULT_LANG") {
            Ok(lang) if lang.eq_ignore_ascii_case("en") => "en".to_string(),
            _ => "fr".to_string(),
        };
        Self {
            default_lang,
            business_email: std::env::var("BUSINESS_EMAIL")
                .unwrap_or_else(|_| "bonjour@fresh-maison.ca".to_string()),
            business_phone: std::env::var("BUSINESS_PHONE")
                .unwrap_or_else(|_| "(514) 555-0199".to_string()),
        }
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            default_lang: "fr".to_string(),
            business_email: "bonjour@fresh-maison.ca".to_string(),
            business_phone: "(514) 555-0199".to_string(),
        }
    }
}
