use api::config::SiteConfig;
use std::ops::Deref;
use std::sync::Arc;

#[derive(Debug, PartialEq, Eq)]
pub struct AppStateData {
    pub config: SiteConfig,
}

/// The stable, non-reactive application state: the site configuration
/// fetched once during first render.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppState(Arc<AppStateData>);

impl Deref for AppState {
    type Target = AppStateData;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl AppState {
    pub fn new(config: SiteConfig) -> Self {
        Self(Arc::new(AppStateData { config }))
    }
}
