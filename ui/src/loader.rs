//! The global loading coordinator.
//!
//! One reference-counted visibility flag shared by the whole app: route
//! changes, submissions and manual callers each balance a `show` with a
//! `hide`, and the overlay only clears once every caller has. To avoid
//! flicker on fast operations, visibility is held for a minimum duration
//! from the moment the counter first became positive.
//!
//! [`LoaderCore`] holds all of the counting and timing rules and takes the
//! current instant as an argument, so the rules are testable without
//! timers. [`Loader`] is the signal-backed handle components use; it feeds
//! the core from the real clock and schedules the delayed hides.

use crate::compat;
use dioxus::prelude::*;
use std::time::Duration;
use web_time::Instant;

/// Minimum time the overlay stays up once shown.
pub const MIN_DISPLAY: Duration = Duration::from_millis(300);

/// How long the preset page-load / language-change pings hold the overlay.
const PRESET_HOLD: Duration = Duration::from_millis(450);

/// What [`LoaderCore::hide_at`] decided.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HideOutcome {
    /// Other callers still have the loader open.
    StillActive,
    /// The count reached zero; clear visibility after `delay` unless the
    /// epoch has moved on by then.
    HideAfter { delay: Duration, epoch: u64 },
}

#[derive(Debug, Default)]
pub struct LoaderCore {
    active: u32,
    /// Bumped every time the overlay transitions hidden -> shown; a pending
    /// delayed hide from an older epoch is void.
    epoch: u64,
    shown_at: Option<Instant>,
    visible: bool,
    message: String,
}

impl LoaderCore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn active_count(&self) -> u32 {
        self.active
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Empty while no caller has supplied one; the overlay renders its
    /// translated default in that case.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Registers a caller. Returns true when this call made the overlay
    /// visible (or re-claimed it while a delayed hide was pending).
    pub fn show_at(&mut self, now: Instant, message: Option<&str>) -> bool {
        self.active += 1;
        if let Some(message) = message {
            self.message = message.to_string();
        }
        if self.active == 1 {
            self.shown_at = Some(now);
            self.epoch += 1;
            self.visible = true;
            return true;
        }
        false
    }

    /// Balances one `show`. Extra hides are clamped and never drive the
    /// count negative.
    pub fn hide_at(&mut self, now: Instant) -> HideOutcome {
        self.active = self.active.saturating_sub(1);
        if self.active > 0 || !self.visible {
            return HideOutcome::StillActive;
        }
        let elapsed = self
            .shown_at
            .map(|shown| now.saturating_duration_since(shown))
            .unwrap_or(Duration::ZERO);
        HideOutcome::HideAfter {
            delay: MIN_DISPLAY.saturating_sub(elapsed),
            epoch: self.epoch,
        }
    }

    /// Completes a delayed hide. A stale epoch or a counter that went
    /// positive again in the meantime leaves the overlay untouched.
    pub fn finish_hide(&mut self, epoch: u64) -> bool {
        if epoch != self.epoch || self.active > 0 || !self.visible {
            return false;
        }
        self.visible = false;
        self.message.clear();
        true
    }

    /// Escape hatch for error-recovery paths where balancing is assumed
    /// broken: zeroes the counter and clears visibility immediately.
    pub fn force_hide(&mut self) {
        self.active = 0;
        self.visible = false;
        self.message.clear();
        self.epoch += 1;
    }
}

/// The app-wide handle, provided through context at startup. Copyable the
/// way the other context handles in this crate are.
#[derive(Clone, Copy)]
pub struct Loader {
    core: Signal<LoaderCore>,
    visible: Signal<bool>,
    message: Signal<String>,
}

impl Loader {
    pub fn from_signals(
        core: Signal<LoaderCore>,
        visible: Signal<bool>,
        message: Signal<String>,
    ) -> Self {
        Self {
            core,
            visible,
            message,
        }
    }

    pub fn is_visible(&self) -> bool {
        (self.visible)()
    }

    pub fn message(&self) -> String {
        (self.message)()
    }

    fn publish(&mut self) {
        let (visible, message) = {
            let core = self.core.read();
            (core.is_visible(), core.message().to_string())
        };
        self.visible.set(visible);
        self.message.set(message);
    }

    pub fn show(&mut self, message: Option<&str>) {
        self.core.write().show_at(Instant::now(), message);
        self.publish();
    }

    pub fn hide(&mut self) {
        let outcome = self.core.write().hide_at(Instant::now());
        if let HideOutcome::HideAfter { delay, epoch } = outcome {
            let mut loader = *self;
            spawn(async move {
                compat::sleep(delay).await;
                if loader.core.write().finish_hide(epoch) {
                    loader.publish();
                }
            });
        }
    }

    pub fn force_hide(&mut self) {
        self.core.write().force_hide();
        self.publish();
    }

    /// Shows for a fixed duration, then balances the pair itself.
    pub fn show_for(&mut self, duration: Duration, message: &str) {
        self.show(Some(message));
        let mut loader = *self;
        spawn(async move {
            compat::sleep(duration).await;
            loader.hide();
        });
    }

    pub fn show_page_load(&mut self, name: &str) {
        self.show_for(PRESET_HOLD, name);
    }

    pub fn show_language_change(&mut self, lang_label: &str) {
        self.show_for(PRESET_HOLD, lang_label);
    }

    pub fn show_http_request(&mut self, url: &str) {
        self.show(Some(url));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn start() -> Instant {
        Instant::now()
    }

    #[test]
    fn overlapping_shows_keep_the_loader_up() {
        let t0 = start();
        let mut core = LoaderCore::new();
        assert!(core.show_at(t0, Some("nav")));
        assert!(!core.show_at(t0, Some("http")));
        assert_eq!(core.active_count(), 2);

        // One of the two callers finishing changes nothing.
        assert_eq!(core.hide_at(t0 + Duration::from_millis(50)), HideOutcome::StillActive);
        assert_eq!(core.active_count(), 1);
        assert!(core.is_visible());
        // Last message wins until full hide.
        assert_eq!(core.message(), "http");
    }

    #[test]
    fn extra_hides_never_go_negative() {
        let t0 = start();
        let mut core = LoaderCore::new();
        core.hide_at(t0);
        core.hide_at(t0);
        assert_eq!(core.active_count(), 0);

        core.show_at(t0, None);
        core.hide_at(t0);
        core.hide_at(t0);
        core.hide_at(t0);
        assert_eq!(core.active_count(), 0);
    }

    #[test]
    fn fast_pair_still_holds_for_the_minimum_display() {
        let t0 = start();
        let mut core = LoaderCore::new();
        core.show_at(t0, None);
        match core.hide_at(t0 + Duration::from_millis(120)) {
            HideOutcome::HideAfter { delay, epoch } => {
                assert_eq!(delay, Duration::from_millis(180));
                assert!(core.is_visible());
                assert!(core.finish_hide(epoch));
                assert!(!core.is_visible());
            }
            HideOutcome::StillActive => panic!("count reached zero, expected a scheduled hide"),
        }
    }

    #[test]
    fn slow_operation_hides_immediately() {
        let t0 = start();
        let mut core = LoaderCore::new();
        core.show_at(t0, None);
        match core.hide_at(t0 + Duration::from_millis(900)) {
            HideOutcome::HideAfter { delay, .. } => assert_eq!(delay, Duration::ZERO),
            HideOutcome::StillActive => panic!("expected a scheduled hide"),
        }
    }

    #[test]
    fn reshow_voids_the_pending_hide() {
        let t0 = start();
        let mut core = LoaderCore::new();
        core.show_at(t0, Some("first"));
        let outcome = core.hide_at(t0 + Duration::from_millis(10));
        let HideOutcome::HideAfter { epoch, .. } = outcome else {
            panic!("expected a scheduled hide");
        };

        // A new caller arrives before the delayed hide fires.
        core.show_at(t0 + Duration::from_millis(20), Some("second"));
        assert!(!core.finish_hide(epoch));
        assert!(core.is_visible());
        assert_eq!(core.message(), "second");
    }

    #[test]
    fn message_resets_on_full_hide() {
        let t0 = start();
        let mut core = LoaderCore::new();
        core.show_at(t0, Some("saving"));
        let HideOutcome::HideAfter { epoch, .. } = core.hide_at(t0 + MIN_DISPLAY) else {
            panic!("expected a scheduled hide");
        };
        assert!(core.finish_hide(epoch));
        assert_eq!(core.message(), "");
    }

    #[test]
    fn force_hide_clears_everything_at_once() {
        let t0 = start();
        let mut core = LoaderCore::new();
        core.show_at(t0, Some("a"));
        core.show_at(t0, Some("b"));
        core.force_hide();
        assert_eq!(core.active_count(), 0);
        assert!(!core.is_visible());

        // A hide left over from before the force must not resurrect state.
        assert_eq!(core.hide_at(t0), HideOutcome::StillActive);
    }
}
