//! The five-step booking wizard's form state machine.
//!
//! The draft lives in a signal owned by the booking screen and is discarded
//! on navigation away or after a successful submission; nothing is
//! persisted between reloads. Step transitions are strictly sequential:
//! the only mutations of the current step are `next_step` / `previous_step`
//! clamped to the step range.

use api::catalog;
use api::catalog::Frequency;
use api::catalog::PropertyType;
use api::catalog::TimeSlot;
use api::pricing;
use api::pricing::Quote;
use api::records::BookingRequest;
use api::records::BookingStatus;
use api::records::ContactInfo;
use std::collections::BTreeSet;

pub const STEP_COUNT: u8 = 5;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WizardStep {
    #[default]
    ServiceSelect,
    PropertyDetails,
    Scheduling,
    ContactInfo,
    Review,
}

impl WizardStep {
    pub fn number(self) -> u8 {
        match self {
            Self::ServiceSelect => 1,
            Self::PropertyDetails => 2,
            Self::Scheduling => 3,
            Self::ContactInfo => 4,
            Self::Review => 5,
        }
    }

    fn next(self) -> Option<Self> {
        match self {
            Self::ServiceSelect => Some(Self::PropertyDetails),
            Self::PropertyDetails => Some(Self::Scheduling),
            Self::Scheduling => Some(Self::ContactInfo),
            Self::ContactInfo => Some(Self::Review),
            Self::Review => None,
        }
    }

    fn previous(self) -> Option<Self> {
        match self {
            Self::ServiceSelect => None,
            Self::PropertyDetails => Some(Self::ServiceSelect),
            Self::Scheduling => Some(Self::PropertyDetails),
            Self::ContactInfo => Some(Self::Scheduling),
            Self::Review => Some(Self::ContactInfo),
        }
    }

    pub fn title_key(self) -> &'static str {
        match self {
            Self::ServiceSelect => "wizard.step.service",
            Self::PropertyDetails => "wizard.step.property",
            Self::Scheduling => "wizard.step.schedule",
            Self::ContactInfo => "wizard.step.contact",
            Self::Review => "wizard.step.review",
        }
    }
}

/// Everything the wizard has collected so far. Text fields hold the raw
/// input strings; parsing happens when the submission record is assembled.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BookingDraft {
    pub service_id: Option<String>,
    pub property_type: Option<PropertyType>,
    pub property_size: String,
    pub bedrooms: String,
    pub bathrooms: String,
    pub special_instructions: String,
    pub addons: BTreeSet<String>,
    pub date: String,
    pub time_slot: String,
    pub frequency: Frequency,
    pub contact: ContactInfo,
    step: WizardStep,
    completed: [bool; STEP_COUNT as usize],
}

impl BookingDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Progress-bar state only; never consulted for transition gating.
    pub fn is_completed(&self, step: WizardStep) -> bool {
        self.completed[(step.number() - 1) as usize]
    }

    /// Sets the selected offering. The only check is existence in the fixed
    /// catalog; an unknown id leaves the draft unchanged.
    pub fn select_service(&mut self, id: &str) {
        if catalog::service(id).is_some() {
            self.service_id = Some(id.to_string());
        }
    }

    /// Flips an addon in or out of the set. Unknown ids are ignored so the
    /// set only ever holds catalog ids.
    pub fn toggle_addon(&mut self, id: &str) {
        if catalog::addon(id).is_none() {
            return;
        }
        if !self.addons.remove(id) {
            self.addons.insert(id.to_string());
        }
    }

    /// Picks a time slot by its canonical string. Unknown slots are
    /// rejected, so the stored value is always one of the catalog's ten.
    pub fn select_time_slot(&mut self, time: &str) {
        if let Some(slot) = catalog::slot(time) {
            self.select_slot(slot);
        }
    }

    /// A slot flagged unavailable must not change the draft.
    fn select_slot(&mut self, slot: &TimeSlot) {
        if slot.available {
            self.time_slot = slot.time.to_string();
        }
    }

    /// Whether the continue control for the current step is enabled. Only
    /// steps 1 and 3 gate on their data; property and contact details carry
    /// visual required markers without blocking.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::ServiceSelect => self.service_id.is_some(),
            WizardStep::Scheduling => !self.time_slot.is_empty(),
            WizardStep::PropertyDetails | WizardStep::ContactInfo => true,
            WizardStep::Review => false,
        }
    }

    /// Advances one step, marking the step just left as completed. Returns
    /// true when the step changed.
    pub fn next_step(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        match self.step.next() {
            Some(next) => {
                self.completed[(self.step.number() - 1) as usize] = true;
                self.step = next;
                true
            }
            None => false,
        }
    }

    /// Goes back one step. Completion flags are left as they were.
    pub fn previous_step(&mut self) -> bool {
        match self.step.previous() {
            Some(previous) => {
                self.step = previous;
                true
            }
            None => false,
        }
    }

    /// The live quote, recomputed synchronously on every change. None until
    /// a service is selected.
    pub fn quote(&self) -> Option<Quote> {
        let service_id = self.service_id.as_deref()?;
        let addon_ids: Vec<String> = self.addons.iter().cloned().collect();
        pricing::quote_for(service_id, &addon_ids, self.frequency)
    }

    /// Earliest bookable date, for the date input's `min` attribute. This
    /// is the only place the date floor is enforced.
    pub fn min_date() -> String {
        let tomorrow = chrono::Utc::now().date_naive() + chrono::Days::new(1);
        tomorrow.format("%Y-%m-%d").to_string()
    }

    /// Assembles the submission record from the draft plus computed totals.
    /// None until the service gate has been satisfied.
    pub fn to_request(&self) -> Option<BookingRequest> {
        let service_id = self.service_id.clone()?;
        let quote = self.quote()?;
        Some(BookingRequest {
            id: None,
            service_id,
            property_type: self.property_type,
            property_size: self.property_size.trim().parse().ok(),
            bedrooms: self.bedrooms.clone(),
            bathrooms: self.bathrooms.clone(),
            special_instructions: self.special_instructions.clone(),
            addon_ids: self.addons.iter().cloned().collect(),
            date: self.date.clone(),
            time_slot: self.time_slot.clone(),
            frequency: self.frequency,
            contact: self.contact.clone(),
            subtotal: quote.subtotal,
            tax: quote.tax,
            total: quote.total,
            status: BookingStatus::Pending,
            created_at: api::records::now_iso(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_at_review() -> BookingDraft {
        let mut draft = BookingDraft::new();
        draft.select_service("deep");
        assert!(draft.next_step());
        assert!(draft.next_step());
        draft.select_time_slot("10:00");
        assert!(draft.next_step());
        assert!(draft.next_step());
        draft
    }

    #[test]
    fn steps_clamp_at_both_ends() {
        let mut draft = draft_at_review();
        assert_eq!(draft.step(), WizardStep::Review);
        assert!(!draft.next_step());
        assert_eq!(draft.step().number(), 5);

        for _ in 0..10 {
            draft.previous_step();
        }
        assert_eq!(draft.step().number(), 1);
        assert!(!draft.previous_step());
    }

    #[test]
    fn step_one_gates_on_a_selected_service() {
        let mut draft = BookingDraft::new();
        assert!(!draft.can_advance());
        assert!(!draft.next_step());

        draft.select_service("nonexistent");
        assert_eq!(draft.service_id, None);

        draft.select_service("residential");
        assert!(draft.next_step());
        assert_eq!(draft.step(), WizardStep::PropertyDetails);
    }

    #[test]
    fn property_and_contact_steps_do_not_block() {
        let mut draft = BookingDraft::new();
        draft.select_service("residential");
        draft.next_step();
        // No property details entered at all.
        assert!(draft.next_step());
        assert_eq!(draft.step(), WizardStep::Scheduling);

        draft.select_time_slot("08:00");
        draft.next_step();
        // Contact fields empty; advancing is still allowed.
        assert!(draft.next_step());
        assert_eq!(draft.step(), WizardStep::Review);
    }

    #[test]
    fn scheduling_gates_on_a_time_slot() {
        let mut draft = BookingDraft::new();
        draft.select_service("commercial");
        draft.next_step();
        draft.next_step();
        assert!(!draft.next_step());

        draft.select_time_slot("07:00"); // not a canonical slot
        assert!(draft.time_slot.is_empty());

        draft.select_time_slot("14:00");
        assert!(draft.next_step());
    }

    #[test]
    fn unavailable_slot_leaves_the_draft_unchanged() {
        let mut draft = BookingDraft::new();
        draft.select_time_slot("09:00");
        assert_eq!(draft.time_slot, "09:00");

        let full = TimeSlot {
            time: "10:00",
            available: false,
        };
        draft.select_slot(&full);
        assert_eq!(draft.time_slot, "09:00");
    }

    #[test]
    fn completed_flags_track_steps_left_forward_only() {
        let mut draft = BookingDraft::new();
        draft.select_service("deep");
        draft.next_step();
        assert!(draft.is_completed(WizardStep::ServiceSelect));
        assert!(!draft.is_completed(WizardStep::PropertyDetails));

        // Going back does not un-complete anything.
        draft.previous_step();
        assert!(draft.is_completed(WizardStep::ServiceSelect));
    }

    #[test]
    fn addon_toggle_flips_membership_and_reprices() {
        let mut draft = BookingDraft::new();
        draft.select_service("commercial");
        draft.frequency = Frequency::Monthly;

        draft.toggle_addon("windows");
        assert_eq!(draft.quote().map(|q| q.total), Some(252));

        draft.toggle_addon("windows");
        let base_only = draft.quote().unwrap();
        assert_eq!(base_only.subtotal, 190);

        draft.toggle_addon("jacuzzi");
        assert!(draft.addons.is_empty());
    }

    #[test]
    fn request_carries_the_computed_totals() {
        let mut draft = draft_at_review();
        draft.frequency = Frequency::Weekly;
        draft.toggle_addon("fridge");
        draft.property_size = "1200".into();
        draft.date = "2026-09-20".into();

        let request = draft.to_request().unwrap();
        // (180 + 25) * 0.85 = 174.25 -> 174; 174 * 0.14975 = 26.06 -> 26
        assert_eq!(request.subtotal, 174);
        assert_eq!(request.tax, 26);
        assert_eq!(request.total, 200);
        assert_eq!(request.property_size, Some(1200));
        assert_eq!(request.time_slot, "10:00");
        assert_eq!(request.status, BookingStatus::Pending);
    }

    #[test]
    fn no_request_without_a_service() {
        assert!(BookingDraft::new().to_request().is_none());
    }
}
