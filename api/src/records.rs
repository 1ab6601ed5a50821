//! Submission record types shared between the client and the server
//! functions. These are the rows the persistence collaborator stores and
//! the payloads the notification collaborator summarizes.

use crate::catalog::Frequency;
use crate::catalog::PropertyType;
use serde::Deserialize;
use serde::Serialize;

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum BookingStatus {
    #[default]
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
}

/// Contact details collected by the wizard's fourth step and the contact
/// page form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub accepts_email_updates: bool,
    pub accepts_sms_updates: bool,
}

impl ContactInfo {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A booking submission assembled by the wizard on confirmation.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BookingRequest {
    /// Row id assigned by the store; absent until saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub service_id: String,
    pub property_type: Option<PropertyType>,
    pub property_size: Option<u32>,
    pub bedrooms: String,
    pub bathrooms: String,
    pub special_instructions: String,
    pub addon_ids: Vec<String>,
    /// ISO `YYYY-MM-DD`, chosen from a min-attribute-guarded date input.
    pub date: String,
    pub time_slot: String,
    pub frequency: Frequency,
    #[serde(flatten)]
    pub contact: ContactInfo,
    pub subtotal: i64,
    pub tax: i64,
    pub total: i64,
    pub status: BookingStatus,
    pub created_at: String,
}

/// A message from the contact page.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    pub status: ContactStatus,
    pub created_at: String,
}

/// What a submission flow reports back to the screen that drove it.
///
/// `persisted` is informational only: an unconfigured store downgrades the
/// save to a logged no-op and the overall outcome tracks the notification
/// result alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionOutcome {
    pub notified: bool,
    pub persisted: bool,
}

impl SubmissionOutcome {
    pub fn succeeded(self) -> bool {
        self.notified
    }
}

pub fn now_iso() -> String {
    chrono::Utc::now().to_rfc3339()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn statuses_have_lowercase_wire_forms() {
        assert_eq!(BookingStatus::Pending.to_string(), "pending");
        assert_eq!(
            BookingStatus::from_str("cancelled").ok(),
            Some(BookingStatus::Cancelled)
        );
        assert_eq!(ContactStatus::Replied.to_string(), "replied");
    }

    #[test]
    fn outcome_tracks_notification_only() {
        let outcome = SubmissionOutcome {
            notified: true,
            persisted: false,
        };
        assert!(outcome.succeeded());
        let outcome = SubmissionOutcome {
            notified: false,
            persisted: true,
        };
        assert!(!outcome.succeeded());
    }

    #[test]
    fn booking_request_serializes_contact_flat() {
        let request = BookingRequest {
            id: None,
            service_id: "residential".into(),
            property_type: Some(PropertyType::Apartment),
            property_size: Some(900),
            bedrooms: "2".into(),
            bathrooms: "1.5".into(),
            special_instructions: String::new(),
            addon_ids: vec!["windows".into()],
            date: "2026-09-01".into(),
            time_slot: "09:00".into(),
            frequency: Frequency::Weekly,
            contact: ContactInfo {
                first_name: "Claire".into(),
                last_name: "Tremblay".into(),
                email: "claire@example.com".into(),
                phone: "514-555-0101".into(),
                address: "12 Rue Principale".into(),
                accepts_email_updates: true,
                accepts_sms_updates: false,
            },
            subtotal: 128,
            tax: 19,
            total: 147,
            status: BookingStatus::Pending,
            created_at: now_iso(),
        };
        let value = serde_json::to_value(&request).unwrap();
        // The store schema is one flat row; contact fields sit beside the
        // booking fields rather than under a nested object.
        assert_eq!(value["first_name"], "Claire");
        assert_eq!(value["frequency"], "weekly");
        assert_eq!(value["status"], "pending");
        assert!(value.get("id").is_none());
    }
}
