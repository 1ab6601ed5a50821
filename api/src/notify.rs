//! Server-side notification collaborator: a transactional-email HTTP API
//! (Web3Forms) taking a flat form payload and answering `{ success }`.
//!
//! Every submission fans out into two sends, one to the business inbox and
//! one confirmation to the customer. The pair runs concurrently and the
//! operation only counts as notified when both report success.

use crate::records::BookingRequest;
use crate::records::ContactSubmission;
use dioxus_logger::tracing;
use serde::Deserialize;
use serde::Serialize;
use std::env;

const ENDPOINT: &str = "https://api.web3forms.com/submit";

#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("WEB3FORMS_ACCESS_KEY is not set")]
    Unconfigured,
    #[error("notification request failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// The exact flat field set the forms API accepts.
#[derive(Clone, Debug, Serialize)]
pub struct EmailPayload {
    pub access_key: String,
    pub subject: String,
    pub from_name: String,
    pub email: String,
    pub message: String,
    pub to_email: String,
}

#[derive(Debug, Deserialize)]
struct FormsResponse {
    success: bool,
}

pub struct Mailer {
    access_key: String,
    business_email: String,
    client: reqwest::Client,
}

impl Mailer {
    /// Reads `WEB3FORMS_ACCESS_KEY` and `BUSINESS_EMAIL`. A missing access
    /// key is a hard configuration error; unlike persistence there is no
    /// degraded mode for notifications.
    pub fn from_env() -> Result<Self, NotifyError> {
        let access_key = env::var("WEB3FORMS_ACCESS_KEY").unwrap_or_default();
        if access_key.is_empty() {
            return Err(NotifyError::Unconfigured);
        }
        Ok(Self {
            access_key,
            business_email: env::var("BUSINESS_EMAIL")
                .unwrap_or_else(|_| "bonjour@fresh-maison.ca".to_string()),
            client: reqwest::Client::new(),
        })
    }

    fn payload(&self, subject: &str, from_name: &str, message: String, to_email: &str) -> EmailPayload {
        EmailPayload {
            access_key: self.access_key.clone(),
            subject: subject.to_string(),
            from_name: from_name.to_string(),
            email: self.business_email.clone(),
            message,
            to_email: to_email.to_string(),
        }
    }

    async fn send(&self, payload: EmailPayload) -> Result<bool, NotifyError> {
        let response: FormsResponse = self
            .client
            .post(ENDPOINT)
            .json(&payload)
            .send()
            .await?
            .json()
            .await?;
        Ok(response.success)
    }

    /// Sends the business copy and the customer confirmation concurrently.
    /// Returns true only when both deliveries report success.
    async fn send_pair(&self, business: EmailPayload, customer: EmailPayload) -> bool {
        let (business_result, customer_result) =
            tokio::join!(self.send(business), self.send(customer));
        let delivered = |label: &str, result: Result<bool, NotifyError>| match result {
            Ok(true) => true,
            Ok(false) => {
                tracing::warn!(recipient = label, "forms API reported failure");
                false
            }
            Err(e) => {
                tracing::warn!(recipient = label, error = %e, "notification send failed");
                false
            }
        };
        let business_ok = delivered("business", business_result);
        let customer_ok = delivered("customer", customer_result);
        business_ok && customer_ok
    }

    pub async fn notify_booking(&self, record: &BookingRequest) -> bool {
        let business = self.payload(
            "New booking request",
            &record.contact.full_name(),
            booking_summary(record),
            &self.business_email,
        );
        let customer = self.payload(
            "Your cleaning booking request",
            "Fresh Maison",
            booking_confirmation(record),
            &record.contact.email,
        );
        self.send_pair(business, customer).await
    }

    pub async fn notify_contact(&self, record: &ContactSubmission) -> bool {
        let business = self.payload(
            "New contact message",
            &record.name,
            contact_summary(record),
            &self.business_email,
        );
        let customer = self.payload(
            "We received your message",
            "Fresh Maison",
            contact_confirmation(record),
            &record.email,
        );
        self.send_pair(business, customer).await
    }
}

fn booking_summary(record: &BookingRequest) -> String {
    format!(
        "Service: {}\nDate: {} at {}\nFrequency: {}\nAddons: {}\n\
         Subtotal: ${} / Tax: ${} / Total: ${}\n\n\
         Customer: {}\nEmail: {}\nPhone: {}\nAddress: {}\n\nNotes: {}",
        record.service_id,
        record.date,
        record.time_slot,
        record.frequency,
        if record.addon_ids.is_empty() {
            "none".to_string()
        } else {
            record.addon_ids.join(", ")
        },
        record.subtotal,
        record.tax,
        record.total,
        record.contact.full_name(),
        record.contact.email,
        record.contact.phone,
        record.contact.address,
        record.special_instructions,
    )
}

fn booking_confirmation(record: &BookingRequest) -> String {
    format!(
        "Hi {},\n\nThanks for your booking request for {} at {}. \
         The estimated total is ${} (taxes included). Our team will contact \
         you shortly to confirm the appointment.\n\nFresh Maison",
        record.contact.first_name, record.date, record.time_slot, record.total,
    )
}

fn contact_summary(record: &ContactSubmission) -> String {
    format!(
        "Subject: {}\nFrom: {} <{}> {}\n\n{}",
        record.subject, record.name, record.email, record.phone, record.message,
    )
}

fn contact_confirmation(record: &ContactSubmission) -> String {
    format!(
        "Hi {},\n\nWe received your message and will get back to you within \
         one business day.\n\nFresh Maison",
        record.name,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_is_the_exact_flat_field_set() {
        let payload = EmailPayload {
            access_key: "key".into(),
            subject: "s".into(),
            from_name: "n".into(),
            email: "e@example.com".into(),
            message: "m".into(),
            to_email: "t@example.com".into(),
        };
        let value = serde_json::to_value(&payload).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["access_key", "subject", "from_name", "email", "message", "to_email"]
        );
    }

    #[test]
    fn booking_summary_carries_the_totals() {
        let record = BookingRequest {
            id: None,
            service_id: "deep".into(),
            property_type: None,
            property_size: None,
            bedrooms: "3".into(),
            bathrooms: "2".into(),
            special_instructions: "side door".into(),
            addon_ids: vec!["oven".into(), "windows".into()],
            date: "2026-09-15".into(),
            time_slot: "10:00".into(),
            frequency: crate::catalog::Frequency::BiWeekly,
            contact: Default::default(),
            subtotal: 212,
            tax: 32,
            total: 244,
            status: Default::default(),
            created_at: crate::records::now_iso(),
        };
        let body = booking_summary(&record);
        assert!(body.contains("Total: $244"));
        assert!(body.contains("oven, windows"));
        assert!(body.contains("bi-weekly"));
    }
}
