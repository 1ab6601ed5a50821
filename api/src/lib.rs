//! This crate contains the shared domain model and all fullstack server
//! functions for the Fresh Maison site.
//!
//! The catalog, pricing engine and record types are plain shared code; the
//! persistence and notification collaborators are server-only and live
//! behind the wasm cfg the same way the network-facing modules do in the
//! rest of the workspace.

pub mod catalog;
pub mod config;
pub mod pricing;
pub mod records;

#[cfg(not(target_arch = "wasm32"))]
pub mod notify;
#[cfg(not(target_arch = "wasm32"))]
mod sessions;
#[cfg(not(target_arch = "wasm32"))]
pub mod store;

use config::SiteConfig;
use dioxus::prelude::*;
use records::BookingRequest;
use records::BookingStatus;
use records::ContactStatus;
use records::ContactSubmission;
use records::SubmissionOutcome;
use serde::Deserialize;
use serde::Serialize;

pub type ApiError = anyhow::Error;

/// Opaque admin session token returned by [`admin_login`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdminToken(pub String);

/// Returns the static site settings used during first render.
#[post("/api/site_config")]
pub async fn site_config() -> Result<SiteConfig, ApiError> {
    Ok(SiteConfig::from_env())
}

/// Persists a booking request (soft no-op when the store is unconfigured)
/// and relays the two notification emails. The outcome the client acts on
/// reflects the notification result.
#[post("/api/submit_booking")]
pub async fn submit_booking(mut record: BookingRequest) -> Result<SubmissionOutcome, ApiError> {
    use store::RecordStore;

    record.id = None;
    record.status = BookingStatus::Pending;
    record.created_at = records::now_iso();

    let persisted = match store::Store::from_env().save_booking(&record).await? {
        store::SaveOutcome::Saved => true,
        store::SaveOutcome::Skipped => false,
    };

    let mailer = notify::Mailer::from_env()?;
    let notified = mailer.notify_booking(&record).await;
    dioxus_logger::tracing::info!(notified, persisted, "booking submission processed");

    Ok(SubmissionOutcome { notified, persisted })
}

/// Persists a contact message and relays the two notification emails, with
/// the same degraded-store behavior as [`submit_booking`].
#[post("/api/submit_contact")]
pub async fn submit_contact(mut record: ContactSubmission) -> Result<SubmissionOutcome, ApiError> {
    use store::RecordStore;

    record.id = None;
    record.status = ContactStatus::New;
    record.created_at = records::now_iso();

    let persisted = match store::Store::from_env().save_contact(&record).await? {
        store::SaveOutcome::Saved => true,
        store::SaveOutcome::Skipped => false,
    };

    let mailer = notify::Mailer::from_env()?;
    let notified = mailer.notify_contact(&record).await;
    dioxus_logger::tracing::info!(notified, persisted, "contact submission processed");

    Ok(SubmissionOutcome { notified, persisted })
}

/// Opens an admin session. The password is checked against `ADMIN_PASSWORD`.
#[post("/api/admin_login")]
pub async fn admin_login(password: String) -> Result<AdminToken, ApiError> {
    let token = sessions::login(&password).await?;
    Ok(AdminToken(token))
}

/// Lists stored booking requests, newest first. Admin only.
#[post("/api/booking_requests")]
pub async fn booking_requests(token: AdminToken) -> Result<Vec<BookingRequest>, ApiError> {
    use store::RecordStore;

    sessions::require(&token.0).await?;
    Ok(store::Store::from_env().list_bookings().await?)
}

/// Lists stored contact messages, newest first. Admin only.
#[post("/api/contact_submissions")]
pub async fn contact_submissions(token: AdminToken) -> Result<Vec<ContactSubmission>, ApiError> {
    use store::RecordStore;

    sessions::require(&token.0).await?;
    Ok(store::Store::from_env().list_contacts().await?)
}

/// Moves a booking to a new status. Admin only.
#[post("/api/update_booking_status")]
pub async fn update_booking_status(
    token: AdminToken,
    id: i64,
    status: BookingStatus,
) -> Result<(), ApiError> {
    use store::RecordStore;

    sessions::require(&token.0).await?;
    store::Store::from_env()
        .update_booking_status(id, status)
        .await?;
    Ok(())
}
