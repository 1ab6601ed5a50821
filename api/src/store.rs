//! Server-side persistence collaborator: a PostgREST-style hosted backend
//! (Supabase) consumed over plain HTTP.
//!
//! Credentials come from the environment. When they are absent the store
//! runs unconfigured: saves become logged no-ops so the submission flows
//! still reach the notification collaborator, while admin reads fail with
//! an error the admin screen can display.

use crate::records::BookingRequest;
use crate::records::BookingStatus;
use crate::records::ContactSubmission;
use dioxus_logger::tracing;
use serde::Serialize;
use std::env;

const BOOKINGS_TABLE: &str = "booking_requests";
const CONTACTS_TABLE: &str = "contact_submissions";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("persistence backend is not configured")]
    Unconfigured,
    #[error("persistence request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("persistence backend rejected the request ({status}): {body}")]
    Rejected {
        status: reqwest::StatusCode,
        body: String,
    },
}

/// Whether a save actually reached the backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SaveOutcome {
    Saved,
    /// The store is unconfigured; the record was logged and dropped.
    Skipped,
}

/// The operations the submission flows and the admin panel rely on.
pub trait RecordStore {
    async fn save_booking(&self, record: &BookingRequest) -> Result<SaveOutcome, StoreError>;
    async fn save_contact(&self, record: &ContactSubmission) -> Result<SaveOutcome, StoreError>;
    async fn list_bookings(&self) -> Result<Vec<BookingRequest>, StoreError>;
    async fn list_contacts(&self) -> Result<Vec<ContactSubmission>, StoreError>;
    async fn update_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> Result<(), StoreError>;
}

pub struct SupabaseStore {
    base_url: String,
    anon_key: String,
    client: reqwest::Client,
}

pub enum Store {
    Supabase(SupabaseStore),
    Unconfigured,
}

impl Store {
    /// Reads `SUPABASE_URL` / `SUPABASE_ANON_KEY`. Either one missing or
    /// empty leaves the store unconfigured.
    pub fn from_env() -> Self {
        let url = env::var("SUPABASE_URL").unwrap_or_default();
        let key = env::var("SUPABASE_ANON_KEY").unwrap_or_default();
        if url.is_empty() || key.is_empty() {
            tracing::warn!("SUPABASE_URL / SUPABASE_ANON_KEY unset; records will not be persisted");
            return Self::Unconfigured;
        }
        Self::Supabase(SupabaseStore {
            base_url: url.trim_end_matches('/').to_string(),
            anon_key: key,
            client: reqwest::Client::new(),
        })
    }
}

impl SupabaseStore {
    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }

    fn authed(&self, builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        builder
            .header("apikey", &self.anon_key)
            .header("Authorization", format!("Bearer {}", self.anon_key))
    }

    async fn insert<T: Serialize>(&self, table: &str, row: &T) -> Result<(), StoreError> {
        let response = self
            .authed(self.client.post(self.table_url(table)))
            .header("Prefer", "return=minimal")
            .json(row)
            .send()
            .await?;
        check(response).await?;
        Ok(())
    }

    async fn select_all<T: serde::de::DeserializeOwned>(
        &self,
        table: &str,
    ) -> Result<Vec<T>, StoreError> {
        let response = self
            .authed(self.client.get(self.table_url(table)))
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        let response = check(response).await?;
        Ok(response.json().await?)
    }
}

async fn check(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let body = response.text().await.unwrap_or_default();
    Err(StoreError::Rejected { status, body })
}

impl RecordStore for Store {
    async fn save_booking(&self, record: &BookingRequest) -> Result<SaveOutcome, StoreError> {
        match self {
            Self::Supabase(store) => {
                store.insert(BOOKINGS_TABLE, record).await?;
                Ok(SaveOutcome::Saved)
            }
            Self::Unconfigured => {
                tracing::warn!(
                    service = %record.service_id,
                    date = %record.date,
                    "store unconfigured; booking request not persisted"
                );
                Ok(SaveOutcome::Skipped)
            }
        }
    }

    async fn save_contact(&self, record: &ContactSubmission) -> Result<SaveOutcome, StoreError> {
        match self {
            Self::Supabase(store) => {
                store.insert(CONTACTS_TABLE, record).await?;
                Ok(SaveOutcome::Saved)
            }
            Self::Unconfigured => {
                tracing::warn!(
                    subject = %record.subject,
                    "store unconfigured; contact submission not persisted"
                );
                Ok(SaveOutcome::Skipped)
            }
        }
    }

    async fn list_bookings(&self) -> Result<Vec<BookingRequest>, StoreError> {
        match self {
            Self::Supabase(store) => store.select_all(BOOKINGS_TABLE).await,
            Self::Unconfigured => Err(StoreError::Unconfigured),
        }
    }

    async fn list_contacts(&self) -> Result<Vec<ContactSubmission>, StoreError> {
        match self {
            Self::Supabase(store) => store.select_all(CONTACTS_TABLE).await,
            Self::Unconfigured => Err(StoreError::Unconfigured),
        }
    }

    async fn update_booking_status(
        &self,
        id: i64,
        status: BookingStatus,
    ) -> Result<(), StoreError> {
        match self {
            Self::Supabase(store) => {
                let response = store
                    .authed(store.client.patch(store.table_url(BOOKINGS_TABLE)))
                    .query(&[("id", format!("eq.{id}"))])
                    .json(&serde_json::json!({ "status": status }))
                    .send()
                    .await?;
                check(response).await?;
                Ok(())
            }
            Self::Unconfigured => Err(StoreError::Unconfigured),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::records::ContactStatus;

    fn sample_contact() -> ContactSubmission {
        ContactSubmission {
            id: None,
            name: "Marc".into(),
            email: "marc@example.com".into(),
            phone: String::new(),
            subject: "Quote".into(),
            message: "How much for a townhouse?".into(),
            status: ContactStatus::New,
            created_at: crate::records::now_iso(),
        }
    }

    #[tokio::test]
    async fn unconfigured_save_is_a_skipped_soft_no_op() {
        let store = Store::Unconfigured;
        let outcome = store.save_contact(&sample_contact()).await.unwrap();
        assert_eq!(outcome, SaveOutcome::Skipped);
    }

    #[tokio::test]
    async fn unconfigured_reads_error_out() {
        let store = Store::Unconfigured;
        assert!(matches!(
            store.list_bookings().await,
            Err(StoreError::Unconfigured)
        ));
        assert!(matches!(
            store.update_booking_status(1, BookingStatus::Confirmed).await,
            Err(StoreError::Unconfigured)
        ));
    }
}
