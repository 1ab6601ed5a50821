//! Server-side admin sessions.
//!
//! A successful login mints an opaque random token and records it in a
//! process-wide session set; every admin operation re-checks its token
//! against that set. Sessions live for the process lifetime and are never
//! persisted.

use std::collections::HashSet;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tokio::sync::RwLock;

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("admin panel is disabled (ADMIN_PASSWORD is not set)")]
    AdminDisabled,
    #[error("invalid password")]
    InvalidPassword,
    #[error("invalid or expired session token")]
    InvalidToken,
    #[error("could not generate a session token")]
    TokenGeneration,
}

async fn sessions() -> &'static Arc<RwLock<HashSet<String>>> {
    static SESSIONS: OnceCell<Arc<RwLock<HashSet<String>>>> = OnceCell::const_new();
    SESSIONS
        .get_or_init(|| async { Arc::new(RwLock::new(HashSet::new())) })
        .await
}

fn mint_token() -> Result<String, AuthError> {
    let mut bytes = [0u8; 16];
    getrandom::getrandom(&mut bytes).map_err(|_| AuthError::TokenGeneration)?;
    Ok(bytes.iter().map(|b| format!("{b:02x}")).collect())
}

/// Compares the password against `ADMIN_PASSWORD` and opens a session.
pub async fn login(password: &str) -> Result<String, AuthError> {
    let expected = std::env::var("ADMIN_PASSWORD").unwrap_or_default();
    if expected.is_empty() {
        return Err(AuthError::AdminDisabled);
    }
    if password != expected {
        return Err(AuthError::InvalidPassword);
    }
    let token = mint_token()?;
    sessions().await.write().await.insert(token.clone());
    Ok(token)
}

/// Fails unless the token was minted by [`login`] in this process.
pub async fn require(token: &str) -> Result<(), AuthError> {
    if sessions().await.read().await.contains(token) {
        Ok(())
    } else {
        Err(AuthError::InvalidToken)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ADMIN_PASSWORD is process-global env state, so the login cases run
    // as one test.
    #[tokio::test]
    async fn login_and_require_round_trip() {
        std::env::remove_var("ADMIN_PASSWORD");
        assert!(matches!(login("anything").await, Err(AuthError::AdminDisabled)));

        std::env::set_var("ADMIN_PASSWORD", "s3cret");
        assert!(matches!(login("wrong").await, Err(AuthError::InvalidPassword)));

        let token = login("s3cret").await.unwrap();
        assert_eq!(token.len(), 32);
        require(&token).await.unwrap();
        assert!(matches!(require("deadbeef").await, Err(AuthError::InvalidToken)));
    }
}
