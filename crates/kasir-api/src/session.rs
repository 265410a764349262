//! # Session Store
//!
//! In-memory holder for the session token, role, and currency
//! preference.
//!
//! The device's persistent preference store is an external collaborator;
//! this type is the process-local view the engine reads from and writes
//! through. Currency is observable because the display layer re-renders
//! prices when the cashier switches it mid-session.

use std::sync::Mutex;

use tokio::sync::watch;

/// Currency code used until the preference store says otherwise.
pub const DEFAULT_CURRENCY: &str = "IDR";

#[derive(Debug, Default)]
struct AuthState {
    token: Option<String>,
    role: Option<String>,
}

/// Session token, role, and currency selection.
///
/// ## Thread Safety
/// Auth state sits behind a `Mutex` (set once at login, read per
/// request); the currency rides a `watch` channel so any number of
/// observers see the latest selection.
#[derive(Debug)]
pub struct SessionStore {
    auth: Mutex<AuthState>,
    currency: watch::Sender<String>,
}

impl SessionStore {
    /// Creates an empty session with the default currency.
    pub fn new() -> Self {
        let (currency, _) = watch::channel(DEFAULT_CURRENCY.to_string());
        SessionStore {
            auth: Mutex::new(AuthState::default()),
            currency,
        }
    }

    /// Current bearer token, if a login succeeded this session.
    pub fn token(&self) -> Option<String> {
        self.auth.lock().expect("session mutex poisoned").token.clone()
    }

    /// Role reported at login, if any.
    pub fn role(&self) -> Option<String> {
        self.auth.lock().expect("session mutex poisoned").role.clone()
    }

    /// Stores the token and role from a confirmed login.
    pub fn set_auth(&self, token: impl Into<String>, role: impl Into<String>) {
        let mut auth = self.auth.lock().expect("session mutex poisoned");
        auth.token = Some(token.into());
        auth.role = Some(role.into());
    }

    /// Drops token and role (logout).
    pub fn clear_auth(&self) {
        let mut auth = self.auth.lock().expect("session mutex poisoned");
        auth.token = None;
        auth.role = None;
    }

    /// Currently selected currency code.
    pub fn currency(&self) -> String {
        self.currency.borrow().clone()
    }

    /// Selects a currency code, notifying all observers.
    pub fn set_currency(&self, code: impl Into<String>) {
        self.currency.send_replace(code.into());
    }

    /// Subscribes to currency changes.
    ///
    /// The receiver yields the current value immediately and every
    /// change after.
    pub fn observe_currency(&self) -> watch::Receiver<String> {
        self.currency.subscribe()
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        SessionStore::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_roundtrip() {
        let session = SessionStore::new();
        assert_eq!(session.token(), None);
        assert_eq!(session.role(), None);

        session.set_auth("token-123", "admin");
        assert_eq!(session.token().as_deref(), Some("token-123"));
        assert_eq!(session.role().as_deref(), Some("admin"));

        session.clear_auth();
        assert_eq!(session.token(), None);
        assert_eq!(session.role(), None);
    }

    #[test]
    fn test_currency_defaults_to_idr() {
        let session = SessionStore::new();
        assert_eq!(session.currency(), "IDR");
    }

    #[tokio::test]
    async fn test_observe_currency_sees_changes() {
        let session = SessionStore::new();
        let mut rx = session.observe_currency();
        assert_eq!(*rx.borrow(), "IDR");

        session.set_currency("USD");
        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), "USD");
        assert_eq!(session.currency(), "USD");
    }

    #[test]
    fn test_set_currency_without_observers_is_fine() {
        let session = SessionStore::new();
        session.set_currency("USD");
        assert_eq!(session.currency(), "USD");
    }
}
