//! Profile storage behind a single typed key-value interface.
//!
//! The API client and theme state only see [`ProfileStore`]; the production
//! implementation keeps values in the system keychain via the `keyring`
//! crate. A missing entry is a valid state and maps to `None`.

use keyring::Entry;
use thiserror::Error;

/// Keychain service name for all LearnHub entries.
const SERVICE_NAME: &str = "com.learnhub.client";

const TOKEN_KEY: &str = "auth_token";
const DISPLAY_NAME_KEY: &str = "display_name";
const THEME_KEY: &str = "theme_preference";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("profile store operation failed: {0}")]
    OperationFailed(String),
}

impl From<keyring::Error> for StoreError {
    fn from(err: keyring::Error) -> Self {
        StoreError::OperationFailed(err.to_string())
    }
}

/// Typed accessors over the client-side key-value store.
///
/// Reads return `None` when the value is absent or the store is unreadable;
/// an unauthenticated request proceeding without a token is normal operation,
/// not an error.
pub trait ProfileStore: Send + Sync {
    /// Bearer token for outgoing requests, when the user is signed in.
    fn token(&self) -> Option<String>;

    /// Display name shown on generated certificates.
    fn display_name(&self) -> Option<String>;

    /// Persisted theme preference string ("light"/"dark").
    fn theme_preference(&self) -> Option<String>;

    /// Persist the theme preference.
    fn set_theme_preference(&self, theme: &str) -> Result<(), StoreError>;
}

/// Keychain-backed profile store.
pub struct KeychainStore;

impl KeychainStore {
    pub fn new() -> Self {
        Self
    }

    fn read(&self, key: &str) -> Option<String> {
        let entry = match Entry::new(SERVICE_NAME, key) {
            Ok(entry) => entry,
            Err(err) => {
                log::warn!("keychain entry {} unavailable: {}", key, err);
                return None;
            }
        };
        match entry.get_password() {
            Ok(value) => Some(value),
            Err(keyring::Error::NoEntry) => None,
            Err(err) => {
                log::warn!("keychain read of {} failed: {}", key, err);
                None
            }
        }
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let entry = Entry::new(SERVICE_NAME, key)?;
        entry.set_password(value)?;
        Ok(())
    }

    fn delete(&self, key: &str) -> Result<(), StoreError> {
        let entry = Entry::new(SERVICE_NAME, key)?;
        match entry.delete_credential() {
            Ok(()) => Ok(()),
            // Already deleted or never stored, idempotent
            Err(keyring::Error::NoEntry) => Ok(()),
            Err(err) => Err(StoreError::from(err)),
        }
    }

    /// Store the bearer token after sign-in.
    pub fn set_token(&self, token: &str) -> Result<(), StoreError> {
        self.write(TOKEN_KEY, token)
    }

    /// Remove the bearer token on sign-out. Idempotent.
    pub fn clear_token(&self) -> Result<(), StoreError> {
        self.delete(TOKEN_KEY)
    }

    /// Store the display name used on certificates.
    pub fn set_display_name(&self, name: &str) -> Result<(), StoreError> {
        self.write(DISPLAY_NAME_KEY, name)
    }
}

impl Default for KeychainStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileStore for KeychainStore {
    fn token(&self) -> Option<String> {
        self.read(TOKEN_KEY)
    }

    fn display_name(&self) -> Option<String> {
        self.read(DISPLAY_NAME_KEY)
    }

    fn theme_preference(&self) -> Option<String> {
        self.read(THEME_KEY)
    }

    fn set_theme_preference(&self, theme: &str) -> Result<(), StoreError> {
        self.write(THEME_KEY, theme)
    }
}
