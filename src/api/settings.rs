//! User account settings.
//!
//! Settings are replaced wholesale on update; there is no partial patch.
//! A failed fetch resolves to the fixed default object, while a failed
//! update propagates so the caller can surface it.

use super::client::ApiClient;
use super::error::{ApiError, Fallback};
use super::types::UserSettings;

/// Fetch the caller's settings.
///
/// Never fails: any error resolves to [`UserSettings::default`].
pub async fn get_user_settings(client: &ApiClient) -> Result<UserSettings, ApiError> {
    let fetched = client.get_json("/user/settings").await;
    Fallback::Value(UserSettings::default()).resolve(fetched, "settings fetch")
}

/// Replace the caller's settings with the given object. Errors propagate.
///
/// PUT /user/settings with the full settings body; returns the stored
/// settings as the backend persisted them.
pub async fn update_user_settings(
    client: &ApiClient,
    settings: &UserSettings,
) -> Result<UserSettings, ApiError> {
    client.put_json("/user/settings", settings).await
}
