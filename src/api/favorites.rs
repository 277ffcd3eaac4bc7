//! Favorite course relations.
//!
//! Toggle-only relation with no ordering. Reads and mutations propagate
//! errors, except the existence check which resolves to `false` on failure.

use serde::Deserialize;

use super::client::ApiClient;
use super::error::{ApiError, Fallback};
use super::types::{Favorite, ToggleOutcome};

/// Response from GET /favorites/{userId}/check/{courseId}.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CheckFavoriteResponse {
    is_favorite: bool,
}

/// Fetch all favorites for a user. Errors propagate.
pub async fn get_user_favorites(
    client: &ApiClient,
    user_id: &str,
) -> Result<Vec<Favorite>, ApiError> {
    client
        .get_json(&format!("/favorites/{}", urlencoding::encode(user_id)))
        .await
}

/// Add a course to a user's favorites. Errors propagate.
///
/// POST /favorites/{userId}/add/{courseId} returns the created relation.
pub async fn add_to_favorites(
    client: &ApiClient,
    user_id: &str,
    course_id: u64,
) -> Result<Favorite, ApiError> {
    client
        .post_json(&format!(
            "/favorites/{}/add/{}",
            urlencoding::encode(user_id),
            course_id
        ))
        .await
}

/// Remove a course from a user's favorites. Errors propagate.
pub async fn remove_from_favorites(
    client: &ApiClient,
    user_id: &str,
    course_id: u64,
) -> Result<(), ApiError> {
    client
        .delete(&format!(
            "/favorites/{}/remove/{}",
            urlencoding::encode(user_id),
            course_id
        ))
        .await
}

/// Check whether a course is in a user's favorites.
///
/// Never fails: any error resolves to `false`.
pub async fn check_is_favorite(
    client: &ApiClient,
    user_id: &str,
    course_id: u64,
) -> Result<bool, ApiError> {
    let checked = client
        .get_json::<CheckFavoriteResponse>(&format!(
            "/favorites/{}/check/{}",
            urlencoding::encode(user_id),
            course_id
        ))
        .await
        .map(|response| response.is_favorite);
    Fallback::Value(false).resolve(checked, "favorite check")
}

/// Toggle a favorite relation based on the caller-supplied current state.
///
/// The current state is trusted as-is and not re-verified server-side before
/// dispatching to add or remove. Errors from the underlying operation
/// propagate.
pub async fn toggle_favorite(
    client: &ApiClient,
    user_id: &str,
    course_id: u64,
    is_currently_favorite: bool,
) -> Result<ToggleOutcome, ApiError> {
    if is_currently_favorite {
        remove_from_favorites(client, user_id, course_id).await?;
        Ok(ToggleOutcome {
            success: true,
            is_favorite: false,
            data: None,
        })
    } else {
        let favorite = add_to_favorites(client, user_id, course_id).await?;
        Ok(ToggleOutcome {
            success: true,
            is_favorite: true,
            data: Some(favorite),
        })
    }
}
