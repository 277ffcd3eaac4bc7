//! Transfer records for the LearnHub backend API.
//!
//! All structs use camelCase serialization to match the API's JSON format.
//! These are plain shapes; nothing here enforces invariants beyond parsing.

use serde::{Deserialize, Serialize};

/// Enrolled course as returned by GET /user/courses.
///
/// Progress arrives on one of two scales depending on the source record:
/// `progressPercentage` (0-100) or `progressPercent` (0-1).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub instructor: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub progress_percentage: Option<f64>,
    #[serde(default)]
    pub progress_percent: Option<f64>,
}

impl Course {
    /// Whether the course counts as completed on either progress scale.
    pub fn is_completed(&self) -> bool {
        self.progress_percentage.is_some_and(|p| p >= 100.0)
            || self.progress_percent.is_some_and(|p| p >= 1.0)
    }

    /// Progress normalized to the 0-100 scale.
    pub fn completion_percentage(&self) -> f64 {
        self.progress_percentage
            .or(self.progress_percent.map(|p| p * 100.0))
            .unwrap_or(0.0)
    }
}

/// Certificate derived from a completed course.
///
/// Not persisted by the backend: regenerated on every fetch from the
/// caller's completed courses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Certificate {
    pub id: u64,
    pub course_id: u64,
    pub course_title: String,
    pub user_name: String,
    pub issue_date: String,
    pub certificate_id: String,
    pub instructor: Option<String>,
    pub thumbnail_url: Option<String>,
    pub progress_percentage: f64,
}

/// Favorite relation between a user and a course.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub user_id: String,
    pub course_id: u64,
}

/// Result of toggling a favorite relation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToggleOutcome {
    pub success: bool,
    /// State after the toggle, not before.
    pub is_favorite: bool,
    /// Created relation when the toggle added a favorite.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Favorite>,
}

/// Job listing from GET /placements.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacementJob {
    pub id: u64,
    pub title: String,
    pub company: String,
    pub location: String,
    pub salary: String,
    #[serde(rename = "type")]
    pub job_type: String,
    pub posted_date: String,
    pub description: String,
}

/// Account settings, replaced wholesale on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSettings {
    pub account_settings: AccountSettings,
    pub privacy_settings: PrivacySettings,
    pub display_settings: DisplaySettings,
    pub subscription_info: SubscriptionInfo,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountSettings {
    pub email: String,
    pub phone: String,
    pub two_factor_enabled: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub data_sharing: bool,
    pub profile_visibility: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplaySettings {
    pub theme: String,
    pub font_size: String,
    pub language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubscriptionInfo {
    pub plan: String,
    #[serde(default)]
    pub next_billing_date: Option<String>,
    pub status: String,
}

impl Default for UserSettings {
    /// Fixed fallback object returned when the settings fetch fails.
    fn default() -> Self {
        Self {
            account_settings: AccountSettings {
                email: String::new(),
                phone: String::new(),
                two_factor_enabled: false,
            },
            privacy_settings: PrivacySettings {
                data_sharing: false,
                profile_visibility: "public".to_string(),
            },
            display_settings: DisplaySettings {
                theme: "light".to_string(),
                font_size: "medium".to_string(),
                language: "en".to_string(),
            },
            subscription_info: SubscriptionInfo {
                plan: "free".to_string(),
                next_billing_date: None,
                status: "active".to_string(),
            },
        }
    }
}
