//! Job placement listings.
//!
//! Read-only. A failed fetch resolves to a fixed built-in sample list so the
//! placements view always has something to show (demo-data policy, distinct
//! from the empty-list policy certificates use).

use super::client::ApiClient;
use super::error::{ApiError, Fallback};
use super::types::PlacementJob;

/// Fetch current job placements.
///
/// Never fails: any error resolves to [`sample_jobs`].
pub async fn get_placement_jobs(client: &ApiClient) -> Result<Vec<PlacementJob>, ApiError> {
    let fetched = client.get_json("/placements").await;
    Fallback::Value(sample_jobs()).resolve(fetched, "placement listing fetch")
}

/// Built-in sample listings substituted when the backend is unreachable.
pub fn sample_jobs() -> Vec<PlacementJob> {
    vec![
        PlacementJob {
            id: 1,
            title: "Frontend Developer".to_string(),
            company: "TechNova Solutions".to_string(),
            location: "Remote".to_string(),
            salary: "$70k - $90k".to_string(),
            job_type: "Full-time".to_string(),
            posted_date: "2025-07-15".to_string(),
            description: "Build and maintain learner-facing dashboard views.".to_string(),
        },
        PlacementJob {
            id: 2,
            title: "Backend Developer".to_string(),
            company: "CloudWorks Inc".to_string(),
            location: "New York, NY".to_string(),
            salary: "$85k - $110k".to_string(),
            job_type: "Full-time".to_string(),
            posted_date: "2025-07-22".to_string(),
            description: "Design and operate REST services for course delivery.".to_string(),
        },
    ]
}
