//! Certificates derived from the caller's completed courses.
//!
//! Certificates are computed, not stored: GET /user/courses is filtered to
//! completed entries and each one is mapped into a certificate record on the
//! spot. A failed fetch resolves to an empty list rather than an error.

use chrono::{DateTime, Utc};

use super::client::ApiClient;
use super::error::{ApiError, Fallback};
use super::types::{Certificate, Course};

/// How certificate identifiers are generated.
///
/// The backend does not persist certificates, so the identifier is synthetic.
/// `IssuedNow` embeds the fetch-time timestamp, meaning the same completed
/// course yields a different identifier on every call ("issued now"
/// semantics). `Stable` derives the identifier solely from the course id for
/// callers that need idempotence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CertificateIdMode {
    #[default]
    IssuedNow,
    Stable,
}

/// Fetch the caller's certificates.
///
/// Accepts completion on either progress scale (`progressPercentage` 0-100
/// or `progressPercent` 0-1). The certificate's user name comes from the
/// profile store display name. Never fails: any error resolves to an empty
/// list.
pub async fn get_user_certificates(client: &ApiClient) -> Result<Vec<Certificate>, ApiError> {
    let fetched = fetch_certificates(client).await;
    Fallback::Value(Vec::new()).resolve(fetched, "certificate fetch")
}

async fn fetch_certificates(client: &ApiClient) -> Result<Vec<Certificate>, ApiError> {
    let courses: Vec<Course> = client.get_json("/user/courses").await?;

    let user_name = client
        .store()
        .display_name()
        .unwrap_or_else(|| "Learner".to_string());
    let issued = Utc::now();
    let mode = client.certificate_id_mode();

    Ok(courses
        .into_iter()
        .filter(Course::is_completed)
        .map(|course| certificate_for(course, &user_name, issued, mode))
        .collect())
}

fn certificate_for(
    course: Course,
    user_name: &str,
    issued: DateTime<Utc>,
    mode: CertificateIdMode,
) -> Certificate {
    let certificate_id = match mode {
        CertificateIdMode::IssuedNow => {
            format!("CERT-{}-{}", course.id, issued.timestamp_millis())
        }
        CertificateIdMode::Stable => format!("CERT-{}", course.id),
    };
    let progress_percentage = course.completion_percentage();

    Certificate {
        id: course.id,
        course_id: course.id,
        course_title: course.title,
        user_name: user_name.to_string(),
        issue_date: issued.format("%Y-%m-%d").to_string(),
        certificate_id,
        instructor: course.instructor,
        thumbnail_url: course.thumbnail_url,
        progress_percentage,
    }
}
