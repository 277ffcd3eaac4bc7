//! Error surface and failure policies for the API client layer.
//!
//! Transport failures and non-2xx responses both normalize into [`ApiError`],
//! so callers see a single error shape regardless of where a request died.
//! Each accessor declares what it does with that error via [`Fallback`].

use thiserror::Error;

/// Error raised by the shared client and propagating accessors.
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request never produced a response (timeout, refused, DNS).
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Backend answered with a non-2xx status.
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },

    /// Response body was not the JSON shape the accessor expected.
    #[error("failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Failure policy an accessor applies when the underlying request fails.
///
/// The policy is declared at the accessor's call site, making the
/// per-accessor behavior explicit instead of implicit in the control flow:
/// certificates swallow to an empty list, placements to built-in sample
/// jobs, settings to a default object, favorite checks to `false`, and
/// everything else propagates.
#[derive(Debug)]
pub enum Fallback<T> {
    /// Re-raise the error to the caller unchanged.
    Propagate,
    /// Swallow the error and substitute this value.
    Value(T),
}

impl<T> Fallback<T> {
    /// Apply this policy to a raw request outcome.
    pub fn resolve(self, outcome: Result<T, ApiError>, operation: &str) -> Result<T, ApiError> {
        match (self, outcome) {
            (_, Ok(value)) => Ok(value),
            (Fallback::Propagate, Err(err)) => Err(err),
            (Fallback::Value(substitute), Err(err)) => {
                log::warn!("{} failed, substituting fallback value: {}", operation, err);
                Ok(substitute)
            }
        }
    }
}
