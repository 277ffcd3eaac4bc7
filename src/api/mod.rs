//! API client module for the LearnHub backend.
//!
//! Provides the shared HTTP client with auth header injection, per-resource
//! accessor functions with explicit failure policies, and request/response
//! types matching the backend's JSON format.

pub mod certificates;
pub mod client;
pub mod error;
pub mod favorites;
pub mod placements;
pub mod settings;
pub mod types;

mod tests;
