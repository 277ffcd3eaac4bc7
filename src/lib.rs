//! API client layer for the LearnHub learner dashboard.
//!
//! Wraps the LearnHub backend REST API: certificates derived from completed
//! courses, favorite courses, job placements, and account settings. Views
//! consume the accessor functions in [`api`]; no rendering concerns live here.

pub mod api;
pub mod storage;
pub mod theme;
