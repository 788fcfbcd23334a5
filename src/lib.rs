//! Compatibility matching core for an accessible job-board platform.
//!
//! The crate answers one question: which job postings are compatible with a
//! given candidate, where compatibility means the posting accepts at least one
//! of the candidate's declared disability subtypes and every barrier reported
//! under that subtype is resolved by an accommodation the posting offers.
//! Persistence, HTTP routing, and the CRUD administration surface live in the
//! hosting service; this crate consumes storage through the
//! [`workflows::matching::MatchStore`] trait and stays pure read-and-compute.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
