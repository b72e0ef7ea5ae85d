//! State Controllers
//!
//! Plain state machines behind the job views. Components hold them in
//! signals and drive them around `JobApi` calls.

pub mod filter;
pub mod listing;
pub mod submission;

pub use filter::FilterState;
pub use listing::ListingState;
pub use submission::{SubmissionState, SubmitOutcome};
