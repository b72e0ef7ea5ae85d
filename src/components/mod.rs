//! UI Components
//!
//! Leptos components for the job board views.

mod add_job_form;
mod confirm_delete;
mod filter_bar;
mod footer;
mod header;
mod job_card;
mod job_listings;

pub use add_job_form::AddJobForm;
pub use confirm_delete::ConfirmDelete;
pub use filter_bar::FilterBar;
pub use footer::Footer;
pub use header::Header;
pub use job_card::JobCard;
pub use job_listings::JobListings;
