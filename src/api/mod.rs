//! Jobs API Layer
//!
//! Bindings to the remote jobs resource, organized by concern.

mod client;
mod query;
#[cfg(test)]
pub mod fake;

pub use client::{HttpJobClient, JobApi};
