//! Error Types
//!
//! Failures of the remote job calls and of local form validation.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Fetch error: {0}")]
    Fetch(String),

    #[error("Write error: {0}")]
    Write(String),

    #[error("Delete error for job {id}: {reason}")]
    Delete { id: u32, reason: String },
}

impl ApiError {
    /// Message shown in the error banner of the page that triggered the call
    pub fn user_message(&self) -> &'static str {
        match self {
            ApiError::Fetch(_) => "Failed to fetch jobs. Please try again later.",
            ApiError::Write(_) => "Failed to add job. Please try again.",
            ApiError::Delete { .. } => "Failed to delete job. Please try again.",
        }
    }
}

/// Client-side validation failure; never reaches the network
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Job title and company are required")]
    MissingRequired,
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_messages_hide_transport_detail() {
        let err = ApiError::Delete { id: 3, reason: "HTTP status 404".to_string() };
        assert_eq!(err.to_string(), "Delete error for job 3: HTTP status 404");
        assert_eq!(err.user_message(), "Failed to delete job. Please try again.");
        assert_eq!(
            ApiError::Fetch("connection refused".into()).user_message(),
            "Failed to fetch jobs. Please try again later."
        );
    }
}
