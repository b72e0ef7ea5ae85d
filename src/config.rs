//! Client Configuration
//!
//! Where the jobs API lives. A wasm bundle has no runtime environment, so the
//! only override is the `JOB_BOARD_API_URL` variable at build time.

use serde::Deserialize;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: default_api_base_url(),
        }
    }
}

impl ClientConfig {
    /// Config baked in at compile time
    pub fn from_build_env() -> Self {
        match option_env!("JOB_BOARD_API_URL") {
            Some(url) if !url.trim().is_empty() => Self::default().with_base_url(url),
            _ => Self::default(),
        }
    }

    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api_base_url = url.trim().trim_end_matches('/').to_string();
        self
    }

    /// URL of the jobs collection
    pub fn jobs_url(&self) -> String {
        format!("{}/jobs", self.api_base_url)
    }
}
