//! Remote Job Client
//!
//! `JobApi` is the seam between the state controllers and the jobs resource.
//! `HttpJobClient` is the browser implementation on top of `reqwest` (fetch).

use async_trait::async_trait;
use reqwest::{RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

use super::query::query_string;
use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{FilterCriteria, Job, JobDraft};

/// Single request, single outcome: no retries, no timeouts of our own
#[async_trait(?Send)]
pub trait JobApi {
    /// `GET /jobs` with the filter query
    async fn list(&self, filters: &FilterCriteria) -> ApiResult<Vec<Job>>;

    /// `POST /jobs`; the returned job carries the server-assigned id and date
    async fn create(&self, draft: &JobDraft) -> ApiResult<Job>;

    /// `DELETE /jobs/{id}`; the response body is ignored
    async fn delete(&self, id: u32) -> ApiResult<()>;
}

#[derive(Debug, Clone)]
pub struct HttpJobClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl HttpJobClient {
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    pub fn list_url(&self, filters: &FilterCriteria) -> String {
        let query = query_string(filters);
        if query.is_empty() {
            self.config.jobs_url()
        } else {
            format!("{}?{}", self.config.jobs_url(), query)
        }
    }

    pub fn job_url(&self, id: u32) -> String {
        format!("{}/{}", self.config.jobs_url(), id)
    }
}

/// Which call a failure belongs to; decides the `ApiError` variant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Op {
    List,
    Create,
    Delete(u32),
}

impl Op {
    fn error(self, reason: String) -> ApiError {
        match self {
            Op::List => ApiError::Fetch(reason),
            Op::Create => ApiError::Write(reason),
            Op::Delete(id) => ApiError::Delete { id, reason },
        }
    }
}

/// Any non-2xx status is a failure of `op`
fn check_status(op: Op, status: StatusCode) -> ApiResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(op.error(format!("HTTP status {}", status)))
    }
}

fn decode_body<T: DeserializeOwned>(op: Op, body: &str) -> ApiResult<T> {
    serde_json::from_str(body).map_err(|e| op.error(format!("invalid response body: {}", e)))
}

/// Send, reject non-2xx, and return the raw body
async fn send(op: Op, request: RequestBuilder) -> ApiResult<String> {
    let response = request.send().await.map_err(|e| op.error(e.to_string()))?;
    check_status(op, response.status())?;
    response.text().await.map_err(|e| op.error(e.to_string()))
}

#[async_trait(?Send)]
impl JobApi for HttpJobClient {
    async fn list(&self, filters: &FilterCriteria) -> ApiResult<Vec<Job>> {
        let url = self.list_url(filters);
        let result = async {
            let body = send(Op::List, self.http.get(&url)).await?;
            decode_body::<Vec<Job>>(Op::List, &body)
        }
        .await;

        match &result {
            Ok(jobs) => log::debug!("GET {} -> {} jobs", url, jobs.len()),
            Err(e) => log::error!("Error fetching jobs from {}: {}", url, e),
        }
        result
    }

    async fn create(&self, draft: &JobDraft) -> ApiResult<Job> {
        let url = self.config.jobs_url();
        let result = async {
            let body = send(Op::Create, self.http.post(&url).json(draft)).await?;
            decode_body::<Job>(Op::Create, &body)
        }
        .await;

        match &result {
            Ok(job) => log::debug!("POST {} -> job {}", url, job.id),
            Err(e) => log::error!("Error adding job: {}", e),
        }
        result
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        let url = self.job_url(id);
        send(Op::Delete(id), self.http.delete(&url))
            .await
            .map(|_| log::debug!("DELETE {}", url))
            .inspect_err(|e| log::error!("Error deleting job {}: {}", id, e))
    }
}
