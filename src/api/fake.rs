//! In-memory `JobApi` for tests
//!
//! Serves a fixed job table, filtering and sorting it the way the server does,
//! and records every call so tests can assert on network traffic.

use std::cell::{Cell, RefCell};
use std::collections::HashSet;

use async_trait::async_trait;

use super::JobApi;
use crate::error::{ApiError, ApiResult};
use crate::models::{FilterCriteria, Job, JobDraft, SortKey};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List(FilterCriteria),
    Create(JobDraft),
    Delete(u32),
}

#[derive(Default)]
pub struct FakeJobApi {
    jobs: RefCell<Vec<Job>>,
    calls: RefCell<Vec<Call>>,
    next_id: Cell<u32>,
    fail_list: Cell<bool>,
    fail_create: Cell<bool>,
    fail_delete: RefCell<HashSet<u32>>,
}

pub fn job(id: u32, title: &str, company: &str, location: Option<&str>, date_posted: &str) -> Job {
    Job {
        id,
        title: title.to_string(),
        company: company.to_string(),
        location: location.map(String::from),
        description: None,
        url: None,
        date_posted: Some(date_posted.to_string()),
    }
}

impl FakeJobApi {
    pub fn with_jobs(jobs: Vec<Job>) -> Self {
        let next_id = jobs.iter().map(|j| j.id).max().unwrap_or(0) + 1;
        let api = Self::default();
        *api.jobs.borrow_mut() = jobs;
        api.next_id.set(next_id);
        api
    }

    /// Three listings across two locations and three companies
    pub fn seeded() -> Self {
        Self::with_jobs(vec![
            job(1, "Actuarial Analyst", "Insurance Co", Some("New York, NY"), "2025-03-01"),
            job(2, "Senior Actuary", "Financial Services Inc", Some("Chicago, IL"), "2025-03-03"),
            job(3, "Actuarial Consultant", "Consulting Firm", Some("Remote"), "2025-03-02"),
            job(4, "Pricing Actuary", "Insurance Co", Some("Remote"), "2025-02-20"),
        ])
    }

    pub fn fail_list(&self, fail: bool) {
        self.fail_list.set(fail);
    }

    pub fn fail_create(&self, fail: bool) {
        self.fail_create.set(fail);
    }

    pub fn fail_delete_of(&self, id: u32) {
        self.fail_delete.borrow_mut().insert(id);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.borrow().clone()
    }

    fn record(&self, call: Call) {
        self.calls.borrow_mut().push(call);
    }
}

#[async_trait(?Send)]
impl JobApi for FakeJobApi {
    async fn list(&self, filters: &FilterCriteria) -> ApiResult<Vec<Job>> {
        self.record(Call::List(filters.clone()));
        if self.fail_list.get() {
            return Err(ApiError::Fetch("connection refused".to_string()));
        }

        let matches = |wanted: &Option<String>, actual: Option<&str>| match wanted.as_deref() {
            None | Some("") => true,
            Some(w) => actual == Some(w),
        };
        let mut jobs: Vec<Job> = self
            .jobs
            .borrow()
            .iter()
            .filter(|j| matches(&filters.location, j.location.as_deref()))
            .filter(|j| matches(&filters.company, Some(j.company.as_str())))
            .cloned()
            .collect();

        match filters.sort_by.unwrap_or_default() {
            SortKey::Date => jobs.sort_by(|a, b| b.date_posted.cmp(&a.date_posted)),
            SortKey::Company => jobs.sort_by(|a, b| a.company.cmp(&b.company)),
            SortKey::Title => jobs.sort_by(|a, b| a.title.cmp(&b.title)),
            SortKey::Location => jobs.sort_by(|a, b| a.location.cmp(&b.location)),
        }
        Ok(jobs)
    }

    async fn create(&self, draft: &JobDraft) -> ApiResult<Job> {
        self.record(Call::Create(draft.clone()));
        if self.fail_create.get() {
            return Err(ApiError::Write("HTTP status server error (500)".to_string()));
        }

        let id = self.next_id.get();
        self.next_id.set(id + 1);
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        let created = Job {
            id,
            title: draft.title.clone(),
            company: draft.company.clone(),
            location: non_empty(&draft.location),
            description: non_empty(&draft.description),
            url: non_empty(&draft.url),
            date_posted: Some("2025-03-15".to_string()),
        };
        self.jobs.borrow_mut().push(created.clone());
        Ok(created)
    }

    async fn delete(&self, id: u32) -> ApiResult<()> {
        self.record(Call::Delete(id));
        let mut jobs = self.jobs.borrow_mut();
        let known = jobs.iter().any(|j| j.id == id);
        if !known || self.fail_delete.borrow().contains(&id) {
            return Err(ApiError::Delete { id, reason: "HTTP status client error (404)".to_string() });
        }
        jobs.retain(|j| j.id != id);
        Ok(())
    }
}
