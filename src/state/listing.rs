//! Listing Controller
//!
//! Owns the displayed jobs for the committed filter. Every fetch is tagged
//! with a generation number; only the response for the latest generation is
//! applied, so a slow response from a superseded filter can never overwrite
//! a newer one.

use crate::error::ApiResult;
use crate::models::{FilterCriteria, Job};

/// Handle for one issued `list` request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub filters: FilterCriteria,
}

impl FetchTicket {
    #[cfg(test)]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListingState {
    jobs: Vec<Job>,
    loading: bool,
    error: Option<String>,
    committed: FilterCriteria,
    generation: u64,
}

impl ListingState {
    pub fn new(initial: FilterCriteria) -> Self {
        Self {
            committed: initial,
            ..Default::default()
        }
    }

    /// Jobs in server order
    pub fn jobs(&self) -> &[Job] {
        &self.jobs
    }

    /// True only while the latest fetch is outstanding
    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[cfg(test)]
    pub fn committed(&self) -> &FilterCriteria {
        &self.committed
    }

    /// Issue a fetch for `filters`, superseding any outstanding one
    pub fn begin_fetch(&mut self, filters: FilterCriteria) -> FetchTicket {
        self.generation += 1;
        self.committed = filters.clone();
        self.loading = true;
        log::debug!("Fetching jobs for {:?} (generation {})", self.committed, self.generation);
        FetchTicket {
            generation: self.generation,
            filters,
        }
    }

    /// Apply a fetch result. Returns false when the ticket was superseded.
    pub fn finish_fetch(&mut self, ticket: FetchTicket, result: ApiResult<Vec<Job>>) -> bool {
        if ticket.generation != self.generation {
            log::debug!(
                "Discarding stale response (generation {} < {})",
                ticket.generation,
                self.generation
            );
            return false;
        }

        self.loading = false;
        match result {
            Ok(jobs) => {
                log::info!("Loaded {} jobs for {:?}", jobs.len(), ticket.filters);
                self.jobs = jobs;
                self.error = None;
            }
            Err(e) => {
                log::warn!("Keeping {} last-known jobs after failure: {}", self.jobs.len(), e);
                self.error = Some(e.user_message().to_string());
            }
        }
        true
    }

    /// Apply a delete result. Returns true when an entry was removed.
    pub fn finish_delete(&mut self, id: u32, result: ApiResult<()>) -> bool {
        match result {
            Ok(()) => {
                let before = self.jobs.len();
                self.jobs.retain(|job| job.id != id);
                self.jobs.len() != before
            }
            Err(e) => {
                self.error = Some(e.user_message().to_string());
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::fake::{Call, FakeJobApi};
    use crate::api::JobApi;
    use crate::error::ApiError;
    use crate::models::SortKey;

    fn ids(state: &ListingState) -> Vec<u32> {
        state.jobs().iter().map(|j| j.id).collect()
    }

    fn at(location: &str) -> FilterCriteria {
        FilterCriteria {
            location: Some(location.to_string()),
            ..FilterCriteria::by_date()
        }
    }

    async fn refresh(state: &mut ListingState, api: &FakeJobApi, filters: FilterCriteria) {
        let ticket = state.begin_fetch(filters);
        let result = api.list(&ticket.filters).await;
        state.finish_fetch(ticket, result);
    }

    #[tokio::test]
    async fn test_fetch_replaces_jobs_in_server_order() {
        let api = FakeJobApi::seeded();
        let mut state = ListingState::new(FilterCriteria::by_date());

        let ticket = state.begin_fetch(FilterCriteria::by_date());
        assert!(state.loading());

        let result = api.list(&ticket.filters).await;
        assert!(state.finish_fetch(ticket, result));

        assert!(!state.loading());
        assert_eq!(ids(&state), vec![2, 3, 1, 4]);
        assert_eq!(api.calls(), vec![Call::List(FilterCriteria::by_date())]);
    }

    #[tokio::test]
    async fn test_latest_filter_wins_when_responses_arrive_out_of_order() {
        let api = FakeJobApi::seeded();
        let mut state = ListingState::new(FilterCriteria::by_date());

        let ticket_a = state.begin_fetch(at("Chicago, IL"));
        let ticket_b = state.begin_fetch(at("Remote"));

        // B resolves first
        let result_b = api.list(&ticket_b.filters).await;
        assert!(state.finish_fetch(ticket_b, result_b));
        assert!(!state.loading());

        // A arrives late and must be ignored
        let result_a = api.list(&ticket_a.filters).await;
        assert!(!state.finish_fetch(ticket_a, result_a));

        assert_eq!(ids(&state), vec![3, 4]);
        assert_eq!(state.committed(), &at("Remote"));
    }

    #[tokio::test]
    async fn test_stale_response_does_not_clear_loading() {
        let api = FakeJobApi::seeded();
        let mut state = ListingState::new(FilterCriteria::by_date());

        let ticket_a = state.begin_fetch(at("Chicago, IL"));
        let _ticket_b = state.begin_fetch(at("Remote"));

        let result_a = api.list(&ticket_a.filters).await;
        state.finish_fetch(ticket_a, result_a);

        assert!(state.loading());
        assert!(state.jobs().is_empty());
    }

    #[tokio::test]
    async fn test_fetch_failure_keeps_last_known_jobs() {
        let api = FakeJobApi::seeded();
        let mut state = ListingState::new(FilterCriteria::by_date());
        refresh(&mut state, &api, FilterCriteria::by_date()).await;

        api.fail_list(true);
        refresh(&mut state, &api, at("Remote")).await;

        assert_eq!(ids(&state), vec![2, 3, 1, 4]);
        assert_eq!(state.error(), Some("Failed to fetch jobs. Please try again later."));
        assert!(!state.loading());

        api.fail_list(false);
        refresh(&mut state, &api, at("Remote")).await;
        assert_eq!(state.error(), None);
        assert_eq!(ids(&state), vec![3, 4]);
    }

    #[tokio::test]
    async fn test_delete_removes_exactly_one_entry() {
        let api = FakeJobApi::seeded();
        let mut state = ListingState::new(FilterCriteria::by_date());
        refresh(&mut state, &api, FilterCriteria::by_date()).await;

        let result = api.delete(3).await;
        assert!(state.finish_delete(3, result));

        assert_eq!(ids(&state), vec![2, 1, 4]);
        assert_eq!(state.error(), None);
        // No refetch after delete
        assert_eq!(api.calls().len(), 2);
    }

    #[tokio::test]
    async fn test_failed_delete_leaves_collection_unchanged() {
        let api = FakeJobApi::seeded();
        let mut state = ListingState::new(FilterCriteria::by_date());
        refresh(&mut state, &api, FilterCriteria {
            sort_by: Some(SortKey::Title),
            ..Default::default()
        })
        .await;
        let before = state.jobs().to_vec();

        api.fail_delete_of(1);
        let result = api.delete(1).await;
        assert!(!state.finish_delete(1, result));

        assert_eq!(state.jobs(), before.as_slice());
        assert_eq!(state.error(), Some("Failed to delete job. Please try again."));
    }

    #[test]
    fn test_delete_of_unlisted_id_is_noop() {
        let mut state = ListingState::new(FilterCriteria::by_date());
        assert!(!state.finish_delete(99, Ok(())));
        assert_eq!(state.error(), None);

        let err = ApiError::Delete { id: 99, reason: "timeout".to_string() };
        state.finish_delete(99, Err(err));
        assert!(state.error().is_some());
    }

    #[test]
    fn test_generations_increase() {
        let mut state = ListingState::new(FilterCriteria::by_date());
        let first = state.begin_fetch(FilterCriteria::by_date());
        let second = state.begin_fetch(FilterCriteria::by_date());
        assert!(second.generation() > first.generation());
    }
}
