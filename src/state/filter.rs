//! Filter State Controller
//!
//! Two layers: draft selections that follow every control change, and the
//! committed `FilterCriteria` that only changes on apply or clear.

use crate::models::{FilterCriteria, Job, SortKey};

/// Uncommitted control values
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterDraft {
    pub location: String,
    pub company: String,
    pub sort_by: SortKey,
}

impl FilterDraft {
    fn from_criteria(criteria: &FilterCriteria) -> Self {
        Self {
            location: criteria.location.clone().unwrap_or_default(),
            company: criteria.company.clone().unwrap_or_default(),
            sort_by: criteria.sort_by.unwrap_or_default(),
        }
    }

    fn to_criteria(&self) -> FilterCriteria {
        let non_empty = |s: &str| (!s.is_empty()).then(|| s.to_string());
        FilterCriteria {
            location: non_empty(&self.location),
            company: non_empty(&self.company),
            sort_by: Some(self.sort_by),
        }
    }
}

/// Choices offered by the location and company selects
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOptions {
    pub locations: Vec<String>,
    pub companies: Vec<String>,
}

impl FilterOptions {
    /// Distinct non-empty values in first-seen order
    pub fn from_jobs(jobs: &[Job]) -> Self {
        let mut options = Self::default();
        for job in jobs {
            push_distinct(&mut options.locations, job.location.as_deref());
            push_distinct(&mut options.companies, Some(job.company.as_str()));
        }
        options
    }
}

fn push_distinct(values: &mut Vec<String>, value: Option<&str>) {
    match value {
        Some(v) if !v.is_empty() && !values.iter().any(|seen| seen == v) => values.push(v.to_string()),
        _ => {}
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    draft: FilterDraft,
    committed: FilterCriteria,
    options: FilterOptions,
    options_loaded: bool,
}

impl Default for FilterState {
    fn default() -> Self {
        Self::new(&FilterCriteria::by_date())
    }
}

impl FilterState {
    pub fn new(initial: &FilterCriteria) -> Self {
        Self {
            draft: FilterDraft::from_criteria(initial),
            committed: initial.clone(),
            options: FilterOptions::default(),
            options_loaded: false,
        }
    }

    pub fn draft(&self) -> &FilterDraft {
        &self.draft
    }

    #[cfg(test)]
    pub fn committed(&self) -> &FilterCriteria {
        &self.committed
    }

    pub fn options(&self) -> &FilterOptions {
        &self.options
    }

    /// Whether `value` is the draft location; `""` stands for "All Locations"
    pub fn is_location_selected(&self, value: &str) -> bool {
        self.draft.location == value
    }

    /// Whether `value` is the draft company; `""` stands for "All Companies"
    pub fn is_company_selected(&self, value: &str) -> bool {
        self.draft.company == value
    }

    pub fn set_location(&mut self, location: String) {
        self.draft.location = location;
    }

    pub fn set_company(&mut self, company: String) {
        self.draft.company = company;
    }

    pub fn set_sort_by(&mut self, sort_by: SortKey) {
        self.draft.sort_by = sort_by;
    }

    /// Commit the draft and return the criteria to emit
    pub fn apply(&mut self) -> FilterCriteria {
        self.committed = self.draft.to_criteria();
        log::debug!("Applied filters {:?}", self.committed);
        self.committed.clone()
    }

    /// Reset draft and committed state to date ordering; self-committing
    pub fn clear(&mut self) -> FilterCriteria {
        self.committed = FilterCriteria::by_date();
        self.draft = FilterDraft::from_criteria(&self.committed);
        log::debug!("Cleared filters");
        self.committed.clone()
    }

    /// Derive option sets from the unfiltered snapshot fetched at mount.
    /// Only the first snapshot counts; later filtered listings never narrow the choices.
    pub fn load_options(&mut self, unfiltered: &[Job]) {
        if self.options_loaded {
            return;
        }
        self.options = FilterOptions::from_jobs(unfiltered);
        self.options_loaded = true;
        log::debug!(
            "Loaded filter options: {} locations, {} companies",
            self.options.locations.len(),
            self.options.companies.len()
        );
    }
}
