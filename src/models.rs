//! Frontend Models
//!
//! Data structures matching the jobs API resource.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Job listing as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Job {
    pub id: u32,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// Assigned by the server at creation; older rows may carry `null`
    #[serde(default)]
    pub date_posted: Option<String>,
}

/// Outbound payload for creating a job. Never carries id or date_posted.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JobDraft {
    pub title: String,
    pub company: String,
    pub location: String,
    pub description: String,
    pub url: String,
}

/// Draft fields addressable from form inputs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftField {
    Title,
    Company,
    Location,
    Description,
    Url,
}

impl JobDraft {
    pub fn field(&self, field: DraftField) -> &str {
        match field {
            DraftField::Title => &self.title,
            DraftField::Company => &self.company,
            DraftField::Location => &self.location,
            DraftField::Description => &self.description,
            DraftField::Url => &self.url,
        }
    }

    pub fn set_field(&mut self, field: DraftField, value: String) {
        let slot = match field {
            DraftField::Title => &mut self.title,
            DraftField::Company => &mut self.company,
            DraftField::Location => &mut self.location,
            DraftField::Description => &mut self.description,
            DraftField::Url => &mut self.url,
        };
        *slot = value;
    }
}

/// Server-side ordering of the listing
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Company,
    Title,
    Location,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Date, SortKey::Company, SortKey::Title, SortKey::Location];

    /// Wire name used in the `sort_by` query parameter
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Company => "company",
            SortKey::Title => "title",
            SortKey::Location => "location",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Date => "Date Posted",
            SortKey::Company => "Company",
            SortKey::Title => "Job Title",
            SortKey::Location => "Location",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownSortKey(pub String);

impl fmt::Display for UnknownSortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown sort key: {}", self.0)
    }
}

impl std::error::Error for UnknownSortKey {}

impl FromStr for SortKey {
    type Err = UnknownSortKey;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| UnknownSortKey(s.to_string()))
    }
}

/// Committed (server-bound) filter and sort selection
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterCriteria {
    pub location: Option<String>,
    pub company: Option<String>,
    pub sort_by: Option<SortKey>,
}

impl FilterCriteria {
    /// Filter the listing starts from and clearing returns to
    pub fn by_date() -> Self {
        Self {
            sort_by: Some(SortKey::Date),
            ..Default::default()
        }
    }
}
