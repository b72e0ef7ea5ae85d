//! Query Builder
//!
//! Shapes a `FilterCriteria` into the `GET /jobs` query.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::FilterCriteria;

/// RFC 3986 unreserved characters pass through, everything else is escaped
const QUERY_VALUE: &AsciiSet = &NON_ALPHANUMERIC.remove(b'-').remove(b'_').remove(b'.').remove(b'~');

/// Non-empty filters plus `sort_by`, in wire order. Values are passed through untouched.
pub fn query_params(filters: &FilterCriteria) -> Vec<(&'static str, String)> {
    let mut params = Vec::with_capacity(3);
    if let Some(location) = filters.location.as_deref().filter(|v| !v.is_empty()) {
        params.push(("location", location.to_string()));
    }
    if let Some(company) = filters.company.as_deref().filter(|v| !v.is_empty()) {
        params.push(("company", company.to_string()));
    }
    if let Some(sort_by) = filters.sort_by {
        params.push(("sort_by", sort_by.as_str().to_string()));
    }
    params
}

/// `key=value&...` with percent-encoded values; empty when nothing is set
pub fn query_string(filters: &FilterCriteria) -> String {
    query_params(filters)
        .iter()
        .map(|(key, value)| format!("{}={}", key, utf8_percent_encode(value, QUERY_VALUE)))
        .collect::<Vec<_>>()
        .join("&")
}
