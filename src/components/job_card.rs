//! Job Card Component
//!
//! One listing with apply link and delete confirmation.

use leptos::prelude::*;

use crate::components::ConfirmDelete;
use crate::dates::posted_line;
use crate::models::Job;

/// Non-empty value or the placeholder shown in its place
fn or_placeholder(value: Option<&str>, placeholder: &str) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or(placeholder)
        .to_string()
}

#[component]
pub fn JobCard(
    job: Job,
    #[prop(into)] on_delete: Callback<()>,
) -> impl IntoView {
    let title = or_placeholder(Some(&job.title), "Untitled Position");
    let company = or_placeholder(Some(&job.company), "Unknown Company");
    let location = or_placeholder(job.location.as_deref(), "Unknown Location");
    let description = or_placeholder(job.description.as_deref(), "No description available");
    let posted = posted_line(job.date_posted.as_deref());
    let apply_url = job.url.clone().filter(|url| !url.is_empty());

    view! {
        <div class="job-card">
            <div class="job-card-body">
                <div class="job-card-main">
                    <h2 class="job-title">{title}</h2>
                    <div class="job-meta company">{company}</div>
                    <div class="job-meta location">{location}</div>
                    <p class="job-description">{description}</p>
                    <div class="job-posted">{posted}</div>
                </div>
                <div class="job-card-actions">
                    {apply_url.map(|url| view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class="btn btn-primary">
                            "Apply"
                        </a>
                    })}
                    <ConfirmDelete job_title=job.title.clone() on_confirm=on_delete />
                </div>
            </div>
        </div>
    }
}
