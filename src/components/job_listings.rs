//! Job Listings Component
//!
//! Filter bar plus the listing for the committed filter.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::JobApi;
use crate::components::{FilterBar, JobCard};
use crate::context::use_app_context;
use crate::models::FilterCriteria;
use crate::state::ListingState;

#[component]
pub fn JobListings() -> impl IntoView {
    let ctx = use_app_context();
    let listing = RwSignal::new(ListingState::new(FilterCriteria::by_date()));
    let (committed, set_committed) = signal(FilterCriteria::by_date());

    // Refetch on mount and on every committed filter; stale responses are dropped by generation
    Effect::new(move |_| {
        let filters = committed.get();
        let Some(ticket) = listing.try_update(|s| s.begin_fetch(filters)) else {
            return;
        };
        let api = ctx.api();
        spawn_local(async move {
            let result = api.list(&ticket.filters).await;
            listing.try_update(|s| s.finish_fetch(ticket, result));
        });
    });

    let delete_job = move |id: u32| {
        let api = ctx.api();
        spawn_local(async move {
            let result = api.delete(id).await;
            if listing.try_update(|s| s.finish_delete(id, result)) == Some(true) {
                log::info!("Deleted job {}", id);
            }
        });
    };

    view! {
        <div class="job-listings">
            <div class="panel">
                <h1>"Available Job Listings"</h1>

                <FilterBar
                    initial=FilterCriteria::by_date()
                    on_filter_change=move |criteria: FilterCriteria| set_committed.set(criteria)
                />

                {move || listing.with(|s| s.error().map(String::from)).map(|message| view! {
                    <div class="alert alert-error" role="alert">
                        <p>{message}</p>
                    </div>
                })}

                {move || {
                    let (loading, empty) = listing.with(|s| (s.loading(), s.jobs().is_empty()));
                    if loading {
                        view! {
                            <div class="loading">
                                <div class="spinner"></div>
                            </div>
                        }.into_any()
                    } else if empty {
                        view! {
                            <div class="empty-state">
                                <p>"No job listings found. Try adjusting your filters or check back later."</p>
                            </div>
                        }.into_any()
                    } else {
                        view! {
                            <div class="job-grid">
                                <For
                                    each=move || listing.with(|s| s.jobs().to_vec())
                                    key=|job| job.id
                                    children=move |job| {
                                        let id = job.id;
                                        view! {
                                            <JobCard job=job on_delete=Callback::new(move |_: ()| delete_job(id)) />
                                        }
                                    }
                                />
                            </div>
                        }.into_any()
                    }
                }}
            </div>
        </div>
    }
}
