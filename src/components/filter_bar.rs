//! Filter Bar Component
//!
//! Location/company/sort selects with Clear and Apply. Control changes only
//! touch the draft; the parent hears about a filter on Apply or Clear.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::JobApi;
use crate::context::use_app_context;
use crate::models::{FilterCriteria, SortKey};
use crate::state::FilterState;

#[component]
pub fn FilterBar(
    initial: FilterCriteria,
    #[prop(into)] on_filter_change: Callback<FilterCriteria>,
) -> impl IntoView {
    let ctx = use_app_context();
    let filter = RwSignal::new(FilterState::new(&initial));

    // Option sets come from one unfiltered fetch at mount
    Effect::new(move |_| {
        let api = ctx.api();
        spawn_local(async move {
            match api.list(&FilterCriteria::default()).await {
                Ok(jobs) => {
                    filter.try_update(|f| f.load_options(&jobs));
                }
                Err(e) => log::error!("Error fetching filter options: {}", e),
            }
        });
    });

    let apply = move |_| {
        if let Some(criteria) = filter.try_update(|f| f.apply()) {
            on_filter_change.run(criteria);
        }
    };

    let clear = move |_| {
        if let Some(criteria) = filter.try_update(|f| f.clear()) {
            on_filter_change.run(criteria);
        }
    };

    view! {
        <div class="filter-bar">
            <h2>"Filter Jobs"</h2>

            <div class="filter-grid">
                <div>
                    <label for="location">"Location"</label>
                    <select
                        id="location"
                        class="select"
                        on:change=move |ev| filter.update(|f| f.set_location(event_target_value(&ev)))
                    >
                        <option value="" selected=move || filter.with(|f| f.is_location_selected(""))>
                            "All Locations"
                        </option>
                        <For
                            each=move || filter.with(|f| f.options().locations.clone())
                            key=|loc| loc.clone()
                            children=move |loc| {
                                let value = loc.clone();
                                let is_selected = move || filter.with(|f| f.is_location_selected(&value));
                                view! { <option value=loc.clone() selected=is_selected>{loc.clone()}</option> }
                            }
                        />
                    </select>
                </div>

                <div>
                    <label for="company">"Company"</label>
                    <select
                        id="company"
                        class="select"
                        on:change=move |ev| filter.update(|f| f.set_company(event_target_value(&ev)))
                    >
                        <option value="" selected=move || filter.with(|f| f.is_company_selected(""))>
                            "All Companies"
                        </option>
                        <For
                            each=move || filter.with(|f| f.options().companies.clone())
                            key=|comp| comp.clone()
                            children=move |comp| {
                                let value = comp.clone();
                                let is_selected = move || filter.with(|f| f.is_company_selected(&value));
                                view! { <option value=comp.clone() selected=is_selected>{comp.clone()}</option> }
                            }
                        />
                    </select>
                </div>

                <div>
                    <label for="sortBy">"Sort By"</label>
                    <select
                        id="sortBy"
                        class="select"
                        on:change=move |ev| {
                            match event_target_value(&ev).parse::<SortKey>() {
                                Ok(key) => filter.update(|f| f.set_sort_by(key)),
                                Err(e) => log::warn!("{}", e),
                            }
                        }
                    >
                        {SortKey::ALL.iter().map(|key| {
                            let key = *key;
                            view! {
                                <option
                                    value=key.as_str()
                                    selected=move || filter.with(|f| f.draft().sort_by == key)
                                >
                                    {key.label()}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
            </div>

            <div class="filter-actions">
                <button class="btn btn-secondary" on:click=clear>"Clear Filters"</button>
                <button class="btn btn-primary" on:click=apply>"Apply Filters"</button>
            </div>
        </div>
    }
}
