//! Add Job Form Component
//!
//! Creates a job and returns to the listing on success.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::JobApi;
use crate::context::{use_app_context, Page};
use crate::models::DraftField;
use crate::state::{SubmissionState, SubmitOutcome};

/// Labelled single-line input bound to one draft field
#[component]
fn DraftInput(
    form: RwSignal<SubmissionState>,
    field: DraftField,
    id: &'static str,
    label: &'static str,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label for=id>{label} {required.then_some(" *")}</label>
            <input
                type=input_type
                id=id
                name=id
                class="input"
                placeholder=placeholder
                required=required
                prop:value=move || form.with(|s| s.draft().field(field).to_string())
                on:input=move |ev| form.update(|s| s.set_field(field, event_target_value(&ev)))
            />
        </div>
    }
}

#[component]
pub fn AddJobForm() -> impl IntoView {
    let ctx = use_app_context();
    let form = RwSignal::new(SubmissionState::new());
    let submitting = move || form.with(|s| s.submitting());

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let draft = match form.try_update(|s| s.begin_submit()) {
            Some(Ok(draft)) => draft,
            Some(Err(e)) => {
                log::debug!("Rejected draft: {}", e);
                return;
            }
            None => return,
        };

        let api = ctx.api();
        spawn_local(async move {
            let result = api.create(&draft).await;
            if let Some(SubmitOutcome::Created(_)) = form.try_update(|s| s.finish_submit(result)) {
                ctx.navigate(Page::Listings);
            }
        });
    };

    view! {
        <div class="add-job panel">
            <h1>"Add New Job Listing"</h1>

            {move || form.with(|s| s.error().map(String::from)).map(|message| view! {
                <div class="alert alert-error" role="alert">
                    <p>{message}</p>
                </div>
            })}

            <form class="job-form" on:submit=on_submit>
                <DraftInput form=form field=DraftField::Title id="title" label="Job Title" required=true />
                <DraftInput form=form field=DraftField::Company id="company" label="Company" required=true />
                <DraftInput form=form field=DraftField::Location id="location" label="Location" />
                <DraftInput
                    form=form
                    field=DraftField::Url
                    id="url"
                    label="Job URL"
                    input_type="url"
                    placeholder="https://example.com/job"
                />

                <div class="form-field">
                    <label for="description">"Job Description"</label>
                    <textarea
                        id="description"
                        name="description"
                        rows=5
                        class="input"
                        prop:value=move || form.with(|s| s.draft().description.clone())
                        on:input=move |ev| form.update(|s| s.set_field(DraftField::Description, event_target_value(&ev)))
                    ></textarea>
                </div>

                <div class="form-actions">
                    <button
                        type="button"
                        class="btn btn-secondary"
                        disabled=submitting
                        on:click=move |_| ctx.navigate(Page::Listings)
                    >
                        "Cancel"
                    </button>
                    <button type="submit" class="btn btn-primary" disabled=submitting>
                        {move || if submitting() { "Saving..." } else { "Add Job" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
