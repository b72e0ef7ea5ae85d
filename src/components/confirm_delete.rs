//! Confirm Delete Component
//!
//! Two-step removal of a listing: the card's "Delete" button turns into a
//! prompt naming the job, and only "Yes" reaches the server.

use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeleteStep {
    Idle,
    Confirming,
}

impl DeleteStep {
    /// Step after a click; `confirmed` is `None` for the initial Delete button
    fn next(self, confirmed: Option<bool>) -> (DeleteStep, bool) {
        match (self, confirmed) {
            (DeleteStep::Idle, None) => (DeleteStep::Confirming, false),
            (DeleteStep::Confirming, Some(yes)) => (DeleteStep::Idle, yes),
            (step, _) => (step, false),
        }
    }
}

fn confirm_prompt(job_title: &str) -> String {
    let title = job_title.trim();
    if title.is_empty() {
        "Delete this job?".to_string()
    } else {
        format!("Delete \u{201c}{}\u{201d}?", title)
    }
}

#[component]
pub fn ConfirmDelete(
    #[prop(into)] job_title: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let step = RwSignal::new(DeleteStep::Idle);
    let prompt = confirm_prompt(&job_title);
    let aria_label = format!("Delete {}", job_title.trim());

    let click = move |confirmed: Option<bool>| {
        let (next, fire) = step.get_untracked().next(confirmed);
        step.set(next);
        if fire {
            on_confirm.run(());
        }
    };

    move || match step.get() {
        DeleteStep::Idle => view! {
            <button
                class="btn btn-danger"
                aria-label=aria_label.clone()
                on:click=move |ev| {
                    ev.stop_propagation();
                    click(None);
                }
            >
                "Delete"
            </button>
        }
        .into_any(),
        DeleteStep::Confirming => view! {
            <span class="delete-confirm" role="alertdialog">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button class="btn btn-danger" on:click=move |ev| {
                    ev.stop_propagation();
                    click(Some(true));
                }>"Yes"</button>
                <button class="btn btn-secondary" on:click=move |ev| {
                    ev.stop_propagation();
                    click(Some(false));
                }>"No"</button>
            </span>
        }
        .into_any(),
    }
}
