//! Header Component
//!
//! Brand link and page navigation.

use leptos::prelude::*;

use crate::context::{use_app_context, Page};

#[component]
pub fn Header() -> impl IntoView {
    let ctx = use_app_context();

    let nav_class = move |page: Page| {
        if ctx.page.get() == page { "nav-link active" } else { "nav-link" }
    };

    view! {
        <header class="site-header">
            <div class="container header-row">
                <button class="brand" on:click=move |_| ctx.navigate(Page::Listings)>
                    "Job Listings"
                </button>
                <nav>
                    <ul class="nav-list">
                        <li>
                            <button
                                class=move || nav_class(Page::Listings)
                                on:click=move |_| ctx.navigate(Page::Listings)
                            >
                                "Home"
                            </button>
                        </li>
                        <li>
                            <button
                                class=move || nav_class(Page::AddJob)
                                on:click=move |_| ctx.navigate(Page::AddJob)
                            >
                                "Add Job"
                            </button>
                        </li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}
