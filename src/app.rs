//! Job Board App
//!
//! Header, the current page, footer.

use leptos::prelude::*;

use crate::components::{AddJobForm, Footer, Header, JobListings};
use crate::config::ClientConfig;
use crate::context::{AppContext, Page};

#[component]
pub fn App() -> impl IntoView {
    let (page, set_page) = signal(Page::Listings);

    let config = ClientConfig::from_build_env();
    log::info!("Jobs API at {}", config.api_base_url);

    // Provide context to all children
    provide_context(AppContext::new((page, set_page), config));

    view! {
        <div class="app-layout">
            <Header />
            <main class="main-content container">
                {move || match page.get() {
                    Page::Listings => view! { <JobListings /> }.into_any(),
                    Page::AddJob => view! { <AddJobForm /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
