//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::api::HttpJobClient;
use crate::config::ClientConfig;

/// Pages of the app; replaces a router for two views
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Listings,
    AddJob,
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Current page - read
    pub page: ReadSignal<Page>,
    /// Current page - write
    set_page: WriteSignal<Page>,
    /// Where the jobs API lives
    config: StoredValue<ClientConfig>,
}

impl AppContext {
    pub fn new(page: (ReadSignal<Page>, WriteSignal<Page>), config: ClientConfig) -> Self {
        Self {
            page: page.0,
            set_page: page.1,
            config: StoredValue::new(config),
        }
    }

    /// Switch to another page
    pub fn navigate(&self, page: Page) {
        log::debug!("Navigate to {:?}", page);
        self.set_page.set(page);
    }

    /// Client handle for use inside `spawn_local`
    pub fn api(&self) -> HttpJobClient {
        HttpJobClient::new(self.config.get_value())
    }
}

/// Get the app context; panics outside `App`
pub fn use_app_context() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
