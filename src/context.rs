//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::backend::{BrowserSession, SupabaseClient};
use crate::config::AppConfig;
use crate::dates::DateLocale;

/// Everything needed to talk to the backend
#[derive(Debug, Clone)]
pub struct Backend {
    pub client: SupabaseClient,
    pub sessions: BrowserSession,
}

impl Backend {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            client: SupabaseClient::new(config),
            sessions: BrowserSession::new(config.auth_storage_key.clone()),
        }
    }
}

/// App-wide values provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Missing when the build configuration is unusable
    backend: StoredValue<Option<Backend>>,
    /// Format used when matching dates against the search query
    pub date_locale: DateLocale,
}

impl AppContext {
    pub fn new(backend: Option<Backend>, date_locale: DateLocale) -> Self {
        Self {
            backend: StoredValue::new(backend),
            date_locale,
        }
    }

    pub fn backend(&self) -> Option<Backend> {
        self.backend.get_value()
    }
}
