//! Hosted Backend Bindings
//!
//! REST calls to the backend, organized by concern.

mod query;
mod session;
mod posts;

use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::config::AppConfig;
use crate::error::ApiError;
use crate::models::Session;

pub use query::{post_by_id, visible_posts, TableQuery, PATH_SEGMENT};
pub use session::BrowserSession;

/// Authenticated REST client for the backend
#[derive(Debug, Clone)]
pub struct SupabaseClient {
    base_url: String,
    anon_key: String,
}

impl SupabaseClient {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            base_url: config.supabase_url.clone(),
            anon_key: config.anon_key.clone(),
        }
    }

    pub fn rest_url(&self, query: &TableQuery) -> String {
        format!("{}/rest/v1/{}", self.base_url, query.to_path())
    }

    /// Run a read query and decode the JSON rows
    pub async fn fetch_rows<T: serde::de::DeserializeOwned>(
        &self,
        query: &TableQuery,
        session: &Session,
    ) -> Result<Vec<T>, ApiError> {
        let url = self.rest_url(query);
        log::debug!("[API] GET {}", url);
        let bearer = format!("Bearer {}", session.access_token);
        let body = get_text(
            &url,
            &[
                ("apikey", self.anon_key.as_str()),
                ("Authorization", bearer.as_str()),
                ("Accept", "application/json"),
            ],
        )
        .await?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// GET `url` and return the body text of a 2xx response
async fn get_text(url: &str, headers: &[(&str, &str)]) -> Result<String, ApiError> {
    let window = web_sys::window().ok_or(ApiError::NoWindow)?;

    let init = RequestInit::new();
    init.set_method("GET");
    init.set_mode(RequestMode::Cors);
    let request = Request::new_with_str_and_init(url, &init)?;
    for (name, value) in headers {
        request.headers().set(name, value)?;
    }

    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await?
        .dyn_into()?;
    let text = JsFuture::from(response.text()?)
        .await?
        .as_string()
        .unwrap_or_default();

    if !response.ok() {
        return Err(ApiError::Status {
            status: response.status(),
            body: text,
        });
    }
    Ok(text)
}
