//! Browser Session Provider
//!
//! Reads the auth session the backend's JS client keeps in localStorage.
//! Signing in and refreshing tokens happen elsewhere; an expired or
//! unreadable entry simply counts as "no session".

use async_trait::async_trait;

use crate::loader::SessionSource;
use crate::models::Session;

#[derive(Debug, Clone)]
pub struct BrowserSession {
    storage_key: String,
}

impl BrowserSession {
    pub fn new(storage_key: impl Into<String>) -> Self {
        Self {
            storage_key: storage_key.into(),
        }
    }

    fn read_raw(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok().flatten()?;
        storage.get_item(&self.storage_key).ok().flatten()
    }
}

#[async_trait(?Send)]
impl SessionSource for BrowserSession {
    async fn current_session(&self) -> Option<Session> {
        let raw = self.read_raw()?;
        let now_secs = (js_sys::Date::now() / 1000.0) as i64;
        let session = session_from_json(&raw, now_secs);
        if session.is_none() {
            log::debug!("[SESSION] stored session under {} is unusable", self.storage_key);
        }
        session
    }
}

/// Decode a stored session, rejecting expired or token-less entries.
///
/// Accepts the flat layout and the older `{"currentSession": {...}}` wrapper.
pub fn session_from_json(raw: &str, now_secs: i64) -> Option<Session> {
    let mut value: serde_json::Value = serde_json::from_str(raw).ok()?;
    if let Some(inner) = value.get_mut("currentSession") {
        value = inner.take();
    }
    let session: Session = serde_json::from_value(value).ok()?;
    if session.access_token.is_empty() || session.is_expired(now_secs) {
        return None;
    }
    Some(session)
}
