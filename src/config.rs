//! Build Configuration
//!
//! Backend coordinates are baked in at build time through environment
//! variables (see `from_build_env`).

use crate::dates::DateLocale;
use crate::error::ConfigError;

const URL_VAR: &str = "LOSTITEM_SUPABASE_URL";
const ANON_KEY_VAR: &str = "LOSTITEM_SUPABASE_ANON_KEY";

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Backend base URL without trailing slash
    pub supabase_url: String,
    pub anon_key: String,
    /// localStorage key holding the auth session
    pub auth_storage_key: String,
    /// Explicit locale; `None` means "ask the browser"
    pub date_locale: Option<DateLocale>,
}

impl AppConfig {
    pub fn from_values(
        url: Option<&str>,
        anon_key: Option<&str>,
        auth_storage_key: Option<&str>,
        date_locale: Option<&str>,
    ) -> Result<Self, ConfigError> {
        let url = non_empty(url).ok_or(ConfigError::Missing(URL_VAR))?;
        if !(url.starts_with("https://") || url.starts_with("http://")) {
            return Err(ConfigError::InvalidUrl(url.to_string()));
        }
        let supabase_url = url.trim_end_matches('/').to_string();
        let anon_key = non_empty(anon_key).ok_or(ConfigError::Missing(ANON_KEY_VAR))?;

        let auth_storage_key = match non_empty(auth_storage_key) {
            Some(key) => key.to_string(),
            None => default_storage_key(&supabase_url),
        };

        Ok(Self {
            supabase_url,
            anon_key: anon_key.to_string(),
            auth_storage_key,
            date_locale: non_empty(date_locale).map(DateLocale::from_tag),
        })
    }

    pub fn from_build_env() -> Result<Self, ConfigError> {
        Self::from_values(
            option_env!("LOSTITEM_SUPABASE_URL"),
            option_env!("LOSTITEM_SUPABASE_ANON_KEY"),
            option_env!("LOSTITEM_AUTH_STORAGE_KEY"),
            option_env!("LOSTITEM_DATE_LOCALE"),
        )
    }

    /// Configured locale, else the browser language
    pub fn resolve_date_locale(&self) -> DateLocale {
        self.date_locale
            .or_else(|| browser_language().map(|tag| DateLocale::from_tag(&tag)))
            .unwrap_or_default()
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// `https://abcd.supabase.co` -> `sb-abcd-auth-token`
pub fn default_storage_key(supabase_url: &str) -> String {
    let host = supabase_url
        .split("://")
        .nth(1)
        .unwrap_or(supabase_url)
        .split(['/', ':'])
        .next()
        .unwrap_or_default();
    let project_ref = host.split('.').next().unwrap_or(host);
    format!("sb-{}-auth-token", project_ref)
}

#[cfg(target_arch = "wasm32")]
fn browser_language() -> Option<String> {
    web_sys::window().and_then(|w| w.navigator().language())
}

#[cfg(not(target_arch = "wasm32"))]
fn browser_language() -> Option<String> {
    None
}
