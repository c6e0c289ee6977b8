//! Lost-Item Frontend App
//!
//! Root component: reads the build configuration, provides context and
//! declares the routes.

use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use percent_encoding::utf8_percent_encode;

use crate::backend::PATH_SEGMENT;
use crate::components::{PostDetailPage, PostListPage};
use crate::config::AppConfig;
use crate::context::{AppContext, Backend};
use crate::dates::DateLocale;
use crate::models::PostId;

/// Client-side route of a post's detail page
pub fn detail_path(id: &PostId) -> String {
    format!("/post/{}", utf8_percent_encode(&id.0, PATH_SEGMENT))
}

#[component]
pub fn App() -> impl IntoView {
    let ctx = match AppConfig::from_build_env() {
        Ok(config) => {
            let locale = config.resolve_date_locale();
            log::info!("[APP] Backend {} (date locale {:?})", config.supabase_url, locale);
            AppContext::new(Some(Backend::new(&config)), locale)
        }
        Err(e) => {
            log::error!("[APP] Invalid configuration: {}", e);
            AppContext::new(None, DateLocale::default())
        }
    };

    // Provide context to all children
    provide_context(ctx);

    view! {
        <Router>
            <main class="app-layout">
                <Routes fallback=|| view! { <p class="not-found">"Page not found."</p> }>
                    <Route path=path!("/") view=PostListPage />
                    <Route path=path!("/post/:id") view=PostDetailPage />
                </Routes>
            </main>
        </Router>
    }
}
