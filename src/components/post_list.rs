//! Post List Page
//!
//! Loads the visible posts once per mount and renders the rows that match
//! the search box.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::components::{PostRow, SearchBox};
use crate::context::AppContext;
use crate::loader::load_visible_posts;
use crate::store::{filtered_posts, store_set_posts, store_set_query, PostListState, PostListStateStoreFields};

#[component]
pub fn PostListPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let store = Store::new(PostListState::default());
    let filtered = filtered_posts(store, ctx.date_locale);

    // Load posts on mount
    Effect::new(move |_| {
        let Some(backend) = ctx.backend() else {
            log::warn!("[PostList] No backend configured, list stays empty");
            return;
        };
        spawn_local(async move {
            let outcome = load_visible_posts(&backend.sessions, &backend.client).await;
            if let Some(posts) = outcome.into_loaded("posts") {
                store_set_posts(&store, posts);
            }
        });
    });

    let query = Signal::derive(move || store.query().get());

    view! {
        <div class="post-list-page">
            <SearchBox
                query=query
                on_change=move |value: String| store_set_query(&store, value)
            />
            <div class="post-list">
                <For
                    each=move || filtered.get()
                    key=|post| post.id.clone()
                    children=move |post| view! { <PostRow post=post /> }
                />
            </div>
        </div>
    }
}
