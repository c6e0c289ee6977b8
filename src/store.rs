//! Post List State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. One store is
//! created per mounted list page and dropped with it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::dates::DateLocale;
use crate::filter::filter_posts;
use crate::models::Post;

/// Raw list and search query of the post list page
#[derive(Clone, Debug, Default, Store)]
pub struct PostListState {
    /// Visible posts in backend order (discovery date, newest first)
    pub posts: Vec<Post>,
    /// Current search box contents
    pub query: String,
}

/// Type alias for the store
pub type PostListStore = Store<PostListState>;

pub fn store_set_posts(store: &PostListStore, posts: Vec<Post>) {
    *store.posts().write() = posts;
}

pub fn store_set_query(store: &PostListStore, query: String) {
    *store.query().write() = query;
}

/// Derived list: recomputed whenever posts or query change
pub fn filtered_posts(store: PostListStore, locale: DateLocale) -> Memo<Vec<Post>> {
    Memo::new(move |_| {
        let posts = store.posts().read();
        let query = store.query().read();
        filter_posts(&posts, &query, locale)
    })
}
