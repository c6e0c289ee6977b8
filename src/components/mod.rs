//! UI Components
//!
//! Leptos components for the post list and detail pages.

mod search_box;
mod post_row;
mod post_list;
mod post_detail;

pub use search_box::SearchBox;
pub use post_row::{status_icon, PostRow};
pub use post_list::PostListPage;
pub use post_detail::PostDetailPage;
