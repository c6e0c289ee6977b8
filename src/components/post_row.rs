//! Post Row Component
//!
//! One summary row in the post list: status icon, name, discovery date
//! and a button that opens the detail page.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::app::detail_path;
use crate::dates::discovery_label;
use crate::models::Post;

/// Icon source and alt text for a resolution status
pub fn status_icon(resolved: bool) -> (&'static str, &'static str) {
    if resolved {
        ("/img/true.png", "Resolved")
    } else {
        ("/img/false.png", "Unresolved")
    }
}

#[component]
pub fn PostRow(post: Post) -> impl IntoView {
    let navigate = use_navigate();
    let path = detail_path(&post.id);
    let (icon_src, icon_alt) = status_icon(post.resolved);

    view! {
        <div class="post-row">
            <div class="post-summary">
                <div class="post-status-icon">
                    <img src=icon_src alt=icon_alt width="50" height="50" />
                </div>
                <div>
                    <h2 class="post-name">{post.lostitem_name}</h2>
                    <p class="post-date">{discovery_label(post.find_date)}</p>
                </div>
            </div>
            <button
                class="detail-btn"
                on:click=move |_| navigate(&path, Default::default())
            >
                "詳細"
            </button>
        </div>
    }
}
