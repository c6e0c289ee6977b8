//! Post Detail Page
//!
//! Target of the list's "詳細" button. Loads one post under the same
//! session gate as the list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_params;
use leptos_router::params::Params;

use crate::components::status_icon;
use crate::context::AppContext;
use crate::dates::discovery_label;
use crate::loader::{load_with_session, LoadGeneration};
use crate::models::{Post, PostId};

#[derive(Params, PartialEq, Clone, Debug)]
pub struct PostRouteParams {
    pub id: Option<String>,
}

#[derive(Clone, PartialEq)]
enum DetailState {
    Loading,
    Missing,
    Found(Post),
}

#[component]
pub fn PostDetailPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let params = use_params::<PostRouteParams>();
    let (state, set_state) = signal(DetailState::Loading);
    let generation = LoadGeneration::default();

    Effect::new(move |_| {
        let id = params.get().ok().and_then(|p| p.id).filter(|id| !id.is_empty());
        let ticket = generation.begin();
        let (Some(id), Some(backend)) = (id, ctx.backend()) else {
            set_state.set(DetailState::Missing);
            return;
        };
        set_state.set(DetailState::Loading);
        let generation = generation.clone();
        spawn_local(async move {
            let id = PostId(id);
            let client = backend.client.clone();
            let outcome = load_with_session(&backend.sessions, move |session| async move {
                client.get_post(&id, &session).await
            })
            .await;
            if !generation.is_current(ticket) {
                log::debug!("[PostDetail] Dropped stale result for an earlier id");
                return;
            }
            match outcome.into_loaded("post") {
                Some(Some(post)) => set_state.set(DetailState::Found(post)),
                _ => set_state.set(DetailState::Missing),
            }
        });
    });

    view! {
        <div class="post-detail-page">
            {move || match state.get() {
                DetailState::Loading => view! { <p class="loading">"読み込み中..."</p> }.into_any(),
                DetailState::Missing => view! { <p class="not-found">"投稿が見つかりません"</p> }.into_any(),
                DetailState::Found(post) => {
                    let (icon_src, icon_alt) = status_icon(post.resolved);
                    view! {
                        <div class="post-detail">
                            <img src=icon_src alt=icon_alt width="50" height="50" />
                            <h2 class="post-name">{post.lostitem_name}</h2>
                            <p class="post-date">{discovery_label(post.find_date)}</p>
                            <p class="post-status">{if post.resolved { "解決済み" } else { "未解決" }}</p>
                        </div>
                    }.into_any()
                }
            }}
            <A href="/">"一覧に戻る"</A>
        </div>
    }
}
