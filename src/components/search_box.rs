//! Search Box Component

use leptos::prelude::*;

/// Free-text search input; every keystroke updates the query
#[component]
pub fn SearchBox(
    query: Signal<String>,
    #[prop(into)] on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="search-box">
            <input
                type="text"
                placeholder="キーワードを入力してください"
                prop:value=move || query.get()
                on:input=move |ev| on_change.run(event_target_value(&ev))
            />
        </div>
    }
}
