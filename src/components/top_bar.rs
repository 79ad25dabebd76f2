//! Top Bar Component
//!
//! Search box and global actions.

use leptos::prelude::*;

use crate::actions;
use crate::context::use_app_context;
use crate::forms::EntryForm;
use crate::store::AppStateStoreFields;

#[component]
pub fn TopBar() -> impl IntoView {
    let ctx = use_app_context();
    let is_light = Memo::new(move |_| ctx.store.theme().get().is_light());

    view! {
        <header class="top-bar">
            <button
                class="btn-icon menu-toggle"
                title="Menu"
                on:click=move |_| ctx.store.sidebar_open().update(|open| *open = !*open)
            >
                "☰"
            </button>

            <div class="search-box">
                <span class="search-icon">"⌕"</span>
                <input
                    type="text"
                    placeholder="Search entries..."
                    prop:value=move || ctx.store.search().with(|search| search.input.clone())
                    on:input=move |ev| actions::search(ctx, event_target_value(&ev))
                />
            </div>

            <div class="top-actions">
                <button class="btn btn-primary" on:click=move |_| ctx.store.entry_form().set(Some(EntryForm::default()))>
                    "+ New entry"
                </button>
                <button
                    class="btn-icon"
                    title=move || if is_light.get() { "Dark theme" } else { "Light theme" }
                    on:click=move |_| actions::toggle_theme(ctx)
                >
                    {move || if is_light.get() { "☾" } else { "☀" }}
                </button>
                <button class="btn-icon" title="Lock vault" on:click=move |_| actions::lock_vault(ctx)>
                    "🔒"
                </button>
            </div>
        </header>
    }
}
