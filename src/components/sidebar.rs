//! Sidebar Component
//!
//! Filter navigation, category management and vault import/export.

use leptos::prelude::*;

use crate::actions;
use crate::components::DeleteConfirmButton;
use crate::context::use_app_context;
use crate::filter::{EntryCounts, EntryFilter};
use crate::store::{store_open_category_editor, AppStateStoreFields};
use crate::forms::CategoryForm;
use crate::view::CategoryRowView;

#[component]
fn NavItem(
    filter: EntryFilter,
    #[prop(into)] label: String,
    icon: &'static str,
    #[prop(into)] count: Signal<usize>,
) -> impl IntoView {
    let ctx = use_app_context();
    let active = Memo::new(move |_| {
        !ctx.store.search().with(|search| search.is_active()) && ctx.store.filter().get() == filter
    });

    view! {
        <button
            class=move || if active.get() { "nav-item active" } else { "nav-item" }
            data-filter=filter.to_string()
            on:click=move |_| actions::select_filter(ctx, filter)
        >
            <span class="nav-icon">{icon}</span>
            <span class="nav-label">{label}</span>
            <span class="nav-count">{move || count.get()}</span>
        </button>
    }
}

#[component]
fn CategoryRow(row: CategoryRowView) -> impl IntoView {
    let ctx = use_app_context();
    let id = row.id;

    view! {
        <div
            class=if row.active { "category-item active" } else { "category-item" }
            on:click=move |_| actions::select_filter(ctx, EntryFilter::Category(id))
        >
            <span class="category-icon" style=row.icon_style.clone()>{row.glyph}</span>
            <span class="category-name">{row.name.clone()}</span>
            <span class="category-count">{row.count}</span>
            <div class="category-actions" on:click=|ev| ev.stop_propagation()>
                <button
                    class="btn-icon"
                    title="Edit category"
                    on:click=move |_| store_open_category_editor(ctx.store, id)
                >
                    "✎"
                </button>
                <DeleteConfirmButton
                    button_class="btn-icon"
                    on_confirm=move |_: ()| actions::delete_category(ctx, id)
                />
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_app_context();
    let counts = Memo::new(move |_| ctx.store.entries().with(|entries| EntryCounts::of(entries)));
    let rows = Memo::new(move |_| {
        // no category is highlighted while search results are shown
        let filter = if ctx.store.search().with(|search| search.is_active()) {
            EntryFilter::All
        } else {
            ctx.store.filter().get()
        };
        ctx.store.categories().with(|categories| {
            categories
                .iter()
                .map(|c| CategoryRowView::new(c, &filter))
                .collect::<Vec<_>>()
        })
    });
    let is_open = Memo::new(move |_| ctx.store.sidebar_open().get());

    view! {
        <Show when=move || is_open.get()>
            <div class="sidebar-backdrop" on:click=move |_| ctx.store.sidebar_open().set(false)></div>
        </Show>
        <aside class=move || if is_open.get() { "sidebar open" } else { "sidebar" }>
            <div class="sidebar-header">
                <span class="logo-icon">"🔐"</span>
                <h1>"Vault"</h1>
            </div>

            <nav class="sidebar-nav">
                <NavItem
                    filter=EntryFilter::All
                    label="All items"
                    icon="▤"
                    count=Signal::derive(move || counts.get().all)
                />
                <NavItem
                    filter=EntryFilter::Favorites
                    label="Favorites"
                    icon="★"
                    count=Signal::derive(move || counts.get().favorites)
                />
            </nav>

            <div class="sidebar-section">
                <div class="section-header">
                    <h3>"Categories"</h3>
                    <button
                        class="btn-icon"
                        title="Add category"
                        on:click=move |_| ctx.store.category_form().set(Some(CategoryForm::default()))
                    >
                        "+"
                    </button>
                </div>
                <div class="category-list">
                    <For
                        each=move || rows.get()
                        key=|row| row.clone()
                        children=move |row| view! { <CategoryRow row=row /> }
                    />
                </div>
            </div>

            <div class="sidebar-footer">
                <button class="btn btn-secondary" on:click=move |_| actions::export_vault(ctx)>
                    "⇩ Export"
                </button>
                <label class="btn btn-secondary import-label">
                    "⇧ Import"
                    <input
                        type="file"
                        accept=".json,application/json"
                        class="hidden-input"
                        on:change=move |ev| {
                            let input = event_target::<web_sys::HtmlInputElement>(&ev);
                            actions::import_vault(ctx, input);
                        }
                    />
                </label>
            </div>
        </aside>
    }
}
