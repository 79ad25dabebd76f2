//! Entry Grid Component
//!
//! Cards for the entries the current filter or search shows.

use leptos::prelude::*;

use crate::actions;
use crate::components::DeleteConfirmButton;
use crate::context::{use_app_context, AppContext};
use crate::store::{
    store_find_entry, store_open_entry_editor, store_select_entry, visible_entries, AppStateStoreFields,
};
use crate::view::{EntryCardView, EMPTY_LIST_MESSAGE};

/// Single entry card
#[component]
fn EntryCard(card: EntryCardView) -> impl IntoView {
    let ctx = use_app_context();
    let id = card.id;
    let favorite = card.is_favorite;

    let copy_password = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        if let Some(password) = store_find_entry(ctx.store, id).map(|e| e.password) {
            actions::copy_to_clipboard(ctx, password);
        }
    };

    view! {
        <div
            class=card.class_name()
            on:click=move |_| store_select_entry(ctx.store, id)
        >
            <div class="entry-header">
                <div class="entry-icon">{card.initial.clone()}</div>
                <div class="entry-actions" on:click=|ev| ev.stop_propagation()>
                    <button class="btn-icon copy-btn" title="Copy password" on:click=copy_password>
                        "⧉"
                    </button>
                    <button
                        class="btn-icon edit-btn"
                        title="Edit"
                        on:click=move |_| store_open_entry_editor(ctx.store, id)
                    >
                        "✎"
                    </button>
                    <DeleteConfirmButton
                        button_class="btn-icon delete-btn"
                        on_confirm=move |_: ()| actions::delete_entry(ctx, id)
                    />
                </div>
            </div>
            <div class="entry-body">
                <h3>{card.title.clone()}</h3>
                {card.username.clone().map(|username| view! { <p>{username}</p> })}
                {card.url.clone().map(|url| view! { <p class="entry-url">{url}</p> })}
            </div>
            <div class="entry-footer">
                {match card.badge.clone() {
                    Some(badge) => view! {
                        <span class="entry-category" style=badge.style>{badge.name}</span>
                    }.into_any(),
                    None => view! { <span></span> }.into_any(),
                }}
                <button
                    class=if favorite { "btn-icon favorite-btn active" } else { "btn-icon favorite-btn" }
                    title=card.favorite_title()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        actions::toggle_favorite(ctx, id);
                    }
                >
                    {if favorite { "★" } else { "☆" }}
                </button>
            </div>
        </div>
    }
}

fn entry_cards(ctx: AppContext) -> Vec<EntryCardView> {
    let selected = ctx.store.detail().with(|detail| detail.entry_id());
    let filter = ctx.store.filter().get();
    ctx.store.categories().with(|categories| {
        ctx.store.search().with(|search| {
            ctx.store.entries().with(|entries| {
                visible_entries(entries, &filter, search)
                    .into_iter()
                    .map(|entry| EntryCardView::new(entry, categories, selected))
                    .collect()
            })
        })
    })
}

/// Grid of entry cards, or the empty placeholder
#[component]
pub fn EntryGrid() -> impl IntoView {
    let ctx = use_app_context();
    let cards = Memo::new(move |_| entry_cards(ctx));

    view! {
        <div class="entries-grid">
            {move || {
                let cards = cards.get();
                if cards.is_empty() {
                    view! {
                        <div class="empty-state">
                            <span class="empty-icon">"🔒"</span>
                            <p>{EMPTY_LIST_MESSAGE}</p>
                        </div>
                    }.into_any()
                } else {
                    cards
                        .into_iter()
                        .map(|card| view! { <EntryCard card=card /> })
                        .collect_view()
                        .into_any()
                }
            }}
        </div>
    }
}
