//! Detail Panel Component
//!
//! Right column showing the selected entry with masked password.

use leptos::prelude::*;

use crate::actions;
use crate::components::DeleteConfirmButton;
use crate::context::{use_app_context, AppContext};
use crate::store::{store_open_entry_editor, AppStateStoreFields};
use crate::view::{DetailView, EMPTY_DETAIL_MESSAGE};

fn detail_fields(ctx: AppContext, detail: DetailView) -> AnyView {
    let id = detail.id;
    let password = detail.password.clone();
    let username_copy = detail.username.clone();

    view! {
        <div class="detail-field">
            <div class="detail-label">"Title"</div>
            <div class="detail-value">{detail.title.clone()}</div>
        </div>

        {username_copy.map(|username| {
            let shown = username.clone();
            view! {
                <div class="detail-field">
                    <div class="detail-label">"Username"</div>
                    <div class="password-field">
                        <div class="password-value">{shown}</div>
                        <button
                            class="btn-icon"
                            title="Copy"
                            on:click=move |_| actions::copy_to_clipboard(ctx, username.clone())
                        >
                            "⧉"
                        </button>
                    </div>
                </div>
            }
        })}

        <div class="detail-field">
            <div class="detail-label">"Password"</div>
            <div class="password-field">
                <div class="password-value">{detail.password_display.clone()}</div>
                <button
                    class=if detail.revealed { "btn-icon active" } else { "btn-icon" }
                    title=if detail.revealed { "Hide" } else { "Show" }
                    on:click=move |_| ctx.store.detail().update(|detail| detail.toggle_reveal())
                >
                    "👁"
                </button>
                <button
                    class="btn-icon"
                    title="Copy"
                    on:click=move |_| actions::copy_to_clipboard(ctx, password.clone())
                >
                    "⧉"
                </button>
            </div>
        </div>

        {detail.url.clone().map(|url| view! {
            <div class="detail-field">
                <div class="detail-label">"Website"</div>
                <div class="detail-value">
                    <a href=url.clone() target="_blank" rel="noopener noreferrer">{url.clone()}</a>
                </div>
            </div>
        })}

        {detail.category.clone().map(|badge| view! {
            <div class="detail-field">
                <div class="detail-label">"Category"</div>
                <div class="detail-value">
                    <span class="entry-category" style=badge.style>{badge.name}</span>
                </div>
            </div>
        })}

        {(!detail.tags.is_empty()).then(|| view! {
            <div class="detail-field">
                <div class="detail-label">"Tags"</div>
                <div class="detail-value tag-list">
                    {detail.tags.iter().map(|tag| view! { <span class="tag-chip">{tag.clone()}</span> }).collect_view()}
                </div>
            </div>
        })}

        {detail.notes.clone().map(|notes| view! {
            <div class="detail-field">
                <div class="detail-label">"Notes"</div>
                <div class="detail-value notes">{notes}</div>
            </div>
        })}

        <div class="detail-field">
            <div class="detail-label">"Created"</div>
            <div class="detail-value">{detail.created.clone()}</div>
        </div>
        <div class="detail-field">
            <div class="detail-label">"Updated"</div>
            <div class="detail-value">{detail.updated.clone()}</div>
        </div>

        <div class="detail-actions">
            <button class="btn btn-primary" on:click=move |_| store_open_entry_editor(ctx.store, id)>
                "✎ Edit"
            </button>
            <DeleteConfirmButton
                button_class="btn btn-danger"
                on_confirm=move |_: ()| actions::delete_entry(ctx, id)
            />
        </div>
    }
    .into_any()
}

#[component]
pub fn DetailPanel() -> impl IntoView {
    let ctx = use_app_context();
    let detail = Memo::new(move |_| {
        ctx.store.detail().with(|panel| {
            ctx.store
                .categories()
                .with(|categories| DetailView::from_panel(panel, categories))
        })
    });

    view! {
        <aside class=move || if detail.with(|d| d.is_some()) { "detail-panel has-entry" } else { "detail-panel" }>
            <div class="detail-header">
                <h2>"Details"</h2>
                {move || detail.get().map(|d| {
                    let id = d.id;
                    view! {
                        <button
                            class=if d.is_favorite { "btn-icon favorite-btn active" } else { "btn-icon favorite-btn" }
                            title=if d.is_favorite { "Remove from favorites" } else { "Add to favorites" }
                            on:click=move |_| actions::toggle_favorite(ctx, id)
                        >
                            {if d.is_favorite { "★" } else { "☆" }}
                        </button>
                    }
                })}
                <button class="btn-icon close-btn" title="Close" on:click=move |_| ctx.store.detail().update(|detail| detail.close())>
                    "×"
                </button>
            </div>
            <div class="detail-content">
                {move || match detail.get() {
                    Some(d) => detail_fields(ctx, d),
                    None => view! {
                        <div class="empty-state">
                            <span class="empty-icon">"🛡"</span>
                            <p>{EMPTY_DETAIL_MESSAGE}</p>
                        </div>
                    }.into_any(),
                }}
            </div>
        </aside>
    }
}
