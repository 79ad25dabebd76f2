//! Entry Modal Component
//!
//! Create/edit form for a vault entry. The form lives in the store so the
//! generator can write into it.

use leptos::prelude::*;

use crate::actions;
use crate::components::StrengthMeter;
use crate::context::{use_app_context, AppContext};
use crate::forms::{EntryForm, GeneratorState};
use crate::store::{store_close_entry_form, store_edit_entry_form, AppStateStoreFields};

fn read_form<T: Default>(ctx: AppContext, read: impl FnOnce(&EntryForm) -> T) -> T {
    ctx.store
        .entry_form()
        .with(|form| form.as_ref().map(read))
        .unwrap_or_default()
}

fn edit_form(ctx: AppContext, edit: impl FnOnce(&mut EntryForm)) {
    store_edit_entry_form(ctx.store, edit);
}

#[component]
pub fn EntryModal() -> impl IntoView {
    let ctx = use_app_context();
    let is_open = Memo::new(move |_| ctx.store.entry_form().with(|form| form.is_some()));
    let is_edit = Memo::new(move |_| read_form(ctx, |f| f.is_edit()));
    let password_visible = Memo::new(move |_| read_form(ctx, |f| f.password_visible));
    let categories = Memo::new(move |_| {
        ctx.store.categories().with(|categories| {
            categories
                .iter()
                .map(|c| (c.id, c.name.clone()))
                .collect::<Vec<_>>()
        })
    });
    let selected_category = Memo::new(move |_| read_form(ctx, |f| f.category_id));

    let open_generator = move |_| {
        let defaults = ctx.config().generator_defaults;
        ctx.store.generator().set(Some(GeneratorState::new(defaults)));
        actions::generate_password(ctx);
    };

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| store_close_entry_form(ctx.store)>
                <div class="modal" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{move || if is_edit.get() { "Edit entry" } else { "New entry" }}</h2>
                        <button class="btn-icon" on:click=move |_| store_close_entry_form(ctx.store)>
                            "×"
                        </button>
                    </div>

                    <form
                        class="modal-body"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            actions::save_entry(ctx);
                        }
                    >
                        <div class="form-group">
                            <label>"Title *"</label>
                            <input
                                type="text"
                                required
                                prop:value=move || read_form(ctx, |f| f.title.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit_form(ctx, |f| f.title = value);
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label>"Username"</label>
                            <input
                                type="text"
                                autocomplete="off"
                                prop:value=move || read_form(ctx, |f| f.username.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit_form(ctx, |f| f.username = value);
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label>"Password *"</label>
                            <div class="password-input">
                                <input
                                    type=move || if password_visible.get() { "text" } else { "password" }
                                    required
                                    autocomplete="new-password"
                                    prop:value=move || read_form(ctx, |f| f.password.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        edit_form(ctx, |f| f.password = value);
                                    }
                                />
                                <button
                                    type="button"
                                    class="btn-icon"
                                    title=move || if password_visible.get() { "Hide" } else { "Show" }
                                    on:click=move |_| edit_form(ctx, |f| f.password_visible = !f.password_visible)
                                >
                                    "👁"
                                </button>
                                <button type="button" class="btn-icon" title="Generate" on:click=open_generator>
                                    "⚄"
                                </button>
                            </div>
                            <StrengthMeter password=Signal::derive(move || read_form(ctx, |f| f.password.clone())) />
                        </div>

                        <div class="form-group">
                            <label>"Website"</label>
                            <input
                                type="url"
                                placeholder="https://"
                                prop:value=move || read_form(ctx, |f| f.url.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit_form(ctx, |f| f.url = value);
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label>"Category"</label>
                            <select on:change=move |ev| {
                                let value = event_target_value(&ev);
                                edit_form(ctx, |f| f.set_category_value(&value));
                            }>
                                <option value="" selected=move || selected_category.get().is_none()>
                                    "No category"
                                </option>
                                <For
                                    each=move || categories.get()
                                    key=|(id, name)| (*id, name.clone())
                                    children=move |(id, name)| view! {
                                        <option
                                            value=id.to_string()
                                            selected=move || selected_category.get() == Some(id)
                                        >
                                            {name}
                                        </option>
                                    }
                                />
                            </select>
                        </div>

                        <div class="form-group">
                            <label>"Tags"</label>
                            <input
                                type="text"
                                placeholder="work, shared"
                                prop:value=move || read_form(ctx, |f| f.tags.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit_form(ctx, |f| f.tags = value);
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label>"Notes"</label>
                            <textarea
                                rows="3"
                                prop:value=move || read_form(ctx, |f| f.notes.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit_form(ctx, |f| f.notes = value);
                                }
                            ></textarea>
                        </div>

                        <div class="modal-footer">
                            <button
                                type="button"
                                class="btn btn-secondary"
                                on:click=move |_| store_close_entry_form(ctx.store)
                            >
                                "Cancel"
                            </button>
                            <button type="submit" class="btn btn-primary">"Save"</button>
                        </div>
                    </form>
                </div>
            </div>
        </Show>
    }
}
