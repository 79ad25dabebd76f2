//! Category Modal Component

use leptos::prelude::*;

use crate::actions;
use crate::context::{use_app_context, AppContext};
use crate::forms::CategoryForm;
use crate::store::{store_edit_category_form, AppStateStoreFields};
use crate::models::CategoryIcon;

fn read_form<T: Default>(ctx: AppContext, read: impl FnOnce(&CategoryForm) -> T) -> T {
    ctx.store
        .category_form()
        .with(|form| form.as_ref().map(read))
        .unwrap_or_default()
}

fn edit_form(ctx: AppContext, edit: impl FnOnce(&mut CategoryForm)) {
    store_edit_category_form(ctx.store, edit);
}

#[component]
pub fn CategoryModal() -> impl IntoView {
    let ctx = use_app_context();
    let is_open = Memo::new(move |_| ctx.store.category_form().with(|form| form.is_some()));
    let is_edit = Memo::new(move |_| read_form(ctx, |f| f.is_edit()));
    let selected_icon = Memo::new(move |_| read_form(ctx, |f| f.icon));

    let close = move || ctx.store.category_form().set(None);

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay" on:click=move |_| close()>
                <div class="modal modal-small" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>{move || if is_edit.get() { "Edit category" } else { "New category" }}</h2>
                        <button class="btn-icon" on:click=move |_| close()>"×"</button>
                    </div>

                    <form
                        class="modal-body"
                        on:submit=move |ev: web_sys::SubmitEvent| {
                            ev.prevent_default();
                            actions::save_category(ctx);
                        }
                    >
                        <div class="form-group">
                            <label>"Name *"</label>
                            <input
                                type="text"
                                required
                                prop:value=move || read_form(ctx, |f| f.name.clone())
                                on:input=move |ev| {
                                    let value = event_target_value(&ev);
                                    edit_form(ctx, |f| f.name = value);
                                }
                            />
                        </div>

                        <div class="form-group">
                            <label>"Color"</label>
                            <div class="color-input">
                                <input
                                    type="color"
                                    prop:value=move || read_form(ctx, |f| f.color.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        edit_form(ctx, |f| f.set_color(&value));
                                    }
                                />
                                <input
                                    type="text"
                                    maxlength="7"
                                    prop:value=move || read_form(ctx, |f| f.color_text.clone())
                                    on:input=move |ev| {
                                        let value = event_target_value(&ev);
                                        edit_form(ctx, |f| f.set_color_text(&value));
                                    }
                                />
                            </div>
                        </div>

                        <div class="form-group">
                            <label>"Icon"</label>
                            <div class="icon-picker">
                                {CategoryIcon::ALL
                                    .iter()
                                    .map(|&icon| view! {
                                        <button
                                            type="button"
                                            class=move || if selected_icon.get() == icon { "icon-option active" } else { "icon-option" }
                                            title=icon.as_str()
                                            on:click=move |_| edit_form(ctx, |f| f.icon = icon)
                                        >
                                            {icon.glyph()}
                                        </button>
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="modal-footer">
                            <button type="button" class="btn btn-secondary" on:click=move |_| close()>
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
