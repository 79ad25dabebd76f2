//! Generator Modal Component
//!
//! Server-side password generator layered over the entry editor. Every
//! option change requests a fresh password.

use leptos::prelude::*;

use crate::actions;
use crate::components::StrengthMeter;
use crate::context::{use_app_context, AppContext};
use crate::forms::{GeneratorState, MAX_GENERATED_LENGTH, MIN_GENERATED_LENGTH};
use crate::store::{store_edit_generator, store_use_generated_password, AppStateStoreFields};

fn read_generator<T: Default>(ctx: AppContext, read: impl FnOnce(&GeneratorState) -> T) -> T {
    ctx.store
        .generator()
        .with(|generator| generator.as_ref().map(read))
        .unwrap_or_default()
}

/// Apply an option change and regenerate
fn change_options(ctx: AppContext, change: impl FnOnce(&mut GeneratorState)) {
    store_edit_generator(ctx.store, change);
    actions::generate_password(ctx);
}

#[component]
fn OptionCheckbox(
    #[prop(into)] label: String,
    #[prop(into)] checked: Signal<bool>,
    #[prop(into)] on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <label class="checkbox-label">
            <input
                type="checkbox"
                prop:checked=move || checked.get()
                on:change=move |ev| on_toggle.run(event_target_checked(&ev))
            />
            {label}
        </label>
    }
}

#[component]
pub fn GeneratorModal() -> impl IntoView {
    let ctx = use_app_context();
    let is_open = Memo::new(move |_| ctx.store.generator().with(|generator| generator.is_some()));
    let length = Memo::new(move |_| read_generator(ctx, |g| g.options.length));
    let password = Signal::derive(move || read_generator(ctx, |g| g.password.clone()));

    let close = move || ctx.store.generator().set(None);

    view! {
        <Show when=move || is_open.get()>
            <div class="modal-overlay generator-overlay" on:click=move |_| close()>
                <div class="modal modal-small" on:click=|ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h2>"Password generator"</h2>
                        <button class="btn-icon" on:click=move |_| close()>"×"</button>
                    </div>

                    <div class="modal-body">
                        <div class="generated-password">
                            <input type="text" readonly prop:value=move || password.get() />
                        </div>
                        <StrengthMeter password=password />

                        <div class="form-group">
                            <label>"Length: " {move || length.get()}</label>
                            <input
                                type="range"
                                min=MIN_GENERATED_LENGTH.to_string()
                                max=MAX_GENERATED_LENGTH.to_string()
                                prop:value=move || length.get().to_string()
                                on:input=move |ev| {
                                    if let Ok(value) = event_target_value(&ev).parse::<u8>() {
                                        change_options(ctx, |g| g.set_length(value));
                                    }
                                }
                            />
                        </div>

                        <div class="generator-options">
                            <OptionCheckbox
                                label="Uppercase (A-Z)"
                                checked=Signal::derive(move || read_generator(ctx, |g| g.options.use_uppercase))
                                on_toggle=move |on: bool| change_options(ctx, |g| g.options.use_uppercase = on)
                            />
                            <OptionCheckbox
                                label="Lowercase (a-z)"
                                checked=Signal::derive(move || read_generator(ctx, |g| g.options.use_lowercase))
                                on_toggle=move |on: bool| change_options(ctx, |g| g.options.use_lowercase = on)
                            />
                            <OptionCheckbox
                                label="Digits (0-9)"
                                checked=Signal::derive(move || read_generator(ctx, |g| g.options.use_digits))
                                on_toggle=move |on: bool| change_options(ctx, |g| g.options.use_digits = on)
                            />
                            <OptionCheckbox
                                label="Symbols (!@#$)"
                                checked=Signal::derive(move || read_generator(ctx, |g| g.options.use_symbols))
                                on_toggle=move |on: bool| change_options(ctx, |g| g.options.use_symbols = on)
                            />
                        </div>
                    </div>

                    <div class="modal-footer">
                        <button class="btn btn-secondary" on:click=move |_| actions::generate_password(ctx)>
                            "↻ Regenerate"
                        </button>
                        <button
                            class="btn btn-secondary"
                            on:click=move |_| actions::copy_to_clipboard(ctx, password.get_untracked())
                        >
                            "⧉ Copy"
                        </button>
                        <button
                            class="btn btn-primary"
                            on:click=move |_| store_use_generated_password(ctx.store)
                        >
                            "Use password"
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}
