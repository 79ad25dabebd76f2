//! Toast Stack Component

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::notify::ToastKind;

#[component]
pub fn ToastStack() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="toast-stack">
            <For
                each=move || ctx.toasts.get().toasts
                key=|toast| (toast.id, toast.leaving)
                children=move |toast| {
                    let icon = match toast.kind {
                        ToastKind::Success => "✓",
                        ToastKind::Error => "!",
                    };
                    let class = toast.class_name();
                    view! {
                        <div class=class>
                            <span class="toast-icon">{icon}</span>
                            <span>{toast.message}</span>
                        </div>
                    }
                }
            />
        </div>
    }
}
