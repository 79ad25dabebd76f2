//! Strength Meter Component

use leptos::prelude::*;

use crate::strength::{password_strength, strength_bar_classes, StrengthLevel, BAR_COUNT};

/// Five-bar strength indicator for a password being typed
#[component]
pub fn StrengthMeter(password: Signal<String>) -> impl IntoView {
    let score = Memo::new(move |_| password.with(|p| password_strength(p)));

    view! {
        <div class="password-strength">
            <div class="strength-bars">
                {(0..BAR_COUNT)
                    .map(|index| view! { <div class=move || strength_bar_classes(score.get())[index]></div> })
                    .collect_view()}
            </div>
            <span class="strength-label">
                {move || match score.get() {
                    0 => "",
                    s => StrengthLevel::from_score(s).label(),
                }}
            </span>
        </div>
    }
}
