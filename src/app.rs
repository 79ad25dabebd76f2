//! Vault Frontend App
//!
//! Main application component: sidebar, entry grid and detail panel, with
//! the modals and toasts layered on top.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{
    CategoryModal, DetailPanel, EntryGrid, EntryModal, GeneratorModal, Sidebar, ToastStack, TopBar,
};
use crate::config::UiConfig;
use crate::context::AppContext;
use crate::store::AppState;
use crate::theme;

#[component]
pub fn App() -> impl IntoView {
    let config = UiConfig::from_document();
    let saved_theme = theme::load_theme(&config.theme_storage_key);
    theme::apply_theme(saved_theme);

    let store = Store::new(AppState::new(saved_theme));
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    // Provide context to all children
    let ctx = AppContext::new(store, config, (reload_trigger, set_reload_trigger));
    provide_context(ctx);

    // Load categories and entries on mount and whenever the trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Reloading vault, trigger={}", trigger).into());
        spawn_local(actions::load_all(ctx));
    });

    view! {
        <div class="app-container">
            <Sidebar />

            <main class="main-content">
                <TopBar />
                <EntryGrid />
            </main>

            <DetailPanel />
        </div>

        <EntryModal />
        <GeneratorModal />
        <CategoryModal />
        <ToastStack />
    }
}
