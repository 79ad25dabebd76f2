//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{ApiClient, ApiError};
use crate::config::UiConfig;
use crate::notify::{ToastKind, ToastQueue};
use crate::store::AppStore;

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    pub store: AppStore,
    client: StoredValue<ApiClient>,
    config: StoredValue<UiConfig>,
    /// Trigger to reload entries and categories from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload entries and categories from backend - write
    set_reload_trigger: WriteSignal<u32>,
    pub toasts: RwSignal<ToastQueue>,
}

impl AppContext {
    pub fn new(store: AppStore, config: UiConfig, reload_trigger: (ReadSignal<u32>, WriteSignal<u32>)) -> Self {
        Self {
            store,
            client: StoredValue::new(ApiClient::new(config.api_base.clone())),
            config: StoredValue::new(config),
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            toasts: RwSignal::new(ToastQueue::default()),
        }
    }

    pub fn client(&self) -> ApiClient {
        self.client.get_value()
    }

    pub fn config(&self) -> UiConfig {
        self.config.get_value()
    }

    /// Trigger a full reload of entries and categories
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Show a toast; it fades and disappears on its own
    pub fn notify(&self, kind: ToastKind, message: impl Into<String>) {
        let (visible_ms, fade_ms) = self
            .config
            .with_value(|c| (c.toast_visible_ms, c.toast_fade_ms));
        let toasts = self.toasts;
        let id = toasts.try_update(|q| q.push(kind, message)).unwrap_or_default();

        spawn_local(async move {
            TimeoutFuture::new(visible_ms).await;
            toasts.update(|q| q.begin_leave(id));
            TimeoutFuture::new(fade_ms).await;
            toasts.update(|q| q.dismiss(id));
        });
    }

    pub fn success(&self, message: impl Into<String>) {
        self.notify(ToastKind::Success, message);
    }

    pub fn error(&self, message: impl Into<String>) {
        self.notify(ToastKind::Error, message);
    }

    /// Log an API failure under `tag` and show `message` for it
    pub fn report(&self, tag: &str, message: &str, err: &ApiError) {
        web_sys::console::error_1(&format!("[{}] {}: {}", tag, message, err).into());
        match err {
            ApiError::Network(_) => self.error("Network error"),
            _ => self.error(message),
        }
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}
