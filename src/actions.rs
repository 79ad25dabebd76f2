//! User Actions
//!
//! Event handlers shared by several components: call the backend, then
//! reload or reconcile the store. Failures become toasts and leave the
//! state as it was.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiError;
use crate::browser;
use crate::context::AppContext;
use crate::filter::EntryFilter;
use crate::models::{EntryPatch, VaultExport};
use crate::search::SearchAction;
use crate::store::{store_close_entry_form, store_edit_generator, store_find_entry, AppStateStoreFields};
use crate::theme;

// ========================
// Loading
// ========================

/// Fetch categories and entries and swap both into the store together.
/// A reload overtaken by a newer one is dropped.
pub async fn load_all(ctx: AppContext) {
    let Some(generation) = ctx.store.try_update(|s| s.begin_reload()) else {
        return;
    };
    let client = ctx.client();
    let categories = match client.list_categories().await {
        Ok(categories) => categories,
        Err(e) => return ctx.report("LOAD", "Failed to load categories", &e),
    };
    let entries = match client.list_entries().await {
        Ok(entries) => entries,
        Err(e) => return ctx.report("LOAD", "Failed to load entries", &e),
    };

    let count = entries.len();
    let applied = ctx
        .store
        .try_update(|s| s.apply_reload(generation, categories, entries))
        .unwrap_or(false);
    if applied {
        web_sys::console::log_1(&format!("[APP] Loaded {} entries", count).into());
    } else {
        web_sys::console::log_1(&format!("[APP] Dropped stale reload #{}", generation).into());
    }
}

// ========================
// Entries
// ========================

pub fn save_entry(ctx: AppContext) {
    let Some(form) = ctx.store.entry_form().get_untracked() else {
        return;
    };
    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(e) => {
            ctx.error(e.to_string());
            return;
        }
    };

    spawn_local(async move {
        let client = ctx.client();
        let result = match form.id {
            Some(id) => client.update_entry(id, &draft).await,
            None => client.create_entry(&draft).await,
        };
        match result {
            Ok(_) => {
                store_close_entry_form(ctx.store);
                ctx.reload();
                ctx.success(if form.is_edit() { "Entry updated" } else { "Entry added" });
            }
            Err(e) => ctx.report("ENTRY", "Failed to save entry", &e),
        }
    });
}

pub fn delete_entry(ctx: AppContext, entry_id: u32) {
    spawn_local(async move {
        match ctx.client().delete_entry(entry_id).await {
            Ok(()) => {
                ctx.store.detail().update(|detail| detail.entry_deleted(entry_id));
                ctx.reload();
                ctx.success("Entry deleted");
            }
            Err(e) => ctx.report("ENTRY", "Failed to delete entry", &e),
        }
    });
}

pub fn toggle_favorite(ctx: AppContext, entry_id: u32) {
    let Some(current) = store_find_entry(ctx.store, entry_id).map(|e| e.is_favorite) else {
        return;
    };
    let patch = EntryPatch {
        is_favorite: Some(!current),
    };

    spawn_local(async move {
        match ctx.client().patch_entry(entry_id, &patch).await {
            Ok(_) => ctx.reload(),
            Err(e) => ctx.report("ENTRY", "Failed to update favorite", &e),
        }
    });
}

// ========================
// Categories
// ========================

pub fn save_category(ctx: AppContext) {
    let Some(form) = ctx.store.category_form().get_untracked() else {
        return;
    };
    let draft = match form.to_draft() {
        Ok(draft) => draft,
        Err(e) => {
            ctx.error(e.to_string());
            return;
        }
    };

    spawn_local(async move {
        let client = ctx.client();
        let result = match form.id {
            Some(id) => client.update_category(id, &draft).await,
            None => client.create_category(&draft).await,
        };
        match result {
            Ok(_) => {
                ctx.store.category_form().set(None);
                ctx.reload();
                ctx.success(if form.is_edit() { "Category updated" } else { "Category added" });
            }
            Err(e) => ctx.report("CATEGORY", "Failed to save category", &e),
        }
    });
}

pub fn delete_category(ctx: AppContext, category_id: u32) {
    spawn_local(async move {
        match ctx.client().delete_category(category_id).await {
            Ok(()) => {
                ctx.store.filter().update(|filter| filter.forget_category(category_id));
                ctx.reload();
                ctx.success("Category deleted");
            }
            Err(e) => ctx.report("CATEGORY", "Failed to delete category", &e),
        }
    });
}

// ========================
// Navigation & Search
// ========================

pub fn select_filter(ctx: AppContext, filter: EntryFilter) {
    let breakpoint = ctx.config().mobile_breakpoint_px;
    let narrow = browser::viewport_width().is_some_and(|w| w <= breakpoint);
    ctx.store.update(|s| {
        let keep_open = s.sidebar_open && !narrow;
        s.set_filter(filter);
        s.sidebar_open = keep_open;
    });
}

pub fn search(ctx: AppContext, input: String) {
    let min_chars = ctx.config().search_min_chars;
    let action = ctx
        .store
        .search()
        .try_update(|search| search.begin(&input, min_chars))
        .unwrap_or(SearchAction::Ignore);

    match action {
        SearchAction::Ignore => {}
        SearchAction::Reload => ctx.reload(),
        SearchAction::Query { generation, query } => spawn_local(async move {
            match ctx.client().search_entries(&query).await {
                Ok(results) => {
                    let count = results.len();
                    let applied = ctx
                        .store
                        .try_update(|s| s.accept_search_results(generation, results))
                        .unwrap_or(false);
                    if applied {
                        web_sys::console::log_1(&format!("[SEARCH] {:?}: {} results", query, count).into());
                    } else {
                        web_sys::console::log_1(&format!("[SEARCH] Dropped stale results for {:?}", query).into());
                    }
                }
                Err(e) => ctx.report("SEARCH", "Search failed", &e),
            }
        }),
    }
}

// ========================
// Generator
// ========================

/// Ask the backend for a password with the generator's current options.
pub fn generate_password(ctx: AppContext) {
    let Some((request, options)) = ctx
        .store
        .generator()
        .try_update(|generator| generator.as_mut().map(|g| g.next_request()))
        .flatten()
    else {
        return;
    };

    spawn_local(async move {
        match ctx.client().generate_password(&options).await {
            Ok(generated) => store_edit_generator(ctx.store, |generator| {
                generator.accept(request, generated.password);
            }),
            Err(e) => ctx.report("GENERATOR", "Failed to generate password", &e),
        }
    });
}

// ========================
// Misc
// ========================

pub fn copy_to_clipboard(ctx: AppContext, text: String) {
    spawn_local(async move {
        match browser::copy_text(&text).await {
            Ok(()) => ctx.success("Copied to clipboard"),
            Err(e) => {
                web_sys::console::error_1(&format!("[CLIPBOARD] {}", e).into());
                ctx.error("Copy failed");
            }
        }
    });
}

pub fn lock_vault(ctx: AppContext) {
    spawn_local(async move {
        match ctx.client().lock_vault().await {
            Ok(()) => {
                if let Err(e) = browser::navigate(&ctx.config().landing_route) {
                    web_sys::console::error_1(&format!("[LOCK] {}", e).into());
                }
            }
            Err(e) => ctx.report("LOCK", "Failed to lock vault", &e),
        }
    });
}

pub fn toggle_theme(ctx: AppContext) {
    let Some(next) = ctx.store.theme().try_update(|theme| {
        *theme = theme.toggled();
        *theme
    }) else {
        return;
    };
    theme::apply_theme(next);
    theme::save_theme(&ctx.config().theme_storage_key, next);
}

pub fn export_vault(ctx: AppContext) {
    spawn_local(async move {
        let export = match ctx.client().export_vault().await {
            Ok(export) => export,
            Err(e) => return ctx.report("EXPORT", "Export failed", &e),
        };
        let written = serde_json::to_string_pretty(&export)
            .map_err(|e| e.to_string())
            .and_then(|json| browser::download_text("vault-export.json", &json, "application/json"));
        match written {
            Ok(()) => ctx.success(format!("Exported {} entries", export.entries.len())),
            Err(e) => {
                web_sys::console::error_1(&format!("[EXPORT] {}", e).into());
                ctx.error("Export failed");
            }
        }
    });
}

/// Validate the chosen file locally, then hand it to the backend.
pub fn import_vault(ctx: AppContext, input: web_sys::HtmlInputElement) {
    spawn_local(async move {
        let selected = browser::read_selected_file(&input).await;
        // re-picking the same file must fire `change` again
        input.set_value("");
        let text = match selected {
            Ok(Some(text)) => text,
            Ok(None) => return,
            Err(e) => {
                web_sys::console::error_1(&format!("[IMPORT] {}", e).into());
                return ctx.error("Could not read file");
            }
        };

        let data: VaultExport = match serde_json::from_str(&text) {
            Ok(data) => data,
            Err(e) => {
                web_sys::console::warn_1(&format!("[IMPORT] Rejected file: {}", e).into());
                return ctx.error("Not a vault export file");
            }
        };

        match ctx.client().import_vault(&data).await {
            Ok(message) => {
                ctx.reload();
                ctx.success(message.unwrap_or_else(|| "Import complete".to_string()));
            }
            Err(ApiError::Status { message: Some(detail), .. }) => {
                ctx.error(format!("Import failed: {}", detail));
            }
            Err(e) => ctx.report("IMPORT", "Import failed", &e),
        }
    });
}
