//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Components read
//! single fields through the generated `AppStateStoreFields` accessors.
//! Transitions spanning several fields are methods on `AppState` so they can
//! be exercised without a DOM.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::detail::DetailPanel;
use crate::filter::{filter_entries, EntryFilter};
use crate::forms::{CategoryForm, EntryForm, GeneratorState};
use crate::models::{Category, Entry};
use crate::search::SearchState;
use crate::theme::Theme;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full entry collection from the last reload
    pub entries: Vec<Entry>,
    pub categories: Vec<Category>,
    pub filter: EntryFilter,
    pub search: SearchState,
    pub detail: DetailPanel,
    /// Open entry editor, if any
    pub entry_form: Option<EntryForm>,
    /// Open generator, layered over the entry editor
    pub generator: Option<GeneratorState>,
    pub category_form: Option<CategoryForm>,
    pub theme: Theme,
    /// Mobile sidebar drawer
    pub sidebar_open: bool,
    /// Bumped per reload request; only the latest reply is applied
    reload_generation: u64,
}

impl AppState {
    pub fn new(theme: Theme) -> Self {
        Self {
            theme,
            ..Default::default()
        }
    }

    // ========================
    // Reload Reconciliation
    // ========================

    /// Called when a reload is sent. Ends any search override and makes
    /// searches sent before this point stale.
    pub fn begin_reload(&mut self) -> u64 {
        self.search.invalidate();
        self.reload_generation += 1;
        self.reload_generation
    }

    /// Swap in both collections from reload `generation`. Returns false when
    /// a newer reload has been sent since.
    pub fn apply_reload(&mut self, generation: u64, categories: Vec<Category>, entries: Vec<Entry>) -> bool {
        if generation != self.reload_generation {
            return false;
        }
        self.categories = categories;
        self.detail.reconcile(&entries);
        self.entries = entries;
        true
    }

    // ========================
    // Filter & Search
    // ========================

    /// Sidebar selection; leaves search mode
    pub fn set_filter(&mut self, filter: EntryFilter) {
        self.filter = filter;
        self.search.clear();
        self.sidebar_open = false;
    }

    /// Apply results if still current; the filter resets to `all`.
    pub fn accept_search_results(&mut self, generation: u64, results: Vec<Entry>) -> bool {
        let accepted = self.search.accept(generation, results);
        if accepted {
            self.filter = EntryFilter::All;
        }
        accepted
    }
}

/// What the entry grid shows: search results while searching,
/// otherwise the filtered collection
pub fn visible_entries<'a>(entries: &'a [Entry], filter: &EntryFilter, search: &'a SearchState) -> Vec<&'a Entry> {
    match &search.results {
        Some(results) => results.iter().collect(),
        None => filter_entries(entries, filter),
    }
}

/// Look an entry up in the collection, then in the search results
pub fn find_entry<'a>(entries: &'a [Entry], search: &'a SearchState, entry_id: u32) -> Option<&'a Entry> {
    entries
        .iter()
        .chain(search.results.iter().flatten())
        .find(|e| e.id == entry_id)
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_find_entry(store: AppStore, entry_id: u32) -> Option<Entry> {
    store.entries().with_untracked(|entries| {
        store
            .search()
            .with_untracked(|search| find_entry(entries, search, entry_id).cloned())
    })
}

/// Show an entry in the detail panel, password hidden
pub fn store_select_entry(store: AppStore, entry_id: u32) {
    if let Some(entry) = store_find_entry(store, entry_id) {
        store.detail().update(|detail| detail.select(entry));
    }
}

pub fn store_open_entry_editor(store: AppStore, entry_id: u32) {
    if let Some(entry) = store_find_entry(store, entry_id) {
        store.entry_form().set(Some(EntryForm::from_entry(&entry)));
    }
}

pub fn store_close_entry_form(store: AppStore) {
    store.generator().set(None);
    store.entry_form().set(None);
}

/// Edit the open entry form; only `entry_form` subscribers rerun
pub fn store_edit_entry_form(store: AppStore, edit: impl FnOnce(&mut EntryForm)) {
    store.entry_form().update(|form| {
        if let Some(form) = form {
            edit(form);
        }
    });
}

pub fn store_edit_generator(store: AppStore, edit: impl FnOnce(&mut GeneratorState)) {
    store.generator().update(|generator| {
        if let Some(generator) = generator {
            edit(generator);
        }
    });
}

/// Close the generator and move its password into the entry editor
pub fn store_use_generated_password(store: AppStore) {
    let Some(generator) = store.generator().try_update(Option::take).flatten() else {
        return;
    };
    store_edit_entry_form(store, |form| form.fill_generated_password(generator.password));
}

pub fn store_open_category_editor(store: AppStore, category_id: u32) {
    let form = store.categories().with_untracked(|categories| {
        categories
            .iter()
            .find(|c| c.id == category_id)
            .map(CategoryForm::from_category)
    });
    if form.is_some() {
        store.category_form().set(form);
    }
}

pub fn store_edit_category_form(store: AppStore, edit: impl FnOnce(&mut CategoryForm)) {
    store.category_form().update(|form| {
        if let Some(form) = form {
            edit(form);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::make_entry;
    use crate::models::{CategoryIcon, GeneratorOptions};
    use crate::search::SearchAction;

    fn ids(entries: Vec<&Entry>) -> Vec<u32> {
        entries.into_iter().map(|e| e.id).collect()
    }

    fn shown(state: &AppState) -> Vec<u32> {
        ids(visible_entries(&state.entries, &state.filter, &state.search))
    }

    fn categories() -> Vec<Category> {
        vec![
            Category { id: 10, name: "Bank".into(), color: "#10b981".into(), icon: CategoryIcon::Bank, count: 1 },
            Category { id: 20, name: "Work".into(), color: "#8b5cf6".into(), icon: CategoryIcon::Work, count: 1 },
        ]
    }

    fn reload(state: &mut AppState, entries: Vec<Entry>) {
        let generation = state.begin_reload();
        assert!(state.apply_reload(generation, categories(), entries));
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        reload(
            &mut state,
            vec![
                make_entry(1, true, Some(10)),
                make_entry(2, false, Some(20)),
                make_entry(3, true, None),
            ],
        );
        state
    }

    #[test]
    fn test_favorites_filter() {
        let mut state = loaded_state();
        state.set_filter(EntryFilter::Favorites);
        assert_eq!(shown(&state), vec![1, 3]);
    }

    #[test]
    fn test_search_lifecycle() {
        let mut state = loaded_state();
        state.set_filter(EntryFilter::Favorites);

        // one character changes nothing
        let before = shown(&state);
        assert_eq!(state.search.begin("w", 2), SearchAction::Ignore);
        assert_eq!(shown(&state), before);
        assert_eq!(state.filter, EntryFilter::Favorites);

        // two characters: server results replace the list, filter ignored
        let SearchAction::Query { generation, query } = state.search.begin("wo", 2) else {
            panic!("expected a query");
        };
        assert_eq!(query, "wo");
        assert!(state.accept_search_results(generation, vec![make_entry(2, false, Some(20))]));
        assert_eq!(shown(&state), vec![2]);
        assert_eq!(state.filter, EntryFilter::All);

        // empty query asks for a reload
        assert_eq!(state.search.begin("", 2), SearchAction::Reload);
        assert_eq!(shown(&state), vec![1, 2, 3]);
    }

    #[test]
    fn test_selecting_filter_leaves_search() {
        let mut state = loaded_state();
        let SearchAction::Query { generation, .. } = state.search.begin("bank", 2) else {
            panic!("expected a query");
        };
        state.accept_search_results(generation, vec![]);
        state.set_filter(EntryFilter::Category(10));
        assert!(state.search.input.is_empty());
        assert_eq!(shown(&state), vec![1]);
    }

    #[test]
    fn test_reload_sent_after_search_discards_it() {
        let mut state = loaded_state();
        let SearchAction::Query { generation, .. } = state.search.begin("bank", 2) else {
            panic!("expected a query");
        };
        let reload_generation = state.begin_reload();
        assert!(state.apply_reload(reload_generation, categories(), vec![make_entry(1, true, None)]));
        assert!(!state.accept_search_results(generation, vec![make_entry(9, false, None)]));
        assert_eq!(shown(&state), vec![1]);
    }

    #[test]
    fn test_reload_sent_before_search_keeps_its_results() {
        let mut state = loaded_state();
        let reload_generation = state.begin_reload();

        // user types while the reload is in flight
        let SearchAction::Query { generation, .. } = state.search.begin("gm", 2) else {
            panic!("expected a query");
        };

        // the earlier reload lands first
        assert!(state.apply_reload(
            reload_generation,
            categories(),
            vec![make_entry(1, true, None), make_entry(2, false, None)],
        ));
        assert!(state.accept_search_results(generation, vec![make_entry(2, false, None)]));
        assert_eq!(state.search.input, "gm");
        assert_eq!(shown(&state), vec![2]);

        // and in the other order
        let reload_generation = state.begin_reload();
        let SearchAction::Query { generation, .. } = state.search.begin("gma", 2) else {
            panic!("expected a query");
        };
        assert!(state.accept_search_results(generation, vec![make_entry(1, true, None)]));
        assert!(state.apply_reload(reload_generation, categories(), vec![make_entry(1, true, None)]));
        assert_eq!(shown(&state), vec![1]);
        assert!(state.search.is_active());
    }

    #[test]
    fn test_overlapping_reloads_apply_latest_only() {
        let mut state = loaded_state();
        let older = state.begin_reload();
        let newer = state.begin_reload();

        assert!(state.apply_reload(newer, Vec::new(), vec![make_entry(7, false, None)]));
        assert!(!state.apply_reload(older, categories(), vec![make_entry(8, false, None)]));
        assert_eq!(shown(&state), vec![7]);
        assert!(state.categories.is_empty());
    }

    #[test]
    fn test_detail_follows_reload_and_delete() {
        let mut state = loaded_state();
        let entry = find_entry(&state.entries, &state.search, 2).cloned().unwrap();
        state.detail.select(entry);

        reload(&mut state, vec![make_entry(1, true, None), make_entry(2, true, None)]);
        assert!(state.detail.entry().unwrap().is_favorite);

        state.detail.entry_deleted(2);
        assert_eq!(state.detail, DetailPanel::Empty);
    }

    #[test]
    fn test_find_entry_looks_in_search_results() {
        let mut state = loaded_state();
        let SearchAction::Query { generation, .. } = state.search.begin("new", 2) else {
            panic!("expected a query");
        };
        state.accept_search_results(generation, vec![make_entry(42, false, None)]);
        assert_eq!(find_entry(&state.entries, &state.search, 42).map(|e| e.id), Some(42));
        assert_eq!(find_entry(&state.entries, &state.search, 3).map(|e| e.id), Some(3));
        assert!(find_entry(&state.entries, &state.search, 99).is_none());
    }

    #[test]
    fn test_generated_password_fills_entry_form() {
        let mut form = EntryForm::from_entry(&make_entry(1, true, None));
        let mut generator = GeneratorState::new(GeneratorOptions::default());
        let (request, _) = generator.next_request();
        generator.accept(request, "Gen3rated!Pass".into());

        form.fill_generated_password(generator.password);
        assert_eq!(form.password, "Gen3rated!Pass");

        // nothing generated yet
        form.fill_generated_password(String::new());
        assert_eq!(form.password, "Gen3rated!Pass");
    }
}
