//! Detail Panel State
//!
//! The right-hand panel either shows nothing or one entry, with its
//! password masked or revealed.

use crate::models::Entry;

#[derive(Debug, Clone, Default, PartialEq)]
pub enum DetailPanel {
    #[default]
    Empty,
    Viewing { entry: Entry, revealed: bool },
}

impl DetailPanel {
    pub fn entry(&self) -> Option<&Entry> {
        match self {
            DetailPanel::Empty => None,
            DetailPanel::Viewing { entry, .. } => Some(entry),
        }
    }

    pub fn entry_id(&self) -> Option<u32> {
        self.entry().map(|e| e.id)
    }

    pub fn is_revealed(&self) -> bool {
        matches!(self, DetailPanel::Viewing { revealed: true, .. })
    }

    /// Show `entry`, password hidden
    pub fn select(&mut self, entry: Entry) {
        *self = DetailPanel::Viewing { entry, revealed: false };
    }

    pub fn toggle_reveal(&mut self) {
        if let DetailPanel::Viewing { revealed, .. } = self {
            *revealed = !*revealed;
        }
    }

    pub fn close(&mut self) {
        *self = DetailPanel::Empty;
    }

    pub fn entry_deleted(&mut self, entry_id: u32) {
        if self.entry_id() == Some(entry_id) {
            self.close();
        }
    }

    /// Refresh the viewed entry from a freshly loaded collection.
    pub fn reconcile(&mut self, entries: &[Entry]) {
        let Some(id) = self.entry_id() else {
            return;
        };
        match entries.iter().find(|e| e.id == id) {
            Some(fresh) => {
                if let DetailPanel::Viewing { entry, .. } = self {
                    *entry = fresh.clone();
                }
            }
            None => self.close(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::make_entry;

    #[test]
    fn test_select_starts_hidden() {
        let mut panel = DetailPanel::default();
        panel.select(make_entry(1, false, None));
        assert_eq!(panel.entry_id(), Some(1));
        assert!(!panel.is_revealed());
    }

    #[test]
    fn test_switching_entries_hides_password() {
        let mut panel = DetailPanel::default();
        panel.select(make_entry(1, false, None));
        panel.toggle_reveal();
        assert!(panel.is_revealed());
        panel.select(make_entry(2, false, None));
        assert!(!panel.is_revealed());
    }

    #[test]
    fn test_toggle_on_empty_is_noop() {
        let mut panel = DetailPanel::Empty;
        panel.toggle_reveal();
        assert_eq!(panel, DetailPanel::Empty);
    }

    #[test]
    fn test_close_and_delete() {
        let mut panel = DetailPanel::default();
        panel.select(make_entry(3, false, None));
        panel.entry_deleted(4);
        assert_eq!(panel.entry_id(), Some(3));
        panel.entry_deleted(3);
        assert_eq!(panel, DetailPanel::Empty);

        panel.select(make_entry(3, false, None));
        panel.close();
        assert_eq!(panel, DetailPanel::Empty);
    }

    #[test]
    fn test_reconcile_refreshes_and_keeps_reveal() {
        let mut panel = DetailPanel::default();
        panel.select(make_entry(1, false, None));
        panel.toggle_reveal();

        panel.reconcile(&[make_entry(1, true, None)]);
        assert!(panel.entry().unwrap().is_favorite);
        assert!(panel.is_revealed());

        panel.reconcile(&[make_entry(2, false, None)]);
        assert_eq!(panel, DetailPanel::Empty);
    }
}
