//! View Models
//!
//! Pure mapping from vault state to what the components render.

use chrono::NaiveDateTime;

use crate::detail::DetailPanel;
use crate::filter::EntryFilter;
use crate::models::{Category, Entry};

pub const PASSWORD_MASK: &str = "••••••••••••";
pub const CARD_URL_LIMIT: usize = 30;
pub const EMPTY_LIST_MESSAGE: &str = "No password entries";
pub const EMPTY_DETAIL_MESSAGE: &str = "Select an entry to see its details";

/// First `limit` characters, with `...` appended when cut
pub fn truncate(text: &str, limit: usize) -> String {
    if text.chars().count() <= limit {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(limit).collect();
    cut.push_str("...");
    cut
}

/// Uppercased first character of a title, empty for an empty title
pub fn initial(title: &str) -> String {
    title
        .chars()
        .next()
        .map(|c| c.to_uppercase().collect())
        .unwrap_or_default()
}

/// `YYYY/MM/DD HH:MM` from the backend's ISO timestamp
pub fn format_timestamp(raw: &str) -> String {
    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .map(|dt| dt.format("%Y/%m/%d %H:%M").to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryBadge {
    pub name: String,
    pub style: String,
}

impl CategoryBadge {
    pub fn for_entry(entry: &Entry, categories: &[Category]) -> Option<Self> {
        let id = entry.category_id?;
        categories.iter().find(|c| c.id == id).map(|category| CategoryBadge {
            name: category.name.clone(),
            style: format!(
                "background-color: {}20; color: {}",
                category.color, category.color
            ),
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryCardView {
    pub id: u32,
    pub initial: String,
    pub title: String,
    pub username: Option<String>,
    pub url: Option<String>,
    pub badge: Option<CategoryBadge>,
    pub is_favorite: bool,
    pub selected: bool,
}

impl EntryCardView {
    pub fn new(entry: &Entry, categories: &[Category], selected_id: Option<u32>) -> Self {
        Self {
            id: entry.id,
            initial: initial(&entry.title),
            title: entry.title.clone(),
            username: non_empty(&entry.username),
            url: non_empty(&entry.url).map(|url| truncate(&url, CARD_URL_LIMIT)),
            badge: CategoryBadge::for_entry(entry, categories),
            is_favorite: entry.is_favorite,
            selected: selected_id == Some(entry.id),
        }
    }

    pub fn class_name(&self) -> &'static str {
        if self.selected {
            "entry-card selected"
        } else {
            "entry-card"
        }
    }

    pub fn favorite_title(&self) -> &'static str {
        if self.is_favorite {
            "Remove from favorites"
        } else {
            "Add to favorites"
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CategoryRowView {
    pub id: u32,
    pub name: String,
    pub glyph: &'static str,
    pub icon_style: String,
    pub count: u32,
    pub active: bool,
}

impl CategoryRowView {
    pub fn new(category: &Category, filter: &EntryFilter) -> Self {
        Self {
            id: category.id,
            name: category.name.clone(),
            glyph: category.icon.glyph(),
            icon_style: format!("background-color: {}", category.color),
            count: category.count,
            active: *filter == EntryFilter::Category(category.id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub id: u32,
    pub title: String,
    pub username: Option<String>,
    /// Masked unless revealed
    pub password_display: String,
    pub password: String,
    pub revealed: bool,
    pub url: Option<String>,
    pub category: Option<CategoryBadge>,
    pub notes: Option<String>,
    pub tags: Vec<String>,
    pub is_favorite: bool,
    pub created: String,
    pub updated: String,
}

impl DetailView {
    pub fn from_panel(panel: &DetailPanel, categories: &[Category]) -> Option<Self> {
        let DetailPanel::Viewing { entry, revealed } = panel else {
            return None;
        };
        Some(Self {
            id: entry.id,
            title: entry.title.clone(),
            username: non_empty(&entry.username),
            password_display: if *revealed {
                entry.password.clone()
            } else {
                PASSWORD_MASK.to_string()
            },
            password: entry.password.clone(),
            revealed: *revealed,
            url: non_empty(&entry.url),
            category: CategoryBadge::for_entry(entry, categories),
            notes: non_empty(&entry.notes),
            tags: entry.tags.iter().map(|t| t.name.clone()).collect(),
            is_favorite: entry.is_favorite,
            created: format_timestamp(&entry.created_at),
            updated: format_timestamp(&entry.updated_at),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::make_entry;
    use crate::models::CategoryIcon;

    fn make_category(id: u32, color: &str) -> Category {
        Category {
            id,
            name: format!("Cat {}", id),
            color: color.to_string(),
            icon: CategoryIcon::Bank,
            count: 1,
        }
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 30), "short");
        let long = "https://accounts.example.com/login/very/long";
        assert_eq!(truncate(long, 30), format!("{}...", &long[..30]));
        assert_eq!(truncate("ééé", 2), "éé...");
    }

    #[test]
    fn test_initial() {
        assert_eq!(initial("github"), "G");
        assert_eq!(initial("ärzte"), "Ä");
        assert_eq!(initial(""), "");
    }

    #[test]
    fn test_format_timestamp() {
        assert_eq!(format_timestamp("2024-03-01T08:15:42.123456"), "2024/03/01 08:15");
        assert_eq!(format_timestamp("2024-03-01T08:15:42"), "2024/03/01 08:15");
        assert_eq!(format_timestamp("yesterday"), "yesterday");
    }

    #[test]
    fn test_card_badge_and_selection() {
        let categories = vec![make_category(2, "#10b981")];
        let entry = make_entry(1, true, Some(2));
        let card = EntryCardView::new(&entry, &categories, Some(1));
        assert!(card.selected);
        assert_eq!(card.class_name(), "entry-card selected");
        let badge = card.badge.unwrap();
        assert_eq!(badge.name, "Cat 2");
        assert_eq!(badge.style, "background-color: #10b98120; color: #10b981");
    }

    #[test]
    fn test_dangling_category_omits_badge() {
        let entry = make_entry(1, false, Some(99));
        let card = EntryCardView::new(&entry, &[make_category(2, "#000000")], None);
        assert!(card.badge.is_none());
        assert!(!card.selected);
    }

    #[test]
    fn test_empty_optional_fields_hidden() {
        let mut entry = make_entry(1, false, None);
        entry.username = Some(String::new());
        entry.url = Some(String::new());
        let card = EntryCardView::new(&entry, &[], None);
        assert!(card.username.is_none());
        assert!(card.url.is_none());
    }

    #[test]
    fn test_detail_masks_until_revealed() {
        assert!(DetailView::from_panel(&DetailPanel::Empty, &[]).is_none());

        let mut panel = DetailPanel::Empty;
        panel.select(make_entry(5, false, None));
        let view = DetailView::from_panel(&panel, &[]).unwrap();
        assert_eq!(view.password_display, PASSWORD_MASK);
        assert_eq!(view.created, "2024/01/01 00:00");

        panel.toggle_reveal();
        let view = DetailView::from_panel(&panel, &[]).unwrap();
        assert_eq!(view.password_display, "secret-5");
    }

    #[test]
    fn test_category_row_active() {
        let category = make_category(3, "#8b5cf6");
        let row = CategoryRowView::new(&category, &EntryFilter::Category(3));
        assert!(row.active);
        assert_eq!(row.glyph, "🏦");
        assert!(!CategoryRowView::new(&category, &EntryFilter::All).active);
    }
}
