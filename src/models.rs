//! Frontend Models
//!
//! Data structures matching the vault backend's JSON.

use serde::{Deserialize, Deserializer, Serialize};

/// Stored credential (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub username: Option<String>,
    pub password: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub category_id: Option<u32>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
    #[serde(default)]
    pub tags: Vec<EntryTag>,
}

/// Tag reference attached to an entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryTag {
    pub id: u32,
    pub name: String,
}

/// Category icon tag. Unknown tags fall back to `Folder`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryIcon {
    Social,
    Bank,
    Email,
    Work,
    Shopping,
    Entertainment,
    Other,
    #[default]
    #[serde(other)]
    Folder,
}

impl CategoryIcon {
    pub const ALL: [CategoryIcon; 8] = [
        CategoryIcon::Social,
        CategoryIcon::Bank,
        CategoryIcon::Email,
        CategoryIcon::Work,
        CategoryIcon::Shopping,
        CategoryIcon::Entertainment,
        CategoryIcon::Other,
        CategoryIcon::Folder,
    ];

    pub fn glyph(self) -> &'static str {
        match self {
            CategoryIcon::Social => "👥",
            CategoryIcon::Bank => "🏦",
            CategoryIcon::Email => "✉️",
            CategoryIcon::Work => "💼",
            CategoryIcon::Shopping => "🛒",
            CategoryIcon::Entertainment => "🎮",
            CategoryIcon::Other => "📁",
            CategoryIcon::Folder => "📂",
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CategoryIcon::Social => "social",
            CategoryIcon::Bank => "bank",
            CategoryIcon::Email => "email",
            CategoryIcon::Work => "work",
            CategoryIcon::Shopping => "shopping",
            CategoryIcon::Entertainment => "entertainment",
            CategoryIcon::Other => "other",
            CategoryIcon::Folder => "folder",
        }
    }
}

/// Category data structure (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub color: String,
    #[serde(default, deserialize_with = "icon_or_default")]
    pub icon: CategoryIcon,
    /// Server-computed number of entries in this category
    #[serde(default)]
    pub count: u32,
}

/// A nullable icon column: `null` means the default icon
fn icon_or_default<'de, D>(deserializer: D) -> Result<CategoryIcon, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<CategoryIcon>::deserialize(deserializer)?.unwrap_or_default())
}

// ========================
// Request Payloads
// ========================

/// Full entry body for create and edit
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryDraft {
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub category_id: Option<u32>,
    pub notes: String,
    pub is_favorite: bool,
    pub tags: Vec<String>,
}

/// Partial entry update; only set fields are sent
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntryPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_favorite: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryDraft {
    pub name: String,
    pub color: String,
    pub icon: CategoryIcon,
}

/// Password generator request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GeneratorOptions {
    pub length: u8,
    pub use_uppercase: bool,
    pub use_lowercase: bool,
    pub use_digits: bool,
    pub use_symbols: bool,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            length: 16,
            use_uppercase: true,
            use_lowercase: true,
            use_digits: true,
            use_symbols: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct GeneratedPassword {
    pub password: String,
    /// Backend's own rating; the UI shows the client-side score instead.
    #[serde(default)]
    pub strength: Option<u8>,
}

// ========================
// Export / Import
// ========================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VaultExport {
    #[serde(default)]
    pub entries: Vec<ExportedEntry>,
    #[serde(default)]
    pub categories: Vec<ExportedCategory>,
    #[serde(default)]
    pub tags: Vec<ExportedTag>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedEntry {
    pub title: String,
    #[serde(default)]
    pub username: Option<String>,
    pub password: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub category_id: Option<u32>,
    #[serde(default)]
    pub is_favorite: bool,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedCategory {
    pub name: String,
    #[serde(default)]
    pub icon: CategoryIcon,
    pub color: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportedTag {
    pub name: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_from_backend_json() {
        let json = r#"{
            "id": 7,
            "title": "Mail",
            "username": null,
            "password": "hunter22",
            "url": "",
            "notes": "",
            "category_id": null,
            "is_favorite": true,
            "created_at": "2024-03-01T08:15:00.123456",
            "updated_at": "2024-03-02T09:00:00",
            "tags": [{"id": 1, "name": "personal"}]
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.id, 7);
        assert!(entry.username.is_none());
        assert!(entry.is_favorite);
        assert_eq!(entry.tags[0].name, "personal");
    }

    #[test]
    fn test_entry_missing_optional_fields() {
        let json = r#"{"id": 1, "title": "Bank", "password": "x"}"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert!(!entry.is_favorite);
        assert!(entry.tags.is_empty());
        assert!(entry.category_id.is_none());
    }

    #[test]
    fn test_unknown_icon_falls_back_to_folder() {
        let json = r##"{"id": 2, "name": "Games", "color": "#ff0000", "icon": "rocket", "count": 3}"##;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.icon, CategoryIcon::Folder);
        assert_eq!(category.count, 3);
    }

    #[test]
    fn test_null_icon_keeps_category_list_decodable() {
        let json = r##"[
            {"id": 1, "name": "Bank", "color": "#10b981", "icon": "bank", "count": 2},
            {"id": 2, "name": "Misc", "color": "#6366f1", "icon": null, "count": 0}
        ]"##;
        let categories: Vec<Category> = serde_json::from_str(json).unwrap();
        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].icon, CategoryIcon::Bank);
        assert_eq!(categories[1].icon, CategoryIcon::Folder);

        let missing: Category = serde_json::from_str(r##"{"id": 3, "name": "X", "color": "#000000"}"##).unwrap();
        assert_eq!(missing.icon, CategoryIcon::Folder);
    }

    #[test]
    fn test_icon_wire_names() {
        for icon in CategoryIcon::ALL {
            let encoded = serde_json::to_string(&icon).unwrap();
            assert_eq!(encoded, format!("\"{}\"", icon.as_str()));
        }
    }

    #[test]
    fn test_patch_only_sends_set_fields() {
        let patch = EntryPatch { is_favorite: Some(true) };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"is_favorite":true}"#);
        assert_eq!(serde_json::to_string(&EntryPatch::default()).unwrap(), "{}");
    }

    #[test]
    fn test_draft_sends_null_category() {
        let draft = EntryDraft {
            title: "t".into(),
            username: String::new(),
            password: "p".into(),
            url: String::new(),
            category_id: None,
            notes: String::new(),
            is_favorite: false,
            tags: vec![],
        };
        let value: serde_json::Value = serde_json::to_value(&draft).unwrap();
        assert!(value["category_id"].is_null());
    }
}
