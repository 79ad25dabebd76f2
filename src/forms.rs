//! Editor Forms
//!
//! Field state for the entry, category and generator modals, and their
//! conversion into request payloads.

use thiserror::Error;

use crate::models::{Category, CategoryDraft, CategoryIcon, Entry, EntryDraft, GeneratorOptions};

pub const DEFAULT_CATEGORY_COLOR: &str = "#6366f1";

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Title is required")]
    MissingTitle,
    #[error("Password is required")]
    MissingPassword,
    #[error("Category name is required")]
    MissingName,
    #[error("Color must look like #RRGGBB")]
    InvalidColor,
}

/// `#RRGGBB`, hex digits in either case
pub fn is_hex_color(text: &str) -> bool {
    let Some(digits) = text.strip_prefix('#') else {
        return false;
    };
    digits.len() == 6 && digits.chars().all(|c| c.is_ascii_hexdigit())
}

/// Split comma-separated tag input, dropping blanks and repeats.
pub fn parse_tags(input: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in input.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        if !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

// ========================
// Entry Editor
// ========================

#[derive(Debug, Clone, Default, PartialEq)]
pub struct EntryForm {
    /// None while creating
    pub id: Option<u32>,
    pub title: String,
    pub username: String,
    pub password: String,
    pub url: String,
    pub category_id: Option<u32>,
    pub notes: String,
    pub tags: String,
    /// Favorite flag carried through an edit untouched
    pub is_favorite: bool,
    pub password_visible: bool,
}

impl EntryForm {
    pub fn from_entry(entry: &Entry) -> Self {
        Self {
            id: Some(entry.id),
            title: entry.title.clone(),
            username: entry.username.clone().unwrap_or_default(),
            password: entry.password.clone(),
            url: entry.url.clone().unwrap_or_default(),
            category_id: entry.category_id,
            notes: entry.notes.clone().unwrap_or_default(),
            tags: entry
                .tags
                .iter()
                .map(|t| t.name.as_str())
                .collect::<Vec<_>>()
                .join(", "),
            is_favorite: entry.is_favorite,
            password_visible: false,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Take a generated password; an empty one leaves the field alone
    pub fn fill_generated_password(&mut self, password: String) {
        if !password.is_empty() {
            self.password = password;
        }
    }

    /// Category select value: empty string for "no category"
    pub fn set_category_value(&mut self, value: &str) {
        self.category_id = value.parse().ok();
    }

    pub fn to_draft(&self) -> Result<EntryDraft, FormError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(FormError::MissingTitle);
        }
        if self.password.is_empty() {
            return Err(FormError::MissingPassword);
        }
        Ok(EntryDraft {
            title: title.to_string(),
            username: self.username.trim().to_string(),
            password: self.password.clone(),
            url: self.url.trim().to_string(),
            category_id: self.category_id,
            notes: self.notes.clone(),
            is_favorite: self.is_favorite,
            tags: parse_tags(&self.tags),
        })
    }
}

// ========================
// Category Editor
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryForm {
    pub id: Option<u32>,
    pub name: String,
    /// Value bound to the color picker
    pub color: String,
    /// Free-text mirror of the color
    pub color_text: String,
    pub icon: CategoryIcon,
}

impl Default for CategoryForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            color: DEFAULT_CATEGORY_COLOR.to_string(),
            color_text: DEFAULT_CATEGORY_COLOR.to_string(),
            icon: CategoryIcon::Folder,
        }
    }
}

impl CategoryForm {
    pub fn from_category(category: &Category) -> Self {
        Self {
            id: Some(category.id),
            name: category.name.clone(),
            color: category.color.clone(),
            color_text: category.color.clone(),
            icon: category.icon,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Picker changed: both fields follow.
    pub fn set_color(&mut self, color: &str) {
        self.color = color.to_string();
        self.color_text = color.to_string();
    }

    /// Text field changed: the picker follows only on a complete hex color.
    pub fn set_color_text(&mut self, text: &str) {
        self.color_text = text.to_string();
        if is_hex_color(text) {
            self.color = text.to_string();
        }
    }

    pub fn to_draft(&self) -> Result<CategoryDraft, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::MissingName);
        }
        if !is_hex_color(&self.color) {
            return Err(FormError::InvalidColor);
        }
        Ok(CategoryDraft {
            name: name.to_string(),
            color: self.color.clone(),
            icon: self.icon,
        })
    }
}

// ========================
// Password Generator
// ========================

pub const MIN_GENERATED_LENGTH: u8 = 4;
pub const MAX_GENERATED_LENGTH: u8 = 64;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorState {
    pub options: GeneratorOptions,
    /// Last password received from the backend
    pub password: String,
    /// Bumped per request so a slow response cannot overwrite a newer one
    pub request: u64,
}

impl GeneratorState {
    pub fn new(options: GeneratorOptions) -> Self {
        Self {
            options,
            ..Default::default()
        }
    }

    pub fn set_length(&mut self, length: u8) {
        self.options.length = length.clamp(MIN_GENERATED_LENGTH, MAX_GENERATED_LENGTH);
    }

    pub fn next_request(&mut self) -> (u64, GeneratorOptions) {
        self.request += 1;
        (self.request, self.options)
    }

    pub fn accept(&mut self, request: u64, password: String) -> bool {
        if request != self.request {
            return false;
        }
        self.password = password;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::tests::make_entry;
    use crate::models::EntryTag;

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#6366f1"));
        assert!(is_hex_color("#ABCDEF"));
        assert!(!is_hex_color("6366f1"));
        assert!(!is_hex_color("#6366f"));
        assert!(!is_hex_color("#6366f1a"));
        assert!(!is_hex_color("#ggggggg"));
    }

    #[test]
    fn test_parse_tags() {
        assert_eq!(parse_tags(" work, , home,work ,"), vec!["work", "home"]);
        assert!(parse_tags("").is_empty());
    }

    #[test]
    fn test_entry_form_requires_title_and_password() {
        let mut form = EntryForm::default();
        assert_eq!(form.to_draft(), Err(FormError::MissingTitle));
        form.title = "  Bank ".into();
        assert_eq!(form.to_draft(), Err(FormError::MissingPassword));
        form.password = " pw ".into();
        let draft = form.to_draft().unwrap();
        assert_eq!(draft.title, "Bank");
        // passwords are never trimmed
        assert_eq!(draft.password, " pw ");
    }

    #[test]
    fn test_edit_preserves_favorite() {
        let mut entry = make_entry(4, true, Some(2));
        entry.tags = vec![
            EntryTag { id: 1, name: "a".into() },
            EntryTag { id: 2, name: "b".into() },
        ];
        let form = EntryForm::from_entry(&entry);
        assert!(form.is_edit());
        assert_eq!(form.tags, "a, b");

        let draft = form.to_draft().unwrap();
        assert!(draft.is_favorite);
        assert_eq!(draft.category_id, Some(2));
        assert_eq!(draft.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_category_select_value() {
        let mut form = EntryForm::default();
        form.set_category_value("3");
        assert_eq!(form.category_id, Some(3));
        form.set_category_value("");
        assert_eq!(form.category_id, None);
    }

    #[test]
    fn test_color_text_sync() {
        let mut form = CategoryForm::default();
        form.set_color_text("#12");
        assert_eq!(form.color, DEFAULT_CATEGORY_COLOR);
        form.set_color_text("#123abc");
        assert_eq!(form.color, "#123abc");
        form.set_color("#000000");
        assert_eq!(form.color_text, "#000000");
    }

    #[test]
    fn test_category_editor_prefill() {
        let category = Category {
            id: 20,
            name: "Work".into(),
            color: "#8b5cf6".into(),
            icon: CategoryIcon::Work,
            count: 4,
        };
        let form = CategoryForm::from_category(&category);
        assert!(form.is_edit());
        assert_eq!(form.name, "Work");
        assert_eq!(form.color_text, "#8b5cf6");
        assert_eq!(form.icon, CategoryIcon::Work);
        assert!(!CategoryForm::default().is_edit());
    }

    #[test]
    fn test_category_draft_validation() {
        let mut form = CategoryForm::default();
        assert_eq!(form.to_draft(), Err(FormError::MissingName));
        form.name = "Games".into();
        form.color = "red".into();
        assert_eq!(form.to_draft(), Err(FormError::InvalidColor));
        form.set_color("#ff0000");
        assert_eq!(form.to_draft().unwrap().icon, CategoryIcon::Folder);
    }

    #[test]
    fn test_generator_requests() {
        let mut generator = GeneratorState::new(GeneratorOptions::default());
        generator.set_length(200);
        assert_eq!(generator.options.length, MAX_GENERATED_LENGTH);
        generator.set_length(1);
        assert_eq!(generator.options.length, MIN_GENERATED_LENGTH);

        let (first, _) = generator.next_request();
        let (second, _) = generator.next_request();
        assert!(generator.accept(second, "new".into()));
        assert!(!generator.accept(first, "old".into()));
        assert_eq!(generator.password, "new");
    }
}
