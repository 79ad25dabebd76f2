//! Theme Preference
//!
//! Dark by default; the light theme is persisted in local storage.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

pub const LIGHT_THEME_CLASS: &str = "light-theme";

impl Theme {
    /// Only an explicit `"light"` selects the light theme.
    pub fn from_stored(value: Option<&str>) -> Self {
        match value {
            Some("light") => Theme::Light,
            _ => Theme::Dark,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    pub fn is_light(self) -> bool {
        self == Theme::Light
    }
}

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

/// Read the saved preference (once, at startup)
pub fn load_theme(key: &str) -> Theme {
    let stored = local_storage().and_then(|storage| storage.get_item(key).ok().flatten());
    Theme::from_stored(stored.as_deref())
}

pub fn save_theme(key: &str, theme: Theme) {
    let Some(storage) = local_storage() else {
        web_sys::console::warn_1(&"[THEME] localStorage unavailable, preference not saved".into());
        return;
    };
    if storage.set_item(key, theme.as_str()).is_err() {
        web_sys::console::warn_1(&"[THEME] Failed to save preference".into());
    }
}

/// Reflect the theme as a class on `<body>`
pub fn apply_theme(theme: Theme) {
    let body = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.body());
    let Some(body) = body else {
        web_sys::console::warn_1(&"[THEME] No document body, theme not applied".into());
        return;
    };
    if let Err(e) = body
        .class_list()
        .toggle_with_force(LIGHT_THEME_CLASS, theme.is_light())
    {
        web_sys::console::warn_1(&format!("[THEME] Failed to apply {} theme: {:?}", theme.as_str(), e).into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_stored() {
        assert_eq!(Theme::from_stored(Some("light")), Theme::Light);
        assert_eq!(Theme::from_stored(Some("dark")), Theme::Dark);
        assert_eq!(Theme::from_stored(Some("LIGHT")), Theme::Dark);
        assert_eq!(Theme::from_stored(None), Theme::Dark);
    }

    #[test]
    fn test_toggle_round_trips_through_storage_value() {
        let light = Theme::Dark.toggled();
        assert_eq!(light, Theme::Light);
        assert_eq!(Theme::from_stored(Some(light.as_str())), Theme::Light);
        assert_eq!(light.toggled(), Theme::Dark);
    }
}
