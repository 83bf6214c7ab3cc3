//! Light/dark theme, persisted in storage under "app-theme".

use crate::shared::icons::icon;
use crate::shared::storage::{KeyValueStorage, SharedStorage};
use leptos::prelude::*;
use web_sys::window;

pub const THEME_STORAGE_KEY: &str = "app-theme";

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Name used for the `data-theme` attribute and in storage
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Theme::Light => "Thème clair",
            Theme::Dark => "Thème sombre",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

/// Stored theme, or `fallback` when nothing valid is stored
pub fn load_theme(storage: &SharedStorage, fallback: Theme) -> Theme {
    match storage.get_item(THEME_STORAGE_KEY) {
        Ok(Some(raw)) => Theme::parse(&raw).unwrap_or(fallback),
        Ok(None) => fallback,
        Err(e) => {
            log::warn!("{}", e);
            fallback
        }
    }
}

fn apply_theme(theme: Theme) {
    if let Some(body) = window().and_then(|w| w.document()).and_then(|d| d.body()) {
        let _ = body.set_attribute("data-theme", theme.as_str());
    }
}

#[derive(Clone, Copy)]
pub struct ThemeContext {
    pub theme: RwSignal<Theme>,
    storage: StoredValue<SharedStorage>,
}

impl ThemeContext {
    /// Set the theme and persist it
    pub fn set_theme(&self, theme: Theme) {
        self.theme.set(theme);
        if let Err(e) = self
            .storage
            .with_value(|storage| storage.set_item(THEME_STORAGE_KEY, theme.as_str()))
        {
            log::warn!("theme not saved: {}", e);
        }
        apply_theme(theme);
    }

    pub fn toggle(&self) {
        self.set_theme(self.theme.get_untracked().toggled());
    }
}

/// Provides the theme context to children components
#[component]
pub fn ThemeProvider(
    storage: SharedStorage,
    default_theme: Theme,
    children: Children,
) -> impl IntoView {
    let initial_theme = load_theme(&storage, default_theme);
    apply_theme(initial_theme);

    provide_context(ThemeContext {
        theme: RwSignal::new(initial_theme),
        storage: StoredValue::new(storage),
    });

    children()
}

pub fn use_theme() -> ThemeContext {
    use_context::<ThemeContext>().expect("ThemeContext not found. Wrap your app with ThemeProvider.")
}

/// Header button switching between light and dark
#[component]
pub fn ThemeToggle() -> impl IntoView {
    let ctx = use_theme();

    view! {
        <button
            class="top-header__icon-btn"
            title=move || ctx.theme.get().toggled().display_name()
            on:click=move |_| ctx.toggle()
        >
            {move || match ctx.theme.get() {
                Theme::Light => icon("moon"),
                Theme::Dark => icon("sun"),
            }}
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::MemoryStorage;
    use std::sync::Arc;

    #[test]
    fn test_parse_and_toggle() {
        assert_eq!(Theme::parse("dark"), Some(Theme::Dark));
        assert_eq!(Theme::parse("forest"), None);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn test_load_theme_from_storage() {
        let memory = MemoryStorage::new();
        let storage: SharedStorage = Arc::new(memory.clone());
        assert_eq!(load_theme(&storage, Theme::Light), Theme::Light);

        memory.set_item(THEME_STORAGE_KEY, "dark").unwrap();
        assert_eq!(load_theme(&storage, Theme::Light), Theme::Dark);

        memory.set_item(THEME_STORAGE_KEY, "neon").unwrap();
        assert_eq!(load_theme(&storage, Theme::Dark), Theme::Dark);
    }
}
