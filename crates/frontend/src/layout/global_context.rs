use crate::layout::tabs::tab_label_for_key;
use leptos::prelude::Effect;
use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Open tabs, the active one and the sidebar state
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub opened: RwSignal<Vec<Tab>>,
    pub active: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Active tab key from a location query string (`?active=a004_member`)
pub fn parse_active(search: &str) -> Option<String> {
    let params: HashMap<String, String> =
        serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
    params.get("active").filter(|key| !key.is_empty()).cloned()
}

/// Query string selecting a tab
pub fn active_query(key: &str) -> String {
    let query = serde_qs::to_string(&HashMap::from([("active", key)])).unwrap_or_default();
    format!("?{}", query)
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            opened: RwSignal::new(vec![]),
            active: RwSignal::new(None),
            left_open: RwSignal::new(true),
        }
    }

    /// Restore the tab named in the URL, then keep the URL in sync with
    /// the active tab.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        if let Some(active_key) = parse_active(&search) {
            self.open_tab(&active_key, &tab_label_for_key(&active_key));
        }

        let this = *self;
        Effect::new(move |_| {
            let Some(active_key) = this.active.get() else {
                return;
            };
            let new_url = active_query(&active_key);
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            if current_search != new_url {
                if let Some(history) = window().and_then(|w| w.history().ok()) {
                    if let Err(e) = history.replace_state_with_url(
                        &wasm_bindgen::JsValue::NULL,
                        "",
                        Some(&new_url),
                    ) {
                        log::warn!("cannot update URL: {:?}", e);
                    }
                }
            }
        });
    }

    pub fn open_tab(&self, key: &str, title: &str) {
        let exists = self
            .opened
            .with_untracked(|tabs| tabs.iter().any(|tab| tab.key == key));
        if !exists {
            log::debug!("open tab '{}'", key);
            self.opened.update(|tabs| {
                tabs.push(Tab {
                    key: key.to_string(),
                    title: title.to_string(),
                })
            });
        }
        self.activate_tab(key);
    }

    pub fn activate_tab(&self, key: &str) {
        self.active.set(Some(key.to_string()));
    }

    /// Close a tab; when it was active, the last remaining tab becomes active
    pub fn close_tab(&self, key: &str) {
        log::debug!("close tab '{}'", key);
        self.opened.update(|tabs| tabs.retain(|tab| tab.key != key));
        if self
            .active
            .with_untracked(|active| active.as_deref() == Some(key))
        {
            let next_active = self
                .opened
                .with_untracked(|tabs| tabs.last().map(|t| t.key.clone()));
            self.active.set(next_active);
        }
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub key: String,
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_query_round_trip() {
        assert_eq!(active_query("a004_member"), "?active=a004_member");
        assert_eq!(parse_active("?active=a004_member").as_deref(), Some("a004_member"));
        assert_eq!(parse_active(""), None);
        assert_eq!(parse_active("?active="), None);
        assert_eq!(parse_active("?other=1"), None);
    }

    #[test]
    fn test_tabs_open_close() {
        let ctx = AppGlobalContext::new();
        ctx.open_tab("d400_overview", "Vue d'ensemble");
        ctx.open_tab("a004_member", "Membres");
        ctx.open_tab("d400_overview", "Vue d'ensemble");
        assert_eq!(ctx.opened.get_untracked().len(), 2);
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("d400_overview"));

        ctx.close_tab("d400_overview");
        assert_eq!(ctx.active.get_untracked().as_deref(), Some("a004_member"));
        ctx.close_tab("a004_member");
        assert_eq!(ctx.active.get_untracked(), None);
    }
}
