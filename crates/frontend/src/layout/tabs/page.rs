//! TabPage: shows or hides a tab's content and builds it through the registry

use super::registry::render_tab_content;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::shared::state::PortalStore;
use leptos::prelude::*;

/// Wrapper of one open tab.
///
/// The content is built once, when the tab opens, and hidden with the
/// `tabs__item--hidden` class while another tab is active.
#[component]
pub fn TabPage(tab: TabData, tabs_store: AppGlobalContext, store: PortalStore) -> impl IntoView {
    let tab_key = StoredValue::new(tab.key.clone());
    let is_active = move || tab_key.with_value(|k| tabs_store.active.get().as_deref() == Some(k));

    log::debug!("tab page created: '{}'", tab.key);
    on_cleanup(move || {
        if let Some(key) = tab_key.try_get_value() {
            log::debug!("tab page destroyed: '{}'", key);
        }
    });

    let content = render_tab_content(&tab.key, store);

    view! {
        <div
            class="tabs__item"
            class:tabs__item--hidden=move || !is_active()
            data-tab-key=tab.key
        >
            {content}
        </div>
    }
}
