use crate::dashboards::OVERVIEW_TAB_KEY;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::routes::routes::AppRoutes;
use crate::shared::config::PortalConfig;
use crate::shared::notify::{Notifications, ToastHost};
use crate::shared::state::PortalStore;
use crate::shared::storage::SharedStorage;
use crate::shared::theme::{Theme, ThemeProvider};
use leptos::prelude::*;

#[component]
pub fn App(storage: SharedStorage, config: PortalConfig) -> impl IntoView {
    let notifications = Notifications::new(config.ui.toast_timeout_ms);
    provide_context(notifications);

    let tabs_store = AppGlobalContext::new();
    provide_context(tabs_store);

    // Every record list is read once here, before the first page renders
    let store = PortalStore::load(storage.clone(), &config, Some(notifications));
    if config.persistence.debounce_ms > 0 {
        let handle = window_event_listener(leptos::ev::beforeunload, move |_| store.flush_all());
        on_cleanup(move || handle.remove());
    }

    // Start on the overview unless the URL names a tab
    let has_active_in_url = web_sys::window()
        .and_then(|w| w.location().search().ok())
        .and_then(|search| crate::layout::global_context::parse_active(&search))
        .is_some();
    if !has_active_in_url {
        tabs_store.open_tab(OVERVIEW_TAB_KEY, &tab_label_for_key(OVERVIEW_TAB_KEY));
    }

    let default_theme = Theme::parse(&config.ui.default_theme).unwrap_or_default();
    provide_context(config);

    view! {
        <ThemeProvider storage=storage default_theme=default_theme>
            <AppRoutes store=store />
            <ToastHost />
        </ThemeProvider>
    }
}
