use crate::layout::center::tabs::tab::Tab as TabComponent;
use crate::layout::global_context::{AppGlobalContext, Tab as TabData};
use crate::layout::tabs::TabPage;
use crate::shared::state::PortalStore;
use leptos::prelude::*;

/// Tab bar and the pages of the open tabs.
///
/// Pages stay mounted while their tab is open, so a hidden tab keeps its
/// search text and open form.
#[component]
pub fn Tabs(store: PortalStore) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="tabs-container">
            <div class="tabs-bar">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab| {
                        view! { <TabComponent tab=tab /> }
                    }
                />
            </div>
            <div class="tab-content">
                <For
                    each=move || tabs_store.opened.get()
                    key=|tab| tab.key.clone()
                    children=move |tab: TabData| {
                        view! { <TabPage tab=tab tabs_store=tabs_store store=store /> }
                    }
                />
                <Show when=move || tabs_store.opened.with(|tabs| tabs.is_empty())>
                    <div class="tab-content__empty">
                        "Choisissez une liste dans le menu de gauche."
                    </div>
                </Show>
            </div>
        </div>
    }
}
