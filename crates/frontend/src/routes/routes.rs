use crate::layout::center::tabs::Tabs;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::left::Sidebar;
use crate::layout::Shell;
use crate::shared::state::PortalStore;
use leptos::prelude::*;

#[component]
fn MainLayout(store: PortalStore) -> impl IntoView {
    let tabs_store = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Runs once: restores ?active= and keeps it in sync afterwards
    tabs_store.init_router_integration();

    view! {
        <Shell
            left=|| view! { <Sidebar /> }.into_any()
            center=move || view! { <Tabs store=store /> }.into_any()
        />
    }
}

#[component]
pub fn AppRoutes(store: PortalStore) -> impl IntoView {
    view! { <MainLayout store=store /> }
}
