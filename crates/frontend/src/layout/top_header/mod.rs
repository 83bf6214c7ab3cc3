//! TopHeader: application title, sidebar toggle and theme switch.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::PortalConfig;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeToggle;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let title = use_context::<PortalConfig>()
        .map(|config| config.app.title)
        .unwrap_or_default();

    let is_sidebar_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=move |_| ctx.toggle_left()
                    title=move || if is_sidebar_visible() { "Masquer la navigation" } else { "Afficher la navigation" }
                >
                    {icon("menu")}
                </button>
                <span class="top-header__title">{title}</span>
            </div>

            <div class="top-header__actions">
                <ThemeToggle />
            </div>
        </div>
    }
}
