//! Sidebar: overview link plus one collapsible group per department

use crate::dashboards::OVERVIEW_TAB_KEY;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use contracts::domain::common::{Department, RecordKind};
use leptos::prelude::*;
use std::collections::HashSet;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<MenuItem>,
}

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    key: String,
    label: &'static str,
    icon: &'static str,
}

fn get_menu_groups() -> Vec<MenuGroup> {
    Department::all()
        .into_iter()
        .map(|department| MenuGroup {
            id: department.code(),
            label: department.label(),
            icon: department.icon(),
            items: RecordKind::of_department(department)
                .into_iter()
                .map(|kind| MenuItem {
                    key: kind.full_name(),
                    label: kind.list_name(),
                    icon: kind.metadata().ui.icon,
                })
                .collect(),
        })
        .collect()
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    // Group of the tab restored from the URL starts expanded
    let initially_expanded: HashSet<&'static str> = ctx
        .active
        .get_untracked()
        .and_then(|key| RecordKind::from_full_name(&key))
        .map(|kind| kind.department().code())
        .into_iter()
        .collect();
    let expanded_groups = RwSignal::new(initially_expanded);

    let is_active = move |key: &str| ctx.active.with(|a| a.as_deref() == Some(key));

    view! {
        <div class="app-sidebar__content">
            <div
                class="app-sidebar__item"
                class:app-sidebar__item--active=move || is_active(OVERVIEW_TAB_KEY)
                on:click=move |_| ctx.open_tab(OVERVIEW_TAB_KEY, &tab_label_for_key(OVERVIEW_TAB_KEY))
            >
                <div class="app-sidebar__item-content">
                    {icon("home")}
                    <span>{tab_label_for_key(OVERVIEW_TAB_KEY)}</span>
                </div>
            </div>

            {get_menu_groups()
                .into_iter()
                .map(|group| {
                    let group_id = group.id;
                    let is_expanded = move || expanded_groups.with(|set| set.contains(group_id));
                    let items = StoredValue::new(group.items);

                    view! {
                        <div class="app-sidebar__group">
                            <div
                                class="app-sidebar__item"
                                on:click=move |_| {
                                    expanded_groups.update(|set| {
                                        if !set.remove(group_id) {
                                            set.insert(group_id);
                                        }
                                    })
                                }
                            >
                                <div class="app-sidebar__item-content">
                                    {icon(group.icon)}
                                    <span>{group.label}</span>
                                </div>
                                <div
                                    class="app-sidebar__chevron"
                                    class:app-sidebar__chevron--expanded=is_expanded
                                >
                                    {icon("chevron-right")}
                                </div>
                            </div>

                            <Show when=is_expanded>
                                <div class="app-sidebar__children">
                                    {items
                                        .get_value()
                                        .into_iter()
                                        .map(|item| {
                                            let key = StoredValue::new(item.key);
                                            let label = item.label;
                                            view! {
                                                <div
                                                    class="app-sidebar__item"
                                                    class:app-sidebar__item--active=move || {
                                                        key.with_value(|k| is_active(k))
                                                    }
                                                    on:click=move |_| key.with_value(|k| ctx.open_tab(k, label))
                                                >
                                                    <div class="app-sidebar__item-content">
                                                        {icon(item.icon)}
                                                        <span>{label}</span>
                                                    </div>
                                                </div>
                                            }
                                        })
                                        .collect_view()}
                                </div>
                            </Show>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_covers_every_kind_once() {
        let keys: Vec<String> = get_menu_groups()
            .into_iter()
            .flat_map(|g| g.items.into_iter().map(|i| i.key))
            .collect();
        assert_eq!(keys.len(), RecordKind::all().len());
        for kind in RecordKind::all() {
            assert!(keys.contains(&kind.full_name()));
        }
    }
}
