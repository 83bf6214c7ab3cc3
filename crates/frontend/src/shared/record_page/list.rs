use super::row::{build_rows, RecordRow};
use super::{confirm, record_form_modal, FormMode};
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::table_checkbox::TableCheckbox;
use crate::shared::config::PortalConfig;
use crate::shared::export::export_records;
use crate::shared::icons::icon;
use crate::shared::list_utils::{
    get_sort_indicator, highlight_matches, is_filter_active, next_sort, SearchInput,
    DEFAULT_SEARCH_MIN_CHARS,
};
use crate::shared::notify::use_notifications;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::shared::persisted_list::PersistedList;
use contracts::domain::common::{PortalRecord, RecordId};
use contracts::shared::metadata::FieldMetadata;
use contracts::shared::record_list;
use leptos::prelude::*;
use std::collections::HashSet;

/// List page of one record kind
pub fn record_list_page<R: PortalRecord>(list: PersistedList<R>) -> AnyView {
    let meta = R::metadata();
    let notifications = use_notifications();
    let min_chars = use_context::<PortalConfig>()
        .map(|c| c.ui.search_min_chars)
        .unwrap_or(DEFAULT_SEARCH_MIN_CHARS);

    let columns: Vec<FieldMetadata> = R::fields()
        .iter()
        .copied()
        .filter(|f| f.visible_in_list())
        .collect();
    let columns = StoredValue::new(columns);

    let (filter, set_filter) = signal(String::new());
    let sort = RwSignal::new(None::<(&'static str, bool)>);
    let selected = RwSignal::new(HashSet::<RecordId>::new());
    let mode = RwSignal::new(FormMode::Closed);

    let rows = move || {
        let query = filter.get();
        let sort = sort.get();
        list.items
            .with(|items| columns.with_value(|cols| build_rows(items, cols, &query, min_chars, sort)))
    };

    // Moving rows only makes sense on the stored order
    let reorder_locked =
        move || sort.with(|s| s.is_some()) || is_filter_active(&filter.get(), min_chars);

    let all_selected = move || {
        let visible = rows();
        !visible.is_empty() && selected.with(|s| visible.iter().all(|row| s.contains(&row.id)))
    };

    let toggle_all = move |checked: bool| {
        let visible: HashSet<RecordId> = rows().into_iter().map(|row| row.id).collect();
        selected.update(|s| {
            if checked {
                s.extend(visible);
            } else {
                s.retain(|id| !visible.contains(id));
            }
        });
    };

    let delete_selected = move |_| {
        let ids = selected.get_untracked();
        if ids.is_empty() {
            return;
        }
        let question = format!("Supprimer {} enregistrement(s) ?", ids.len());
        if !confirm(&question) {
            return;
        }
        let removed = list.remove_many(&ids);
        selected.set(HashSet::new());
        if let Some(n) = notifications {
            n.success(format!("{} enregistrement(s) supprimé(s)", removed));
        }
    };

    // Exports what the table shows: current search and sort
    let export = move |_| {
        let filename = format!("{}.csv", R::storage_key());
        let visible: Vec<RecordId> = untrack(rows).into_iter().map(|row| row.id).collect();
        let records: Vec<R> = list.items.with_untracked(|items| {
            visible
                .iter()
                .filter_map(|id| record_list::find_by_id(items, id).cloned())
                .collect()
        });
        let result = export_records(&records, &filename);
        if let Err(e) = result {
            log::warn!("export '{}': {}", filename, e);
            if let Some(n) = notifications {
                n.error(e);
            }
        }
    };

    let header_cells = columns.with_value(|cols| {
        cols.iter()
            .map(|column| {
                let name = column.name;
                view! {
                    <th
                        class="table__header-cell table__header-cell--sortable"
                        on:click=move |_| sort.update(|s| *s = next_sort(*s, name))
                    >
                        {column.ui.label}
                        <span class="table__sort-indicator">
                            {move || get_sort_indicator(sort.get(), name)}
                        </span>
                    </th>
                }
            })
            .collect_view()
    });

    let render_row = move |row: RecordRow| {
        let id = StoredValue::new(row.id.clone());
        let is_selected = move || id.with_value(|id| selected.with(|s| s.contains(id)));
        let cells = row
            .cells
            .into_iter()
            .map(|(_, text)| {
                view! {
                    <td class="table__cell">{move || highlight_matches(&text, &filter.get(), min_chars)}</td>
                }
            })
            .collect_view();

        view! {
            <tr
                class="table__row"
                class:table__row--selected=is_selected
                on:click=move |_| mode.set(FormMode::Edit(id.get_value()))
            >
                <TableCheckbox
                    checked=Signal::derive(is_selected)
                    on_change=Callback::new(move |checked: bool| {
                        let row_id = id.get_value();
                        selected.update(|s| {
                            if checked {
                                s.insert(row_id);
                            } else {
                                s.remove(&row_id);
                            }
                        });
                    })
                />
                {cells}
                <td class="table__cell table__cell--actions" on:click=|e| e.stop_propagation()>
                    <button
                        class="button button--icon"
                        title="Monter"
                        disabled=reorder_locked
                        on:click=move |_| {
                            id.with_value(|id| list.move_up(id));
                        }
                    >
                        {icon("arrow-up")}
                    </button>
                    <button
                        class="button button--icon"
                        title="Descendre"
                        disabled=reorder_locked
                        on:click=move |_| {
                            id.with_value(|id| list.move_down(id));
                        }
                    >
                        {icon("arrow-down")}
                    </button>
                    <button
                        class="button button--icon"
                        title="Modifier"
                        on:click=move |_| mode.set(FormMode::Edit(id.get_value()))
                    >
                        {icon("edit")}
                    </button>
                    <button
                        class="button button--icon button--danger"
                        title="Supprimer"
                        on:click=move |_| {
                            if confirm("Supprimer cet enregistrement ?") {
                                let row_id = id.get_value();
                                list.remove(&row_id);
                                selected.update(|s| {
                                    s.remove(&row_id);
                                });
                            }
                        }
                    >
                        {icon("trash")}
                    </button>
                </td>
            </tr>
        }
    };

    view! {
        <PageFrame page_id=format!("{}--list", meta.full_name()) category=PAGE_CAT_LIST>
            <div class="page__header">
                <PageHeader
                    title=meta.ui.list_name
                    subtitle=Signal::derive(move || Some(format!("{} enregistrement(s)", list.len())))
                >
                    <button class="button button--primary" on:click=move |_| mode.set(FormMode::Create)>
                        {icon("plus")}
                        "Nouveau"
                    </button>
                    <button class="button button--secondary" on:click=export>
                        {icon("download")}
                        "Exporter"
                    </button>
                    <button
                        class="button button--secondary button--danger"
                        disabled=move || selected.with(|s| s.is_empty())
                        on:click=delete_selected
                    >
                        {icon("trash")}
                        {move || format!("Supprimer ({})", selected.with(|s| s.len()))}
                    </button>
                </PageHeader>
            </div>

            <div class="page__content">
                <div class="header__actions">
                    <SearchInput
                        value=filter
                        on_change=Callback::new(move |value: String| set_filter.set(value))
                        min_chars=min_chars
                    />
                </div>

                <div class="table">
                    <table class="table__data table--striped">
                        <thead class="table__head">
                            <tr>
                                <th class="table__header-cell table__header-cell--checkbox">
                                    <input
                                        type="checkbox"
                                        class="table__checkbox"
                                        prop:checked=all_selected
                                        on:change=move |ev| toggle_all(event_target_checked(&ev))
                                    />
                                </th>
                                {header_cells}
                                <th class="table__header-cell table__header-cell--actions">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody>
                            <For each=rows key=|row| row.render_key() children=render_row />
                        </tbody>
                    </table>
                    <Show when=move || list.is_empty()>
                        <div class="table__empty">"Aucun enregistrement pour le moment"</div>
                    </Show>
                </div>
            </div>

            {move || {
                let current = mode.get();
                (current != FormMode::Closed).then(|| record_form_modal(list, current, mode))
            }}
        </PageFrame>
    }
    .into_any()
}
