use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::state::PortalStore;
use contracts::domain::common::{Department, RecordKind};
use leptos::prelude::*;

pub const OVERVIEW_TAB_KEY: &str = "d400_overview";

/// Record count per department, in navigation order
pub fn department_totals(count: impl Fn(RecordKind) -> usize) -> Vec<(Department, usize)> {
    Department::all()
        .into_iter()
        .map(|department| {
            let total = RecordKind::of_department(department)
                .into_iter()
                .map(&count)
                .sum();
            (department, total)
        })
        .collect()
}

/// Home page: how many records each department holds
#[component]
pub fn OverviewDashboard(store: PortalStore) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let total = move || RecordKind::all().into_iter().map(|k| store.count(k)).sum::<usize>();

    view! {
        <PageFrame page_id=format!("{}--dashboard", OVERVIEW_TAB_KEY) category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <PageHeader
                    title="Vue d'ensemble"
                    subtitle=Signal::derive(move || Some(format!("{} enregistrement(s) au total", total())))
                >
                    {()}
                </PageHeader>
            </div>
            <div class="page__content">
                <div class="overview-grid">
                    {Department::all()
                        .into_iter()
                        .map(|department| {
                            let department_total = move || {
                                department_totals(|k| store.count(k))
                                    .into_iter()
                                    .find(|(d, _)| *d == department)
                                    .map(|(_, n)| n)
                                    .unwrap_or(0)
                            };
                            view! {
                                <div class="overview-card">
                                    <div class="overview-card__header">
                                        {icon(department.icon())}
                                        <span class="overview-card__title">{department.label()}</span>
                                        <span class="overview-card__total">{department_total}</span>
                                    </div>
                                    <ul class="overview-card__kinds">
                                        {RecordKind::of_department(department)
                                            .into_iter()
                                            .map(|kind| {
                                                view! {
                                                    <li
                                                        class="overview-card__kind"
                                                        on:click=move |_| ctx.open_tab(&kind.full_name(), kind.list_name())
                                                    >
                                                        {icon(kind.metadata().ui.icon)}
                                                        <span>{kind.list_name()}</span>
                                                        <span class="overview-card__count">
                                                            {move || store.count(kind)}
                                                        </span>
                                                    </li>
                                                }
                                            })
                                            .collect_view()}
                                    </ul>
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_department_totals() {
        let totals = department_totals(|kind| match kind {
            RecordKind::Candidate => 2,
            RecordKind::Employee => 5,
            RecordKind::Invoice => 1,
            _ => 0,
        });
        assert_eq!(totals.len(), Department::all().len());
        assert_eq!(totals[0], (Department::Hr, 7));
        assert!(totals.contains(&(Department::Accounting, 1)));
        assert!(totals.contains(&(Department::It, 0)));
    }
}
