//! Tab content registry: the single place mapping a tab key to its page.
//!
//! Keys are the overview dashboard key and each record kind's full name
//! (`a004_member`, ...).

use crate::dashboards::{OverviewDashboard, OVERVIEW_TAB_KEY};
use crate::shared::record_page::record_list_page;
use crate::shared::state::PortalStore;
use contracts::domain::common::RecordKind;
use leptos::prelude::*;

pub fn render_tab_content(key: &str, store: PortalStore) -> AnyView {
    if key == OVERVIEW_TAB_KEY {
        return view! { <OverviewDashboard store=store /> }.into_any();
    }
    match RecordKind::from_full_name(key) {
        Some(kind) => render_record_page(kind, store),
        None => {
            log::warn!("unknown tab key: {}", key);
            view! { <div class="placeholder">"Page introuvable"</div> }.into_any()
        }
    }
}

fn render_record_page(kind: RecordKind, store: PortalStore) -> AnyView {
    match kind {
        RecordKind::Lead => record_list_page(store.leads),
        RecordKind::Candidate => record_list_page(store.candidates),
        RecordKind::Applicant => record_list_page(store.applicants),
        RecordKind::Member => record_list_page(store.members),
        RecordKind::Employee => record_list_page(store.employees),
        RecordKind::Invoice => record_list_page(store.invoices),
        RecordKind::Campaign => record_list_page(store.campaigns),
        RecordKind::LegalContract => record_list_page(store.contracts),
        RecordKind::Affiliate => record_list_page(store.affiliates),
        RecordKind::Initiative => record_list_page(store.initiatives),
        RecordKind::ItTicket => record_list_page(store.it_tickets),
    }
}
