use crate::shared::config::PortalConfig;
use crate::shared::notify::Notifications;
use crate::shared::persisted_list::PersistedList;
use crate::shared::storage::{LocalStore, SharedStorage};
use contracts::domain::a001_lead::Lead;
use contracts::domain::a002_candidate::Candidate;
use contracts::domain::a003_applicant::Applicant;
use contracts::domain::a004_member::Member;
use contracts::domain::a005_employee::Employee;
use contracts::domain::a006_invoice::Invoice;
use contracts::domain::a007_campaign::Campaign;
use contracts::domain::a008_legal_contract::LegalContract;
use contracts::domain::a009_affiliate::Affiliate;
use contracts::domain::a010_initiative::Initiative;
use contracts::domain::a011_it_ticket::ItTicket;
use contracts::domain::common::{PortalRecord, RecordKind};

/// One persisted list per record kind.
///
/// Created once by `App` and handed to the pages that need it.
#[derive(Clone, Copy)]
pub struct PortalStore {
    pub leads: PersistedList<Lead>,
    pub candidates: PersistedList<Candidate>,
    pub applicants: PersistedList<Applicant>,
    pub members: PersistedList<Member>,
    pub employees: PersistedList<Employee>,
    pub invoices: PersistedList<Invoice>,
    pub campaigns: PersistedList<Campaign>,
    pub contracts: PersistedList<LegalContract>,
    pub affiliates: PersistedList<Affiliate>,
    pub initiatives: PersistedList<Initiative>,
    pub it_tickets: PersistedList<ItTicket>,
}

fn open<R: PortalRecord>(
    storage: &SharedStorage,
    config: &PortalConfig,
    notifications: Option<Notifications>,
) -> PersistedList<R> {
    let store = LocalStore::new(R::storage_key(), storage.clone());
    PersistedList::new(store, config.persistence.debounce_ms, notifications)
}

impl PortalStore {
    pub fn load(
        storage: SharedStorage,
        config: &PortalConfig,
        notifications: Option<Notifications>,
    ) -> Self {
        let store = Self {
            leads: open(&storage, config, notifications),
            candidates: open(&storage, config, notifications),
            applicants: open(&storage, config, notifications),
            members: open(&storage, config, notifications),
            employees: open(&storage, config, notifications),
            invoices: open(&storage, config, notifications),
            campaigns: open(&storage, config, notifications),
            contracts: open(&storage, config, notifications),
            affiliates: open(&storage, config, notifications),
            initiatives: open(&storage, config, notifications),
            it_tickets: open(&storage, config, notifications),
        };
        log::debug!(
            "record lists loaded: {}",
            RecordKind::all()
                .iter()
                .map(|kind| format!("{}={}", kind.storage_key(), store.count_untracked(*kind)))
                .collect::<Vec<_>>()
                .join(", ")
        );
        store
    }

    /// Number of records of a kind (tracked)
    pub fn count(&self, kind: RecordKind) -> usize {
        match kind {
            RecordKind::Lead => self.leads.len(),
            RecordKind::Candidate => self.candidates.len(),
            RecordKind::Applicant => self.applicants.len(),
            RecordKind::Member => self.members.len(),
            RecordKind::Employee => self.employees.len(),
            RecordKind::Invoice => self.invoices.len(),
            RecordKind::Campaign => self.campaigns.len(),
            RecordKind::LegalContract => self.contracts.len(),
            RecordKind::Affiliate => self.affiliates.len(),
            RecordKind::Initiative => self.initiatives.len(),
            RecordKind::ItTicket => self.it_tickets.len(),
        }
    }

    fn count_untracked(&self, kind: RecordKind) -> usize {
        leptos::prelude::untrack(|| self.count(kind))
    }

    /// Write the lists with a delayed write waiting; used before the page unloads
    pub fn flush_all(&self) {
        self.leads.flush_pending();
        self.candidates.flush_pending();
        self.applicants.flush_pending();
        self.members.flush_pending();
        self.employees.flush_pending();
        self.invoices.flush_pending();
        self.campaigns.flush_pending();
        self.contracts.flush_pending();
        self.affiliates.flush_pending();
        self.initiatives.flush_pending();
        self.it_tickets.flush_pending();
    }
}
