use crate::shared::notify::Notifications;
use crate::shared::storage::LocalStore;
use contracts::domain::common::{PortalRecord, RecordId};
use contracts::shared::record_list;
use leptos::prelude::*;
use std::collections::HashSet;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

/// Reactive record list kept in sync with its storage key.
///
/// The list is read once when the handle is created. Every mutation
/// updates the signal and then writes the whole list back, either right
/// away or after `debounce_ms` without further changes.
pub struct PersistedList<R: PortalRecord> {
    pub items: RwSignal<Vec<R>>,
    store: StoredValue<LocalStore<R>>,
    pending: StoredValue<Option<i32>>,
    debounce_ms: u32,
    notifications: Option<Notifications>,
    /// Cleared when stored text could not be read and no copy of it was kept
    writable: bool,
}

impl<R: PortalRecord> Clone for PersistedList<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: PortalRecord> Copy for PersistedList<R> {}

impl<R: PortalRecord> PersistedList<R> {
    pub fn new(
        store: LocalStore<R>,
        debounce_ms: u32,
        notifications: Option<Notifications>,
    ) -> Self {
        let report = store.load_checked();
        let writable = report.safe_to_write();
        if let (Some(damage), Some(notifications)) = (&report.damage, notifications) {
            notifications.error(match &damage.backup {
                Ok(backup) => format!(
                    "« {} » : {} ignorée(s), copie conservée sous « {} »",
                    store.key(),
                    damage.message,
                    backup
                ),
                Err(e) => format!(
                    "« {} » : {}, les modifications ne seront pas enregistrées ({})",
                    store.key(),
                    damage.message,
                    e
                ),
            });
        }
        let mut records = report.records;
        let assigned = record_list::ensure_ids(&mut records);

        let list = Self {
            items: RwSignal::new(records),
            store: StoredValue::new(store),
            pending: StoredValue::new(None),
            debounce_ms,
            notifications,
            writable,
        };
        if assigned > 0 {
            // keep generated ids stable across reloads
            log::info!("'{}': assigned ids to {} records", list.key(), assigned);
            list.flush();
        }
        list
    }

    pub fn key(&self) -> String {
        self.store.with_value(|store| store.key().to_string())
    }

    pub fn len(&self) -> usize {
        self.items.with(|items| items.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get_untracked(&self, id: &RecordId) -> Option<R> {
        self.items
            .with_untracked(|items| record_list::find_by_id(items, id).cloned())
    }

    /// Append a record with a fresh id and creation time
    pub fn add(&self, record: R) -> RecordId {
        let id = self
            .items
            .try_update(|items| record_list::insert_new(items, record))
            .unwrap_or_default();
        self.schedule_save();
        id
    }

    /// Replace the record carrying the same id
    pub fn update(&self, record: R) -> bool {
        self.mutate(|items| record_list::update_by_id(items, record))
    }

    pub fn remove(&self, id: &RecordId) -> bool {
        self.mutate(|items| record_list::remove_by_id(items, id))
    }

    pub fn remove_many(&self, ids: &HashSet<RecordId>) -> usize {
        if ids.is_empty() {
            return 0;
        }
        let removed = self
            .items
            .try_update(|items| record_list::remove_many(items, ids))
            .unwrap_or(0);
        if removed > 0 {
            self.schedule_save();
        }
        removed
    }

    pub fn move_up(&self, id: &RecordId) -> bool {
        self.mutate(|items| match record_list::position_of(items, id) {
            Some(index) => record_list::move_up(items, index),
            None => false,
        })
    }

    pub fn move_down(&self, id: &RecordId) -> bool {
        self.mutate(|items| match record_list::position_of(items, id) {
            Some(index) => record_list::move_down(items, index),
            None => false,
        })
    }

    pub fn replace_all(&self, records: Vec<R>) {
        self.items.set(records);
        self.schedule_save();
    }

    fn mutate(&self, f: impl FnOnce(&mut Vec<R>) -> bool) -> bool {
        let changed = self.items.try_update(f).unwrap_or(false);
        if changed {
            self.schedule_save();
        }
        changed
    }

    fn schedule_save(&self) {
        if self.debounce_ms == 0 {
            self.flush();
            return;
        }
        let Some(window) = web_sys::window() else {
            self.flush();
            return;
        };

        if let Some(handle) = self.pending.get_value() {
            window.clear_timeout_with_handle(handle);
        }

        let this = *self;
        let callback = Closure::once_into_js(move || {
            this.pending.set_value(None);
            this.flush();
        });
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            self.debounce_ms as i32,
        ) {
            Ok(handle) => self.pending.set_value(Some(handle)),
            Err(e) => {
                log::warn!("setTimeout failed ({:?}), saving now", e);
                self.flush();
            }
        }
    }

    /// Write now if a delayed write is waiting
    pub fn flush_pending(&self) {
        if self.pending.try_get_value().flatten().is_some() {
            self.flush();
        }
    }

    /// Write the current list now, cancelling a pending delayed write
    pub fn flush(&self) {
        if !self.writable {
            log::warn!("'{}': not saved, stored data could not be backed up", self.key());
            return;
        }
        let Some(result) = self
            .items
            .try_with_untracked(|items| self.store.try_with_value(|store| store.save(items)))
            .flatten()
        else {
            return;
        };

        if let Some(handle) = self.pending.try_get_value().flatten() {
            if let Some(window) = web_sys::window() {
                window.clear_timeout_with_handle(handle);
            }
            self.pending.set_value(None);
        }

        if let Err(e) = result {
            log::error!("{}", e);
            if let Some(notifications) = self.notifications {
                notifications.error(format!(
                    "Les modifications n'ont pas pu être enregistrées : {}",
                    e
                ));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::notify::ToastKind;
    use crate::shared::storage::{KeyValueStorage, MemoryStorage};
    use contracts::domain::a001_lead::Lead;
    use contracts::domain::a004_member::Member;
    use serde_json::json;
    use std::sync::Arc;

    fn lead(name: &str) -> Lead {
        Lead {
            name: name.to_string(),
            ..Lead::default()
        }
    }

    fn open(storage: &MemoryStorage) -> PersistedList<Lead> {
        PersistedList::new(LocalStore::new("leads", Arc::new(storage.clone())), 0, None)
    }

    fn names(list: &PersistedList<Lead>) -> Vec<String> {
        list.items
            .get_untracked()
            .into_iter()
            .map(|l| l.name)
            .collect()
    }

    #[test]
    fn test_every_mutation_is_written_back() {
        let storage = MemoryStorage::new();
        let list = open(&storage);
        let a = list.add(lead("A"));
        let b = list.add(lead("B"));
        list.add(lead("C"));
        assert!(list.move_up(&b));
        assert!(list.remove(&a));

        let reloaded = open(&storage);
        assert_eq!(names(&reloaded), ["B", "C"]);
    }

    #[test]
    fn test_update_and_bulk_remove() {
        let storage = MemoryStorage::new();
        let list = open(&storage);
        let a = list.add(lead("A"));
        let b = list.add(lead("B"));

        let mut edited = list.get_untracked(&a).unwrap();
        edited.name = "A2".to_string();
        assert!(list.update(edited));

        let ids: HashSet<RecordId> = [b].into_iter().collect();
        assert_eq!(list.remove_many(&ids), 1);
        assert_eq!(names(&open(&storage)), ["A2"]);
    }

    #[test]
    fn test_noop_moves_do_not_touch_storage() {
        let storage = MemoryStorage::new();
        let list = open(&storage);
        let a = list.add(lead("A"));
        storage.remove_item("leads").unwrap();

        assert!(!list.move_up(&a));
        assert!(!list.move_down(&a));
        assert_eq!(storage.get_item("leads").unwrap(), None);
    }

    #[test]
    fn test_legacy_records_get_stable_ids() {
        let storage = MemoryStorage::new();
        storage
            .set_item("leads", &json!([{"name": "Sans id"}]).to_string())
            .unwrap();

        let first = open(&storage).items.get_untracked();
        let second = open(&storage).items.get_untracked();
        assert!(!first[0].id.is_empty());
        assert_eq!(first[0].id, second[0].id);
    }

    #[test]
    fn test_write_failure_raises_error_toast() {
        let notifications = Notifications::new(0);
        let list: PersistedList<Lead> = PersistedList::new(
            LocalStore::new("leads", Arc::new(MemoryStorage::read_only())),
            0,
            Some(notifications),
        );
        list.add(lead("A"));

        assert_eq!(list.len(), 1);
        let toasts = notifications.toasts.get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
    }

    #[test]
    fn test_unreadable_entries_survive_the_next_save() {
        let storage = MemoryStorage::new();
        let raw = json!([
            {"id": 1, "name": "Alice", "skills": "Rust"},
            {"id": 2, "name": "Bob"},
            null,
            42
        ])
        .to_string();
        storage.set_item("members", &raw).unwrap();
        let notifications = Notifications::new(0);

        let list: PersistedList<Member> = PersistedList::new(
            LocalStore::new("members", Arc::new(storage.clone())),
            0,
            Some(notifications),
        );
        list.add(Member {
            name: "Carol".to_string(),
            ..Member::default()
        });

        let written: Vec<Member> =
            serde_json::from_str(&storage.get_item("members").unwrap().unwrap()).unwrap();
        let names: Vec<&str> = written.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Alice", "Bob", "Carol"]);
        assert_eq!(written[0].skills[0].label, "Rust");
        assert_eq!(storage.get_item("members.corrupt").unwrap(), Some(raw));

        let toasts = notifications.toasts.get_untracked();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert!(toasts[0].message.contains("members.corrupt"));
    }

    #[test]
    fn test_nothing_is_overwritten_when_backup_fails() {
        let storage = MemoryStorage::new();
        storage.set_item("leads", "{not json").unwrap();
        let list: PersistedList<Lead> =
            PersistedList::new(LocalStore::new("leads", Arc::new(storage.frozen())), 0, None);
        assert!(list.is_empty());

        // writes are allowed again, but this handle still refuses to save
        let reopened: PersistedList<Lead> = PersistedList {
            store: StoredValue::new(LocalStore::new("leads", Arc::new(storage.clone()))),
            ..list
        };
        reopened.add(lead("A"));
        assert_eq!(storage.get_item("leads").unwrap().as_deref(), Some("{not json"));
    }
}
