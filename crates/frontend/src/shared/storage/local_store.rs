use super::{SharedStorage, StorageError};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use std::marker::PhantomData;

/// Backups beyond this many per key are refused
const MAX_BACKUPS: usize = 20;

/// Result of reading a record list from storage
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    /// Nothing stored under the key yet
    Missing,
    Loaded(Vec<T>),
    /// A list, but some of its entries are not records of this kind
    Partial { records: Vec<T>, skipped: Vec<String> },
    /// Something is stored but is not a list
    Corrupt(String),
    /// The storage itself could not be read
    Unreadable(String),
}

impl<T> LoadOutcome<T> {
    /// Records that could be read; failures give no records
    pub fn into_records(self) -> Vec<T> {
        match self {
            LoadOutcome::Loaded(records) | LoadOutcome::Partial { records, .. } => records,
            _ => Vec::new(),
        }
    }
}

/// Stored text that was not fully read as records
#[derive(Debug)]
pub struct Damage {
    pub message: String,
    /// Key holding an untouched copy of the stored text
    pub backup: Result<String, StorageError>,
}

/// Records read by [`LocalStore::load_checked`]
#[derive(Debug)]
pub struct LoadReport<T> {
    pub records: Vec<T>,
    pub damage: Option<Damage>,
}

impl<T> LoadReport<T> {
    /// Whether writing the list back cannot lose stored data
    pub fn safe_to_write(&self) -> bool {
        self.damage.as_ref().map_or(true, |d| d.backup.is_ok())
    }
}

/// Typed record list persisted as a JSON array under one storage key
pub struct LocalStore<T> {
    key: String,
    storage: SharedStorage,
    _marker: PhantomData<fn() -> T>,
}

impl<T> Clone for LocalStore<T> {
    fn clone(&self) -> Self {
        Self {
            key: self.key.clone(),
            storage: self.storage.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Serialize + DeserializeOwned> LocalStore<T> {
    pub fn new(key: impl Into<String>, storage: SharedStorage) -> Self {
        Self {
            key: key.into(),
            storage,
            _marker: PhantomData,
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn load_outcome(&self) -> LoadOutcome<T> {
        match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => parse_list(&raw),
            Ok(None) => LoadOutcome::Missing,
            Err(e) => LoadOutcome::Unreadable(e.to_string()),
        }
    }

    /// Read the list once. Entries that are not records of this kind are
    /// left out, and the stored text is first copied to a backup key so a
    /// later save cannot destroy it.
    pub fn load_checked(&self) -> LoadReport<T> {
        let raw = match self.storage.get_item(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                log::debug!("'{}': nothing stored yet", self.key);
                return LoadReport { records: Vec::new(), damage: None };
            }
            Err(e) => {
                log::warn!("'{}': {}", self.key, e);
                return LoadReport { records: Vec::new(), damage: None };
            }
        };

        let message = match parse_list(&raw) {
            LoadOutcome::Loaded(records) => {
                log::debug!("'{}': loaded {} records", self.key, records.len());
                return LoadReport { records, damage: None };
            }
            LoadOutcome::Partial { records, skipped } => {
                for reason in &skipped {
                    log::warn!("'{}': entry skipped, {}", self.key, reason);
                }
                let message = format!("{} entrée(s) illisible(s)", skipped.len());
                let backup = self.backup(&raw);
                return LoadReport {
                    records,
                    damage: Some(Damage { message, backup }),
                };
            }
            LoadOutcome::Corrupt(e) => {
                log::warn!("'{}': stored data ignored, cannot parse it: {}", self.key, e);
                "données illisibles".to_string()
            }
            LoadOutcome::Missing | LoadOutcome::Unreadable(_) => String::new(),
        };
        let backup = self.backup(&raw);
        LoadReport {
            records: Vec::new(),
            damage: Some(Damage { message, backup }),
        }
    }

    /// Records that could be read; see [`LocalStore::load_checked`]
    pub fn load(&self) -> Vec<T> {
        self.load_checked().records
    }

    /// Copy `raw` under the first free `<key>.corrupt[.N]` key. A backup
    /// already holding the same text is reused.
    fn backup(&self, raw: &str) -> Result<String, StorageError> {
        for n in 1..=MAX_BACKUPS {
            let candidate = if n == 1 {
                format!("{}.corrupt", self.key)
            } else {
                format!("{}.corrupt.{}", self.key, n)
            };
            match self.storage.get_item(&candidate)? {
                Some(existing) if existing == raw => return Ok(candidate),
                Some(_) => continue,
                None => {
                    self.storage.set_item(&candidate, raw)?;
                    log::warn!("'{}': stored text kept under '{}'", self.key, candidate);
                    return Ok(candidate);
                }
            }
        }
        Err(StorageError::Write {
            key: format!("{}.corrupt", self.key),
            message: format!("{} backups already exist", MAX_BACKUPS),
        })
    }

    /// Serialize the list and write it under the key
    pub fn save(&self, records: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(records).map_err(|source| StorageError::Serialize {
            key: self.key.clone(),
            source,
        })?;
        self.storage.set_item(&self.key, &raw)
    }

    pub fn clear(&self) -> Result<(), StorageError> {
        self.storage.remove_item(&self.key)
    }
}

/// Parse a stored array entry by entry; null entries are dropped
fn parse_list<T: DeserializeOwned>(raw: &str) -> LoadOutcome<T> {
    let items = match serde_json::from_str::<Vec<Value>>(raw) {
        Ok(items) => items,
        Err(e) => return LoadOutcome::Corrupt(e.to_string()),
    };
    let mut records = Vec::with_capacity(items.len());
    let mut skipped = Vec::new();
    for (index, item) in items.into_iter().enumerate() {
        if item.is_null() {
            continue;
        }
        match serde_json::from_value::<T>(item) {
            Ok(record) => records.push(record),
            Err(e) => skipped.push(format!("#{}: {}", index, e)),
        }
    }
    if skipped.is_empty() {
        LoadOutcome::Loaded(records)
    } else {
        LoadOutcome::Partial { records, skipped }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::{KeyValueStorage, MemoryStorage};
    use contracts::domain::a001_lead::Lead;
    use contracts::domain::a004_member::Member;
    use contracts::domain::common::Tag;
    use serde_json::json;
    use std::sync::Arc;

    fn member(id: &str, name: &str) -> Member {
        Member {
            id: id.into(),
            name: name.to_string(),
            email: format!("{}@x.com", id),
            skills: vec![Tag::new("Rust")],
            ..Member::default()
        }
    }

    #[test]
    fn test_save_then_load_in_fresh_store() {
        let storage = MemoryStorage::new();
        let records = vec![member("a", "Jean"), member("b", "Marie")];

        let first: LocalStore<Member> = LocalStore::new("members", Arc::new(storage.clone()));
        first.save(&records).unwrap();

        let second: LocalStore<Member> = LocalStore::new("members", Arc::new(storage));
        assert_eq!(second.load(), records);
    }

    #[test]
    fn test_missing_key_loads_empty() {
        let store: LocalStore<Lead> = LocalStore::new("leads", Arc::new(MemoryStorage::new()));
        assert_eq!(store.load_outcome(), LoadOutcome::Missing);
        assert!(store.load().is_empty());
    }

    #[test]
    fn test_corrupt_data_loads_empty() {
        let storage = MemoryStorage::new();
        storage.set_item("leads", "{not json").unwrap();
        storage.set_item("members", r#"{"name": "not a list"}"#).unwrap();

        let leads: LocalStore<Lead> = LocalStore::new("leads", Arc::new(storage.clone()));
        assert!(matches!(leads.load_outcome(), LoadOutcome::Corrupt(_)));
        assert!(leads.load().is_empty());

        let members: LocalStore<Member> = LocalStore::new("members", Arc::new(storage.clone()));
        assert!(members.load().is_empty());

        assert_eq!(storage.get_item("leads.corrupt").unwrap().as_deref(), Some("{not json"));
        assert_eq!(
            storage.get_item("members.corrupt").unwrap().as_deref(),
            Some(r#"{"name": "not a list"}"#)
        );
    }

    #[test]
    fn test_bad_entries_are_skipped_and_kept_aside() {
        let storage = MemoryStorage::new();
        let raw = json!([
            {"id": "a", "name": "Jean"},
            null,
            42,
            {"id": "b", "name": "Marie", "skills": "Rust"}
        ])
        .to_string();
        storage.set_item("members", &raw).unwrap();
        let store: LocalStore<Member> = LocalStore::new("members", Arc::new(storage.clone()));

        match store.load_outcome() {
            LoadOutcome::Partial { records, skipped } => {
                assert_eq!(records.len(), 2);
                assert_eq!(skipped.len(), 1);
                assert!(skipped[0].starts_with("#2"));
            }
            other => panic!("unexpected outcome {:?}", other),
        }

        let report = store.load_checked();
        let names: Vec<&str> = report.records.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["Jean", "Marie"]);
        assert_eq!(report.records[1].skills[0].label, "Rust");
        assert!(report.safe_to_write());
        assert_eq!(storage.get_item("members.corrupt").unwrap(), Some(raw.clone()));

        // same text again reuses the backup, different text takes the next slot
        store.load_checked();
        assert_eq!(storage.get_item("members.corrupt.2").unwrap(), None);
        storage.set_item("members", "[7]").unwrap();
        store.load_checked();
        assert_eq!(storage.get_item("members.corrupt").unwrap(), Some(raw));
        assert_eq!(storage.get_item("members.corrupt.2").unwrap().as_deref(), Some("[7]"));
    }

    #[test]
    fn test_failed_backup_is_not_safe_to_write() {
        let storage = MemoryStorage::new();
        storage.set_item("members", "[42]").unwrap();
        let store: LocalStore<Member> = LocalStore::new("members", Arc::new(storage.frozen()));

        let report = store.load_checked();
        assert!(report.records.is_empty());
        assert!(!report.safe_to_write());
    }

    #[test]
    fn test_reads_list_written_by_older_pages() {
        let storage = MemoryStorage::new();
        let legacy = json!([
            {"id": 1700000000000u64, "name": "Jean Dupont", "email": "jean@x.com", "phone": "0600000000"},
            {"name": "Sans id", "skills": null}
        ]);
        storage.set_item("members", &legacy.to_string()).unwrap();

        let store: LocalStore<Member> = LocalStore::new("members", Arc::new(storage));
        let records = store.load();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].id.as_str(), "1700000000000");
        assert!(records[1].id.is_empty());
    }

    #[test]
    fn test_write_failure_is_reported() {
        let store: LocalStore<Member> =
            LocalStore::new("members", Arc::new(MemoryStorage::read_only()));
        let err = store.save(&[member("a", "Jean")]).unwrap_err();
        assert!(matches!(err, StorageError::Write { .. }));
        assert!(err.to_string().contains("members"));
    }

    #[test]
    fn test_clear() {
        let storage = MemoryStorage::new();
        let store: LocalStore<Member> = LocalStore::new("members", Arc::new(storage.clone()));
        store.save(&[member("a", "Jean")]).unwrap();
        store.clear().unwrap();
        assert_eq!(storage.get_item("members").unwrap(), None);
    }
}
