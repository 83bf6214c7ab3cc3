//! Operations on an in-memory record list.
//!
//! Records are matched by identifier only.

use crate::domain::common::{PortalRecord, RecordId};
use std::collections::HashSet;

/// Swap two in-bounds positions. Out-of-bounds or equal indices are a no-op.
pub fn swap<T>(records: &mut [T], from: usize, to: usize) -> bool {
    if from == to || from >= records.len() || to >= records.len() {
        return false;
    }
    records.swap(from, to);
    true
}

/// Move the element at `index` one position up (no-op for the first one)
pub fn move_up<T>(records: &mut [T], index: usize) -> bool {
    match index.checked_sub(1) {
        Some(to) => swap(records, index, to),
        None => false,
    }
}

/// Move the element at `index` one position down (no-op for the last one)
pub fn move_down<T>(records: &mut [T], index: usize) -> bool {
    swap(records, index, index + 1)
}

/// Append a new record with a fresh identifier and creation time
pub fn insert_new<R: PortalRecord>(records: &mut Vec<R>, mut record: R) -> RecordId {
    let id = RecordId::generate();
    record.set_id(id.clone());
    record.set_created_at(Some(chrono::Utc::now()));
    records.push(record);
    id
}

/// Replace the record with the same identifier, keeping its position and
/// creation time. Returns false when no record has that identifier.
pub fn update_by_id<R: PortalRecord>(records: &mut [R], mut record: R) -> bool {
    let Some(existing) = records.iter_mut().find(|r| r.id() == record.id()) else {
        return false;
    };
    if record.created_at().is_none() {
        record.set_created_at(existing.created_at());
    }
    record.touch_updated();
    *existing = record;
    true
}

pub fn remove_by_id<R: PortalRecord>(records: &mut Vec<R>, id: &RecordId) -> bool {
    let before = records.len();
    records.retain(|r| r.id() != id);
    records.len() != before
}

/// Remove every record whose identifier is in `ids`; returns how many went
pub fn remove_many<R: PortalRecord>(records: &mut Vec<R>, ids: &HashSet<RecordId>) -> usize {
    let before = records.len();
    records.retain(|r| !ids.contains(r.id()));
    before - records.len()
}

pub fn find_by_id<'a, R: PortalRecord>(records: &'a [R], id: &RecordId) -> Option<&'a R> {
    records.iter().find(|r| r.id() == id)
}

pub fn position_of<R: PortalRecord>(records: &[R], id: &RecordId) -> Option<usize> {
    records.iter().position(|r| r.id() == id)
}

/// Give an identifier to every record stored without one (legacy data).
/// Returns how many records were changed.
pub fn ensure_ids<R: PortalRecord>(records: &mut [R]) -> usize {
    let mut assigned = 0;
    for record in records.iter_mut().filter(|r| r.id().is_empty()) {
        record.set_id(RecordId::generate());
        assigned += 1;
    }
    assigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::a001_lead::aggregate::Lead;

    fn lead(id: &str, name: &str) -> Lead {
        Lead {
            id: RecordId::from(id),
            name: name.to_string(),
            ..Lead::default()
        }
    }

    fn names(records: &[Lead]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_reorder_boundaries_are_noops() {
        let mut list = vec![lead("1", "A"), lead("2", "B"), lead("3", "C")];
        assert!(!move_up(&mut list, 0));
        assert_eq!(names(&list), ["A", "B", "C"]);
        assert!(!move_down(&mut list, 2));
        assert_eq!(names(&list), ["A", "B", "C"]);
    }

    #[test]
    fn test_reorder_moves_neighbours() {
        let mut list = vec![lead("1", "A"), lead("2", "B"), lead("3", "C")];
        assert!(move_up(&mut list, 2));
        assert_eq!(names(&list), ["A", "C", "B"]);
        assert!(move_down(&mut list, 0));
        assert_eq!(names(&list), ["C", "A", "B"]);
        assert!(!swap(&mut list, 1, 7));
    }

    #[test]
    fn test_insert_assigns_id_and_creation_time() {
        let mut list: Vec<Lead> = Vec::new();
        let id = insert_new(&mut list, lead("", "Jean Dupont"));
        assert_eq!(list.len(), 1);
        assert!(!id.is_empty());
        assert_eq!(list[0].id, id);
        assert!(list[0].created_at.is_some());
    }

    #[test]
    fn test_update_matches_by_id_only() {
        let mut list = vec![lead("1", "A"), lead("2", "B")];
        list[0].email = "same@x.com".to_string();
        list[1].email = "same@x.com".to_string();

        let mut edited = list[1].clone();
        edited.name = "B2".to_string();
        assert!(update_by_id(&mut list, edited));
        assert_eq!(names(&list), ["A", "B2"]);
        assert!(list[1].updated_at.is_some());

        assert!(!update_by_id(&mut list, lead("9", "ghost")));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_update_keeps_creation_time() {
        let mut list = Vec::new();
        let id = insert_new(&mut list, lead("", "A"));
        let created = list[0].created_at;

        let mut edited = lead(id.as_str(), "A bis");
        edited.created_at = None;
        update_by_id(&mut list, edited);
        assert_eq!(list[0].created_at, created);
    }

    #[test]
    fn test_remove() {
        let mut list = vec![lead("1", "A"), lead("2", "B"), lead("3", "C")];
        assert!(remove_by_id(&mut list, &RecordId::from("2")));
        assert!(!remove_by_id(&mut list, &RecordId::from("2")));
        assert_eq!(names(&list), ["A", "C"]);

        let ids: HashSet<RecordId> = ["1", "3", "42"].into_iter().map(RecordId::from).collect();
        assert_eq!(remove_many(&mut list, &ids), 2);
        assert!(list.is_empty());
    }

    #[test]
    fn test_ensure_ids() {
        let mut list = vec![lead("", "A"), lead("7", "B")];
        assert_eq!(ensure_ids(&mut list), 1);
        assert!(!list[0].id.is_empty());
        assert_eq!(list[1].id.as_str(), "7");
        assert_eq!(position_of(&list, &RecordId::from("7")), Some(1));
        assert!(find_by_id(&list, &RecordId::from("8")).is_none());
    }
}
