use crate::shared::list_utils::{filter_list, sort_list, Searchable, Sortable};
use contracts::domain::common::{PortalRecord, RecordId};
use contracts::shared::form::FieldValues;
use contracts::shared::metadata::{display_value, FieldMetadata};
use serde_json::Value;
use std::cmp::Ordering;

/// One table row: the record's values and the display text of each column
#[derive(Debug, Clone, PartialEq)]
pub struct RecordRow {
    pub id: RecordId,
    pub values: FieldValues,
    pub cells: Vec<(&'static str, String)>,
}

impl RecordRow {
    pub fn from_record<R: PortalRecord>(record: &R, columns: &[FieldMetadata]) -> Self {
        let values = record.to_values();
        let cells = columns
            .iter()
            .map(|c| (c.name, display_value(values.get(c.name))))
            .collect();
        Self {
            id: record.id().clone(),
            values,
            cells,
        }
    }

    pub fn cell(&self, field: &str) -> &str {
        self.cells
            .iter()
            .find(|(name, _)| *name == field)
            .map(|(_, text)| text.as_str())
            .unwrap_or("")
    }

    /// Key for keyed rendering: changes whenever a displayed cell changes
    pub fn render_key(&self) -> (RecordId, Vec<String>) {
        (
            self.id.clone(),
            self.cells.iter().map(|(_, text)| text.clone()).collect(),
        )
    }
}

impl Searchable for RecordRow {
    fn matches_filter(&self, filter: &str) -> bool {
        self.cells
            .iter()
            .any(|(_, text)| text.to_lowercase().contains(filter))
    }
}

impl Sortable for RecordRow {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match (self.values.get(field), other.values.get(field)) {
            (Some(Value::Number(a)), Some(Value::Number(b))) => a
                .as_f64()
                .partial_cmp(&b.as_f64())
                .unwrap_or(Ordering::Equal),
            _ => self
                .cell(field)
                .to_lowercase()
                .cmp(&other.cell(field).to_lowercase()),
        }
    }
}

/// Rows to display: filtered by the search query, then sorted when a
/// sort column is chosen (stored order otherwise).
pub fn build_rows<R: PortalRecord>(
    records: &[R],
    columns: &[FieldMetadata],
    filter: &str,
    min_chars: usize,
    sort: Option<(&str, bool)>,
) -> Vec<RecordRow> {
    let rows: Vec<RecordRow> = records
        .iter()
        .map(|r| RecordRow::from_record(r, columns))
        .collect();
    let mut rows = filter_list(rows, filter, min_chars);
    if let Some((field, ascending)) = sort {
        sort_list(&mut rows, field, ascending);
    }
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a006_invoice::Invoice;
    use contracts::domain::common::PortalRecord;

    fn invoice(id: &str, client: &str, amount: f64) -> Invoice {
        Invoice {
            id: id.into(),
            client: client.to_string(),
            amount: Some(amount.into()),
            ..Invoice::default()
        }
    }

    fn columns() -> Vec<FieldMetadata> {
        Invoice::fields()
            .iter()
            .copied()
            .filter(|f| f.visible_in_list())
            .collect()
    }

    fn ids(rows: &[RecordRow]) -> Vec<&str> {
        rows.iter().map(|r| r.id.as_str()).collect()
    }

    #[test]
    fn test_search_matches_any_column() {
        let records = vec![
            invoice("1", "Dupont SARL", 900.0),
            invoice("2", "Martin & Fils", 1500.0),
        ];
        let rows = build_rows(&records, &columns(), "dupo", 3, None);
        assert_eq!(ids(&rows), ["1"]);

        let rows = build_rows(&records, &columns(), "du", 3, None);
        assert_eq!(ids(&rows), ["1", "2"]);
    }

    #[test]
    fn test_amounts_sort_numerically() {
        let records = vec![
            invoice("1", "A", 900.0),
            invoice("2", "B", 10000.0),
            invoice("3", "C", 1500.0),
        ];
        let rows = build_rows(&records, &columns(), "", 3, Some(("amount", true)));
        assert_eq!(ids(&rows), ["1", "3", "2"]);

        let rows = build_rows(&records, &columns(), "", 3, Some(("client", false)));
        assert_eq!(ids(&rows), ["3", "2", "1"]);
    }

    #[test]
    fn test_render_key_follows_content() {
        let before = RecordRow::from_record(&invoice("1", "A", 900.0), &columns());
        let after = RecordRow::from_record(&invoice("1", "A", 950.0), &columns());
        assert_ne!(before.render_key(), after.render_key());
        assert_eq!(before.id, after.id);
    }
}
