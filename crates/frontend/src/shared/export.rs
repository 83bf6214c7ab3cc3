//! CSV export of record lists (opens in Excel)
use contracts::domain::common::PortalRecord;
use contracts::shared::metadata::display_value;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

/// Column separator understood by Excel in French locales
const SEPARATOR: &str = ";";

/// Build the CSV text: UTF-8 BOM, header line, one line per row
pub fn build_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut csv_content = String::new();
    // BOM so that Excel reads accents correctly
    csv_content.push('\u{FEFF}');

    let headers: Vec<String> = headers.iter().map(|h| escape_csv_cell(h)).collect();
    csv_content.push_str(&headers.join(SEPARATOR));
    csv_content.push('\n');

    for row in rows {
        let escaped_row: Vec<String> = row.iter().map(|cell| escape_csv_cell(cell)).collect();
        csv_content.push_str(&escaped_row.join(SEPARATOR));
        csv_content.push('\n');
    }
    csv_content
}

/// Header and rows of a record list: one column per list-visible field
pub fn records_to_rows<R: PortalRecord>(records: &[R]) -> (Vec<&'static str>, Vec<Vec<String>>) {
    let columns: Vec<_> = R::fields().iter().filter(|f| f.visible_in_list()).collect();
    let headers = columns.iter().map(|f| f.ui.label).collect();
    let rows = records
        .iter()
        .map(|record| {
            let values = record.to_values();
            columns
                .iter()
                .map(|f| display_value(values.get(f.name)))
                .collect()
        })
        .collect();
    (headers, rows)
}

/// Export the records to a CSV file and start the download
pub fn export_records<R: PortalRecord>(records: &[R], filename: &str) -> Result<(), String> {
    if records.is_empty() {
        return Err("Aucune donnée à exporter".to_string());
    }
    let (headers, rows) = records_to_rows(records);
    let blob = create_csv_blob(&build_csv(&headers, &rows))?;
    download_blob(&blob, filename)
}

/// Quote a cell holding the separator, a quote or a line break
fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(';') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        let escaped = cell.replace('"', "\"\"");
        format!("\"{}\"", escaped)
    } else {
        cell.to_string()
    }
}

fn create_csv_blob(content: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;
    let body = document.body().ok_or("No body element")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a004_member::Member;
    use contracts::domain::common::Tag;

    #[test]
    fn test_escape_csv_cell() {
        assert_eq!(escape_csv_cell("plain"), "plain");
        assert_eq!(escape_csv_cell("a;b"), "\"a;b\"");
        assert_eq!(escape_csv_cell("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_csv_cell("two\nlines"), "\"two\nlines\"");
    }

    #[test]
    fn test_build_csv_layout() {
        let csv = build_csv(
            &["Nom", "Note"],
            &[vec!["Jean".to_string(), "a;b".to_string()]],
        );
        assert!(csv.starts_with('\u{FEFF}'));
        assert_eq!(csv.trim_start_matches('\u{FEFF}'), "Nom;Note\nJean;\"a;b\"\n");
    }

    #[test]
    fn test_member_rows_use_list_columns() {
        let member = Member {
            name: "Jean Dupont".to_string(),
            email: "jean@x.com".to_string(),
            skills: vec![Tag::new("Rust"), Tag::new("SQL")],
            ..Member::default()
        };
        let (headers, rows) = records_to_rows(&[member]);
        assert_eq!(headers.len(), rows[0].len());
        assert!(rows[0].contains(&"Jean Dupont".to_string()));
    }
}
