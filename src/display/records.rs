//! Record display formatting

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::Record;

#[derive(Tabled)]
struct RecordRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Fields")]
    fields: String,
    #[tabled(rename = "Created")]
    created: String,
}

/// Format records of one doctype as a table
pub fn format_record_list(doctype: &str, records: &[Record]) -> String {
    if records.is_empty() {
        return format!("No {} records found.", doctype);
    }

    let rows = records.iter().map(|record| RecordRow {
        id: record.id.to_string(),
        name: record.name.clone(),
        fields: record
            .fields
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join(", "),
        created: record.created_at.format("%Y-%m-%d %H:%M").to_string(),
    });

    let mut output = Table::new(rows).with(Style::rounded()).to_string();
    output.push_str(&format!("\n{} {} record(s)", records.len(), doctype));
    output
}
