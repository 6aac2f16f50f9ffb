// Console preview and JSON summary output for decoded batches.
use crate::numeric::{format_decimal, format_grouped};
use crate::types::Record;
use serde::Serialize;
use std::error::Error;
use tabled::{settings::Style, Table, Tabled};

/// Display row for the console preview of a decoded batch.
#[derive(Debug, Clone, Serialize, Tabled)]
pub struct RecordPreview {
    #[tabled(rename = "Key")]
    pub key: String,
    #[tabled(rename = "Day")]
    pub day: String,
    #[tabled(rename = "Impressions")]
    pub impressions: String,
    #[tabled(rename = "Clicks")]
    pub clicks: String,
    #[tabled(rename = "Cost")]
    pub cost: String,
    #[tabled(rename = "Ctr")]
    pub ctr: String,
}

impl RecordPreview {
    pub fn new(record: &Record, key: &str) -> Self {
        Self {
            key: key.to_string(),
            day: record.day.clone().unwrap_or_default(),
            impressions: record
                .impressions
                .map(|n| n.to_string())
                .unwrap_or_default(),
            clicks: record.clicks.map(|n| n.to_string()).unwrap_or_default(),
            cost: record.cost.map(format_grouped).unwrap_or_default(),
            ctr: format_decimal(record.ctr),
        }
    }
}

pub fn write_json<T: Serialize>(path: &str, value: &T) -> Result<(), Box<dyn Error>> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}
