// Entry point: decode one report CSV end to end.
//
// The binary stands in for the surrounding orchestration: it resolves the
// requested date window, reads a previously fetched report CSV (header +
// rows), decodes every row into a typed record, builds each record's
// identity key, prints a preview table with decode counters, and writes a
// JSON summary. All engine logic lives in the library; only this file does
// I/O.
use ads_report::daterange::DateRange;
use ads_report::numeric::format_int;
use ads_report::output::{preview_table_rows, write_json, RecordPreview};
use ads_report::types::ReportType;
use ads_report::{build_key, decode, validate_tables};
use chrono::{Local, NaiveDate};
use log::warn;
use rust_decimal::Decimal;
use serde::Serialize;
use std::error::Error;
use std::str::FromStr;

const PREVIEW_ROWS: usize = 10;

#[derive(Debug, Serialize)]
struct BatchSummary {
    report_type: ReportType,
    date_label: String,
    min_date: String,
    max_date: String,
    rows_read: usize,
    rows_decoded: usize,
    rows_failed: usize,
    total_clicks: i64,
    total_cost: Decimal,
}

fn usage() -> ! {
    eprintln!("usage: ads_report <REPORT_TYPE> <CSV_PATH> [DATE_RANGE] [ACCOUNT_ID]");
    eprintln!("  REPORT_TYPE  e.g. KEYWORDS_PERFORMANCE_REPORT");
    eprintln!("  DATE_RANGE   symbolic name or yyyyMMdd,yyyyMMdd (default LAST_7_DAYS)");
    std::process::exit(2);
}

fn run(
    report_type: ReportType,
    path: &str,
    range_spec: &str,
    account_id: Option<&str>,
    today: NaiveDate,
) -> Result<(), Box<dyn Error>> {
    let range = DateRange::from_str_spec(range_spec, today)?;
    println!(
        "Report window: {} ({} .. {})",
        range.label(),
        range.min_date(),
        range.max_date()
    );

    let mut rdr = csv::ReaderBuilder::new().flexible(true).from_path(path)?;
    let header: Vec<String> = rdr.headers()?.iter().map(|c| c.to_string()).collect();

    let mut rows_read = 0usize;
    let mut rows_failed = 0usize;
    let mut total_clicks = 0i64;
    let mut total_cost = Decimal::ZERO;
    let mut previews: Vec<RecordPreview> = Vec::new();
    let mut keys = 0usize;

    for result in rdr.records() {
        rows_read += 1;
        let row: Vec<String> = result?.iter().map(|c| c.to_string()).collect();
        let record = match decode(report_type, &header, &row) {
            Ok(r) => r,
            Err(e) => {
                warn!("skipping row {}: {}", rows_read, e);
                rows_failed += 1;
                continue;
            }
        };

        // a daily row keys by its own day; otherwise the whole window
        let date_label = match record.day.as_deref() {
            Some(day) => NaiveDate::parse_from_str(day, "%Y-%m-%d")
                .map(|d| d.format("%Y%m%d").to_string())
                .unwrap_or_else(|_| range.label()),
            None => range.label(),
        };
        let owner = match account_id {
            Some(id) => id.to_string(),
            None => record
                .account_id
                .map(|id| id.to_string())
                .unwrap_or_default(),
        };
        let key = build_key(&record, &[owner.as_str()], &date_label);
        keys += 1;

        total_clicks += record.clicks.unwrap_or(0);
        total_cost += record.cost.unwrap_or(Decimal::ZERO);
        if previews.len() < PREVIEW_ROWS {
            previews.push(RecordPreview::new(&record, &key));
        }
    }

    let rows_decoded = rows_read - rows_failed;
    println!(
        "Processing {}... ({} rows read, {} decoded, {} keys built)",
        report_type,
        format_int(rows_read as i64),
        format_int(rows_decoded as i64),
        format_int(keys as i64)
    );
    if rows_failed > 0 {
        println!(
            "Note: {} rows skipped due to decode errors.",
            format_int(rows_failed as i64)
        );
    }
    println!();
    preview_table_rows(&previews, PREVIEW_ROWS);

    let summary = BatchSummary {
        report_type,
        date_label: range.label(),
        min_date: range.min_date(),
        max_date: range.max_date(),
        rows_read,
        rows_decoded,
        rows_failed,
        total_clicks,
        total_cost,
    };
    write_json("summary.json", &summary)?;
    println!("(Summary written to summary.json)");
    Ok(())
}

fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 4 {
        usage();
    }
    let report_type = match ReportType::from_str(&args[0]) {
        Ok(rt) => rt,
        Err(_) => {
            eprintln!("Unknown report type: {}", args[0]);
            usage();
        }
    };
    let path = &args[1];
    let range_spec = args.get(2).map(String::as_str).unwrap_or("LAST_7_DAYS");
    let account_id = args.get(3).map(String::as_str);

    if let Err(e) = validate_tables() {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    }

    let today = Local::now().date_naive();
    if let Err(e) = run(report_type, path, range_spec, account_id, today) {
        eprintln!("Failed to process report: {}", e);
        std::process::exit(1);
    }
}
