// End-to-end pipeline checks: resolve a window, decode rows, build keys.
use ads_report::daterange::{DateRange, RangeType};
use ads_report::errors::DecodeError;
use ads_report::types::ReportType;
use ads_report::{build_key, decode};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

const HEADER: &[&str] = &[
    "ExternalCustomerId",
    "CampaignId",
    "AdgroupId",
    "Id",
    "Criteria",
    "Day",
    "Impressions",
    "Clicks",
    "Cost",
    "Ctr",
    "AdNetworkType1",
    "Device",
    "Slot",
];

const ROWS: &[&[&str]] = &[
    &[
        "1234567890",
        "100",
        "200",
        "300",
        "running shoes",
        "2024-03-14",
        "1,250",
        "37",
        "12.50",
        "2.96%",
        "Search",
        "Mobile",
        "Top",
    ],
    &[
        "1234567890",
        "100",
        "200",
        "301",
        "trail shoes",
        "2024-03-14",
        "640",
        "9",
        "3.75",
        "1.41%",
        "Search",
        "Desktop",
        "Other",
    ],
];

#[test]
fn batch_decodes_and_keys_deterministically() {
    let today = date(2024, 3, 15);
    let range = DateRange::from_symbolic(RangeType::Yesterday, today).unwrap();
    assert_eq!(range.label(), "20240314");

    let mut keys = Vec::new();
    for row in ROWS {
        let record = decode(ReportType::KeywordsPerformanceReport, HEADER, row).unwrap();
        assert_eq!(record.account_id, Some(1234567890));
        assert!(record.cost.is_some());
        keys.push(build_key(&record, &["1234567890"], &range.label()));
    }

    assert_eq!(
        keys[0],
        "1234567890-100-200-300-20240314-Search-Mobile-Top"
    );
    assert_eq!(
        keys[1],
        "1234567890-100-200-301-20240314-Search-Desktop-Other"
    );
    // distinct rows get distinct keys; identical input reproduces them
    assert_ne!(keys[0], keys[1]);
    let again = decode(ReportType::KeywordsPerformanceReport, HEADER, ROWS[0]).unwrap();
    assert_eq!(build_key(&again, &["1234567890"], &range.label()), keys[0]);
}

#[test]
fn rows_decode_independently() {
    // a bad row fails alone; its neighbors decode as if it never existed
    let bad: &[&str] = &[
        "1234567890",
        "100",
        "200",
        "302",
        "broken",
        "2024-03-14",
        "not-a-count",
        "1",
        "0.10",
        "0.5%",
        "Search",
        "Tablet",
        "Other",
    ];
    let err = decode(ReportType::KeywordsPerformanceReport, HEADER, bad).unwrap_err();
    match err {
        DecodeError::Cell { column, raw, .. } => {
            assert_eq!(column, "Impressions");
            assert_eq!(raw, "not-a-count");
        }
        other => panic!("expected a cell error, got {:?}", other),
    }
    let good = decode(ReportType::KeywordsPerformanceReport, HEADER, ROWS[0]).unwrap();
    assert_eq!(good.impressions, Some(1250));
}

#[test]
fn caller_chosen_column_subsets_decode_cleanly() {
    let header = ["CampaignId", "Clicks", "Cost"];
    let row = ["100", "5", "1.25"];
    let record = decode(ReportType::CampaignPerformanceReport, &header, &row).unwrap();
    assert_eq!(record.campaign_id, Some(100));
    assert_eq!(record.clicks, Some(5));
    assert_eq!(record.cost, Some(Decimal::from_str("1.25").unwrap()));
    // columns the fetch never asked for stay absent
    assert_eq!(record.impressions, None);
    assert_eq!(record.device, None);
}

#[test]
fn range_window_feeds_the_key_label_for_non_daily_rows() {
    let today = date(2024, 3, 15);
    let range = DateRange::from_str_spec("20240301,20240331", today).unwrap();
    assert_eq!(range.range_type(), RangeType::CustomDate);

    let header = ["CampaignId", "Impressions"];
    let row = ["100", "10"];
    let record = decode(ReportType::CampaignPerformanceReport, &header, &row).unwrap();
    let key = build_key(&record, &["acct"], &range.label());
    assert_eq!(key, "acct-100-20240301-20240331");
}
