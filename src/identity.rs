// Deterministic identity keys for upsert-style deduplication.
//
// A key is the account-id chain, the entity identifiers the report scopes
// by, the date label, and then the report type's fixed segmentation-field
// order. Absent values are omitted entirely, never emitted as placeholders,
// so keys stay short and comparable across report types. The field order
// per report type is part of that type's contract: it must match what was
// used for previously stored rows, so it lives here as const data.
use crate::types::{Record, ReportType};

/// Segmentation dimensions a report type may key by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentField {
    Network,
    NetworkPartners,
    ClickType,
    ConversionCategory,
    ConversionTrackerId,
    ConversionSource,
    Device,
    Slot,
}

const ACCOUNT_SEGMENTS: &[SegmentField] = &[
    SegmentField::Network,
    SegmentField::NetworkPartners,
    SegmentField::ConversionCategory,
    SegmentField::ConversionTrackerId,
    SegmentField::ConversionSource,
    SegmentField::Device,
];

const CAMPAIGN_SEGMENTS: &[SegmentField] = &[
    SegmentField::Network,
    SegmentField::NetworkPartners,
    SegmentField::ClickType,
    SegmentField::ConversionCategory,
    SegmentField::ConversionTrackerId,
    SegmentField::ConversionSource,
    SegmentField::Device,
];

const CRITERION_SEGMENTS: &[SegmentField] = &[
    SegmentField::Network,
    SegmentField::NetworkPartners,
    SegmentField::ClickType,
    SegmentField::ConversionCategory,
    SegmentField::ConversionTrackerId,
    SegmentField::ConversionSource,
    SegmentField::Device,
    SegmentField::Slot,
];

/// Fixed segmentation order for a report type.
///
/// Identical across runs and processes; changing an order silently re-keys
/// every previously stored row of that type, so treat edits as migrations.
pub fn segment_order(report_type: ReportType) -> &'static [SegmentField] {
    use ReportType::*;
    match report_type {
        AccountPerformanceReport => ACCOUNT_SEGMENTS,
        CampaignPerformanceReport | AdgroupPerformanceReport => CAMPAIGN_SEGMENTS,
        KeywordsPerformanceReport | AdPerformanceReport | SearchQueryPerformanceReport => {
            CRITERION_SEGMENTS
        }
    }
}

fn segment_value(record: &Record, field: SegmentField) -> Option<String> {
    use SegmentField::*;
    match field {
        Network => record.network.clone(),
        NetworkPartners => record.network_partners.clone(),
        ClickType => record.click_type.clone(),
        ConversionCategory => record.conversion_category.clone(),
        ConversionTrackerId => record.conversion_tracker_id.map(|id| id.to_string()),
        ConversionSource => record.conversion_source.clone(),
        Device => record.device.clone(),
        Slot => record.slot.clone(),
    }
}

/// Build the natural key for one decoded record.
///
/// `owner_ids` is the account identifier chain, outermost first;
/// `date_label` is a `yyyyMMdd` day or a resolved range label (see
/// `DateRange::label`). Pure function of its inputs: no clock, no random
/// state, no map iteration order anywhere near the output.
pub fn build_key(record: &Record, owner_ids: &[&str], date_label: &str) -> String {
    let mut parts: Vec<String> = Vec::new();
    for id in owner_ids {
        if !id.is_empty() {
            parts.push((*id).to_string());
        }
    }
    for id in [record.campaign_id, record.ad_group_id, record.row_id] {
        if let Some(id) = id {
            parts.push(id.to_string());
        }
    }
    if !date_label.is_empty() {
        parts.push(date_label.to_string());
    }
    for field in segment_order(record.report_type) {
        if let Some(value) = segment_value(record, *field) {
            if !value.is_empty() {
                parts.push(value);
            }
        }
    }
    parts.join("-")
}
