// Per-report-type column binding tables and the process-lifetime index.
//
// Each report type maps an ordered set of source column names onto target
// fields. The tables are plain data; the index built from them is computed
// once and shared read-only for the rest of the process, so per-row decoding
// never re-derives metadata.
use crate::errors::ConfigError;
use crate::types::{Field, ReportType};
use once_cell::sync::Lazy;
use std::collections::HashMap;
use strum::IntoEnumIterator;

/// Metric and segmentation columns every performance report shares.
const BASE_COLUMNS: &[(&str, Field)] = &[
    ("ExternalCustomerId", Field::AccountId),
    ("Day", Field::Day),
    ("Impressions", Field::Impressions),
    ("Clicks", Field::Clicks),
    ("Cost", Field::Cost),
    ("Ctr", Field::Ctr),
    ("AverageCpc", Field::AverageCpc),
    ("AverageCpm", Field::AverageCpm),
    ("AveragePosition", Field::AveragePosition),
    ("Conversions", Field::Conversions),
    ("ConversionValue", Field::ConversionValue),
    ("ConversionRate", Field::ConversionRate),
    ("AdNetworkType1", Field::Network),
    ("AdNetworkType2", Field::NetworkPartners),
    ("Device", Field::Device),
    ("ClickType", Field::ClickType),
    ("ConversionCategoryName", Field::ConversionCategory),
    ("ConversionTrackerId", Field::ConversionTrackerId),
    ("ExternalConversionSource", Field::ConversionSource),
];

const CAMPAIGN_COLUMNS: &[(&str, Field)] = &[
    ("CampaignId", Field::CampaignId),
    ("CampaignName", Field::CampaignName),
    ("CampaignStatus", Field::CampaignStatus),
];

const ADGROUP_COLUMNS: &[(&str, Field)] = &[
    ("AdgroupId", Field::AdGroupId),
    ("AdgroupName", Field::AdGroupName),
];

/// Columns specific to one report type, appended after the shared tables.
fn extra_columns(report_type: ReportType) -> &'static [(&'static str, Field)] {
    use ReportType::*;
    match report_type {
        AccountPerformanceReport => &[],
        CampaignPerformanceReport => &[],
        AdgroupPerformanceReport => &[],
        KeywordsPerformanceReport => &[
            ("Id", Field::RowId),
            ("Criteria", Field::Criteria),
            ("Slot", Field::Slot),
        ],
        AdPerformanceReport => &[
            ("Id", Field::RowId),
            ("Headline", Field::Headline),
            ("Slot", Field::Slot),
        ],
        SearchQueryPerformanceReport => &[
            ("KeywordId", Field::RowId),
            ("Query", Field::Query),
        ],
    }
}

/// Ordered source-column binding table for one report type.
fn binding_table(report_type: ReportType) -> Vec<(&'static str, Field)> {
    use ReportType::*;
    let mut table: Vec<(&'static str, Field)> = BASE_COLUMNS.to_vec();
    match report_type {
        AccountPerformanceReport => {}
        CampaignPerformanceReport => table.extend_from_slice(CAMPAIGN_COLUMNS),
        AdgroupPerformanceReport
        | KeywordsPerformanceReport
        | AdPerformanceReport
        | SearchQueryPerformanceReport => {
            table.extend_from_slice(CAMPAIGN_COLUMNS);
            table.extend_from_slice(ADGROUP_COLUMNS);
        }
    }
    table.extend_from_slice(extra_columns(report_type));
    table
}

/// Lookup index from source column name to target field for one report type.
///
/// Immutable after construction; `index_for` hands out shared references
/// for the process lifetime.
#[derive(Debug)]
pub struct FieldIndex {
    report_type: ReportType,
    bindings: Vec<(&'static str, Field)>,
    by_column: HashMap<&'static str, Field>,
}

impl FieldIndex {
    /// Build an index, rejecting a table that binds one source column to
    /// two fields. That is a configuration error in the tables themselves,
    /// not a per-row condition, so it fails the build eagerly.
    pub fn new(
        report_type: ReportType,
        bindings: Vec<(&'static str, Field)>,
    ) -> Result<Self, ConfigError> {
        let mut by_column = HashMap::with_capacity(bindings.len());
        for &(column, field) in &bindings {
            if by_column.insert(column, field).is_some() {
                return Err(ConfigError::DuplicateColumn {
                    report_type,
                    column,
                });
            }
        }
        Ok(Self {
            report_type,
            bindings,
            by_column,
        })
    }

    pub fn report_type(&self) -> ReportType {
        self.report_type
    }

    /// Ordered (source column, target field) bindings.
    pub fn bindings(&self) -> &[(&'static str, Field)] {
        &self.bindings
    }

    /// Target field for a source column, if this report type declares one.
    pub fn get(&self, column: &str) -> Option<Field> {
        self.by_column.get(column).copied()
    }
}

static INDEXES: Lazy<HashMap<ReportType, FieldIndex>> = Lazy::new(|| {
    ReportType::iter()
        .map(|rt| {
            let index = FieldIndex::new(rt, binding_table(rt))
                .unwrap_or_else(|e| panic!("invalid binding table: {}", e));
            (rt, index)
        })
        .collect()
});

/// The cached field index for a report type.
///
/// First access builds every table once; afterwards this is a lock-free
/// read of immutable data, safe to call from any number of threads.
pub fn index_for(report_type: ReportType) -> &'static FieldIndex {
    // every enum variant is inserted by the Lazy build above
    &INDEXES[&report_type]
}

/// Validate every builtin binding table eagerly.
///
/// Callers that want configuration errors at startup rather than at first
/// decode can run this once during initialization.
pub fn validate_tables() -> Result<(), ConfigError> {
    for rt in ReportType::iter() {
        FieldIndex::new(rt, binding_table(rt))?;
    }
    Ok(())
}
