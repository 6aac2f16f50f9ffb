// Core data model: report types, decodable fields, and the decoded record.
//
// The external reporting API exposes hundreds of near-identical row shapes;
// here they collapse into one `Record` holding the union of known fields,
// with per-report-type binding tables (see `metadata`) choosing which
// source columns land where.
use crate::errors::FormatError;
use crate::numeric::{parse_count, parse_decimal, parse_percentage};
use rust_decimal::Decimal;
use serde::Serialize;
use strum_macros::{Display, EnumIter, EnumString};

/// Kind of advertising-performance report, named after the external API's
/// report-type enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportType {
    AccountPerformanceReport,
    CampaignPerformanceReport,
    AdgroupPerformanceReport,
    KeywordsPerformanceReport,
    AdPerformanceReport,
    SearchQueryPerformanceReport,
}

/// Semantic type of a decoded field, fixed at index-build time.
///
/// `Currency` and `Percentage` both decode to a `Decimal`; the distinction
/// is the routing (a percentage cell may carry a trailing `%`) and the
/// downstream display, never inferred from cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Count,
    Decimal,
    Currency,
    Percentage,
}

/// Every field a binding table may target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    AccountId,
    CampaignId,
    CampaignName,
    CampaignStatus,
    AdGroupId,
    AdGroupName,
    RowId,
    Criteria,
    Query,
    Headline,
    Day,
    Impressions,
    Clicks,
    Cost,
    AverageCpc,
    AverageCpm,
    Ctr,
    ConversionRate,
    AveragePosition,
    Conversions,
    ConversionValue,
    Network,
    NetworkPartners,
    Device,
    ClickType,
    ConversionCategory,
    ConversionTrackerId,
    ConversionSource,
    Slot,
}

impl Field {
    /// Declared kind of this field; drives which parser a cell goes through.
    pub fn kind(self) -> FieldKind {
        use Field::*;
        match self {
            AccountId | CampaignId | AdGroupId | RowId | ConversionTrackerId | Impressions
            | Clicks => FieldKind::Count,
            Cost | AverageCpc | AverageCpm => FieldKind::Currency,
            Ctr | ConversionRate => FieldKind::Percentage,
            AveragePosition | Conversions | ConversionValue => FieldKind::Decimal,
            CampaignName | CampaignStatus | AdGroupName | Criteria | Query | Headline | Day
            | Network | NetworkPartners | Device | ClickType | ConversionCategory
            | ConversionSource | Slot => FieldKind::Text,
        }
    }
}

/// One decoded report row.
///
/// Constructed empty for a report type, populated field-by-field by the
/// decoder, then treated as immutable by downstream consumers. Absent cells
/// stay `None`; the engine never invents a zero.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub report_type: ReportType,
    pub account_id: Option<i64>,
    pub campaign_id: Option<i64>,
    pub campaign_name: Option<String>,
    pub campaign_status: Option<String>,
    pub ad_group_id: Option<i64>,
    pub ad_group_name: Option<String>,
    pub row_id: Option<i64>,
    pub criteria: Option<String>,
    pub query: Option<String>,
    pub headline: Option<String>,
    pub day: Option<String>,
    pub impressions: Option<i64>,
    pub clicks: Option<i64>,
    pub cost: Option<Decimal>,
    pub average_cpc: Option<Decimal>,
    pub average_cpm: Option<Decimal>,
    pub ctr: Option<Decimal>,
    pub conversion_rate: Option<Decimal>,
    pub average_position: Option<Decimal>,
    pub conversions: Option<Decimal>,
    pub conversion_value: Option<Decimal>,
    pub network: Option<String>,
    pub network_partners: Option<String>,
    pub device: Option<String>,
    pub click_type: Option<String>,
    pub conversion_category: Option<String>,
    pub conversion_tracker_id: Option<i64>,
    pub conversion_source: Option<String>,
    pub slot: Option<String>,
}

impl Record {
    pub fn new(report_type: ReportType) -> Self {
        Self {
            report_type,
            account_id: None,
            campaign_id: None,
            campaign_name: None,
            campaign_status: None,
            ad_group_id: None,
            ad_group_name: None,
            row_id: None,
            criteria: None,
            query: None,
            headline: None,
            day: None,
            impressions: None,
            clicks: None,
            cost: None,
            average_cpc: None,
            average_cpm: None,
            ctr: None,
            conversion_rate: None,
            average_position: None,
            conversions: None,
            conversion_value: None,
            network: None,
            network_partners: None,
            device: None,
            click_type: None,
            conversion_category: None,
            conversion_tracker_id: None,
            conversion_source: None,
            slot: None,
        }
    }

    /// Coerce one raw cell per `field.kind()` and store it.
    ///
    /// Empty text means "value absent" and leaves the field `None`;
    /// unparsable numeric text is a `FormatError` for the decoder to wrap
    /// with row context.
    pub(crate) fn apply(&mut self, field: Field, raw: &str) -> Result<(), FormatError> {
        match field.kind() {
            FieldKind::Text => self.set_text(field, text_value(raw)),
            FieldKind::Count => self.set_count(field, parse_count(raw)?),
            FieldKind::Decimal | FieldKind::Currency => {
                self.set_decimal(field, parse_decimal(raw)?)
            }
            FieldKind::Percentage => self.set_decimal(field, parse_percentage(raw)?),
        }
        Ok(())
    }

    fn set_text(&mut self, field: Field, v: Option<String>) {
        use Field::*;
        match field {
            CampaignName => self.campaign_name = v,
            CampaignStatus => self.campaign_status = v,
            AdGroupName => self.ad_group_name = v,
            Criteria => self.criteria = v,
            Query => self.query = v,
            Headline => self.headline = v,
            Day => self.day = v,
            Network => self.network = v,
            NetworkPartners => self.network_partners = v,
            Device => self.device = v,
            ClickType => self.click_type = v,
            ConversionCategory => self.conversion_category = v,
            ConversionSource => self.conversion_source = v,
            Slot => self.slot = v,
            // kind() routes only text fields here
            _ => {}
        }
    }

    fn set_count(&mut self, field: Field, v: Option<i64>) {
        use Field::*;
        match field {
            AccountId => self.account_id = v,
            CampaignId => self.campaign_id = v,
            AdGroupId => self.ad_group_id = v,
            RowId => self.row_id = v,
            ConversionTrackerId => self.conversion_tracker_id = v,
            Impressions => self.impressions = v,
            Clicks => self.clicks = v,
            _ => {}
        }
    }

    fn set_decimal(&mut self, field: Field, v: Option<Decimal>) {
        use Field::*;
        match field {
            Cost => self.cost = v,
            AverageCpc => self.average_cpc = v,
            AverageCpm => self.average_cpm = v,
            Ctr => self.ctr = v,
            ConversionRate => self.conversion_rate = v,
            AveragePosition => self.average_position = v,
            Conversions => self.conversions = v,
            ConversionValue => self.conversion_value = v,
            _ => {}
        }
    }
}

fn text_value(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
