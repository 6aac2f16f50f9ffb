// Error taxonomy for the normalization engine.
//
// Configuration problems (duplicate column bindings) are fatal and surface
// at index-build time; everything else is scoped to the row or the range
// that triggered it so one bad input cannot poison a batch.
use crate::types::ReportType;
use chrono::NaiveDate;
use thiserror::Error;

/// A record type's binding table is internally inconsistent.
///
/// This is a programmer error: binding tables are compiled-in data, so a
/// duplicate can only appear through an edit to the tables themselves.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("report {report_type}: source column `{column}` is bound twice")]
    DuplicateColumn {
        report_type: ReportType,
        column: &'static str,
    },
}

/// A single cell's text cannot be coerced to its declared kind.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormatError {
    #[error("`{0}` is not a decimal number")]
    NotNumeric(String),
    #[error("`{0}` is not an integer count")]
    NotCount(String),
}

/// A row could not be decoded.
///
/// Carries enough context (report type, column, raw text) for the caller to
/// decide whether to skip the row or abort the batch. The decoder never
/// substitutes a default value for unparsable input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DecodeError {
    #[error("report {report_type}: column `{column}`: cannot decode `{raw}`: {source}")]
    Cell {
        report_type: ReportType,
        column: String,
        raw: String,
        source: FormatError,
    },
    #[error("report {report_type}: header has {header_len} columns but row has {row_len}")]
    RowWidth {
        report_type: ReportType,
        header_len: usize,
        row_len: usize,
    },
}

/// A date range could not be resolved to concrete bounds.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DateRangeError {
    #[error("range ends {end} before it starts {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
    #[error("`{0}` is not a yyyyMMdd date")]
    MalformedDate(String),
    #[error("`{0}` is not a recognized date range name")]
    UnknownName(String),
    #[error("range {0} cannot be resolved to concrete dates")]
    Unsupported(String),
    #[error("CUSTOM_DATE requires an explicit start and end")]
    CustomWithoutDates,
}
