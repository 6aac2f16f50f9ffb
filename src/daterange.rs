// Symbolic date-range resolution with calendar-aware boundaries.
//
// Every function here is pure over an explicit `today` reference date; the
// system clock is never read inside the engine, which keeps resolution
// deterministic and testable. Week math distinguishes the ISO Monday-based
// week from the Sunday-based week because the external API exposes both.
use crate::errors::DateRangeError;
use chrono::{Datelike, Duration, NaiveDate};
use serde::Serialize;
use std::str::FromStr;
use strum_macros::{Display, EnumString};

/// Symbolic range names understood by the resolver.
///
/// `LastBusinessWeek` and `AllTime` are recognized names that deliberately
/// do not resolve to concrete bounds; `CustomDate` marks an explicit
/// start/end pair supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumString, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RangeType {
    CustomDate,
    Today,
    Yesterday,
    #[strum(serialize = "LAST_7_DAYS")]
    #[serde(rename = "LAST_7_DAYS")]
    Last7Days,
    #[strum(serialize = "LAST_14_DAYS")]
    #[serde(rename = "LAST_14_DAYS")]
    Last14Days,
    #[strum(serialize = "LAST_30_DAYS")]
    #[serde(rename = "LAST_30_DAYS")]
    Last30Days,
    LastWeek,
    ThisMonth,
    LastMonth,
    ThisWeekMonToday,
    ThisWeekSunToday,
    LastWeekSunSat,
    LastBusinessWeek,
    AllTime,
}

/// A concrete, validated date window. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
    range_type: RangeType,
}

impl DateRange {
    /// Range from an explicit pair; the range type is always custom.
    pub fn from_explicit(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if end < start {
            return Err(DateRangeError::EndBeforeStart { start, end });
        }
        Ok(Self {
            start,
            end,
            range_type: RangeType::CustomDate,
        })
    }

    /// Resolve a symbolic name against `today`.
    pub fn from_symbolic(
        range_type: RangeType,
        today: NaiveDate,
    ) -> Result<Self, DateRangeError> {
        use RangeType::*;
        let yesterday = today - Duration::days(1);
        let (start, end) = match range_type {
            Today => (today, today),
            Yesterday => (yesterday, yesterday),
            Last7Days => (today - Duration::days(7), yesterday),
            Last14Days => (today - Duration::days(14), yesterday),
            Last30Days => (today - Duration::days(30), yesterday),
            LastWeek => {
                let monday = start_of_iso_week(today) - Duration::days(7);
                (monday, monday + Duration::days(6))
            }
            ThisMonth => (start_of_month(today), end_of_month(today)),
            LastMonth => {
                let last_of_prev = start_of_month(today) - Duration::days(1);
                (start_of_month(last_of_prev), last_of_prev)
            }
            ThisWeekMonToday => (start_of_iso_week(today), today),
            ThisWeekSunToday => (start_of_sunday_week(today), today),
            LastWeekSunSat => {
                let sunday = start_of_sunday_week(today) - Duration::days(7);
                (sunday, sunday + Duration::days(6))
            }
            LastBusinessWeek | AllTime => {
                return Err(DateRangeError::Unsupported(range_type.to_string()))
            }
            CustomDate => return Err(DateRangeError::CustomWithoutDates),
        };
        Ok(Self {
            start,
            end,
            range_type,
        })
    }

    /// Resolve free text: `"yyyyMMdd,yyyyMMdd"` is an explicit pair,
    /// anything else is a symbolic range name.
    pub fn from_str_spec(text: &str, today: NaiveDate) -> Result<Self, DateRangeError> {
        if let Some((a, b)) = text.split_once(',') {
            let start = parse_yyyymmdd(a.trim())?;
            let end = parse_yyyymmdd(b.trim())?;
            return Self::from_explicit(start, end);
        }
        let name = text.trim();
        let range_type = RangeType::from_str(name)
            .map_err(|_| DateRangeError::UnknownName(name.to_string()))?;
        Self::from_symbolic(range_type, today)
    }

    /// Precedence between an explicit pair and a symbolic name supplied
    /// together: the explicit pair wins and forces a custom range, except
    /// that the `CUSTOM_DATE` name routes through the custom path itself
    /// (same bounds, same tag). A symbolic name alone resolves symbolically;
    /// `CUSTOM_DATE` without a pair is an error, never a silent default.
    pub fn resolve(
        explicit: Option<(NaiveDate, NaiveDate)>,
        symbolic: Option<RangeType>,
        today: NaiveDate,
    ) -> Result<Self, DateRangeError> {
        match (explicit, symbolic) {
            (Some((start, end)), _) => Self::from_explicit(start, end),
            (None, Some(range_type)) => Self::from_symbolic(range_type, today),
            (None, None) => Err(DateRangeError::CustomWithoutDates),
        }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn range_type(&self) -> RangeType {
        self.range_type
    }

    /// `yyyyMMdd` form of the start bound, for a report-request payload.
    pub fn min_date(&self) -> String {
        self.start.format("%Y%m%d").to_string()
    }

    /// `yyyyMMdd` form of the end bound, for a report-request payload.
    pub fn max_date(&self) -> String {
        self.end.format("%Y%m%d").to_string()
    }

    /// Date label for identity keys: a single `yyyyMMdd` day when the range
    /// covers one day, otherwise `yyyyMMdd-yyyyMMdd`.
    pub fn label(&self) -> String {
        if self.start == self.end {
            self.min_date()
        } else {
            format!("{}-{}", self.min_date(), self.max_date())
        }
    }
}

fn parse_yyyymmdd(s: &str) -> Result<NaiveDate, DateRangeError> {
    NaiveDate::parse_from_str(s, "%Y%m%d")
        .map_err(|_| DateRangeError::MalformedDate(s.to_string()))
}

/// Monday of the ISO week containing `d`.
fn start_of_iso_week(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_monday() as i64)
}

/// Sunday that starts the Sunday-based week containing `d`.
fn start_of_sunday_week(d: NaiveDate) -> NaiveDate {
    d - Duration::days(d.weekday().num_days_from_sunday() as i64)
}

fn start_of_month(d: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(d.year(), d.month(), 1).unwrap_or(d)
}

fn end_of_month(d: NaiveDate) -> NaiveDate {
    let (year, month) = if d.month() == 12 {
        (d.year() + 1, 1)
    } else {
        (d.year(), d.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .map(|first_of_next| first_of_next - Duration::days(1))
        .unwrap_or(d)
}
