//! Normalization engine for advertising-performance reports.
//!
//! The engine takes flat, loosely-typed text rows for a declared report
//! type and turns them into typed records with deterministic identity keys
//! suitable for upsert-style deduplication. A symbolic date-range resolver
//! turns names like `LAST_7_DAYS` into concrete calendar bounds against an
//! explicit "today". Fetching raw reports and persisting decoded records
//! are the caller's business; nothing in here touches the network, a
//! database, or the system clock.
pub mod daterange;
pub mod decoder;
pub mod errors;
pub mod identity;
pub mod metadata;
pub mod numeric;
pub mod output;
pub mod types;

pub use daterange::{DateRange, RangeType};
pub use decoder::decode;
pub use errors::{ConfigError, DateRangeError, DecodeError, FormatError};
pub use identity::build_key;
pub use metadata::{index_for, validate_tables, FieldIndex};
pub use types::{Field, FieldKind, Record, ReportType};
