//! `tn-output` — report writers for hub rollups and impact results.
//!
//! Two backends are provided:
//!
//! | Feature  | Backend | Files created                        |
//! |----------|---------|--------------------------------------|
//! | *(none)* | CSV     | `hub_rollups.csv`, `impact.csv`      |
//! | `json`   | JSON    | `report.json`                        |
//!
//! Both implement [`ReportWriter`].
//!
//! # Usage
//!
//! ```rust,ignore
//! use tn_output::{CsvReportWriter, ReportWriter};
//!
//! let mut w = CsvReportWriter::new(Path::new("./out"))?;
//! w.write_hub_rollups(&rollups)?;
//! w.write_impact(&report)?;
//! w.finish()?;
//! ```

pub mod csv;
pub mod error;
pub mod row;
pub mod writer;

#[cfg(feature = "json")]
pub mod json;

#[cfg(test)]
mod tests;

pub use csv::CsvReportWriter;
pub use error::{OutputError, OutputResult};
pub use row::{MetricRow, impact_rows};
pub use writer::ReportWriter;

#[cfg(feature = "json")]
pub use json::JsonReportWriter;
