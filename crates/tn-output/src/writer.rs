//! The `ReportWriter` trait implemented by all backend writers.

use tn_analytics::ImpactReport;
use tn_data::HubRollup;

use crate::OutputResult;

/// Trait implemented by the CSV and JSON writers.
pub trait ReportWriter {
    /// Write hub rollups, in the order given.
    fn write_hub_rollups(&mut self, rollups: &[HubRollup]) -> OutputResult<()>;

    /// Write one impact simulator result.
    fn write_impact(&mut self, report: &ImpactReport) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
