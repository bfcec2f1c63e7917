//! CSV report backend.
//!
//! Creates two files in the configured output directory:
//! - `hub_rollups.csv`
//! - `impact.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;
use log::debug;

use tn_analytics::ImpactReport;
use tn_data::HubRollup;

use crate::OutputResult;
use crate::row::impact_rows;
use crate::writer::ReportWriter;

pub const HUB_ROLLUPS_FILE: &str = "hub_rollups.csv";
pub const IMPACT_FILE:      &str = "impact.csv";

/// Writes reports to two CSV files.
pub struct CsvReportWriter {
    rollups:  Writer<File>,
    impact:   Writer<File>,
    finished: bool,
}

impl CsvReportWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut rollups = Writer::from_path(dir.join(HUB_ROLLUPS_FILE))?;
        rollups.write_record([
            "target_hub",
            "total_feeder_routes",
            "total_population_served",
            "avg_feeder_distance",
            "estimated_daily_ridership",
        ])?;

        let mut impact = Writer::from_path(dir.join(IMPACT_FILE))?;
        impact.write_record(["metric", "value"])?;

        Ok(Self { rollups, impact, finished: false })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_hub_rollups(&mut self, rollups: &[HubRollup]) -> OutputResult<()> {
        for r in rollups {
            self.rollups.write_record(&[
                r.target_hub.clone(),
                r.total_feeder_routes.to_string(),
                r.total_population_served.to_string(),
                r.avg_feeder_distance.to_string(),
                r.estimated_daily_ridership.to_string(),
            ])?;
        }
        debug!("csv report: wrote {} hub rollup rows", rollups.len());
        Ok(())
    }

    fn write_impact(&mut self, report: &ImpactReport) -> OutputResult<()> {
        for row in impact_rows(report) {
            self.impact.write_record(&[row.metric.to_owned(), row.value.to_string()])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.rollups.flush()?;
        self.impact.flush()?;
        Ok(())
    }
}
