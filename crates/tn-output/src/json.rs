//! JSON report backend (feature = `"json"`).
//!
//! Buffers both sections and writes a single `report.json` on
//! [`finish`](ReportWriter::finish):
//!
//! ```json
//! { "hub_rollups": [ { "target_hub": "CBD", ... } ], "impact": { ... } }
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use tn_analytics::ImpactReport;
use tn_data::HubRollup;

use crate::OutputResult;
use crate::writer::ReportWriter;

pub const REPORT_FILE: &str = "report.json";

#[derive(Serialize)]
struct Report<'a> {
    hub_rollups: &'a [HubRollup],
    impact:      Option<&'a ImpactReport>,
}

/// Writes both report sections to one JSON document.
pub struct JsonReportWriter {
    path:     PathBuf,
    rollups:  Vec<HubRollup>,
    impact:   Option<ImpactReport>,
    finished: bool,
}

impl JsonReportWriter {
    /// Check `dir` is writable by creating `report.json` up front.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let path = dir.join(REPORT_FILE);
        File::create(&path)?;
        Ok(Self { path, rollups: Vec::new(), impact: None, finished: false })
    }
}

impl ReportWriter for JsonReportWriter {
    fn write_hub_rollups(&mut self, rollups: &[HubRollup]) -> OutputResult<()> {
        self.rollups.extend_from_slice(rollups);
        Ok(())
    }

    fn write_impact(&mut self, report: &ImpactReport) -> OutputResult<()> {
        self.impact = Some(*report);
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        let mut out = BufWriter::new(File::create(&self.path)?);
        let report = Report { hub_rollups: &self.rollups, impact: self.impact.as_ref() };
        serde_json::to_writer_pretty(&mut out, &report)?;
        out.flush()?;
        Ok(())
    }
}
