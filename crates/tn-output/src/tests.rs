//! Integration tests for tn-output.

#[cfg(test)]
mod fixtures {
    use tn_analytics::{ImpactReport, SimulatorInputs};
    use tn_data::{ExecutiveMetrics, HubRollup};

    pub fn rollups() -> Vec<HubRollup> {
        vec![
            HubRollup {
                target_hub:                "CBD".into(),
                total_feeder_routes:       3,
                total_population_served:   1_000.0,
                avg_feeder_distance:       4.5,
                estimated_daily_ridership: 150.0,
            },
            HubRollup {
                target_hub:                "Westlands".into(),
                total_feeder_routes:       1,
                total_population_served:   200.0,
                avg_feeder_distance:       2.0,
                estimated_daily_ridership: 30.0,
            },
        ]
    }

    pub fn report() -> ImpactReport {
        let metrics = ExecutiveMetrics {
            total_network_km:           100.0,
            avg_tier1_commute_km:       6.0,
            avg_tier3_commute_km:       9.0,
            commute_penalty_multiplier: 1.5,
            total_daily_ridership_est:  400_000.0,
        };
        ImpactReport::compute(&metrics, SimulatorInputs::default())
    }
}

// ── Row flattening ────────────────────────────────────────────────────────────

#[cfg(test)]
mod rows {
    use super::fixtures;
    use crate::impact_rows;

    #[test]
    fn inputs_come_first() {
        let rows = impact_rows(&fixtures::report());
        assert_eq!(rows[0].metric, "adoption_rate_percent");
        assert_eq!(rows[0].value, 15.0);
        assert_eq!(rows[3].metric, "selected_tier_count");
        assert_eq!(rows[3].value, 1.0);
    }

    #[test]
    fn metric_names_unique() {
        let rows = impact_rows(&fixtures::report());
        let mut names: Vec<&str> = rows.iter().map(|r| r.metric).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), rows.len());
    }
}

// ── CSV tests ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::fixtures;
    use crate::csv::{CsvReportWriter, HUB_ROLLUPS_FILE, IMPACT_FILE};
    use crate::writer::ReportWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvReportWriter::new(dir.path()).unwrap();
        assert!(dir.path().join(HUB_ROLLUPS_FILE).exists());
        assert!(dir.path().join(IMPACT_FILE).exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvReportWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(HUB_ROLLUPS_FILE)).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(
            headers,
            [
                "target_hub",
                "total_feeder_routes",
                "total_population_served",
                "avg_feeder_distance",
                "estimated_daily_ridership",
            ]
        );

        let mut rdr2 = csv::Reader::from_path(dir.path().join(IMPACT_FILE)).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["metric", "value"]);
    }

    #[test]
    fn hub_rollups_written_in_order() {
        let dir = tmp();
        let mut w = CsvReportWriter::new(dir.path()).unwrap();
        w.write_hub_rollups(&fixtures::rollups()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(HUB_ROLLUPS_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][0], "CBD");
        assert_eq!(&rows[0][1], "3");
        assert_eq!(&rows[0][3], "4.5");
        assert_eq!(&rows[1][0], "Westlands");
    }

    #[test]
    fn written_rollups_reload_as_hub_stats() {
        let dir = tmp();
        let mut w = CsvReportWriter::new(dir.path()).unwrap();
        w.write_hub_rollups(&fixtures::rollups()).unwrap();
        w.finish().unwrap();

        let back = tn_data::load_hub_stats(&dir.path().join(HUB_ROLLUPS_FILE)).unwrap();
        assert_eq!(back, fixtures::rollups());
    }

    #[test]
    fn impact_rows_written() {
        let dir = tmp();
        let mut w = CsvReportWriter::new(dir.path()).unwrap();
        w.write_impact(&fixtures::report()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join(IMPACT_FILE)).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        let week = rows.iter().find(|r| &r[0] == "hours_saved_per_week").unwrap();
        let hours: f64 = week[1].parse().unwrap();
        assert!((hours - 4.5).abs() < 1e-9);
    }

    #[test]
    fn finish_is_idempotent() {
        let dir = tmp();
        let mut w = CsvReportWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }
}

// ── JSON tests ────────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "json"))]
mod json_tests {
    use super::fixtures;
    use crate::json::{JsonReportWriter, REPORT_FILE};
    use crate::writer::ReportWriter;

    #[test]
    fn report_contains_both_sections() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = JsonReportWriter::new(dir.path()).unwrap();
        w.write_hub_rollups(&fixtures::rollups()).unwrap();
        w.write_impact(&fixtures::report()).unwrap();
        w.finish().unwrap();

        let text = std::fs::read_to_string(dir.path().join(REPORT_FILE)).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(v["hub_rollups"].as_array().unwrap().len(), 2);
        assert_eq!(v["hub_rollups"][0]["target_hub"], "CBD");
        let week = v["impact"]["hours_saved_per_week"].as_f64().unwrap();
        assert!((week - 4.5).abs() < 1e-9);
        assert_eq!(v["impact"]["inputs"]["tiers"][0], "Tier_3_MiddleIncome");
    }

    #[test]
    fn missing_impact_is_null() {
        let dir = tempfile::tempdir().unwrap();
        let mut w = JsonReportWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let text = std::fs::read_to_string(dir.path().join(REPORT_FILE)).unwrap();
        let v: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(v["impact"].is_null());
        assert!(v["hub_rollups"].as_array().unwrap().is_empty());
    }
}
