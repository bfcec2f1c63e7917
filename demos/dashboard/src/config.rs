//! Command-line configuration for `transit-dash`.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};

use tn_analytics::SimulatorInputs;
use tn_core::TierSelection;

pub const USAGE: &str = "\
usage: transit-dash [--data-dir DIR] [--tiers LIST] [--sim-tiers LIST]
                    [--adoption PCT] [--matatu-speed KMH] [--train-speed KMH]
                    [--out DIR] [--format csv|json] [--json]

  LIST is comma-separated tiers (T1,T2,T3 or Tier_1_WhiteCollar, ...), `all` or `none`.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Csv,
    Json,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardConfig {
    pub data_dir:  PathBuf,
    /// Tier filter for the hub analytics and map layers.
    pub hub_tiers: TierSelection,
    pub inputs:    SimulatorInputs,
    pub out_dir:   Option<PathBuf>,
    pub format:    ReportFormat,
    /// Print the whole view model as JSON instead of text.
    pub json:      bool,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir:  PathBuf::from("./web_exports"),
            hub_tiers: TierSelection::all(),
            inputs:    SimulatorInputs::default(),
            out_dir:   None,
            format:    ReportFormat::Csv,
            json:      false,
        }
    }
}

impl DashboardConfig {
    /// Parse `args` (without the program name).  Unknown flags are errors.
    pub fn from_args(args: &[String]) -> Result<Self> {
        let mut cfg = Self::default();
        let mut adoption = cfg.inputs.adoption_rate_percent;
        let mut matatu = cfg.inputs.matatu_speed_kmh;
        let mut train = cfg.inputs.train_speed_kmh;
        let mut sim_tiers = cfg.inputs.tiers;

        let mut it = args.iter();
        while let Some(flag) = it.next() {
            if flag == "--json" {
                cfg.json = true;
                continue;
            }
            let value = it
                .next()
                .with_context(|| format!("{flag} expects a value"))?;
            match flag.as_str() {
                "--data-dir"     => cfg.data_dir = PathBuf::from(value),
                "--out"          => cfg.out_dir = Some(PathBuf::from(value)),
                "--tiers"        => cfg.hub_tiers = parse_tiers(flag, value)?,
                "--sim-tiers"    => sim_tiers = parse_tiers(flag, value)?,
                "--adoption"     => adoption = parse_num(flag, value)?,
                "--matatu-speed" => matatu = parse_num(flag, value)?,
                "--train-speed"  => train = parse_num(flag, value)?,
                "--format" => {
                    cfg.format = match value.as_str() {
                        "csv"  => ReportFormat::Csv,
                        "json" => ReportFormat::Json,
                        other  => bail!("--format: expected csv or json, got {other:?}"),
                    }
                }
                other => bail!("unknown flag {other:?}\n{USAGE}"),
            }
        }

        cfg.inputs = SimulatorInputs::new(adoption, matatu, train, sim_tiers)?;
        Ok(cfg)
    }
}

fn parse_tiers(flag: &str, value: &str) -> Result<TierSelection> {
    TierSelection::parse_list(value).with_context(|| format!("{flag} {value:?}"))
}

fn parse_num(flag: &str, value: &str) -> Result<f64> {
    value
        .parse()
        .with_context(|| format!("{flag}: {value:?} is not a number"))
}
