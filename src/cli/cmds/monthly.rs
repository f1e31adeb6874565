use anyhow::Context;

use crate::base;
use crate::cli;

/// View monthly totals for a label and every marked label
///
/// Labels starting with the config's markerPrefix (default 'Tüm') are always
/// included alongside LABEL.
#[derive(clap::Parser)]
pub struct Monthly {
    #[command(flatten)]
    sheet_opts: cli::sharedopts::SheetOpts,

    /// Label of interest
    label: String,

    #[arg(
        default_value = ":",
        hide_default_value = true,
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: base::Interval,

    #[command(flatten)]
    report_opts: cli::sharedopts::ReportOpts,

    /// Per-label rates overriding '--rate'
    ///
    /// A JSON object mapping labels to percentages, e.g. '{"Math": 15}', or
    /// '@PATH' to read the object from a file. A document that is not a JSON
    /// object is ignored.
    #[arg(long, value_name = "JSON|@PATH")]
    rates: Option<String>,

    /// Apply one rate to every row, replacing '--rate' and '--rates'
    #[arg(long, value_name = "PERCENT")]
    rate_all: Option<base::Rate>,
}

impl Monthly {
    pub fn run(&self, config: &base::Config, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let overrides = match self.rates {
            Some(ref arg) => cli::util::read_overrides(fs, arg)?,
            None => base::RateOverrides::new(),
        };
        let rl = cli::util::read_sheet(fs, &self.sheet_opts.file, config)?;
        let mut breakdown = base::breakdown::monthly_breakdown(
            rl.slice_spanning_interval(self.interval),
            &self.label,
            self.report_opts.rate.unwrap_or(config.default_rate),
            &config.marker_prefix,
            &overrides,
        );
        if let Some(rate) = self.rate_all {
            breakdown.set_rate_all(rate);
        }
        if self.report_opts.json {
            let v = serde_json::to_value(&breakdown).context("failed to serialize breakdown")?;
            return Ok(cli::Output::Json(v));
        }
        let table_config = base::table::Config {
            charset: cli::util::charset_from_config(config),
            breakdown,
            decimal_comma: config.decimal_comma,
        };
        Ok(cli::Output::Table(table_config))
    }
}
