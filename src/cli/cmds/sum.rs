use anyhow::Context;

use crate::base;
use crate::cli;

/// View the grand total and totals per label
#[derive(clap::Parser)]
pub struct Sum {
    #[command(flatten)]
    sheet_opts: cli::sharedopts::SheetOpts,

    #[arg(
        default_value = ":",
        hide_default_value = true,
        help = cli::sharedopts::INTERVAL_HELP,
        long_help = cli::sharedopts::INTERVAL_HELP_LONG,
    )]
    interval: base::Interval,

    #[command(flatten)]
    report_opts: cli::sharedopts::ReportOpts,
}

impl Sum {
    pub fn run(&self, config: &base::Config, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let rl = cli::util::read_sheet(fs, &self.sheet_opts.file, config)?;
        let summary = base::summary::summarize(rl.slice_spanning_interval(self.interval));
        if self.report_opts.json {
            let v = serde_json::to_value(&summary).context("failed to serialize summary")?;
            return Ok(cli::Output::Json(v));
        }
        let tr_config = base::tree::forsum::Config {
            charset: cli::util::charset_from_config(config),
            summary,
            rate: self.report_opts.rate.unwrap_or(config.default_rate),
            decimal_comma: config.decimal_comma,
        };
        Ok(cli::Output::TreeForSum(tr_config))
    }
}
