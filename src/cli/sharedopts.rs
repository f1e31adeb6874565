pub const INTERVAL_HELP: &str = "Interval of interest [default: everything]";
pub const INTERVAL_HELP_LONG: &str = "Interval of interest [default: everything]

Must be in the format 'A:B'. Each of 'A' or 'B' is either an ISO 8601 date (yyyy-mm-dd) or a relative date (see below). 'A' and 'B' are both optional, defaulting to 0000-01-01 and 9999-12-31 respectively. Both bounds are inclusive.

A relative date is one of the following ('n' is optional and defaults to 0):
dn: n days from today
mn: first day of the nth month from today
Mn: last day of the nth month from today
yn: first day of the nth year from today
Yn: last day of the nth year from today

The following shorthands are also available:
dn = dn:dn
mn = mn:Mn
yn = yn:Yn";

#[derive(clap::Args)]
pub struct SheetOpts {
    /// Sales sheet to read (CSV or xlsx, with a header row)
    ///
    /// Relative paths are resolved against the current directory. Column
    /// names, delimiter and number format come from the config. Only the
    /// first worksheet of an xlsx workbook is read.
    #[arg(value_name = "FILE")]
    pub file: std::path::PathBuf,
}

#[derive(clap::Args)]
pub struct ReportOpts {
    /// Royalty percentage applied to totals [default: config's defaultRate]
    ///
    /// Between 0 and 1000, with up to two decimal places, e.g. '20' or
    /// '12.5'.
    #[arg(short, long, value_name = "PERCENT")]
    pub rate: Option<crate::base::Rate>,

    /// Print JSON instead of a report
    #[arg(long)]
    pub json: bool,
}
