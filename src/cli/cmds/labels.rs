use crate::base;
use crate::cli;

/// List the distinct labels in a sheet
#[derive(clap::Parser)]
pub struct Labels {
    #[command(flatten)]
    sheet_opts: cli::sharedopts::SheetOpts,

    /// Wildcard patterns to match labels of interest
    ///
    /// A label is listed if it matches any pattern.
    #[arg(default_value = "*", hide_default_value = true, value_name = "PATTERN")]
    patterns: Vec<String>,

    /// Match patterns against whole labels
    ///
    /// By default, a pattern only needs to match part of a label.
    #[arg(long)]
    fullmatch: bool,
}

impl Labels {
    pub fn run(&self, config: &base::Config, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        let rl = cli::util::read_sheet(fs, &self.sheet_opts.file, config)?;
        let patterns = cli::util::preprocess_patterns(&self.patterns, self.fullmatch);
        let labels = cli::util::filter_labels(&rl.labels(), &patterns);
        Ok(if labels.is_empty() {
            cli::Output::Str("No labels.".to_string())
        } else {
            cli::Output::Str(labels.join("\n"))
        })
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;

    const SHEET: &str = indoc!(
        "
        Tarih,Ders,Tutar
        2024-01-05,Math,100.00
        2024-01-10,Tüm Dersler,30.00
        2024-03-01,Physics,70.00
        2024-03-02,Math,1
        bad,Chemistry,1
        "
    );

    cli::testing::generate_testcases![
        (
            all,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "labels", "sales.csv"],
                    res: cli::testing::ResultMatcher::OkExact(cli::Output::Str(
                        "Math\nPhysics\nTüm Dersler".into()
                    )),
                }],
                initial_state: cli::testing::StrState::new().with_sheet(SHEET),
            }
        ),
        (
            patterns,
            cli::testing::Case {
                invocations: &[
                    cli::testing::Invocation {
                        args: &["", "labels", "sales.csv", "h"],
                        res: cli::testing::ResultMatcher::OkExact(cli::Output::Str(
                            "Math\nPhysics".into()
                        )),
                    },
                    cli::testing::Invocation {
                        args: &["", "labels", "sales.csv", "h", "--fullmatch"],
                        res: cli::testing::ResultMatcher::OkExact(cli::Output::Str(
                            "No labels.".into()
                        )),
                    },
                    cli::testing::Invocation {
                        args: &["", "labels", "sales.csv", "Tüm*", "Math", "--fullmatch"],
                        res: cli::testing::ResultMatcher::OkExact(cli::Output::Str(
                            "Math\nTüm Dersler".into()
                        )),
                    },
                ],
                initial_state: cli::testing::StrState::new().with_sheet(SHEET),
            }
        ),
        (
            empty_sheet,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "labels", "sales.csv"],
                    res: cli::testing::ResultMatcher::OkStrGlob("no labels."),
                }],
                initial_state: cli::testing::StrState::new().with_sheet("Tarih,Ders,Tutar\n"),
            }
        ),
    ];
}
