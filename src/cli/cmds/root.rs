use anyhow::Context;

use crate::base;
use crate::cli;

/// Sales and royalty reports from spreadsheet exports
#[derive(clap::Parser)]
#[command(color = clap::ColorChoice::Never)]
pub struct Root {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand)]
enum Commands {
    Init(cli::cmds::init::Init),
    Sum(cli::cmds::sum::Sum),
    Monthly(cli::cmds::monthly::Monthly),
    Labels(cli::cmds::labels::Labels),
}

impl Root {
    pub fn run(self, fs: &base::Fs) -> anyhow::Result<cli::Output> {
        if let Commands::Init(cmd) = self.command {
            return cmd.run(fs);
        }

        let path = fs.path::<base::Config>();
        let config = fs
            .read::<base::Config>()
            .with_context(|| format!("failed to read '{}'", path.display()))?;
        tracing::debug!(path = %path.display(), exists = path.exists(), "loaded config");

        match self.command {
            Commands::Init(_) => unreachable!(),
            Commands::Sum(cmd) => cmd.run(&config, fs),
            Commands::Monthly(cmd) => cmd.run(&config, fs),
            Commands::Labels(cmd) => cmd.run(&config, fs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_config() {
        let (fs, _td) = cli::testing::tempfs();
        std::fs::write(fs.path::<base::Config>(), "{").unwrap();
        let root = <Root as clap::Parser>::try_parse_from(["", "labels", "sales.csv"]).unwrap();
        let res = root.run(&fs);
        assert!(matches!(res, Err(ref e) if e.to_string().starts_with("failed to read")));

        // init --reset-config recovers from a malformed config.
        let root = <Root as clap::Parser>::try_parse_from(["", "init", "--reset-config"]).unwrap();
        assert!(root.run(&fs).is_ok());
        assert!(fs.read::<base::Config>().is_ok());
    }

    cli::testing::generate_testcases![
        (
            missing_sheet,
            cli::testing::Case {
                invocations: &[
                    cli::testing::Invocation {
                        args: &["", "sum", "sales.csv"],
                        res: cli::testing::ResultMatcher::ErrGlob(
                            "failed to open '*sales.csv': *"
                        ),
                    },
                    cli::testing::Invocation {
                        args: &["", "monthly", "sales.csv", "Math"],
                        res: cli::testing::ResultMatcher::ErrGlob(
                            "failed to open '*sales.csv': *"
                        ),
                    },
                    cli::testing::Invocation {
                        args: &["", "labels", "sales.csv"],
                        res: cli::testing::ResultMatcher::ErrGlob(
                            "failed to open '*sales.csv': *"
                        ),
                    },
                ],
                initial_state: cli::testing::StrState::new(),
            }
        ),
        (
            missing_columns,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "sum", "sales.csv"],
                    res: cli::testing::ResultMatcher::ErrGlob(
                        "failed to read '*sales.csv': missing required column(s): 'Tutar'"
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_sheet("Tarih,Ders,Amount\n2024-01-05,Math,1\n"),
            }
        ),
        (
            invalid_amount,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "monthly", "sales.csv", "Math"],
                    res: cli::testing::ResultMatcher::ErrGlob(
                        "failed to read '*sales.csv': invalid amount 'ten' at line 2: *"
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_sheet("Tarih,Ders,Tutar\n2024-01-05,Math,ten\n"),
            }
        ),
        (
            comma_decimal_amount,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "sum", "sales.csv"],
                    res: cli::testing::ResultMatcher::ErrGlob(
                        "failed to read '*sales.csv': invalid amount '12,5' at line 3: \
                         expected a number with at most two decimal places"
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_sheet("Tarih,Ders,Tutar\n2024-01-05,Math,\"1,200\"\n2024-01-06,Math,\"12,5\"\n"),
            }
        ),
        (
            sheet_too_large,
            cli::testing::Case {
                invocations: &[cli::testing::Invocation {
                    args: &["", "sum", "sales.csv"],
                    res: cli::testing::ResultMatcher::ErrGlob(
                        "failed to read '*sales.csv': input is larger than 16 bytes"
                    ),
                }],
                initial_state: cli::testing::StrState::new()
                    .with_config(r#"{"maxInputBytes": 16}"#)
                    .with_sheet("Tarih,Ders,Tutar\n2024-01-05,Math,1\n"),
            }
        ),
    ];
}
