use crate::base;

/// Output of a successful command invocation, to be written to stdout.
#[derive(Debug, PartialEq, Eq)]
pub enum Output {
    Str(String),
    Json(serde_json::Value),
    TreeForSum(base::tree::forsum::Config),
    Table(base::table::Config),
}

impl std::fmt::Display for Output {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Output::Str(s) => {
                if s.ends_with('\n') {
                    write!(f, "{}", s)
                } else {
                    writeln!(f, "{}", s)
                }
            }
            Output::Json(v) => {
                let s = serde_json::to_string_pretty(v).map_err(|_| std::fmt::Error)?;
                writeln!(f, "{}", s)
            }
            Output::TreeForSum(config) => write!(f, "{}", config.to_tree()),
            Output::Table(config) => {
                if config.breakdown.is_empty() {
                    writeln!(f, "No records in range.")
                } else {
                    write!(f, "{}", config.to_table())
                }
            }
        }
    }
}
