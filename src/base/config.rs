use crate::base;

/// Application config.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub date_column: String,
    pub label_column: String,
    pub amount_column: String,
    pub delimiter: char,
    pub decimal_comma: bool,
    /// Labels starting with this prefix are part of every monthly breakdown.
    /// Empty disables the rule.
    pub marker_prefix: String,
    pub default_rate: base::Rate,
    pub max_input_bytes: u64,
    pub use_colored_output: bool,
    pub use_unicode_symbols: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_column: "Tarih".into(),
            label_column: "Ders".into(),
            amount_column: "Tutar".into(),
            delimiter: ',',
            decimal_comma: false,
            marker_prefix: "Tüm".into(),
            default_rate: base::Rate::ZERO,
            max_input_bytes: 32 * 1024 * 1024,
            use_colored_output: false,
            use_unicode_symbols: false,
        }
    }
}

impl std::fmt::Display for Config {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = serde_json::to_string_pretty(self).map_err(|_| std::fmt::Error)?;
        writeln!(f, "{}", s)
    }
}

impl std::str::FromStr for Config {
    type Err = serde_json::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_str(s)
    }
}

impl TryFrom<&str> for Config {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
