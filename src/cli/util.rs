use anyhow::Context;

use crate::base;

pub fn charset_from_config(config: &base::Config) -> base::Charset {
    let mut charset = base::Charset::default();
    if config.use_unicode_symbols {
        charset = charset.with_unicode()
    }
    if config.use_colored_output {
        charset = charset.with_color()
    }
    charset
}

/// Reads the sheet at `path` using the columns and number format in `config`.
/// Rows with unparseable dates are dropped with a warning.
pub fn read_sheet(
    fs: &base::Fs,
    path: &std::path::Path,
    config: &base::Config,
) -> anyhow::Result<base::Recordlist> {
    let opts = base::ingest::Options::try_from(config).with_context(|| {
        format!("invalid config '{}'", fs.path::<base::Config>().display())
    })?;
    let file = fs
        .open(path)
        .with_context(|| format!("failed to open '{}'", fs.resolve(path).display()))?;
    let ingested = base::ingest::read(file, &opts)
        .with_context(|| format!("failed to read '{}'", fs.resolve(path).display()))?;
    if !ingested.dropped.is_empty() {
        tracing::warn!(
            path = %path.display(),
            count = ingested.dropped.len(),
            "skipped rows with unparseable dates"
        );
    }
    tracing::debug!(
        path = %path.display(),
        format = %ingested.format,
        records = ingested.records.len(),
        "read sheet"
    );
    Ok(ingested.records)
}

/// Parses rate overrides given inline or, when prefixed with `@`, read from a
/// file. A document that is not a JSON object is ignored with a warning.
pub fn read_overrides(fs: &base::Fs, arg: &str) -> anyhow::Result<base::RateOverrides> {
    let text = match arg.strip_prefix('@') {
        Some(path) => fs
            .read_to_string(path)
            .with_context(|| format!("failed to read '{}'", fs.resolve(path).display()))?,
        None => arg.to_string(),
    };
    match base::RateOverrides::from_json(&text) {
        Ok(overrides) => Ok(overrides),
        Err(base::breakdown::OverridesError::Malformed(e)) => {
            tracing::warn!(error = %e, "ignoring malformed rate overrides");
            Ok(base::RateOverrides::new())
        }
        Err(e) => Err(e).context("invalid rate overrides"),
    }
}

/// If `fullmatch` is false, ensures all patterns start with and end with `*`,
/// except for empty patterns which are left alone. If `fullmatch` is true,
/// does not modify patterns.
pub fn preprocess_patterns<'a>(
    patterns: &'a [String],
    fullmatch: bool,
) -> std::borrow::Cow<'a, [String]> {
    if fullmatch {
        return patterns.into();
    }
    patterns
        .iter()
        .map(|s| {
            let mut s2 = s.clone();
            if s2.is_empty() {
                return s2;
            }
            if !s2.starts_with('*') {
                s2.insert(0, '*');
            }
            if !s2.ends_with('*') {
                s2.push('*');
            }
            s2
        })
        .collect::<Vec<_>>()
        .into()
}

/// Returns the labels matching any wildcard pattern in `patterns`.
pub fn filter_labels<'a, T>(labels: &[&'a str], patterns: &[T]) -> Vec<&'a str>
where
    T: AsRef<str>,
{
    let incl = patterns
        .iter()
        .map(|s| wildmatch::WildMatch::new(s.as_ref()))
        .collect::<Vec<_>>();
    labels
        .iter()
        .copied()
        .filter(|l| incl.iter().any(|p| p.matches(l)))
        .collect()
}
