//! Per-label, per-month totals for one label of interest and every label
//! carrying the marker prefix.

use crate::base;

/// Running sum and transaction count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, derive_more::AddAssign)]
pub struct Tally {
    pub total: base::Cents,
    pub count: u64,
}

/// Aggregate of one label over one calendar month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownRow {
    month: base::Month,
    label: String,
    total: base::Cents,
    count: u64,
    rate: base::Rate,
}

impl BreakdownRow {
    pub fn new(month: base::Month, label: String, tally: Tally, rate: base::Rate) -> Self {
        Self {
            month,
            label,
            total: tally.total,
            count: tally.count,
            rate,
        }
    }

    pub fn month(&self) -> base::Month {
        self.month
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn total(&self) -> base::Cents {
        self.total
    }

    pub fn count(&self) -> u64 {
        self.count
    }

    pub fn rate(&self) -> base::Rate {
        self.rate
    }

    pub fn set_rate(&mut self, rate: base::Rate) {
        self.rate = rate
    }

    /// `total * rate / 100`, rounded half away from zero.
    pub fn payable(&self) -> base::Cents {
        self.total.percent(self.rate)
    }
}

impl serde::Serialize for BreakdownRow {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("BreakdownRow", 6)?;
        s.serialize_field("month", &self.month)?;
        s.serialize_field("label", &self.label)?;
        s.serialize_field("total", &self.total.to_decimal_string())?;
        s.serialize_field("transactionCount", &self.count)?;
        s.serialize_field("rate", &self.rate)?;
        s.serialize_field("payable", &self.payable().to_decimal_string())?;
        s.end()
    }
}

/// Result of [`monthly_breakdown`]. Rows are sorted by month, then label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Breakdown {
    /// No record matched any included label.
    Empty,
    Rows(Vec<BreakdownRow>),
}

/// Column sums over every row of a [`Breakdown`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Totals {
    pub total: base::Cents,
    pub count: u64,
    /// Sum of each row's payable, not the payable of the grand total.
    pub payable: base::Cents,
}

impl Breakdown {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn rows(&self) -> &[BreakdownRow] {
        match self {
            Self::Empty => &[],
            Self::Rows(rows) => rows,
        }
    }

    pub fn rows_mut(&mut self) -> &mut [BreakdownRow] {
        match self {
            Self::Empty => &mut [],
            Self::Rows(rows) => rows,
        }
    }

    /// Applies `rate` to every row.
    pub fn set_rate_all(&mut self, rate: base::Rate) {
        self.rows_mut().iter_mut().for_each(|row| row.set_rate(rate))
    }

    pub fn totals(&self) -> Totals {
        self.rows().iter().fold(Totals::default(), |acc, row| Totals {
            total: acc.total + row.total(),
            count: acc.count + row.count(),
            payable: acc.payable + row.payable(),
        })
    }
}

impl serde::Serialize for Breakdown {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        match self {
            Self::Empty => {
                let mut s = serializer.serialize_struct("Breakdown", 2)?;
                s.serialize_field("rows", &[] as &[BreakdownRow])?;
                s.serialize_field("empty", &true)?;
                s.end()
            }
            Self::Rows(rows) => {
                let mut s = serializer.serialize_struct("Breakdown", 1)?;
                s.serialize_field("rows", rows)?;
                s.end()
            }
        }
    }
}

/// Per-label rates taking precedence over the default rate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RateOverrides(std::collections::HashMap<String, base::Rate>);

#[derive(Debug, thiserror::Error)]
pub enum OverridesError {
    #[error("rate overrides must be a JSON object")]
    Malformed(#[source] serde_json::Error),
    #[error("invalid rate for '{label}'")]
    Rate {
        label: String,
        #[source]
        source: serde_json::Error,
    },
}

impl RateOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, label: &str) -> Option<base::Rate> {
        self.0.get(label).copied()
    }

    /// Parses an object mapping labels to rates. Rates may be JSON numbers or
    /// numeric strings.
    pub fn from_json(s: &str) -> Result<Self, OverridesError> {
        let obj = serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(s)
            .map_err(OverridesError::Malformed)?;
        obj.into_iter()
            .map(|(label, value)| match serde_json::from_value::<base::Rate>(value) {
                Ok(rate) => Ok((label, rate)),
                Err(source) => Err(OverridesError::Rate { label, source }),
            })
            .collect()
    }
}

impl FromIterator<(String, base::Rate)> for RateOverrides {
    fn from_iter<T: IntoIterator<Item = (String, base::Rate)>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Returns `target` followed by the distinct labels in `records` starting with
/// `marker_prefix`, sorted. An empty `marker_prefix` matches nothing.
pub fn inclusion_set<'a>(
    records: &'a [base::Record],
    target: &'a str,
    marker_prefix: &str,
) -> Vec<&'a str> {
    let mut marked = Vec::new();
    if !marker_prefix.is_empty() {
        marked = records
            .iter()
            .map(base::Record::label)
            .filter(|&l| l != target && l.starts_with(marker_prefix))
            .collect::<Vec<_>>();
        marked.sort_unstable();
        marked.dedup();
    }
    let mut labels = Vec::with_capacity(marked.len() + 1);
    labels.push(target);
    labels.extend(marked);
    labels
}

/// Sums and counts `records` by (month, label) for each label of
/// [`inclusion_set`]. A label's rate is its override if one exists, otherwise
/// `default_rate`.
pub fn monthly_breakdown(
    records: &[base::Record],
    target: &str,
    default_rate: base::Rate,
    marker_prefix: &str,
    overrides: &RateOverrides,
) -> Breakdown {
    let included = inclusion_set(records, target, marker_prefix);
    tracing::debug!(labels = ?included, "monthly breakdown");
    let agg = records
        .iter()
        .filter(|r| included.contains(&r.label()))
        .map(|r| {
            let tally = Tally {
                total: r.amount(),
                count: 1,
            };
            ((base::Month::of(r.date()), r.label()), tally)
        })
        .collect::<base::Aggregate<_, Tally>>();
    if agg.is_empty() {
        return Breakdown::Empty;
    }
    let rows = agg
        .sorted()
        .into_iter()
        .map(|((month, label), tally)| {
            let rate = overrides.get(label).unwrap_or(default_rate);
            BreakdownRow::new(month, label.to_string(), tally, rate)
        })
        .collect();
    Breakdown::Rows(rows)
}
