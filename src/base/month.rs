use crate::base;

/// A calendar month. Orders chronologically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Month {
    year: u32,
    month: u32,
}

impl Month {
    pub fn of(dt: base::Date) -> Self {
        Self {
            year: dt.year(),
            month: dt.month(),
        }
    }
}

impl From<base::Date> for Month {
    fn from(dt: base::Date) -> Self {
        Self::of(dt)
    }
}

impl std::fmt::Display for Month {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

#[derive(Debug, thiserror::Error)]
#[error("expected yyyy-mm")]
pub struct ParseError;

impl std::str::FromStr for Month {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (y, m) = s.split_once('-').ok_or(ParseError)?;
        let year = y.parse::<u32>().map_err(|_| ParseError)?;
        let month = m.parse::<u32>().map_err(|_| ParseError)?;
        base::Date::from_ymd(year, month, 1)
            .map(Self::of)
            .ok_or(ParseError)
    }
}

impl serde::Serialize for Month {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
