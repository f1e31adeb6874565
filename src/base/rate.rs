use crate::base;

/// A royalty percentage with two decimal places, stored in hundredths of a
/// percent. Values are guaranteed to be between `0` and [`Rate::MAX`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Rate(i64);

impl Rate {
    pub const ZERO: Self = Self(0);

    /// 1000%
    pub const MAX: Self = Self(1000 * 100);

    pub fn from_hundredths(n: i64) -> Option<Self> {
        let rate = Self(n);
        if rate >= Self::ZERO && rate <= Self::MAX {
            Some(rate)
        } else {
            None
        }
    }

    pub const fn hundredths(self) -> i64 {
        self.0
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn localized(self, decimal_comma: bool) -> String {
        let s = self.to_string();
        if decimal_comma {
            base::util::swap_separators(&s)
        } else {
            s
        }
    }
}

impl std::fmt::Display for Rate {
    /// Formats with two decimal places and no thousands separators.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error(transparent)]
    BadFormat(#[from] std::num::ParseIntError),
    #[error("rate must be between 0 and 1000")]
    OutOfRange,
}

impl std::str::FromStr for Rate {
    type Err = ParseError;

    /// Parses a percentage such as `20`, `12.5` or `7.25`. A trailing `%` is
    /// allowed. Decimal places beyond the second are discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let s = s.strip_suffix('%').unwrap_or(s).trim_end();
        let n = s.parse::<base::Cents>()?.0;
        Self::from_hundredths(n).ok_or(ParseError::OutOfRange)
    }
}

impl TryFrom<&str> for Rate {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

impl serde::Serialize for Rate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> serde::Deserialize<'de> for Rate {
    /// Accepts either a JSON number or a numeric string.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(serde_json::Number),
            String(String),
        }

        let s = match Repr::deserialize(deserializer)? {
            Repr::Number(n) => n.to_string(),
            Repr::String(s) => s,
        };
        s.parse().map_err(serde::de::Error::custom)
    }
}
