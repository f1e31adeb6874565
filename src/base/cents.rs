use crate::base;
use crate::base::util;

/// Integral representation of monetary quantities up to two decimal places.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    derive_more::From,
    derive_more::Into,
    derive_more::Neg,
    derive_more::Sum,
    derive_more::Add,
    derive_more::AddAssign,
)]
pub struct Cents(pub i64);

impl Cents {
    /// Upper bound on the sum of absolute amounts in one sheet. Every total,
    /// and every payable at up to [`base::Rate::MAX`], then fits in an `i64`.
    pub const MAX_SHEET_MAGNITUDE: Self = Self(i64::MAX / 1000);

    pub const fn abs(self) -> Self {
        Self(self.0.abs())
    }

    /// Returns `cents.to_string().len()` without actually building a string.
    pub fn charlen(self) -> usize {
        let n = self.abs().0.max(100) as u64;
        let mut len = util::count_digits(n);
        len += (len - 3) / 3; // commas
        len += 1; // decimal point
        if self.0 < 0 {
            len += 2; // parentheses
        }
        len
    }

    /// Returns `cents.charlen()` assuming a non-negative quantity has a
    /// trailing space in its string representation. Having a trailing space
    /// means regardless of sign, the string representation has 3 characters
    /// after the decimal point, meaning right-aligning is equivalent to
    /// aligning on the decimal point.
    pub fn charlen_for_alignment(self) -> usize {
        self.charlen() + (self >= Self(0)) as usize
    }

    /// Formats like [`std::fmt::Display`], with the roles of `.` and `,`
    /// swapped if `decimal_comma` is set.
    pub fn localized(self, decimal_comma: bool) -> String {
        let s = self.to_string();
        if decimal_comma {
            util::swap_separators(&s)
        } else {
            s
        }
    }

    /// Formats as a plain signed decimal without thousands separators, e.g.
    /// `-1234.56`.
    pub fn to_decimal_string(self) -> String {
        let sign = if self.0 < 0 { "-" } else { "" };
        let n = self.0.unsigned_abs();
        format!("{}{}.{:02}", sign, n / 100, n % 100)
    }

    /// Parses an amount exactly, as it appears in a sheet cell. `,` (or `.`
    /// if `decimal_comma` is set) may only separate groups of three integer
    /// digits, and at most two decimal places are allowed.
    pub fn parse_amount(s: &str, decimal_comma: bool) -> Result<Self, ParseError> {
        let (point, separator) = if decimal_comma { (',', '.') } else { ('.', ',') };
        let (negative, unsigned) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (int, frac) = unsigned.split_once(point).unwrap_or((unsigned, ""));
        if (int.is_empty() && frac.is_empty()) || frac.len() > 2 {
            return Err(ParseError::BadFormat);
        }
        let groups = int.split(separator).collect::<Vec<_>>();
        let grouped = groups.len() > 1;
        let well_grouped = groups.iter().enumerate().all(|(i, g)| match (grouped, i) {
            (false, _) => true,
            (true, 0) => (1..=3).contains(&g.len()),
            (true, _) => g.len() == 3,
        });
        let digits = groups.concat() + frac + &"00"[frac.len()..];
        if !well_grouped || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::BadFormat);
        }
        let n = digits
            .bytes()
            .try_fold(0i64, |acc, b| acc.checked_mul(10)?.checked_add(i64::from(b - b'0')))
            .ok_or(ParseError::OutOfRange)?;
        Ok(Self(if negative { -n } else { n }))
    }

    /// Converts a spreadsheet number to cents. Values with a fractional
    /// cent are rejected rather than rounded.
    pub fn from_f64(value: f64) -> Result<Self, ParseError> {
        if !value.is_finite() {
            return Err(ParseError::BadFormat);
        }
        let scaled = value * 100.0;
        let rounded = scaled.round();
        if (scaled - rounded).abs() > scaled.abs() * f64::EPSILON * 16.0 + 1e-6 {
            return Err(ParseError::BadFormat);
        }
        // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
        if rounded.abs() >= i64::MAX as f64 {
            return Err(ParseError::OutOfRange);
        }
        Ok(Self(rounded as i64))
    }

    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }

    /// Returns `rate` percent of this quantity, rounded half away from zero.
    /// Saturates at the bounds of `i64`, which ingested amounts never reach
    /// (see [`Cents::MAX_SHEET_MAGNITUDE`]).
    pub fn percent(self, rate: base::Rate) -> Self {
        let num = i128::from(self.0) * i128::from(rate.hundredths());
        let denom = 100 * 100;
        let mut q = num / denom;
        if (num % denom).abs() * 2 >= denom {
            q += num.signum();
        }
        Self(i64::try_from(q).unwrap_or(if q < 0 { i64::MIN } else { i64::MAX }))
    }
}

impl std::fmt::Display for Cents {
    /// Formats with two decimal places and thousands separators. Negative
    /// quantities are wrapped in parentheses.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut cents = self.0.unsigned_abs();
        let mut bytes = Vec::<u8>::new();
        macro_rules! pop_digit {
            () => {
                bytes.push(b'0' + (cents % 10) as u8);
                cents /= 10
            };
        }

        pop_digit!();
        pop_digit!();
        bytes.push(b'.');
        pop_digit!();
        let mut i = 1;
        while cents > 0 {
            if i % 3 == 0 {
                bytes.push(b',');
            }
            i += 1;
            pop_digit!();
        }
        bytes.reverse();
        if self.0 < 0 {
            bytes.insert(0, b'(');
            bytes.push(b')');
        }
        let s = std::str::from_utf8(&bytes).map_err(|_| std::fmt::Error)?;
        f.write_str(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("expected a number with at most two decimal places")]
    BadFormat,
    #[error("amount is too large")]
    OutOfRange,
}

impl std::str::FromStr for Cents {
    type Err = std::num::ParseIntError;

    /// Parses a cents quantity from a human-readable string, which may contain
    /// comma thousands separators and any number of decimal places. Decimal
    /// places beyond the second are discarded.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut s = s.replace(',', "");
        if !["", "+", "-", ".", "+.", "-."].contains(&s.as_str()) {
            let mut chars = s.chars().collect::<Vec<_>>();
            chars.push('0');
            chars.push('0');
            if let Some(i) = chars.iter().copied().position(|c| c == '.') {
                chars.swap(i, i + 1);
                chars.swap(i + 1, i + 2);
                chars.truncate(i + 2);
            };
            s = chars.into_iter().collect::<String>();
        }
        s.parse::<i64>().map(Self)
    }
}

impl TryFrom<&str> for Cents {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

/// Serializes as a decimal string (see [`Cents::to_decimal_string`]) so that
/// consumers never round-trip amounts through floating point.
pub fn serialize_decimal<S>(cents: &Cents, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.serialize_str(&cents.to_decimal_string())
}
