use crate::base;

/// A date relative to today, written as a letter followed by an optional
/// signed offset `n` (default `0`):
/// - `dn` or `Dn`: n days from today
/// - `mn`: first day of the nth month from today
/// - `Mn`: last day of the nth month from today
/// - `yn`: first day of the nth year from today
/// - `Yn`: last day of the nth year from today
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Relative {
    Day(i32),
    MonthStart(i32),
    MonthEnd(i32),
    YearStart(i32),
    YearEnd(i32),
}

impl Relative {
    /// Returns `None` if the result is out of bounds.
    pub fn resolve(self, today: base::Date) -> Option<base::Date> {
        let months = |n: i32| today.add_months(n);
        let years = |n: i32| n.checked_mul(12).and_then(months);
        match self {
            Self::Day(n) => today.add_days(n),
            Self::MonthStart(n) => months(n).map(base::Date::first_of_month),
            Self::MonthEnd(n) => months(n).map(base::Date::last_of_month),
            Self::YearStart(n) => years(n).map(base::Date::first_of_year),
            Self::YearEnd(n) => years(n).map(base::Date::last_of_year),
        }
    }

    /// Returns the whole day, month or year the resolved date falls in.
    pub fn span(self, today: base::Date) -> Option<base::Interval> {
        let dt = self.resolve(today)?;
        let (start, end) = match self {
            Self::Day(_) => (dt, dt),
            Self::MonthStart(_) | Self::MonthEnd(_) => (dt.first_of_month(), dt.last_of_month()),
            Self::YearStart(_) | Self::YearEnd(_) => (dt.first_of_year(), dt.last_of_year()),
        };
        Some(base::Interval { start, end })
    }
}

impl std::str::FromStr for Relative {
    type Err = base::date::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        let make: fn(i32) -> Self = match chars.next().ok_or(Self::Err::Empty)? {
            'd' | 'D' => Self::Day,
            'm' => Self::MonthStart,
            'M' => Self::MonthEnd,
            'y' => Self::YearStart,
            'Y' => Self::YearEnd,
            _ => return Err(Self::Err::InvalidFirstChar),
        };
        let offset = match chars.as_str() {
            "" => 0,
            n => n.parse::<i32>()?,
        };
        Ok(make(offset))
    }
}
