mod relative;

pub use relative::Relative;

/// A date type without time or timezone information. Values are guaranteed to
/// be between `0000-01-01` and `9999-12-31`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Date(time::Date);

impl Date {
    /// 0000-01-01
    pub const MIN: Self = Self(time::macros::date!(0000-01-01));

    /// 9999-12-31
    pub const MAX: Self = Self(time::macros::date!(9999-12-31));

    pub fn year(self) -> u32 {
        self.0.year() as u32
    }

    pub fn month(self) -> u32 {
        u8::from(self.0.month()) as u32
    }

    pub fn day(self) -> u32 {
        self.0.day() as u32
    }

    fn new(inner: time::Date) -> Option<Self> {
        let dt = Self(inner);
        if dt >= Self::MIN && dt <= Self::MAX {
            Some(dt)
        } else {
            None
        }
    }

    pub fn from_ymd(year: u32, month: u32, day: u32) -> Option<Self> {
        let year = i32::try_from(year).ok()?;
        let month = u8::try_from(month)
            .ok()
            .and_then(|m| time::Month::try_from(m).ok())?;
        let day = u8::try_from(day).ok()?;
        time::Date::from_calendar_date(year, month, day)
            .ok()
            .and_then(Self::new)
    }

    /// Returns the local date, falling back to UTC if the local offset cannot
    /// be determined.
    #[cfg(not(test))]
    pub fn today() -> Self {
        let now = time::OffsetDateTime::now_local()
            .unwrap_or_else(|_| time::OffsetDateTime::now_utc());
        Self(now.date())
    }

    /// Returns the local date.
    #[cfg(test)]
    pub fn today() -> Self {
        Self::from_ymd(2015, 3, 30).expect("'today' for tests should be valid")
    }

    pub fn first_of_month(self) -> Self {
        Self(self.0.replace_day(1).expect("every month has a first day"))
    }

    pub fn last_of_month(self) -> Self {
        (28..=31)
            .rev()
            .find_map(|day| self.0.replace_day(day).ok())
            .map(Self)
            .expect("every month has at least 28 days")
    }

    pub fn first_of_year(self) -> Self {
        Self::from_ymd(self.year(), 1, 1).expect("january 1st of a valid year should be valid")
    }

    pub fn last_of_year(self) -> Self {
        Self::from_ymd(self.year(), 12, 31).expect("december 31st of a valid year should be valid")
    }

    /// Returns `None` if the result is out of bounds.
    pub fn add_days(self, n: i32) -> Option<Self> {
        self.0
            .checked_add(time::Duration::days(i64::from(n)))
            .and_then(Self::new)
    }

    /// Returns `None` if the result is out of bounds. The day is clamped to
    /// the length of the resulting month, so Jan 31 plus one month is the
    /// last day of February.
    pub fn add_months(self, n: i32) -> Option<Self> {
        let index = i64::from(self.year()) * 12 + i64::from(self.month()) - 1 + i64::from(n);
        let year = u32::try_from(index.div_euclid(12)).ok()?;
        let month = index.rem_euclid(12) as u32 + 1;
        let last = Self::from_ymd(year, month, 1)?.last_of_month();
        Self::from_ymd(year, month, self.day().min(last.day()))
    }

    /// Converts a spreadsheet date serial in the 1900 date system, where `1`
    /// is 1900-01-01. The time of day is discarded. Serial `60` names the
    /// nonexistent 1900-02-29 and yields `None`.
    pub fn from_excel_serial(serial: f64) -> Option<Self> {
        if !serial.is_finite() || serial < 1.0 || serial >= 3e6 {
            return None;
        }
        let days = serial.floor() as i64;
        let epoch = match days {
            ..=59 => time::macros::date!(1899-12-31),
            60 => return None,
            _ => time::macros::date!(1899-12-30),
        };
        epoch
            .checked_add(time::Duration::days(days))
            .and_then(Self::new)
    }

    /// Parses a date from a spreadsheet cell. More formats are accepted than
    /// by [`std::str::FromStr`], but relative dates are not:
    /// - `yyyy-mm-dd` or `yyyy/mm/dd`, optionally followed by a time of day
    ///   separated by a space or `T`, which is discarded
    /// - `dd.mm.yyyy`, likewise optionally followed by a time of day
    ///
    /// The year must have four digits.
    pub fn parse_cell(s: &str) -> Option<Self> {
        let head = s.trim().split([' ', 'T']).next()?;
        if let Some([y, m, d]) = split3(head, '-').or_else(|| split3(head, '/')) {
            if y.len() != 4 {
                return None;
            }
            return Self::from_ymd(number(y)?, number(m)?, number(d)?);
        }
        let [d, m, y] = split3(head, '.')?;
        if y.len() != 4 {
            return None;
        }
        Self::from_ymd(number(y)?, number(m)?, number(d)?)
    }
}

fn split3(s: &str, sep: char) -> Option<[&str; 3]> {
    let mut it = s.split(sep);
    let parts = [it.next()?, it.next()?, it.next()?];
    match it.next() {
        Some(_) => None,
        None => Some(parts),
    }
}

fn number(s: &str) -> Option<u32> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year(), self.month(), self.day())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("input is empty")]
    Empty,
    #[error("expected yyyy-mm-dd")]
    BadFormat,
    #[error("not a calendar date between 0000-01-01 and 9999-12-31")]
    InvalidDate,
    #[error("first character is not one of {{y, Y, m, M, d, D}}")]
    InvalidFirstChar,
    #[error(transparent)]
    InvalidOffset(#[from] std::num::ParseIntError),
    #[error("relative date is out of range")]
    OutOfRange,
}

impl std::str::FromStr for Date {
    type Err = ParseError;

    /// Parses a string to a date. Inputs must be either `yyyy-mm-dd` or a
    /// [`Relative`] date.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(Self::Err::Empty);
        }
        if s.as_bytes()[0].is_ascii_digit() {
            let [y, m, d] = split3(s, '-').ok_or(Self::Err::BadFormat)?;
            let (y, m, d) = match (number(y), number(m), number(d)) {
                (Some(y), Some(m), Some(d)) => (y, m, d),
                _ => return Err(Self::Err::BadFormat),
            };
            return Self::from_ymd(y, m, d).ok_or(Self::Err::InvalidDate);
        }

        s.parse::<Relative>()?
            .resolve(Self::today())
            .ok_or(Self::Err::OutOfRange)
    }
}

impl TryFrom<&str> for Date {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}
