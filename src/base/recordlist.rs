use crate::base;

/// Records ordered by date. Records sharing a date keep their insertion
/// order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recordlist(Vec<base::Record>);

impl Recordlist {
    fn from_vec(mut inner: Vec<base::Record>) -> Self {
        inner.sort_by_key(base::Record::date);
        Self(inner)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn spanned_interval(&self) -> base::Interval {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => base::Interval {
                start: first.date(),
                end: last.date(),
            },
            _ => base::Interval::EMPTY,
        }
    }

    /// Returns the records whose date lies in `interval`.
    pub fn slice_spanning_interval(&self, interval: base::Interval) -> &[base::Record] {
        if interval.is_empty() {
            return &[];
        }
        let i = self.0.partition_point(|r| r.date() < interval.start);
        let j = i + self.0[i..].partition_point(|r| r.date() <= interval.end);
        &self.0[i..j]
    }

    pub fn iter(&self) -> impl Iterator<Item = &base::Record> {
        self.0.iter()
    }

    /// Returns the distinct labels, sorted.
    pub fn labels(&self) -> Vec<&str> {
        let mut labels = self.iter().map(base::Record::label).collect::<Vec<_>>();
        labels.sort_unstable();
        labels.dedup();
        labels
    }
}

impl FromIterator<base::Record> for Recordlist {
    fn from_iter<T: IntoIterator<Item = base::Record>>(iter: T) -> Self {
        Self::from_vec(iter.into_iter().collect())
    }
}

impl<'a> FromIterator<&'a base::Record> for Recordlist {
    fn from_iter<T: IntoIterator<Item = &'a base::Record>>(iter: T) -> Self {
        iter.into_iter().cloned().collect()
    }
}

impl std::fmt::Display for Recordlist {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in self.iter() {
            writeln!(f, "{}", r)?;
        }
        Ok(())
    }
}

impl std::str::FromStr for Recordlist {
    type Err = base::ingest::Error;

    /// Parses a sheet using the default column names and delimiter. Rows with
    /// unparseable dates are dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        base::ingest::read(s.as_bytes(), &base::ingest::Options::default())
            .map(|ingested| ingested.records)
    }
}

impl TryFrom<&str> for Recordlist {
    type Error = <Self as std::str::FromStr>::Err;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        value.parse::<Self>()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use indoc::indoc;
    use rstest::rstest;

    fn record(date: &str, label: &str, amount: i64) -> base::Record {
        base::Record::new(date.parse().unwrap(), label.to_string(), base::Cents(amount))
    }

    #[test]
    fn test_sort_on_construction() {
        let rl = Recordlist::from_vec(vec![
            record("2015-03-30", "aaa", 999),
            record("2014-03-30", "bbb", 888),
            record("2016-03-30", "ccc", 777),
            record("2014-03-30", "ddd", 666),
        ]);
        let want_inner = vec![
            record("2014-03-30", "bbb", 888),
            record("2014-03-30", "ddd", 666),
            record("2015-03-30", "aaa", 999),
            record("2016-03-30", "ccc", 777),
        ];
        assert_eq!(rl.0, want_inner)
    }

    #[rstest]
    #[case("Tarih,Ders,Tutar", base::Interval::EMPTY)]
    #[case(
        indoc!("
            Tarih,Ders,Tutar
            2015-03-30,abc,1.11
        "),
        "2015-03-30"
    )]
    #[case(
        indoc!("
            Tarih,Ders,Tutar
            2015-04-02,ddd,1234.56
            0000-01-31,aaa,0
            2015-03-30,b,0.01
        "),
        "0000-01-31:2015-04-02"
    )]
    fn test_spanned_interval(#[case] sheet: &str, #[case] want: base::Interval) {
        let rl = sheet.parse::<Recordlist>().unwrap();
        assert_eq!(rl.spanned_interval(), want)
    }

    #[rstest]
    #[case("Tarih,Ders,Tutar", base::Interval::MAX, 0)]
    #[case("Tarih,Ders,Tutar\n2015-03-30,abc,1", base::Interval::EMPTY, 0)]
    #[case("Tarih,Ders,Tutar\n2015-03-30,abc,1", "2000-01-01", 0)]
    #[case(
        indoc!("
            Tarih,Ders,Tutar
            0000-01-31,aaa,0
            2015-03-30,b,1
            2015-03-30,bb,1
            2015-03-31,ccc,1
            2016-04-01,ddd,1
            2017-04-02,ddd,1
        "),
        "2015-03-30:2016-04-01",
        4
    )]
    #[case(
        indoc!("
            Tarih,Ders,Tutar
            2024-01-05,Math,100.00
            2024-01-20,Math,50.00
            2024-02-02,Math,200.00
            2024-03-01,Math,1.00
            2023-12-31,Math,1.00
        "),
        "2024-01-01:2024-02-28",
        3
    )]
    fn test_slice_spanning_interval(
        #[case] sheet: &str,
        #[case] interval: base::Interval,
        #[case] want_len: usize,
    ) {
        let rl = sheet.parse::<Recordlist>().unwrap();
        let got = rl.slice_spanning_interval(interval);
        assert_eq!(got.len(), want_len);
        assert!(got.iter().all(|r| interval.contains(r.date())));
        let outside = rl.iter().filter(|r| !interval.contains(r.date())).count();
        assert_eq!(outside + got.len(), rl.len());
    }

    #[test]
    fn test_labels() {
        let rl = [
            record("2024-01-01", "b", 1),
            record("2024-01-02", "a", 1),
            record("2024-01-03", "b", 1),
            record("2024-01-04", "Tüm", 1),
        ]
        .into_iter()
        .collect::<Recordlist>();
        assert_eq!(rl.labels(), vec!["Tüm", "a", "b"]);
        assert!(Recordlist::default().labels().is_empty());
    }

    #[test]
    fn test_to_string() {
        let rl = [record("2024-01-02", "a", 150), record("2024-01-01", "b", -1)]
            .into_iter()
            .collect::<Recordlist>();
        assert_eq!(
            rl.to_string(),
            indoc!(
                r#"
                2024-01-01 "b" (0.01)
                2024-01-02 "a" 1.50
                "#
            )
        )
    }
}
