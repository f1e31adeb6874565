use crate::base;

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct LabelTotal {
    pub label: String,
    #[serde(serialize_with = "base::cents::serialize_decimal")]
    pub total: base::Cents,
}

/// Grand total and per-label totals of a set of records.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    #[serde(serialize_with = "base::cents::serialize_decimal")]
    pub total: base::Cents,
    /// Sorted by label.
    pub per_label: Vec<LabelTotal>,
}

impl Summary {
    pub fn is_empty(&self) -> bool {
        self.per_label.is_empty()
    }
}

/// Sums `records` in total and per label. Labels group by exact match.
pub fn summarize(records: &[base::Record]) -> Summary {
    let agg = records
        .iter()
        .map(|r| (r.label(), r.amount()))
        .collect::<base::Aggregate<&str, base::Cents>>();
    Summary {
        total: agg.sum(),
        per_label: agg
            .sorted()
            .into_iter()
            .map(|(label, total)| LabelTotal {
                label: label.to_string(),
                total,
            })
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;
    use rstest::rstest;

    use super::*;

    fn lt(label: &str, total: i64) -> LabelTotal {
        LabelTotal {
            label: label.into(),
            total: base::Cents(total),
        }
    }

    #[rstest]
    #[case("Tarih,Ders,Tutar", base::Interval::MAX, 0, vec![])]
    #[case(
        indoc!("
            Tarih,Ders,Tutar
            2024-01-05,Math,100.00
            2024-01-20,Math,50.00
            2024-02-02,Math,200.00
            2024-01-10,Tüm Dersler,30.00
        "),
        "2024-01-01:2024-02-28",
        38000,
        vec![lt("Math", 35000), lt("Tüm Dersler", 3000)]
    )]
    #[case(
        indoc!("
            Tarih,Ders,Tutar
            2024-01-05,Math,100.00
            2024-01-10,Tüm Dersler,30.00
        "),
        "2025-01-01:2025-12-31",
        0,
        vec![]
    )]
    #[case(
        indoc!("
            Tarih,Ders,Tutar
            2024-01-05,b,-1.50
            2024-01-05,a,2
            2024-01-06,,3
            2024-01-07,math,4
            2024-01-08,Math,5
            2024-01-09,b,1.50
        "),
        base::Interval::MAX,
        1400,
        vec![lt("", 300), lt("Math", 500), lt("a", 200), lt("b", 0), lt("math", 400)]
    )]
    fn test_summarize(
        #[case] sheet: &str,
        #[case] interval: base::Interval,
        #[case] want_total: i64,
        #[case] want_per_label: Vec<LabelTotal>,
    ) {
        let rl = sheet.parse::<base::Recordlist>().unwrap();
        let got = summarize(rl.slice_spanning_interval(interval));
        assert_eq!(got.total, base::Cents(want_total));
        assert_eq!(got.per_label, want_per_label);
        assert_eq!(
            got.per_label.iter().map(|lt| lt.total).sum::<base::Cents>(),
            got.total
        );
    }

    #[test]
    fn test_serialize() {
        let summary = Summary {
            total: base::Cents(38000),
            per_label: vec![lt("Math", 35000), lt("Tüm Dersler", 3000)],
        };
        assert_eq!(
            serde_json::to_string(&summary).unwrap(),
            r#"{"total":"380.00","perLabel":[{"label":"Math","total":"350.00"},{"label":"Tüm Dersler","total":"30.00"}]}"#
        );
        assert!(Summary::default().is_empty());
    }
}
