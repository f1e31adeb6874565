use crate::base;

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub summary: base::Summary,
    /// When non-zero, each label also shows its payable amount.
    pub rate: base::Rate,
    pub decimal_comma: bool,
}

impl Config {
    const LABELS: &str = "Labels";
    const NET: &str = "Net";
    const TOTAL: &str = "Total";
    const RATE: &str = "Rate";
    const PAYABLE: &str = "Payable";

    pub fn to_tree(&'_ self) -> base::Tree<'_> {
        let labels = self
            .summary
            .per_label
            .iter()
            .map(|lt| (lt.label.as_str(), lt.total))
            .collect::<Vec<_>>();
        let payables = labels
            .iter()
            .map(|&(_, total)| total.percent(self.rate))
            .collect::<Vec<_>>();
        let mut net = vec![(Self::TOTAL, self.summary.total)];
        if !self.rate.is_zero() {
            // Rates share the two-decimal layout of amounts.
            net.push((Self::RATE, base::Cents(self.rate.hundredths())));
            net.push((Self::PAYABLE, payables.iter().copied().sum()));
        }

        fn char_count((label, amount): (&str, base::Cents)) -> usize {
            label.chars().count()
                + base::util::BOUNDING_SPACES_COUNT
                + base::util::MIN_DASHES_COUNT
                + amount.charlen_for_alignment()
        }
        let alignment_charlen = labels
            .iter()
            .chain(net.iter())
            .copied()
            .map(char_count)
            .max()
            .unwrap_or_default();
        let payable_charlen = payables
            .iter()
            .map(|p| p.charlen_for_alignment())
            .max()
            .unwrap_or_default();

        let mut root = base::tree::Node::default();
        if !self.summary.is_empty() {
            let node = root.push(self.charset.paint_heading(Self::LABELS).into());
            for (&(label, total), &payable) in labels.iter().zip(payables.iter()) {
                let mut data = self.leaf_data(label, total, alignment_charlen);
                if !self.rate.is_zero() {
                    if total >= base::Cents(0) {
                        data.push(' ');
                    }
                    data.push(' ');
                    for _ in payable.charlen_for_alignment()..payable_charlen {
                        data.push(' ');
                    }
                    data.push_str(&self.amount_str(payable));
                }
                node.push(data.into());
            }
        }
        let node = root.push(self.charset.paint_heading(Self::NET).into());
        for (label, amount) in net {
            node.push(self.leaf_data(label, amount, alignment_charlen).into());
        }
        base::Tree::new(&self.charset, root)
    }

    fn amount_str(&self, amount: base::Cents) -> String {
        self.charset
            .paint_amount(amount.localized(self.decimal_comma), amount < base::Cents(0))
    }

    fn leaf_data(&self, label: &str, amount: base::Cents, alignment_charlen: usize) -> String {
        let dash_count = alignment_charlen
            - label.chars().count()
            - base::util::BOUNDING_SPACES_COUNT
            - amount.charlen_for_alignment();
        let mut s = String::with_capacity(alignment_charlen);
        s.push_str(label);
        s.push(' ');
        for _ in 0..dash_count {
            s.push(self.charset.dash)
        }
        s.push(' ');
        s.push_str(&self.amount_str(amount));
        s
    }
}
