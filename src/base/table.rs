use crate::base;

const COLUMNS: usize = 6;
const GAP: &str = "  ";

/// Month, label, total, count, rate and payable, one row per
/// [`base::BreakdownRow`], followed by a rule and a totals footer.
pub struct Table<'a> {
    charset: &'a base::Charset,
    header: [Cell; COLUMNS],
    rows: Vec<[Cell; COLUMNS]>,
    footer: [Cell; COLUMNS],
    widths: [usize; COLUMNS],
}

#[derive(Debug, PartialEq, Eq)]
pub struct Config {
    pub charset: base::Charset,
    pub breakdown: base::Breakdown,
    pub decimal_comma: bool,
}

#[derive(Clone, Copy)]
enum Align {
    Left,
    Right,
}

const ALIGN: [Align; COLUMNS] = [
    Align::Left,
    Align::Left,
    Align::Right,
    Align::Right,
    Align::Right,
    Align::Right,
];

struct Cell {
    text: String,
    negative: bool,
}

impl Cell {
    fn text(s: impl Into<String>) -> Self {
        Self {
            text: s.into(),
            negative: false,
        }
    }

    /// Non-negative amounts get a trailing space so that right-aligned
    /// amounts line up on the decimal point.
    fn amount(amount: base::Cents, decimal_comma: bool) -> Self {
        let mut text = amount.localized(decimal_comma);
        let negative = amount < base::Cents(0);
        if !negative {
            text.push(' ');
        }
        Self { text, negative }
    }

    fn charlen(&self) -> usize {
        self.text.chars().count()
    }
}

impl Config {
    pub fn to_table(&'_ self) -> Table<'_> {
        let amount = |c: base::Cents| Cell::amount(c, self.decimal_comma);
        let rate = |r: base::Rate| amount(base::Cents(r.hundredths()));

        let header = [
            Cell::text("Month"),
            Cell::text("Label"),
            Cell::text("Total "),
            Cell::text("Count"),
            Cell::text("Rate "),
            Cell::text("Payable "),
        ];
        let rows = self
            .breakdown
            .rows()
            .iter()
            .map(|row| {
                [
                    Cell::text(row.month().to_string()),
                    Cell::text(row.label()),
                    amount(row.total()),
                    Cell::text(row.count().to_string()),
                    rate(row.rate()),
                    amount(row.payable()),
                ]
            })
            .collect::<Vec<_>>();
        let totals = self.breakdown.totals();
        let footer = [
            Cell::text("Total"),
            Cell::text(""),
            amount(totals.total),
            Cell::text(totals.count.to_string()),
            Cell::text(""),
            amount(totals.payable),
        ];

        let mut widths = [0; COLUMNS];
        for cells in std::iter::once(&header)
            .chain(rows.iter())
            .chain(std::iter::once(&footer))
        {
            for (w, cell) in widths.iter_mut().zip(cells.iter()) {
                *w = usize::max(*w, cell.charlen());
            }
        }

        Table {
            charset: &self.charset,
            header,
            rows,
            footer,
            widths,
        }
    }
}

impl Table<'_> {
    fn draw(&self, w: &mut impl std::fmt::Write, cells: &[Cell; COLUMNS]) -> std::fmt::Result {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            if i > 0 {
                line.push_str(GAP);
            }
            let pad = self.widths[i] - cell.charlen();
            let painted = self.charset.paint_amount(cell.text.clone(), cell.negative);
            match ALIGN[i] {
                Align::Left => {
                    line.push_str(&painted);
                    line.extend(std::iter::repeat_n(' ', pad));
                }
                Align::Right => {
                    line.extend(std::iter::repeat_n(' ', pad));
                    line.push_str(&painted);
                }
            }
        }
        writeln!(w, "{}", line.trim_end())
    }

    /// Width of the widest line, excluding the trailing space of the last
    /// column.
    fn rule_charlen(&self) -> usize {
        self.widths.iter().sum::<usize>() + GAP.len() * (COLUMNS - 1) - 1
    }
}

impl std::fmt::Display for Table<'_> {
    /// Writes a terminating newline.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use std::fmt::Write;
        self.draw(f, &self.header)?;
        self.rows.iter().try_for_each(|row| self.draw(f, row))?;
        for _ in 0..self.rule_charlen() {
            f.write_char(self.charset.rule)?;
        }
        f.write_char('\n')?;
        self.draw(f, &self.footer)
    }
}
