use crate::base;

/// A single sales transaction. Immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    date: base::Date,
    label: String,
    amount: base::Cents,
}

impl Record {
    pub fn date(&self) -> base::Date {
        self.date
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn amount(&self) -> base::Cents {
        self.amount
    }

    pub fn new(date: base::Date, label: String, amount: base::Cents) -> Self {
        Self {
            date,
            label,
            amount,
        }
    }
}

impl std::fmt::Display for Record {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {:?} {}", self.date, self.label, self.amount)
    }
}
