//! Decoding of sales sheets.
//!
//! A sheet is either delimited text or an xlsx workbook, told apart by the
//! zip signature at the start of the input; only the first worksheet of a
//! workbook is read. Both have a header row. Three columns are required
//! (date, label and amount), located by exact header name; any other columns
//! are ignored. Rows whose date cannot be parsed are dropped, and their line
//! numbers reported back in [`Ingested::dropped`].

use std::io::Read;

use crate::base;

/// Column names and parsing switches for reading a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    pub date_column: String,
    pub label_column: String,
    pub amount_column: String,
    /// Only applies to delimited text.
    pub delimiter: u8,
    pub decimal_comma: bool,
    /// Inputs longer than this are rejected before parsing.
    pub max_input_bytes: u64,
}

impl Default for Options {
    fn default() -> Self {
        Self::try_from(&base::Config::default()).expect("default delimiter should be ascii")
    }
}

impl TryFrom<&base::Config> for Options {
    type Error = Error;

    fn try_from(config: &base::Config) -> Result<Self, Self::Error> {
        if !config.delimiter.is_ascii() {
            return Err(Error::Delimiter(config.delimiter));
        }
        Ok(Self {
            date_column: config.date_column.clone(),
            label_column: config.label_column.clone(),
            amount_column: config.amount_column.clone(),
            delimiter: config.delimiter as u8,
            decimal_comma: config.decimal_comma,
            max_input_bytes: config.max_input_bytes,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Format {
    Csv,
    Xlsx,
}

impl Format {
    const ZIP_SIGNATURE: &[u8] = b"PK\x03\x04";

    pub fn detect(buf: &[u8]) -> Self {
        if buf.starts_with(Self::ZIP_SIGNATURE) {
            Self::Xlsx
        } else {
            Self::Csv
        }
    }
}

#[derive(Debug)]
pub struct Ingested {
    pub format: Format,
    pub records: base::Recordlist,
    /// Line numbers of rows dropped for having an unparseable date.
    pub dropped: Vec<u64>,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("missing required column(s): {}", quoted(.missing))]
    Schema { missing: Vec<String> },
    #[error("input is larger than {limit} bytes")]
    TooLarge { limit: u64 },
    #[error("invalid amount '{value}' at line {line}")]
    Amount {
        line: u64,
        value: String,
        #[source]
        source: base::cents::ParseError,
    },
    #[error(
        "amounts up to line {line} add up to more than {}",
        base::Cents::MAX_SHEET_MAGNITUDE
    )]
    Magnitude { line: u64 },
    #[error("delimiter {0:?} is not an ascii character")]
    Delimiter(char),
    #[error("failed to read input")]
    Io(#[from] std::io::Error),
    #[error("malformed sheet")]
    Csv(#[from] csv::Error),
    #[error("malformed workbook")]
    Xlsx(#[from] calamine::XlsxError),
    #[error("workbook has no worksheets")]
    NoWorksheet,
}

fn quoted(names: &[String]) -> String {
    names
        .iter()
        .map(|s| format!("'{}'", s))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Reads at most `opts.max_input_bytes` from `reader` and decodes the sheet.
pub fn read<R>(reader: R, opts: &Options) -> Result<Ingested, Error>
where
    R: Read,
{
    let mut buf = Vec::new();
    reader
        .take(opts.max_input_bytes.saturating_add(1))
        .read_to_end(&mut buf)?;
    if buf.len() as u64 > opts.max_input_bytes {
        return Err(Error::TooLarge {
            limit: opts.max_input_bytes,
        });
    }

    let format = Format::detect(&buf);
    let collector = match format {
        Format::Csv => read_csv(&buf, opts)?,
        Format::Xlsx => read_xlsx(buf, opts)?,
    };
    Ok(collector.finish(format))
}

/// Positions of the required columns.
struct Columns {
    date: usize,
    label: usize,
    amount: usize,
}

impl Columns {
    fn locate(headers: &[String], opts: &Options) -> Result<Self, Error> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.trim_start_matches('\u{feff}') == name)
        };
        let columns = [&opts.date_column, &opts.label_column, &opts.amount_column];
        match columns.map(|c| find(c)) {
            [Some(date), Some(label), Some(amount)] => Ok(Self {
                date,
                label,
                amount,
            }),
            found => {
                let missing = columns
                    .iter()
                    .zip(found)
                    .filter(|(_, i)| i.is_none())
                    .map(|(c, _)| c.to_string())
                    .collect();
                Err(Error::Schema { missing })
            }
        }
    }
}

/// Applies the row policy shared by every format.
#[derive(Default)]
struct Collector {
    records: Vec<base::Record>,
    dropped: Vec<u64>,
    /// Sum of absolute amounts so far.
    magnitude: base::Cents,
}

impl Collector {
    fn drop_row(&mut self, line: u64) {
        self.dropped.push(line);
    }

    fn keep(
        &mut self,
        line: u64,
        date: base::Date,
        label: String,
        amount: base::Cents,
    ) -> Result<(), Error> {
        self.magnitude = amount
            .0
            .checked_abs()
            .and_then(|abs| self.magnitude.checked_add(base::Cents(abs)))
            .filter(|&m| m <= base::Cents::MAX_SHEET_MAGNITUDE)
            .ok_or(Error::Magnitude { line })?;
        self.records.push(base::Record::new(date, label, amount));
        Ok(())
    }

    fn finish(self, format: Format) -> Ingested {
        if !self.dropped.is_empty() {
            tracing::debug!(lines = ?self.dropped, "dropped rows with unparseable dates");
        }
        let records = self.records.into_iter().collect::<base::Recordlist>();
        tracing::debug!(
            %format,
            records = records.len(),
            interval = %records.spanned_interval(),
            "ingested sheet"
        );
        Ingested {
            format,
            records,
            dropped: self.dropped,
        }
    }
}

fn read_csv(buf: &[u8], opts: &Options) -> Result<Collector, Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .delimiter(opts.delimiter)
        .flexible(true)
        .from_reader(buf);

    let headers = rdr.headers()?.iter().map(str::to_string).collect::<Vec<_>>();
    let columns = Columns::locate(&headers, opts)?;
    let mut collector = Collector::default();
    for result in rdr.records() {
        let row = result?;
        let line = row.position().map_or(0, csv::Position::line);
        let Some(date) = base::Date::parse_cell(row.get(columns.date).unwrap_or_default()) else {
            collector.drop_row(line);
            continue;
        };
        let value = row.get(columns.amount).unwrap_or_default().trim();
        let amount = if value.is_empty() {
            base::Cents(0)
        } else {
            base::Cents::parse_amount(value, opts.decimal_comma).map_err(|source| {
                Error::Amount {
                    line,
                    value: value.to_string(),
                    source,
                }
            })?
        };
        let label = row.get(columns.label).unwrap_or_default().to_string();
        collector.keep(line, date, label, amount)?;
    }
    Ok(collector)
}

static EMPTY_CELL: calamine::Data = calamine::Data::Empty;

fn read_xlsx(buf: Vec<u8>, opts: &Options) -> Result<Collector, Error> {
    use calamine::Reader;

    let mut workbook = calamine::Xlsx::new(std::io::Cursor::new(buf))?;
    let range = workbook.worksheet_range_at(0).ok_or(Error::NoWorksheet)??;
    // Leading empty rows are not part of the range.
    let header_line = range.start().map_or(1, |(row, _)| u64::from(row) + 1);
    let mut rows = range.rows();
    let headers = rows
        .next()
        .unwrap_or_default()
        .iter()
        .map(cell_text)
        .collect::<Vec<_>>();
    let columns = Columns::locate(&headers, opts)?;
    let mut collector = Collector::default();
    for (line, row) in (header_line + 1..).zip(rows) {
        let cell = |i: usize| row.get(i).unwrap_or(&EMPTY_CELL);
        let Some(date) = cell_date(cell(columns.date)) else {
            collector.drop_row(line);
            continue;
        };
        let amount =
            cell_amount(cell(columns.amount), opts.decimal_comma).map_err(|source| {
                Error::Amount {
                    line,
                    value: cell_text(cell(columns.amount)),
                    source,
                }
            })?;
        collector.keep(line, date, cell_text(cell(columns.label)), amount)?;
    }
    Ok(collector)
}

fn cell_text(cell: &calamine::Data) -> String {
    match cell {
        calamine::Data::String(s) => s.clone(),
        calamine::Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Date cells, bare serial numbers and text dates are accepted. Durations
/// are not.
fn cell_date(cell: &calamine::Data) -> Option<base::Date> {
    match cell {
        calamine::Data::DateTime(dt) if dt.is_datetime() => {
            base::Date::from_excel_serial(dt.as_f64())
        }
        calamine::Data::Float(f) => base::Date::from_excel_serial(*f),
        calamine::Data::Int(n) => base::Date::from_excel_serial(*n as f64),
        calamine::Data::String(s) | calamine::Data::DateTimeIso(s) => base::Date::parse_cell(s),
        _ => None,
    }
}

fn cell_amount(
    cell: &calamine::Data,
    decimal_comma: bool,
) -> Result<base::Cents, base::cents::ParseError> {
    match cell {
        calamine::Data::Empty => Ok(base::Cents(0)),
        calamine::Data::Float(f) => base::Cents::from_f64(*f),
        calamine::Data::Int(n) => n
            .checked_mul(100)
            .map(base::Cents)
            .ok_or(base::cents::ParseError::OutOfRange),
        calamine::Data::String(s) if s.trim().is_empty() => Ok(base::Cents(0)),
        calamine::Data::String(s) => base::Cents::parse_amount(s.trim(), decimal_comma),
        _ => Err(base::cents::ParseError::BadFormat),
    }
}
