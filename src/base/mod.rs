mod aggregate;
pub mod breakdown;
pub mod cents;
mod charset;
mod config;
pub mod date;
pub mod fs;
pub mod ingest;
pub mod interval;
mod month;
pub mod rate;
mod record;
mod recordlist;
pub mod summary;
pub mod table;
pub mod tree;
pub mod util;

pub use aggregate::Aggregate;
pub use breakdown::Breakdown;
pub use breakdown::BreakdownRow;
pub use breakdown::RateOverrides;
pub use cents::Cents;
pub use charset::Charset;
pub use config::Config;
pub use date::Date;
pub use fs::Fs;
pub use interval::Interval;
pub use month::Month;
pub use rate::Rate;
pub use record::Record;
pub use recordlist::Recordlist;
pub use summary::Summary;
pub use tree::Tree;
