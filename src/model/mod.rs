//! Types that represent the core data model, such as `Record` and `Amount`.
mod amount;
mod document;
mod record;

pub use amount::Amount;
pub use document::Document;
pub use record::Record;

pub(crate) use record::COLUMNS;
