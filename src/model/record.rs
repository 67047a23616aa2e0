use crate::model::Amount;
use serde::{Deserialize, Serialize};

/// The store's column names, in file order.
pub(crate) const COLUMNS: [&str; 4] = ["Date", "Category", "Amount", "Description"];

/// One expense entry, matching the store's column order.
///
/// `amount` is the only validated field; `date` is free-form text by
/// convention `YYYY-MM-DD`, and `category` is an exact-match grouping
/// key (case and whitespace variants are distinct categories). Records
/// have no identifier: identity is positional in the store file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "Date")]
    pub date: String,

    #[serde(rename = "Category")]
    pub category: String,

    #[serde(rename = "Amount")]
    pub amount: Amount,

    #[serde(rename = "Description")]
    pub description: String,
}

impl Record {
    pub fn new(
        date: impl Into<String>,
        category: impl Into<String>,
        amount: Amount,
        description: impl Into<String>,
    ) -> Self {
        Self {
            date: date.into(),
            category: category.into(),
            amount,
            description: description.into(),
        }
    }
}
