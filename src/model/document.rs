use crate::error::Error;
use crate::model::{Amount, Record};
use serde::{Deserialize, Serialize};

/// The remote wire representation of one expense.
///
/// The collection schema uses lowercase string field names and a JSON
/// number for `amount`. Conversion to `Record` is the only place remote
/// data is validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub date: String,
    pub category: String,
    pub amount: f64,
    pub description: String,
}

impl From<&Record> for Document {
    fn from(record: &Record) -> Self {
        Self {
            date: record.date.clone(),
            category: record.category.clone(),
            amount: record.amount.to_f64(),
            description: record.description.clone(),
        }
    }
}

impl TryFrom<Document> for Record {
    type Error = Error;

    fn try_from(document: Document) -> Result<Self, Self::Error> {
        let amount = Amount::from_f64(document.amount)
            .ok_or_else(|| Error::InvalidAmount(document.amount.to_string()))?;
        Ok(Record {
            date: document.date,
            category: document.category,
            amount,
            description: document.description,
        })
    }
}
