use crate::api::{self, Mode};
use crate::args::AddArgs;
use crate::commands::Out;
use crate::model::{Amount, Document, Record};
use crate::{Config, Result};
use std::str::FromStr;
use tracing::debug;

/// Validates the amount, appends the record to the local store and,
/// when a remote collection is available, inserts the matching document
/// there too.
///
/// The local write happens first: a remote failure surfaces as an error
/// but leaves the local record in place. A non-numeric amount is
/// rejected before anything is written.
pub async fn add(config: Config, mode: Mode, args: AddArgs) -> Result<Out<Record>> {
    let amount = Amount::from_str(args.amount())?;
    let date = match args.date() {
        Some(date) => date.to_string(),
        None => chrono::Local::now().date_naive().to_string(),
    };
    let record = Record::new(date, args.category(), amount, args.description());

    let store = config.store();
    store.init()?;
    store.append(&record)?;
    debug!("Appended record to {}", store.path().display());

    let remote_available = mode == Mode::Test || config.remote_url().is_some();
    let mirrored = if remote_available && !args.local_only() {
        let mirror = api::mirror(&config, mode)?;
        mirror.insert(&Document::from(&record)).await?;
        true
    } else {
        false
    };

    let message = if mirrored {
        "Expense added and mirrored to the remote collection"
    } else {
        "Expense added"
    };
    Ok(Out::new(message, record))
}
