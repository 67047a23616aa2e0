use crate::commands::Out;
use crate::{Config, Result};
use anyhow::Context;
use std::path::Path;

/// Creates the home directory, `config.json` and the CSV store with its
/// header row.
///
/// # Arguments
/// - `home` - The directory that will be the root of the data
///   directory, e.g. `$HOME/expenses`
/// - `remote_url` - Optional URL of the remote document collection used
///   for sync. Without it the tracker is local-only.
/// - `remote_token` - Optional bearer token for the remote collection.
///
/// # Errors
/// - Returns an error if any file operation fails.
pub async fn init(
    home: &Path,
    remote_url: Option<&str>,
    remote_token: Option<&str>,
) -> Result<Out<()>> {
    let config = Config::create(home, remote_url, remote_token)
        .await
        .context("unable to create the data directory and config")?;
    config.store().init()?;
    Ok(format!(
        "Successfully initialized the expenses directory at '{}'",
        config.root().display()
    )
    .into())
}
