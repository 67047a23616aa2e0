use crate::api::{self, Mirror, Mode};
use crate::commands::Out;
use crate::error::Error;
use crate::model::{Document, Record};
use crate::store::Store;
use crate::{Config, Result};
use anyhow::anyhow;
use tracing::debug;

/// Pushes every local record to the remote collection, one insert per
/// record in file order.
///
/// There is no batching and no rollback: a failure partway leaves the
/// records inserted so far in the remote collection. Records carry no
/// identifier, so repeating a push duplicates every record remotely.
pub async fn sync_up(config: Config, mode: Mode) -> Result<Out<usize>> {
    let store = config.store();
    let mirror = api::mirror(&config, mode)?;
    let count = push_all(&store, mirror.as_ref()).await?;
    Ok(Out::new(
        format!("Pushed {count} record(s) to the remote collection"),
        count,
    ))
}

/// Overwrites the local store with the current contents of the remote
/// collection, discarding all prior local records.
pub async fn sync_down(config: Config, mode: Mode) -> Result<Out<usize>> {
    let store = config.store();
    let mirror = api::mirror(&config, mode)?;
    let count = pull_all(&store, mirror.as_ref()).await?;
    Ok(Out::new(
        format!("Fetched {count} record(s) from the remote collection"),
        count,
    ))
}

pub(crate) async fn push_all(
    store: &Store,
    mirror: &(dyn Mirror + Send + Sync),
) -> Result<usize> {
    let records = store.read_all()?;
    for record in &records {
        mirror.insert(&Document::from(record)).await?;
    }
    debug!("Inserted {} document(s)", records.len());
    Ok(records.len())
}

/// The local rewrite happens only after the entire remote collection
/// has been fetched and every document converted, so a remote failure
/// leaves the local store untouched.
pub(crate) async fn pull_all(
    store: &Store,
    mirror: &(dyn Mirror + Send + Sync),
) -> Result<usize> {
    let documents = mirror.list_all().await?;
    let mut records = Vec::with_capacity(documents.len());
    for document in documents {
        let record = Record::try_from(document)
            .map_err(|e| Error::Remote(anyhow!("invalid document in the remote collection: {e}")))?;
        records.push(record);
    }
    store.replace_all(&records)?;
    Ok(records.len())
}
