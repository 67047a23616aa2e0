use crate::commands::Out;
use crate::{export, Config, Result};
use std::path::Path;

/// Exports every record to a two-sheet workbook: `Expenses` holds the
/// verbatim records, `Summary` holds per-category totals.
///
/// A missing destination path is a no-op, matching a cancelled save
/// dialog. Fails with `StoreMissing` when no store exists yet.
pub async fn export(config: Config, path: Option<&Path>) -> Result<Out<()>> {
    let Some(path) = path else {
        return Ok("No destination given; nothing was exported".into());
    };
    let records = config.store().read_all()?;
    export::write(&records, path)?;
    Ok(format!("Report exported to '{}'", path.display()).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::model::{Amount, Record};
    use crate::test::TestEnv;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_export_writes_workbook() {
        let env = TestEnv::new().await;
        env.config()
            .store()
            .append(&Record::new(
                "2025-01-01",
                "Food",
                Amount::new(dec!(10)),
                "lunch",
            ))
            .unwrap();
        let path = env.config().root().join("report.xlsx");

        let out = export(env.config(), Some(&path)).await.unwrap();
        assert!(out.message().contains("report.xlsx"));
        assert!(path.is_file());
    }

    #[tokio::test]
    async fn test_export_without_path_is_a_no_op() {
        let env = TestEnv::without_store().await;
        // Even with no store, omitting the path must not fail and must
        // not touch the filesystem.
        let out = export(env.config(), None).await.unwrap();
        assert_eq!(out.message(), "No destination given; nothing was exported");
    }

    #[tokio::test]
    async fn test_export_missing_store() {
        let env = TestEnv::without_store().await;
        let path = env.config().root().join("report.xlsx");
        let err = export(env.config(), Some(&path)).await.unwrap_err();
        assert!(matches!(err, Error::StoreMissing(_)));
        assert!(!path.exists());
    }
}
