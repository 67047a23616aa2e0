//! The remote mirror, consumed through the `Mirror` trait so the rest
//! of the program never touches the HTTP client directly.

mod http;
mod test_mirror;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::model::Document;
use anyhow::anyhow;

pub(crate) use test_mirror::TestMirror;

/// Selects the mirror implementation. This allows for exercising the
/// program without a remote service: when `EXPENSES_IN_TEST_MODE` is set
/// and non-zero in length the mode will be `Mode::Test`, otherwise it
/// will be `Mode::Http`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Http,
    Test,
}

impl Mode {
    pub fn from_env() -> Self {
        match std::env::var("EXPENSES_IN_TEST_MODE") {
            Ok(value) if !value.is_empty() => Mode::Test,
            _ => Mode::Http,
        }
    }
}

/// The consumed interface of the remote document collection.
#[async_trait::async_trait]
pub(crate) trait Mirror {
    /// Creates one new remote document. No identifier is returned or
    /// used by the local system.
    async fn insert(&self, document: &Document) -> Result<()>;

    /// Returns every remote document.
    async fn list_all(&self) -> Result<Vec<Document>>;
}

/// Builds the `Mirror` for `mode`. In HTTP mode a configured remote
/// endpoint is required.
pub(crate) fn mirror(config: &Config, mode: Mode) -> Result<Box<dyn Mirror + Send + Sync>> {
    match mode {
        Mode::Test => Ok(Box::new(TestMirror::shared())),
        Mode::Http => {
            let url = config.remote_url().ok_or_else(|| {
                Error::Remote(anyhow!(
                    "no remote_url configured; re-run 'expenses init' with --remote-url"
                ))
            })?;
            Ok(Box::new(http::HttpMirror::new(
                url.clone(),
                config.remote_token().map(str::to_string),
            )))
        }
    }
}
