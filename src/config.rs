//! Configuration file handling.
//!
//! The configuration file is stored at `$EXPENSES_HOME/config.json` and
//! holds the optional remote mirror settings. The expense data itself
//! lives next to it at `$EXPENSES_HOME/data/expenses.csv`.

use crate::store::Store;
use crate::{utils, Result};
use anyhow::{anyhow, Context};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use url::Url;

const APP_NAME: &str = "expenses";
const CONFIG_VERSION: u8 = 1;
const CONFIG_JSON: &str = "config.json";
const DATA_DIR: &str = "data";
const DATA_CSV: &str = "expenses.csv";

/// The `Config` object represents the configuration of the app. You
/// instantiate it by providing the path to `$EXPENSES_HOME` and from
/// there it loads `$EXPENSES_HOME/config.json`. Every component receives
/// it explicitly; there is no global state.
#[derive(Debug, Clone)]
pub struct Config {
    root: PathBuf,
    config_path: PathBuf,
    data_path: PathBuf,
    config_file: ConfigFile,
    remote_url: Option<Url>,
}

impl Config {
    /// Creates the data directory, its `data/` subdirectory and an
    /// initial `config.json` with the given remote settings.
    ///
    /// # Errors
    /// - Returns an error if any file operation fails or if `remote_url`
    ///   is not a valid URL.
    pub async fn create(
        dir: impl Into<PathBuf>,
        remote_url: Option<&str>,
        remote_token: Option<&str>,
    ) -> Result<Self> {
        // Create the directory if it does not exist
        let maybe_relative = dir.into();
        utils::make_dir(&maybe_relative)
            .await
            .context("unable to create the expenses home directory")?;

        // Canonicalize the directory path
        let root = utils::canonicalize(&maybe_relative).await?;

        // Create the data subdirectory
        let data_dir = root.join(DATA_DIR);
        utils::make_dir(&data_dir).await?;

        // Create and save an initial ConfigFile
        let config_file = ConfigFile {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            remote_url: remote_url.map(str::to_string),
            remote_token: remote_token.map(str::to_string),
        };
        let config_path = root.join(CONFIG_JSON);
        config_file.save(&config_path).await?;

        let remote_url = parse_remote_url(config_file.remote_url.as_deref())?;

        Ok(Self {
            root,
            config_path,
            data_path: data_dir.join(DATA_CSV),
            config_file,
            remote_url,
        })
    }

    /// This will
    /// - validate that the home directory and the config file exist
    /// - load and validate the config file
    /// - return the loaded configuration object
    pub async fn load(home: impl Into<PathBuf>) -> Result<Self> {
        let maybe_relative = home.into();
        let root = utils::canonicalize(&maybe_relative)
            .await
            .context("expenses home is missing, run 'expenses init' first")?;

        let config_path = root.join(CONFIG_JSON);
        if !config_path.is_file() {
            return Err(anyhow!(
                "the config file is missing '{}', run 'expenses init' first",
                config_path.display()
            )
            .into());
        }
        let config_file = ConfigFile::load(&config_path).await?;
        let remote_url = parse_remote_url(config_file.remote_url.as_deref())?;

        Ok(Self {
            data_path: root.join(DATA_DIR).join(DATA_CSV),
            root,
            config_path,
            config_file,
            remote_url,
        })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn config_path(&self) -> &Path {
        &self.config_path
    }

    /// The path of the CSV store file.
    pub fn data_path(&self) -> &Path {
        &self.data_path
    }

    /// The remote document collection endpoint, if one is configured.
    pub fn remote_url(&self) -> Option<&Url> {
        self.remote_url.as_ref()
    }

    /// Bearer token sent with every remote request.
    pub fn remote_token(&self) -> Option<&str> {
        self.config_file.remote_token.as_deref()
    }

    /// Creates a `Store` over the configured data file.
    pub fn store(&self) -> Store {
        Store::new(&self.data_path)
    }
}

/// Validates and parses the optional remote collection URL.
fn parse_remote_url(remote_url: Option<&str>) -> Result<Option<Url>> {
    match remote_url {
        None => Ok(None),
        Some(s) => {
            let url = Url::parse(s).with_context(|| format!("invalid remote_url '{s}'"))?;
            Ok(Some(url))
        }
    }
}

/// Represents the serialization and deserialization format of the
/// configuration file.
///
/// Example configuration:
/// ```json
/// {
///   "app_name": "expenses",
///   "config_version": 1,
///   "remote_url": "https://example.com/api/collections/expenses",
///   "remote_token": "s3cret"
/// }
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq, PartialEq)]
struct ConfigFile {
    /// Application name, should always be "expenses"
    app_name: String,

    /// Configuration file version
    config_version: u8,

    /// URL of the remote document collection used for sync (optional;
    /// without it the tracker is local-only)
    #[serde(skip_serializing_if = "Option::is_none")]
    remote_url: Option<String>,

    /// Bearer token for the remote collection (optional)
    #[serde(skip_serializing_if = "Option::is_none")]
    remote_token: Option<String>,
}

impl ConfigFile {
    /// Loads a ConfigFile asynchronously from the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read or parsed.
    async fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = utils::read(path).await?;

        let config: ConfigFile = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse config file at {}", path.display()))?;

        anyhow::ensure!(
            config.app_name == APP_NAME,
            "invalid app_name in config file: expected '{}', got '{}'",
            APP_NAME,
            config.app_name
        );

        Ok(config)
    }

    /// Saves the ConfigFile to the specified path.
    ///
    /// # Errors
    /// Returns an error if the file cannot be written.
    async fn save(&self, path: impl AsRef<Path>) -> anyhow::Result<()> {
        let p = path.as_ref();
        let data = serde_json::to_string_pretty(self).context("unable to serialize config")?;
        utils::write(p, data)
            .await
            .context("unable to write config file")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_config_create() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("expenses_home");
        let url = "https://example.com/api/collections/expenses";

        let config = Config::create(&home, Some(url), Some("s3cret"))
            .await
            .unwrap();

        assert_eq!(config.remote_url().unwrap().as_str(), url);
        assert_eq!(config.remote_token(), Some("s3cret"));
        assert!(config.config_path().is_file());
        assert!(config.data_path().parent().unwrap().is_dir());
    }

    #[tokio::test]
    async fn test_config_create_local_only() {
        let dir = TempDir::new().unwrap();
        let config = Config::create(dir.path().join("home"), None, None)
            .await
            .unwrap();
        assert!(config.remote_url().is_none());
        assert!(config.remote_token().is_none());
    }

    #[tokio::test]
    async fn test_config_create_then_load() {
        let dir = TempDir::new().unwrap();
        let home = dir.path().join("home");
        let url = "https://example.com/api/collections/expenses";
        let created = Config::create(&home, Some(url), None).await.unwrap();

        let loaded = Config::load(&home).await.unwrap();
        assert_eq!(created.remote_url(), loaded.remote_url());
        assert_eq!(created.data_path(), loaded.data_path());
    }

    #[tokio::test]
    async fn test_config_load_missing_home() {
        let dir = TempDir::new().unwrap();
        let result = Config::load(dir.path().join("nope")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_config_create_rejects_bad_url() {
        let dir = TempDir::new().unwrap();
        let result = Config::create(dir.path().join("home"), Some("not a url"), None).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_config_file_save_and_load() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let original = ConfigFile {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            remote_url: Some("https://example.com/expenses".to_string()),
            remote_token: Some("token".to_string()),
        };
        original.save(&path).await.unwrap();

        let loaded = ConfigFile::load(&path).await.unwrap();
        assert_eq!(original, loaded);
    }

    #[tokio::test]
    async fn test_config_file_load_invalid_app_name() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.json");

        let json = r#"{
            "app_name": "wrong_app",
            "config_version": 1
        }"#;
        std::fs::write(&path, json).unwrap();

        let result = ConfigFile::load(&path).await;
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("invalid app_name"));
    }

    #[tokio::test]
    async fn test_config_file_serialization_omits_none_fields() {
        let config = ConfigFile {
            app_name: APP_NAME.to_string(),
            config_version: CONFIG_VERSION,
            remote_url: None,
            remote_token: None,
        };

        let json = serde_json::to_string(&config).unwrap();
        assert!(!json.contains("remote_url"));
        assert!(!json.contains("remote_token"));
    }
}
