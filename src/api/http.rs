//! Implements the `Mirror` trait against a JSON document collection
//! endpoint using `reqwest`.

use crate::api::Mirror;
use crate::error::{Error, Result};
use crate::model::Document;
use anyhow::{anyhow, Context};
use url::Url;

/// Talks to a remote document collection over HTTP: `POST` inserts one
/// document, `GET` returns the whole collection as a JSON array. An
/// optional bearer token is sent with every request. Failures carry the
/// remote's status and body text; nothing is retried.
pub(super) struct HttpMirror {
    client: reqwest::Client,
    collection_url: Url,
    token: Option<String>,
}

impl HttpMirror {
    pub(super) fn new(collection_url: Url, token: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            collection_url,
            token,
        }
    }

    fn request(&self, method: reqwest::Method) -> reqwest::RequestBuilder {
        let mut builder = self.client.request(method, self.collection_url.clone());
        if let Some(token) = &self.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }
}

#[async_trait::async_trait]
impl Mirror for HttpMirror {
    async fn insert(&self, document: &Document) -> Result<()> {
        let response = self
            .request(reqwest::Method::POST)
            .json(document)
            .send()
            .await
            .context("failed to send insert request")
            .map_err(Error::Remote)?;
        check_status(response)
            .await
            .context("insert rejected by the remote")
            .map_err(Error::Remote)?;
        Ok(())
    }

    async fn list_all(&self) -> Result<Vec<Document>> {
        let response = self
            .request(reqwest::Method::GET)
            .send()
            .await
            .context("failed to send list request")
            .map_err(Error::Remote)?;
        let response = check_status(response)
            .await
            .context("list rejected by the remote")
            .map_err(Error::Remote)?;
        response
            .json::<Vec<Document>>()
            .await
            .context("failed to parse the remote collection response")
            .map_err(Error::Remote)
    }
}

/// Folds a non-success status and its body text into the error.
async fn check_status(response: reqwest::Response) -> anyhow::Result<reqwest::Response> {
    if response.status().is_success() {
        return Ok(response);
    }
    let status = response.status();
    let body = response
        .text()
        .await
        .unwrap_or_else(|_| "unable to read response body".to_string());
    Err(anyhow!("remote returned status {status}: {body}"))
}
