//!
//! The Elasticsearch client speaking the REST API.
//!

use benchmark_report::SystemKind;

use crate::config::ElasticsearchConfig;

use super::check_response;
use super::ClientError;

/// The request timeout, matching the cloud client default used during loads.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(60);

///
/// The Elasticsearch client speaking the REST API.
///
pub struct ElasticsearchClient {
    /// The underlying HTTP client.
    http: reqwest::blocking::Client,
    /// The server base URL without a trailing slash.
    base_url: String,
    /// The user name.
    user: String,
    /// The password.
    password: String,
}

///
/// The interesting parts of a `_search` response.
///
#[derive(Debug)]
pub struct SearchOutput {
    /// The total hit count reported by the server.
    pub hits: u64,
}

///
/// The interesting parts of a `_stats` response for one index.
///
#[derive(Debug)]
pub struct IndexStats {
    /// The document count.
    pub docs: u64,
    /// The on-disk store size in bytes.
    pub size_bytes: u64,
}

impl ElasticsearchClient {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: &ElasticsearchConfig) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            base_url: config.url(),
            user: config.user.clone(),
            password: config.password.clone(),
        })
    }

    ///
    /// Checks that the cluster is reachable and the credentials are valid.
    ///
    pub fn ping(&self) -> Result<(), ClientError> {
        let response = self
            .get(self.base_url.clone())
            .send()
            .map_err(|error| ClientError::connection(SystemKind::Elasticsearch, error))?;
        check_response(SystemKind::Elasticsearch, response).map(|_| ())
    }

    ///
    /// Executes a search request and returns the total hit count.
    ///
    pub fn search(&self, index: &str, body: &serde_json::Value) -> Result<SearchOutput, ClientError> {
        let response = self
            .http
            .post(format!("{}/{index}/_search", self.base_url))
            .basic_auth(self.user.as_str(), Some(self.password.as_str()))
            .json(body)
            .send()
            .map_err(|error| ClientError::connection(SystemKind::Elasticsearch, error))?;
        let response = check_response(SystemKind::Elasticsearch, response)?;

        let value: serde_json::Value = response
            .json()
            .map_err(|error| ClientError::query(SystemKind::Elasticsearch, error))?;
        let hits = value
            .pointer("/hits/total/value")
            .and_then(serde_json::Value::as_u64)
            .unwrap_or_default();
        Ok(SearchOutput { hits })
    }

    ///
    /// Creates an index with the given mappings and settings.
    ///
    pub fn create_index(&self, index: &str, body: &serde_json::Value) -> Result<(), ClientError> {
        let response = self
            .http
            .put(format!("{}/{index}", self.base_url))
            .basic_auth(self.user.as_str(), Some(self.password.as_str()))
            .json(body)
            .send()
            .map_err(|error| ClientError::connection(SystemKind::Elasticsearch, error))?;
        check_response(SystemKind::Elasticsearch, response).map(|_| ())
    }

    ///
    /// Deletes an index. A missing index is not an error.
    ///
    pub fn delete_index(&self, index: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .delete(format!("{}/{index}", self.base_url))
            .basic_auth(self.user.as_str(), Some(self.password.as_str()))
            .send()
            .map_err(|error| ClientError::connection(SystemKind::Elasticsearch, error))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(());
        }
        check_response(SystemKind::Elasticsearch, response).map(|_| ())
    }

    ///
    /// Ships a `_bulk` payload to the given index.
    ///
    /// The server reports per-action failures inside a 200 response, so the
    /// `errors` flag must be checked explicitly.
    ///
    pub fn bulk(&self, index: &str, body: String) -> Result<(), ClientError> {
        let response = self
            .http
            .post(format!("{}/{index}/_bulk", self.base_url))
            .basic_auth(self.user.as_str(), Some(self.password.as_str()))
            .header(reqwest::header::CONTENT_TYPE, "application/x-ndjson")
            .body(body)
            .send()
            .map_err(|error| ClientError::connection(SystemKind::Elasticsearch, error))?;
        let response = check_response(SystemKind::Elasticsearch, response)?;

        let value: serde_json::Value = response
            .json()
            .map_err(|error| ClientError::query(SystemKind::Elasticsearch, error))?;
        if value
            .get("errors")
            .and_then(serde_json::Value::as_bool)
            .unwrap_or(false)
        {
            return Err(ClientError::query(
                SystemKind::Elasticsearch,
                format!("bulk load into `{index}` reported item failures"),
            ));
        }
        Ok(())
    }

    ///
    /// Updates the dynamic settings of an index.
    ///
    pub fn update_settings(&self, index: &str, body: &serde_json::Value) -> Result<(), ClientError> {
        let response = self
            .http
            .put(format!("{}/{index}/_settings", self.base_url))
            .basic_auth(self.user.as_str(), Some(self.password.as_str()))
            .json(body)
            .send()
            .map_err(|error| ClientError::connection(SystemKind::Elasticsearch, error))?;
        check_response(SystemKind::Elasticsearch, response).map(|_| ())
    }

    ///
    /// Forces a refresh so that freshly loaded documents become searchable.
    ///
    pub fn refresh(&self, index: &str) -> Result<(), ClientError> {
        let response = self
            .http
            .post(format!("{}/{index}/_refresh", self.base_url))
            .basic_auth(self.user.as_str(), Some(self.password.as_str()))
            .send()
            .map_err(|error| ClientError::connection(SystemKind::Elasticsearch, error))?;
        check_response(SystemKind::Elasticsearch, response).map(|_| ())
    }

    ///
    /// Reads document count and store size for an index.
    ///
    /// Returns `None` when the index does not exist, so that storage
    /// measurement can degrade to a placeholder instead of failing.
    ///
    pub fn stats(&self, index: &str) -> Result<Option<IndexStats>, ClientError> {
        let response = self
            .get(format!("{}/{index}/_stats/store,docs", self.base_url))
            .send()
            .map_err(|error| ClientError::connection(SystemKind::Elasticsearch, error))?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            return Ok(None);
        }
        let response = check_response(SystemKind::Elasticsearch, response)?;

        let value: serde_json::Value = response
            .json()
            .map_err(|error| ClientError::query(SystemKind::Elasticsearch, error))?;
        let total = match value.pointer(format!("/indices/{index}/total").as_str()) {
            Some(total) => total,
            None => return Ok(None),
        };
        Ok(Some(IndexStats {
            docs: total
                .pointer("/docs/count")
                .and_then(serde_json::Value::as_u64)
                .unwrap_or_default(),
            size_bytes: total
                .pointer("/store/size_in_bytes")
                .and_then(serde_json::Value::as_u64)
                .unwrap_or_default(),
        }))
    }

    fn get(&self, url: String) -> reqwest::blocking::RequestBuilder {
        self.http
            .get(url)
            .basic_auth(self.user.as_str(), Some(self.password.as_str()))
    }
}
