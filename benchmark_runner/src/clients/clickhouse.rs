//!
//! The ClickHouse client speaking the HTTP interface.
//!

use benchmark_report::SystemKind;

use crate::config::ClickHouseConfig;

use super::check_response;
use super::ClientError;

/// The request timeout. Bulk inserts at the 100M scale can be slow.
const REQUEST_TIMEOUT: std::time::Duration = std::time::Duration::from_secs(300);

///
/// The ClickHouse client speaking the HTTP interface.
///
/// SELECT queries are shipped with `FORMAT JSON` appended so that the row
/// count and data come back in a single parseable envelope.
///
pub struct ClickHouseClient {
    /// The underlying HTTP client.
    http: reqwest::blocking::Client,
    /// The server URL, e.g. `https://host:8443/`.
    url: String,
    /// The user name.
    user: String,
    /// The password.
    password: String,
}

///
/// The `FORMAT JSON` response envelope.
///
#[derive(Debug, Default, serde::Deserialize)]
pub struct QueryOutput {
    /// The result rows as generic JSON objects.
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
    /// The result row count.
    #[serde(default)]
    pub rows: u64,
}

impl ClickHouseClient {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: &ClickHouseConfig) -> anyhow::Result<Self> {
        let http = reqwest::blocking::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;
        Ok(Self {
            http,
            url: config.url(),
            user: config.user.clone(),
            password: config.password.clone(),
        })
    }

    ///
    /// Checks that the server is reachable and the credentials are valid.
    ///
    pub fn ping(&self) -> Result<(), ClientError> {
        self.execute("SELECT 1").map(|_| ())
    }

    ///
    /// Executes a read-only query and returns the parsed result envelope.
    ///
    pub fn execute(&self, sql: &str) -> Result<QueryOutput, ClientError> {
        let response = self.post(format!("{sql}\nFORMAT JSON"))?;
        response
            .json::<QueryOutput>()
            .map_err(|error| ClientError::query(SystemKind::ClickHouse, error))
    }

    ///
    /// Executes a statement whose output is irrelevant, e.g. DDL.
    ///
    pub fn command(&self, sql: &str) -> Result<(), ClientError> {
        self.post(sql.to_owned()).map(|_| ())
    }

    ///
    /// Inserts a batch of NDJSON rows into the target table.
    ///
    pub fn insert_ndjson(&self, target: &str, body: String) -> Result<(), ClientError> {
        let response = self
            .http
            .post(self.url.as_str())
            .basic_auth(self.user.as_str(), Some(self.password.as_str()))
            .query(&[("query", format!("INSERT INTO {target} FORMAT JSONEachRow"))])
            .body(body)
            .send()
            .map_err(|error| ClientError::connection(SystemKind::ClickHouse, error))?;
        check_response(SystemKind::ClickHouse, response).map(|_| ())
    }

    fn post(&self, body: String) -> Result<reqwest::blocking::Response, ClientError> {
        let response = self
            .http
            .post(self.url.as_str())
            .basic_auth(self.user.as_str(), Some(self.password.as_str()))
            .body(body)
            .send()
            .map_err(|error| ClientError::connection(SystemKind::ClickHouse, error))?;
        check_response(SystemKind::ClickHouse, response)
    }
}
