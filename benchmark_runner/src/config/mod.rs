//!
//! The database connection configuration.
//!

pub mod env_file;

///
/// Reads an environment variable, falling back to a default.
///
fn var_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

///
/// Reads a port variable, failing on a value that is not a valid port.
///
fn port_or(key: &str, default: u16) -> anyhow::Result<u16> {
    match std::env::var(key) {
        Ok(value) => value
            .parse::<u16>()
            .map_err(|error| anyhow::anyhow!("Environment variable {key}=`{value}`: {error}")),
        Err(_) => Ok(default),
    }
}

///
/// The ClickHouse connection configuration.
///
#[derive(Debug, Clone)]
pub struct ClickHouseConfig {
    /// The server host.
    pub host: String,
    /// The HTTP interface port.
    pub port: u16,
    /// The user name.
    pub user: String,
    /// The password.
    pub password: String,
    /// Whether to connect over TLS.
    pub secure: bool,
}

impl ClickHouseConfig {
    ///
    /// Reads the configuration from `CLICKHOUSE_*` environment variables.
    ///
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: var_or("CLICKHOUSE_HOST", "localhost"),
            port: port_or("CLICKHOUSE_PORT", 8123)?,
            user: var_or("CLICKHOUSE_USER", "default"),
            password: var_or("CLICKHOUSE_PASSWORD", ""),
            secure: var_or("CLICKHOUSE_SECURE", "false").to_lowercase() == "true",
        })
    }

    ///
    /// The HTTP interface URL.
    ///
    pub fn url(&self) -> String {
        let scheme = if self.secure { "https" } else { "http" };
        format!("{scheme}://{}:{}/", self.host, self.port)
    }
}

///
/// The Elasticsearch connection configuration.
///
#[derive(Debug, Clone)]
pub struct ElasticsearchConfig {
    /// The server host.
    pub host: String,
    /// The REST API port.
    pub port: u16,
    /// The URL scheme, `http` or `https`.
    pub scheme: String,
    /// The user name.
    pub user: String,
    /// The password.
    pub password: String,
}

impl ElasticsearchConfig {
    ///
    /// Reads the configuration from `ELASTICSEARCH_*` environment variables.
    ///
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: var_or("ELASTICSEARCH_HOST", "localhost"),
            port: port_or("ELASTICSEARCH_PORT", 9200)?,
            scheme: var_or("ELASTICSEARCH_SCHEME", "http"),
            user: var_or("ELASTICSEARCH_USER", "elastic"),
            password: var_or("ELASTICSEARCH_PASSWORD", ""),
        })
    }

    ///
    /// The REST API base URL without a trailing slash.
    ///
    pub fn url(&self) -> String {
        format!("{}://{}:{}", self.scheme, self.host, self.port)
    }
}
