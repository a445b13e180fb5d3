//!
//! The database clients.
//!

pub mod clickhouse;
pub mod elasticsearch;

use benchmark_report::SystemKind;

///
/// The client error taxonomy.
///
/// Connection errors are fatal and abort the current scale's run without
/// retrying. Query errors carry the server message verbatim.
///
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The database is unreachable or refused the credentials.
    #[error("{system} connection: {source}")]
    Connection {
        /// The unreachable system.
        system: SystemKind,
        /// The underlying transport error.
        #[source]
        source: reqwest::Error,
    },
    /// The server rejected the credentials. Fatal, like an unreachable host.
    #[error("{system} authentication: {message}")]
    Authentication {
        /// The system that rejected the credentials.
        system: SystemKind,
        /// The server error message, verbatim.
        message: String,
    },
    /// The server rejected or failed the query.
    #[error("{system} query: {message}")]
    Query {
        /// The system that rejected the query.
        system: SystemKind,
        /// The server error message, verbatim.
        message: String,
    },
}

impl ClientError {
    ///
    /// Wraps a transport error for the given system.
    ///
    pub fn connection(system: SystemKind, source: reqwest::Error) -> Self {
        Self::Connection { system, source }
    }

    ///
    /// Wraps a credentials rejection for the given system.
    ///
    pub fn authentication<S>(system: SystemKind, message: S) -> Self
    where
        S: ToString,
    {
        Self::Authentication {
            system,
            message: message.to_string(),
        }
    }

    ///
    /// Wraps a server-side error message for the given system.
    ///
    pub fn query<S>(system: SystemKind, message: S) -> Self
    where
        S: ToString,
    {
        Self::Query {
            system,
            message: message.to_string(),
        }
    }
}

///
/// Checks an HTTP response status, turning error statuses into client
/// errors with the response body preserved verbatim.
///
fn check_response(
    system: SystemKind,
    response: reqwest::blocking::Response,
) -> Result<reqwest::blocking::Response, ClientError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let message = response
        .text()
        .unwrap_or_else(|_| "<unreadable response body>".to_owned());
    Err(classify_status(system, status, message))
}

///
/// Classifies an HTTP error status: rejected credentials are fatal like a
/// connection failure, everything else is a query error.
///
fn classify_status(
    system: SystemKind,
    status: reqwest::StatusCode,
    message: String,
) -> ClientError {
    if status == reqwest::StatusCode::UNAUTHORIZED || status == reqwest::StatusCode::FORBIDDEN {
        return ClientError::authentication(system, format!("HTTP {status}: {message}"));
    }
    ClientError::query(system, format!("HTTP {status}: {message}"))
}

#[cfg(test)]
mod tests {
    use benchmark_report::SystemKind;

    use super::classify_status;
    use super::ClientError;

    #[test]
    fn rejected_credentials_are_an_authentication_failure() {
        for status in [
            reqwest::StatusCode::UNAUTHORIZED,
            reqwest::StatusCode::FORBIDDEN,
        ] {
            let error = classify_status(
                SystemKind::ClickHouse,
                status,
                "Authentication failed".to_owned(),
            );
            assert!(matches!(error, ClientError::Authentication { .. }));
        }
    }

    #[test]
    fn server_errors_carry_the_body_verbatim() {
        let error = classify_status(
            SystemKind::Elasticsearch,
            reqwest::StatusCode::BAD_REQUEST,
            "parsing_exception".to_owned(),
        );
        match error {
            ClientError::Query { system, message } => {
                assert_eq!(system, SystemKind::Elasticsearch);
                assert!(message.contains("parsing_exception"));
            }
            error => panic!("Expected a query error, got {error}"),
        }
    }
}
