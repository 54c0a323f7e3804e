use reqwest::StatusCode;
use serde_json::error::Category;
use thiserror::Error;

use crate::model::FailureKind;

/// Why a fetch did not produce a record. Never returned to callers of
/// [`WeatherProvider::fetch`](crate::WeatherProvider::fetch); it is folded into
/// [`FailureKind`] after being logged.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("WeatherAPI request failed with status {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Failed to send request to WeatherAPI.com: {0}")]
    Transport(#[source] reqwest::Error),

    #[error("Failed to read WeatherAPI response body: {0}")]
    Body(#[source] reqwest::Error),

    #[error("Failed to parse WeatherAPI current JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

impl FetchError {
    pub fn kind(&self) -> FailureKind {
        match self {
            FetchError::Status { status, .. } => FailureKind::Status(status.as_u16()),
            FetchError::Transport(_) => FailureKind::Transport,
            FetchError::Body(_) => FailureKind::MalformedBody,
            FetchError::Decode(err) => match err.classify() {
                Category::Data => FailureKind::MissingField,
                Category::Syntax | Category::Eof | Category::Io => FailureKind::MalformedBody,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_error_keeps_code() {
        let err = FetchError::Status { status: StatusCode::BAD_REQUEST, body: String::new() };
        assert_eq!(err.kind(), FailureKind::Status(400));
    }

    #[test]
    fn syntax_errors_are_malformed_bodies() {
        let err = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
        assert_eq!(FetchError::from(err).kind(), FailureKind::MalformedBody);

        let err = serde_json::from_str::<serde_json::Value>("{\"location\":").unwrap_err();
        assert_eq!(FetchError::from(err).kind(), FailureKind::MalformedBody);
    }

    #[test]
    fn shape_errors_are_missing_fields() {
        #[derive(Debug, serde::Deserialize)]
        #[allow(dead_code)]
        struct Needs {
            name: String,
        }

        let err = serde_json::from_str::<Needs>("{}").unwrap_err();
        assert_eq!(FetchError::from(err).kind(), FailureKind::MissingField);
    }
}
