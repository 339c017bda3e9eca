use std::io;

use thiserror::Error;

/// Library-wide error type for polyprice operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Configuration or environment issue.
    #[error("{0}")]
    Configuration(String),

    /// Config file passed on the command line does not exist.
    #[error("Config file not found: {0}")]
    ConfigFileMissing(String),

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),

    /// Catalog endpoint URL could not be parsed or extended.
    #[error("Invalid catalog URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    /// Catalog service request failed (transport error or non-success status).
    #[error(
        "Catalog API error{}: {message}",
        status.map(|s| format!(" (status {})", s)).unwrap_or_default()
    )]
    Gateway { message: String, status: Option<u16> },

    /// Catalog service responded with a body that does not match the expected shape.
    #[error("Failed to decode {what}: {details}")]
    Decode { what: String, details: String },
}

impl AppError {
    pub fn config_error<S: Into<String>>(message: S) -> Self {
        AppError::Configuration(message.into())
    }

    pub fn gateway<S: Into<String>>(message: S, status: Option<u16>) -> Self {
        AppError::Gateway { message: message.into(), status }
    }

    /// HTTP status attached to a gateway failure, if the service answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::Gateway { status, .. } => *status,
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gateway_display_includes_status_when_present() {
        let err = AppError::gateway("Server error", Some(503));
        assert_eq!(err.to_string(), "Catalog API error (status 503): Server error");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn gateway_display_omits_missing_status() {
        let err = AppError::gateway("connection refused", None);
        assert_eq!(err.to_string(), "Catalog API error: connection refused");
        assert_eq!(err.status(), None);
    }
}
