//! Error types and handling for `wherenow`

use thiserror::Error;

/// Main error type for the `wherenow` lookups
#[derive(Error, Debug)]
pub enum WhereNowError {
    /// Configuration-related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// The request never produced a response (DNS, refused connection, TLS)
    #[error("Network error requesting {url}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The service answered with a non-success status
    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },

    /// The response body could not be read to the end
    #[error("Failed to read response body from {url}")]
    Body {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was empty or did not match the expected JSON shape
    #[error("Failed to decode {shape} response")]
    Decode {
        shape: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The service reported a failure inside a successful response
    #[error("Lookup failed: {message}")]
    Lookup { message: String },

    /// Applying the timezone offsets left the representable time range
    #[error("Offset of {raw_offset}s raw + {time_offset}s time is out of range")]
    OffsetOutOfRange { raw_offset: i64, time_offset: i64 },

    /// I/O operation errors
    #[error("I/O error")]
    Io {
        #[from]
        source: std::io::Error,
    },
}

impl WhereNowError {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a new lookup error
    pub fn lookup<S: Into<String>>(message: S) -> Self {
        Self::Lookup {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            WhereNowError::Config { message } => {
                format!("Configuration error: {message}. Please check your config file and API keys.")
            }
            WhereNowError::Network { .. } => {
                "Unable to connect to external services. Please check your internet connection."
                    .to_string()
            }
            WhereNowError::Status { status, .. } => {
                format!("An external service rejected the request (HTTP {status}).")
            }
            WhereNowError::Body { .. } | WhereNowError::Decode { .. } => {
                "An external service sent an unexpected response.".to_string()
            }
            WhereNowError::Lookup { message } => format!("Location lookup failed: {message}"),
            WhereNowError::OffsetOutOfRange { .. } => {
                "The timezone service returned an unusable offset.".to_string()
            }
            WhereNowError::Io { .. } => "Failed to write output.".to_string(),
        }
    }
}
