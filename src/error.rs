use thiserror::Error;

/// Why a lead did not reach the backend.
///
/// The controller treats every variant the same way: the form is marked
/// failed and the visitor can retry by hand.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("lead endpoint answered with HTTP {status}")]
    Status { status: u16 },
}

impl SubmitError {
    /// HTTP status of the rejection, when the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            SubmitError::Status { status } => Some(*status),
            SubmitError::Transport(err) => err.status().map(|s| s.as_u16()),
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid api base `{value}`: {source}")]
    InvalidApiBase {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("api base `{0}` must be an http or https origin")]
    UnsupportedScheme(String),

    #[error("{0} must be greater than zero")]
    Zero(&'static str),

    #[error("malformed configuration: {0}")]
    Json(#[from] serde_json::Error),
}
