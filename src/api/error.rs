use thiserror::Error;

/// Everything that can go wrong talking to the backend. The UI collapses all
/// variants into the same error modal; the detail only reaches the log.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("{path} answered with HTTP {status}")]
    Status { path: &'static str, status: u16 },

    #[error("could not decode response from {path}: {source}")]
    Decode {
        path: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
