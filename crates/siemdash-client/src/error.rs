/// Errors that can occur while talking to the dashboard backend.
///
/// # Examples
///
/// ```rust
/// use siemdash_client::error::ClientError;
///
/// let err = ClientError::Status(503);
/// assert!(err.to_string().contains("503"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The HTTP round trip itself failed (connect, timeout, body read).
    #[error("Dashboard API: request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend answered with a non-success status.
    #[error("Dashboard API: endpoint returned status {0}")]
    Status(u16),

    /// The response body was not valid JSON.
    #[error("Dashboard API: malformed response body: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience `Result` alias for backend operations.
pub type Result<T> = std::result::Result<T, ClientError>;
