//! Station provider error types.

/// Errors from a station-provider lookup.
///
/// All of these are recoverable at the [`StationDirectory`] layer, which
/// substitutes the fallback station set; none cross the planner API.
///
/// [`StationDirectory`]: super::StationDirectory
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// HTTP request failed (network error, timeout, etc.)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Authentication failed
    #[error("unauthorized: check the station provider API key")]
    Unauthorized,

    /// Rate limited by the provider
    #[error("rate limited by the station provider")]
    RateLimited,

    /// Provider returned an error status
    #[error("provider error {status}: {message}")]
    Api { status: u16, message: String },

    /// Failed to parse response JSON
    #[error("JSON parse error: {message}")]
    Json { message: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = DirectoryError::Api {
            status: 503,
            message: "Service Unavailable".into(),
        };
        assert_eq!(err.to_string(), "provider error 503: Service Unavailable");

        let err = DirectoryError::Json {
            message: "expected value".into(),
        };
        assert!(err.to_string().contains("JSON parse error"));

        assert_eq!(
            DirectoryError::RateLimited.to_string(),
            "rate limited by the station provider"
        );
    }
}
