//! Error types for gateway operations.

/// Errors that can occur when talking to the payment gateway.
#[derive(Debug, thiserror::Error)]
pub enum StripeError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The gateway returned an error response.
    ///
    /// The remote error text is surfaced verbatim; no local interpretation
    /// is applied.
    #[error("Stripe API error: {error_type} - {message}")]
    Api {
        /// Error type reported by the gateway.
        error_type: String,
        /// Error message reported by the gateway.
        message: String,
        /// Error code, if the gateway supplied one.
        code: Option<String>,
    },

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_display_carries_remote_text() {
        let err = StripeError::Api {
            error_type: "invalid_request_error".into(),
            message: "No such plan: gold".into(),
            code: None,
        };
        let rendered = err.to_string();
        assert!(rendered.contains("invalid_request_error"));
        assert!(rendered.contains("No such plan: gold"));
    }
}
