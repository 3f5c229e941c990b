//! Error taxonomy for the dashboard
//!
//! Every failure the front-end can see falls into one of these buckets.
//! They are all handled the same way at the view layer: log, show an
//! inline placeholder, abandon the operation. Nothing retries.

/// Convenience alias used throughout the workspace.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request never produced an HTTP response (DNS, refused, timeout).
    #[error("network request failed: {0}")]
    Network(String),

    /// The backend answered with a non-OK HTTP status.
    #[error("backend returned HTTP {status} for {endpoint}")]
    HttpStatus { status: u16, endpoint: String },

    /// The response body could not be decoded into the expected shape.
    #[error("malformed response payload: {0}")]
    Payload(String),

    /// The backend answered `status != "success"` in its JSON envelope.
    #[error("backend reported failure: {0}")]
    Backend(String),

    /// An operation was handed an empty sequence it cannot work with.
    #[error("empty input sequence")]
    EmptyInput,
}

impl Error {
    /// Short user-facing text for inline placeholders.
    pub fn user_message(&self) -> String {
        match self {
            Error::Network(_) => "Could not reach the backend".to_string(),
            Error::HttpStatus { status, .. } => format!("Backend error (HTTP {status})"),
            Error::Payload(_) => "Unexpected response from the backend".to_string(),
            Error::Backend(msg) => msg.clone(),
            Error::EmptyInput => "No data to display".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_hides_transport_details() {
        let err = Error::Network("tcp connect error 10.0.0.1:80".to_string());
        assert_eq!(err.user_message(), "Could not reach the backend");
    }

    #[test]
    fn backend_message_is_passed_through() {
        let err = Error::Backend("Colonne inconnue".to_string());
        assert_eq!(err.user_message(), "Colonne inconnue");
    }
}
