use thiserror::Error;

/// Failure modes of a completion request.
///
/// None of these are fatal to a session: the frontend surfaces the error and
/// the next submit starts a fresh turn.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The endpoint could not be reached or the stream broke mid-response.
    #[error("Failed to reach completion endpoint: {0}")]
    Network(String),

    /// The endpoint answered with an explicit failure status.
    #[error("Completion endpoint returned status {status}: {body}")]
    Endpoint { status: u16, body: String },

    /// No response (or no further data) within the configured bound.
    #[error("Completion request timed out")]
    Timeout,
}

impl CompletionError {
    /// Collapses the error into the kind carried by the session status.
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) => ErrorKind::Network,
            Self::Endpoint { .. } => ErrorKind::Endpoint,
            Self::Timeout => ErrorKind::Timeout,
        }
    }

    pub(crate) fn from_reqwest(err: &reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout
        } else {
            Self::Network(err.to_string())
        }
    }
}

/// Coarse error classification, suitable for session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Endpoint,
    Timeout,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_mapping() {
        assert_eq!(
            CompletionError::Network("refused".into()).kind(),
            ErrorKind::Network
        );
        assert_eq!(
            CompletionError::Endpoint {
                status: 500,
                body: String::new()
            }
            .kind(),
            ErrorKind::Endpoint
        );
        assert_eq!(CompletionError::Timeout.kind(), ErrorKind::Timeout);
    }

    #[test]
    fn test_endpoint_error_mentions_status() {
        let err = CompletionError::Endpoint {
            status: 429,
            body: "rate limited".to_string(),
        };
        let message = err.to_string();
        assert!(message.contains("429"));
        assert!(message.contains("rate limited"));
    }
}
