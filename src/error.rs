use thiserror::Error;

/// Failure of a single suggestion request.
///
/// Cancellation is not represented here: an aborted request never delivers
/// a result at all.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    #[error("transport error: {0}")]
    Transport(String),
    #[error("server responded with {status}")]
    Status {
        status: u16,
        /// `message` field of the error body, if the server sent one
        message: Option<String>,
    },
    #[error("malformed response: {0}")]
    Decode(String),
}

impl FetchError {
    /// Text to show the user: the server's own message when it supplied one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            FetchError::Status {
                message: Some(message),
                ..
            } if !message.trim().is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            return FetchError::Decode(err.to_string());
        }
        if err.is_timeout() {
            return FetchError::Transport("request timed out".to_string());
        }
        FetchError::Transport(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_message_wins_over_fallback() {
        let err = FetchError::Status {
            status: 503,
            message: Some("Bird service is napping".to_string()),
        };
        assert_eq!(err.user_message("Error fetching suggestions"), "Bird service is napping");
    }

    #[test]
    fn fallback_used_without_server_message() {
        let blank = FetchError::Status {
            status: 500,
            message: Some("  ".to_string()),
        };
        assert_eq!(blank.user_message("generic"), "generic");
        assert_eq!(
            FetchError::Transport("connection refused".to_string()).user_message("generic"),
            "generic"
        );
        assert_eq!(FetchError::Decode("eof".to_string()).user_message("generic"), "generic");
    }
}
