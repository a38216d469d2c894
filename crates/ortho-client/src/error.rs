//! Client error taxonomy.
//!
//! Three failure classes, mirroring what the operator actually needs to
//! distinguish: the network failed, the server said no, or the server said
//! yes but sent something unreadable. Nothing is retried automatically; a
//! failed call leaves caller state untouched for manual re-submission.

use std::fmt;

/// Error returned by every [`crate::AdminClient`] call.
#[derive(Debug)]
pub enum ClientError {
    /// Connection, TLS or timeout failure before a response arrived.
    Transport(reqwest::Error),
    /// Non-2xx response. `message` is extracted from a JSON `detail` /
    /// `message` field when present, otherwise the raw body.
    Api { status: u16, message: String },
    /// 2xx response whose body did not match the expected shape.
    Decode(String),
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(e) => write!(f, "transport error: {e}"),
            ClientError::Api { status, message } => {
                write!(f, "admin api error ({status}): {message}")
            }
            ClientError::Decode(msg) => write!(f, "unexpected response body: {msg}"),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Transport(e) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(e: reqwest::Error) -> Self {
        ClientError::Transport(e)
    }
}

impl ClientError {
    /// Operator-facing copy. Server messages pass through verbatim except
    /// for a few known phrases that get friendlier wording; there are no
    /// structured error codes to switch on.
    pub fn user_message(&self) -> String {
        match self {
            ClientError::Transport(_) => {
                "Could not reach the server. Check your connection and try again.".to_string()
            }
            ClientError::Api { message, .. } => {
                if message.contains("already verified") {
                    "Already verified — no action needed.".to_string()
                } else if message.is_empty() {
                    "The server rejected the request.".to_string()
                } else {
                    message.clone()
                }
            }
            ClientError::Decode(_) => {
                "The server sent an unexpected response. Refresh and try again.".to_string()
            }
        }
    }
}

/// Pull a human-readable message out of an error response body: prefer a
/// JSON `detail` or `message` string, fall back to the raw (trimmed) body.
pub(crate) fn extract_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["detail", "message"] {
            if let Some(msg) = value.get(key).and_then(|v| v.as_str()) {
                return msg.to_string();
            }
        }
    }
    body.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_detail_then_message_then_raw() {
        assert_eq!(extract_message(r#"{"detail":"no such order"}"#), "no such order");
        assert_eq!(extract_message(r#"{"message":"bad input"}"#), "bad input");
        assert_eq!(extract_message("plain text\n"), "plain text");
    }

    #[test]
    fn already_verified_gets_friendly_copy() {
        let err = ClientError::Api {
            status: 409,
            message: "email is already verified".to_string(),
        };
        assert_eq!(err.user_message(), "Already verified — no action needed.");
    }

    #[test]
    fn other_api_messages_pass_through() {
        let err = ClientError::Api {
            status: 422,
            message: "amount mismatch".to_string(),
        };
        assert_eq!(err.user_message(), "amount mismatch");
    }
}
