/// Core error type for the bot.
///
/// Adapter crates map their specific errors into this type so the poll loop
/// can handle failures consistently (log with full context, then relay a
/// one-line description to the chat).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("endpoint {endpoint} is unreachable: {cause}")]
    EndpointUnreachable { endpoint: String, cause: String },

    #[error("malformed API response: {0}")]
    MalformedResponse(String),

    #[error("response is missing key '{0}'")]
    MissingField(&'static str),

    #[error("unknown homework status: {0}")]
    UnknownStatus(String),

    #[error("message delivery failed: {0}")]
    DeliveryFailed(String),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// One-line description relayed to the chat when a poll cycle fails.
    ///
    /// Kept separate from `Display` so the "what text does the user see"
    /// policy lives in one place instead of being scattered through the loop.
    pub fn user_text(&self) -> String {
        match self {
            Error::EndpointUnreachable { endpoint, cause } => {
                format!("Homework API endpoint {endpoint} is unreachable: {cause}")
            }
            Error::MalformedResponse(reason) => {
                format!("API response does not match the documented contract: {reason}")
            }
            Error::MissingField(key) => {
                format!("Homework record is missing the '{key}' field")
            }
            Error::UnknownStatus(code) => {
                format!("Unknown homework status: {code}")
            }
            Error::DeliveryFailed(cause) => {
                format!("Telegram message was not delivered: {cause}")
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
