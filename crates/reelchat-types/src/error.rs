use thiserror::Error;

/// Fallback text when a failing server response carries no `message`.
pub const DEFAULT_SERVER_MESSAGE: &str = "Something went wrong.";

/// Every failure a chat operation can surface.
///
/// The `Display` output is the text shown to the user, either as a
/// system entry in the transcript or as an inline form error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChatError {
    /// The backend base address could not be resolved.
    #[error("Configuration error: Backend URL is missing. Please contact support.")]
    Configuration,

    /// No auth token in local storage; the caller should redirect to login.
    #[error("Authentication token not found. Please log in again.")]
    Authentication,

    /// The server answered with a non-2xx status.
    #[error("Server error: {status} - {message}")]
    Server { status: u16, message: String },

    /// The request went out but no response came back.
    #[error("Network error: Could not connect to the backend. Please check your internet connection or server status.")]
    Network(String),

    /// The request could not be constructed at all.
    #[error("Request setup error: {0}")]
    RequestSetup(String),

    /// A 2xx response whose body did not have the expected shape.
    #[error("Unexpected response from server: {0}")]
    MalformedResponse(String),

    /// Creating a chat requires a signed-in user.
    #[error("No user is signed in. Please log in first.")]
    MissingUser,

    /// Creating a chat requires a character name.
    #[error("Please select or enter a character")]
    MissingCharacter,
}

impl ChatError {
    /// Build a `Server` error from a status code and the raw response body.
    pub fn server(status: u16, body: &str) -> Self {
        ChatError::Server {
            status,
            message: server_message(body).unwrap_or_else(|| DEFAULT_SERVER_MESSAGE.to_string()),
        }
    }

    /// Whether the error should send the user back to the login step.
    pub fn requires_login(&self) -> bool {
        matches!(self, ChatError::Authentication | ChatError::MissingUser)
    }
}

/// Pull the `message` field out of a JSON error body, if there is one.
pub fn server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    value
        .get("message")
        .and_then(|m| m.as_str())
        .filter(|m| !m.trim().is_empty())
        .map(str::to_string)
}
