use thiserror::Error;

/// Failure kinds for a single network round trip.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    Connection,
    Timeout,
    RedirectLoop,
    Other(String),
}

impl std::fmt::Display for TransportFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TransportFailure::Connection => f.write_str("connection failure"),
            TransportFailure::Timeout => f.write_str("timed out"),
            TransportFailure::RedirectLoop => f.write_str("redirect loop"),
            TransportFailure::Other(detail) => f.write_str(detail),
        }
    }
}

/// Everything that can go wrong during one weather fetch.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Missing or invalid credential, or blank city input.
    #[error("configuration error: {0}")]
    Config(String),

    /// Non-success HTTP status; `body` is carried truncated for diagnostics.
    #[error("request failed with status {status}: {body}")]
    Http { status: u16, body: String },

    /// The round trip itself failed before a status line was seen.
    #[error("transport failure: {0}")]
    Transport(TransportFailure),

    /// A nominally successful call returned an unexpected payload shape,
    /// including an application-level status other than 200.
    #[error("malformed response: {0}")]
    MalformedResponse(String),

    /// A fetch is already outstanding on this service.
    #[error("a fetch is already in flight")]
    Busy,
}

/// User-facing classification of a failed fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorState {
    pub title: String,
    pub message: String,
}

impl ErrorState {
    fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self { title: title.into(), message: message.into() }
    }
}

impl std::fmt::Display for ErrorState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}\n{}", self.title, self.message)
    }
}

impl FetchError {
    /// Classify a reqwest failure into its transport kind.
    pub fn from_transport(err: reqwest::Error) -> Self {
        let kind = if err.is_timeout() {
            TransportFailure::Timeout
        } else if err.is_connect() {
            TransportFailure::Connection
        } else if err.is_redirect() {
            TransportFailure::RedirectLoop
        } else {
            TransportFailure::Other(err.to_string())
        };

        FetchError::Transport(kind)
    }

    /// Render the fixed title/message pair shown to the user.
    ///
    /// Every variant classifies to a visible state; unrecognized HTTP
    /// codes still get a status-specific fallback.
    pub fn state(&self) -> ErrorState {
        match self {
            FetchError::Config(message) => ErrorState::new("Configuration Error", message.clone()),
            FetchError::Http { status, .. } => classify_status(*status),
            FetchError::Transport(TransportFailure::Connection) => {
                ErrorState::new("Connection Error", "Check your internet connection")
            }
            FetchError::Transport(TransportFailure::Timeout) => {
                ErrorState::new("Timeout Error", "The request timed out")
            }
            FetchError::Transport(TransportFailure::RedirectLoop) => {
                ErrorState::new("Too many Redirects", "Check the URL")
            }
            FetchError::Transport(TransportFailure::Other(detail)) => {
                ErrorState::new("Request Error", detail.clone())
            }
            FetchError::MalformedResponse(detail) => ErrorState::new(
                "Malformed Response",
                format!("The server sent an unexpected payload: {detail}"),
            ),
            FetchError::Busy => ErrorState::new(
                "Busy",
                "A request is already in flight. Please wait for it to finish.",
            ),
        }
    }
}

fn classify_status(status: u16) -> ErrorState {
    match status {
        400 => ErrorState::new("Bad request", "Please check your input"),
        401 => ErrorState::new("Unauthorized", "Please check your authentication credentials."),
        403 => ErrorState::new("Forbidden", "You do not have permission to access this resource."),
        404 => ErrorState::new("Not Found", "The requested resource could not be found."),
        500 => ErrorState::new("Internal Server Error", "Something went wrong on the server."),
        502 => ErrorState::new("Bad Gateway", "Received an invalid response from the upstream server."),
        503 => ErrorState::new("Service Unavailable", "The server is currently unable to handle the request."),
        504 => ErrorState::new("Gateway Timeout", "The server took too long to respond."),
        code => ErrorState::new(
            "Unclassified HTTP Error",
            format!("The server responded with HTTP status {code}."),
        ),
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    if body.len() > MAX {
        let cut = body.char_indices().take_while(|(i, _)| *i <= MAX).last().map_or(0, |(i, _)| i);
        format!("{}...", &body[..cut])
    } else {
        body.to_string()
    }
}
