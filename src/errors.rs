use std::fmt;

/// Fixed message shown when a submission is empty or blank
pub const EMPTY_URL_MESSAGE: &str = "Please enter a URL.";
/// Fixed message shown when the collection endpoint cannot be read
pub const FETCH_FAILED_MESSAGE: &str = "Could not fetch URLs from the server.";
/// Fallback message when a shorten request fails without a server-provided reason
pub const SUBMIT_FAILED_MESSAGE: &str = "An error occurred while shortening the URL.";

/// Errors raised by the HTTP API client
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientError {
    /// Connection refused, DNS failure, timeout...
    Transport(String),
    /// Non-2xx response; `message` carries the server's `error` field if any
    Status { status: u16, message: Option<String> },
    /// Response body was not the expected JSON shape
    Decode(String),
    /// Blocking worker panicked or was cancelled
    TaskJoin(String),
}

impl ClientError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            ClientError::Transport(_) => "E001",
            ClientError::Status { .. } => "E002",
            ClientError::Decode(_) => "E003",
            ClientError::TaskJoin(_) => "E004",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            ClientError::Transport(_) => "Transport Error",
            ClientError::Status { .. } => "Server Error",
            ClientError::Decode(_) => "Decode Error",
            ClientError::TaskJoin(_) => "Task Join Error",
        }
    }

    /// Message the server reported in its `{ "error": ... }` payload
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Status {
                message: Some(msg), ..
            } => Some(msg),
            _ => None,
        }
    }
}

impl fmt::Display for ClientError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClientError::Transport(msg) | ClientError::Decode(msg) | ClientError::TaskJoin(msg) => {
                write!(f, "{}: {}", self.error_type(), msg)
            }
            ClientError::Status {
                status,
                message: Some(msg),
            } => write!(f, "{} (HTTP {}): {}", self.error_type(), status, msg),
            ClientError::Status {
                status,
                message: None,
            } => write!(f, "{} (HTTP {})", self.error_type(), status),
        }
    }
}

impl std::error::Error for ClientError {}

impl From<ureq::Error> for ClientError {
    fn from(err: ureq::Error) -> Self {
        match err {
            ureq::Error::StatusCode(status) => ClientError::Status {
                status,
                message: None,
            },
            ureq::Error::Json(e) => ClientError::Decode(e.to_string()),
            other => ClientError::Transport(other.to_string()),
        }
    }
}

impl From<serde_json::Error> for ClientError {
    fn from(err: serde_json::Error) -> Self {
        ClientError::Decode(err.to_string())
    }
}

impl From<tokio::task::JoinError> for ClientError {
    fn from(err: tokio::task::JoinError) -> Self {
        ClientError::TaskJoin(err.to_string())
    }
}

/// Which operation produced a request error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestOrigin {
    Fetch,
    Submit,
}

/// User-visible error held in the view state
///
/// Never propagated further than the status bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewError {
    /// Rejected locally, no request was sent
    Validation(String),
    /// Transport, decode or server-reported failure
    Request {
        origin: RequestOrigin,
        message: String,
    },
}

impl ViewError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        ViewError::Validation(msg.into())
    }

    pub fn request<T: Into<String>>(origin: RequestOrigin, msg: T) -> Self {
        ViewError::Request {
            origin,
            message: msg.into(),
        }
    }

    pub fn message(&self) -> &str {
        match self {
            ViewError::Validation(msg) => msg,
            ViewError::Request { message, .. } => message,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ViewError::Validation(_))
    }

    pub fn origin(&self) -> Option<RequestOrigin> {
        match self {
            ViewError::Validation(_) => None,
            ViewError::Request { origin, .. } => Some(*origin),
        }
    }
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ViewError {}

pub type Result<T> = std::result::Result<T, ClientError>;
