use thiserror::Error;

/// Failures from turning raw track-file text into a `ParsedTrack`.
///
/// An empty but well-formed file is not an error: it yields a track with no
/// samples and zero metrics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackError {
    /// Text cannot be scanned as the declared format.
    #[error("malformed input at byte {position}: {reason}")]
    MalformedInput { position: usize, reason: String },

    /// Format hint names a format with no implemented grammar (e.g. `fit`).
    #[error("unsupported track format: '{0}'")]
    UnsupportedFormat(String),

    #[error("input too large: {size} bytes (limit {limit})")]
    InputTooLarge { size: usize, limit: usize },
}

impl TrackError {
    pub(crate) fn malformed(position: usize, reason: impl Into<String>) -> Self {
        TrackError::MalformedInput { position, reason: reason.into() }
    }

    /// Short outcome tag, used as a counter label.
    pub fn kind(&self) -> &'static str {
        match self {
            TrackError::MalformedInput { .. } => "malformed",
            TrackError::UnsupportedFormat(_) => "unsupported",
            TrackError::InputTooLarge { .. } => "too_large",
        }
    }
}

pub type TrackResult<T> = Result<T, TrackError>;

/// Rejections raised while preparing records for the persistence layer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecordError {
    #[error("activity name is empty")]
    EmptyName,
    #[error("activity name must be at least {min} characters")]
    NameTooShort { min: usize },
    #[error("activity name must be at most {max} characters")]
    NameTooLong { max: usize },
    #[error("no activity data found in track")]
    NoActivityData,
    #[error("unknown activity type '{0}' (expected ride or run)")]
    UnknownActivityType(String),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
    #[error("config parse at {path}: {message}")]
    Parse { path: String, message: String },
    #[error("config serialize: {0}")]
    Serialize(#[from] serde_json::Error),
}
