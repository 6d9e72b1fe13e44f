use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Every failure a lesson operation can report.
/// Callers branch on the variant (or on [`LessonError::kind`]) instead of unwinding.
#[derive(Error, Debug)]
pub enum LessonError {
    #[error("{operation}: {reason}")]
    Domain {
        operation: &'static str,
        reason: &'static str,
    },

    #[error("cannot divide {numerator} by zero")]
    DivisionByZero { numerator: f64 },

    #[error("invalid {name} {value}: {reason}")]
    InvalidArgument {
        name: &'static str,
        value: i64,
        reason: &'static str,
    },

    #[error("file not found: {}", .path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("unexpected error in {subject}: {message}")]
    Unexpected { subject: String, message: String },
}

/// Field-less discriminant of [`LessonError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Domain,
    DivisionByZero,
    InvalidArgument,
    FileNotFound,
    Io,
    Unexpected,
}

impl LessonError {
    pub fn domain(operation: &'static str, reason: &'static str) -> Self {
        Self::Domain { operation, reason }
    }

    pub fn invalid_argument(name: &'static str, value: i64, reason: &'static str) -> Self {
        Self::InvalidArgument { name, value, reason }
    }

    /// Classify an I/O failure on `path`.
    /// `NotFound` is singled out, malformed content is unexpected, the rest is plain I/O.
    pub fn from_io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        let path = path.into();
        match source.kind() {
            io::ErrorKind::NotFound => Self::FileNotFound { path, source },
            io::ErrorKind::InvalidData | io::ErrorKind::UnexpectedEof => Self::Unexpected {
                subject: path.display().to_string(),
                message: source.to_string(),
            },
            _ => Self::Io { path, source },
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Domain { .. } => ErrorKind::Domain,
            Self::DivisionByZero { .. } => ErrorKind::DivisionByZero,
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::FileNotFound { .. } => ErrorKind::FileNotFound,
            Self::Io { .. } => ErrorKind::Io,
            Self::Unexpected { .. } => ErrorKind::Unexpected,
        }
    }
}

pub type Result<T> = std::result::Result<T, LessonError>;
