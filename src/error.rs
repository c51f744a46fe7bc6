//! The error and result types used throughout the crate.
//!
//! Every failure is structural: a desynchronized length prefix corrupts all
//! subsequent parsing, so there is no skip-and-continue. The kind of each
//! error is exposed through [`Error::kind`] so callers can distinguish them.

use crate::Tag;

/// An error raised while decoding or encoding NBT data.
#[derive(Debug, Clone)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
}

/// The category of an [`Error`].
#[derive(Debug, Clone)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A read went past the end of the input. Also produced by a compound
    /// whose End terminator is missing: the decoder keeps reading children
    /// until it runs out of bytes.
    UnexpectedEof,

    /// A type-id byte outside the 0..=12 range defined by the format.
    InvalidTag,

    /// A negative value in a length prefix that must be non-negative.
    NegativeLength,

    /// String data that is not valid (modified) UTF-8. Contains the
    /// offending bytes.
    Nonunicode(Vec<u8>),

    /// Encoding a list whose elements are not all of one type.
    HeterogeneousList,

    /// Containers nested past the decoder's depth limit.
    DepthLimit,

    /// Any other error. Match on this with a wildcard `_`; errors in this
    /// category may move to new variants.
    Other,
}

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub(crate) fn unexpected_eof() -> Self {
        Self {
            msg: "unexpectedly ran out of input".into(),
            kind: ErrorKind::UnexpectedEof,
        }
    }

    pub(crate) fn invalid_tag(t: u8) -> Self {
        Self {
            msg: format!("invalid tag: {}", t),
            kind: ErrorKind::InvalidTag,
        }
    }

    pub(crate) fn negative_length(what: &str, len: i32) -> Self {
        Self {
            msg: format!("negative {} length: {}", what, len),
            kind: ErrorKind::NegativeLength,
        }
    }

    pub(crate) fn nonunicode(data: &[u8]) -> Self {
        Self {
            msg: format!(
                "invalid string, non-unicode: {}",
                String::from_utf8_lossy(data)
            ),
            kind: ErrorKind::Nonunicode(data.to_vec()),
        }
    }

    pub(crate) fn heterogeneous_list(expected: Tag, found: Tag) -> Self {
        Self {
            msg: format!(
                "list elements must share one type: expected {}, found {}",
                expected.name(),
                found.name()
            ),
            kind: ErrorKind::HeterogeneousList,
        }
    }

    pub(crate) fn depth_limit(limit: usize) -> Self {
        Self {
            msg: format!("containers nested deeper than {} levels", limit),
            kind: ErrorKind::DepthLimit,
        }
    }

    pub(crate) fn bespoke(msg: impl Into<String>) -> Self {
        Self {
            msg: msg.into(),
            kind: ErrorKind::Other,
        }
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            std::io::ErrorKind::UnexpectedEof => Self {
                msg: e.to_string(),
                kind: ErrorKind::UnexpectedEof,
            },
            _ => Self {
                msg: e.to_string(),
                kind: ErrorKind::Other,
            },
        }
    }
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;
