use std::io;

use smol_str::SmolStr;
use thiserror::Error;

/// Errors that abort reading or encoding a whole playlist.
#[derive(Debug, Error)]
pub enum PlaylistError {
    #[error("Unexpected EOF, the playlist is empty")]
    UnexpectedEof,
    #[error("Not a playlist file, it must start with #EXTM3U")]
    NotAPlaylist,
    #[error("Invalid playlist, #EXTM3U appears more than once")]
    DuplicateHeader,
    #[error("Invalid playlist, mixed master and media items")]
    MixedPlaylist,
    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Errors raised while building a single item from its tag line.
///
/// The reader never propagates these, the offending line is kept as an
/// [`UnknownItem`](crate::format::UnknownItem) carrying the cause instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TagError {
    #[error("invalid integer {value:?} for {key}")]
    InvalidInteger { key: SmolStr, value: SmolStr },
    #[error("invalid float {value:?} for {key}")]
    InvalidFloat { key: SmolStr, value: SmolStr },
    #[error("missing bandwidth")]
    BandwidthMissing,
    #[error("invalid bandwidth {0:?}")]
    BandwidthInvalid(SmolStr),
    #[error("invalid resolution {0:?}")]
    InvalidResolution(SmolStr),
    #[error("invalid byte range {0:?}")]
    InvalidByteRange(SmolStr),
    #[error("invalid date time {0:?}")]
    InvalidDateTime(SmolStr),
    #[error("missing {0} attribute")]
    MissingAttribute(&'static str),
    #[error("missing value for {0}")]
    MissingValue(&'static str),
    #[error("tag {0} is not implemented")]
    NotImplemented(&'static str),
}

/// An advisory complaint about an item, see [`Tag::validate`](crate::format::Tag::validate).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{attribute} attribute is not valid")]
pub struct ValidationError {
    pub attribute: &'static str,
}

impl ValidationError {
    pub fn new(attribute: &'static str) -> Self {
        Self { attribute }
    }
}
