use std::fmt::Display;

use lazy_static::lazy_static;
use regex::Regex;
use smol_str::SmolStr;

use crate::{error::TagError, format::Tag};

lazy_static! {
    static ref TAG_NAME_REGEX: Regex =
        Regex::new(r"^(#EXT[A-Za-z0-9-]*)").expect("Regular expression error");
}

/// A line kept verbatim: an unrecognized tag, a comment, a stray URI, or a
/// recognized tag that could not be read.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnknownItem {
    pub line: SmolStr,
    /// Why a recognized tag ended up here, if it did
    #[cfg_attr(feature = "serde", serde(skip))]
    pub cause: Option<TagError>,
}

impl UnknownItem {
    pub fn new(line: impl Into<SmolStr>) -> Self {
        Self {
            line: line.into(),
            cause: None,
        }
    }

    pub fn with_cause(line: impl Into<SmolStr>, cause: TagError) -> Self {
        Self {
            line: line.into(),
            cause: Some(cause),
        }
    }

    /// The `#EXT...` name of the line, without the colon.
    pub fn tag_name(&self) -> Option<&str> {
        TAG_NAME_REGEX
            .captures(&self.line)
            .and_then(|x| x.get(1))
            .map(|x| x.as_str())
    }
}

impl Display for UnknownItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.line)
    }
}

impl Tag for UnknownItem {}
