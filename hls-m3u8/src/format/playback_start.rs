use std::fmt::Display;

use crate::{
    attributes::{AttributeListWriter, AttributeMap, Attributes},
    error::TagError,
    format::{Tag, directives, directives::attr},
};

const KNOWN: &[&str] = &[attr::TIME_OFFSET, attr::PRECISE];

/// `#EXT-X-START`, the preferred point to start playback from.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlaybackStartItem {
    pub time_offset: f64,
    pub precise: Option<bool>,
    pub attributes: AttributeMap,
}

impl PlaybackStartItem {
    pub fn new(time_offset: f64) -> Self {
        Self {
            time_offset,
            ..Default::default()
        }
    }

    /// `TIME-OFFSET` is required, a line without it is rejected.
    pub fn parse(text: &str) -> Result<Self, TagError> {
        let attributes = Attributes::parse(text);

        Ok(Self {
            time_offset: attributes
                .float(attr::TIME_OFFSET)?
                .ok_or(TagError::MissingAttribute(attr::TIME_OFFSET))?,
            precise: attributes.yes_no(attr::PRECISE),
            attributes: attributes.residual(KNOWN),
        })
    }
}

impl Display for PlaybackStartItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut writer = AttributeListWriter::new();
        writer
            .plain(attr::TIME_OFFSET, self.time_offset)
            .yes_no_opt(attr::PRECISE, self.precise)
            .residual(&self.attributes);

        write!(f, "{}:{}", directives::START, writer)
    }
}

impl Tag for PlaybackStartItem {}
