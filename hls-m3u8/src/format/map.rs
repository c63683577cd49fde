use std::fmt::Display;

use smol_str::SmolStr;

use crate::{
    attributes::{AttributeListWriter, AttributeMap, Attributes},
    error::{TagError, ValidationError},
    format::{ByteRange, Tag, directives, directives::attr},
};

const KNOWN: &[&str] = &[attr::URI, attr::BYTE_RANGE];

/// `#EXT-X-MAP`, the media initialization section.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapItem {
    pub uri: Option<SmolStr>,
    pub byte_range: Option<ByteRange>,
    pub attributes: AttributeMap,
}

impl MapItem {
    pub fn parse(text: &str) -> Result<Self, TagError> {
        let attributes = Attributes::parse(text);
        let byte_range = attributes
            .string(attr::BYTE_RANGE)
            .map(|v| v.parse::<ByteRange>())
            .transpose()?;

        Ok(Self {
            uri: attributes.string(attr::URI),
            byte_range,
            attributes: attributes.residual(KNOWN),
        })
    }
}

impl Display for MapItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut writer = AttributeListWriter::new();
        writer
            .quoted_opt(attr::URI, self.uri.as_ref())
            .quoted_opt(attr::BYTE_RANGE, self.byte_range.as_ref())
            .residual(&self.attributes);

        write!(f, "{}:{}", directives::MAP, writer)
    }
}

impl Tag for MapItem {
    fn validate(&self) -> Vec<ValidationError> {
        match self.uri {
            Some(_) => Vec::new(),
            None => vec![ValidationError::new(attr::URI)],
        }
    }
}
