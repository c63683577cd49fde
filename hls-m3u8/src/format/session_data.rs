use std::fmt::Display;

use smol_str::SmolStr;

use crate::{
    attributes::{AttributeListWriter, AttributeMap, Attributes},
    error::{TagError, ValidationError},
    format::{Tag, directives, directives::attr},
};

const KNOWN: &[&str] = &[attr::DATA_ID, attr::VALUE, attr::URI, attr::LANGUAGE];

/// `#EXT-X-SESSION-DATA`, arbitrary session data in a master playlist.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionDataItem {
    pub data_id: Option<SmolStr>,
    pub value: Option<SmolStr>,
    pub uri: Option<SmolStr>,
    pub language: Option<SmolStr>,
    pub attributes: AttributeMap,
}

impl SessionDataItem {
    pub fn parse(text: &str) -> Result<Self, TagError> {
        let attributes = Attributes::parse(text);

        Ok(Self {
            data_id: attributes.string(attr::DATA_ID),
            value: attributes.string(attr::VALUE),
            uri: attributes.string(attr::URI),
            language: attributes.string(attr::LANGUAGE),
            attributes: attributes.residual(KNOWN),
        })
    }
}

impl Display for SessionDataItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut writer = AttributeListWriter::new();
        writer
            .quoted_opt(attr::DATA_ID, self.data_id.as_ref())
            .quoted_opt(attr::VALUE, self.value.as_ref())
            .quoted_opt(attr::URI, self.uri.as_ref())
            .quoted_opt(attr::LANGUAGE, self.language.as_ref())
            .residual(&self.attributes);

        write!(f, "{}:{}", directives::SESSION_DATA, writer)
    }
}

impl Tag for SessionDataItem {
    fn validate(&self) -> Vec<ValidationError> {
        match self.data_id {
            Some(_) => Vec::new(),
            None => vec![ValidationError::new(attr::DATA_ID)],
        }
    }
}
