use std::fmt::Display;

use smol_str::SmolStr;

use crate::{
    attributes::{AttributeListWriter, AttributeMap, Attributes},
    error::{TagError, ValidationError},
    format::{Tag, directives, directives::attr},
};

const KNOWN: &[&str] = &[
    attr::METHOD,
    attr::URI,
    attr::IV,
    attr::KEY_FORMAT,
    attr::KEY_FORMAT_VERSIONS,
    attr::KEY_ID,
];

/// Attributes shared by `#EXT-X-KEY` and `#EXT-X-SESSION-KEY`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Encryptable {
    pub method: Option<SmolStr>,
    pub uri: Option<SmolStr>,
    pub iv: Option<SmolStr>,
    pub key_format: Option<SmolStr>,
    pub key_format_versions: Option<SmolStr>,
    pub key_id: Option<SmolStr>,
    pub attributes: AttributeMap,
}

impl Encryptable {
    pub fn from_attributes(attributes: &Attributes) -> Self {
        Self {
            method: attributes.string(attr::METHOD),
            uri: attributes.string(attr::URI),
            iv: attributes.string(attr::IV),
            key_format: attributes.string(attr::KEY_FORMAT),
            key_format_versions: attributes.string(attr::KEY_FORMAT_VERSIONS),
            key_id: attributes.string(attr::KEY_ID),
            attributes: attributes.residual(KNOWN),
        }
    }

    fn validate(&self) -> Vec<ValidationError> {
        match self.method {
            Some(_) => Vec::new(),
            None => vec![ValidationError::new(attr::METHOD)],
        }
    }
}

impl Display for Encryptable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut writer = AttributeListWriter::new();
        writer
            .plain_opt(attr::METHOD, self.method.as_ref())
            .quoted_opt(attr::URI, self.uri.as_ref())
            .plain_opt(attr::IV, self.iv.as_ref())
            .quoted_opt(attr::KEY_FORMAT, self.key_format.as_ref())
            .quoted_opt(attr::KEY_FORMAT_VERSIONS, self.key_format_versions.as_ref())
            .plain_opt(attr::KEY_ID, self.key_id.as_ref())
            .residual(&self.attributes);

        write!(f, "{}", writer)
    }
}

/// `#EXT-X-KEY`, applies to the segments that follow it.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct KeyItem {
    pub encryptable: Encryptable,
}

impl KeyItem {
    pub fn parse(text: &str) -> Result<Self, TagError> {
        Ok(Self {
            encryptable: Encryptable::from_attributes(&Attributes::parse(text)),
        })
    }
}

impl Display for KeyItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", directives::KEY, self.encryptable)
    }
}

impl Tag for KeyItem {
    fn validate(&self) -> Vec<ValidationError> {
        self.encryptable.validate()
    }
}

/// `#EXT-X-SESSION-KEY`, a key preloaded from a master playlist.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionKeyItem {
    pub encryptable: Encryptable,
}

impl SessionKeyItem {
    pub fn parse(text: &str) -> Result<Self, TagError> {
        Ok(Self {
            encryptable: Encryptable::from_attributes(&Attributes::parse(text)),
        })
    }
}

impl Display for SessionKeyItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", directives::SESSION_KEY, self.encryptable)
    }
}

impl Tag for SessionKeyItem {
    fn validate(&self) -> Vec<ValidationError> {
        self.encryptable.validate()
    }
}
