use std::fmt::Display;

use smol_str::SmolStr;

use crate::{
    attributes::{AttributeListWriter, AttributeMap, Attributes},
    error::{TagError, ValidationError},
    format::{Tag, directives, directives::attr},
};

const KNOWN: &[&str] = &[
    attr::TYPE,
    attr::GROUP_ID,
    attr::NAME,
    attr::LANGUAGE,
    attr::ASSOC_LANGUAGE,
    attr::AUTOSELECT,
    attr::DEFAULT,
    attr::FORCED,
    attr::URI,
    attr::INSTREAM_ID,
    attr::CHARACTERISTICS,
    attr::CHANNELS,
    attr::STABLE_RENDITION_ID,
];

/// `#EXT-X-MEDIA`, an alternative rendition (audio, video, subtitles or
/// closed captions) of a variant.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MediaItem {
    pub media_type: Option<SmolStr>,
    pub group_id: Option<SmolStr>,
    pub name: Option<SmolStr>,
    pub language: Option<SmolStr>,
    pub assoc_language: Option<SmolStr>,
    pub autoselect: Option<bool>,
    pub default: Option<bool>,
    pub forced: Option<bool>,
    pub uri: Option<SmolStr>,
    pub instream_id: Option<SmolStr>,
    pub characteristics: Option<SmolStr>,
    pub channels: Option<SmolStr>,
    pub stable_rendition_id: Option<SmolStr>,
    /// Attributes without a field, written after the known ones
    pub attributes: AttributeMap,
}

impl MediaItem {
    pub fn parse(text: &str) -> Result<Self, TagError> {
        let attributes = Attributes::parse(text);

        Ok(Self {
            media_type: attributes.string(attr::TYPE),
            group_id: attributes.string(attr::GROUP_ID),
            name: attributes.string(attr::NAME),
            language: attributes.string(attr::LANGUAGE),
            assoc_language: attributes.string(attr::ASSOC_LANGUAGE),
            autoselect: attributes.yes_no(attr::AUTOSELECT),
            default: attributes.yes_no(attr::DEFAULT),
            forced: attributes.yes_no(attr::FORCED),
            uri: attributes.string(attr::URI),
            instream_id: attributes.string(attr::INSTREAM_ID),
            characteristics: attributes.string(attr::CHARACTERISTICS),
            channels: attributes.string(attr::CHANNELS),
            stable_rendition_id: attributes.string(attr::STABLE_RENDITION_ID),
            attributes: attributes.residual(KNOWN),
        })
    }
}

impl Display for MediaItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut writer = AttributeListWriter::new();
        writer
            .plain_opt(attr::TYPE, self.media_type.as_ref())
            .quoted_opt(attr::GROUP_ID, self.group_id.as_ref())
            .quoted_opt(attr::LANGUAGE, self.language.as_ref())
            .quoted_opt(attr::ASSOC_LANGUAGE, self.assoc_language.as_ref())
            .quoted_opt(attr::NAME, self.name.as_ref())
            .yes_no_opt(attr::AUTOSELECT, self.autoselect)
            .yes_no_opt(attr::DEFAULT, self.default)
            .quoted_opt(attr::URI, self.uri.as_ref())
            .yes_no_opt(attr::FORCED, self.forced)
            .quoted_opt(attr::INSTREAM_ID, self.instream_id.as_ref())
            .quoted_opt(attr::CHARACTERISTICS, self.characteristics.as_ref())
            .quoted_opt(attr::CHANNELS, self.channels.as_ref())
            .quoted_opt(attr::STABLE_RENDITION_ID, self.stable_rendition_id.as_ref())
            .residual(&self.attributes);

        write!(f, "{}:{}", directives::MEDIA, writer)
    }
}

impl Tag for MediaItem {
    fn validate(&self) -> Vec<ValidationError> {
        [
            (attr::TYPE, &self.media_type),
            (attr::GROUP_ID, &self.group_id),
            (attr::NAME, &self.name),
        ]
        .into_iter()
        .filter(|(_, value)| value.is_none())
        .map(|(attribute, _)| ValidationError::new(attribute))
        .collect()
    }
}
