use std::fmt::Display;

use crate::{
    attributes::{AttributeListWriter, Attributes},
    error::{TagError, ValidationError},
    format::{StreamInf, Tag, directives, directives::attr},
};

const KNOWN: &[&str] = &[
    attr::PROGRAM_ID,
    attr::RESOLUTION,
    attr::CODECS,
    attr::BANDWIDTH,
    attr::AVERAGE_BANDWIDTH,
    attr::FRAME_RATE,
    attr::AUDIO,
    attr::VIDEO,
    attr::SUBTITLES,
    attr::CLOSED_CAPTIONS,
    attr::NAME,
    attr::STABLE_VARIANT_ID,
    attr::URI,
];

/// `#EXT-X-IMAGE-STREAM-INF`, a trick-play image rendition. Takes the
/// I-frame variant attributes except `HDCP-LEVEL`, which stays residual.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ImageStreamItem {
    pub stream: StreamInf,
}

impl ImageStreamItem {
    pub fn parse(text: &str) -> Result<Self, TagError> {
        Ok(Self {
            stream: StreamInf::from_attributes(&Attributes::parse(text), KNOWN)?,
        })
    }

    pub fn codecs_string(&self) -> String {
        self.stream.codecs_string()
    }
}

impl Display for ImageStreamItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut writer = AttributeListWriter::new();
        self.stream.write_head(&mut writer);
        self.stream.write_tail(&mut writer);
        writer
            .quoted_opt(attr::URI, self.stream.uri.as_ref())
            .residual(&self.stream.attributes);

        write!(f, "{}:{}", directives::IMAGE_STREAM_INF, writer)
    }
}

impl Tag for ImageStreamItem {
    fn validate(&self) -> Vec<ValidationError> {
        self.stream.validate()
    }
}
