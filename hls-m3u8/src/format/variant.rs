use std::fmt::Display;

use smol_str::SmolStr;

use crate::{
    attributes::{AttributeListWriter, AttributeMap, Attributes, NONE, Resolution},
    codecs,
    error::{TagError, ValidationError},
    format::{Tag, directives, directives::attr},
};

const KNOWN: &[&str] = &[
    attr::PROGRAM_ID,
    attr::RESOLUTION,
    attr::CODECS,
    attr::BANDWIDTH,
    attr::AVERAGE_BANDWIDTH,
    attr::FRAME_RATE,
    attr::HDCP_LEVEL,
    attr::AUDIO,
    attr::VIDEO,
    attr::SUBTITLES,
    attr::CLOSED_CAPTIONS,
    attr::NAME,
    attr::STABLE_VARIANT_ID,
    attr::URI,
];

/// Attributes shared by the stream description tags: `#EXT-X-STREAM-INF`,
/// `#EXT-X-I-FRAME-STREAM-INF` and `#EXT-X-IMAGE-STREAM-INF`.
///
/// `profile`, `level` and `audio_codec` are never read from a playlist. They
/// exist for building playlists in code and feed the derived `CODECS` value
/// when `codecs` is not set.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StreamInf {
    pub uri: Option<SmolStr>,
    pub program_id: Option<SmolStr>,
    pub resolution: Option<Resolution>,
    pub codecs: Option<SmolStr>,
    pub bandwidth: Option<u64>,
    pub average_bandwidth: Option<u64>,
    pub frame_rate: Option<f64>,
    pub audio: Option<SmolStr>,
    pub video: Option<SmolStr>,
    pub subtitles: Option<SmolStr>,
    pub closed_captions: Option<SmolStr>,
    pub name: Option<SmolStr>,
    pub stable_variant_id: Option<SmolStr>,
    pub profile: Option<SmolStr>,
    pub level: Option<SmolStr>,
    pub audio_codec: Option<SmolStr>,
    pub attributes: AttributeMap,
}

impl StreamInf {
    /// A missing `BANDWIDTH` leaves the field empty for [`Tag::validate`] to
    /// report, while an unreadable one rejects the line.
    pub(crate) fn from_attributes(
        attributes: &Attributes,
        known: &[&str],
    ) -> Result<Self, TagError> {
        let bandwidth = match attributes.bandwidth(attr::BANDWIDTH) {
            Ok(bandwidth) => Some(bandwidth),
            Err(TagError::BandwidthMissing) => None,
            Err(e) => return Err(e),
        };

        Ok(Self {
            uri: attributes.string(attr::URI),
            program_id: attributes.string(attr::PROGRAM_ID),
            resolution: attributes.resolution(attr::RESOLUTION)?,
            codecs: attributes.string(attr::CODECS),
            bandwidth,
            average_bandwidth: attributes.unsigned(attr::AVERAGE_BANDWIDTH)?,
            frame_rate: attributes.float(attr::FRAME_RATE)?.filter(|v| *v > 0.0),
            audio: attributes.string(attr::AUDIO),
            video: attributes.string(attr::VIDEO),
            subtitles: attributes.string(attr::SUBTITLES),
            closed_captions: attributes.string(attr::CLOSED_CAPTIONS),
            name: attributes.string(attr::NAME),
            stable_variant_id: attributes.string(attr::STABLE_VARIANT_ID),
            profile: None,
            level: None,
            audio_codec: None,
            attributes: attributes.residual(known),
        })
    }

    /// The explicit `CODECS` value, or one derived from profile, level and
    /// audio codec. Empty when neither is available.
    pub fn codecs_string(&self) -> String {
        self.codecs_value().unwrap_or_default()
    }

    fn codecs_value(&self) -> Option<String> {
        match &self.codecs {
            Some(codecs) => Some(codecs.to_string()),
            None => codecs::derive_codecs(
                self.profile.as_deref(),
                self.level.as_deref(),
                self.audio_codec.as_deref(),
            ),
        }
    }

    /// `PROGRAM-ID` through `FRAME-RATE`.
    pub(crate) fn write_head(&self, writer: &mut AttributeListWriter) {
        writer
            .plain_opt(attr::PROGRAM_ID, self.program_id.as_ref())
            .plain_opt(attr::RESOLUTION, self.resolution)
            .quoted_opt(attr::CODECS, self.codecs_value())
            .plain_opt(attr::BANDWIDTH, self.bandwidth)
            .plain_opt(attr::AVERAGE_BANDWIDTH, self.average_bandwidth)
            .plain_opt(
                attr::FRAME_RATE,
                self.frame_rate
                    .filter(|v| *v > 0.0)
                    .map(|v| format!("{:.3}", v)),
            );
    }

    /// `AUDIO` through `STABLE-VARIANT-ID`.
    pub(crate) fn write_tail(&self, writer: &mut AttributeListWriter) {
        writer
            .quoted_opt(attr::AUDIO, self.audio.as_ref())
            .quoted_opt(attr::VIDEO, self.video.as_ref())
            .quoted_opt(attr::SUBTITLES, self.subtitles.as_ref());
        match self.closed_captions.as_deref() {
            Some(NONE) => writer.plain(attr::CLOSED_CAPTIONS, NONE),
            other => writer.quoted_opt(attr::CLOSED_CAPTIONS, other),
        };
        writer
            .quoted_opt(attr::NAME, self.name.as_ref())
            .quoted_opt(attr::STABLE_VARIANT_ID, self.stable_variant_id.as_ref());
    }

    pub(crate) fn validate(&self) -> Vec<ValidationError> {
        let mut errors = Vec::new();
        if self.resolution.is_none() {
            errors.push(ValidationError::new(attr::RESOLUTION));
        }
        if self.average_bandwidth.is_none() {
            errors.push(ValidationError::new(attr::AVERAGE_BANDWIDTH));
        }
        if self.bandwidth.unwrap_or_default() == 0 {
            errors.push(ValidationError::new(attr::BANDWIDTH));
        }
        if self.uri.as_ref().is_none_or(|uri| uri.is_empty()) {
            errors.push(ValidationError::new(attr::URI));
        }
        errors
    }
}

/// `#EXT-X-STREAM-INF` or, with `iframe` set, `#EXT-X-I-FRAME-STREAM-INF`.
///
/// A regular variant takes its URI from the line after the tag, an I-frame
/// variant carries it as the `URI` attribute.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VariantItem {
    pub stream: StreamInf,
    pub hdcp_level: Option<SmolStr>,
    pub iframe: bool,
}

impl VariantItem {
    pub fn parse(text: &str, iframe: bool) -> Result<Self, TagError> {
        let attributes = Attributes::parse(text);

        Ok(Self {
            stream: StreamInf::from_attributes(&attributes, KNOWN)?,
            hdcp_level: attributes.string(attr::HDCP_LEVEL),
            iframe,
        })
    }

    pub fn codecs_string(&self) -> String {
        self.stream.codecs_string()
    }

    pub fn tag(&self) -> &'static str {
        if self.iframe {
            directives::I_FRAME_STREAM_INF
        } else {
            directives::STREAM_INF
        }
    }
}

impl Display for VariantItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut writer = AttributeListWriter::new();
        self.stream.write_head(&mut writer);
        writer.plain_opt(attr::HDCP_LEVEL, self.hdcp_level.as_ref());
        self.stream.write_tail(&mut writer);
        if self.iframe {
            writer.quoted_opt(attr::URI, self.stream.uri.as_ref());
        }
        writer.residual(&self.stream.attributes);

        write!(f, "{}:{}", self.tag(), writer)?;
        if !self.iframe {
            write!(f, "\n{}", self.stream.uri.as_deref().unwrap_or_default())?;
        }

        Ok(())
    }
}

impl Tag for VariantItem {
    fn validate(&self) -> Vec<ValidationError> {
        self.stream.validate()
    }
}
