use std::{fmt::Display, str::FromStr};

use chrono::{DateTime, FixedOffset, SecondsFormat};
use smol_str::SmolStr;

use crate::{
    attributes::parse_uint_literal,
    error::{TagError, ValidationError},
    format::{Tag, directives, directives::attr, tag_value},
};

/// A sub-range of a resource, written as `<length>[@<start>]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ByteRange {
    pub length: u64,
    pub start: Option<u64>,
}

impl FromStr for ByteRange {
    type Err = TagError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let number = |text: &str| {
            parse_uint_literal(text.trim()).ok_or_else(|| TagError::InvalidByteRange(s.into()))
        };

        match s.split_once('@') {
            Some((length, start)) => Ok(Self {
                length: number(length)?,
                start: Some(number(start)?),
            }),
            None => Ok(Self {
                length: number(s)?,
                start: None,
            }),
        }
    }
}

impl Display for ByteRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.start {
            Some(start) => write!(f, "{}@{}", self.length, start),
            None => write!(f, "{}", self.length),
        }
    }
}

pub fn parse_time(text: &str) -> Result<DateTime<FixedOffset>, TagError> {
    DateTime::parse_from_rfc3339(text.trim()).map_err(|_| TagError::InvalidDateTime(text.into()))
}

/// RFC 3339 with only as many fractional digits as needed and `Z` for UTC.
pub fn format_time(time: &DateTime<FixedOffset>) -> String {
    time.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// `#EXT-X-PROGRAM-DATE-TIME`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TimeItem {
    pub time: DateTime<FixedOffset>,
}

impl TimeItem {
    pub fn new(time: DateTime<FixedOffset>) -> Self {
        Self { time }
    }

    pub fn parse(text: &str) -> Result<Self, TagError> {
        Ok(Self {
            time: parse_time(tag_value(text, directives::PROGRAM_DATE_TIME))?,
        })
    }
}

impl Display for TimeItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", directives::PROGRAM_DATE_TIME, format_time(&self.time))
    }
}

impl Tag for TimeItem {}

/// `#EXT-X-DISCONTINUITY`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DiscontinuityItem;

impl Display for DiscontinuityItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", directives::DISCONTINUITY)
    }
}

impl Tag for DiscontinuityItem {}

/// A media segment: `#EXTINF` plus the URI line that follows it.
///
/// A byte range and a program date time that appear between the two lines
/// belong to the segment and are written back in the same place.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SegmentItem {
    pub duration: f64,
    pub segment: SmolStr,
    pub comment: Option<SmolStr>,
    pub byte_range: Option<ByteRange>,
    pub program_date_time: Option<TimeItem>,
}

impl SegmentItem {
    pub fn new(duration: f64, segment: impl Into<SmolStr>) -> Self {
        Self {
            duration,
            segment: segment.into(),
            ..Default::default()
        }
    }

    /// Parses the `#EXTINF:<duration>,[<title>]` line. The URI is filled in
    /// later from the continuation line.
    pub fn parse(text: &str) -> Result<Self, TagError> {
        let value = tag_value(text, directives::EXTINF).replace(['\n', '\r'], "");
        let (duration, comment) = value.split_once(',').unwrap_or((value.as_str(), ""));

        let duration = duration.trim();
        let duration = duration.parse::<f64>().map_err(|_| TagError::InvalidFloat {
            key: directives::EXTINF.into(),
            value: duration.into(),
        })?;

        Ok(Self {
            duration,
            comment: Some(comment).filter(|c| !c.is_empty()).map(SmolStr::from),
            ..Default::default()
        })
    }
}

impl Display for SegmentItem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{},", directives::EXTINF, self.duration)?;
        if let Some(comment) = &self.comment {
            write!(f, "{}", comment)?;
        }
        if let Some(byte_range) = &self.byte_range {
            write!(f, "\n{}:{}", directives::BYTE_RANGE, byte_range)?;
        }
        if let Some(program_date_time) = &self.program_date_time {
            write!(f, "\n{}", program_date_time)?;
        }

        write!(f, "\n{}", self.segment)
    }
}

impl Tag for SegmentItem {
    fn validate(&self) -> Vec<ValidationError> {
        if self.segment.is_empty() {
            vec![ValidationError::new(attr::URI)]
        } else {
            Vec::new()
        }
    }
}
