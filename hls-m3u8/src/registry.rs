//! Tag literal to line handler table.
//!
//! A handler never touches the playlist. It turns the line into a
//! [`Directive`] and the reader decides what to do with it.

use smol_str::SmolStr;

use crate::{
    attributes::{YES, parse_uint_literal},
    error::TagError,
    format::{
        ByteRange, DateRangeItem, DefineItem, ImageStreamItem, Item, KeyItem, MapItem, MediaItem,
        PlaybackStartItem, Scte35Item, SegmentItem, SessionDataItem, SessionKeyItem, TimeItem,
        VariantItem, directives, tag_value,
    },
};

/// A playlist-level value read from its own tag.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum HeaderField {
    Version(u32),
    MediaSequence(u64),
    DiscontinuitySequence(u64),
    TargetDuration(u64),
    AllowCache(bool),
    PlaylistType(SmolStr),
    IndependentSegments,
    IFramesOnly,
    EndList,
}

/// What a recognized line asks the reader to do.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Directive {
    /// A complete single-line item
    Append(Item),
    /// A variant whose URI is on the next line
    AwaitVariant(VariantItem),
    /// A segment whose URI is on the next line
    AwaitSegment(SegmentItem),
    ProgramDateTime(TimeItem),
    ByteRange(ByteRange),
    Discontinuity,
    Header(HeaderField),
}

pub(crate) type ReadLine = fn(&str) -> Result<Directive, TagError>;

pub(crate) struct TagEntry {
    pub tag: &'static str,
    pub read_line: ReadLine,
}

/// `line` starts with `tag`, and `tag` is not just the front part of a
/// longer hyphenated name.
pub(crate) fn match_tag(line: &str, tag: &str) -> bool {
    line.strip_prefix(tag)
        .is_some_and(|rest| !rest.starts_with('-'))
}

/// Finds the handler for a line. When more than one literal matches, the
/// longest one wins.
pub(crate) fn lookup(line: &str) -> Option<&'static TagEntry> {
    TAGS.iter()
        .filter(|entry| match_tag(line, entry.tag))
        .max_by_key(|entry| entry.tag.len())
}

static TAGS: &[TagEntry] = &[
    TagEntry {
        tag: directives::SESSION_KEY,
        read_line: read_session_key,
    },
    TagEntry {
        tag: directives::KEY,
        read_line: read_key,
    },
    TagEntry {
        tag: directives::DISCONTINUITY,
        read_line: read_discontinuity,
    },
    TagEntry {
        tag: directives::PROGRAM_DATE_TIME,
        read_line: read_program_date_time,
    },
    TagEntry {
        tag: directives::DATE_RANGE,
        read_line: read_date_range,
    },
    TagEntry {
        tag: directives::MAP,
        read_line: read_map,
    },
    TagEntry {
        tag: directives::SESSION_DATA,
        read_line: read_session_data,
    },
    TagEntry {
        tag: directives::EXTINF,
        read_line: read_segment,
    },
    TagEntry {
        tag: directives::BYTE_RANGE,
        read_line: read_byte_range,
    },
    TagEntry {
        tag: directives::START,
        read_line: read_playback_start,
    },
    TagEntry {
        tag: directives::MEDIA,
        read_line: read_media,
    },
    TagEntry {
        tag: directives::STREAM_INF,
        read_line: read_variant,
    },
    TagEntry {
        tag: directives::I_FRAME_STREAM_INF,
        read_line: read_iframe_variant,
    },
    TagEntry {
        tag: directives::DEFINE,
        read_line: read_define,
    },
    TagEntry {
        tag: directives::SCTE35,
        read_line: read_scte35,
    },
    TagEntry {
        tag: directives::IMAGE_STREAM_INF,
        read_line: read_image_stream,
    },
    TagEntry {
        tag: directives::ENDLIST,
        read_line: read_endlist,
    },
    TagEntry {
        tag: directives::TARGET_DURATION,
        read_line: read_target_duration,
    },
    TagEntry {
        tag: directives::ALLOW_CACHE,
        read_line: read_allow_cache,
    },
    TagEntry {
        tag: directives::DISCONTINUITY_SEQUENCE,
        read_line: read_discontinuity_sequence,
    },
    TagEntry {
        tag: directives::INDEPENDENT_SEGMENTS,
        read_line: read_independent_segments,
    },
    TagEntry {
        tag: directives::PLAYLIST_TYPE,
        read_line: read_playlist_type,
    },
    TagEntry {
        tag: directives::I_FRAMES_ONLY,
        read_line: read_iframes_only,
    },
    TagEntry {
        tag: directives::MEDIA_SEQUENCE,
        read_line: read_media_sequence,
    },
    TagEntry {
        tag: directives::VERSION,
        read_line: read_version,
    },
    TagEntry {
        tag: directives::BITRATE,
        read_line: not_implemented,
    },
    TagEntry {
        tag: directives::CONTENT_STEERING,
        read_line: not_implemented,
    },
    TagEntry {
        tag: directives::GAP,
        read_line: not_implemented,
    },
    TagEntry {
        tag: directives::PART,
        read_line: not_implemented,
    },
    TagEntry {
        tag: directives::PART_INF,
        read_line: not_implemented,
    },
    TagEntry {
        tag: directives::PRELOAD_HINT,
        read_line: not_implemented,
    },
    TagEntry {
        tag: directives::RENDITION_REPORT,
        read_line: not_implemented,
    },
    TagEntry {
        tag: directives::SERVER_CONTROL,
        read_line: not_implemented,
    },
    TagEntry {
        tag: directives::SKIP,
        read_line: not_implemented,
    },
];

fn read_session_key(line: &str) -> Result<Directive, TagError> {
    Ok(Directive::Append(SessionKeyItem::parse(line)?.into()))
}

fn read_key(line: &str) -> Result<Directive, TagError> {
    Ok(Directive::Append(KeyItem::parse(line)?.into()))
}

fn read_discontinuity(_: &str) -> Result<Directive, TagError> {
    Ok(Directive::Discontinuity)
}

fn read_program_date_time(line: &str) -> Result<Directive, TagError> {
    Ok(Directive::ProgramDateTime(TimeItem::parse(line)?))
}

fn read_date_range(line: &str) -> Result<Directive, TagError> {
    Ok(Directive::Append(DateRangeItem::parse(line)?.into()))
}

fn read_map(line: &str) -> Result<Directive, TagError> {
    Ok(Directive::Append(MapItem::parse(line)?.into()))
}

fn read_session_data(line: &str) -> Result<Directive, TagError> {
    Ok(Directive::Append(SessionDataItem::parse(line)?.into()))
}

fn read_segment(line: &str) -> Result<Directive, TagError> {
    Ok(Directive::AwaitSegment(SegmentItem::parse(line)?))
}

fn read_byte_range(line: &str) -> Result<Directive, TagError> {
    Ok(Directive::ByteRange(
        tag_value(line, directives::BYTE_RANGE).trim().parse::<ByteRange>()?,
    ))
}

fn read_playback_start(line: &str) -> Result<Directive, TagError> {
    Ok(Directive::Append(PlaybackStartItem::parse(line)?.into()))
}

fn read_media(line: &str) -> Result<Directive, TagError> {
    Ok(Directive::Append(MediaItem::parse(line)?.into()))
}

fn read_variant(line: &str) -> Result<Directive, TagError> {
    Ok(Directive::AwaitVariant(VariantItem::parse(line, false)?))
}

fn read_iframe_variant(line: &str) -> Result<Directive, TagError> {
    Ok(Directive::Append(VariantItem::parse(line, true)?.into()))
}

fn read_define(line: &str) -> Result<Directive, TagError> {
    Ok(Directive::Append(DefineItem::parse(line)?.into()))
}

fn read_scte35(line: &str) -> Result<Directive, TagError> {
    Ok(Directive::Append(Scte35Item::parse(line)?.into()))
}

fn read_image_stream(line: &str) -> Result<Directive, TagError> {
    Ok(Directive::Append(ImageStreamItem::parse(line)?.into()))
}

fn read_endlist(_: &str) -> Result<Directive, TagError> {
    Ok(Directive::Header(HeaderField::EndList))
}

fn read_independent_segments(_: &str) -> Result<Directive, TagError> {
    Ok(Directive::Header(HeaderField::IndependentSegments))
}

fn read_iframes_only(_: &str) -> Result<Directive, TagError> {
    Ok(Directive::Header(HeaderField::IFramesOnly))
}

fn read_target_duration(line: &str) -> Result<Directive, TagError> {
    let value = header_number(line, directives::TARGET_DURATION)?;
    Ok(Directive::Header(HeaderField::TargetDuration(value)))
}

fn read_media_sequence(line: &str) -> Result<Directive, TagError> {
    let value = header_number(line, directives::MEDIA_SEQUENCE)?;
    Ok(Directive::Header(HeaderField::MediaSequence(value)))
}

fn read_discontinuity_sequence(line: &str) -> Result<Directive, TagError> {
    let value = header_number(line, directives::DISCONTINUITY_SEQUENCE)?;
    Ok(Directive::Header(HeaderField::DiscontinuitySequence(value)))
}

fn read_version(line: &str) -> Result<Directive, TagError> {
    let value = header_number(line, directives::VERSION)?;
    let version = u32::try_from(value).map_err(|_| TagError::InvalidInteger {
        key: directives::VERSION.into(),
        value: value.to_string().into(),
    })?;

    Ok(Directive::Header(HeaderField::Version(version)))
}

fn read_allow_cache(line: &str) -> Result<Directive, TagError> {
    let value = header_text(line, directives::ALLOW_CACHE)?;
    Ok(Directive::Header(HeaderField::AllowCache(value == YES)))
}

fn read_playlist_type(line: &str) -> Result<Directive, TagError> {
    let value = header_text(line, directives::PLAYLIST_TYPE)?;
    Ok(Directive::Header(HeaderField::PlaylistType(value.into())))
}

fn not_implemented(line: &str) -> Result<Directive, TagError> {
    let tag = TAGS
        .iter()
        .filter(|entry| match_tag(line, entry.tag))
        .map(|entry| entry.tag)
        .max_by_key(|tag| tag.len())
        .unwrap_or_default();

    Err(TagError::NotImplemented(tag))
}

fn header_text<'a>(line: &'a str, tag: &'static str) -> Result<&'a str, TagError> {
    let value = tag_value(line, tag).trim();
    if value.is_empty() {
        return Err(TagError::MissingValue(tag));
    }

    Ok(value)
}

fn header_number(line: &str, tag: &'static str) -> Result<u64, TagError> {
    let value = header_text(line, tag)?;
    parse_uint_literal(value).ok_or_else(|| TagError::InvalidInteger {
        key: tag.into(),
        value: value.into(),
    })
}
