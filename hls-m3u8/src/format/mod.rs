//! The item model: one type per tag, a [`Playlist`] holding them in order.

use std::fmt::Display;

use crate::error::ValidationError;

pub mod directives;

mod date_range;
mod define;
mod encryption;
mod image_stream;
mod map;
mod media;
mod playback_start;
mod playlist;
mod scte35;
mod segment;
mod session_data;
mod unknown;
mod variant;

pub use crate::attributes::{AttributeMap, Resolution};
pub use date_range::*;
pub use define::*;
pub use encryption::*;
pub use image_stream::*;
pub use map::*;
pub use media::*;
pub use playback_start::*;
pub use playlist::*;
pub use scte35::*;
pub use segment::*;
pub use session_data::*;
pub use unknown::*;
pub use variant::*;

/// What every item can do besides being written out with `Display`.
pub trait Tag: Display {
    /// Semantic complaints about the item. Never blocks reading or writing.
    fn validate(&self) -> Vec<ValidationError> {
        Vec::new()
    }
}

/// The text after `<tag>:`, or the whole text when it does not start with
/// the tag.
pub(crate) fn tag_value<'a>(text: &'a str, tag: &str) -> &'a str {
    match text.strip_prefix(tag) {
        Some(rest) => rest.strip_prefix(':').unwrap_or(rest),
        None => text,
    }
}

/// A playlist entry.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Item {
    SessionKey(SessionKeyItem),
    Key(KeyItem),
    Discontinuity(DiscontinuityItem),
    ProgramDateTime(TimeItem),
    DateRange(DateRangeItem),
    Map(MapItem),
    SessionData(SessionDataItem),
    Segment(SegmentItem),
    PlaybackStart(PlaybackStartItem),
    Media(MediaItem),
    Variant(VariantItem),
    Define(DefineItem),
    Scte35(Scte35Item),
    ImageStream(ImageStreamItem),
    Unknown(UnknownItem),
}

macro_rules! dispatch {
    ($self:ident, $item:ident => $body:expr) => {
        match $self {
            Item::SessionKey($item) => $body,
            Item::Key($item) => $body,
            Item::Discontinuity($item) => $body,
            Item::ProgramDateTime($item) => $body,
            Item::DateRange($item) => $body,
            Item::Map($item) => $body,
            Item::SessionData($item) => $body,
            Item::Segment($item) => $body,
            Item::PlaybackStart($item) => $body,
            Item::Media($item) => $body,
            Item::Variant($item) => $body,
            Item::Define($item) => $body,
            Item::Scte35($item) => $body,
            Item::ImageStream($item) => $body,
            Item::Unknown($item) => $body,
        }
    };
}

impl Item {
    pub fn is_variant(&self) -> bool {
        matches!(self, Item::Variant(_))
    }

    pub fn is_segment(&self) -> bool {
        matches!(self, Item::Segment(_))
    }

    /// Items that only belong in a master playlist.
    pub fn is_master_item(&self) -> bool {
        matches!(
            self,
            Item::Variant(_)
                | Item::Media(_)
                | Item::SessionData(_)
                | Item::SessionKey(_)
                | Item::ImageStream(_)
        )
    }
}

impl Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        dispatch!(self, item => write!(f, "{}", item))
    }
}

impl Tag for Item {
    fn validate(&self) -> Vec<ValidationError> {
        dispatch!(self, item => item.validate())
    }
}

macro_rules! impl_from_item {
    ($($variant:ident($ty:ty)),* $(,)?) => {
        $(
            impl From<$ty> for Item {
                fn from(value: $ty) -> Self {
                    Item::$variant(value)
                }
            }
        )*
    };
}

impl_from_item!(
    SessionKey(SessionKeyItem),
    Key(KeyItem),
    Discontinuity(DiscontinuityItem),
    ProgramDateTime(TimeItem),
    DateRange(DateRangeItem),
    Map(MapItem),
    SessionData(SessionDataItem),
    Segment(SegmentItem),
    PlaybackStart(PlaybackStartItem),
    Media(MediaItem),
    Variant(VariantItem),
    Define(DefineItem),
    Scte35(Scte35Item),
    ImageStream(ImageStreamItem),
    Unknown(UnknownItem),
);
