use smol_str::SmolStr;

use crate::format::{Item, SegmentItem, VariantItem};

/// A decoded playlist: items in file order plus the playlist-level header
/// values.
///
/// Header values that are optional on the wire are `None` when absent and
/// are only written back when set.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Playlist {
    /// Items of this playlist, order is significant
    pub items: Vec<Item>,
    /// `#EXT-X-VERSION`
    pub version: Option<u32>,
    /// `#EXT-X-MEDIA-SEQUENCE`
    pub sequence: Option<u64>,
    /// `#EXT-X-DISCONTINUITY-SEQUENCE`
    pub discontinuity_sequence: Option<u64>,
    /// `#EXT-X-TARGETDURATION`
    pub target: Option<u64>,
    /// `#EXT-X-ALLOW-CACHE`
    pub cache: Option<bool>,
    /// `#EXT-X-PLAYLIST-TYPE`, `VOD` or `EVENT`
    pub playlist_type: Option<SmolStr>,
    pub independent_segments: bool,
    pub iframes_only: bool,
    /// False once `#EXT-X-ENDLIST` has been seen
    pub live: bool,
    /// Forces the master/media classification when set
    pub master: Option<bool>,
}

impl Default for Playlist {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            version: None,
            sequence: None,
            discontinuity_sequence: None,
            target: None,
            cache: None,
            playlist_type: None,
            independent_segments: false,
            iframes_only: false,
            live: false,
            master: None,
        }
    }
}

impl Playlist {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_item(&mut self, item: impl Into<Item>) {
        self.items.push(item.into());
    }

    /// The explicit `master` flag if set, otherwise whether the playlist has
    /// master-only items and no segments.
    pub fn is_master(&self) -> bool {
        if let Some(master) = self.master {
            return master;
        }

        self.items.iter().any(Item::is_master_item) && !self.items.iter().any(Item::is_segment)
    }

    pub fn is_live(&self) -> bool {
        !self.is_master() && self.live
    }

    /// A playlist may hold variants or segments, never both.
    pub fn is_valid(&self) -> bool {
        !(self.items.iter().any(Item::is_variant) && self.items.iter().any(Item::is_segment))
    }

    /// Sum of all segment durations, in seconds.
    pub fn duration(&self) -> f64 {
        self.segments().map(|x| x.duration).sum()
    }

    /// Variant streams, regular and I-frame.
    pub fn playlists(&self) -> impl Iterator<Item = &VariantItem> {
        self.items.iter().filter_map(|x| match x {
            Item::Variant(variant) => Some(variant),
            _ => None,
        })
    }

    pub fn playlist_size(&self) -> usize {
        self.playlists().count()
    }

    pub fn segments(&self) -> impl Iterator<Item = &SegmentItem> {
        self.items.iter().filter_map(|x| match x {
            Item::Segment(segment) => Some(segment),
            _ => None,
        })
    }

    pub fn segment_size(&self) -> usize {
        self.segments().count()
    }

    pub fn item_size(&self) -> usize {
        self.items.len()
    }
}
