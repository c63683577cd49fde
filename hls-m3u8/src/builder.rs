use std::{fmt::Display, io};

use crate::{
    attributes::format_yes_no,
    error::PlaylistError,
    format::{Item, Playlist, directives},
};

impl Playlist {
    /// A finished (not live) playlist around the given items. A media
    /// playlist also gets a target duration of 10 and a media sequence of 0.
    pub fn with_items(items: impl IntoIterator<Item = impl Into<Item>>) -> Self {
        let mut playlist = Self {
            items: items.into_iter().map(Into::into).collect(),
            ..Default::default()
        };

        if !playlist.is_master() {
            playlist.sequence = Some(0);
            playlist.target = Some(10);
        }

        playlist
    }

    /// The playlist as text, refusing a playlist that mixes variants and
    /// segments.
    pub fn encode(&self) -> Result<String, PlaylistError> {
        if !self.is_valid() {
            return Err(PlaylistError::MixedPlaylist);
        }

        Ok(self.to_string())
    }

    /// Same as [`Playlist::encode`], straight into a writer.
    pub fn write_to(&self, mut writer: impl io::Write) -> Result<(), PlaylistError> {
        if !self.is_valid() {
            return Err(PlaylistError::MixedPlaylist);
        }

        write!(writer, "{}", self)?;
        Ok(())
    }

    /// Header directives in canonical order, each one only when set.
    fn write_header(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(playlist_type) = &self.playlist_type {
            writeln!(f, "{}:{}", directives::PLAYLIST_TYPE, playlist_type)?;
        }
        if let Some(version) = self.version {
            writeln!(f, "{}:{}", directives::VERSION, version)?;
        }
        if self.independent_segments {
            writeln!(f, "{}", directives::INDEPENDENT_SEGMENTS)?;
        }
        if self.iframes_only {
            writeln!(f, "{}", directives::I_FRAMES_ONLY)?;
        }
        if let Some(sequence) = self.sequence {
            writeln!(f, "{}:{}", directives::MEDIA_SEQUENCE, sequence)?;
        }
        if let Some(sequence) = self.discontinuity_sequence {
            writeln!(f, "{}:{}", directives::DISCONTINUITY_SEQUENCE, sequence)?;
        }
        if let Some(cache) = self.cache {
            writeln!(f, "{}:{}", directives::ALLOW_CACHE, format_yes_no(cache))?;
        }
        if let Some(target) = self.target {
            writeln!(f, "{}:{}", directives::TARGET_DURATION, target)?;
        }

        Ok(())
    }
}

/// Writes the playlist whether or not it is valid, use
/// [`Playlist::encode`] to have the master/media check applied.
impl Display for Playlist {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // header
        writeln!(f, "{}", directives::EXTM3U)?;
        self.write_header(f)?;

        // items
        for it in self.items.iter() {
            writeln!(f, "{}", it)?;
        }

        if !self.is_master() && !self.live {
            writeln!(f, "{}", directives::ENDLIST)?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use crate::format::{Playlist, SegmentItem, VariantItem};

    use super::*;

    #[test]
    fn test_master_playlist_to_string() {
        let mut item = VariantItem::default();
        item.stream.program_id = Some("1".into());
        item.stream.bandwidth = Some(6400);
        item.stream.audio_codec = Some("mp3".into());
        item.stream.uri = Some("playlist_url".into());

        let playlist = Playlist::with_items([item]);
        assert_eq!(
            playlist.encode().unwrap(),
            "#EXTM3U\n#EXT-X-STREAM-INF:PROGRAM-ID=1,CODECS=\"mp4a.40.34\",BANDWIDTH=6400\nplaylist_url\n"
        );
    }

    #[test]
    fn test_media_playlist_to_string() {
        let playlist = Playlist::with_items([
            SegmentItem::new(11.344644, "1080-7mbps00000.ts"),
            SegmentItem::new(11.261233, "1080-7mbps00001.ts"),
            SegmentItem::new(7.507489, "1080-7mbps00002.ts"),
        ]);

        assert_eq!(
            playlist.encode().unwrap(),
            concat!(
                "#EXTM3U\n",
                "#EXT-X-MEDIA-SEQUENCE:0\n",
                "#EXT-X-TARGETDURATION:10\n",
                "#EXTINF:11.344644,\n",
                "1080-7mbps00000.ts\n",
                "#EXTINF:11.261233,\n",
                "1080-7mbps00001.ts\n",
                "#EXTINF:7.507489,\n",
                "1080-7mbps00002.ts\n",
                "#EXT-X-ENDLIST\n",
            )
        );
    }

    #[test]
    fn test_media_header_order() {
        let mut playlist = Playlist::with_items([SegmentItem::new(4.0, "a.ts")]);
        playlist.version = Some(7);
        playlist.playlist_type = Some("VOD".into());
        playlist.independent_segments = true;
        playlist.iframes_only = true;
        playlist.sequence = Some(3);
        playlist.discontinuity_sequence = Some(1);
        playlist.cache = Some(false);
        playlist.target = Some(4);
        playlist.live = true;

        assert_eq!(
            playlist.to_string(),
            concat!(
                "#EXTM3U\n",
                "#EXT-X-PLAYLIST-TYPE:VOD\n",
                "#EXT-X-VERSION:7\n",
                "#EXT-X-INDEPENDENT-SEGMENTS\n",
                "#EXT-X-I-FRAMES-ONLY\n",
                "#EXT-X-MEDIA-SEQUENCE:3\n",
                "#EXT-X-DISCONTINUITY-SEQUENCE:1\n",
                "#EXT-X-ALLOW-CACHE:NO\n",
                "#EXT-X-TARGETDURATION:4\n",
                "#EXTINF:4,\n",
                "a.ts\n",
            )
        );
    }

    #[test]
    fn test_master_header_order() {
        let mut variant = VariantItem::default();
        variant.stream.bandwidth = Some(1);
        variant.stream.uri = Some("a.m3u8".into());

        let mut playlist = Playlist::with_items([variant]);
        playlist.version = Some(6);
        playlist.independent_segments = true;

        assert_eq!(playlist.sequence, None);
        assert_eq!(playlist.target, None);
        assert_eq!(
            playlist.to_string(),
            "#EXTM3U\n#EXT-X-VERSION:6\n#EXT-X-INDEPENDENT-SEGMENTS\n#EXT-X-STREAM-INF:BANDWIDTH=1\na.m3u8\n"
        );
    }

    #[test]
    fn test_master_header_keeps_set_values() {
        let mut variant = VariantItem::default();
        variant.stream.bandwidth = Some(1);
        variant.stream.uri = Some("a.m3u8".into());

        let mut playlist = Playlist::with_items([variant]);
        playlist.playlist_type = Some("VOD".into());
        playlist.cache = Some(true);
        playlist.sequence = Some(9);
        playlist.target = Some(6);

        assert_eq!(
            playlist.to_string(),
            concat!(
                "#EXTM3U\n",
                "#EXT-X-PLAYLIST-TYPE:VOD\n",
                "#EXT-X-MEDIA-SEQUENCE:9\n",
                "#EXT-X-ALLOW-CACHE:YES\n",
                "#EXT-X-TARGETDURATION:6\n",
                "#EXT-X-STREAM-INF:BANDWIDTH=1\n",
                "a.m3u8\n",
            )
        );
    }

    #[test]
    fn test_media_header_without_sequence() {
        let mut playlist = Playlist::with_items([SegmentItem::new(4.0, "a.ts")]);
        playlist.sequence = None;
        playlist.target = None;

        assert_eq!(
            playlist.to_string(),
            "#EXTM3U\n#EXTINF:4,\na.ts\n#EXT-X-ENDLIST\n"
        );
    }

    #[test]
    fn test_mixed_playlist_is_refused() {
        let mut variant = VariantItem::default();
        variant.stream.bandwidth = Some(1);
        variant.stream.uri = Some("a.m3u8".into());

        let mut playlist = Playlist::with_items([SegmentItem::new(4.0, "a.ts")]);
        playlist.append_item(variant);

        assert!(matches!(playlist.encode(), Err(PlaylistError::MixedPlaylist)));
        assert!(matches!(
            playlist.write_to(Vec::new()),
            Err(PlaylistError::MixedPlaylist)
        ));
    }

    #[test]
    fn test_write_to() {
        let playlist = Playlist::with_items([SegmentItem::new(1.5, "a.ts")]);
        let mut buffer = Vec::new();
        playlist.write_to(&mut buffer).unwrap();
        assert_eq!(String::from_utf8(buffer).unwrap(), playlist.encode().unwrap());
    }
}
