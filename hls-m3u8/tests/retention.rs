use hls_m3u8::{
    PlaylistError, read_str,
    format::{Item, Playlist, SegmentItem, VariantItem},
};

const MASTER: &str = r#"#EXTM3U
#EXT-X-VERSION:6
#EXT-X-INDEPENDENT-SEGMENTS
#EXT-X-SESSION-DATA:DATA-ID="com.example.title",VALUE="Example",X-SOURCE="cms"
#EXT-X-SESSION-KEY:METHOD=SAMPLE-AES,URI="skd://key",KEYFORMAT="com.apple.streamingkeydelivery",KEYFORMATVERSIONS="1",X-VENDOR=7
#EXT-X-DEFINE:NAME="base",VALUE="https://cdn.example.com"
#EXT-X-CONTENT-STEERING:SERVER-URI="/steering",PATHWAY-ID="CDN-A"
#EXT-X-MEDIA:TYPE=AUDIO,GROUP-ID="aac",LANGUAGE="en",NAME="English",AUTOSELECT=YES,DEFAULT=YES,URI="audio/en.m3u8",CHANNELS="2",X-LABEL="main"
#EXT-X-MEDIA:TYPE=CLOSED-CAPTIONS,GROUP-ID="cc",NAME="CC1",INSTREAM-ID="CC1"
#EXT-X-STREAM-INF:BANDWIDTH=1280000,AVERAGE-BANDWIDTH=1000000,RESOLUTION=640x360,CODECS="avc1.4d001f,mp4a.40.2",FRAME-RATE=29.970,AUDIO="aac",CLOSED-CAPTIONS="cc",VIDEO-RANGE=SDR
low/index.m3u8
#EXT-X-STREAM-INF:BANDWIDTH=2560000,RESOLUTION=1280x720,CLOSED-CAPTIONS=NONE,HDCP-LEVEL=TYPE-0,X-SCORE="1.5,2"
mid/index.m3u8
#EXT-X-I-FRAME-STREAM-INF:BANDWIDTH=86000,CODECS="avc1.4d001f",URI="low/iframe.m3u8",X-ORDER=1
#EXT-X-IMAGE-STREAM-INF:BANDWIDTH=20000,RESOLUTION=320x180,CODECS="jpeg",URI="tiles/index.m3u8",HDCP-LEVEL=NONE
"#;

const MEDIA: &str = r#"#EXTM3U
#EXT-X-VERSION:7
#EXT-X-TARGETDURATION:6
#EXT-X-MEDIA-SEQUENCE:2680
#EXT-X-DISCONTINUITY-SEQUENCE:3
#EXT-X-PLAYLIST-TYPE:EVENT
#EXT-X-ALLOW-CACHE:YES
#EXT-X-START:TIME-OFFSET=-12.5,PRECISE=YES,X-HINT=1
#EXT-X-MAP:URI="init.mp4",BYTERANGE="720@0",X-INIT="a"
#EXT-X-KEY:METHOD=AES-128,URI="https://keys/1",IV=0x1234,X-TOKEN="t,1"
#EXT-X-DATERANGE:ID="ad-1",CLASS="ads",START-DATE="2024-01-01T00:00:00Z",DURATION=30,X-AD-ID="42",SCTE35-OUT=0xFC30
#EXT-X-SCTE35:CUE="/DAlAAAAAAAAAP/wFAUAAAABf+/+AAAAAH4AUmXAAAEAAAAATQ==",DURATION=30.000000000000,ID="s1",X-PLACEMENT=pre
#EXTINF:5.005,first
#EXT-X-BYTERANGE:75232@0
#EXT-X-PROGRAM-DATE-TIME:2024-01-01T00:00:00.500Z
fileSequence2680.ts
#EXT-X-DISCONTINUITY
#EXT-X-GAP
#EXTINF:5.005,
fileSequence2681.ts
#EXT-X-PART:DURATION=1.0,URI="part.mp4"
# a plain comment
#EXT-X-UNHEARD-OF:ANY=1
"#;

fn round_trip(text: &str) -> (Playlist, Playlist) {
    let first = read_str(text).unwrap();
    let encoded = first.encode().unwrap();
    let second = read_str(&encoded).unwrap();
    (first, second)
}

#[test]
fn test_master_round_trip() {
    let (first, second) = round_trip(MASTER);
    assert_eq!(first, second);
    assert!(first.is_master());
    assert_eq!(first.playlist_size(), 3);
    assert_eq!(first.encode().unwrap(), second.encode().unwrap());
}

#[test]
fn test_media_round_trip() {
    let (first, second) = round_trip(MEDIA);
    assert_eq!(first, second);
    assert!(!first.is_master());
    assert!(first.is_live());
    assert_eq!(first.segment_size(), 2);
    assert_eq!(first.sequence, Some(2680));
    assert_eq!(first.discontinuity_sequence, Some(3));
    assert_eq!(first.cache, Some(true));
    assert_eq!(first.playlist_type.as_deref(), Some("EVENT"));
    assert_eq!(first.duration(), 5.005 + 5.005);
}

#[test]
fn test_unknown_attributes_survive() {
    let encoded = read_str(MASTER).unwrap().encode().unwrap();
    for fragment in [
        r#"X-SOURCE="cms""#,
        "X-VENDOR=7",
        r#"X-LABEL="main""#,
        "VIDEO-RANGE=SDR",
        r#"X-SCORE="1.5,2""#,
        "X-ORDER=1",
        "HDCP-LEVEL=NONE",
        r#"#EXT-X-CONTENT-STEERING:SERVER-URI="/steering",PATHWAY-ID="CDN-A""#,
    ] {
        assert!(encoded.contains(fragment), "{} missing from\n{}", fragment, encoded);
    }

    let encoded = read_str(MEDIA).unwrap().encode().unwrap();
    for fragment in [
        "X-HINT=1",
        r#"X-INIT="a""#,
        r#"X-TOKEN="t,1""#,
        r#"X-AD-ID="42",SCTE35-OUT=0xFC30"#,
        "X-PLACEMENT=pre",
        "#EXT-X-GAP",
        r#"#EXT-X-PART:DURATION=1.0,URI="part.mp4""#,
        "# a plain comment",
        "#EXT-X-UNHEARD-OF:ANY=1",
    ] {
        assert!(encoded.contains(fragment), "{} missing from\n{}", fragment, encoded);
    }
}

#[test]
fn test_segment_lines_stay_together() {
    let encoded = read_str(MEDIA).unwrap().encode().unwrap();
    assert!(encoded.contains(concat!(
        "#EXTINF:5.005,first\n",
        "#EXT-X-BYTERANGE:75232@0\n",
        "#EXT-X-PROGRAM-DATE-TIME:2024-01-01T00:00:00.500Z\n",
        "fileSequence2680.ts\n",
    )));
}

#[test]
fn test_variant_continuation() {
    let playlist = read_str("#EXTM3U\n#EXT-X-STREAM-INF:BANDWIDTH=540\nlow.m3u8\n").unwrap();
    assert_eq!(playlist.item_size(), 1);

    let Item::Variant(variant) = &playlist.items[0] else {
        panic!("expected a variant");
    };
    assert_eq!(variant.stream.uri.as_deref(), Some("low.m3u8"));
}

#[test]
fn test_prefix_disambiguation() {
    let playlist = read_str(
        "#EXTM3U\n#EXT-X-MEDIA-SEQUENCE:42\n#EXT-X-DISCONTINUITY-SEQUENCE:4\n#EXTINF:1,\na.ts\n",
    )
    .unwrap();

    // neither line was taken for #EXT-X-MEDIA or #EXT-X-DISCONTINUITY
    assert_eq!(playlist.sequence, Some(42));
    assert_eq!(playlist.discontinuity_sequence, Some(4));
    assert_eq!(playlist.item_size(), 1);
    assert!(playlist.items[0].is_segment());
}

#[test]
fn test_bad_version_line_is_kept() {
    let text = "#EXTM3U\n#EXT-X-VERSION:seven\n#EXTINF:1,\na.ts\n";
    let playlist = read_str(text).unwrap();

    assert_eq!(playlist.version, Some(1));
    let Item::Unknown(unknown) = &playlist.items[0] else {
        panic!("expected an unknown item");
    };
    assert_eq!(unknown.line, "#EXT-X-VERSION:seven");
    assert_eq!(unknown.tag_name(), Some("#EXT-X-VERSION"));
    assert!(playlist.encode().unwrap().contains("#EXT-X-VERSION:seven\n"));
}

#[test]
fn test_mixed_playlist() {
    let mut variant = VariantItem::default();
    variant.stream.bandwidth = Some(540);
    variant.stream.uri = Some("low.m3u8".into());

    let mut playlist = Playlist::with_items([SegmentItem::new(10.0, "a.ts")]);
    playlist.append_item(variant);
    assert!(!playlist.is_valid());
    assert!(matches!(playlist.encode(), Err(PlaylistError::MixedPlaylist)));
}

#[test]
fn test_master_keeps_media_headers() {
    let text = concat!(
        "#EXTM3U\n",
        "#EXT-X-PLAYLIST-TYPE:VOD\n",
        "#EXT-X-I-FRAMES-ONLY\n",
        "#EXT-X-MEDIA-SEQUENCE:12\n",
        "#EXT-X-DISCONTINUITY-SEQUENCE:2\n",
        "#EXT-X-ALLOW-CACHE:YES\n",
        "#EXT-X-TARGETDURATION:6\n",
        "#EXT-X-STREAM-INF:BANDWIDTH=1\n",
        "a.m3u8\n",
    );

    let (first, second) = round_trip(text);
    assert!(first.is_master());
    assert_eq!(first.playlist_type.as_deref(), Some("VOD"));
    assert_eq!(first.cache, Some(true));
    assert_eq!(first.sequence, Some(12));
    assert_eq!(first.target, Some(6));
    assert_eq!(first, second);
}

#[test]
fn test_master_without_media_headers() {
    let text = "#EXTM3U\n#EXT-X-STREAM-INF:BANDWIDTH=1\na.m3u8\n";
    let (first, second) = round_trip(text);

    assert_eq!(first.sequence, None);
    assert_eq!(first.target, None);
    assert_eq!(first, second);
    assert_eq!(
        first.encode().unwrap(),
        "#EXTM3U\n#EXT-X-VERSION:1\n#EXT-X-STREAM-INF:BANDWIDTH=1\na.m3u8\n"
    );
}

#[test]
fn test_full_range_media_sequence() {
    let (first, second) = round_trip("#EXTM3U\n#EXT-X-MEDIA-SEQUENCE:18446744073709551615\n");
    assert_eq!(first.sequence, Some(u64::MAX));
    assert_eq!(first.item_size(), 0);
    assert_eq!(first, second);
}

#[test]
fn test_negative_scte35_type_is_kept_verbatim() {
    let text = "#EXTM3U\n#EXT-X-SCTE35:CUE=\"abc\",TYPE=-5\n";
    let (first, second) = round_trip(text);

    let Item::Unknown(unknown) = &first.items[0] else {
        panic!("expected an unknown item");
    };
    assert_eq!(unknown.line, "#EXT-X-SCTE35:CUE=\"abc\",TYPE=-5");
    assert_eq!(first, second);
}
