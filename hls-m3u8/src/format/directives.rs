// Item tags
pub const SESSION_KEY: &str = "#EXT-X-SESSION-KEY";
pub const KEY: &str = "#EXT-X-KEY";
pub const DISCONTINUITY: &str = "#EXT-X-DISCONTINUITY";
pub const PROGRAM_DATE_TIME: &str = "#EXT-X-PROGRAM-DATE-TIME";
pub const DATE_RANGE: &str = "#EXT-X-DATERANGE";
pub const MAP: &str = "#EXT-X-MAP";
pub const SESSION_DATA: &str = "#EXT-X-SESSION-DATA";
pub const EXTINF: &str = "#EXTINF";
pub const BYTE_RANGE: &str = "#EXT-X-BYTERANGE";
pub const START: &str = "#EXT-X-START";
pub const MEDIA: &str = "#EXT-X-MEDIA";
pub const STREAM_INF: &str = "#EXT-X-STREAM-INF";
pub const I_FRAME_STREAM_INF: &str = "#EXT-X-I-FRAME-STREAM-INF";
pub const DEFINE: &str = "#EXT-X-DEFINE";
pub const SCTE35: &str = "#EXT-X-SCTE35";
pub const IMAGE_STREAM_INF: &str = "#EXT-X-IMAGE-STREAM-INF";

// Playlist tags
pub const EXTM3U: &str = "#EXTM3U";
pub const ENDLIST: &str = "#EXT-X-ENDLIST";
pub const TARGET_DURATION: &str = "#EXT-X-TARGETDURATION";
pub const ALLOW_CACHE: &str = "#EXT-X-ALLOW-CACHE";
pub const DISCONTINUITY_SEQUENCE: &str = "#EXT-X-DISCONTINUITY-SEQUENCE";
pub const INDEPENDENT_SEGMENTS: &str = "#EXT-X-INDEPENDENT-SEGMENTS";
pub const PLAYLIST_TYPE: &str = "#EXT-X-PLAYLIST-TYPE";
pub const I_FRAMES_ONLY: &str = "#EXT-X-I-FRAMES-ONLY";
pub const MEDIA_SEQUENCE: &str = "#EXT-X-MEDIA-SEQUENCE";
pub const VERSION: &str = "#EXT-X-VERSION";

// Recognized, kept as unknown items
pub const BITRATE: &str = "#EXT-X-BITRATE";
pub const CONTENT_STEERING: &str = "#EXT-X-CONTENT-STEERING";
pub const GAP: &str = "#EXT-X-GAP";
pub const PART: &str = "#EXT-X-PART";
pub const PART_INF: &str = "#EXT-X-PART-INF";
pub const PRELOAD_HINT: &str = "#EXT-X-PRELOAD-HINT";
pub const RENDITION_REPORT: &str = "#EXT-X-RENDITION-REPORT";
pub const SERVER_CONTROL: &str = "#EXT-X-SERVER-CONTROL";
pub const SKIP: &str = "#EXT-X-SKIP";

/// Attribute names.
pub mod attr {
    // Encryption
    pub const METHOD: &str = "METHOD";
    pub const URI: &str = "URI";
    pub const IV: &str = "IV";
    pub const KEY_FORMAT: &str = "KEYFORMAT";
    pub const KEY_FORMAT_VERSIONS: &str = "KEYFORMATVERSIONS";
    pub const KEY_ID: &str = "KEYID";

    pub const BYTE_RANGE: &str = "BYTERANGE";

    // Date range
    pub const ID: &str = "ID";
    pub const CLASS: &str = "CLASS";
    pub const CUE: &str = "CUE";
    pub const START_DATE: &str = "START-DATE";
    pub const END_DATE: &str = "END-DATE";
    pub const DURATION: &str = "DURATION";
    pub const PLANNED_DURATION: &str = "PLANNED-DURATION";
    pub const SCTE35_CMD: &str = "SCTE35-CMD";
    pub const SCTE35_OUT: &str = "SCTE35-OUT";
    pub const SCTE35_IN: &str = "SCTE35-IN";
    pub const END_ON_NEXT: &str = "END-ON-NEXT";

    // SCTE-35, on top of the date range ones
    pub const ELAPSED: &str = "ELAPSED";
    pub const TIME: &str = "TIME";
    pub const UPID: &str = "UPID";
    pub const BLACKOUT: &str = "BLACKOUT";
    pub const CUE_OUT: &str = "CUE-OUT";
    pub const CUE_IN: &str = "CUE-IN";
    pub const SEGNE: &str = "SEGNE";

    // Playback start
    pub const TIME_OFFSET: &str = "TIME-OFFSET";
    pub const PRECISE: &str = "PRECISE";

    // Session data
    pub const DATA_ID: &str = "DATA-ID";
    pub const VALUE: &str = "VALUE";
    pub const LANGUAGE: &str = "LANGUAGE";

    // Define
    pub const IMPORT: &str = "IMPORT";
    pub const QUERY_PARAM: &str = "QUERYPARAM";

    // Media
    pub const TYPE: &str = "TYPE";
    pub const GROUP_ID: &str = "GROUP-ID";
    pub const ASSOC_LANGUAGE: &str = "ASSOC-LANGUAGE";
    pub const NAME: &str = "NAME";
    pub const AUTOSELECT: &str = "AUTOSELECT";
    pub const DEFAULT: &str = "DEFAULT";
    pub const FORCED: &str = "FORCED";
    pub const INSTREAM_ID: &str = "INSTREAM-ID";
    pub const CHARACTERISTICS: &str = "CHARACTERISTICS";
    pub const CHANNELS: &str = "CHANNELS";
    pub const STABLE_RENDITION_ID: &str = "STABLE-RENDITION-ID";

    // Variant streams
    pub const RESOLUTION: &str = "RESOLUTION";
    pub const PROGRAM_ID: &str = "PROGRAM-ID";
    pub const CODECS: &str = "CODECS";
    pub const BANDWIDTH: &str = "BANDWIDTH";
    pub const AVERAGE_BANDWIDTH: &str = "AVERAGE-BANDWIDTH";
    pub const FRAME_RATE: &str = "FRAME-RATE";
    pub const VIDEO: &str = "VIDEO";
    pub const AUDIO: &str = "AUDIO";
    pub const SUBTITLES: &str = "SUBTITLES";
    pub const CLOSED_CAPTIONS: &str = "CLOSED-CAPTIONS";
    pub const HDCP_LEVEL: &str = "HDCP-LEVEL";
    pub const STABLE_VARIANT_ID: &str = "STABLE-VARIANT-ID";
}
