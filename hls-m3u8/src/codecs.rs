//! Codec strings derived from H.264 profile/level and audio codec names,
//! used when a variant carries no explicit `CODECS` attribute.

/// Maps an H.264 profile and level to its `avc1` codec identifier.
/// The profile is matched case-insensitively, the level as written.
pub fn video_codec(profile: &str, level: &str) -> Option<&'static str> {
    let codec = match (profile.to_ascii_lowercase().as_str(), level) {
        ("baseline", "3.0") => "avc1.66.30",
        ("baseline", "3.1") => "avc1.42001f",
        ("baseline", "4.0") => "avc1.420028",
        ("main", "3.0") => "avc1.77.30",
        ("main", "3.1") => "avc1.4d001f",
        ("main", "4.0") => "avc1.4d0028",
        ("main", "4.1") => "avc1.4d0029",
        ("main", "4.2") => "avc1.4d002a",
        ("high", "3.0") => "avc1.64001e",
        ("high", "3.1") => "avc1.64001f",
        ("high", "3.2") => "avc1.640020",
        ("high", "4.0") => "avc1.640028",
        ("high", "4.1") => "avc1.640029",
        ("high", "4.2") => "avc1.64002a",
        ("high", "5.0") => "avc1.640032",
        ("high", "5.1") => "avc1.640033",
        ("high", "5.2") => "avc1.640034",
        _ => return None,
    };

    Some(codec)
}

/// Maps an audio codec name (case-insensitive) to its codec identifier.
pub fn audio_codec(name: &str) -> Option<&'static str> {
    let codec = match name.to_ascii_lowercase().as_str() {
        "aac-lc" => "mp4a.40.2",
        "he-aac" => "mp4a.40.5",
        "mp3" => "mp4a.40.34",
        _ => return None,
    };

    Some(codec)
}

/// Builds the `CODECS` value for an item without an explicit one.
///
/// Returns `None` when nothing is set, and also when something is set but
/// does not resolve: a partial codec list is never produced.
pub fn derive_codecs(
    profile: Option<&str>,
    level: Option<&str>,
    audio: Option<&str>,
) -> Option<String> {
    let video = match (profile, level) {
        (None, None) => None,
        (Some(profile), Some(level)) => Some(video_codec(profile, level)?),
        _ => return None,
    };

    let audio = match audio {
        None => None,
        Some(name) => Some(audio_codec(name)?),
    };

    let codecs = video.into_iter().chain(audio).collect::<Vec<_>>();
    if codecs.is_empty() {
        return None;
    }

    Some(codecs.join(","))
}
