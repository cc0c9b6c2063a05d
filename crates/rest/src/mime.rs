use std::path::Path;

/// Content-Type for an audio upload, derived from the file extension.
pub fn content_type_for(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("wav") => "audio/wav",
        Some("amr") => "audio/amr",
        Some("awb") => "audio/amr-wb",
        Some("spx") => "audio/x-speex",
        Some("mp3") => "audio/mpeg",
        Some("ogg") => "audio/ogg",
        _ => "application/octet-stream",
    }
}
