/// Extracts the video id from the two supported YouTube URL shapes.
///
/// Short links (`youtu.be/<id>`) take the final path segment minus any query
/// string; watch pages (`youtube.com/watch?v=<id>`) take the `v` parameter.
/// Anything else is rejected. Identifiers are not validated beyond being
/// non-empty, so superficially matching input can yield a garbage id.
pub fn extract_video_id(input: &str) -> Option<String> {
    if input.contains("youtu.be") {
        let segment = input.rsplit('/').next()?;
        let id = segment.split('?').next()?;
        if id.is_empty() {
            return None;
        }
        return Some(id.to_string());
    }

    if input.contains("youtube.com/watch") {
        let (_, query) = input.split_once('?')?;
        let query = query.split('#').next()?;
        return url::form_urlencoded::parse(query.as_bytes())
            .find_map(|(key, value)| (key == "v").then(|| value.trim().to_string()))
            .filter(|id| !id.is_empty());
    }

    None
}
