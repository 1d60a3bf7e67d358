//! Wine label image URLs

/// `{media_base}/{vivino_id}.png`, or `None` when there is no identifier.
///
/// Callers must not request an image when this returns `None`; they show the
/// placeholder glyph instead.
pub fn image_url_for(media_base: &str, vivino_id: Option<&str>) -> Option<String> {
    let id = vivino_id.map(str::trim).filter(|id| !id.is_empty())?;
    Some(format!("{}/{}.png", media_base.trim_end_matches('/'), id))
}

/// Shown wherever a label image is missing or fails to load
pub const WINE_PLACEHOLDER_GLYPH: &str = "🍷";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_identifier_gives_no_url() {
        assert_eq!(image_url_for("http://media", None), None);
        assert_eq!(image_url_for("http://media", Some("")), None);
        assert_eq!(image_url_for("http://media", Some("   ")), None);
    }

    #[test]
    fn test_url_ends_with_png_name() {
        let url = image_url_for("http://127.0.0.1:8000/media/", Some("12345")).unwrap();
        assert!(url.ends_with("/12345.png"));
        assert_eq!(url, "http://127.0.0.1:8000/media/12345.png");
    }
}
