use core_types::NormalizedContent;
use serde_json::Value;

use super::text;

const GALLERY_LIMIT: usize = 12;

pub fn format_photos(photos: &[Value]) -> NormalizedContent {
    let images = photos
        .iter()
        .take(GALLERY_LIMIT)
        .filter_map(Value::as_object)
        .filter_map(|photo| text(photo, "thumbnailUrl").or_else(|| text(photo, "url")))
        .collect();

    NormalizedContent::gallery(
        "gallery",
        "Temple Photo Gallery",
        "Beautiful moments and celebrations from our temple community",
        images,
    )
    .with_template("gallery")
}
