use core_types::NormalizedItem;
use serde_json::{Map, Value};

use super::{base_item, body};
use crate::content_normalizer::field::pass_through_urls;

const GALLERY_FIELDS: &[&str] = &["field_gallery_images", "field_images", "field_image"];

pub fn map_gallery_event(index: usize, item: &Map<String, Value>) -> NormalizedItem {
    let images = GALLERY_FIELDS
        .iter()
        .filter_map(|name| item.get(*name))
        .map(pass_through_urls)
        .find(|images| !images.is_empty())
        .unwrap_or_default();

    NormalizedItem {
        description: body(item),
        image: images.first().cloned(),
        images: (!images.is_empty()).then_some(images),
        ..base_item(index, item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_gallery_images_pass_through() {
        let item = json!({
            "title": "Holi 2024",
            "field_gallery_images": [
                "https://cms.example.org/holi/1.jpg",
                "https://cms.example.org/holi/2.jpg?itok=abc"
            ]
        });
        let mapped = map_gallery_event(0, item.as_object().unwrap());
        assert_eq!(
            mapped.images,
            Some(vec![
                "https://cms.example.org/holi/1.jpg".to_string(),
                "https://cms.example.org/holi/2.jpg?itok=abc".to_string(),
            ])
        );
        assert_eq!(mapped.image.as_deref(), Some("https://cms.example.org/holi/1.jpg"));
    }

    #[test]
    fn test_gallery_without_images() {
        let item = json!({ "title": "Empty album" });
        let mapped = map_gallery_event(0, item.as_object().unwrap());
        assert_eq!(mapped.images, None);
        assert_eq!(mapped.image, None);
    }
}
