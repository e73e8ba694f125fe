use core_types::NormalizedItem;
use serde_json::{Map, Value};

use super::{base_item, body};
use crate::content_normalizer::field::first_field;

/// Activities, services and unknown collections: body and primary image.
pub fn map_listing(index: usize, item: &Map<String, Value>) -> NormalizedItem {
    NormalizedItem {
        description: body(item),
        ..base_item(index, item)
    }
}

/// Blog posts and announcements keep their full body markup unmodified.
pub fn map_full_body(index: usize, item: &Map<String, Value>) -> NormalizedItem {
    let mut mapped = base_item(index, item);
    mapped.description = body(item);
    mapped.link = first_field(item, &["path", "url"]);
    mapped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_body_is_not_modified() {
        let markup = "<p>Navratri starts <strong>Friday</strong></p>\n<ul><li>Garba</li></ul>";
        let item = json!({
            "nid": "31",
            "title": "Navratri",
            "body": [{ "processed": markup }],
            "path": "/announcements/navratri"
        });
        let mapped = map_full_body(0, item.as_object().unwrap());
        assert_eq!(mapped.id, "31");
        assert_eq!(mapped.description.as_deref(), Some(markup));
        assert_eq!(mapped.link.as_deref(), Some("/announcements/navratri"));
    }

    #[test]
    fn test_listing_picks_primary_image() {
        let item = json!({
            "title": "Yoga",
            "body": "<p>Saturdays</p>",
            "field_image": ["/yoga-1.jpg", "/yoga-2.jpg"]
        });
        let mapped = map_listing(0, item.as_object().unwrap());
        assert_eq!(mapped.image.as_deref(), Some("/yoga-1.jpg"));
        assert_eq!(mapped.description.as_deref(), Some("<p>Saturdays</p>"));
    }
}
