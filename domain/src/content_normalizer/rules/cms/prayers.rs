use core_types::NormalizedItem;
use serde_json::{Map, Value};

use super::{base_item, body};
use crate::content_normalizer::{field::field, html::escape_html};

pub fn map_prayer(index: usize, item: &Map<String, Value>) -> NormalizedItem {
    let text = field(item, "field_prayer_text").or_else(|| body(item));
    let badge = field(item, "field_language").map(|language| {
        format!(r#"<span class="language-badge">{}</span>"#, escape_html(&language))
    });

    let description = match (badge, text) {
        (Some(badge), Some(text)) => Some(format!("{badge}{text}")),
        (badge, text) => badge.or(text),
    };

    NormalizedItem {
        description,
        ..base_item(index, item)
    }
}
