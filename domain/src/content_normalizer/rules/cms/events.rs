use core_types::NormalizedItem;
use serde_json::{Map, Value};

use super::{base_item, body};
use crate::content_normalizer::{
    field::{field, first_urls},
    html::escape_html,
    timestamps::format_timestamp,
};

const EVENT_IMAGE_FIELDS: &[&str] = &["field_event_images", "field_image", "field_images"];

/// Builds one HTML block out of the schedule, location, body and images of
/// an event. The first image becomes the primary image, the rest a grid.
pub fn map_event(index: usize, item: &Map<String, Value>) -> NormalizedItem {
    let mut mapped = base_item(index, item);
    let images = first_urls(item, EVENT_IMAGE_FIELDS);

    let mut details = String::new();
    if let Some(start) = field(item, "field_start_date") {
        details.push_str(&format!(
            r#"<p class="event-time"><strong>Starts:</strong> {}</p>"#,
            escape_html(&format_timestamp(&start))
        ));
    }
    if let Some(end) = field(item, "field_end_date") {
        details.push_str(&format!(
            r#"<p class="event-time"><strong>Ends:</strong> {}</p>"#,
            escape_html(&format_timestamp(&end))
        ));
    }
    if let Some(location) = field(item, "field_location") {
        details.push_str(&format!(
            r#"<p class="event-location"><strong>Location:</strong> {}</p>"#,
            escape_html(&location)
        ));
    }

    let mut html = String::new();
    if !details.is_empty() {
        html.push_str(&format!(r#"<div class="event-details">{details}</div>"#));
    }
    if let Some(body) = body(item) {
        html.push_str(&format!(r#"<div class="event-body">{body}</div>"#));
    }
    if images.len() > 1 {
        let alt = escape_html(&mapped.title);
        let grid: String = images[1..]
            .iter()
            .map(|url| format!(r#"<img src="{}" alt="{alt}">"#, escape_html(url)))
            .collect();
        html.push_str(&format!(r#"<div class="event-gallery">{grid}</div>"#));
    }

    mapped.description = (!html.is_empty()).then_some(html);
    mapped.image = images.first().cloned();
    mapped.images = (images.len() > 1).then(|| images[1..].to_vec());
    mapped
}
