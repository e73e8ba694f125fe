mod articles;
mod booking_forms;
mod events;
mod gallery_events;
mod listings;
mod prayers;
mod trustees;

use core_types::{NormalizedContent, NormalizedItem};
use serde_json::{Map, Value};

use crate::content_normalizer::{
    classify::CmsCollection,
    field::{field, first_urls, record_key},
    html::summarize,
    records::{DEFAULT_DESCRIPTION, DEFAULT_TITLE},
};

pub use articles::format_articles;

const UNTITLED: &str = "Untitled";
const SUMMARY_LENGTH: usize = 150;
const IMAGE_FIELDS: &[&str] = &["field_image", "field_images"];

/// Who asked for the content.
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext<'a> {
    pub entry_id: Option<&'a str>,
    pub filter: Option<&'a str>,
}

impl RequestContext<'_> {
    fn content_id(&self, fallback: &str) -> String {
        self.entry_id.unwrap_or(fallback).to_string()
    }
}

type ItemMapper = fn(usize, &Map<String, Value>) -> NormalizedItem;

fn item_mapper(collection: CmsCollection) -> ItemMapper {
    match collection {
        CmsCollection::Events => events::map_event,
        CmsCollection::Articles => articles::map_article,
        CmsCollection::BookingForms => booking_forms::map_booking_form,
        CmsCollection::Trustees => trustees::map_trustee,
        CmsCollection::Prayers => prayers::map_prayer,
        CmsCollection::GalleryEvents => gallery_events::map_gallery_event,
        CmsCollection::Blog | CmsCollection::Announcements(_) => listings::map_full_body,
        CmsCollection::Activities | CmsCollection::Services | CmsCollection::Generic => {
            listings::map_listing
        }
    }
}

fn heading(collection: CmsCollection) -> (&'static str, &'static str) {
    use crate::content_normalizer::classify::AnnouncementKind;

    match collection {
        CmsCollection::Activities => (
            "Temple Activities",
            "Various activities and programs we offer.",
        ),
        CmsCollection::Events => (
            "Upcoming Events",
            "Join us for our upcoming spiritual and cultural events.",
        ),
        CmsCollection::Articles => ("Temple Information", "Articles from our temple community."),
        CmsCollection::BookingForms => (
            "Booking Forms",
            "Download and complete the forms below to book with the temple.",
        ),
        CmsCollection::Trustees => (
            "Our Trustees",
            "The trustees and committee members who serve our temple.",
        ),
        CmsCollection::Prayers => ("Prayers", "Prayers and hymns recited at our temple."),
        CmsCollection::Services => ("Temple Services", "Various services and ceremonies we offer."),
        CmsCollection::Blog => ("Temple Blog", "Stories and reflections from our community."),
        CmsCollection::Announcements(AnnouncementKind::General) => (
            "Announcements",
            "Latest news and notices from the temple.",
        ),
        CmsCollection::Announcements(AnnouncementKind::Festival) => (
            "Festival Announcements",
            "Upcoming festivals and celebrations at the temple.",
        ),
        CmsCollection::GalleryEvents => (
            "Photo Gallery",
            "Pictures from our events and activities.",
        ),
        CmsCollection::Generic => (DEFAULT_TITLE, DEFAULT_DESCRIPTION),
    }
}

/// Normalizes a CMS collection payload.
pub fn format_collection(
    collection: CmsCollection,
    items: &[Value],
    context: &RequestContext,
) -> NormalizedContent {
    if collection == CmsCollection::Articles {
        return format_articles(items, context);
    }

    let mut mapped = map_items(collection, items.iter());
    // newest first
    if collection == CmsCollection::Activities {
        mapped.reverse();
    }

    let (title, description) = heading(collection);
    NormalizedContent::list(
        context.content_id(collection.slug()),
        title,
        description,
        mapped,
    )
    .with_template(collection.slug())
}

fn map_items<'a>(
    collection: CmsCollection,
    items: impl Iterator<Item = &'a Value>,
) -> Vec<NormalizedItem> {
    let mapper = item_mapper(collection);
    let empty = Map::new();
    items
        .enumerate()
        .map(|(index, item)| mapper(index, item.as_object().unwrap_or(&empty)))
        .collect()
}

/// Full content view of a single CMS node.
pub fn format_page(item: &Map<String, Value>, context: &RequestContext) -> NormalizedContent {
    let id = context
        .entry_id
        .map(String::from)
        .or_else(|| node_id(item))
        .unwrap_or_else(|| "page".to_string());
    let title = field(item, "title").unwrap_or_else(|| DEFAULT_TITLE.to_string());
    let body = body(item);
    let description = record_key(item, "body", "summary")
        .or_else(|| body.as_deref().and_then(|body| summarize(body, SUMMARY_LENGTH)))
        .unwrap_or_else(|| DEFAULT_DESCRIPTION.to_string());

    let mut content = NormalizedContent::page(id, title, description)
        .with_template("page")
        .with_images(first_urls(item, IMAGE_FIELDS));
    if let Some(body) = body {
        content = content.with_body(body);
    }
    content
}

fn node_id(item: &Map<String, Value>) -> Option<String> {
    field(item, "nid")
        .or_else(|| field(item, "id"))
        .or_else(|| field(item, "uuid"))
}

/// Id, title, primary image. The starting point of every item mapper.
fn base_item(index: usize, item: &Map<String, Value>) -> NormalizedItem {
    NormalizedItem {
        id: node_id(item).unwrap_or_else(|| format!("item-{}", index + 1)),
        title: field(item, "title").unwrap_or_else(|| UNTITLED.to_string()),
        image: first_urls(item, IMAGE_FIELDS).into_iter().next(),
        ..Default::default()
    }
}

fn body(item: &Map<String, Value>) -> Option<String> {
    field(item, "body")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_base_item_defaults() {
        let item = Map::new();
        let mapped = base_item(2, &item);
        assert_eq!(mapped.id, "item-3");
        assert_eq!(mapped.title, "Untitled");
        assert_eq!(mapped.image, None);
    }

    #[test]
    fn test_collection_uses_entry_id_and_slug_template() {
        let context = RequestContext {
            entry_id: Some("members"),
            filter: None,
        };
        let content = format_collection(CmsCollection::BookingForms, &[], &context);
        assert_eq!(content.id, "members");
        assert_eq!(content.template.as_deref(), Some("booking-forms"));
        assert!(content.items().is_empty());
    }

    #[test]
    fn test_collection_without_entry_id_uses_slug() {
        let content = format_collection(
            CmsCollection::Services,
            &[json!({ "title": "Havan" })],
            &RequestContext::default(),
        );
        assert_eq!(content.id, "services");
        assert_eq!(content.items()[0].title, "Havan");
    }

    #[test]
    fn test_non_object_items_get_defaults() {
        let content = format_collection(
            CmsCollection::Blog,
            &[json!(42), json!(null)],
            &RequestContext::default(),
        );
        let titles: Vec<_> = content.items().iter().map(|i| i.title.as_str()).collect();
        assert_eq!(titles, vec!["Untitled", "Untitled"]);
    }

    #[test]
    fn test_format_page_prefers_summary() {
        let item = json!({
            "nid": [{ "value": 9 }],
            "title": [{ "value": "Ganesh Chaturthi" }],
            "body": [{ "value": "raw", "processed": "<p>Full story</p>", "summary": "Short" }],
            "field_image": [{ "url": "/g.jpg" }]
        });
        let content = format_page(item.as_object().unwrap(), &RequestContext::default());
        assert_eq!(content.id, "9");
        assert_eq!(content.description, "Short");
        assert_eq!(content.body.as_deref(), Some("<p>Full story</p>"));
        assert_eq!(content.images, Some(vec!["/g.jpg".to_string()]));
    }

    #[test]
    fn test_format_page_summarizes_body() {
        let item = json!({ "title": "Puja", "body": "<p>Evening puja at seven.</p>" });
        let content = format_page(
            item.as_object().unwrap(),
            &RequestContext {
                entry_id: Some("temple"),
                filter: None,
            },
        );
        assert_eq!(content.id, "temple");
        assert_eq!(content.description, "Evening puja at seven.");
    }
}
