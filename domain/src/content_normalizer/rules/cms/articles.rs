use core_types::{NormalizedContent, NormalizedItem};
use serde_json::{Map, Value};

use super::{RequestContext, base_item, body, format_page, heading, map_items};
use crate::content_normalizer::{
    classify::CmsCollection,
    field::field,
    filter::{MENU_ITEM_FIELD, filter_by_menu_item},
};

pub fn map_article(index: usize, item: &Map<String, Value>) -> NormalizedItem {
    NormalizedItem {
        description: body(item),
        category: field(item, MENU_ITEM_FIELD),
        ..base_item(index, item)
    }
}

/// Articles narrowed by the filter key of the menu entry. Exactly one match
/// is shown as a page, anything else as a list.
pub fn format_articles(items: &[Value], context: &RequestContext) -> NormalizedContent {
    let selected = match context.filter {
        Some(filter) => filter_by_menu_item(items, filter),
        None => items.iter().collect(),
    };

    if context.filter.is_some() {
        if let [single] = selected.as_slice() {
            if let Some(item) = single.as_object() {
                return format_page(item, context).with_template("article");
            }
        }
    }

    let (title, description) = heading(CmsCollection::Articles);
    let title = context.filter.filter(|f| !f.is_empty()).unwrap_or(title);
    NormalizedContent::list(
        context.content_id(CmsCollection::Articles.slug()),
        title,
        description,
        map_items(CmsCollection::Articles, selected.into_iter()),
    )
    .with_template(CmsCollection::Articles.slug())
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ContentKind;
    use serde_json::json;

    fn articles() -> Vec<Value> {
        vec![
            json!({
                "nid": [{ "value": 1 }],
                "title": [{ "value": "Our Temple" }],
                "body": [{ "processed": "<p>Founded in 1985.</p>" }],
                "field_menu_item": [{ "value": "Temple" }]
            }),
            json!({
                "nid": [{ "value": 2 }],
                "title": [{ "value": "Pandit Sharma" }],
                "field_menu_item": [{ "value": "Priest" }]
            }),
            json!({
                "nid": [{ "value": 3 }],
                "title": [{ "value": "Pandit Joshi" }],
                "field_menu_item": [{ "value": "priest" }]
            }),
        ]
    }

    #[test]
    fn test_single_match_becomes_page() {
        let context = RequestContext {
            entry_id: Some("temple"),
            filter: Some("TEMPLE"),
        };
        let content = format_articles(&articles(), &context);
        assert_eq!(content.kind, ContentKind::Page);
        assert_eq!(content.id, "temple");
        assert_eq!(content.title, "Our Temple");
        assert_eq!(content.body.as_deref(), Some("<p>Founded in 1985.</p>"));
        assert_eq!(content.template.as_deref(), Some("article"));
    }

    #[test]
    fn test_two_matches_stay_a_list() {
        let context = RequestContext {
            entry_id: Some("priest"),
            filter: Some("Priest"),
        };
        let content = format_articles(&articles(), &context);
        assert_eq!(content.kind, ContentKind::List);
        assert_eq!(content.title, "Priest");
        let ids: Vec<_> = content.items().iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "3"]);
    }

    #[test]
    fn test_no_match_is_an_empty_list() {
        let context = RequestContext {
            entry_id: Some("legal"),
            filter: Some("Legal"),
        };
        let content = format_articles(&articles(), &context);
        assert_eq!(content.kind, ContentKind::List);
        assert!(content.items().is_empty());
    }

    #[test]
    fn test_without_filter_all_articles_listed() {
        let content = format_articles(&articles()[..1], &RequestContext::default());
        assert_eq!(content.kind, ContentKind::List);
        assert_eq!(content.items()[0].category.as_deref(), Some("Temple"));
    }
}
