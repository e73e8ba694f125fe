use core_types::{NormalizedContent, NormalizedItem};
use serde_json::{Map, Value};

use super::{LIST_LIMIT, legacy_id, text};
use crate::content_normalizer::html::{escape_html, truncate_chars};

const DEFAULT_BODY: &str = "This is a sample content for our temple website. We provide spiritual \
guidance, community services, and cultural events for all members.";

pub fn format_post(post: &Map<String, Value>) -> NormalizedContent {
    let description = match text(post, "body") {
        Some(body) => format!("{}...", truncate_chars(&body, 150)),
        None => "Learn more about our temple community and spiritual services.".to_string(),
    };
    NormalizedContent::page(
        legacy_id(post, "post"),
        text(post, "title").unwrap_or_else(|| "Temple Information".to_string()),
        description,
    )
    .with_template("post")
    .with_body(page_content(post))
}

pub fn format_posts(posts: &[Value]) -> NormalizedContent {
    let empty = Map::new();
    let items = posts
        .iter()
        .take(LIST_LIMIT)
        .enumerate()
        .map(|(index, post)| {
            let post = post.as_object().unwrap_or(&empty);
            let id = legacy_id(post, &(index + 1).to_string());
            let description = match text(post, "body") {
                Some(body) => format!("{}...", truncate_chars(&body, 100)),
                None => "Join us for this special community gathering and spiritual celebration."
                    .to_string(),
            };
            NormalizedItem {
                title: text(post, "title").unwrap_or_else(|| "Community Event".to_string()),
                description: Some(description),
                image: Some(format!("https://picsum.photos/400/200?random={id}")),
                link: Some("#".to_string()),
                ..NormalizedItem::new(id, "")
            }
        })
        .collect();

    NormalizedContent::list(
        "posts-list",
        "Temple Events & News",
        "Latest updates and events from our temple community",
        items,
    )
    .with_template("posts")
}

fn page_content(post: &Map<String, Value>) -> String {
    let title = text(post, "title").unwrap_or_else(|| "Welcome to Our Temple".to_string());
    let body = text(post, "body").unwrap_or_else(|| DEFAULT_BODY.to_string());

    format!(
        concat!(
            r#"<div class="hero-section"><h2>{}</h2><p>{}</p></div>"#,
            r#"<div class="features-grid">"#,
            r#"<div class="feature-card"><h3>Spiritual Services</h3>"#,
            "<p>Daily prayers, meditation sessions, and spiritual guidance for all community members.</p></div>",
            r#"<div class="feature-card"><h3>Community Events</h3>"#,
            "<p>Regular cultural celebrations, festivals, and community gatherings throughout the year.</p></div>",
            r#"<div class="feature-card"><h3>Educational Programs</h3>"#,
            "<p>Scripture study classes, cultural education, and youth programs for all ages.</p></div>",
            "</div>",
        ),
        escape_html(&title),
        escape_html(&body),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_types::ContentKind;
    use serde_json::json;

    #[test]
    fn test_post_page() {
        let post = json!({ "id": 1, "title": "Ram Navami", "body": "Celebration at noon" });
        let content = format_post(post.as_object().unwrap());
        assert_eq!(content.id, "1");
        assert_eq!(content.kind, ContentKind::Page);
        assert_eq!(content.description, "Celebration at noon...");
        assert!(content.body.unwrap().contains("<h2>Ram Navami</h2>"));
    }

    #[test]
    fn test_post_page_defaults() {
        let content = format_post(&Map::new());
        assert_eq!(content.id, "post");
        assert_eq!(content.title, "Temple Information");
        assert!(content.body.unwrap().contains("<h2>Welcome to Our Temple</h2>"));
    }

    #[test]
    fn test_post_list_is_limited_to_six() {
        let posts: Vec<Value> = (1..=10)
            .map(|id| json!({ "id": id, "title": format!("Post {id}") }))
            .collect();
        let content = format_posts(&posts);
        assert_eq!(content.items().len(), 6);
        let first = &content.items()[0];
        assert_eq!(first.id, "1");
        assert_eq!(first.image.as_deref(), Some("https://picsum.photos/400/200?random=1"));
        assert_eq!(first.link.as_deref(), Some("#"));
    }
}
