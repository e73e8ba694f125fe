use core_types::{NormalizedContent, NormalizedItem};
use serde_json::{Map, Value};

use super::{LIST_LIMIT, legacy_id, text};
use crate::content_normalizer::html::escape_html;

pub fn format_user(user: &Map<String, Value>) -> NormalizedContent {
    NormalizedContent::page(
        legacy_id(user, "user"),
        text(user, "name").unwrap_or_else(|| "Temple Member Profile".to_string()),
        "Community member contact information and spiritual services",
    )
    .with_template("user")
    .with_body(user_content(user))
}

pub fn format_users(users: &[Value]) -> NormalizedContent {
    let empty = Map::new();
    let items = users
        .iter()
        .take(LIST_LIMIT)
        .enumerate()
        .map(|(index, user)| {
            let user = user.as_object().unwrap_or(&empty);
            let id = legacy_id(user, &(index + 1).to_string());
            NormalizedItem {
                title: text(user, "name").unwrap_or_else(|| "Community Member".to_string()),
                description: Some(
                    "Active member providing spiritual guidance and community support".to_string(),
                ),
                image: Some(format!("https://i.pravatar.cc/150?img={id}")),
                link: Some("#".to_string()),
                ..NormalizedItem::new(id, "")
            }
        })
        .collect();

    NormalizedContent::list(
        "users-list",
        "Temple Community Members",
        "Meet our dedicated community members and spiritual leaders",
        items,
    )
    .with_template("users")
}

fn nested(user: &Map<String, Value>, key: &str) -> Option<Map<String, Value>> {
    user.get(key).and_then(Value::as_object).cloned()
}

fn user_content(user: &Map<String, Value>) -> String {
    let name = text(user, "name").unwrap_or_else(|| "Temple Member".to_string());
    let email = text(user, "email").unwrap_or_else(|| "contact@temple.org".to_string());
    let phone = text(user, "phone").unwrap_or_else(|| "(555) 123-4567".to_string());
    let address = nested(user, "address")
        .map(|address| {
            format!(
                "{}, {}",
                text(&address, "street").unwrap_or_default(),
                text(&address, "city").unwrap_or_default()
            )
        })
        .unwrap_or_else(|| "Temple Address Available".to_string());
    let company = nested(user, "company")
        .and_then(|company| text(&company, "name"))
        .unwrap_or_else(|| "Temple Community".to_string());

    format!(
        concat!(
            r#"<div class="hero-section"><h2>{name}</h2><p>Community member and spiritual guide</p></div>"#,
            r#"<div class="features-grid">"#,
            r#"<div class="feature-card"><h3>Contact Information</h3>"#,
            "<p><strong>Email:</strong> {email}</p>",
            "<p><strong>Phone:</strong> {phone}</p>",
            "<p><strong>Role:</strong> Temple Community Member</p></div>",
            r#"<div class="feature-card"><h3>Location</h3>"#,
            "<p>{address}</p><p><strong>Community:</strong> Local Temple Area</p></div>",
            r#"<div class="feature-card"><h3>Community Involvement</h3>"#,
            "<p>Active member of {company}</p>",
            "<p><strong>Services:</strong> Spiritual guidance and community support</p></div>",
            "</div>",
        ),
        name = escape_html(&name),
        email = escape_html(&email),
        phone = escape_html(&phone),
        address = escape_html(&address),
        company = escape_html(&company),
    )
}
