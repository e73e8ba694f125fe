//! The public mock API used by the first prototype of the site. Kept so old
//! menu configurations keep rendering.

mod photos;
mod posts;
mod users;

use core_types::NormalizedContent;
use serde_json::{Map, Value};

use crate::content_normalizer::{classify::LegacyResource, field::extract_field};

const LIST_LIMIT: usize = 6;

pub fn format_legacy(resource: LegacyResource, payload: &Value) -> NormalizedContent {
    let empty = Map::new();
    let object = payload.as_object().unwrap_or(&empty);
    let items = payload.as_array().map(Vec::as_slice).unwrap_or_default();

    match resource {
        LegacyResource::PostPage => posts::format_post(object),
        LegacyResource::PostList => posts::format_posts(items),
        LegacyResource::UserPage => users::format_user(object),
        LegacyResource::UserList => users::format_users(items),
        LegacyResource::Photos => photos::format_photos(items),
    }
}

fn text(object: &Map<String, Value>, key: &str) -> Option<String> {
    object.get(key).and_then(extract_field)
}

fn legacy_id(object: &Map<String, Value>, fallback: &str) -> String {
    text(object, "id").unwrap_or_else(|| fallback.to_string())
}
