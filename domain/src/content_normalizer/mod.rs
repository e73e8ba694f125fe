mod classify;
mod field;
mod filter;
mod html;
mod normalizer;
mod records;
mod rules;
mod timestamps;

use core_types::NormalizedContent;
use serde_json::Value;

pub use classify::{
    AnnouncementKind, Classification, CmsCollection, ContentSource, EndpointPath, LegacyResource,
    classify,
};
pub use field::{extract_field, extract_urls, field};
pub use filter::{filter_by_menu_item, matches_menu_item};
pub use normalizer::ContentNormalizer;
pub use records::{
    ERROR_CONTENT_ID, FALLBACK_CONTENT_ID, coming_soon_content, error_content, fallback_content,
    home_content,
};

/// Normalize a raw payload fetched from `endpoint` for the menu entry
/// `entry_id`, narrowing article collections to `filter`.
pub fn normalize(
    payload: &Value,
    endpoint: &str,
    filter: Option<&str>,
    entry_id: Option<&str>,
) -> NormalizedContent {
    ContentNormalizer.normalize(payload, endpoint, filter, entry_id)
}
