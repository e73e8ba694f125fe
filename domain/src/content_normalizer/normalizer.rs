use core_types::NormalizedContent;
use serde_json::Value;
use tracing::debug;

use crate::content_normalizer::{
    classify::{Classification, classify},
    records::fallback_content,
    rules::{
        cms::{RequestContext, format_collection, format_page},
        legacy::format_legacy,
    },
};

/// Turns raw backend payloads into [`NormalizedContent`].
///
/// Total over arbitrary input: unknown shapes give the fallback record and
/// missing fields give defaults. Never fails.
pub struct ContentNormalizer;

impl ContentNormalizer {
    pub fn normalize(
        &self,
        payload: &Value,
        endpoint: &str,
        filter: Option<&str>,
        entry_id: Option<&str>,
    ) -> NormalizedContent {
        let classification = classify(payload, endpoint);
        debug!(endpoint, ?classification, "Classified payload");

        let context = RequestContext { entry_id, filter };
        match (classification, payload) {
            (Classification::CmsCollection(collection), Value::Array(items)) => {
                format_collection(collection, items, &context)
            }
            (Classification::CmsPage, Value::Object(item)) => format_page(item, &context),
            (Classification::Legacy(resource), _) => format_legacy(resource, payload),
            _ => fallback_content(),
        }
    }
}
