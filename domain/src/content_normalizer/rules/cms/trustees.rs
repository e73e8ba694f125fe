use core_types::NormalizedItem;
use serde_json::{Map, Value};

use super::base_item;
use crate::{content_normalizer::field::field, trustee_groups::DEFAULT_CATEGORY};

pub fn map_trustee(index: usize, item: &Map<String, Value>) -> NormalizedItem {
    NormalizedItem {
        description: field(item, "field_designation"),
        category: Some(
            field(item, "field_trustee_category").unwrap_or_else(|| DEFAULT_CATEGORY.to_string()),
        ),
        order: field(item, "field_order").and_then(|order| order.trim().parse().ok()),
        ..base_item(index, item)
    }
}
