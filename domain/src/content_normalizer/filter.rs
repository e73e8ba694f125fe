use serde_json::Value;

use super::field::field;

pub const MENU_ITEM_FIELD: &str = "field_menu_item";

/// Whether an item belongs to the menu entry with the given filter key.
/// Case-insensitive, otherwise exact.
pub fn matches_menu_item(item: &Value, filter_key: &str) -> bool {
    item.as_object()
        .and_then(|item| field(item, MENU_ITEM_FIELD))
        .is_some_and(|menu_item| menu_item.to_lowercase() == filter_key.to_lowercase())
}

pub fn filter_by_menu_item<'a>(items: &'a [Value], filter_key: &str) -> Vec<&'a Value> {
    items
        .iter()
        .filter(|item| matches_menu_item(item, filter_key))
        .collect()
}
