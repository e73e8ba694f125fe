use core_types::NormalizedItem;
use serde_json::{Map, Value};

use super::base_item;
use crate::content_normalizer::field::{field, first_urls};

const PDF_FIELDS: &[&str] = &["field_pdf", "field_form_pdf", "field_attachment"];

pub fn map_booking_form(index: usize, item: &Map<String, Value>) -> NormalizedItem {
    NormalizedItem {
        description: field(item, "field_notes"),
        link: first_urls(item, PDF_FIELDS).into_iter().next(),
        ..base_item(index, item)
    }
}
