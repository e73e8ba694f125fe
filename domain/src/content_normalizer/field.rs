use serde_json::{Map, Value};

/// Extracts a scalar from the CMS field encoding.
///
/// A field is either a bare scalar or a list of records carrying `processed`
/// (rendered HTML) and/or `value` (raw value). `processed` wins over `value`.
/// Returns `None` for null, empty lists, empty strings and records with
/// neither key.
pub fn extract_field(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(_) | Value::Number(_) | Value::Bool(_) => scalar(value),
        Value::Array(values) => values.first().and_then(extract_field),
        Value::Object(record) => record
            .get("processed")
            .and_then(scalar)
            .or_else(|| record.get("value").and_then(scalar)),
    }
}

/// Extracts the named field of a CMS item.
pub fn field(item: &Map<String, Value>, name: &str) -> Option<String> {
    item.get(name).and_then(extract_field)
}

/// First of the named fields that is present.
pub fn first_field(item: &Map<String, Value>, names: &[&str]) -> Option<String> {
    names.iter().find_map(|name| field(item, name))
}

/// Reads a sub-key of the first record of a field, e.g. the `summary` of a
/// body field.
pub fn record_key(item: &Map<String, Value>, name: &str, key: &str) -> Option<String> {
    let record = match item.get(name)? {
        Value::Array(values) => values.first()?,
        other => other,
    };
    record.as_object()?.get(key).and_then(scalar)
}

/// Extracts URLs from an image or file field.
///
/// Accepts a bare URL, a comma separated list of URLs, a list of strings or
/// a list of records carrying `url`, `uri`, `processed` or `value`.
pub fn extract_urls(value: &Value) -> Vec<String> {
    match value {
        Value::String(s) => split_urls(s),
        Value::Array(values) => values.iter().flat_map(extract_urls).collect(),
        Value::Object(record) => record_url(record).into_iter().collect(),
        _ => Vec::new(),
    }
}

/// URLs of the first named field that yields any.
pub fn first_urls(item: &Map<String, Value>, names: &[&str]) -> Vec<String> {
    names
        .iter()
        .filter_map(|name| item.get(*name))
        .map(extract_urls)
        .find(|urls| !urls.is_empty())
        .unwrap_or_default()
}

/// Returns the strings of an image list as they are. Non string elements
/// fall back to URL extraction.
pub fn pass_through_urls(value: &Value) -> Vec<String> {
    match value {
        Value::Array(values) => values
            .iter()
            .flat_map(|element| match element {
                Value::String(s) if !s.is_empty() => vec![s.clone()],
                other => extract_urls(other),
            })
            .collect(),
        other => extract_urls(other),
    }
}

fn record_url(record: &Map<String, Value>) -> Option<String> {
    ["url", "uri", "processed", "value"]
        .iter()
        .find_map(|key| record.get(*key).and_then(scalar))
}

fn split_urls(s: &str) -> Vec<String> {
    s.split(',')
        .map(str::trim)
        .filter(|url| !url.is_empty())
        .map(String::from)
        .collect()
}

fn scalar(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}
