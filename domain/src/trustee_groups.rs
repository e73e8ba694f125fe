use std::cmp::Ordering;
use std::collections::HashMap;

use core_types::NormalizedItem;

/// Display order of trustee categories.
pub const CATEGORY_PREFERENCE: &[&str] = &[
    "Holding Trustee - Chair",
    "Holding Trustee",
    "Executive Committee member",
    "Other",
];

pub const DEFAULT_CATEGORY: &str = "Other";

#[derive(Debug, Clone, PartialEq)]
pub struct TrusteeGroup {
    pub category: String,
    pub members: Vec<NormalizedItem>,
}

/// Orders two categories: listed categories by their position in
/// [`CATEGORY_PREFERENCE`], listed before unlisted, unlisted alphabetically.
pub fn compare_categories(a: &str, b: &str) -> Ordering {
    let position = |category: &str| CATEGORY_PREFERENCE.iter().position(|c| *c == category);
    match (position(a), position(b)) {
        (Some(a_position), Some(b_position)) => a_position.cmp(&b_position),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

/// Groups trustee items by category. Members are ordered by their display
/// order (items without one last), then by name.
pub fn group_trustees(items: &[NormalizedItem]) -> Vec<TrusteeGroup> {
    let mut by_category: HashMap<&str, Vec<NormalizedItem>> = HashMap::new();
    for item in items {
        let category = item
            .category
            .as_deref()
            .filter(|category| !category.is_empty())
            .unwrap_or(DEFAULT_CATEGORY);
        by_category.entry(category).or_default().push(item.clone());
    }

    let mut groups: Vec<TrusteeGroup> = by_category
        .into_iter()
        .map(|(category, mut members)| {
            members.sort_by(|a, b| {
                compare_order(a.order, b.order).then_with(|| a.title.cmp(&b.title))
            });
            TrusteeGroup {
                category: category.to_string(),
                members,
            }
        })
        .collect();
    groups.sort_by(|a, b| compare_categories(&a.category, &b.category));
    groups
}

fn compare_order(a: Option<i64>, b: Option<i64>) -> Ordering {
    match (a, b) {
        (Some(a), Some(b)) => a.cmp(&b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}
