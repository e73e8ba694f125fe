use core_types::{MenuEntry, MenuSide, NormalizedContent, NormalizedItem};
use domain::{menu::MenuRegistry, trustee_groups::TrusteeGroup};
use strum::IntoEnumIterator;

pub fn render_menu(registry: &MenuRegistry) -> String {
    let mut lines = Vec::new();
    for side in MenuSide::iter() {
        lines.push(format!("{}:", side));
        for entry in registry.side(side) {
            lines.push(menu_line(entry, 1));
            for child in &entry.children {
                lines.push(menu_line(child, 2));
            }
        }
    }
    lines.join("\n")
}

fn menu_line(entry: &MenuEntry, depth: usize) -> String {
    let mut line = format!("{}{} [{}]", "  ".repeat(depth), entry.title, entry.id);
    if let Some(endpoint) = &entry.endpoint {
        line.push_str(&format!(" -> {}", endpoint));
    }
    if let Some(filter) = &entry.filter {
        line.push_str(&format!(" (filter: {})", filter));
    }
    line
}

pub fn render_content(content: &NormalizedContent) -> String {
    let mut lines = vec![
        content.title.clone(),
        "=".repeat(content.title.chars().count()),
        content.description.clone(),
        format!(
            "id: {}, kind: {}{}",
            content.id,
            content.kind,
            content
                .template
                .as_deref()
                .map(|t| format!(", template: {}", t))
                .unwrap_or_default()
        ),
    ];

    if !content.items().is_empty() {
        lines.push(String::new());
        lines.extend(content.items().iter().map(item_line));
    }
    if let Some(images) = &content.images {
        lines.push(String::new());
        lines.extend(images.iter().map(|image| format!("  [image] {}", image)));
    }
    if let Some(body) = &content.body {
        lines.push(String::new());
        lines.push(body.clone());
    }
    lines.join("\n")
}

fn item_line(item: &NormalizedItem) -> String {
    let mut line = format!("  - {} [{}]", item.title, item.id);
    if let Some(category) = &item.category {
        line.push_str(&format!(" ({})", category));
    }
    if let Some(link) = &item.link {
        line.push_str(&format!(" <{}>", link));
    }
    line
}

pub fn render_trustees(groups: &[TrusteeGroup]) -> String {
    let mut lines = Vec::new();
    for group in groups {
        lines.push(format!("{}:", group.category));
        for member in &group.members {
            match &member.description {
                Some(designation) => lines.push(format!("  - {}, {}", member.title, designation)),
                None => lines.push(format!("  - {}", member.title)),
            }
        }
    }
    lines.join("\n")
}
