use serde::{Deserialize, Serialize};
use strum_macros::Display;

pub mod events;
pub mod menu_entry;

pub use menu_entry::{MenuEntry, MenuSide};

/// How the display layer should present a piece of content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ContentKind {
    Page,
    List,
    Gallery,
}

/// The uniform record the display layer consumes, independent of the
/// backend shape it was built from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedContent {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: ContentKind,
    /// Rendering hint, e.g. `"events"` or `"trustees"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Vec<NormalizedItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
}

impl NormalizedContent {
    pub fn page(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self::new(id, title, description, ContentKind::Page)
    }

    pub fn list(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        items: Vec<NormalizedItem>,
    ) -> Self {
        Self {
            items: Some(items),
            ..Self::new(id, title, description, ContentKind::List)
        }
    }

    pub fn gallery(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        images: Vec<String>,
    ) -> Self {
        Self {
            images: Some(images),
            ..Self::new(id, title, description, ContentKind::Gallery)
        }
    }

    fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        kind: ContentKind,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            kind,
            template: None,
            body: None,
            items: None,
            images: None,
        }
    }

    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }

    pub fn with_images(mut self, images: Vec<String>) -> Self {
        self.images = if images.is_empty() { None } else { Some(images) };
        self
    }

    /// Items of a list, or an empty slice for pages and galleries.
    pub fn items(&self) -> &[NormalizedItem] {
        self.items.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NormalizedItem {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Display order within a category (trustees).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
}

impl NormalizedItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Default::default()
        }
    }
}
