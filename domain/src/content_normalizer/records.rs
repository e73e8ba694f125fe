//! Fixed records published without consulting the backend.

use core_types::NormalizedContent;

pub const ERROR_CONTENT_ID: &str = "error";
pub const FALLBACK_CONTENT_ID: &str = "unknown";

pub const DEFAULT_TITLE: &str = "Temple Content";
pub const DEFAULT_DESCRIPTION: &str = "No content available.";

pub fn home_content() -> NormalizedContent {
    NormalizedContent::page(
        "home",
        "Welcome to Vedic Temple",
        "Experience the divine spirituality and cultural heritage at our temple.",
    )
    .with_template("home")
    .with_body(concat!(
        r#"<div class="hero-section">"#,
        "<h2>Welcome to Our Sacred Space</h2>",
        "<p>Join us in prayer, community, and spiritual growth. ",
        "Our temple serves as a beacon of faith and tradition.</p>",
        "</div>",
        r#"<div class="features-grid">"#,
        r#"<div class="feature-card"><h3>Daily Prayers</h3><p>Morning and evening prayers conducted daily</p></div>"#,
        r#"<div class="feature-card"><h3>Community Events</h3><p>Regular cultural and spiritual gatherings</p></div>"#,
        r#"<div class="feature-card"><h3>Education Programs</h3><p>Learn about our traditions and scriptures</p></div>"#,
        "</div>",
    ))
}

/// Shown when the backend could not be reached or answered garbage.
pub fn error_content() -> NormalizedContent {
    NormalizedContent::page(
        ERROR_CONTENT_ID,
        "Content Not Available",
        "Unable to load content from the server.",
    )
    .with_body("<p>This content is temporarily unavailable. Please try again later.</p>")
}

/// Shown when the payload shape is not recognized.
pub fn fallback_content() -> NormalizedContent {
    NormalizedContent::page(
        FALLBACK_CONTENT_ID,
        "Temple Information",
        "Additional content and resources for our community",
    )
    .with_body(concat!(
        r#"<div class="hero-section"><h2>Temple Resources</h2>"#,
        "<p>Additional information and resources for our community members.</p></div>",
    ))
}

/// Shown for menu entries that are not bound to an endpoint.
pub fn coming_soon_content(entry_id: &str) -> NormalizedContent {
    NormalizedContent::page(
        entry_id,
        "Content Not Available",
        "This content is coming soon.",
    )
    .with_body("<p>This section is under development.</p>")
}
