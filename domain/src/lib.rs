pub mod content_normalizer;
pub mod menu;
pub mod trustee_groups;
