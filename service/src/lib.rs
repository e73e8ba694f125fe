pub mod content_service;
pub mod error;
pub mod settings;
