// src/models/mod.rs

//! Domain models for the scraper.
//!
//! Records are plain data produced directly by the parsers; every field is
//! populated, with defaults substituted for missing markup.

mod article;
pub mod config;
mod event;
mod excerpt;
mod program;

// Re-export all public types
pub use article::Article;
pub use config::{Config, DateConfig, DateFallback, HttpConfig, Labels, SiteConfig, WikiConfig};
pub use event::Event;
pub use excerpt::WikiExcerpt;
pub use program::Program;
