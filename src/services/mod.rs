//! Service layer for the scraper.
//!
//! This module contains the composition of fetcher, document and parsers:
//! - Single-page headings and paragraphs (`WebScraper`)
//! - Category pages of a university site (`UniversityScraper`)
//! - Encyclopedia excerpts by topic (`WikiScraper`)

#[cfg(test)]
pub(crate) mod stub;
mod university;
mod web;
mod wiki;

pub use university::UniversityScraper;
pub use web::WebScraper;
pub use wiki::WikiScraper;

use crate::error::Result;
use crate::utils::html::Document;
use crate::utils::http::Fetch;

/// Fetch `url` and parse the body into a fresh document.
pub fn fetch_document(fetcher: &dyn Fetch, url: &str) -> Result<Document> {
    let markup = fetcher.fetch(url)?;
    Document::with_url(&markup, url)
}
