// src/services/web.rs

//! Headings and paragraphs of a single page.

use std::sync::{Arc, LazyLock};

use scraper::Selector;

use crate::error::{AppError, Result};
use crate::services::fetch_document;
use crate::utils::html::{query, static_selector, texts_within};
use crate::utils::http::Fetch;

static HEADING: LazyLock<Selector> = LazyLock::new(|| static_selector("h2"));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| static_selector("p"));

const DEFAULT_CONTENT_CLASS: &str = "mw-parser-output";

/// Scraper bound to one page URL.
///
/// Every call fetches the page again; nothing is cached between calls.
pub struct WebScraper {
    url: String,
    content_class: String,
    fetcher: Arc<dyn Fetch>,
}

impl WebScraper {
    /// Create a scraper for `url` using the wiki content container.
    pub fn new(url: impl Into<String>, fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            url: url.into(),
            content_class: DEFAULT_CONTENT_CLASS.to_string(),
            fetcher,
        }
    }

    /// Use a different class for the paragraph container `div`.
    pub fn with_content_class(mut self, class: impl Into<String>) -> Self {
        self.content_class = class.into();
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Replace the target URL. Only `http`/`https` URLs are accepted.
    pub fn set_url(&mut self, url: impl Into<String>) -> Result<()> {
        let url = url.into();
        if !url.starts_with("http") {
            return Err(AppError::InvalidUrl(url));
        }
        self.url = url;
        Ok(())
    }

    /// Text of every `h2` on the page, in document order.
    pub fn extract_titles(&self) -> Result<Vec<String>> {
        let document = fetch_document(self.fetcher.as_ref(), &self.url)?;
        let titles = document.all_texts(&HEADING);
        log::debug!("Extracted {} titles from {}", titles.len(), self.url);
        Ok(titles)
    }

    /// Text of every `p` inside the content container.
    ///
    /// Returns an empty list when the page has no container.
    pub fn extract_paragraphs(&self) -> Result<Vec<String>> {
        let container = query("div", Some(self.content_class.as_str()))?;
        let document = fetch_document(self.fetcher.as_ref(), &self.url)?;

        let Some(content) = document.select_first(&container) else {
            log::debug!(
                "No div.{} container on {}, no paragraphs",
                self.content_class,
                self.url
            );
            return Ok(Vec::new());
        };

        Ok(texts_within(content, &PARAGRAPH))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::stub::StubFetcher;

    const URL: &str = "https://tambinsoyunal.fandom.com/es/wiki/Universidad_Nacional_de_Colombia";

    const WIKI_PAGE: &str = r#"
        <html><body>
            <p>Fuera del contenido</p>
            <h2>Historia</h2>
            <div class="mw-parser-output">
                <p>La Universidad Nacional de Colombia fue fundada en 1867.</p>
                <h2>Sedes</h2>
                <p>Tiene  sedes en
                   varias regiones.</p>
            </div>
        </body></html>
    "#;

    fn scraper(markup: &str) -> WebScraper {
        WebScraper::new(URL, Arc::new(StubFetcher::new().page(URL, markup)))
    }

    #[test]
    fn test_extract_titles() {
        let titles = scraper(WIKI_PAGE).extract_titles().unwrap();
        assert_eq!(titles, vec!["Historia", "Sedes"]);
    }

    #[test]
    fn test_extract_paragraphs_inside_container() {
        let paragraphs = scraper(WIKI_PAGE).extract_paragraphs().unwrap();
        assert_eq!(
            paragraphs,
            vec![
                "La Universidad Nacional de Colombia fue fundada en 1867.",
                "Tiene sedes en varias regiones.",
            ]
        );
    }

    #[test]
    fn test_extract_paragraphs_without_container_is_empty() {
        let paragraphs = scraper("<html><body><p>Suelto</p></body></html>")
            .extract_paragraphs()
            .unwrap();
        assert!(paragraphs.is_empty());
    }

    #[test]
    fn test_custom_content_class() {
        let paragraphs = scraper(r#"<div class="entry"><p>Uno</p></div>"#)
            .with_content_class("entry")
            .extract_paragraphs()
            .unwrap();
        assert_eq!(paragraphs, vec!["Uno"]);
    }

    #[test]
    fn test_fetch_failure_propagates() {
        let scraper = WebScraper::new(URL, Arc::new(StubFetcher::new()));
        assert!(matches!(
            scraper.extract_titles(),
            Err(AppError::Fetch { status: 404, .. })
        ));
    }

    #[test]
    fn test_empty_body_is_parse_error() {
        assert!(matches!(
            scraper("").extract_titles(),
            Err(AppError::Parse(_))
        ));
    }

    #[test]
    fn test_set_url_validates_scheme() {
        let mut scraper = scraper(WIKI_PAGE);
        assert!(matches!(
            scraper.set_url("ftp://unal.edu.co"),
            Err(AppError::InvalidUrl(_))
        ));
        assert_eq!(scraper.url(), URL);

        scraper.set_url("https://unal.edu.co").unwrap();
        assert_eq!(scraper.url(), "https://unal.edu.co");
    }
}
