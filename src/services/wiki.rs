// src/services/wiki.rs

//! Encyclopedia lookup by topic.

use std::sync::{Arc, LazyLock};

use scraper::Selector;

use crate::models::{WikiConfig, WikiExcerpt};
use crate::services::fetch_document;
use crate::utils::html::static_selector;
use crate::utils::http::Fetch;

static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| static_selector("p"));

/// Fetches the leading paragraphs of an encyclopedia article.
pub struct WikiScraper {
    base_url: String,
    max_paragraphs: usize,
    fetcher: Arc<dyn Fetch>,
}

impl WikiScraper {
    pub fn new(config: &WikiConfig, fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            base_url: config.base_url.clone(),
            max_paragraphs: config.max_paragraphs,
            fetcher,
        }
    }

    /// Article URL for a topic; spaces become underscores.
    pub fn article_url(&self, topic: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            topic.replace(' ', "_")
        )
    }

    /// Leading paragraphs of the article on `topic`.
    ///
    /// Fetch and parse failures are logged and yield an excerpt with no
    /// paragraphs.
    pub fn scrape(&self, topic: &str) -> WikiExcerpt {
        let url = self.article_url(topic);
        let paragraphs = match fetch_document(self.fetcher.as_ref(), &url) {
            Ok(document) => document
                .all_texts(&PARAGRAPH)
                .into_iter()
                .take(self.max_paragraphs)
                .collect(),
            Err(e) => {
                log::warn!("Wiki lookup for '{topic}' failed: {e}");
                Vec::new()
            }
        };

        WikiExcerpt {
            topic: topic.to_string(),
            url,
            paragraphs,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::stub::StubFetcher;

    const ARTICLE: &str = r#"
        <div id="content">
            <p>Colombia es un país de América del Sur.</p>
            <p>Su capital es Bogotá.</p>
            <p>Limita con Venezuela y Brasil.</p>
            <p>Tiene costas en dos océanos.</p>
            <p>Cuarto párrafo extra.</p>
        </div>
    "#;

    fn wiki(stub: StubFetcher) -> (WikiScraper, Arc<StubFetcher>) {
        let stub = Arc::new(stub);
        let scraper = WikiScraper::new(&WikiConfig::default(), stub.clone());
        (scraper, stub)
    }

    #[test]
    fn test_article_url_substitutes_spaces() {
        let (scraper, _) = wiki(StubFetcher::new());
        assert_eq!(
            scraper.article_url("Universidad Nacional de Colombia"),
            "https://es.wikipedia.org/wiki/Universidad_Nacional_de_Colombia"
        );
    }

    #[test]
    fn test_article_url_empty_topic_keeps_trailing_slash() {
        let (scraper, _) = wiki(StubFetcher::new());
        assert_eq!(scraper.article_url(""), "https://es.wikipedia.org/wiki/");
    }

    #[test]
    fn test_scrape_keeps_first_three_paragraphs() {
        let url = "https://es.wikipedia.org/wiki/Colombia";
        let (scraper, stub) = wiki(StubFetcher::new().page(url, ARTICLE));

        let excerpt = scraper.scrape("Colombia");

        assert_eq!(stub.requests(), vec![url.to_string()]);
        assert_eq!(excerpt.url, url);
        assert_eq!(excerpt.topic, "Colombia");
        assert_eq!(
            excerpt.paragraphs,
            vec![
                "Colombia es un país de América del Sur.",
                "Su capital es Bogotá.",
                "Limita con Venezuela y Brasil.",
            ]
        );
    }

    #[test]
    fn test_scrape_requests_underscored_url() {
        let (scraper, stub) = wiki(StubFetcher::new());
        scraper.scrape("Universidad Nacional de Colombia");
        assert_eq!(
            stub.requests(),
            vec!["https://es.wikipedia.org/wiki/Universidad_Nacional_de_Colombia".to_string()]
        );
    }

    #[test]
    fn test_scrape_short_article() {
        let url = "https://es.wikipedia.org/wiki/Medellín";
        let (scraper, _) = wiki(StubFetcher::new().page(url, "<p>Ciudad.</p>"));
        assert_eq!(scraper.scrape("Medellín").paragraphs, vec!["Ciudad."]);
    }

    #[test]
    fn test_fetch_failure_yields_empty_excerpt() {
        let (scraper, _) = wiki(StubFetcher::new());
        let excerpt = scraper.scrape("Tema inexistente");
        assert!(excerpt.is_empty());
        assert_eq!(
            excerpt.url,
            "https://es.wikipedia.org/wiki/Tema_inexistente"
        );
    }

    #[test]
    fn test_custom_paragraph_limit() {
        let url = "https://es.wikipedia.org/wiki/Colombia";
        let config = WikiConfig {
            max_paragraphs: 1,
            ..WikiConfig::default()
        };
        let scraper = WikiScraper::new(&config, Arc::new(StubFetcher::new().page(url, ARTICLE)));
        assert_eq!(scraper.scrape("Colombia").paragraphs.len(), 1);
    }
}
