// src/services/university.rs

//! Category scraper for a university site.
//!
//! Binds a base URL to the news, program and event parsers plus the
//! encyclopedia lookup. Each category lives under a fixed path suffix:
//!
//! | Operation | Path | Record |
//! |-----------|------|--------|
//! | [`scrape_news`](UniversityScraper::scrape_news) | `/noticias` | [`Article`] |
//! | [`scrape_programs`](UniversityScraper::scrape_programs) | `/programas` | [`Program`] |
//! | [`scrape_events`](UniversityScraper::scrape_events) | `/eventos` | [`Event`] |

use std::sync::Arc;

use crate::error::Result;
use crate::models::{Article, Config, Event, Program, SiteConfig, WikiExcerpt};
use crate::parsers::{EventParser, NewsParser, ProgramParser, RecordParser};
use crate::services::{WebScraper, WikiScraper, fetch_document};
use crate::utils::http::Fetch;
use crate::utils::join_path;

/// Scraper for the news, program and event pages of one site.
pub struct UniversityScraper {
    page: WebScraper,
    site: SiteConfig,
    news: NewsParser,
    programs: ProgramParser,
    events: EventParser,
    wiki: WikiScraper,
    fetcher: Arc<dyn Fetch>,
}

impl UniversityScraper {
    /// Create a scraper for `base_url` with default settings.
    pub fn new(base_url: impl Into<String>, fetcher: Arc<dyn Fetch>) -> Self {
        let mut config = Config::default();
        config.site.base_url = base_url.into();
        Self::from_config(&config, fetcher)
    }

    /// Create a scraper from the full configuration.
    pub fn from_config(config: &Config, fetcher: Arc<dyn Fetch>) -> Self {
        Self {
            page: WebScraper::new(config.site.base_url.clone(), Arc::clone(&fetcher))
                .with_content_class(config.site.content_class.clone()),
            site: config.site.clone(),
            news: NewsParser::new(config.labels.clone()),
            programs: ProgramParser::new(),
            events: EventParser::new(config.dates.on_invalid),
            wiki: WikiScraper::new(&config.wiki, Arc::clone(&fetcher)),
            fetcher,
        }
    }

    pub fn base_url(&self) -> &str {
        self.page.url()
    }

    /// Point the scraper at another site. Rejects URLs not starting with "http".
    pub fn set_url(&mut self, url: impl Into<String>) -> Result<()> {
        self.page.set_url(url)
    }

    /// Scrape the news page.
    pub fn scrape_news(&self) -> Result<Article> {
        self.scrape(&self.site.news_path, &self.news)
    }

    /// Scrape the academic programs page.
    pub fn scrape_programs(&self) -> Result<Program> {
        self.scrape(&self.site.programs_path, &self.programs)
    }

    /// Scrape the events page.
    pub fn scrape_events(&self) -> Result<Event> {
        self.scrape(&self.site.events_path, &self.events)
    }

    /// Leading encyclopedia paragraphs for `topic`. Never fails.
    pub fn scrape_wikipedia(&self, topic: &str) -> WikiExcerpt {
        self.wiki.scrape(topic)
    }

    /// `h2` headings of the base page.
    pub fn titles(&self) -> Result<Vec<String>> {
        self.page.extract_titles()
    }

    /// Content paragraphs of the base page.
    pub fn paragraphs(&self) -> Result<Vec<String>> {
        self.page.extract_paragraphs()
    }

    fn scrape<P: RecordParser>(&self, path: &str, parser: &P) -> Result<P::Record> {
        let url = join_path(self.base_url(), path);
        log::info!("Scraping {url}");
        let document = fetch_document(self.fetcher.as_ref(), &url)?;
        parser.parse(&document)
    }
}
