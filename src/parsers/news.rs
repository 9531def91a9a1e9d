// src/parsers/news.rs

//! News page parser.

use std::sync::LazyLock;

use chrono::{DateTime, Local};
use scraper::Selector;

use crate::error::Result;
use crate::models::{Article, Labels};
use crate::parsers::RecordParser;
use crate::utils::html::{Document, static_selector};

static HEADLINE: LazyLock<Selector> = LazyLock::new(|| static_selector("h1"));
static PARAGRAPH: LazyLock<Selector> = LazyLock::new(|| static_selector("p"));
static AUTHOR: LazyLock<Selector> = LazyLock::new(|| static_selector(".author"));
static SECTION: LazyLock<Selector> = LazyLock::new(|| static_selector(".section"));
static PUBLISHED: LazyLock<Selector> = LazyLock::new(|| static_selector("time[datetime]"));
static TAG: LazyLock<Selector> = LazyLock::new(|| static_selector("a.tag"));

/// Parser for news article pages.
#[derive(Debug, Clone, Default)]
pub struct NewsParser {
    labels: Labels,
}

impl NewsParser {
    /// Create a parser using the given fallback labels.
    pub fn new(labels: Labels) -> Self {
        Self { labels }
    }

    /// Publication time from a `<time datetime="...">` in RFC 3339 form.
    fn published(document: &Document) -> Option<DateTime<Local>> {
        let raw = document
            .select_first(&PUBLISHED)?
            .value()
            .attr("datetime")?;
        DateTime::parse_from_rfc3339(raw.trim())
            .map(|dt| dt.with_timezone(&Local))
            .map_err(|e| log::debug!("Ignoring publication time '{raw}': {e}"))
            .ok()
    }
}

impl RecordParser for NewsParser {
    type Record = Article;

    fn parse(&self, document: &Document) -> Result<Article> {
        let now = Local::now();
        let paragraphs = document.all_texts(&PARAGRAPH);

        let text = paragraphs
            .iter()
            .filter(|p| !p.is_empty())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Article {
            title: document
                .first_text(&HEADLINE)
                .unwrap_or_else(|| self.labels.untitled.clone()),
            lead: paragraphs.into_iter().next().unwrap_or_default(),
            author: document
                .first_text(&AUTHOR)
                .unwrap_or_else(|| self.labels.unknown_author.clone()),
            section: document
                .first_text(&SECTION)
                .unwrap_or_else(|| self.labels.general_section.clone()),
            tags: document.all_texts(&TAG),
            url: document.url().map(|u| u.to_string()).unwrap_or_default(),
            text,
            published: Self::published(document).unwrap_or(now),
            scraped_at: now,
        })
    }
}
