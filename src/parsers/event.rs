// src/parsers/event.rs

//! Event page parser.

use std::sync::LazyLock;

use chrono::{Local, NaiveDate};
use scraper::Selector;

use crate::error::{AppError, Result};
use crate::models::{DateFallback, Event};
use crate::parsers::RecordParser;
use crate::utils::html::{Document, static_selector};

static TITLE: LazyLock<Selector> = LazyLock::new(|| static_selector("h1.event-title"));
static DATE_START: LazyLock<Selector> = LazyLock::new(|| static_selector("span.date-start"));
static DATE_END: LazyLock<Selector> = LazyLock::new(|| static_selector("span.date-end"));
static LOCATION: LazyLock<Selector> = LazyLock::new(|| static_selector("span.location"));
static ORGANIZER: LazyLock<Selector> = LazyLock::new(|| static_selector("span.organizer"));
static REGISTRATION: LazyLock<Selector> = LazyLock::new(|| static_selector("a.registration"));
static DESCRIPTION: LazyLock<Selector> = LazyLock::new(|| static_selector("div.description"));

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parser for event pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventParser {
    on_invalid: DateFallback,
}

impl EventParser {
    /// Create a parser with the given policy for non-ISO dates.
    pub fn new(on_invalid: DateFallback) -> Self {
        Self { on_invalid }
    }

    /// Parse a `YYYY-MM-DD` date, applying the fallback policy on mismatch.
    ///
    /// A missing element always yields `today`.
    fn parse_date(&self, field: &str, raw: Option<String>, today: NaiveDate) -> Result<NaiveDate> {
        let Some(raw) = raw else {
            return Ok(today);
        };

        match NaiveDate::parse_from_str(&raw, DATE_FORMAT) {
            Ok(date) => Ok(date),
            Err(_) => match self.on_invalid {
                DateFallback::Today => {
                    log::warn!("Unrecognized {field} '{raw}', using today's date ({today})");
                    Ok(today)
                }
                DateFallback::Strict => Err(AppError::date_format(field, raw)),
            },
        }
    }
}

impl RecordParser for EventParser {
    type Record = Event;

    fn parse(&self, document: &Document) -> Result<Event> {
        let now = Local::now();
        let today = now.date_naive();

        Ok(Event {
            title: document.text_or_default(&TITLE),
            date_start: self.parse_date("date_start", document.first_text(&DATE_START), today)?,
            date_end: self.parse_date("date_end", document.first_text(&DATE_END), today)?,
            location: document.text_or_default(&LOCATION),
            organizer: document.text_or_default(&ORGANIZER),
            registration_url: document.first_href(&REGISTRATION).unwrap_or_default(),
            description: document.text_or_default(&DESCRIPTION),
            scraped_at: now,
        })
    }
}
