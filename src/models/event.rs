//! Event record.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// An event scraped from an events page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Event {
    pub title: String,
    pub date_start: NaiveDate,
    pub date_end: NaiveDate,
    pub location: String,
    pub organizer: String,
    pub registration_url: String,
    pub description: String,

    /// When the page was scraped
    pub scraped_at: DateTime<Local>,
}
