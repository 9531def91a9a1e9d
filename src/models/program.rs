//! Academic program record.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// An academic program scraped from a program page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Program {
    pub name: String,

    /// Degree level (e.g. "Pregrado", "Maestría")
    pub level: String,

    /// Campus ("sede") offering the program
    pub campus: String,

    pub faculty: String,

    /// SNIES registration code
    pub registration_code: String,

    /// Delivery modality (e.g. "Presencial")
    pub modality: String,

    /// Program page link
    pub url: String,

    /// When the page was scraped
    pub scraped_at: DateTime<Local>,
}
