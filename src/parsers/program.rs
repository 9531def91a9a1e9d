// src/parsers/program.rs

//! Academic program page parser.

use std::sync::LazyLock;

use chrono::Local;
use scraper::Selector;

use crate::error::Result;
use crate::models::Program;
use crate::parsers::RecordParser;
use crate::utils::html::{Document, static_selector};

static NAME: LazyLock<Selector> = LazyLock::new(|| static_selector("h1.program-title"));
static LEVEL: LazyLock<Selector> = LazyLock::new(|| static_selector("span.level"));
static CAMPUS: LazyLock<Selector> = LazyLock::new(|| static_selector("span.sede"));
static FACULTY: LazyLock<Selector> = LazyLock::new(|| static_selector("span.faculty"));
static SNIES: LazyLock<Selector> = LazyLock::new(|| static_selector("span.snies"));
static MODALITY: LazyLock<Selector> = LazyLock::new(|| static_selector("span.modalidad"));
static LINK: LazyLock<Selector> = LazyLock::new(|| static_selector("a.program-link"));

/// Parser for academic program pages.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProgramParser;

impl ProgramParser {
    pub fn new() -> Self {
        Self
    }
}

impl RecordParser for ProgramParser {
    type Record = Program;

    fn parse(&self, document: &Document) -> Result<Program> {
        Ok(Program {
            name: document.text_or_default(&NAME),
            level: document.text_or_default(&LEVEL),
            campus: document.text_or_default(&CAMPUS),
            faculty: document.text_or_default(&FACULTY),
            registration_code: document.text_or_default(&SNIES),
            modality: document.text_or_default(&MODALITY),
            url: document.first_href(&LINK).unwrap_or_default(),
            scraped_at: Local::now(),
        })
    }
}
