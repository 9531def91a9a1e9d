// src/parsers/mod.rs

//! Record parsers.
//!
//! Each parser maps one page layout to a flat record through fixed tag/class
//! lookups. A lookup that misses yields the field's default, so parsing a
//! page never fails because of absent markup:
//!
//! | Parser | Record | Lookups |
//! |--------|--------|---------|
//! | [`NewsParser`] | [`Article`](crate::models::Article) | `h1`, `p`, `.author`, `.section`, `time`, `a.tag` |
//! | [`ProgramParser`] | [`Program`](crate::models::Program) | `h1.program-title`, `span.{level,sede,faculty,snies,modalidad}`, `a.program-link` |
//! | [`EventParser`] | [`Event`](crate::models::Event) | `h1.event-title`, `span.{date-start,date-end,location,organizer}`, `a.registration`, `div.description` |

mod event;
mod news;
mod program;

pub use event::EventParser;
pub use news::NewsParser;
pub use program::ProgramParser;

use crate::error::Result;
use crate::utils::html::Document;

/// Maps a parsed page to a record.
pub trait RecordParser {
    type Record;

    /// Extract a record from an already parsed document.
    fn parse(&self, document: &Document) -> Result<Self::Record>;

    /// Parse raw markup and extract a record from it.
    fn parse_markup(&self, markup: &str) -> Result<Self::Record> {
        self.parse(&Document::parse(markup)?)
    }
}
