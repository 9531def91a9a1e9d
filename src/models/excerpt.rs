//! Encyclopedia excerpt record.

use serde::{Deserialize, Serialize};

/// Leading paragraphs of an encyclopedia article.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct WikiExcerpt {
    /// Topic as requested by the caller
    pub topic: String,

    /// Article URL that was requested
    pub url: String,

    /// Paragraph texts in document order
    pub paragraphs: Vec<String>,
}

impl WikiExcerpt {
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }
}
