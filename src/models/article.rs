//! News article record.

use std::fmt;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// A news article scraped from a news page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Article {
    /// Headline (first `h1`)
    pub title: String,

    /// Lead paragraph (first `p`)
    pub lead: String,

    pub author: String,

    /// Section or category the article was filed under
    pub section: String,

    /// Tag labels in document order
    pub tags: Vec<String>,

    /// URL the article was fetched from (empty if unknown)
    pub url: String,

    /// Body text, all paragraphs joined by a space
    pub text: String,

    /// Publication timestamp
    pub published: DateTime<Local>,

    /// When the page was scraped
    pub scraped_at: DateTime<Local>,
}

impl fmt::Display for Article {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} ({})", self.title, self.author, self.section)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        let now = Local::now();
        let article = Article {
            title: "Nueva sede".to_string(),
            lead: String::new(),
            author: "Unknown".to_string(),
            section: "General".to_string(),
            tags: vec![],
            url: String::new(),
            text: String::new(),
            published: now,
            scraped_at: now,
        };
        assert_eq!(article.to_string(), "Nueva sede - Unknown (General)");
    }
}
