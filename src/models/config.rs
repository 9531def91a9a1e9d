//! Application configuration structures.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP client settings
    #[serde(default)]
    pub http: HttpConfig,

    /// Target site and page paths
    #[serde(default)]
    pub site: SiteConfig,

    /// Encyclopedia lookup settings
    #[serde(default)]
    pub wiki: WikiConfig,

    /// Date parsing behavior
    #[serde(default)]
    pub dates: DateConfig,

    /// Fallback labels for missing text fields
    #[serde(default)]
    pub labels: Labels,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Load configuration or return default if loading fails.
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        Self::load(&path).unwrap_or_else(|e| {
            log::warn!(
                "Config load failed from {:?}: {}. Using defaults.",
                path.as_ref(),
                e
            );
            Self::default()
        })
    }

    /// Load configuration and validate it, reporting any failure.
    pub fn load_checked(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let config = Self::load(path).map_err(|e| {
            AppError::config(format!("failed to load {}: {e}", path.display()))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration values for basic sanity.
    pub fn validate(&self) -> Result<()> {
        if self.http.user_agent.trim().is_empty() {
            return Err(AppError::validation("http.user_agent is empty"));
        }
        if self.http.timeout_secs == Some(0) {
            return Err(AppError::validation("http.timeout_secs must be > 0"));
        }
        for (key, value) in [
            ("site.base_url", &self.site.base_url),
            ("site.demo_url", &self.site.demo_url),
            ("wiki.base_url", &self.wiki.base_url),
        ] {
            if !value.starts_with("http") {
                return Err(AppError::validation(format!(
                    "{key} must be an http(s) URL, got '{value}'"
                )));
            }
        }
        if self.wiki.max_paragraphs == 0 {
            return Err(AppError::validation("wiki.max_paragraphs must be > 0"));
        }
        if self.site.content_class.trim().is_empty() {
            return Err(AppError::validation("site.content_class is empty"));
        }
        Ok(())
    }
}

/// HTTP client settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// User-Agent header for HTTP requests
    #[serde(default = "defaults::user_agent")]
    pub user_agent: String,

    /// Request timeout in seconds (client default when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: defaults::user_agent(),
            timeout_secs: None,
        }
    }
}

/// Target site and the path suffix of each page category.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Base URL that category paths are appended to
    #[serde(default = "defaults::base_url")]
    pub base_url: String,

    /// Page scraped by the demonstration command
    #[serde(default = "defaults::demo_url")]
    pub demo_url: String,

    #[serde(default = "defaults::news_path")]
    pub news_path: String,

    #[serde(default = "defaults::programs_path")]
    pub programs_path: String,

    #[serde(default = "defaults::events_path")]
    pub events_path: String,

    /// Class of the `div` wrapping article paragraphs
    #[serde(default = "defaults::content_class")]
    pub content_class: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::base_url(),
            demo_url: defaults::demo_url(),
            news_path: defaults::news_path(),
            programs_path: defaults::programs_path(),
            events_path: defaults::events_path(),
            content_class: defaults::content_class(),
        }
    }
}

/// Encyclopedia lookup settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WikiConfig {
    /// Article URL prefix; the topic slug is appended
    #[serde(default = "defaults::wiki_base_url")]
    pub base_url: String,

    /// Number of leading paragraphs kept
    #[serde(default = "defaults::max_paragraphs")]
    pub max_paragraphs: usize,
}

impl Default for WikiConfig {
    fn default() -> Self {
        Self {
            base_url: defaults::wiki_base_url(),
            max_paragraphs: defaults::max_paragraphs(),
        }
    }
}

/// Date parsing behavior.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DateConfig {
    #[serde(default)]
    pub on_invalid: DateFallback,
}

/// What to do with a date that is not `YYYY-MM-DD`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DateFallback {
    /// Substitute today's date and log a warning
    #[default]
    Today,
    /// Reject the record
    Strict,
}

/// Fallback labels for missing text fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Labels {
    #[serde(default = "defaults::untitled")]
    pub untitled: String,

    #[serde(default = "defaults::unknown_author")]
    pub unknown_author: String,

    #[serde(default = "defaults::general_section")]
    pub general_section: String,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            untitled: defaults::untitled(),
            unknown_author: defaults::unknown_author(),
            general_section: defaults::general_section(),
        }
    }
}

mod defaults {
    // HTTP defaults
    pub fn user_agent() -> String {
        concat!("campus-scraper/", env!("CARGO_PKG_VERSION")).into()
    }

    // Site defaults
    pub fn base_url() -> String {
        "https://unal.edu.co".into()
    }
    pub fn demo_url() -> String {
        "https://tambinsoyunal.fandom.com/es/wiki/Universidad_Nacional_de_Colombia".into()
    }
    pub fn news_path() -> String {
        "/noticias".into()
    }
    pub fn programs_path() -> String {
        "/programas".into()
    }
    pub fn events_path() -> String {
        "/eventos".into()
    }
    pub fn content_class() -> String {
        "mw-parser-output".into()
    }

    // Wiki defaults
    pub fn wiki_base_url() -> String {
        "https://es.wikipedia.org/wiki/".into()
    }
    pub fn max_paragraphs() -> usize {
        3
    }

    // Label defaults
    pub fn untitled() -> String {
        "Untitled".into()
    }
    pub fn unknown_author() -> String {
        "Unknown".into()
    }
    pub fn general_section() -> String {
        "General".into()
    }
}
