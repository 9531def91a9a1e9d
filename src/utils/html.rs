// src/utils/html.rs

//! Parsed HTML document with tag/class lookups.

use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::error::{AppError, Result};
use crate::utils::resolve_url;

/// A parsed page, optionally tagged with the URL it came from.
pub struct Document {
    html: Html,
    url: Option<Url>,
}

impl Document {
    /// Parse raw markup.
    ///
    /// Blank markup means nothing was fetched, which is reported as a parse
    /// error rather than an empty tree.
    pub fn parse(markup: &str) -> Result<Self> {
        if markup.trim().is_empty() {
            return Err(AppError::parse("no markup has been fetched yet"));
        }
        Ok(Self {
            html: Html::parse_document(markup),
            url: None,
        })
    }

    /// Parse raw markup fetched from `url`.
    pub fn with_url(markup: &str, url: &str) -> Result<Self> {
        let mut document = Self::parse(markup)?;
        document.url = Url::parse(url).ok();
        Ok(document)
    }

    /// URL the markup was fetched from, if known.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// First element matching `tag`, optionally restricted to a class.
    pub fn find_first(&self, tag: &str, class: Option<&str>) -> Result<Option<ElementRef<'_>>> {
        let selector = query(tag, class)?;
        Ok(self.select_first(&selector))
    }

    /// All elements matching `tag`, optionally restricted to a class.
    pub fn find_all(&self, tag: &str, class: Option<&str>) -> Result<Vec<ElementRef<'_>>> {
        let selector = query(tag, class)?;
        Ok(self.select_all(&selector))
    }

    pub fn select_first(&self, selector: &Selector) -> Option<ElementRef<'_>> {
        self.html.select(selector).next()
    }

    pub fn select_all(&self, selector: &Selector) -> Vec<ElementRef<'_>> {
        self.html.select(selector).collect()
    }

    /// Cleaned text of the first match.
    pub fn first_text(&self, selector: &Selector) -> Option<String> {
        self.select_first(selector).map(element_text)
    }

    /// Cleaned text of the first match, or an empty string.
    pub fn text_or_default(&self, selector: &Selector) -> String {
        self.first_text(selector).unwrap_or_default()
    }

    /// Cleaned text of every match, in document order.
    pub fn all_texts(&self, selector: &Selector) -> Vec<String> {
        self.html.select(selector).map(element_text).collect()
    }

    /// `href` of the first match, resolved against the document URL.
    pub fn first_href(&self, selector: &Selector) -> Option<String> {
        self.select_first(selector)
            .and_then(|el| el.value().attr("href"))
            .map(|href| self.resolve(href.trim()))
    }

    /// Resolve a link against the document URL; unchanged when the URL is unknown.
    pub fn resolve(&self, href: &str) -> String {
        match &self.url {
            Some(base) => resolve_url(base, href),
            None => href.to_string(),
        }
    }
}

/// Text content of an element with whitespace runs collapsed and ends trimmed.
pub fn element_text(element: ElementRef<'_>) -> String {
    let raw: String = element.text().collect();
    raw.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Cleaned texts of every descendant of `element` matching `selector`.
pub fn texts_within(element: ElementRef<'_>, selector: &Selector) -> Vec<String> {
    element.select(selector).map(element_text).collect()
}

/// Build a selector from a tag name and an optional (possibly multi-word) class.
pub fn query(tag: &str, class: Option<&str>) -> Result<Selector> {
    let mut css = tag.trim().to_string();
    if let Some(class) = class {
        for part in class.split_whitespace() {
            css.push('.');
            css.push_str(part);
        }
    }
    parse_selector(&css)
}

/// Parse a CSS selector, mapping failures into [`AppError::Selector`].
pub fn parse_selector(css: &str) -> Result<Selector> {
    if css.is_empty() {
        return Err(AppError::selector(css, "empty selector"));
    }
    Selector::parse(css).map_err(|e| AppError::selector(css, format!("{e:?}")))
}

/// Selector for a built-in, known-valid CSS literal.
pub(crate) fn static_selector(css: &str) -> Selector {
    Selector::parse(css).unwrap_or_else(|e| panic!("invalid built-in selector '{css}': {e:?}"))
}
