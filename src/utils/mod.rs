//! Utility functions and helpers.

pub mod html;
pub mod http;

use url::Url;

/// Resolve a potentially relative URL against a base URL.
pub fn resolve_url(base: &Url, href: &str) -> String {
    base.join(href)
        .map(|u| u.to_string())
        .unwrap_or_else(|_| href.to_string())
}

/// Append a path suffix to a base URL without doubling the slash.
pub fn join_path(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.is_empty() {
        return base.to_string();
    }
    if path.starts_with('/') {
        format!("{base}{path}")
    } else {
        format!("{base}/{path}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_url() {
        let base = Url::parse("https://example.com/path/").unwrap();
        assert_eq!(
            resolve_url(&base, "page.html"),
            "https://example.com/path/page.html"
        );
        assert_eq!(
            resolve_url(&base, "/root.html"),
            "https://example.com/root.html"
        );
        assert_eq!(
            resolve_url(&base, "https://other.com/x"),
            "https://other.com/x"
        );
    }

    #[test]
    fn test_join_path() {
        assert_eq!(
            join_path("https://unal.edu.co", "/noticias"),
            "https://unal.edu.co/noticias"
        );
        assert_eq!(
            join_path("https://unal.edu.co/", "/eventos"),
            "https://unal.edu.co/eventos"
        );
        assert_eq!(
            join_path("https://unal.edu.co", "programas"),
            "https://unal.edu.co/programas"
        );
        assert_eq!(join_path("https://unal.edu.co/", ""), "https://unal.edu.co");
    }
}
