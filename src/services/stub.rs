//! Canned-response fetcher for tests.

use std::collections::HashMap;
use std::sync::Mutex;

use crate::error::{AppError, Result};
use crate::utils::http::Fetch;

/// Serves markup from memory and records every requested URL.
#[derive(Default)]
pub struct StubFetcher {
    pages: HashMap<String, String>,
    requests: Mutex<Vec<String>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn page(mut self, url: &str, markup: &str) -> Self {
        self.pages.insert(url.to_string(), markup.to_string());
        self
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Fetch for StubFetcher {
    fn fetch(&self, url: &str) -> Result<String> {
        self.requests.lock().unwrap().push(url.to_string());
        self.pages
            .get(url)
            .cloned()
            .ok_or_else(|| AppError::fetch(url, 404))
    }
}
