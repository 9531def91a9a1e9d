// src/lib.rs

//! University site scraper library.
//!
//! Fetches pages with a blocking HTTP client and maps their markup into flat
//! records (articles, programs, events, encyclopedia excerpts).

pub mod error;
pub mod models;
pub mod parsers;
pub mod services;
pub mod utils;
