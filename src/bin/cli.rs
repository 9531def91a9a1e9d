//! Campus scraper CLI
//!
//! Without a subcommand, runs the demonstration: headings and the first five
//! paragraphs of the configured demo page.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use campus_scraper::{
    error::Result,
    models::Config,
    services::{UniversityScraper, WebScraper},
    utils::http::{Fetch, HttpFetcher},
};
use clap::{Parser, Subcommand};
use serde::Serialize;

/// Number of paragraphs printed by the demonstration.
const DEMO_PARAGRAPHS: usize = 5;

/// Campus scraper - university news, programs and events
#[derive(Parser, Debug)]
#[command(
    name = "campus-scraper",
    version,
    about = "Scrapes university news, program and event pages"
)]
struct Cli {
    /// Path to the configuration file
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Override the site base URL
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print headings and the first paragraphs of a page
    Demo {
        /// Page to scrape (default: site.demo_url)
        #[arg(long)]
        url: Option<String>,
    },

    /// Scrape the news page
    News,

    /// Scrape the academic programs page
    Programs,

    /// Scrape the events page
    Events,

    /// Fetch the leading encyclopedia paragraphs for a topic
    Wiki {
        /// Topic, e.g. "Universidad Nacional de Colombia"
        topic: String,
    },

    /// Validate configuration
    Validate,
}

/// Initialize logging based on verbosity flag.
fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp_secs()
        .init();
}

/// Print a record as pretty JSON on stdout.
fn print_json<T: Serialize>(record: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(record)?);
    Ok(())
}

/// Headings and the first paragraphs of `url`.
fn run_demo(url: String, config: &Config, fetcher: Arc<dyn Fetch>) -> Result<()> {
    let scraper = WebScraper::new(url, fetcher).with_content_class(config.site.content_class.clone());
    let titles = scraper.extract_titles()?;
    let paragraphs = scraper.extract_paragraphs()?;

    println!("=== TÍTULOS ===");
    for title in &titles {
        println!("- {title}");
    }

    println!("\n=== PÁRRAFOS (primeros {DEMO_PARAGRAPHS}) ===");
    for paragraph in paragraphs.iter().take(DEMO_PARAGRAPHS) {
        println!("{paragraph} \n");
    }

    Ok(())
}

/// Load the configuration, apply the base URL override and validate the result.
///
/// With `strict`, a missing or malformed file is an error instead of falling
/// back to defaults.
fn load_config(path: &Path, base_url: Option<String>, strict: bool) -> Result<Config> {
    let mut config = if strict {
        Config::load_checked(path)?
    } else {
        Config::load_or_default(path)
    };
    if let Some(base_url) = base_url {
        config.site.base_url = base_url;
    }
    config.validate()?;
    Ok(config)
}

/// Main entry point for the CLI application.
fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let validating = matches!(cli.command, Some(Command::Validate));
    if validating {
        log::info!("Validating configuration...");
    }
    let config = load_config(&cli.config, cli.base_url, validating)
        .inspect_err(|e| log::error!("Config validation failed: {}", e))?;
    log::debug!("Using base URL {}", config.site.base_url);

    let fetcher: Arc<dyn Fetch> = Arc::new(HttpFetcher::new(&config.http)?);
    let site = || UniversityScraper::from_config(&config, Arc::clone(&fetcher));

    match cli.command {
        None => run_demo(config.site.demo_url.clone(), &config, Arc::clone(&fetcher))?,
        Some(Command::Demo { url }) => {
            let url = url.unwrap_or_else(|| config.site.demo_url.clone());
            run_demo(url, &config, Arc::clone(&fetcher))?
        }
        Some(Command::News) => print_json(&site().scrape_news()?)?,
        Some(Command::Programs) => print_json(&site().scrape_programs()?)?,
        Some(Command::Events) => print_json(&site().scrape_events()?)?,
        Some(Command::Wiki { topic }) => print_json(&site().scrape_wikipedia(&topic))?,
        Some(Command::Validate) => log::info!("Config OK"),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use campus_scraper::error::AppError;

    use super::*;

    fn config_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{contents}").unwrap();
        file
    }

    #[test]
    fn test_validate_rejects_malformed_file() {
        let file = config_file("[dates]\non_invalid = \"strikt\"\n");
        assert!(matches!(
            load_config(file.path(), None, true),
            Err(AppError::Config(_))
        ));
    }

    #[test]
    fn test_scrape_commands_fall_back_on_malformed_file() {
        let file = config_file("[site\n");
        let config = load_config(file.path(), None, false).unwrap();
        assert_eq!(config.site.base_url, "https://unal.edu.co");
    }

    #[test]
    fn test_base_url_override_is_validated() {
        let file = config_file("[wiki]\nmax_paragraphs = 2\n");
        for strict in [true, false] {
            assert!(matches!(
                load_config(file.path(), Some("unal.edu.co".into()), strict),
                Err(AppError::Validation(_))
            ));
        }
        let config = load_config(file.path(), Some("https://sede.unal.edu.co".into()), true).unwrap();
        assert_eq!(config.site.base_url, "https://sede.unal.edu.co");
    }
}
