pub mod config;
pub mod extractor;
pub mod fetcher;
pub mod logger;
pub mod models;
pub mod pacer;
pub mod recorder;

use std::path::Path;

use rand::Rng;
use tracing::error;

use crate::config::Config;
use crate::models::ProductRecord;

#[derive(Debug)]
pub enum RunOutcome {
    Scraped(ProductRecord),
    FetchFailed,
    ExtractFailed,
}

/// One full run: fetch, extract, record, then pace regardless of how the
/// earlier stages went. Every anticipated failure is logged here and folded
/// into the outcome; nothing escapes to the caller.
pub fn run(config: &Config, rng: &mut impl Rng) -> RunOutcome {
    let outcome = scrape(config, rng);
    pacer::rate_limit(config.min_delay_secs, config.max_delay_secs, rng);
    outcome
}

fn scrape(config: &Config, rng: &mut impl Rng) -> RunOutcome {
    let page = match fetcher::fetch_page(&config.url, rng) {
        Ok(page) => page,
        Err(err) => {
            error!("error fetching the page: {err}");
            return RunOutcome::FetchFailed;
        }
    };

    let record = match extractor::extract_product_details(&page) {
        Ok(record) => record,
        Err(err) => {
            error!("error extracting product details: {err}");
            return RunOutcome::ExtractFailed;
        }
    };

    // A failed write still counts as a completed scrape.
    if let Err(err) = recorder::append_record(&record, Path::new(&config.output_path)) {
        error!("error saving product details to file: {err}");
    }

    RunOutcome::Scraped(record)
}
