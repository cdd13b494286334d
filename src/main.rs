//! JMA 10-minute observation scraper
//!
//! Downloads historical 10-minute weather observations for a single station
//! from the Japan Meteorological Agency website and writes one CSV per month.
//!
//! # Pipeline
//!
//! For every day from the start date (2009-01-01 by default) through today:
//! build the query URL, wait a random 1-3 second courtesy delay, fetch the
//! page, and parse the `data2_s` table. Days are gathered per month and each
//! month with data is written to `YYYYMM.csv`.
//!
//! Failures are logged and skipped; the process always exits with status 0.

mod calendar;
mod config;
mod error;
mod jma;
mod model;
mod pipeline;
mod writer;

#[cfg(test)]
mod test_utils;

use chrono::Local;

use crate::error::Result;
use crate::pipeline::RunSummary;

/// Application entry point.
///
/// Runs on a single-threaded runtime: nothing here benefits from parallelism
/// and requests must stay serialized.
#[tokio::main(flavor = "current_thread")]
async fn main() {
    let app_config = config::load_app_config();
    let level = app_config
        .as_ref()
        .map(|c| c.log_level())
        .unwrap_or(tracing::Level::INFO);
    tracing_subscriber::fmt().with_max_level(level).init();

    if let Err(e) = app_config {
        tracing::warn!("Failed to load AppConfig, using defaults: {}", e);
    }

    if let Err(e) = scrape().await {
        tracing::error!("{:#}", anyhow::Error::from(e));
    }
}

async fn scrape() -> Result<RunSummary> {
    let scraper_config = config::load_scraper_config()?;
    let client = jma::Client::new(&scraper_config);
    let today = Local::now().date_naive();

    Ok(pipeline::run(&client, &scraper_config, today).await)
}
