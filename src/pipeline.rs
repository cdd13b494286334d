//! Drives the scrape: one day at a time, one month at a time.
//!
//! Requests are awaited one after another, never concurrently; the JMA
//! site is a shared public resource and the courtesy delay only works if
//! requests stay serialized.

use chrono::NaiveDate;
use std::path::Path;

use crate::calendar::{DateRange, MonthSpan};
use crate::config::ScraperConfig;
use crate::model::{DayFetcher, MonthlyBatch};
use crate::writer::write_month;

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub days_requested: usize,
    pub days_observed: usize,
    pub months_written: usize,
    pub months_skipped: usize,
    pub write_failures: usize,
}

/// Scrapes every day from the configured start date through `today` and
/// writes one CSV per month that produced data.
pub async fn run(fetcher: &dyn DayFetcher, config: &ScraperConfig, today: NaiveDate) -> RunSummary {
    let range = DateRange::new(config.start_date, today);
    tracing::info!("Collecting {} through {}", range.start(), range.end());

    let mut summary = RunSummary::default();
    for span in range.months() {
        process_month(fetcher, &span, &config.output_dir, &mut summary).await;
    }

    tracing::info!(
        "Finished: {} days requested, {} with data, {} files written, {} months skipped, {} write failures",
        summary.days_requested,
        summary.days_observed,
        summary.months_written,
        summary.months_skipped,
        summary.write_failures
    );
    summary
}

async fn process_month(
    fetcher: &dyn DayFetcher,
    span: &MonthSpan,
    output_dir: &Path,
    summary: &mut RunSummary,
) {
    let mut batch = MonthlyBatch::new(span.year, span.month);

    for date in span.days() {
        tracing::info!("Fetching data for {}...", date);
        let result = fetcher.fetch_day(date).await;
        summary.days_requested += 1;
        if batch.push_day(date, result) {
            summary.days_observed += 1;
        }
    }

    match write_month(&batch, output_dir) {
        Ok(Some(path)) => {
            summary.months_written += 1;
            tracing::info!("Saved {} rows to {}", batch.len(), path.display());
        }
        Ok(None) => {
            summary.months_skipped += 1;
            tracing::warn!(
                "{:04}-{:02}: no data could be retrieved, skipping",
                batch.year(),
                batch.month()
            );
        }
        Err(e) => {
            summary.write_failures += 1;
            tracing::error!("Failed to write {}: {}", batch.file_name(), e);
        }
    }
}
