//! Mock implementations and server helpers for testing.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use mockito::{Matcher, Mock, ServerGuard};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::model::{DailyResult, DayFetcher, Unavailable};

/// Registers a mock for the `10min_s1.php` page of a single day.
pub async fn mock_day_page(
    server: &mut ServerGuard,
    date: NaiveDate,
    status: usize,
    body: &str,
) -> Mock {
    server
        .mock("GET", Matcher::Regex(r"^/10min_s1\.php".to_string()))
        .match_query(Matcher::AllOf(vec![
            Matcher::UrlEncoded("prec_no".into(), "44".into()),
            Matcher::UrlEncoded("block_no".into(), "47662".into()),
            Matcher::UrlEncoded("year".into(), date.year().to_string()),
            Matcher::UrlEncoded("month".into(), format!("{:02}", date.month())),
            Matcher::UrlEncoded("day".into(), format!("{:02}", date.day())),
        ]))
        .with_status(status)
        .with_body(body)
        .expect(1)
        .create_async()
        .await
}

/// A fetcher that replays scripted results and records every request.
///
/// Days without a script are reported as a 404.
#[derive(Default)]
pub struct ScriptedFetcher {
    script: HashMap<NaiveDate, DailyResult>,
    requested: Mutex<Vec<NaiveDate>>,
}

impl ScriptedFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_day(mut self, date: NaiveDate, result: DailyResult) -> Self {
        self.script.insert(date, result);
        self
    }

    /// Dates requested so far, in call order.
    pub fn requested(&self) -> Vec<NaiveDate> {
        self.requested.lock().unwrap().clone()
    }
}

#[async_trait]
impl DayFetcher for ScriptedFetcher {
    async fn fetch_day(&self, date: NaiveDate) -> DailyResult {
        self.requested.lock().unwrap().push(date);
        self.script
            .get(&date)
            .cloned()
            .unwrap_or(DailyResult::Unavailable(Unavailable::Status(404)))
    }
}
