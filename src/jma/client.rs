use async_trait::async_trait;
use chrono::NaiveDate;
use rand::Rng;
use reqwest::{Client as HttpClient, StatusCode};
use std::time::Duration;
use tokio::time::sleep;

use crate::config::ScraperConfig;
use crate::error::{FetchError, ParseError};
use crate::jma::parser::parse_day_table;
use crate::jma::query::DayQuery;
use crate::model::{DailyResult, DayFetcher, Station, Unavailable};

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Bounds of the pause taken before every request, in seconds.
pub const COURTESY_DELAY_SECS: (f64, f64) = (1.0, 3.0);

/// Draws a fresh uniform delay in `[1s, 3s]`.
pub fn courtesy_delay() -> Duration {
    let (min, max) = COURTESY_DELAY_SECS;
    Duration::from_secs_f64(rand::rng().random_range(min..=max))
}

pub struct Client {
    http_client: HttpClient,
    base_url: String,
    station: Station,
}

impl Client {
    pub fn new(config: &ScraperConfig) -> Self {
        let http_client = HttpClient::new();
        Self {
            http_client,
            base_url: config.base_url.clone(),
            station: config.station(),
        }
    }

    pub fn day_url(&self, date: NaiveDate) -> String {
        DayQuery::new(&self.station, date).url(&self.base_url)
    }

    /// Issues exactly one GET. Only a 200 counts as success.
    pub async fn get(&self, url: &str) -> Result<String, FetchError> {
        let response = self
            .http_client
            .get(url)
            .header("user-agent", USER_AGENT)
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::status(status));
        }
        Ok(response.text().await?)
    }

    /// Fetches the observation page for `date` after the courtesy delay.
    pub async fn fetch_day_page(&self, date: NaiveDate) -> Result<String, FetchError> {
        let url = self.day_url(date);
        tracing::info!("Request URL: {}", url);

        sleep(courtesy_delay()).await;

        self.get(&url).await
    }
}

#[async_trait]
impl DayFetcher for Client {
    async fn fetch_day(&self, date: NaiveDate) -> DailyResult {
        let html = match self.fetch_day_page(date).await {
            Ok(html) => html,
            Err(FetchError::Status { status }) => {
                tracing::warn!("{}: failed to fetch data, status code {}", date, status);
                return DailyResult::Unavailable(Unavailable::Status(status));
            }
            Err(e) => {
                tracing::error!("{}: failed to fetch data: {}", date, e);
                return DailyResult::Unavailable(Unavailable::Request(e.to_string()));
            }
        };

        match parse_day_table(&html, date) {
            Ok(records) => DailyResult::from_records(records),
            Err(ParseError::ElementNotFound { selector }) => {
                tracing::warn!("{}: data table '{}' not found", date, selector);
                DailyResult::Unavailable(Unavailable::MissingTable)
            }
            Err(e) => {
                tracing::error!("{}: failed to parse page: {}", date, e);
                DailyResult::Unavailable(Unavailable::Parse(e.to_string()))
            }
        }
    }
}
