//! Data model shared across the scraping pipeline.
//!
//! All observation values are kept as the text scraped from the JMA page;
//! nothing here interprets numbers or units.

use async_trait::async_trait;
use chrono::{Datelike, NaiveDate};
use std::fmt;

/// Number of fields in a normalized observation row, date included.
pub const OBSERVATION_FIELDS: usize = 12;

/// CSV header, in the order fields appear in [`Observation`].
pub const CSV_HEADER: [&str; OBSERVATION_FIELDS] = [
    "日付",
    "時間",
    "気圧(現地)",
    "気圧(海面)",
    "降水量(mm)",
    "気温",
    "相対湿度",
    "風向・風速(平均)",
    "風向・風速(風向-平均)",
    "風向・風速(最大瞬間)",
    "風向・風速(風向-最大瞬間)",
    "日照時間",
];

/// Observation point identified by the prefecture and block codes JMA uses
/// in its query strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub prec_no: String,
    pub block_no: String,
}

impl Station {
    pub fn new(prec_no: &str, block_no: &str) -> Self {
        Self {
            prec_no: prec_no.to_string(),
            block_no: block_no.to_string(),
        }
    }
}

/// Formats a date the way it is stored in the first CSV column.
pub fn date_key(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

/// One 10-minute observation row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Observation {
    fields: [String; OBSERVATION_FIELDS],
}

impl Observation {
    /// Builds a record from the scraped cells of a table row.
    ///
    /// The date key becomes field 0 and the cells follow. Anything past the
    /// twelfth field is dropped; missing trailing fields are left empty.
    pub fn from_cells(date: NaiveDate, cells: Vec<String>) -> Self {
        let mut fields: [String; OBSERVATION_FIELDS] = Default::default();
        fields[0] = date_key(date);
        for (slot, cell) in fields[1..].iter_mut().zip(cells) {
            *slot = cell;
        }
        Self { fields }
    }

    pub fn date(&self) -> &str {
        &self.fields[0]
    }

    pub fn fields(&self) -> &[String; OBSERVATION_FIELDS] {
        &self.fields
    }
}

/// Why a day contributed nothing to its month.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Unavailable {
    Status(u16),
    Request(String),
    MissingTable,
    EmptyTable,
    Parse(String),
}

impl fmt::Display for Unavailable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Unavailable::Status(status) => write!(f, "status code {}", status),
            Unavailable::Request(message) => write!(f, "request failed: {}", message),
            Unavailable::MissingTable => write!(f, "data table not found"),
            Unavailable::EmptyTable => write!(f, "data table has no rows"),
            Unavailable::Parse(message) => write!(f, "failed to parse page: {}", message),
        }
    }
}

/// Outcome of scraping a single calendar day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DailyResult {
    /// At least one record was scraped.
    Observed(Vec<Observation>),
    Unavailable(Unavailable),
}

impl DailyResult {
    /// Wraps parsed records, treating an empty table as unavailable.
    pub fn from_records(records: Vec<Observation>) -> Self {
        if records.is_empty() {
            DailyResult::Unavailable(Unavailable::EmptyTable)
        } else {
            DailyResult::Observed(records)
        }
    }
}

/// Source of per-day observations.
///
/// Implementors must never fail outright: every problem is folded into
/// [`DailyResult::Unavailable`] so that one bad day cannot stop a run.
#[async_trait]
pub trait DayFetcher: Send + Sync {
    async fn fetch_day(&self, date: NaiveDate) -> DailyResult;
}

/// Records for one calendar month, in day order.
#[derive(Debug)]
pub struct MonthlyBatch {
    year: i32,
    month: u32,
    records: Vec<Observation>,
}

impl MonthlyBatch {
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month,
            records: Vec::new(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Appends a day's records. Returns `true` if the day contributed any.
    pub fn push_day(&mut self, date: NaiveDate, result: DailyResult) -> bool {
        debug_assert_eq!((date.year(), date.month()), (self.year, self.month));
        match result {
            DailyResult::Observed(mut records) => {
                tracing::debug!("{}: {} records", date, records.len());
                self.records.append(&mut records);
                true
            }
            DailyResult::Unavailable(reason) => {
                tracing::warn!("{}: no data available ({})", date, reason);
                false
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn records(&self) -> &[Observation] {
        &self.records
    }

    /// `YYYYMM.csv`
    pub fn file_name(&self) -> String {
        format!("{:04}{:02}.csv", self.year, self.month)
    }
}
