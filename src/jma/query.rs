//! Query URL construction for the JMA 10-minute observation page.

use chrono::{Datelike, NaiveDate};

use crate::model::Station;

/// Query for one day of 10-minute observations at one station.
#[derive(Debug, Clone)]
pub struct DayQuery<'a> {
    pub station: &'a Station,
    pub date: NaiveDate,
}

impl<'a> DayQuery<'a> {
    pub fn new(station: &'a Station, date: NaiveDate) -> Self {
        Self { station, date }
    }

    /// Builds the full request URL.
    ///
    /// # Format
    /// ```text
    /// {base_url}?prec_no=44&block_no=47662&year=2023&month=05&day=10
    /// ```
    pub fn url(&self, base_url: &str) -> String {
        format!(
            "{}?prec_no={}&block_no={}&year={}&month={:02}&day={:02}",
            base_url,
            self.station.prec_no,
            self.station.block_no,
            self.date.year(),
            self.date.month(),
            self.date.day()
        )
    }
}
