//! Calendar enumeration for the scraping range.
//!
//! [`DateRange`] is a plain value: iterating it never consumes it, so the same
//! range can be walked day by day or month by month as many times as needed.

use chrono::{Datelike, NaiveDate};

/// Inclusive range of calendar days.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Empty when `start` is after `end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn start(&self) -> NaiveDate {
        self.start
    }

    pub fn end(&self) -> NaiveDate {
        self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start > self.end
    }

    pub fn iter(&self) -> Days {
        Days {
            next: (!self.is_empty()).then_some(self.start),
            end: self.end,
        }
    }

    pub fn months(&self) -> Months {
        Months {
            next: (!self.is_empty()).then_some(self.start),
            end: self.end,
        }
    }
}

impl IntoIterator for DateRange {
    type Item = NaiveDate;
    type IntoIter = Days;

    fn into_iter(self) -> Days {
        self.iter()
    }
}

/// Iterator over the days of a [`DateRange`].
#[derive(Debug, Clone)]
pub struct Days {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Days {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next?;
        self.next = current.succ_opt().filter(|next| *next <= self.end);
        Some(current)
    }
}

/// The part of one calendar month that falls inside a [`DateRange`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthSpan {
    pub year: i32,
    pub month: u32,
    pub first: NaiveDate,
    pub last: NaiveDate,
}

impl MonthSpan {
    pub fn days(&self) -> DateRange {
        DateRange::new(self.first, self.last)
    }
}

/// Iterator over the months of a [`DateRange`], clipped at both ends.
#[derive(Debug, Clone)]
pub struct Months {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for Months {
    type Item = MonthSpan;

    fn next(&mut self) -> Option<MonthSpan> {
        let first = self.next?;
        let month_end = last_day_of_month(first.year(), first.month()).unwrap_or(first);
        let last = month_end.min(self.end);
        self.next = last.succ_opt().filter(|next| *next <= self.end);
        Some(MonthSpan {
            year: first.year(),
            month: first.month(),
            first,
            last,
        })
    }
}

/// Last calendar day of the given month.
pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (next_year, next_month) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()
}
