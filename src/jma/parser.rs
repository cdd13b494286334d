//! HTML parsing for the JMA 10-minute observation table.
//!
//! The page carries one `table.data2_s` whose first rows are multi-level
//! headers (the first starting with `時分`). Data rows follow, one per
//! 10-minute slot.

use chrono::NaiveDate;
use scraper::Html;

use crate::error::ParseError;
use crate::jma::helper::{cell_text, html_selector};
use crate::model::Observation;

/// CSS selector of the observation table.
pub const TABLE_SELECTOR: &str = "table.data2_s";

/// Marker found in the first cell of the header row.
const HEADER_MARKER: &str = "時分";

/// A data row needs at least this many cells to be kept.
const MIN_CELLS: usize = 11;

/// Returns the observation table as rows of cell texts, in document order.
pub fn table_rows(document: &Html) -> Result<Vec<Vec<String>>, ParseError> {
    let table_selector = html_selector(TABLE_SELECTOR)?;
    let row_selector = html_selector("tr")?;
    let cell_selector = html_selector("td, th")?;

    let table = document
        .select(&table_selector)
        .next()
        .ok_or_else(|| ParseError::element_not_found(TABLE_SELECTOR))?;

    Ok(table
        .select(&row_selector)
        .map(|row| row.select(&cell_selector).map(cell_text).collect())
        .collect())
}

/// Parses one day page into observation records.
///
/// Header and empty rows are skipped, as are rows with fewer than 11 cells.
/// The result may be empty when the table holds no data rows.
pub fn parse_day_table(html: &str, date: NaiveDate) -> Result<Vec<Observation>, ParseError> {
    let document = Html::parse_document(html);
    let rows = table_rows(&document)?;

    let mut records = Vec::with_capacity(rows.len());
    for cells in rows {
        let Some(first) = cells.first() else {
            continue;
        };
        if first.contains(HEADER_MARKER) {
            continue;
        }
        if cells.len() < MIN_CELLS {
            tracing::debug!(
                "{}: skipping row with {} cells: {:?}",
                date,
                cells.len(),
                cells
            );
            continue;
        }
        records.push(Observation::from_cells(date, cells));
    }

    Ok(records)
}
