//! Helper functions for reading JMA HTML pages.

use scraper::{ElementRef, Selector};

use crate::error::ParseError;

/// Creates a CSS selector from a string.
///
/// This is a wrapper around scraper's Selector::parse that converts
/// parsing errors into [`ParseError`].
pub fn html_selector(selector: &str) -> Result<Selector, ParseError> {
    Selector::parse(selector).map_err(|e| ParseError::invalid_selector(selector, e))
}

/// Text of a table cell with every text node trimmed and joined without a
/// separator.
///
/// ```no_run
/// // <td> 1013.2 <span>hPa</span></td>  ->  "1013.2hPa"
/// ```
pub fn cell_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}
