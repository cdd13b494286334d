//! HTML generation utilities for testing.
//!
//! Produces pages shaped like the JMA `10min_s1.php` response: a
//! `table.data2_s` with two header rows followed by 10-minute data rows.

use crate::test_utils::fixtures::sample_cells;

/// Builder for creating JMA observation pages with a fluent API.
#[derive(Debug, Default)]
pub struct JmaTableBuilder {
    preamble: String,
    rows: Vec<String>,
}

impl JmaTableBuilder {
    /// Creates a new JmaTableBuilder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds markup placed before the observation table.
    pub fn with_preamble(mut self, markup: &str) -> Self {
        self.preamble.push_str(markup);
        self
    }

    /// Adds the two header rows JMA renders above the data.
    pub fn with_header(mut self) -> Self {
        self.rows.push(
            r#"<tr class="mtx"><th rowspan="2">時分</th><th colspan="2">気圧(hPa)</th><th rowspan="2">降水量<br>(mm)</th><th rowspan="2">気温<br>(℃)</th><th rowspan="2">相対湿度<br>(％)</th><th colspan="4">風向・風速(m/s)</th><th rowspan="2">日照<br>時間<br>(分)</th></tr>"#
                .to_string(),
        );
        self.rows.push(
            r#"<tr class="mtx"><th>現地</th><th>海面</th><th>平均</th><th>風向</th><th>最大瞬間</th><th>風向</th></tr>"#
                .to_string(),
        );
        self
    }

    /// Adds a data row with the given cell texts.
    pub fn with_row(mut self, cells: &[String]) -> Self {
        let mut row = String::from(r#"<tr class="mtx" style="text-align:right;">"#);
        for (i, cell) in cells.iter().enumerate() {
            let class = if i == 0 { "data_0_0" } else { "data_0_1" };
            row.push_str(&format!(r#"<td class="{}">{}</td>"#, class, cell));
        }
        row.push_str("</tr>");
        self.rows.push(row);
        self
    }

    /// Adds a row exactly as given.
    pub fn with_raw_row(mut self, markup: &str) -> Self {
        self.rows.push(markup.to_string());
        self
    }

    /// Adds `count` data rows stamped 00:10, 00:20, ...
    pub fn with_data_rows(mut self, count: usize) -> Self {
        for i in 1..=count {
            let minutes = i * 10;
            let time = format!("{:02}:{:02}", minutes / 60, minutes % 60);
            self = self.with_row(&sample_cells(&time));
        }
        self
    }

    /// Builds the HTML string.
    pub fn build(self) -> String {
        format!(
            r#"<html><head><meta charset="utf-8"></head><body><div id="main">{}<table id="tablefix1" class="data2_s">{}</table></div></body></html>"#,
            self.preamble,
            self.rows.concat()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jma_table_builder() {
        let html = JmaTableBuilder::new()
            .with_header()
            .with_data_rows(2)
            .build();

        assert!(html.contains(r#"class="data2_s""#));
        assert!(html.contains("<th rowspan=\"2\">時分</th>"));
        assert!(html.contains(r#"<td class="data_0_0">00:10</td>"#));
        assert!(html.contains(r#"<td class="data_0_0">00:20</td>"#));
    }

    #[test]
    fn test_data_row_times_roll_over_the_hour() {
        let html = JmaTableBuilder::new().with_data_rows(7).build();
        assert!(html.contains(r#"<td class="data_0_0">01:00</td>"#));
        assert!(html.contains(r#"<td class="data_0_0">01:10</td>"#));
    }
}
