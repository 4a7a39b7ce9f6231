//! Printable reports
//!
//! A [`ReportDocument`] is a title, a generation date and a stack of
//! tables. The embedding application lays it out as a PDF from its JSON
//! form; [`ReportDocument::render_text`] gives a plain-text rendering.

use super::ExportFile;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Table look
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableStyle {
    /// Alternating row shading
    Striped,
    /// Ruled cells
    Grid,
}

/// Header fill in RGB
pub type Rgb = [u8; 3];

/// Accent gold used for headline tables
pub const GOLD: Rgb = [197, 165, 101];
/// Teal used by sales tables
pub const TEAL: Rgb = [20, 184, 166];
/// Slate used for detail tables
pub const SLATE: Rgb = [30, 41, 59];

/// One table in a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportTable {
    pub head: Vec<String>,
    pub body: Vec<Vec<String>>,
    pub style: TableStyle,
    pub header_fill: Rgb,
}

impl ReportTable {
    #[must_use]
    pub fn new<I, S>(head: I, style: TableStyle, header_fill: Rgb) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            head: head.into_iter().map(Into::into).collect(),
            body: Vec::new(),
            style,
            header_fill,
        }
    }

    /// Append a row
    #[must_use]
    pub fn row<I, S>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.body.push(cells.into_iter().map(Into::into).collect());
        self
    }

    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.head.iter().map(|h| h.chars().count()).collect();
        for row in &self.body {
            for (index, cell) in row.iter().enumerate() {
                let width = cell.chars().count();
                match widths.get_mut(index) {
                    Some(current) => *current = (*current).max(width),
                    None => widths.push(width),
                }
            }
        }
        widths
    }

    fn render_into(&self, out: &mut String) {
        let widths = self.widths();
        let line = |cells: &[String], out: &mut String| {
            let padded: Vec<String> = cells
                .iter()
                .zip(&widths)
                .map(|(cell, width)| format!("{cell:<width$}"))
                .collect();
            out.push_str(padded.join("  ").trim_end());
            out.push('\n');
        };

        line(&self.head, out);
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
        line(&rule, out);
        for row in &self.body {
            line(row, out);
        }
    }
}

/// A titled report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportDocument {
    /// Download name, e.g. `financial-summary.pdf`
    pub file_name: String,
    pub title: String,
    pub generated_on: NaiveDate,
    pub tables: Vec<ReportTable>,
}

impl ReportDocument {
    #[must_use]
    pub fn new(file_name: impl Into<String>, title: impl Into<String>, generated_on: NaiveDate) -> Self {
        Self {
            file_name: file_name.into(),
            title: title.into(),
            generated_on,
            tables: Vec::new(),
        }
    }

    /// Append a table
    #[must_use]
    pub fn table(mut self, table: ReportTable) -> Self {
        self.tables.push(table);
        self
    }

    /// Generation line as printed under the title, e.g. `2/15/2026`
    #[must_use]
    pub fn generated_line(&self) -> String {
        format!("Report generated on: {}", self.generated_on.format("%-m/%-d/%Y"))
    }

    /// Plain-text rendering with aligned columns
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = format!("{}\n{}\n", self.title, self.generated_line());
        for table in &self.tables {
            out.push('\n');
            table.render_into(&mut out);
        }
        out
    }

    /// Layout description for a PDF renderer
    ///
    /// # Errors
    /// Only if serialization fails, which plain strings cannot cause.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Plain-text file under the report's download name
    #[must_use]
    pub fn to_text_file(&self) -> ExportFile {
        ExportFile {
            file_name: self.file_name.clone(),
            mime: "text/plain;charset=utf-8",
            contents: self.render_text(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn doc() -> ReportDocument {
        ReportDocument::new(
            "summary.pdf",
            "TRIIVANTA GOLD - Summary",
            NaiveDate::from_ymd_opt(2026, 2, 15).unwrap(),
        )
        .table(
            ReportTable::new(["Metric", "Value"], TableStyle::Striped, GOLD)
                .row(["Total Plots", "81"])
                .row(["Project Area", "7.5 Acres"]),
        )
    }

    #[test]
    fn text_layout_aligns_columns() {
        let expected = "TRIIVANTA GOLD - Summary\n\
                        Report generated on: 2/15/2026\n\
                        \n\
                        Metric        Value\n\
                        ------------  ---------\n\
                        Total Plots   81\n\
                        Project Area  7.5 Acres\n";
        assert_eq!(doc().render_text(), expected);
    }

    #[test]
    fn json_layout_round_trips() {
        let doc = doc();
        let json = doc.to_json().unwrap();
        assert!(json.contains("\"style\": \"striped\""));
        let back: ReportDocument = serde_json::from_str(&json).unwrap();
        assert_eq!(back, doc);
    }
}
