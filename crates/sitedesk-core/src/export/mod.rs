//! Downloadable exports: CSV tables, report documents and number formatting

pub mod csv;
pub mod format;
pub mod report;

pub use csv::{CsvField, CsvTable};
pub use report::{ReportDocument, ReportTable, TableStyle};

/// A generated download
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportFile {
    /// Suggested file name
    pub file_name: String,
    /// Media type
    pub mime: &'static str,
    /// File body
    pub contents: String,
}
