//! Spreadsheet exports
//!
//! Output matches what spreadsheet users of the dashboard already open:
//! comma-separated fields, `\n` between rows, and free-text fields wrapped
//! in double quotes without escaping. It is not RFC 4180.

use super::ExportFile;

/// One cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CsvField {
    /// Written as is
    Plain(String),
    /// Wrapped in `"`
    Quoted(String),
}

impl CsvField {
    /// Plain cell from anything displayable
    #[must_use]
    pub fn plain(value: impl ToString) -> Self {
        Self::Plain(value.to_string())
    }

    /// Quoted cell
    #[must_use]
    pub fn quoted(value: impl Into<String>) -> Self {
        Self::Quoted(value.into())
    }

    /// Quoted cell, or an empty plain cell for `None`
    #[must_use]
    pub fn quoted_or_empty(value: Option<&str>) -> Self {
        value.map_or_else(|| Self::Plain(String::new()), Self::quoted)
    }

    fn write(&self, out: &mut String) {
        match self {
            Self::Plain(text) => out.push_str(text),
            Self::Quoted(text) => {
                out.push('"');
                out.push_str(text);
                out.push('"');
            }
        }
    }
}

/// Header plus rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvTable {
    header: Vec<String>,
    rows: Vec<Vec<CsvField>>,
}

impl CsvTable {
    /// Table with the given column titles
    #[must_use]
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Append a row
    pub fn push_row(&mut self, row: Vec<CsvField>) {
        self.rows.push(row);
    }

    /// Number of data rows
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Check if there are no data rows
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Header line, `\n`, then the rows joined by `\n`
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = self.header.join(",");
        out.push('\n');
        for (index, row) in self.rows.iter().enumerate() {
            if index > 0 {
                out.push('\n');
            }
            for (column, field) in row.iter().enumerate() {
                if column > 0 {
                    out.push(',');
                }
                field.write(&mut out);
            }
        }
        out
    }

    /// Rendered file
    #[must_use]
    pub fn into_file(self, file_name: impl Into<String>) -> ExportFile {
        ExportFile {
            file_name: file_name.into(),
            mime: "text/csv;charset=utf-8",
            contents: self.render(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_without_escaping() {
        let mut table = CsvTable::new(["Name", "Phone"]);
        table.push_row(vec![CsvField::quoted("SK Properties"), CsvField::plain("9876543210")]);
        table.push_row(vec![CsvField::quoted("Say \"hi\""), CsvField::plain(2.5)]);

        assert_eq!(
            table.render(),
            "Name,Phone\n\"SK Properties\",9876543210\n\"Say \"hi\"\",2.5"
        );
    }

    #[test]
    fn empty_table_is_header_line() {
        let table = CsvTable::new(["A", "B"]);
        assert_eq!(table.render(), "A,B\n");
    }

    #[test]
    fn optional_quoted_cells() {
        let mut table = CsvTable::new(["Buyer"]);
        table.push_row(vec![CsvField::quoted_or_empty(None)]);
        table.push_row(vec![CsvField::quoted_or_empty(Some("Vikram Singh"))]);
        assert_eq!(table.render(), "Buyer\n\n\"Vikram Singh\"");
    }
}
