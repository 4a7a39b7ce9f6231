//! Project document folders

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentKind {
    #[default]
    Pdf,
    Docx,
    Jpg,
    Png,
}

impl DocumentKind {
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            DocumentKind::Pdf => "PDF",
            DocumentKind::Docx => "DOCX",
            DocumentKind::Jpg => "JPG",
            DocumentKind::Png => "PNG",
        }
    }

    /// Kind from the file extension; unknown extensions count as PDF
    #[must_use]
    pub fn from_file_name(name: &str) -> Self {
        let extension = name.rsplit_once('.').map(|(_, ext)| ext.to_ascii_uppercase());
        match extension.as_deref() {
            Some("DOCX") => DocumentKind::Docx,
            Some("JPG" | "JPEG") => DocumentKind::Jpg,
            Some("PNG") => DocumentKind::Png,
            _ => DocumentKind::Pdf,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDocument {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: DocumentKind,
    /// Display size, e.g. `2.3 MB`
    pub size: String,
    pub upload_date: NaiveDate,
    /// Free-form link target (plot id, lead, key action)
    pub linked_to: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentFolder {
    pub id: String,
    pub name: String,
    pub documents: Vec<ProjectDocument>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_extension() {
        assert_eq!(DocumentKind::from_file_name("Plot_B-12_Agreement.docx"), DocumentKind::Docx);
        assert_eq!(DocumentKind::from_file_name("layout.JPEG"), DocumentKind::Jpg);
        assert_eq!(DocumentKind::from_file_name("README"), DocumentKind::Pdf);
    }
}
