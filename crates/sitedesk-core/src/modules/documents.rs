//! Document folders

use crate::error::{require, DashboardError, Result};
use crate::forms::non_blank;
use chrono::NaiveDate;
use sitedesk_model::{DocumentFolder, DocumentKind, ProjectDocument};
use sitedesk_store::RecordStore;
use std::cmp::Ordering;
use tracing::info;
use ulid::Ulid;

/// Sortable document table columns
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentColumn {
    Name,
    Kind,
    /// Compared as displayed text
    Size,
    UploadDate,
    LinkedTo,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// A file picked for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Upload {
    pub file_name: String,
    pub size_bytes: u64,
    /// Free-text reference such as `Plot A-01`; blank for none
    pub linked_to: String,
}

impl Upload {
    fn into_document(self, today: NaiveDate) -> ProjectDocument {
        #[allow(clippy::cast_precision_loss)]
        let megabytes = self.size_bytes as f64 / 1024.0 / 1024.0;
        ProjectDocument {
            id: format!("doc-{}", Ulid::new()),
            kind: DocumentKind::from_file_name(&self.file_name),
            name: self.file_name,
            size: format!("{megabytes:.2} MB"),
            upload_date: today,
            linked_to: non_blank(&self.linked_to),
        }
    }
}

fn compare(a: &ProjectDocument, b: &ProjectDocument, column: DocumentColumn) -> Ordering {
    match column {
        DocumentColumn::Name => a.name.cmp(&b.name),
        DocumentColumn::Kind => a.kind.as_str().cmp(b.kind.as_str()),
        DocumentColumn::Size => a.size.cmp(&b.size),
        DocumentColumn::UploadDate => a.upload_date.cmp(&b.upload_date),
        DocumentColumn::LinkedTo => a.linked_to.cmp(&b.linked_to),
    }
}

/// Folders with search and a table sort
#[derive(Debug)]
pub struct DocumentLibrary {
    folders: RecordStore<DocumentFolder>,
    sort: Option<(DocumentColumn, SortDirection)>,
}

impl Default for DocumentLibrary {
    fn default() -> Self {
        Self {
            folders: RecordStore::new(),
            sort: Some((DocumentColumn::UploadDate, SortDirection::Descending)),
        }
    }
}

impl DocumentLibrary {
    /// Library sorted newest upload first
    ///
    /// # Errors
    /// If two folders share an id.
    pub fn new(folders: Vec<DocumentFolder>) -> Result<Self> {
        Ok(Self {
            folders: RecordStore::with_records(folders)?,
            ..Self::default()
        })
    }

    #[must_use]
    pub fn folders(&self) -> &[DocumentFolder] {
        self.folders.as_slice()
    }

    #[must_use]
    pub fn sort(&self) -> Option<(DocumentColumn, SortDirection)> {
        self.sort
    }

    /// Sort by `column`: ascending, or descending when already ascending on it
    pub fn sort_by(&mut self, column: DocumentColumn) -> SortDirection {
        let direction = match self.sort {
            Some((current, SortDirection::Ascending)) if current == column => {
                SortDirection::Descending
            }
            _ => SortDirection::Ascending,
        };
        self.sort = Some((column, direction));
        direction
    }

    /// Documents of a folder whose name contains `search`, in table order
    ///
    /// # Errors
    /// [`DashboardError::NotFound`] for an unknown folder.
    pub fn documents(&self, folder: &str, search: &str) -> Result<Vec<&ProjectDocument>> {
        let folder = self.folder(folder)?;
        let needle = search.trim().to_lowercase();
        let mut docs: Vec<&ProjectDocument> = folder
            .documents
            .iter()
            .filter(|doc| doc.name.to_lowercase().contains(&needle))
            .collect();
        if let Some((column, direction)) = self.sort {
            docs.sort_by(|a, b| {
                let order = compare(a, b, column);
                match direction {
                    SortDirection::Ascending => order,
                    SortDirection::Descending => order.reverse(),
                }
            });
        }
        Ok(docs)
    }

    fn folder(&self, id: &str) -> Result<&DocumentFolder> {
        self.folders
            .get(&id.to_string())
            .ok_or_else(|| DashboardError::not_found("folder", id))
    }

    /// Add a file to a folder, or put it in place of `replace`
    ///
    /// The new document always gets a fresh id.
    ///
    /// # Errors
    /// [`DashboardError::MissingField`] for a blank file name,
    /// [`DashboardError::NotFound`] for an unknown folder or replaced document.
    pub fn upload(
        &mut self,
        folder: &str,
        upload: Upload,
        replace: Option<&str>,
        today: NaiveDate,
    ) -> Result<String> {
        require("upload", "file", &upload.file_name)?;
        let target = self.folder(folder)?;
        if let Some(old) = replace {
            if !target.documents.iter().any(|d| d.id == old) {
                return Err(DashboardError::not_found("document", old));
            }
        }

        let doc = upload.into_document(today);
        let id = doc.id.clone();
        self.folders.update(&folder.to_string(), |f| match replace {
            Some(old) => {
                if let Some(slot) = f.documents.iter_mut().find(|d| d.id == old) {
                    *slot = doc;
                }
            }
            None => f.documents.push(doc),
        });
        info!(folder, document = %id, replaced = ?replace, "document uploaded");
        Ok(id)
    }

    /// Remove a document from a folder
    ///
    /// # Errors
    /// [`DashboardError::NotFound`] for an unknown folder or document.
    pub fn delete(&mut self, folder: &str, document: &str) -> Result<ProjectDocument> {
        let position = self
            .folder(folder)?
            .documents
            .iter()
            .position(|d| d.id == document)
            .ok_or_else(|| DashboardError::not_found("document", document))?;

        let mut removed = None;
        self.folders.update(&folder.to_string(), |f| {
            removed = Some(f.documents.remove(position));
        });
        removed.ok_or_else(|| DashboardError::not_found("document", document))
    }

    /// Store, for subscriptions
    pub fn store_mut(&mut self) -> &mut RecordStore<DocumentFolder> {
        &mut self.folders
    }
}
