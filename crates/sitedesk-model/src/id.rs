//! Checklist item identity
//!
//! Provides [`ItemId`], the shared key that lets a daily progress report and
//! the project timeline refer to the same piece of site work, and
//! [`ItemFingerprint`], a content hash of `(category, text)` used to catch
//! duplicate catalog entries at construction time.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Normalize a category name into its id prefix
///
/// Lower-cases the name and turns every run of characters outside
/// `[a-z0-9]` into a single `-`. Leading and trailing separators are dropped.
///
/// # Examples
/// - `"Site Preparation"` → `site-preparation`
/// - `"Boundary & Security"` → `boundary-security`
#[must_use]
pub fn slugify(category: &str) -> String {
    let mut slug = String::with_capacity(category.len());
    let mut pending_separator = false;

    for ch in category.chars().flat_map(char::to_lowercase) {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else {
            pending_separator = true;
        }
    }

    slug
}

/// Build the id of the `index`-th item (zero-based) of a catalog category
///
/// Deterministic: the same `(category, index)` always yields the same id.
/// No collision detection happens here; see
/// [`WorkCatalog::new`](crate::catalog::WorkCatalog::new).
#[inline]
#[must_use]
pub fn make_id(category: &str, index: usize) -> ItemId {
    ItemId(format!("{}-{index}", slugify(category)))
}

/// Identifier of a checklist item
///
/// Two checklist items with equal ids (one in a progress report, one in a
/// timeline phase) describe the same logical work item.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    /// Wrap an existing id string
    #[inline]
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into `(slug, index)` when the id follows the catalog scheme
    #[must_use]
    pub fn parts(&self) -> Option<(&str, usize)> {
        let (slug, index) = self.0.rsplit_once('-')?;
        let index = index.parse().ok()?;
        Some((slug, index))
    }
}

impl Display for ItemId {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ItemId {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(s.to_string()))
    }
}

impl From<&str> for ItemId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl AsRef<str> for ItemId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Content hash of a catalog entry (Blake3 over category and text)
///
/// Independent of item position, so reordering a category does not change
/// an entry's fingerprint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemFingerprint([u8; 32]);

impl ItemFingerprint {
    /// Compute the fingerprint of a `(category, text)` pair
    #[must_use]
    pub fn compute(category: &str, text: &str) -> Self {
        let mut hasher = blake3::Hasher::new();
        hasher.update(category.trim().to_lowercase().as_bytes());
        hasher.update(&[0]);
        hasher.update(text.trim().to_lowercase().as_bytes());
        Self(*hasher.finalize().as_bytes())
    }

    /// Get reference to the underlying bytes
    #[inline]
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Short string representation (first 16 hex chars)
    #[inline]
    #[must_use]
    pub fn short(&self) -> String {
        hex::encode(&self.0[..8])
    }
}

impl Display for ItemFingerprint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(self.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn make_id_site_preparation() {
        assert_eq!(make_id("Site Preparation", 0).as_str(), "site-preparation-0");
        assert_eq!(make_id("Site Preparation", 0), make_id("Site Preparation", 0));
    }

    #[test]
    fn make_id_collapses_symbol_runs() {
        assert_eq!(make_id("Boundary & Security", 4).as_str(), "boundary-security-4");
    }

    #[test]
    fn slugify_trims_edges() {
        assert_eq!(slugify("  Roads / Drainage! "), "roads-drainage");
        assert_eq!(slugify("Phase 2"), "phase-2");
        assert_eq!(slugify("&&"), "");
    }

    #[test]
    fn slugify_drops_non_ascii_letters() {
        assert_eq!(slugify("Café Works"), "caf-works");
    }

    #[test]
    fn item_id_parts() {
        let id = make_id("Boundary & Security", 4);
        assert_eq!(id.parts(), Some(("boundary-security", 4)));
        assert_eq!(ItemId::new("t1-x").parts(), None);
    }

    #[test]
    fn item_id_serde_transparent() {
        let id = ItemId::new("infrastructure-1");
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"infrastructure-1\"");
    }

    #[test]
    fn fingerprint_ignores_case_and_padding() {
        let a = ItemFingerprint::compute("Infrastructure", "Road Base Course");
        let b = ItemFingerprint::compute(" infrastructure", "road base course ");
        assert_eq!(a, b);
        assert_eq!(a.short().len(), 16);
    }

    #[test]
    fn fingerprint_separates_category_from_text() {
        let a = ItemFingerprint::compute("ab", "c");
        let b = ItemFingerprint::compute("a", "bc");
        assert_ne!(a, b);
    }

    proptest! {
        #[test]
        fn prop_slug_shape(category in ".{0,40}") {
            let slug = slugify(&category);
            prop_assert!(slug.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-'));
            prop_assert!(!slug.starts_with('-'));
            prop_assert!(!slug.ends_with('-'));
            prop_assert!(!slug.contains("--"));
        }

        #[test]
        fn prop_make_id_deterministic(category in "[A-Za-z &/]{1,30}", index in 0usize..100) {
            prop_assert_eq!(make_id(&category, index), make_id(&category, index));
            let id = make_id(&category, index);
            let suffix = format!("-{index}");
            prop_assert!(id.as_str().ends_with(&suffix));
        }
    }
}
