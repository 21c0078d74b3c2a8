use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Fixed width and height of a component, in grid cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Span {
    pub w: i32,
    pub h: i32,
}

impl Span {
    pub const fn new(w: i32, h: i32) -> Self {
        Self { w, h }
    }
}

/// An immutable library template from which placed items are instantiated.
///
/// The `html` payload is opaque to the whole crate: it is copied verbatim
/// at placement time and never parsed or validated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogEntry {
    pub id: String,
    pub title: String,
    pub description: String,
    pub span: Span,
    pub html: String,
}

/// Ordered, read-only component library.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Catalog {
    entries: Vec<CatalogEntry>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from pre-constructed entries, validating that every
    /// span covers at least one cell. Entries are kept in the given order.
    pub fn from_entries(entries: Vec<CatalogEntry>) -> Result<Self> {
        for entry in &entries {
            validate_span(entry)?;
        }
        Ok(Self { entries })
    }

    /// Parse a catalog from its JSON representation. This is how an
    /// embedding application ships its own component library.
    pub fn from_json(json: &str) -> Result<Self> {
        let catalog: Catalog = serde_json::from_str(json)?;
        for entry in &catalog.entries {
            validate_span(entry)?;
        }
        Ok(catalog)
    }

    pub fn get(&self, id: &str) -> Option<&CatalogEntry> {
        self.entries.iter().find(|entry| entry.id == id)
    }

    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_span(entry: &CatalogEntry) -> Result<()> {
    let Span { w, h } = entry.span;
    if w < 1 || h < 1 {
        return Err(crate::error::CanvasError::InvalidSpan {
            id: entry.id.clone(),
            w,
            h,
        });
    }
    Ok(())
}
