//! The placement store: which cells are occupied, and by what.
//!
//! The store is the single source of truth for the canvas. Every mutation
//! is validated through [`PlacementGrid::can_place`] and either fully
//! succeeds or leaves the state untouched. Invalid requests are silent
//! no-ops rather than errors: the gesture layer fires speculative calls
//! while a drag is in flight and must never need recovery logic.

use serde::Serialize;
use uuid::Uuid;

use crate::catalog::CatalogEntry;
use crate::geometry::{CellRect, GridDims};

/// A catalog component instantiated onto the grid.
///
/// `id` is process-unique and stable for the item's lifetime; it doubles as
/// the render key. `component` records the originating catalog id for
/// informational purposes only and is never re-validated. The `html`
/// payload is a copy taken at placement time, so later catalog edits do not
/// reach already-placed items.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedItem {
    pub id: Uuid,
    pub component: String,
    pub rect: CellRect,
    pub html: String,
}

/// Stateful placement engine over a rectangular cell grid.
///
/// Items are kept in insertion order; the order carries no geometric
/// meaning because occupied rectangles never overlap.
#[derive(Debug, Clone)]
pub struct PlacementGrid {
    grid: GridDims,
    items: Vec<PlacedItem>,
}

impl Default for PlacementGrid {
    fn default() -> Self {
        Self::new(GridDims::new(4, 4))
    }
}

impl PlacementGrid {
    pub fn new(grid: GridDims) -> Self {
        Self {
            grid,
            items: Vec::new(),
        }
    }

    pub fn grid(&self) -> GridDims {
        self.grid
    }

    pub fn items(&self) -> &[PlacedItem] {
        &self.items
    }

    pub fn item(&self, id: Uuid) -> Option<&PlacedItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Pure feasibility query, the single gate for every mutation below.
    ///
    /// True iff the candidate rectangle lies fully inside the grid and
    /// overlaps no placed item other than `exclude`. Passing the id of an
    /// item being moved as `exclude` lets the new position validate without
    /// colliding with the item's own old footprint.
    pub fn can_place(&self, r: i32, c: i32, w: i32, h: i32, exclude: Option<Uuid>) -> bool {
        let candidate = CellRect::new(r, c, w, h);
        if !candidate.fits_within(self.grid) {
            return false;
        }
        self.items
            .iter()
            .filter(|item| Some(item.id) != exclude)
            .all(|item| !item.rect.overlaps(&candidate))
    }

    /// Replace the grid dimensions and drop every item that no longer fits.
    ///
    /// Survivors keep their exact position; nothing is repacked or
    /// clamped. The pair is applied verbatim, so a zero or negative
    /// dimension is legal and simply prunes every item.
    pub fn set_grid(&mut self, rows: i32, cols: i32) {
        self.grid = GridDims::new(rows, cols);
        let grid = self.grid;
        self.items.retain(|item| item.rect.fits_within(grid));
    }

    /// Instantiate `entry` at the given top-left cell.
    ///
    /// Span and markup are copied from the entry. A failed feasibility
    /// check leaves the store unchanged.
    pub fn place_item(&mut self, entry: &CatalogEntry, r: i32, c: i32) {
        let span = entry.span;
        if !self.can_place(r, c, span.w, span.h, None) {
            return;
        }
        self.items.push(PlacedItem {
            id: Uuid::new_v4(),
            component: entry.id.clone(),
            rect: CellRect::new(r, c, span.w, span.h),
            html: entry.html.clone(),
        });
    }

    /// Translate an item to a new top-left cell, keeping id, span, and
    /// content. Unknown ids are tolerated silently; a failed feasibility
    /// check leaves the item at its old position.
    pub fn move_item(&mut self, id: Uuid, r: i32, c: i32) {
        let Some(idx) = self.items.iter().position(|item| item.id == id) else {
            return;
        };
        let CellRect { w, h, .. } = self.items[idx].rect;
        if !self.can_place(r, c, w, h, Some(id)) {
            return;
        }
        let rect = &mut self.items[idx].rect;
        rect.r = r;
        rect.c = c;
    }

    /// Remove an item by id. No-op when the id is absent.
    pub fn remove_item(&mut self, id: Uuid) {
        self.items.retain(|item| item.id != id);
    }
}
