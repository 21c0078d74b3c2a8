//! Builder session orchestration.
//!
//! A [`BuilderSession`] is the caller-side surface a host UI talks to: it
//! resolves catalog components, clamps drop targets the way the gesture
//! layer is expected to, feeds the placement store, and keeps a rendered
//! preview consistent with store state after every mutation. The store
//! itself never clamps and never errors; everything policy-shaped lives
//! here.

use std::time::Instant;

use serde_json::json;
use uuid::Uuid;

use crate::catalog::{Catalog, Span};
use crate::error::{CanvasError, Result};
use crate::geometry::GridDims;
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::{BuilderMetrics, MetricSnapshot};
use crate::placement::PlacementGrid;
use crate::render::{HtmlRenderer, RendererSettings};

/// Upper bound a session accepts for grid dimensions.
///
/// The store takes any integer pair; this is the UI-side policy (the stock
/// canvas caps at 12x12) applied before the store is consulted.
#[derive(Debug, Clone, Copy)]
pub struct GridLimits {
    pub max_rows: i32,
    pub max_cols: i32,
}

impl Default for GridLimits {
    fn default() -> Self {
        Self {
            max_rows: 12,
            max_cols: 12,
        }
    }
}

impl GridLimits {
    pub fn clamp(&self, rows: i32, cols: i32) -> (i32, i32) {
        (
            rows.clamp(1, self.max_rows.max(1)),
            cols.clamp(1, self.max_cols.max(1)),
        )
    }
}

/// Shift a drop target so the span lies fully inside the grid.
///
/// This is the coordinate translation the engine contract leaves to the
/// caller: an oversized item dropped near a boundary slides inward rather
/// than hanging over the edge. A span larger than the grid itself clamps
/// to the origin and is left for the store to reject.
pub fn clamp_target(dims: GridDims, span: Span, r: i32, c: i32) -> (i32, i32) {
    let max_r = dims.rows - span.h;
    let max_c = dims.cols - span.w;
    (r.min(max_r).max(0), c.min(max_c).max(0))
}

/// Session construction parameters.
pub struct SessionConfig {
    pub grid: GridDims,
    pub limits: GridLimits,
    pub renderer: RendererSettings,
    pub logger: Option<Logger>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            grid: GridDims::new(4, 4),
            limits: GridLimits::default(),
            renderer: RendererSettings::default(),
            logger: None,
        }
    }
}

/// One editing session over a canvas: store, catalog, preview.
///
/// All operations run to completion on the calling thread; nothing here
/// blocks, retries, or interleaves. Hover feedback goes through the pure
/// [`BuilderSession::can_drop`]; only an ended gesture issues a mutation.
pub struct BuilderSession {
    store: PlacementGrid,
    catalog: Catalog,
    renderer: HtmlRenderer,
    limits: GridLimits,
    logger: Option<Logger>,
    metrics: BuilderMetrics,
    preview: String,
    preview_hash: Option<blake3::Hash>,
    started: Instant,
}

impl BuilderSession {
    pub fn new(catalog: Catalog) -> Self {
        Self::with_config(catalog, SessionConfig::default())
    }

    pub fn with_config(catalog: Catalog, config: SessionConfig) -> Self {
        Self {
            store: PlacementGrid::new(config.grid),
            catalog,
            renderer: HtmlRenderer::new(config.renderer),
            limits: config.limits,
            logger: config.logger,
            metrics: BuilderMetrics::new(),
            preview: String::new(),
            preview_hash: None,
            started: Instant::now(),
        }
    }

    /// Read-only snapshot of the placement state.
    pub fn store(&self) -> &PlacementGrid {
        &self.store
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn metrics(&self) -> &BuilderMetrics {
        &self.metrics
    }

    pub fn metrics_snapshot(&self) -> MetricSnapshot {
        self.metrics.snapshot(self.started.elapsed())
    }

    /// Hover feasibility for dragging `component` over cell `(r, c)`.
    ///
    /// Pure: safe to call repeatedly per pointer move, and a candidate for
    /// per-cell memoization in the gesture layer. Unknown components are
    /// simply not droppable.
    pub fn can_drop(&self, component: &str, r: i32, c: i32) -> bool {
        let Some(entry) = self.catalog.get(component) else {
            return false;
        };
        let (r, c) = clamp_target(self.store.grid(), entry.span, r, c);
        self.store
            .can_place(r, c, entry.span.w, entry.span.h, None)
    }

    /// Drop a catalog component at cell `(r, c)`.
    ///
    /// Returns the new item's id, or `None` when the store refused the
    /// placement; refusal is a routine outcome, not an error. Unknown
    /// component ids are the one genuine error at this boundary.
    pub fn drop_component(&mut self, component: &str, r: i32, c: i32) -> Result<Option<Uuid>> {
        let entry = self
            .catalog
            .get(component)
            .ok_or_else(|| CanvasError::UnknownComponent(component.to_string()))?;
        let span = entry.span;
        let (r, c) = clamp_target(self.store.grid(), span, r, c);

        if !self.store.can_place(r, c, span.w, span.h, None) {
            self.metrics.record_rejection();
            self.log_event(
                LogLevel::Debug,
                "place_rejected",
                [
                    json_kv("component", json!(component)),
                    json_kv("r", json!(r)),
                    json_kv("c", json!(c)),
                ],
            );
            return Ok(None);
        }

        self.store.place_item(entry, r, c);
        let id = self
            .store
            .items()
            .last()
            .map(|item| item.id)
            .expect("successful placement appends an item");
        self.metrics.record_placement();
        self.log_event(
            LogLevel::Info,
            "item_placed",
            [
                json_kv("item", json!(id.to_string())),
                json_kv("component", json!(component)),
                json_kv("r", json!(r)),
                json_kv("c", json!(c)),
                json_kv("w", json!(span.w)),
                json_kv("h", json!(span.h)),
            ],
        );
        Ok(Some(id))
    }

    /// Move an item to cell `(r, c)`. Returns true when the move applied.
    ///
    /// The target is clamped against the item's own span first, mirroring
    /// the drop path. Unknown ids are tolerated: the gesture may race a
    /// removal that already happened.
    pub fn move_to(&mut self, id: Uuid, r: i32, c: i32) -> bool {
        let Some(item) = self.store.item(id) else {
            self.log_event(
                LogLevel::Debug,
                "move_ignored",
                [json_kv("item", json!(id.to_string()))],
            );
            return false;
        };
        let span = Span::new(item.rect.w, item.rect.h);
        let (r, c) = clamp_target(self.store.grid(), span, r, c);

        if !self.store.can_place(r, c, span.w, span.h, Some(id)) {
            self.metrics.record_rejection();
            self.log_event(
                LogLevel::Debug,
                "move_rejected",
                [
                    json_kv("item", json!(id.to_string())),
                    json_kv("r", json!(r)),
                    json_kv("c", json!(c)),
                ],
            );
            return false;
        }

        self.store.move_item(id, r, c);
        self.metrics.record_move();
        self.log_event(
            LogLevel::Info,
            "item_moved",
            [
                json_kv("item", json!(id.to_string())),
                json_kv("r", json!(r)),
                json_kv("c", json!(c)),
            ],
        );
        true
    }

    /// Remove an item. Returns true when something was removed.
    pub fn remove(&mut self, id: Uuid) -> bool {
        if self.store.item(id).is_none() {
            self.log_event(
                LogLevel::Debug,
                "remove_ignored",
                [json_kv("item", json!(id.to_string()))],
            );
            return false;
        }
        self.store.remove_item(id);
        self.metrics.record_removal();
        self.log_event(
            LogLevel::Info,
            "item_removed",
            [json_kv("item", json!(id.to_string()))],
        );
        true
    }

    /// Resize the canvas, clamped to the session's [`GridLimits`].
    ///
    /// Returns the number of items the store pruned because they no longer
    /// fit.
    pub fn resize_grid(&mut self, rows: i32, cols: i32) -> usize {
        let (rows, cols) = self.limits.clamp(rows, cols);
        let before = self.store.items().len();
        self.store.set_grid(rows, cols);
        let pruned = before - self.store.items().len();
        self.metrics.record_pruned(pruned);
        self.log_event(
            LogLevel::Info,
            "grid_resized",
            [
                json_kv("rows", json!(rows)),
                json_kv("cols", json!(cols)),
                json_kv("pruned", json!(pruned)),
            ],
        );
        pruned
    }

    /// The rendered preview document for the current state.
    ///
    /// The document is re-derived only when the placement snapshot hash
    /// changed since the last render; rejected mutations leave the hash,
    /// and therefore the cached document, untouched.
    pub fn preview(&mut self) -> &str {
        let hash = snapshot_hash(&self.store);
        if self.preview_hash != Some(hash) {
            self.preview = self
                .renderer
                .render_to_string(self.store.grid(), self.store.items());
            self.preview_hash = Some(hash);
            self.metrics.record_render();
            self.log_event(
                LogLevel::Debug,
                "preview_rendered",
                [
                    json_kv("items", json!(self.store.items().len())),
                    json_kv("bytes", json!(self.preview.len())),
                ],
            );
        }
        &self.preview
    }

    fn log_event<I>(&self, level: LogLevel, message: &str, fields: I)
    where
        I: IntoIterator<Item = (String, serde_json::Value)>,
    {
        if let Some(logger) = self.logger.as_ref() {
            let event = event_with_fields(level, "canvas::session", message, fields);
            let _ = logger.log_event(event);
        }
    }
}

fn snapshot_hash(store: &PlacementGrid) -> blake3::Hash {
    let mut hasher = blake3::Hasher::new();
    let grid = store.grid();
    hasher.update(&grid.rows.to_le_bytes());
    hasher.update(&grid.cols.to_le_bytes());
    for item in store.items() {
        hasher.update(item.id.as_bytes());
        hasher.update(&item.rect.r.to_le_bytes());
        hasher.update(&item.rect.c.to_le_bytes());
        hasher.update(&item.rect.w.to_le_bytes());
        hasher.update(&item.rect.h.to_le_bytes());
        hasher.update(item.html.as_bytes());
    }
    hasher.finalize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{CatalogEntry, starter_catalog};
    use crate::geometry::CellRect;
    use crate::logging::MemorySink;
    use std::sync::Arc;

    fn block(id: &str, w: i32, h: i32) -> CatalogEntry {
        CatalogEntry {
            id: id.to_string(),
            title: id.to_string(),
            description: String::new(),
            span: Span::new(w, h),
            html: format!("<div>{id}</div>"),
        }
    }

    fn small_catalog() -> Catalog {
        Catalog::from_entries(vec![block("unit", 1, 1), block("wide", 2, 1), block("big", 2, 2)])
            .unwrap()
    }

    #[test]
    fn drop_resolves_catalog_and_places() {
        let mut session = BuilderSession::new(small_catalog());
        let id = session.drop_component("wide", 0, 0).unwrap().unwrap();
        let item = session.store().item(id).unwrap();
        assert_eq!(item.rect, CellRect::new(0, 0, 2, 1));
        assert_eq!(item.component, "wide");
    }

    #[test]
    fn unknown_component_is_an_error_and_leaves_store_untouched() {
        let mut session = BuilderSession::new(small_catalog());
        let err = session.drop_component("missing", 0, 0).unwrap_err();
        assert!(matches!(err, CanvasError::UnknownComponent(_)));
        assert!(session.store().items().is_empty());
    }

    #[test]
    fn oversized_drop_near_boundary_is_shifted_inside() {
        let mut session = BuilderSession::new(small_catalog());
        // A 2x2 block dropped at the far corner slides to (2, 2) on a 4x4.
        let id = session.drop_component("big", 3, 3).unwrap().unwrap();
        assert_eq!(
            session.store().item(id).unwrap().rect,
            CellRect::new(2, 2, 2, 2)
        );
    }

    #[test]
    fn occupied_drop_is_a_routine_rejection() {
        let mut session = BuilderSession::new(small_catalog());
        session.drop_component("big", 0, 0).unwrap().unwrap();
        let outcome = session.drop_component("big", 3, 3).unwrap();
        // Clamped to (2,2): free, so it lands; then the grid is full for 2x2.
        assert!(outcome.is_some());
        assert_eq!(session.drop_component("big", 1, 1).unwrap(), None);
        assert_eq!(session.store().items().len(), 2);
    }

    #[test]
    fn hover_query_has_no_side_effects() {
        let session = BuilderSession::new(small_catalog());
        assert!(session.can_drop("unit", 0, 0));
        assert!(session.can_drop("unit", 9, 9)); // clamps inward
        assert!(!session.can_drop("missing", 0, 0));
        assert!(session.store().items().is_empty());
    }

    #[test]
    fn move_clamps_and_applies() {
        let mut session = BuilderSession::new(small_catalog());
        let id = session.drop_component("wide", 0, 0).unwrap().unwrap();
        assert!(session.move_to(id, 3, 9));
        assert_eq!(
            session.store().item(id).unwrap().rect,
            CellRect::new(3, 2, 2, 1)
        );
    }

    #[test]
    fn move_of_unknown_id_is_tolerated() {
        let mut session = BuilderSession::new(small_catalog());
        assert!(!session.move_to(Uuid::new_v4(), 0, 0));
    }

    #[test]
    fn resize_is_clamped_to_limits() {
        let mut session = BuilderSession::new(small_catalog());
        session.resize_grid(50, 0);
        assert_eq!(session.store().grid(), GridDims::new(12, 1));
        session.resize_grid(-5, 30);
        assert_eq!(session.store().grid(), GridDims::new(1, 12));
    }

    #[test]
    fn resize_reports_pruned_items() {
        let mut session = BuilderSession::new(small_catalog());
        session.drop_component("unit", 0, 0).unwrap().unwrap();
        session.drop_component("big", 2, 2).unwrap().unwrap();
        let pruned = session.resize_grid(2, 2);
        assert_eq!(pruned, 1);
        assert_eq!(session.store().items().len(), 1);
    }

    #[test]
    fn preview_rerenders_only_when_state_changes() {
        let mut session = BuilderSession::new(small_catalog());
        session.drop_component("unit", 0, 0).unwrap().unwrap();
        session.preview();
        session.preview();
        session.preview();
        assert_eq!(session.metrics_snapshot().renders, 1);

        // A rejected drop must not invalidate the cached document.
        session.drop_component("unit", 0, 0).unwrap();
        session.preview();
        assert_eq!(session.metrics_snapshot().renders, 1);

        session.drop_component("unit", 1, 1).unwrap().unwrap();
        session.preview();
        assert_eq!(session.metrics_snapshot().renders, 2);
    }

    #[test]
    fn preview_reflects_the_store_after_each_mutation() {
        let mut session = BuilderSession::new(starter_catalog());
        let id = session.drop_component("header-simple", 0, 0).unwrap().unwrap();
        assert!(session.preview().contains(&id.to_string()));
        session.remove(id);
        assert!(!session.preview().contains(&id.to_string()));
    }

    #[test]
    fn session_logs_mutations() {
        let sink = MemorySink::new();
        let config = SessionConfig {
            logger: Some(Logger::new(Arc::clone(&sink))),
            ..SessionConfig::default()
        };
        let mut session = BuilderSession::with_config(small_catalog(), config);

        let id = session.drop_component("unit", 0, 0).unwrap().unwrap();
        session.drop_component("unit", 0, 0).unwrap();
        session.move_to(id, 1, 1);
        session.remove(id);
        session.resize_grid(6, 6);
        session.preview();

        let messages = sink.messages();
        assert_eq!(
            messages,
            vec![
                "item_placed",
                "place_rejected",
                "item_moved",
                "item_removed",
                "grid_resized",
                "preview_rendered",
            ]
        );
    }

    #[test]
    fn metrics_track_a_scripted_session() {
        let mut session = BuilderSession::new(small_catalog());
        let id = session.drop_component("unit", 0, 0).unwrap().unwrap();
        session.drop_component("unit", 0, 0).unwrap();
        session.move_to(id, 2, 2);
        session.move_to(id, 2, 2); // own position: still a successful move
        session.remove(id);
        let snapshot = session.metrics_snapshot();
        assert_eq!(snapshot.placements, 1);
        assert_eq!(snapshot.rejections, 1);
        assert_eq!(snapshot.moves, 2);
        assert_eq!(snapshot.removals, 1);
    }
}
