use thiserror::Error;

/// Unified result type for the canvas MVP crate.
pub type Result<T> = std::result::Result<T, CanvasError>;

/// Errors surfaced by the builder's ambient surface.
///
/// Placement-store mutations never error: an invalid request is a silent,
/// total no-op so the UI can fire speculative operations while dragging.
/// These variants cover the surrounding machinery only.
#[derive(Debug, Error)]
pub enum CanvasError {
    #[error("unknown component `{0}`")]
    UnknownComponent(String),
    #[error("component `{id}` declares a non-positive span {w}x{h}")]
    InvalidSpan { id: String, w: i32, h: i32 },
    #[error("catalog parse error: {0}")]
    CatalogParse(#[from] serde_json::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
