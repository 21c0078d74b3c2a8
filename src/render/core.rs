//! Pure HTML document assembly for the canvas preview.
//!
//! The renderer is a stateless function of a placement snapshot: the same
//! grid and item list always produce the same document. Item payloads are
//! inert content and are embedded verbatim.

use std::fmt::Write as _;
use std::io::Write;

use crate::error::Result;
use crate::geometry::GridDims;
use crate::placement::PlacedItem;

const TAILWIND_CDN: &str = r#"<script src="https://cdn.tailwindcss.com"></script>"#;

/// Renderer document parameters.
#[derive(Debug, Clone)]
pub struct RendererSettings {
    /// Document title. Host-supplied text, escaped on output.
    pub title: String,
    /// Include the Tailwind CDN script the stock components style with.
    pub tailwind: bool,
    /// Extra markup appended to the document head, verbatim.
    pub extra_head: Option<String>,
}

impl Default for RendererSettings {
    fn default() -> Self {
        Self {
            title: "Preview".to_string(),
            tailwind: true,
            extra_head: None,
        }
    }
}

/// Assembles a standalone HTML document from a placement snapshot.
pub struct HtmlRenderer {
    settings: RendererSettings,
}

impl HtmlRenderer {
    pub fn new(settings: RendererSettings) -> Self {
        Self { settings }
    }

    pub fn with_default() -> Self {
        Self::new(RendererSettings::default())
    }

    pub fn settings_mut(&mut self) -> &mut RendererSettings {
        &mut self.settings
    }

    /// Render the snapshot into a document string.
    ///
    /// The page body is a CSS grid with one uniform track per canvas row
    /// and column; each item occupies its declared cell span via one-based
    /// `grid-row`/`grid-column` lines. Items appear in list order, which is
    /// safe because occupied rectangles never overlap.
    pub fn render_to_string(&self, grid: GridDims, items: &[PlacedItem]) -> String {
        let mut doc = String::new();

        doc.push_str("<!doctype html>\n<html>\n<head>\n");
        doc.push_str("<meta charset=\"utf-8\" />\n");
        doc.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\" />\n");
        let _ = writeln!(doc, "<title>{}</title>", escape_text(&self.settings.title));
        if self.settings.tailwind {
            doc.push_str(TAILWIND_CDN);
            doc.push('\n');
        }
        if let Some(extra) = &self.settings.extra_head {
            doc.push_str(extra);
            doc.push('\n');
        }
        doc.push_str("</head>\n");
        doc.push_str("<body class=\"min-h-screen bg-white text-gray-900\">\n");

        // repeat() needs a positive track count even when the canvas has
        // been resized to nothing; an empty grid renders no items anyway.
        let rows = grid.rows.max(1);
        let cols = grid.cols.max(1);
        let _ = writeln!(
            doc,
            "<div style=\"display: grid; grid-template-rows: repeat({rows}, minmax(0, 1fr)); grid-template-columns: repeat({cols}, minmax(0, 1fr)); width: 100%; min-height: 100vh;\">"
        );

        for item in items {
            let rect = item.rect;
            let _ = writeln!(
                doc,
                "<div data-item=\"{}\" data-component=\"{}\" style=\"grid-row: {} / span {}; grid-column: {} / span {}; overflow: hidden;\">",
                item.id,
                escape_text(&item.component),
                rect.r + 1,
                rect.h,
                rect.c + 1,
                rect.w,
            );
            doc.push_str(&item.html);
            doc.push_str("\n</div>\n");
        }

        doc.push_str("</div>\n</body>\n</html>\n");
        doc
    }

    /// Render the snapshot to an output stream.
    pub fn render(
        &self,
        writer: &mut impl Write,
        grid: GridDims,
        items: &[PlacedItem],
    ) -> Result<()> {
        let doc = self.render_to_string(grid, items);
        writer.write_all(doc.as_bytes())?;
        writer.flush()?;
        Ok(())
    }
}

fn escape_text(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}
