//! Compose a landing page from the starter catalog and print the preview
//! document to stdout.
//!
//! ```text
//! cargo run --example landing_page > landing.html
//! ```

use canvas_mvp::{BuilderSession, Result, starter_catalog};

fn main() -> Result<()> {
    let mut session = BuilderSession::new(starter_catalog());

    session.drop_component("header-simple", 0, 0)?;
    session.drop_component("hero-centered", 1, 0)?;
    session.drop_component("footer-simple", 3, 0)?;

    println!("{}", session.preview());
    Ok(())
}
