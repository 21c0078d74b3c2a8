//! Scripted editing session with structured logging.
//!
//! Simulates the call pattern a gesture layer produces: hover queries,
//! a few drops (one rejected), a move, a removal, and a grid resize that
//! prunes an item. The emitted log events and the final metrics snapshot
//! are printed as JSON lines.

use std::sync::Arc;

use canvas_mvp::{
    BuilderSession, Logger, MemorySink, Result, SessionConfig, starter_catalog,
};

fn main() -> Result<()> {
    let sink = MemorySink::new();
    let config = SessionConfig {
        logger: Some(Logger::new(Arc::clone(&sink))),
        ..SessionConfig::default()
    };
    let mut session = BuilderSession::with_config(starter_catalog(), config);

    // Hover feedback is pure; nothing below mutates until the drop.
    for c in 0..4 {
        let _ = session.can_drop("hero-centered", 1, c);
    }

    let header = session
        .drop_component("header-simple", 0, 0)?
        .expect("empty canvas accepts the header");
    session.drop_component("hero-centered", 1, 0)?;
    // Lands on occupied rows: routine rejection, state unchanged.
    session.drop_component("pricing-3tiers", 1, 0)?;
    session.drop_component("testimonial-simple", 3, 0)?;

    session.move_to(header, 3, 2);
    session.remove(header);
    session.resize_grid(2, 4);

    let _ = session.preview();

    for event in sink.events() {
        match serde_json::to_string(&event) {
            Ok(line) => println!("{line}"),
            Err(err) => eprintln!("event serialization failed: {err}"),
        }
    }
    match serde_json::to_string(&session.metrics_snapshot().as_fields()) {
        Ok(line) => println!("{line}"),
        Err(err) => eprintln!("metrics serialization failed: {err}"),
    }
    Ok(())
}
