use criterion::{Criterion, black_box, criterion_group, criterion_main};

use canvas_mvp::{
    BuilderSession, Catalog, CatalogEntry, GridDims, PlacementGrid, SessionConfig, Span,
    starter_catalog,
};

fn unit_entry() -> CatalogEntry {
    CatalogEntry {
        id: "unit".to_string(),
        title: "Unit".to_string(),
        description: String::new(),
        span: Span::new(1, 1),
        html: "<div class=\"p-4\">unit</div>".to_string(),
    }
}

fn placement_storm(c: &mut Criterion) {
    let entry = unit_entry();
    c.bench_function("placement_storm_12x12", |b| {
        b.iter(|| {
            let mut store = PlacementGrid::new(GridDims::new(12, 12));
            for r in 0..12 {
                for col in 0..12 {
                    store.place_item(black_box(&entry), r, col);
                }
            }
            black_box(store.items().len())
        });
    });
}

fn hover_sweep(c: &mut Criterion) {
    // Half-occupied board, then a full-grid feasibility sweep per frame:
    // the hot path behind continuous drag-hover feedback.
    let entry = unit_entry();
    let mut store = PlacementGrid::new(GridDims::new(12, 12));
    for r in 0..12 {
        for col in 0..12 {
            if (r + col) % 2 == 0 {
                store.place_item(&entry, r, col);
            }
        }
    }

    c.bench_function("hover_can_place_sweep", |b| {
        b.iter(|| {
            let mut feasible = 0u32;
            for r in 0..12 {
                for col in 0..12 {
                    if store.can_place(black_box(r), black_box(col), 2, 2, None) {
                        feasible += 1;
                    }
                }
            }
            black_box(feasible)
        });
    });
}

fn preview_render(c: &mut Criterion) {
    c.bench_function("preview_render_landing", |b| {
        b.iter(|| {
            let mut session =
                BuilderSession::with_config(starter_catalog(), SessionConfig::default());
            session
                .drop_component("header-simple", 0, 0)
                .expect("known component");
            session
                .drop_component("hero-centered", 1, 0)
                .expect("known component");
            session
                .drop_component("footer-simple", 3, 0)
                .expect("known component");
            black_box(session.preview().len())
        });
    });
}

fn scripted_session(c: &mut Criterion) {
    let catalog = Catalog::from_entries(vec![unit_entry()]).expect("valid span");
    c.bench_function("scripted_drag_session", |b| {
        b.iter(|| {
            let mut session = BuilderSession::new(catalog.clone());
            let id = session
                .drop_component("unit", 0, 0)
                .expect("known component")
                .expect("empty cell");
            for step in 0..16 {
                session.move_to(id, step % 4, (step * 3) % 4);
                session.preview();
            }
            session.resize_grid(2, 2);
            black_box(session.metrics_snapshot().moves)
        });
    });
}

criterion_group!(
    benches,
    placement_storm,
    hover_sweep,
    preview_render,
    scripted_session
);
criterion_main!(benches);
