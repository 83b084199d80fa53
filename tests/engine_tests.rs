//! Integration tests for container discovery, layout passes, and resize
//! handling.

use std::time::Instant;

use cardwall::constants::ITEM_CLASS;
use cardwall::document::PositionMode;
use cardwall::Engine;

mod fixtures;
use fixtures::*;

#[test]
fn test_scan_lays_out_oracle_scene() {
    let scene = scene_from_json(&oracle_scene_json());
    let mut doc = scene.build_document();
    let mut engine = Engine::new();
    let handles = engine.scan(&mut doc);

    assert_eq!(handles.len(), 1);
    let grid = engine.grid(handles[0]).expect("bound grid");
    let items = doc.descendants_with_class(grid, ITEM_CLASS);
    assert_eq!(items.len(), 7);

    // Greedy shortest-column reference: columns [0,1,2,1,1,2,0],
    // tops [0,0,0,50,80,80,100], totals [160,200,120].
    let expected = [
        (0.0, 0.0),
        (100.0 / 3.0, 0.0),
        (200.0 / 3.0, 0.0),
        (100.0 / 3.0, 50.0),
        (100.0 / 3.0, 80.0),
        (200.0 / 3.0, 80.0),
        (0.0, 100.0),
    ];
    for (&item, &(left, top)) in items.iter().zip(&expected) {
        let style = doc.style(item);
        assert_eq!(style.position, PositionMode::Absolute);
        assert_eq!(style.left_pct, Some(left));
        assert_eq!(style.top_px, Some(top));
        assert_eq!(style.width_pct, Some(100.0 / 3.0));
    }

    let grid_style = doc.style(grid);
    assert_eq!(grid_style.position, PositionMode::Relative);
    assert_eq!(grid_style.height_px, Some(200.0));
}

#[test]
fn test_balance_apply_is_idempotent() {
    let scene = scene_from_json(&oracle_scene_json());
    let mut doc = scene.build_document();
    let mut engine = Engine::new();
    let handles = engine.scan(&mut doc);
    let grid = engine.grid(handles[0]).expect("bound grid");

    let items = doc.descendants_with_class(grid, ITEM_CLASS);
    let first_pass: Vec<_> = items.iter().map(|&item| doc.style(item).clone()).collect();
    let first_grid = doc.style(grid).clone();

    engine.relayout_all(&mut doc);

    let second_pass: Vec<_> = items.iter().map(|&item| doc.style(item).clone()).collect();
    assert_eq!(first_pass, second_pass);
    assert_eq!(&first_grid, doc.style(grid));
}

#[test]
fn test_resize_switches_tier_on_tick() {
    let scene = scene_from_json(&oracle_scene_json());
    let mut doc = scene.build_document();
    let mut engine = Engine::new();
    let handles = engine.scan(&mut doc);
    let grid = engine.grid(handles[0]).expect("bound grid");

    // Widen into the xlarge tier (defaulted 4 columns). Nothing changes
    // before the tick runs the coalesced frame.
    doc.set_viewport_width(1440.0);
    engine.handle_resize();
    engine.handle_resize();
    let items = doc.descendants_with_class(grid, ITEM_CLASS);
    assert_eq!(doc.style(items[0]).width_pct, Some(100.0 / 3.0));

    engine.tick(&mut doc, Instant::now());
    for &item in &items {
        assert_eq!(doc.style(item).width_pct, Some(25.0));
    }
    // 4 columns over [100,50,80,30,120,40,60]: the fourth column takes
    // 30 + 120 and ends tallest at 150.
    assert_eq!(doc.style(grid).height_px, Some(150.0));
}

#[test]
fn test_disposed_container_stops_relayouting() {
    let scene = scene_from_json(&oracle_scene_json());
    let mut doc = scene.build_document();
    let mut engine = Engine::new();
    let handles = engine.scan(&mut doc);
    let grid = engine.grid(handles[0]).expect("bound grid");

    assert!(engine.dispose(handles[0]));
    doc.set_viewport_width(320.0);
    engine.handle_resize();
    engine.tick(&mut doc, Instant::now());

    // Still the 3-column desktop layout from before the dispose.
    assert_eq!(doc.style(grid).height_px, Some(200.0));
}

#[test]
fn test_layout_only_scene_has_no_triggers() {
    let scene = scene_from_json(&layout_only_scene_json());
    let mut doc = scene.build_document();
    let mut engine = Engine::new();
    let handles = engine.scan(&mut doc);

    assert_eq!(handles.len(), 1);
    assert_eq!(engine.triggers(handles[0]), Some(&[][..]));
    assert!(engine.find_trigger(&doc, "*").is_none());

    // Layout still ran: 600 px is the tablet tier, 2 default columns.
    let grid = engine.grid(handles[0]).expect("bound grid");
    assert_eq!(doc.style(grid).height_px, Some(130.0));
}

#[test]
fn test_items_added_between_passes_are_picked_up() {
    let scene = scene_from_json(&layout_only_scene_json());
    let mut doc = scene.build_document();
    let mut engine = Engine::new();
    let handles = engine.scan(&mut doc);
    let grid = engine.grid(handles[0]).expect("bound grid");

    // Append a card after the initial pass; no re-scan needed.
    let late = doc.create_element(grid);
    doc.add_class(late, ITEM_CLASS);
    doc.set_content_height(late, 200.0);

    engine.handle_resize();
    engine.tick(&mut doc, Instant::now());

    let style = doc.style(late);
    assert_eq!(style.position, PositionMode::Absolute);
    // The two tablet columns measured [100, 130] before; the late card
    // extends the shorter first column.
    assert_eq!(style.left_pct, Some(0.0));
    assert_eq!(style.top_px, Some(100.0));
    assert_eq!(doc.style(grid).height_px, Some(300.0));
}
