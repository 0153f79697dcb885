//! Integration tests for FloatingSurface
//!
//! These tests verify full surface workflows including:
//! - Drag and resize gestures driven through pointer events
//! - Size clamping and the fixed-opposite-edge invariant
//! - Geometry persistence across controller lifetimes
//! - Gesture mode exclusivity under out-of-order pointer events

use vitrine_surface::{
    FloatingSurface, Geometry, GeometryStore, GestureMode, MemoryStore, ResizeEdge, Size,
    SurfaceConfig, Vec2,
};

fn popup_config() -> SurfaceConfig {
    SurfaceConfig {
        initial_position: Vec2::new(984.0, 16.0),
        initial_size: Size::new(320.0, 400.0),
        min_size: Size::new(280.0, 300.0),
        max_size: Size::new(600.0, 800.0),
        storage_key: "chatPopup".to_string(),
    }
}

// =============================================================================
// Gesture Workflow Tests
// =============================================================================

#[test]
fn test_drag_workflow_survives_missed_events() {
    let mut surface = FloatingSurface::new(
        SurfaceConfig {
            initial_position: Vec2::new(10.0, 10.0),
            storage_key: "chatOverlay".to_string(),
            ..SurfaceConfig::default()
        },
        MemoryStore::new(),
    );

    surface.pointer_down_drag_handle(Vec2::new(50.0, 50.0));

    // A dense pointer trail...
    for i in 1..=15 {
        let t = i as f32 * 10.0;
        surface.pointer_move(Vec2::new(50.0 + t, 50.0 + t));
    }
    let dense = surface.geometry().position;
    surface.pointer_up();

    // ...lands exactly where a single jump to the end position does
    surface.pointer_down_drag_handle(Vec2::new(200.0, 200.0));
    surface.pointer_move(Vec2::new(200.0, 200.0));
    surface.pointer_up();
    let sparse = surface.geometry().position;

    assert!((dense.x - 160.0).abs() < 0.001);
    assert!((dense.y - 160.0).abs() < 0.001);
    assert_eq!(dense, sparse);
}

#[test]
fn test_resize_clamp_invariant_holds_everywhere() {
    let config = popup_config();
    let min = config.min_size;
    let max = config.max_size;
    let mut surface = FloatingSurface::new(config, MemoryStore::new());

    // Sweep pointer positions well outside the sane range on every handle
    for edge in [
        ResizeEdge::N,
        ResizeEdge::S,
        ResizeEdge::E,
        ResizeEdge::W,
        ResizeEdge::NE,
        ResizeEdge::NW,
        ResizeEdge::SE,
        ResizeEdge::SW,
    ] {
        for x in [-3000.0, -100.0, 0.0, 1000.0, 4000.0] {
            for y in [-3000.0, 0.0, 500.0, 4000.0] {
                surface.pointer_down_resize_handle(edge, Vec2::new(1304.0, 416.0));
                surface.pointer_move(Vec2::new(x, y));
                surface.pointer_up();

                let size = surface.geometry().size;
                assert!(size.width >= min.width - 0.001 && size.width <= max.width + 0.001);
                assert!(size.height >= min.height - 0.001 && size.height <= max.height + 0.001);
            }
        }
    }
}

#[test]
fn test_west_resize_keeps_right_edge_fixed_under_clamping() {
    let mut surface = FloatingSurface::new(
        SurfaceConfig {
            initial_position: Vec2::new(100.0, 0.0),
            initial_size: Size::new(300.0, 200.0),
            min_size: Size::new(200.0, 150.0),
            max_size: Size::new(600.0, 800.0),
            storage_key: "chatOverlay".to_string(),
        },
        MemoryStore::new(),
    );

    // Original right edge at x = 100 + 300 = 400; it must never move while
    // the west handle is dragged, clamped or not
    for pointer_x in [-300.0, -200.0, 0.0, 150.0, 250.0, 450.0, 900.0] {
        surface.pointer_down_resize_handle(ResizeEdge::W, Vec2::new(100.0, 100.0));
        surface.pointer_move(Vec2::new(pointer_x, 100.0));
        surface.pointer_up();

        let g = surface.geometry();
        assert!(
            (g.position.x + g.size.width - 400.0).abs() < 0.001,
            "right edge drifted to {} for pointer x {}",
            g.position.x + g.size.width,
            pointer_x
        );

        // Put the surface back for the next sweep iteration
        surface.reset();
    }
}

#[test]
fn test_chat_popup_concrete_scenario() {
    let mut surface = FloatingSurface::new(popup_config(), MemoryStore::new());

    surface.pointer_down_resize_handle(ResizeEdge::SE, Vec2::new(1304.0, 416.0));
    surface.pointer_move(Vec2::new(1354.0, 466.0));

    let g = surface.geometry();
    assert!((g.size.width - 370.0).abs() < 0.001);
    assert!((g.size.height - 450.0).abs() < 0.001);
    assert!((g.position.x - 984.0).abs() < 0.001);
    assert!((g.position.y - 16.0).abs() < 0.001);
}

// =============================================================================
// Mode Exclusivity Tests
// =============================================================================

#[test]
fn test_mode_exclusivity_under_event_interleavings() {
    let mut surface = FloatingSurface::new(popup_config(), MemoryStore::new());

    let is_valid = |mode: GestureMode| {
        matches!(
            mode,
            GestureMode::Idle | GestureMode::Dragging | GestureMode::Resizing(_)
        )
    };

    // Out-of-order and duplicate events; the mode must stay well-defined
    // and single-valued throughout
    surface.pointer_up();
    assert!(is_valid(surface.mode()));
    assert_eq!(surface.mode(), GestureMode::Idle);

    surface.pointer_down_drag_handle(Vec2::new(1000.0, 30.0));
    assert_eq!(surface.mode(), GestureMode::Dragging);

    surface.pointer_down_resize_handle(ResizeEdge::NW, Vec2::new(984.0, 16.0));
    assert_eq!(surface.mode(), GestureMode::Dragging);

    surface.pointer_move(Vec2::new(1100.0, 100.0));
    assert_eq!(surface.mode(), GestureMode::Dragging);

    surface.pointer_up();
    surface.pointer_up();
    assert_eq!(surface.mode(), GestureMode::Idle);

    surface.pointer_down_resize_handle(ResizeEdge::E, Vec2::new(1400.0, 200.0));
    assert_eq!(surface.mode(), GestureMode::Resizing(ResizeEdge::E));

    surface.pointer_down_drag_handle(Vec2::new(1000.0, 30.0));
    assert_eq!(surface.mode(), GestureMode::Resizing(ResizeEdge::E));

    surface.pointer_up();
    assert_eq!(surface.mode(), GestureMode::Idle);
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_geometry_survives_controller_lifetime() {
    let mut store = MemoryStore::new();
    store.save(
        "chatPopup",
        &Geometry::new(Vec2::new(40.0, 60.0), Size::new(400.0, 500.0)),
    );

    // First session: restore, drag somewhere else
    let mut surface = FloatingSurface::new(popup_config(), store);
    assert!((surface.geometry().position.x - 40.0).abs() < 0.001);

    surface.pointer_down_drag_handle(Vec2::new(50.0, 70.0));
    surface.pointer_move(Vec2::new(250.0, 170.0));
    surface.pointer_up();
    let moved = surface.geometry();

    // Second session over the same backing store sees the move
    let surface = FloatingSurface::new(popup_config(), surface.into_store());
    assert_eq!(surface.geometry(), moved);
}

#[test]
fn test_reset_is_visible_to_the_next_session() {
    let mut surface = FloatingSurface::new(popup_config(), MemoryStore::new());

    surface.pointer_down_resize_handle(ResizeEdge::SE, Vec2::new(1304.0, 416.0));
    surface.pointer_move(Vec2::new(1500.0, 700.0));
    surface.pointer_up();
    surface.center(Size::new(1920.0, 1080.0));
    surface.reset();

    let defaults = Geometry::new(Vec2::new(984.0, 16.0), Size::new(320.0, 400.0));
    assert_eq!(surface.geometry(), defaults);

    let surface = FloatingSurface::new(popup_config(), surface.into_store());
    assert_eq!(surface.geometry(), defaults);
}

#[test]
fn test_corrupt_persisted_value_falls_back_to_defaults() {
    let mut store = MemoryStore::new();
    store.set_raw("chatPopup", "{\"version\":1,\"geometry\":oops").unwrap();

    let surface = FloatingSurface::new(popup_config(), store);
    assert_eq!(
        surface.geometry(),
        Geometry::new(Vec2::new(984.0, 16.0), Size::new(320.0, 400.0))
    );
}

#[test]
fn test_two_surfaces_use_independent_keys() {
    let mut store = MemoryStore::new();
    store.save(
        "chatPopup",
        &Geometry::new(Vec2::new(1.0, 2.0), Size::new(300.0, 350.0)),
    );
    store.save(
        "chatOverlay",
        &Geometry::new(Vec2::new(700.0, 80.0), Size::new(500.0, 600.0)),
    );

    let popup = FloatingSurface::new(popup_config(), store);
    assert!((popup.geometry().position.x - 1.0).abs() < 0.001);

    let overlay = FloatingSurface::new(
        SurfaceConfig {
            storage_key: "chatOverlay".to_string(),
            max_size: Size::new(800.0, 900.0),
            ..popup_config()
        },
        popup.into_store(),
    );
    assert!((overlay.geometry().position.x - 700.0).abs() < 0.001);
    assert!((overlay.geometry().size.width - 500.0).abs() < 0.001);
}
