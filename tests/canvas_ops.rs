use abstract_canvas::canvas::{Canvas, SPAWN_RECT};
use abstract_canvas::shape::ShapeKind;
use abstract_canvas::tool::{InteractionContext, ToolMode};
use egui::{Color32, Rect, pos2, vec2};

fn context(mode: ToolMode) -> InteractionContext {
    InteractionContext {
        mode,
        colour: Color32::GRAY,
    }
}

#[test]
fn spawned_shapes_take_the_active_colour_and_frame() {
    let mut canvas = Canvas::new();
    let mut ctx = context(ToolMode::Add);
    ctx.set_active_colour(Color32::GREEN);

    let id = canvas.spawn_shape(ShapeKind::Triangle, &ctx);
    let shape = canvas.shape(id).expect("spawned shape is on the canvas");
    assert_eq!(shape.kind(), ShapeKind::Triangle);
    assert_eq!(shape.rect(), SPAWN_RECT);
    assert_eq!(shape.fill(), Color32::GREEN);
    assert_eq!(shape.rotation(), 0.0);
}

#[test]
fn topmost_wins_the_hit_test() {
    let mut canvas = Canvas::new();
    let ctx = context(ToolMode::None);
    let rect = Rect::from_min_size(pos2(100.0, 100.0), vec2(100.0, 100.0));

    let below = canvas.add_shape(ShapeKind::Square, rect, &ctx);
    let above = canvas.add_shape(ShapeKind::Square, rect, &ctx);

    assert_eq!(canvas.topmost_at(pos2(150.0, 150.0)), Some(above));

    canvas.bring_to_front(below);
    assert_eq!(canvas.topmost_at(pos2(150.0, 150.0)), Some(below));
}

#[test]
fn press_brings_the_hit_shape_to_front() {
    let mut canvas = Canvas::new();
    let ctx = context(ToolMode::Move);

    let left = canvas.add_shape(
        ShapeKind::Square,
        Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0)),
        &ctx,
    );
    let _right = canvas.add_shape(
        ShapeKind::Square,
        Rect::from_min_size(pos2(200.0, 0.0), vec2(100.0, 100.0)),
        &ctx,
    );

    assert!(canvas.pointer_pressed(&ctx, pos2(50.0, 50.0)));
    assert_eq!(canvas.shapes().last().map(|s| s.id()), Some(left));
    assert_eq!(canvas.active_shape(), Some(left));

    canvas.pointer_released(&ctx);
    assert_eq!(canvas.active_shape(), None);
}

#[test]
fn press_on_empty_canvas_is_ignored() {
    let mut canvas = Canvas::new();
    let ctx = context(ToolMode::Move);
    assert!(!canvas.pointer_pressed(&ctx, pos2(10.0, 10.0)));
    assert_eq!(canvas.active_shape(), None);
}

#[test]
fn drag_through_the_canvas_moves_the_shape() {
    let mut canvas = Canvas::new();
    let ctx = context(ToolMode::Move);
    let id = canvas.add_shape(
        ShapeKind::Circle,
        Rect::from_min_size(pos2(100.0, 100.0), vec2(100.0, 100.0)),
        &ctx,
    );

    assert!(canvas.pointer_pressed(&ctx, pos2(150.0, 150.0)));
    canvas.pointer_moved(&ctx, pos2(180.0, 170.0));
    canvas.pointer_released(&ctx);

    let shape = canvas.shape(id).expect("shape survives a move");
    assert_eq!(shape.center(), pos2(180.0, 170.0));
}

#[test]
fn trash_press_removes_immediately_and_later_events_are_noops() {
    let mut canvas = Canvas::new();
    let ctx = context(ToolMode::Trash);
    let id = canvas.add_shape(
        ShapeKind::Square,
        Rect::from_min_size(pos2(100.0, 100.0), vec2(50.0, 50.0)),
        &ctx,
    );

    assert!(canvas.pointer_pressed(&ctx, pos2(110.0, 110.0)));
    assert!(canvas.is_empty());
    assert!(canvas.shape(id).is_none());

    // The platform still delivers the rest of the gesture; nothing happens.
    canvas.pointer_moved(&ctx, pos2(140.0, 140.0));
    canvas.pointer_released(&ctx);
    assert!(canvas.is_empty());
}

#[test]
fn stray_events_without_a_session_are_noops() {
    let mut canvas = Canvas::new();
    let ctx = context(ToolMode::Move);
    let id = canvas.add_shape(
        ShapeKind::Square,
        Rect::from_min_size(pos2(100.0, 100.0), vec2(50.0, 50.0)),
        &ctx,
    );
    let before = canvas.shape(id).map(|s| s.rect());

    canvas.pointer_moved(&ctx, pos2(500.0, 500.0));
    canvas.pointer_released(&ctx);

    assert_eq!(canvas.shape(id).map(|s| s.rect()), before);
}

#[test]
fn clear_all_empties_the_display_list() {
    let mut canvas = Canvas::new();
    let ctx = context(ToolMode::Add);
    canvas.spawn_shape(ShapeKind::Square, &ctx);
    canvas.spawn_shape(ShapeKind::Circle, &ctx);
    canvas.spawn_shape(ShapeKind::Triangle, &ctx);
    assert_eq!(canvas.len(), 3);

    canvas.clear_all();
    assert!(canvas.is_empty());
    assert_eq!(canvas.active_shape(), None);
}

#[test]
fn ids_are_unique_across_shapes() {
    let mut canvas = Canvas::new();
    let ctx = context(ToolMode::Add);
    let a = canvas.spawn_shape(ShapeKind::Square, &ctx);
    let b = canvas.spawn_shape(ShapeKind::Square, &ctx);
    assert_ne!(a, b);
}
