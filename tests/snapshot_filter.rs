use abstract_canvas::canvas::Canvas;
use abstract_canvas::shape::ShapeKind;
use abstract_canvas::snapshot::{self, SnapshotError};
use abstract_canvas::tool::{InteractionContext, ToolMode};
use egui::{Color32, Rect, pos2, vec2};
use image::{Rgba, RgbaImage};

fn context() -> InteractionContext {
    InteractionContext {
        mode: ToolMode::Add,
        colour: Color32::RED,
    }
}

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const RED: Rgba<u8> = Rgba([255, 0, 0, 255]);

#[test]
fn rendering_paints_shapes_on_a_white_ground() {
    let mut canvas = Canvas::new();
    canvas.add_shape(
        ShapeKind::Square,
        Rect::from_min_size(pos2(10.0, 10.0), vec2(20.0, 20.0)),
        &context(),
    );

    let viewport = Rect::from_min_size(pos2(0.0, 0.0), vec2(50.0, 50.0));
    let img = snapshot::render_canvas(&canvas, viewport).expect("non-empty viewport");

    assert_eq!(img.dimensions(), (50, 50));
    assert_eq!(*img.get_pixel(20, 20), RED);
    assert_eq!(*img.get_pixel(5, 5), WHITE);
    assert_eq!(*img.get_pixel(45, 45), WHITE);
}

#[test]
fn rendering_respects_paint_order() {
    let mut canvas = Canvas::new();
    let mut ctx = context();
    canvas.add_shape(
        ShapeKind::Square,
        Rect::from_min_size(pos2(10.0, 10.0), vec2(20.0, 20.0)),
        &ctx,
    );
    ctx.colour = Color32::BLUE;
    canvas.add_shape(
        ShapeKind::Square,
        Rect::from_min_size(pos2(10.0, 10.0), vec2(20.0, 20.0)),
        &ctx,
    );

    let viewport = Rect::from_min_size(pos2(0.0, 0.0), vec2(50.0, 50.0));
    let img = snapshot::render_canvas(&canvas, viewport).expect("non-empty viewport");
    assert_eq!(*img.get_pixel(20, 20), Rgba([0, 0, 255, 255]));
}

#[test]
fn rendering_offsets_by_the_viewport_origin() {
    let mut canvas = Canvas::new();
    canvas.add_shape(
        ShapeKind::Square,
        Rect::from_min_size(pos2(110.0, 110.0), vec2(20.0, 20.0)),
        &context(),
    );

    let viewport = Rect::from_min_size(pos2(100.0, 100.0), vec2(50.0, 50.0));
    let img = snapshot::render_canvas(&canvas, viewport).expect("non-empty viewport");
    assert_eq!(*img.get_pixel(20, 20), RED);
    assert_eq!(*img.get_pixel(5, 5), WHITE);
}

#[test]
fn circle_discs_overflow_a_squashed_frame_in_snapshots() {
    let mut canvas = Canvas::new();
    canvas.add_shape(
        ShapeKind::Circle,
        Rect::from_min_size(pos2(20.0, 40.0), vec2(60.0, 20.0)),
        &context(),
    );

    let viewport = Rect::from_min_size(pos2(0.0, 0.0), vec2(100.0, 100.0));
    let img = snapshot::render_canvas(&canvas, viewport).expect("non-empty viewport");
    // The disc radius is width/2 = 30 about the frame center (50,50),
    // matching what the painter draws below the 20-unit-tall frame.
    assert_eq!(*img.get_pixel(50, 70), RED);
    assert_eq!(*img.get_pixel(50, 85), WHITE);
}

#[test]
fn empty_viewport_is_an_error() {
    let canvas = Canvas::new();
    let viewport = Rect::from_min_size(pos2(0.0, 0.0), vec2(0.0, 120.0));
    assert!(matches!(
        snapshot::render_canvas(&canvas, viewport),
        Err(SnapshotError::EmptyViewport { .. })
    ));
}

#[test]
fn filter_stamps_cell_averaged_discs() {
    let src = RgbaImage::from_pixel(60, 60, RED);
    let out = snapshot::abstract_image(&src, 15);

    assert_eq!(out.dimensions(), (60, 60));
    // Cell centers carry the averaged colour; cell corners stay white.
    assert_eq!(*out.get_pixel(7, 7), RED);
    assert_eq!(*out.get_pixel(22, 22), RED);
    assert_eq!(*out.get_pixel(0, 0), WHITE);
    assert_eq!(*out.get_pixel(14, 14), WHITE);
}

#[test]
fn filter_averages_within_each_cell() {
    // Left half black, right half white, one 10-pixel cell across: the disc
    // lands mid-gray.
    let mut src = RgbaImage::from_pixel(10, 10, WHITE);
    for y in 0..10 {
        for x in 0..5 {
            src.put_pixel(x, y, Rgba([0, 0, 0, 255]));
        }
    }
    let out = snapshot::abstract_image(&src, 10);
    let Rgba([r, g, b, a]) = *out.get_pixel(5, 5);
    assert_eq!((r, g, b), (127, 127, 127));
    assert_eq!(a, 255);
}

#[test]
fn filter_survives_a_degenerate_radius() {
    let src = RgbaImage::from_pixel(4, 4, RED);
    let out = snapshot::abstract_image(&src, 0);
    assert_eq!(out.dimensions(), (4, 4));
}

#[test]
fn abstracted_composes_render_and_filter() {
    let mut canvas = Canvas::new();
    canvas.add_shape(
        ShapeKind::Square,
        Rect::from_min_size(pos2(0.0, 0.0), vec2(60.0, 60.0)),
        &context(),
    );

    let viewport = Rect::from_min_size(pos2(0.0, 0.0), vec2(60.0, 60.0));
    let out = snapshot::abstracted(&canvas, viewport).expect("non-empty viewport");
    // Fully covered by a red square, so every disc is red.
    assert_eq!(*out.get_pixel(7, 7), RED);
    assert_eq!(*out.get_pixel(0, 0), WHITE);
}
