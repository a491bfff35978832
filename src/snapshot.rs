//! Render-to-bitmap and the "abstract" filter applied on finalize.
//!
//! The interactive canvas is rasterized in software so the filter stays a
//! pure `image -> image` transform with no GPU readback involved.

use egui::{Color32, Rect, pos2};
use image::{Rgba, RgbaImage};
use log::info;
use thiserror::Error;

use crate::canvas::Canvas;

/// Cell radius of the pointillize filter, matching the original's
/// `inputRadius` of 15.
pub const ABSTRACT_RADIUS: u32 = 15;

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("canvas viewport has no area: {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
}

/// Rasterize the display list onto a white ground, in paint order.
///
/// `viewport` is the canvas region in the same coordinate space the shapes
/// live in; one pixel per point.
pub fn render_canvas(canvas: &Canvas, viewport: Rect) -> Result<RgbaImage, SnapshotError> {
    let width = viewport.width().max(0.0) as u32;
    let height = viewport.height().max(0.0) as u32;
    if width == 0 || height == 0 {
        return Err(SnapshotError::EmptyViewport { width, height });
    }

    let mut img = RgbaImage::from_pixel(width, height, WHITE);
    for shape in canvas.shapes() {
        let bounds = shape.paint_bounds();
        let x0 = (bounds.min.x - viewport.min.x).floor().max(0.0) as u32;
        let y0 = (bounds.min.y - viewport.min.y).floor().max(0.0) as u32;
        let x1 = ((bounds.max.x - viewport.min.x).ceil().max(0.0) as u32).min(width);
        let y1 = ((bounds.max.y - viewport.min.y).ceil().max(0.0) as u32).min(height);

        let fill = to_rgba(shape.fill());
        for y in y0..y1 {
            for x in x0..x1 {
                let sample = pos2(
                    viewport.min.x + x as f32 + 0.5,
                    viewport.min.y + y as f32 + 0.5,
                );
                if shape.hit_test(sample) {
                    img.put_pixel(x, y, fill);
                }
            }
        }
    }
    Ok(img)
}

/// Pointillize-style abstraction: average each `radius`-sized cell of the
/// source and stamp a disc of the averaged colour on a white ground.
pub fn abstract_image(src: &RgbaImage, radius: u32) -> RgbaImage {
    let radius = radius.max(1);
    let (width, height) = src.dimensions();
    let mut out = RgbaImage::from_pixel(width, height, WHITE);

    for cell_y in (0..height).step_by(radius as usize) {
        for cell_x in (0..width).step_by(radius as usize) {
            let cell_w = radius.min(width - cell_x);
            let cell_h = radius.min(height - cell_y);

            let mut sum = [0u64; 4];
            for y in cell_y..cell_y + cell_h {
                for x in cell_x..cell_x + cell_w {
                    let px = src.get_pixel(x, y).0;
                    for (acc, channel) in sum.iter_mut().zip(px) {
                        *acc += u64::from(channel);
                    }
                }
            }
            let count = u64::from(cell_w) * u64::from(cell_h);
            let avg = Rgba(sum.map(|channel| (channel / count) as u8));

            stamp_disc(&mut out, cell_x, cell_y, cell_w, cell_h, avg);
        }
    }
    out
}

/// Render the canvas and run the filter in one step, the way the "ready"
/// action finalizes a composition.
pub fn abstracted(canvas: &Canvas, viewport: Rect) -> Result<RgbaImage, SnapshotError> {
    info!(
        "abstracting {} shapes over {:?}",
        canvas.len(),
        viewport.size()
    );
    let rendered = render_canvas(canvas, viewport)?;
    Ok(abstract_image(&rendered, ABSTRACT_RADIUS))
}

fn stamp_disc(img: &mut RgbaImage, x0: u32, y0: u32, w: u32, h: u32, colour: Rgba<u8>) {
    let cx = x0 as f32 + w as f32 / 2.0;
    let cy = y0 as f32 + h as f32 / 2.0;
    let r = (w.min(h) as f32) / 2.0;
    for y in y0..y0 + h {
        for x in x0..x0 + w {
            let dx = x as f32 + 0.5 - cx;
            let dy = y as f32 + 0.5 - cy;
            if dx * dx + dy * dy <= r * r {
                img.put_pixel(x, y, colour);
            }
        }
    }
}

fn to_rgba(colour: Color32) -> Rgba<u8> {
    Rgba([colour.r(), colour.g(), colour.b(), colour.a()])
}
