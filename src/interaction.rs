//! Gesture interpretation for a single shape.
//!
//! A gesture is `begin` → zero or more `moved` → `end`, delivered as plain
//! method calls with canvas-space positions. What the gesture means is
//! decided entirely by the [`ToolMode`] in the [`InteractionContext`] passed
//! alongside each event.

use egui::{Pos2, Rect, Vec2, pos2, vec2};
use log::debug;

use crate::shape::Shape;
use crate::tool::{InteractionContext, ToolMode};

/// Thickness of the resize hit zone along each edge of the frame.
pub const EDGE_MARGIN: f32 = 30.0;

/// Corner of the frame a resize gesture is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomRight,
    BottomLeft,
    /// Not within the margin of two adjacent edges; resize falls back to
    /// dragging the whole frame.
    #[default]
    None,
}

impl Corner {
    /// Classify a touch point in the frame's local space against the edge
    /// margin. Checked in a fixed order (top-left, top-right, bottom-right,
    /// bottom-left), so a frame smaller than twice the margin resolves ties
    /// toward the earlier corners.
    pub fn classify(local: Pos2, size: Vec2, margin: f32) -> Self {
        if local.y < margin && local.x < margin {
            Corner::TopLeft
        } else if local.y < margin && size.x - margin < local.x {
            Corner::TopRight
        } else if size.y - margin < local.y && size.x - margin < local.x {
            Corner::BottomRight
        } else if size.y - margin < local.y && local.x < margin {
            Corner::BottomLeft
        } else {
            Corner::None
        }
    }
}

/// What `begin` did to the shape.
#[must_use]
#[derive(Debug)]
pub enum GestureStart {
    /// Trash mode: the shape must be removed from the display list. There is
    /// no session; later events for this gesture are meaningless.
    Deleted,
    /// A live session tracking the rest of the gesture.
    Tracking(Gesture),
}

/// Transient per-gesture scratch state for one shape.
///
/// Created by [`Gesture::begin`], consumed by [`Gesture::end`]. Nothing here
/// survives the gesture; the durable outcome lives on the [`Shape`] itself.
#[derive(Debug, Clone)]
pub struct Gesture {
    /// Shape center when the gesture began; translation anchor.
    anchor_center: Pos2,
    /// Canvas-space press position; total displacement is measured from it.
    press_pos: Pos2,
    /// Press position in the frame's unrotated local space.
    touch_start_local: Pos2,
    /// Corner classified at `begin` (resize mode only).
    corner: Corner,
    /// Bearing from center to the press position, degrees (rotate mode only).
    start_bearing: f32,
    /// Committed rotation when the gesture began.
    rotation_at_begin: f32,
    /// Canvas-space position of the previous event; only resize reads it,
    /// for its incremental deltas.
    last_pos: Pos2,
}

impl Gesture {
    /// Interpret a touch landing on `shape`.
    ///
    /// Trash deletes immediately and produces no session. Colour applies the
    /// active colour once, right here; the session it returns ignores drags.
    pub fn begin(shape: &mut Shape, ctx: &InteractionContext, pos: Pos2) -> GestureStart {
        if ctx.mode == ToolMode::Trash {
            debug!("trash touch: deleting {} {}", shape.kind().name(), shape.id());
            return GestureStart::Deleted;
        }

        if ctx.mode == ToolMode::Colour {
            shape.set_fill(ctx.colour);
        }

        let rect = shape.rect();
        // Local space undoes the committed rotation first: corner zones and
        // resize deltas belong to the unrotated frame, never the rotated
        // screen frame.
        let local = shape.to_local(pos) - rect.min.to_vec2();
        let mut gesture = Self {
            anchor_center: rect.center(),
            press_pos: pos,
            touch_start_local: local,
            corner: Corner::None,
            start_bearing: 0.0,
            rotation_at_begin: shape.rotation(),
            last_pos: pos,
        };

        match ctx.mode {
            ToolMode::Resize => {
                gesture.corner = Corner::classify(local, rect.size(), EDGE_MARGIN);
                debug!(
                    "resize touch on {} at local {local:?}: {:?}",
                    shape.id(),
                    gesture.corner
                );
            }
            ToolMode::Rotate => {
                gesture.start_bearing = bearing(gesture.anchor_center, pos);
            }
            _ => {}
        }

        GestureStart::Tracking(gesture)
    }

    /// Interpret a drag continuation, dispatched purely on the tool mode.
    pub fn moved(&mut self, shape: &mut Shape, ctx: &InteractionContext, pos: Pos2) {
        match ctx.mode {
            // Direct translation from total displacement since `begin`, so
            // the result is independent of how many events the drag arrived
            // in.
            ToolMode::Move | ToolMode::Add => {
                let translation = pos - self.press_pos;
                shape.set_center(self.anchor_center + translation);
            }
            ToolMode::Resize => {
                self.resize(shape, pos);
                self.last_pos = pos;
            }
            ToolMode::Rotate => {
                let delta = bearing(self.anchor_center, pos) - self.start_bearing;
                shape.set_rotation(self.rotation_at_begin - delta.to_radians());
            }
            // Colour and trash acted at `begin`; none has nothing to do.
            _ => {}
        }
    }

    /// Finish the gesture. The rotation applied by the last `moved` call is
    /// the committed value; everything else here is transient and dropped.
    pub fn end(self, shape: &Shape, ctx: &InteractionContext) {
        if ctx.mode == ToolMode::Rotate {
            debug!(
                "rotate gesture on {} committed at {:.3} rad",
                shape.id(),
                shape.rotation()
            );
        }
    }

    fn resize(&self, shape: &mut Shape, pos: Pos2) {
        let rect = shape.rect();
        let (x, y) = (rect.min.x, rect.min.y);
        let (w, h) = (rect.width(), rect.height());
        // Incremental per-event delta in the unrotated frame; splitting a
        // drag into more events applies the same total.
        let delta = shape.to_local(pos) - shape.to_local(self.last_pos);

        let new_rect = match self.corner {
            Corner::TopLeft => Rect::from_min_size(
                pos2(x + delta.x, y + delta.y),
                vec2(w - delta.x, h - delta.y),
            ),
            Corner::TopRight => {
                Rect::from_min_size(pos2(x, y + delta.y), vec2(w + delta.x, h - delta.y))
            }
            Corner::BottomRight => {
                Rect::from_min_size(pos2(x, y), vec2(w + delta.x, h + delta.y))
            }
            Corner::BottomLeft => {
                Rect::from_min_size(pos2(x + delta.x, y), vec2(w - delta.x, h + delta.y))
            }
            Corner::None => {
                // Graceful fallback: not anchored to a corner, so chase the
                // pointer by however far it has strayed from where it first
                // landed in the frame.
                let local = shape.to_local(pos) - rect.min.to_vec2();
                let center = rect.center() + (local - self.touch_start_local);
                shape.set_center(center);
                return;
            }
        };
        shape.set_rect(new_rect);
    }
}

/// Clockwise bearing in degrees from `center` to `point`.
///
/// `atan2` output is folded so the scale runs 0–360 clockwise; gesture-start
/// and live bearings go through the same fold, so their difference is what
/// matters, not the absolute value.
pub fn bearing(center: Pos2, point: Pos2) -> f32 {
    let delta = point - center;
    let raw = delta.y.atan2(delta.x).to_degrees();
    if raw < 0.0 { -raw } else { 360.0 - raw }
}
