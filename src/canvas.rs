use std::sync::atomic::{AtomicUsize, Ordering};

use egui::{Pos2, Rect};
use log::{debug, info};

use crate::interaction::{Gesture, GestureStart};
use crate::shape::{Shape, ShapeKind};
use crate::tool::InteractionContext;

/// Frame a freshly added shape spawns with.
pub const SPAWN_RECT: Rect = Rect {
    min: Pos2::new(150.0, 300.0),
    max: Pos2::new(250.0, 400.0),
};

// Single static counter for all shapes
static NEXT_SHAPE_ID: AtomicUsize = AtomicUsize::new(1);

fn next_shape_id() -> usize {
    NEXT_SHAPE_ID.fetch_add(1, Ordering::SeqCst)
}

struct ActiveGesture {
    shape_id: usize,
    gesture: Gesture,
}

/// Ordered display list of shapes plus the one live gesture session.
///
/// Shapes are painted front to back in vector order; the last entry is
/// topmost. A single pointer means at most one gesture at a time, and a
/// press brings the hit shape to the front before the session starts.
#[derive(Default)]
pub struct Canvas {
    shapes: Vec<Shape>,
    session: Option<ActiveGesture>,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shapes in paint order.
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn shape(&self, id: usize) -> Option<&Shape> {
        self.shapes.iter().find(|s| s.id() == id)
    }

    /// Id of the shape with a gesture in flight, if any.
    pub fn active_shape(&self) -> Option<usize> {
        self.session.as_ref().map(|s| s.shape_id)
    }

    /// Place a new shape at the spawn frame, filled with the active colour.
    pub fn spawn_shape(&mut self, kind: ShapeKind, ctx: &InteractionContext) -> usize {
        self.add_shape(kind, SPAWN_RECT, ctx)
    }

    pub fn add_shape(&mut self, kind: ShapeKind, rect: Rect, ctx: &InteractionContext) -> usize {
        let id = next_shape_id();
        info!("adding {} {id} at {rect:?}", kind.name());
        self.shapes.push(Shape::new(id, kind, rect, ctx.colour));
        id
    }

    pub fn remove(&mut self, id: usize) -> bool {
        let before = self.shapes.len();
        self.shapes.retain(|s| s.id() != id);
        if self.session.as_ref().is_some_and(|s| s.shape_id == id) {
            self.session = None;
        }
        before != self.shapes.len()
    }

    /// Empty the display list. The caller obtains confirmation first; this
    /// does not ask.
    pub fn clear_all(&mut self) {
        info!("clearing canvas ({} shapes)", self.shapes.len());
        self.shapes.clear();
        self.session = None;
    }

    pub fn bring_to_front(&mut self, id: usize) {
        if let Some(index) = self.shapes.iter().position(|s| s.id() == id) {
            let shape = self.shapes.remove(index);
            self.shapes.push(shape);
        }
    }

    /// Topmost shape under `pos`, in reverse paint order.
    pub fn topmost_at(&self, pos: Pos2) -> Option<usize> {
        self.shapes
            .iter()
            .rev()
            .find(|s| s.hit_test(pos))
            .map(|s| s.id())
    }

    /// Route a press to the shape under `pos`. Returns whether a shape was
    /// hit. A press replaces any session left dangling by a lost release.
    pub fn pointer_pressed(&mut self, ctx: &InteractionContext, pos: Pos2) -> bool {
        let Some(id) = self.topmost_at(pos) else {
            return false;
        };
        self.bring_to_front(id);
        self.session = None;

        // Just moved to the back of the vector.
        let Some(shape) = self.shapes.last_mut() else {
            return false;
        };
        match Gesture::begin(shape, ctx, pos) {
            GestureStart::Deleted => {
                self.remove(id);
            }
            GestureStart::Tracking(gesture) => {
                self.session = Some(ActiveGesture {
                    shape_id: id,
                    gesture,
                });
            }
        }
        true
    }

    /// Route a drag continuation to the session's shape. A move with no live
    /// session (e.g. after a trash deletion) is a no-op.
    pub fn pointer_moved(&mut self, ctx: &InteractionContext, pos: Pos2) {
        let Some(active) = self.session.as_mut() else {
            return;
        };
        let Some(shape) = self.shapes.iter_mut().find(|s| s.id() == active.shape_id) else {
            debug!("dropping session for vanished shape {}", active.shape_id);
            self.session = None;
            return;
        };
        active.gesture.moved(shape, ctx, pos);
    }

    /// Finish the live gesture, committing whatever it applied.
    pub fn pointer_released(&mut self, ctx: &InteractionContext) {
        let Some(active) = self.session.take() else {
            return;
        };
        if let Some(shape) = self.shapes.iter().find(|s| s.id() == active.shape_id) {
            active.gesture.end(shape, ctx);
        }
    }
}
