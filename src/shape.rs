use egui::{Color32, Painter, Pos2, Rect, Stroke, Vec2, pos2, vec2};

/// Geometry variant of a placed shape. Fixed at creation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Square,
    Circle,
    Triangle,
}

impl ShapeKind {
    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::Circle => "circle",
            ShapeKind::Triangle => "triangle",
        }
    }
}

/// A placed figure on the canvas.
///
/// `rect` is the authoritative axis-aligned frame; circles and triangles are
/// inscribed in it. `rotation` is cumulative radians about the frame center
/// and affects the visual representation only: translation and resize always
/// operate on the unrotated frame.
///
/// The frame is deliberately not clamped when a resize drives a dimension
/// negative; readers normalize via [`Shape::normalized_rect`].
#[derive(Debug, Clone)]
pub struct Shape {
    id: usize,
    kind: ShapeKind,
    rect: Rect,
    rotation: f32,
    fill: Color32,
    // Derived from the frame width on every resize; circles only.
    corner_radius: f32,
}

impl Shape {
    pub fn new(id: usize, kind: ShapeKind, rect: Rect, fill: Color32) -> Self {
        let corner_radius = match kind {
            ShapeKind::Circle => rect.width() / 2.0,
            _ => 0.0,
        };
        Self {
            id,
            kind,
            rect,
            rotation: 0.0,
            fill,
            corner_radius,
        }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The raw frame, sign inversion and all.
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// The frame with any sign inversion from an overshot resize folded out.
    pub fn normalized_rect(&self) -> Rect {
        Rect::from_two_pos(self.rect.min, self.rect.max)
    }

    pub fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
        if self.kind == ShapeKind::Circle {
            self.corner_radius = rect.width() / 2.0;
        }
    }

    pub fn center(&self) -> Pos2 {
        self.rect.center()
    }

    /// Move the frame so its center lands on `center`, preserving size.
    pub fn set_center(&mut self, center: Pos2) {
        let delta = center - self.rect.center();
        self.rect = self.rect.translate(delta);
    }

    /// Committed rotation in radians (live value while a rotate gesture is
    /// in flight).
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn set_rotation(&mut self, radians: f32) {
        self.rotation = radians;
    }

    pub fn fill(&self) -> Color32 {
        self.fill
    }

    pub fn set_fill(&mut self, fill: Color32) {
        self.fill = fill;
    }

    /// Half the frame width, tracked on resize. Only meaningful for circles.
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    /// Map a canvas-space point into the shape's unrotated frame by undoing
    /// the committed rotation about the center. Corner zones, resize deltas,
    /// and hit tests all live in this space.
    pub fn to_local(&self, pos: Pos2) -> Pos2 {
        rotate_about(pos, self.rect.center(), -self.rotation)
    }

    /// Test whether `pos` lies inside the shape as rendered.
    pub fn hit_test(&self, pos: Pos2) -> bool {
        let local = self.to_local(pos);
        let rect = self.normalized_rect();
        match self.kind {
            ShapeKind::Square => rect.contains(local),
            ShapeKind::Circle => {
                // Same disc the painter fills: the radius tracks the frame
                // width, even when the height no longer matches it.
                let offset = local - rect.center();
                offset.length() <= self.corner_radius
            }
            ShapeKind::Triangle => {
                let [a, b, c] = triangle_vertices(rect);
                point_in_triangle(local, a, b, c)
            }
        }
    }

    /// Conservative canvas-space bounds around the rendered shape, covering
    /// rotation and a circle disc wider than its squashed frame.
    pub fn paint_bounds(&self) -> Rect {
        let rect = self.normalized_rect();
        let rect = match self.kind {
            ShapeKind::Circle => rect.union(Rect::from_center_size(
                rect.center(),
                Vec2::splat(self.corner_radius.abs() * 2.0),
            )),
            _ => rect,
        };
        if self.rotation == 0.0 {
            rect
        } else {
            Rect::from_center_size(rect.center(), Vec2::splat(rect.size().length()))
        }
    }

    /// Paint the shape, rotated about its center. An active gesture draws a
    /// black border, mirroring the touch feedback of the interactive canvas.
    pub fn draw(&self, painter: &Painter, outlined: bool) {
        let stroke = if outlined {
            Stroke::new(2.0, Color32::BLACK)
        } else {
            Stroke::NONE
        };
        let rect = self.normalized_rect();
        match self.kind {
            ShapeKind::Square => {
                let corners = [
                    rect.left_top(),
                    rect.right_top(),
                    rect.right_bottom(),
                    rect.left_bottom(),
                ];
                painter.add(egui::Shape::convex_polygon(
                    self.rotated(&corners),
                    self.fill,
                    stroke,
                ));
            }
            ShapeKind::Circle => {
                painter.circle(rect.center(), self.corner_radius, self.fill, stroke);
            }
            ShapeKind::Triangle => {
                painter.add(egui::Shape::convex_polygon(
                    self.rotated(&triangle_vertices(rect)),
                    self.fill,
                    stroke,
                ));
            }
        }
    }

    fn rotated(&self, points: &[Pos2]) -> Vec<Pos2> {
        let center = self.rect.center();
        points
            .iter()
            .map(|&p| rotate_about(p, center, self.rotation))
            .collect()
    }
}

/// Base-left, base-right, apex of the triangle inscribed in `rect`.
fn triangle_vertices(rect: Rect) -> [Pos2; 3] {
    [
        rect.left_bottom(),
        rect.right_bottom(),
        pos2(rect.center().x, rect.min.y),
    ]
}

fn rotate_about(p: Pos2, center: Pos2, radians: f32) -> Pos2 {
    let offset = p - center;
    let (sin, cos) = radians.sin_cos();
    center
        + vec2(
            offset.x * cos - offset.y * sin,
            offset.x * sin + offset.y * cos,
        )
}

fn point_in_triangle(p: Pos2, a: Pos2, b: Pos2, c: Pos2) -> bool {
    fn edge(p: Pos2, a: Pos2, b: Pos2) -> f32 {
        (p.x - b.x) * (a.y - b.y) - (a.x - b.x) * (p.y - b.y)
    }
    let d1 = edge(p, a, b);
    let d2 = edge(p, b, c);
    let d3 = edge(p, c, a);
    let has_neg = d1 < 0.0 || d2 < 0.0 || d3 < 0.0;
    let has_pos = d1 > 0.0 || d2 > 0.0 || d3 > 0.0;
    !(has_neg && has_pos)
}
