use egui::Color32;

/// The tool selected in the toolbar. Exactly one is active at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ToolMode {
    /// Nothing selected; touches on shapes do nothing.
    #[default]
    None,
    /// The add menu is open; freshly placed shapes are draggable right away.
    Add,
    /// Touching a shape repaints it with the active colour.
    Colour,
    /// Dragging a shape translates it.
    Move,
    /// Dragging near a corner resizes the frame from that corner.
    Resize,
    /// Dragging spins the shape about its center.
    Rotate,
    /// Touching a shape deletes it.
    Trash,
}

/// Toolbar order, matching the expanded tool strip.
pub const TOOLBAR: [ToolMode; 6] = [
    ToolMode::Add,
    ToolMode::Colour,
    ToolMode::Move,
    ToolMode::Resize,
    ToolMode::Rotate,
    ToolMode::Trash,
];

impl ToolMode {
    pub fn label(self) -> &'static str {
        match self {
            ToolMode::None => "",
            ToolMode::Add => "➕ Add",
            ToolMode::Colour => "🖌 Colour",
            ToolMode::Move => "✋ Move",
            ToolMode::Resize => "⛶ Resize",
            ToolMode::Rotate => "🔃 Rotate",
            ToolMode::Trash => "🗑 Trash",
        }
    }
}

/// Snapshot of the toolbar selection handed to every gesture call.
///
/// Written only by the toolbar and colour picker, read by every shape's
/// event handler. Passing it explicitly (instead of the process-wide
/// singleton it replaces) keeps the single-writer/multi-reader behaviour
/// visible at the call site.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InteractionContext {
    pub mode: ToolMode,
    pub colour: Color32,
}

impl Default for InteractionContext {
    fn default() -> Self {
        Self {
            mode: ToolMode::None,
            colour: Color32::GRAY,
        }
    }
}

impl InteractionContext {
    /// Overwrite the active tool. Any value is accepted; no side effects.
    pub fn set_active_mode(&mut self, mode: ToolMode) {
        self.mode = mode;
    }

    /// Overwrite the active draw colour.
    pub fn set_active_colour(&mut self, colour: Color32) {
        self.colour = colour;
    }
}
