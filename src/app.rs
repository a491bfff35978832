use eframe::egui;
use egui::{Color32, Rect, RichText, Sense, TextureHandle, TextureOptions, pos2};
use log::info;

use crate::canvas::Canvas;
use crate::palette;
use crate::shape::ShapeKind;
use crate::snapshot;
use crate::tool::{InteractionContext, TOOLBAR, ToolMode};

/// The single-screen composition app: canvas, toolbar, add menu, colour
/// picker, and the two confirmation dialogs. All real logic lives in
/// [`Canvas`] and the interaction module; this is wiring.
pub struct CanvasApp {
    canvas: Canvas,
    context: InteractionContext,
    toolbar_expanded: bool,
    add_menu_open: bool,
    colour_picker_open: bool,
    confirm_clear: bool,
    confirm_abstract: bool,
    /// Last known canvas rect, used as the snapshot viewport.
    canvas_rect: Rect,
    /// Set once the composition is finalized; replaces the interactive view.
    abstracted: Option<TextureHandle>,
}

impl CanvasApp {
    /// Called once before the first frame.
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            canvas: Canvas::new(),
            context: InteractionContext::default(),
            toolbar_expanded: false,
            add_menu_open: false,
            colour_picker_open: false,
            confirm_clear: false,
            confirm_abstract: false,
            canvas_rect: Rect::from_min_max(pos2(0.0, 0.0), pos2(380.0, 700.0)),
            abstracted: None,
        }
    }

    fn select_tool(&mut self, mode: ToolMode) {
        self.context.set_active_mode(mode);
        match mode {
            ToolMode::Add => self.add_menu_open = !self.add_menu_open,
            ToolMode::Colour => self.colour_picker_open = true,
            _ => {}
        }
    }

    fn reset_menus(&mut self) {
        self.context = InteractionContext::default();
        self.toolbar_expanded = false;
        self.add_menu_open = false;
        self.colour_picker_open = false;
    }

    fn toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            let chevron = if self.toolbar_expanded { "◀" } else { "▶" };
            if ui.button(chevron).clicked() {
                self.toolbar_expanded = !self.toolbar_expanded;
            }
            if !self.toolbar_expanded {
                return;
            }
            for mode in TOOLBAR {
                let selected = self.context.mode == mode;
                if ui.selectable_label(selected, mode.label()).clicked() {
                    info!("tool selected from toolbar: {mode:?}");
                    self.select_tool(mode);
                }
            }
        });
    }

    fn add_menu(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("add_menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                // Swatch colours echo the original add buttons; the placed
                // shape itself takes the active draw colour.
                let buttons = [
                    (ShapeKind::Square, Color32::RED, "■"),
                    (ShapeKind::Circle, Color32::BLUE, "●"),
                    (ShapeKind::Triangle, Color32::YELLOW, "▲"),
                ];
                for (kind, tint, icon) in buttons {
                    let label = RichText::new(icon).size(48.0).color(tint);
                    if ui.button(label).clicked() {
                        self.canvas.spawn_shape(kind, &self.context);
                        self.add_menu_open = false;
                    }
                }
            });
        });
    }

    fn colour_picker(&mut self, ctx: &egui::Context) {
        let mut open = self.colour_picker_open;
        egui::Window::new("Colours")
            .collapsible(false)
            .resizable(false)
            .open(&mut open)
            .show(ctx, |ui| {
                egui::Grid::new("swatches").show(ui, |ui| {
                    for (i, &swatch) in palette::SWATCHES.iter().enumerate() {
                        let (rect, response) =
                            ui.allocate_exact_size(egui::vec2(48.0, 48.0), Sense::click());
                        ui.painter().rect_filled(rect, 0.0, swatch);
                        if response.clicked() {
                            self.context.set_active_colour(swatch);
                            self.colour_picker_open = false;
                        }
                        if i % 3 == 2 {
                            ui.end_row();
                        }
                    }
                });
            });
        self.colour_picker_open &= open;
    }

    fn confirm_dialogs(&mut self, ctx: &egui::Context) {
        if self.confirm_clear {
            egui::Window::new("Clear Canvas?")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.label("Your canvas will be cleared of all work, are you sure?");
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            self.confirm_clear = false;
                        }
                        if ui.button("Yes").clicked() {
                            self.canvas.clear_all();
                            self.reset_menus();
                            self.confirm_clear = false;
                        }
                    });
                });
        }

        if self.confirm_abstract {
            egui::Window::new("Abstract Your Masterpiece?")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, egui::Vec2::ZERO)
                .show(ctx, |ui| {
                    ui.horizontal(|ui| {
                        if ui.button("No").clicked() {
                            self.confirm_abstract = false;
                        }
                        if ui.button("Yes").clicked() {
                            self.finalize(ctx);
                            self.confirm_abstract = false;
                        }
                    });
                });
        }
    }

    fn finalize(&mut self, ctx: &egui::Context) {
        match snapshot::abstracted(&self.canvas, self.canvas_rect) {
            Ok(img) => {
                let size = [img.width() as usize, img.height() as usize];
                let color_image = egui::ColorImage::from_rgba_unmultiplied(size, &img.into_raw());
                self.abstracted =
                    Some(ctx.load_texture("abstracted", color_image, TextureOptions::LINEAR));
            }
            Err(err) => {
                log::warn!("could not abstract the canvas: {err}");
            }
        }
    }

    fn interactive_canvas(&mut self, ui: &mut egui::Ui) {
        let (response, painter) = ui.allocate_painter(ui.available_size(), Sense::drag());
        self.canvas_rect = response.rect;

        if response.drag_started() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.canvas.pointer_pressed(&self.context, pos);
            }
        } else if response.dragged() {
            if let Some(pos) = response.interact_pointer_pos() {
                self.canvas.pointer_moved(&self.context, pos);
            }
        } else if response.drag_stopped() {
            self.canvas.pointer_released(&self.context);
        }

        painter.rect_filled(response.rect, 0.0, Color32::WHITE);
        let active = self.canvas.active_shape();
        for shape in self.canvas.shapes() {
            shape.draw(&painter, active == Some(shape.id()));
        }
    }
}

impl eframe::App for CanvasApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::TopBottomPanel::top("nav_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("🗑").clicked() && self.abstracted.is_none() {
                    self.confirm_clear = true;
                }
                ui.heading("Abstract");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("✔").clicked() && self.abstracted.is_none() {
                        self.confirm_abstract = true;
                    }
                });
            });
        });

        // Once abstracted, the composition is final: only the image remains.
        if let Some(texture) = &self.abstracted {
            egui::CentralPanel::default().show(ctx, |ui| {
                let uv = Rect::from_min_max(pos2(0.0, 0.0), pos2(1.0, 1.0));
                ui.painter()
                    .image(texture.id(), self.canvas_rect, uv, Color32::WHITE);
            });
            return;
        }

        if self.add_menu_open {
            self.add_menu(ctx);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            self.toolbar(ui);
            self.interactive_canvas(ui);
        });

        if self.colour_picker_open {
            self.colour_picker(ctx);
        }
        self.confirm_dialogs(ctx);
    }
}
