use egui::Color32;

pub const ORANGE: Color32 = Color32::from_rgb(255, 149, 0);
pub const PURPLE: Color32 = Color32::from_rgb(128, 0, 128);
pub const PINK: Color32 = Color32::from_rgb(255, 45, 85);

/// The nine swatches offered by the colour picker, in picker order
/// (three rows of three).
pub const SWATCHES: [Color32; 9] = [
    Color32::BLUE,
    Color32::YELLOW,
    Color32::RED,
    ORANGE,
    Color32::GREEN,
    PURPLE,
    PINK,
    Color32::BLACK,
    Color32::GRAY,
];
