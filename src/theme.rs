//! Centralized theme constants for Doa Favorites
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x1b, 0x43, 0x32); // deep green
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x24, 0x54, 0x41); // panels, popups
pub const BG_HEADER: Color32 = Color32::from_rgb(0x2d, 0x6a, 0x4f); // header band

// =============================================================================
// COLORS - Accent
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x6a, 0x9e, 0x73); // light leaf green
pub const ACCENT_DEEP: Color32 = Color32::from_rgb(0x2d, 0x6a, 0x4f);

// =============================================================================
// COLORS - Cards
// =============================================================================
pub const CARD_FILL: Color32 = Color32::from_rgb(0x4a, 0x7d, 0x53);
pub const CARD_HOVER: Color32 = Color32::from_rgb(0x5a, 0x8d, 0x63);
pub const CARD_PRESSED: Color32 = Color32::from_rgb(0x3f, 0x6e, 0x48);

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0xb7, 0xc9, 0xb5); // sage

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x2d, 0x6a, 0x4f);

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_HEADER: f32 = 28.0;
pub const FONT_TITLE: f32 = 18.0;
pub const FONT_BODY: f32 = 16.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const CARD_RADIUS: u8 = 12;
pub const CARD_PADDING: i8 = 16;
pub const HEADER_HEIGHT: f32 = 110.0;
pub const SPINNER_SIZE: f32 = 40.0;

const STROKE_DEFAULT: f32 = 1.0;
const STROKE_MEDIUM: f32 = 1.5;
const RADIUS_DEFAULT: u8 = 8;

pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT,
        selection: egui::style::Selection {
            bg_fill: ACCENT_DEEP,
            stroke: egui::Stroke::NONE,
        },
        widgets: egui::style::Widgets {
            noninteractive: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            inactive: egui::style::WidgetVisuals {
                bg_fill: egui::Color32::TRANSPARENT,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_MUTED),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            hovered: egui::style::WidgetVisuals {
                bg_fill: CARD_HOVER,
                weak_bg_fill: BG_HEADER,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_MEDIUM, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
            active: egui::style::WidgetVisuals {
                bg_fill: CARD_PRESSED,
                weak_bg_fill: CARD_PRESSED,
                bg_stroke: egui::Stroke::NONE,
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: -2.0,
            },
            open: egui::style::WidgetVisuals {
                bg_fill: BG_ELEVATED,
                weak_bg_fill: BG_ELEVATED,
                bg_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE),
                fg_stroke: egui::Stroke::new(STROKE_DEFAULT, TEXT_PRIMARY),
                corner_radius: RADIUS_DEFAULT.into(),
                expansion: 0.0,
            },
        },
        striped: false,
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        ..egui::Visuals::dark()
    });
}
