//! App module - contains the main application state and logic

mod fetch;
mod navigation;
mod views;

pub use navigation::{Navigator, Screen, ScreenStack, DETAIL_DOA};

use crate::settings::Settings;
use crate::theme;
use crate::types::LoadState;
use eframe::egui;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use tokio_util::sync::CancellationToken;

pub struct App {
    /// Tri-state load result for the favorites list. Written exactly once by
    /// the settling fetch task; the UI thread only reads it.
    pub(crate) load_state: Arc<Mutex<LoadState>>,
    /// Guards against re-spawning the fetch from subsequent frames.
    pub(crate) fetch_started: bool,
    /// Mount-scoped token; cancelled on exit so a late-settling fetch
    /// discards its result instead of touching disposed state.
    pub(crate) cancel_token: CancellationToken,
    pub(crate) screens: ScreenStack,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Window geometry tracking for settings persistence
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        Self {
            load_state: Arc::new(Mutex::new(LoadState::Loading)),
            fetch_started: false,
            cancel_token: CancellationToken::new(),
            screens: ScreenStack::new(),
            runtime: tokio::runtime::Runtime::new().unwrap(),
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
        };
        settings.save(&self.data_dir);
    }
}
