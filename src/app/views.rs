//! View rendering (favorites list, detail screen)

use super::{App, Navigator, Screen, DETAIL_DOA};
use crate::theme;
use crate::types::DoaRecord;
use crate::ui::components::doa_card;
use eframe::egui;
use egui::RichText;

/// Selection handoff: the full record goes to the navigator, not just its id,
/// so the detail view renders without a second fetch.
pub(crate) fn select_doa(navigator: &mut dyn Navigator, doa: &DoaRecord) {
    navigator.navigate(DETAIL_DOA, doa.clone());
}

impl App {
    pub(crate) fn render_screens(&mut self, ctx: &egui::Context) {
        match self.screens.current().clone() {
            Screen::Favorites => self.render_favorites(ctx),
            Screen::DetailDoa(doa) => self.render_detail(ctx, &doa),
        }
    }

    fn render_favorites(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("favorites_header")
            .exact_height(theme::HEADER_HEIGHT)
            .show_separator_line(false)
            .frame(egui::Frame::new().fill(theme::BG_HEADER))
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.add_space(24.0);
                    ui.label(
                        RichText::new("Favorite Doa")
                            .size(theme::FONT_HEADER)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.add_space(4.0);
                    ui.label(
                        RichText::new("Kumpulan doa yang telah Anda simpan")
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_MUTED),
                    );
                });
            });

        // Snapshot the state so the settling task never blocks a frame.
        let state = self.load_state.lock().unwrap().clone();
        let mut selected: Option<DoaRecord> = None;

        egui::CentralPanel::default().show(ctx, |ui| {
            if state.is_loading() {
                // Busy indicator only: no list, no empty-state message.
                ui.centered_and_justified(|ui| {
                    ui.add(
                        egui::Spinner::new()
                            .size(theme::SPINNER_SIZE)
                            .color(theme::ACCENT),
                    );
                });
                return;
            }

            // Settled: Failed renders the same zero-row list an empty Ready does.
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(12.0);
                    for record in state.records() {
                        if doa_card(ui, record).clicked() {
                            selected = Some(record.clone());
                        }
                        ui.add_space(12.0);
                    }
                });
        });

        if let Some(doa) = selected {
            select_doa(&mut self.screens, &doa);
        }
    }

    fn render_detail(&mut self, ctx: &egui::Context, doa: &DoaRecord) {
        let mut go_back = false;

        egui::TopBottomPanel::top("detail_header")
            .show_separator_line(false)
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_HEADER)
                    .inner_margin(egui::Margin::same(12)),
            )
            .show(ctx, |ui| {
                ui.horizontal(|ui| {
                    if ui
                        .button(
                            RichText::new(format!(
                                "{} Kembali",
                                egui_phosphor::regular::ARROW_LEFT
                            ))
                            .size(theme::FONT_BODY)
                            .color(theme::TEXT_PRIMARY),
                        )
                        .clicked()
                    {
                        go_back = true;
                    }
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical()
                .auto_shrink([false, false])
                .show(ui, |ui| {
                    ui.add_space(16.0);
                    ui.label(
                        RichText::new(&doa.doa)
                            .size(theme::FONT_HEADER)
                            .strong()
                            .color(theme::TEXT_PRIMARY),
                    );
                    ui.add_space(16.0);
                    ui.label(
                        RichText::new(&doa.ayat)
                            .size(22.0)
                            .color(theme::TEXT_PRIMARY),
                    );
                    // Passthrough fields from the source payload, when present.
                    if let Some(latin) = doa.extra_str("latin") {
                        ui.add_space(12.0);
                        ui.label(
                            RichText::new(latin)
                                .size(theme::FONT_BODY)
                                .italics()
                                .color(theme::TEXT_MUTED),
                        );
                    }
                    if let Some(artinya) = doa.extra_str("artinya") {
                        ui.add_space(12.0);
                        ui.label(
                            RichText::new(artinya)
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_PRIMARY),
                        );
                    }
                });
        });

        if go_back {
            self.screens.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct RecordingNavigator {
        calls: Vec<(String, DoaRecord)>,
    }

    impl Navigator for RecordingNavigator {
        fn navigate(&mut self, destination: &str, doa: DoaRecord) {
            self.calls.push((destination.to_string(), doa));
        }
    }

    fn record(id: usize) -> DoaRecord {
        serde_json::from_str(&format!(
            r#"{{"id":"{id}","doa":"Doa {id}","ayat":"Ayat {id}"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn selecting_an_entry_hands_over_the_exact_record() {
        let list: Vec<DoaRecord> = (1..=5).map(record).collect();
        let mut navigator = RecordingNavigator { calls: Vec::new() };

        // Press the 2nd rendered entry.
        select_doa(&mut navigator, &list[1]);

        assert_eq!(navigator.calls.len(), 1);
        let (destination, doa) = &navigator.calls[0];
        assert_eq!(destination, DETAIL_DOA);
        assert_eq!(*doa, list[1]);
    }
}
