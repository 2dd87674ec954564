//! Reusable UI components

use crate::theme;
use crate::types::DoaRecord;
use eframe::egui;
use egui::RichText;

/// Widget id for a list entry, derived from the record id so it stays stable
/// across re-renders with unchanged data.
pub fn entry_key(record: &DoaRecord) -> egui::Id {
    egui::Id::new(("doa-card", record.id.as_str()))
}

/// Pressable card for one doa entry: title, ayat body, heart badge.
pub fn doa_card(ui: &mut egui::Ui, record: &DoaRecord) -> egui::Response {
    let frame = egui::Frame::new()
        .fill(theme::CARD_FILL)
        .corner_radius(theme::CARD_RADIUS)
        .inner_margin(egui::Margin::same(theme::CARD_PADDING))
        .show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(
                    RichText::new(&record.doa)
                        .size(theme::FONT_TITLE)
                        .strong()
                        .color(theme::TEXT_PRIMARY),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
                    ui.label(
                        RichText::new(egui_phosphor::regular::HEART)
                            .size(20.0)
                            .color(theme::TEXT_PRIMARY),
                    );
                });
            });
            ui.add_space(4.0);
            ui.label(
                RichText::new(&record.ayat)
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_PRIMARY),
            );
        });

    let response = ui.interact(frame.response.rect, entry_key(record), egui::Sense::click());
    if response.hovered() {
        ui.painter().rect_stroke(
            frame.response.rect,
            theme::CARD_RADIUS,
            egui::Stroke::new(1.5, theme::ACCENT),
            egui::StrokeKind::Outside,
        );
    }
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn record(id: usize) -> DoaRecord {
        serde_json::from_str(&format!(
            r#"{{"id":"{id}","doa":"Doa {id}","ayat":"Ayat {id}"}}"#
        ))
        .unwrap()
    }

    #[test]
    fn entry_keys_are_stable_across_re_renders() {
        let list: Vec<DoaRecord> = (1..=10).map(record).collect();
        let first: Vec<egui::Id> = list.iter().map(entry_key).collect();
        let second: Vec<egui::Id> = list.iter().map(entry_key).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn entry_keys_are_unique_per_record() {
        let list: Vec<DoaRecord> = (1..=10).map(record).collect();
        let keys: HashSet<egui::Id> = list.iter().map(entry_key).collect();
        assert_eq!(keys.len(), list.len());
    }
}
