use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use chrono::{DateTime, Local, TimeZone};

use export::ExportRequest;
use planner::design::HistoryItem;
use planner::format::format_measure;
use planner::history::{DesignHistory, SelectHistoryItem};

use crate::theme;
use crate::ui_widgets::{badge, caption, themed_heading};

/// Whether the history sidebar is showing. Toggled from the header.
#[derive(Resource, Default)]
pub struct HistoryPanelOpen(pub bool);

/// "2026-10-18 at 14:05"
pub fn history_timestamp<Tz: TimeZone>(at: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    at.format("%Y-%m-%d at %H:%M").to_string()
}

/// Area, bedroom count and style chips for one entry.
pub fn history_badges(item: &HistoryItem) -> [String; 3] {
    [
        format!("{}m\u{00b2}", format_measure(item.land_measurement.area())),
        format!("{} BD", item.preferences.bedrooms),
        item.preferences.style.as_str().to_string(),
    ]
}

enum EntryAction {
    Select,
    Export,
}

fn history_entry(ui: &mut egui::Ui, item: &HistoryItem) -> Option<EntryAction> {
    let mut action = None;
    ui.horizontal(|ui| {
        let body = ui
            .vertical(|ui| {
                caption(
                    ui,
                    &history_timestamp(&item.created_at.with_timezone(&Local)),
                );
                ui.label(
                    egui::RichText::new(item.headline())
                        .color(theme::TEXT_HEADING)
                        .strong(),
                );
                ui.horizontal(|ui| {
                    let [area, bedrooms, style] = history_badges(item);
                    badge(ui, &area, theme::BADGE_BLUE);
                    badge(ui, &bedrooms, theme::BADGE_BLUE);
                    badge(ui, &style, theme::BADGE_PURPLE);
                });
            })
            .response;
        if ui
            .interact(body.rect, body.id.with("select"), egui::Sense::click())
            .on_hover_cursor(egui::CursorIcon::PointingHand)
            .clicked()
        {
            action = Some(EntryAction::Select);
        }
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Min), |ui| {
            if ui
                .small_button("\u{2b07}")
                .on_hover_text("Export design")
                .clicked()
            {
                action = Some(EntryAction::Export);
            }
        });
    });
    action
}

/// Right sidebar listing earlier batches, newest first.
pub fn history_panel_ui(
    mut contexts: EguiContexts,
    mut open: ResMut<HistoryPanelOpen>,
    history: Res<DesignHistory>,
    mut select: EventWriter<SelectHistoryItem>,
    mut export: EventWriter<ExportRequest>,
) {
    if !open.0 {
        return;
    }

    egui::SidePanel::right("history_panel")
        .resizable(false)
        .exact_width(340.0)
        .show(contexts.ctx_mut(), |ui| {
            ui.horizontal(|ui| {
                themed_heading(ui, "Design History");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button("\u{2715}").on_hover_text("Close history").clicked() {
                        open.0 = false;
                    }
                });
            });
            ui.separator();

            if history.is_empty() {
                ui.vertical_centered(|ui| {
                    ui.add_space(40.0);
                    ui.label(
                        egui::RichText::new("No history yet")
                            .size(theme::FONT_BODY + 2.0)
                            .color(theme::TEXT),
                    );
                    caption(
                        ui,
                        "Your design history will appear here after you generate your first house design.",
                    );
                });
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                for item in history.iter() {
                    match history_entry(ui, item) {
                        Some(EntryAction::Select) => {
                            select.send(SelectHistoryItem(item.id));
                            open.0 = false;
                        }
                        Some(EntryAction::Export) => {
                            export.send(ExportRequest::HistoryItem(item.id));
                        }
                        None => {}
                    }
                    ui.separator();
                }
            });
        });
}
