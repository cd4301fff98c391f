//! Title bar with search, employee count, and import/export actions.

use eframe::egui::{self, Align, Layout, RichText, Ui};
use egui_phosphor::regular::{DOWNLOAD_SIMPLE, FILE_XLS, MAGNIFYING_GLASS, SPARKLE, UPLOAD_SIMPLE, USERS, X};

use super::app::App;
use super::components::styled_button_with_icon;

/// Header button clicked this frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    ExportJson,
    ImportJson,
    ExportExcel,
    LoadSample,
}

/// Show the header.
pub fn show(app: &mut App, ui: &mut Ui) -> Action {
    let mut action = Action::None;

    ui.add_space(8.0);
    ui.horizontal(|ui| {
        ui.vertical(|ui| {
            ui.label(RichText::new(format!("{USERS} Employee Management System")).size(24.0).strong());
            ui.label(RichText::new("Manage your team efficiently").weak());
        });

        ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
            if styled_button_with_icon(ui, FILE_XLS, "Excel").clicked() {
                action = Action::ExportExcel;
            }
            if styled_button_with_icon(ui, UPLOAD_SIMPLE, "Import").clicked() {
                action = Action::ImportJson;
            }
            if styled_button_with_icon(ui, DOWNLOAD_SIMPLE, "Export").clicked() {
                action = Action::ExportJson;
            }
            if app.roster.is_empty() && styled_button_with_icon(ui, SPARKLE, "Sample Data").clicked() {
                action = Action::LoadSample;
            }

            ui.add_space(10.0);
            ui.label(RichText::new(app.roster.len().to_string()).strong());
            ui.label("Total Employees:");
            ui.add_space(20.0);

            if !app.search.is_empty() && ui.small_button(X).on_hover_text("Clear search").clicked() {
                app.search.clear();
            }
            ui.add(
                egui::TextEdit::singleline(&mut app.search)
                    .desired_width(300.0)
                    .hint_text("Search employees by name, ID, or department..."),
            );
            ui.label(MAGNIFYING_GLASS);
        });
    });
    ui.add_space(8.0);

    action
}
