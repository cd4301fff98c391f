//! Shared UI components.

use eframe::egui::{self, Color32, CornerRadius, Margin, Response, RichText, Ui};

/// Accent colors.
pub mod colors {
    use super::Color32;

    pub const PRIMARY: Color32 = Color32::from_rgb(68, 114, 196);
    pub const SUCCESS: Color32 = Color32::from_rgb(100, 200, 100);
    pub const ERROR: Color32 = Color32::from_rgb(255, 100, 100);
    pub const HIGHLIGHT: Color32 = Color32::from_rgb(255, 230, 120);
}

/// Render a panel header with title.
pub fn panel_header(ui: &mut Ui, title: &str) {
    ui.heading(RichText::new(title).size(20.0));
    ui.add_space(6.0);
    ui.separator();
    ui.add_space(10.0);
}

/// Filled button for the main action of a form or toolbar.
pub fn primary_button_with_icon(ui: &mut Ui, icon: &str, text: &str) -> Response {
    let label = if icon.is_empty() {
        text.to_string()
    } else {
        format!("{icon} {text}")
    };
    ui.add(
        egui::Button::new(RichText::new(label).color(Color32::WHITE).size(14.0))
            .fill(colors::PRIMARY)
            .min_size(egui::vec2(0.0, 28.0)),
    )
}

/// Plain button with the standard height.
pub fn styled_button(ui: &mut Ui, text: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(text).size(14.0)).min_size(egui::vec2(0.0, 28.0)))
}

/// Plain button with a leading icon.
pub fn styled_button_with_icon(ui: &mut Ui, icon: &str, text: &str) -> Response {
    styled_button(ui, &format!("{icon} {text}"))
}

/// Compact icon button used in table rows.
pub fn action_button(ui: &mut Ui, icon: &str, tooltip: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(icon).size(16.0)).frame(false))
        .on_hover_text(tooltip)
}

/// Compact icon button for destructive row actions.
pub fn danger_action_button(ui: &mut Ui, icon: &str, tooltip: &str) -> Response {
    ui.add(egui::Button::new(RichText::new(icon).size(16.0).color(colors::ERROR)).frame(false))
        .on_hover_text(tooltip)
}

/// Render a stat card with title, value, and subtitle.
pub fn stat_card(ui: &mut Ui, title: &str, value: &str, subtitle: &str) {
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(10))
        .outer_margin(Margin::same(4))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.set_min_width(140.0);

            ui.vertical(|ui| {
                ui.label(RichText::new(title).small());
                ui.label(RichText::new(value).heading().strong());
                ui.label(RichText::new(subtitle).small().weak());
            });
        });
}

/// Icon shown next to a department name.
pub fn department_icon(department: &str) -> &'static str {
    use egui_phosphor::regular::{
        BRIEFCASE, CLIPBOARD, CODE, CURRENCY_DOLLAR, GEAR, HEADSET, MEGAPHONE, PRESENTATION_CHART, USERS,
    };

    match department {
        "Engineering" => CODE,
        "Marketing" => MEGAPHONE,
        "Sales" => BRIEFCASE,
        "Human Resources" => USERS,
        "Finance" => CURRENCY_DOLLAR,
        "Operations" => GEAR,
        "Customer Support" => HEADSET,
        "Product Management" => PRESENTATION_CHART,
        _ => CLIPBOARD,
    }
}
