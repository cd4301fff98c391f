//! Company statistics panel.

use eframe::egui::{self, CornerRadius, Margin, RichText, Ui};
use egui_phosphor::regular::{CHART_BAR, LIGHTBULB};

use super::app::App;
use super::components::{department_icon, panel_header, stat_card};
use crate::format;

/// Show the statistics panel.
pub fn show(app: &App, ui: &mut Ui) {
    let stats = app.statistics();
    let top_n = app.config.stats.top_departments;

    panel_header(ui, &format!("{CHART_BAR} Company Statistics"));

    ui.horizontal_wrapped(|ui| {
        stat_card(ui, "Total Employees", &stats.total_employees.to_string(), "On the roster");
        stat_card(
            ui,
            "Recent Hires",
            &stats.recent_hires.to_string(),
            &format!("Last {} days", app.config.stats.recent_days),
        );
        stat_card(
            ui,
            "Average Salary",
            &format::amount_or_na(stats.average_salary),
            "Per employee",
        );
        stat_card(
            ui,
            "Total Budget",
            &format::amount_or_na(stats.total_salary),
            "Annual salaries",
        );
    });

    if stats.departments.is_empty() {
        return;
    }

    ui.add_space(12.0);
    ui.label(RichText::new("Department Breakdown").strong());
    ui.add_space(6.0);

    for (department, count) in stats.top_departments(top_n) {
        let percentage = stats.percentage(count);
        ui.horizontal(|ui| {
            ui.label(department_icon(department));
            ui.label(department);
            ui.label(RichText::new(count.to_string()).weak());
        });
        ui.add(
            egui::ProgressBar::new((percentage / 100.0) as f32)
                .desired_width(300.0)
                .text(format!("{percentage:.1}%")),
        );
    }

    let hidden = stats.hidden_departments(top_n);
    if hidden > 0 {
        ui.label(RichText::new(format!("+{hidden} more departments")).weak());
    }

    ui.add_space(12.0);
    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(Margin::same(10))
        .corner_radius(CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new(format!("{LIGHTBULB} Quick Insights")).strong());
            ui.add_space(4.0);
            for line in stats.insights() {
                ui.label(line);
            }
        });
}
