//! Add / edit employee form with inline validation messages.

use eframe::egui::{self, Ui};
use egui_phosphor::regular::{FLOPPY_DISK, PLUS};

use super::app::App;
use super::components::{colors, panel_header, primary_button_with_icon, styled_button};
use crate::models::DEPARTMENTS;
use crate::validation::Field;

/// Show the employee form.
pub fn show(app: &mut App, ui: &mut Ui) {
    let is_editing = app.form.is_editing();
    panel_header(ui, if is_editing { "Edit Employee" } else { "Add New Employee" });

    egui::Grid::new("employee_form_grid")
        .num_columns(2)
        .spacing([12.0, 8.0])
        .show(ui, |ui| {
            text_row(app, ui, Field::Id, "e.g., EMP001", !is_editing);
            text_row(app, ui, Field::Name, "Enter full name", true);
            text_row(app, ui, Field::Email, "name@company.com", true);
            text_row(app, ui, Field::Phone, "+1 (555) 123-4567", true);
            department_row(app, ui);
            text_row(app, ui, Field::Position, "e.g., Senior Developer", true);
            text_row(app, ui, Field::Salary, "e.g., 75000", true);
        });

    ui.add_space(12.0);

    ui.horizontal(|ui| {
        if styled_button(ui, if is_editing { "Cancel" } else { "Reset" }).clicked() {
            app.form.reset();
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let (icon, label) = if is_editing {
                (FLOPPY_DISK, "Update Employee")
            } else {
                (PLUS, "Add Employee")
            };
            if primary_button_with_icon(ui, icon, label).clicked() {
                app.submit_form();
            }
        });
    });
}

fn field_value(app: &mut App, field: Field) -> &mut String {
    let input = &mut app.form.input;
    match field {
        Field::Id => &mut input.id,
        Field::Name => &mut input.name,
        Field::Email => &mut input.email,
        Field::Phone => &mut input.phone,
        Field::Department => &mut input.department,
        Field::Position => &mut input.position,
        Field::Salary => &mut input.salary,
    }
}

fn text_row(app: &mut App, ui: &mut Ui, field: Field, hint: &str, enabled: bool) {
    ui.label(format!("{}:", field.label()));
    ui.vertical(|ui| {
        let response = ui.add_enabled(
            enabled,
            egui::TextEdit::singleline(field_value(app, field))
                .desired_width(220.0)
                .hint_text(hint),
        );
        if response.changed() {
            app.form.touch(field);
        }
        error_label(app, ui, field);
    });
    ui.end_row();
}

fn department_row(app: &mut App, ui: &mut Ui) {
    ui.label(format!("{}:", Field::Department.label()));
    ui.vertical(|ui| {
        let selected = if app.form.input.department.is_empty() {
            "Select Department".to_string()
        } else {
            app.form.input.department.clone()
        };

        egui::ComboBox::from_id_salt("employee_form_department")
            .width(220.0)
            .selected_text(selected)
            .show_ui(ui, |ui| {
                for dept in DEPARTMENTS {
                    if ui
                        .selectable_label(app.form.input.department == dept, dept)
                        .clicked()
                    {
                        app.form.input.department = dept.to_string();
                        app.form.touch(Field::Department);
                    }
                }
            });
        error_label(app, ui, Field::Department);
    });
    ui.end_row();
}

fn error_label(app: &App, ui: &mut Ui, field: Field) {
    if let Some(message) = app.form.errors.get(field) {
        ui.colored_label(colors::ERROR, message);
    }
}
