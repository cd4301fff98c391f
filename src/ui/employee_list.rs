//! Employee directory table with sortable columns and search highlighting.

use eframe::egui::{self, Align, Layout, RichText, Ui, text::LayoutJob};
use egui_extras::{Column, TableBuilder};
use egui_phosphor::regular::{ARROW_DOWN, ARROW_UP, ARROWS_DOWN_UP, PENCIL, PHONE, TRASH};

use super::app::App;
use super::components::{action_button, colors, danger_action_button, department_icon, panel_header};
use crate::format::{self, highlight_segments};
use crate::query::{self, SortDirection, SortKey};

/// Row click requested this frame.
enum RowAction {
    Edit(String),
    Delete(String),
}

/// Show the employee list.
pub fn show(app: &mut App, ui: &mut Ui) {
    panel_header(ui, "Employee Directory");

    let rows = query::visible(app.roster.as_slice(), &app.search, app.sort);

    ui.horizontal(|ui| {
        let plural = if rows.len() == 1 { "" } else { "s" };
        ui.label(format!("Showing {} employee{plural}", rows.len()));
        if !app.search.is_empty() {
            ui.label(RichText::new(format!("- Showing results for \"{}\"", app.search)).weak());
        }
    });
    ui.add_space(10.0);

    if rows.is_empty() {
        let (title, hint) = if app.search.is_empty() {
            ("No employees yet", "Add your first employee using the form")
        } else {
            ("No employees found", "Try adjusting your search criteria")
        };
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new(title).size(18.0).strong());
            ui.label(RichText::new(hint).weak());
        });
        return;
    }

    let mut clicked_sort = None;
    let mut row_action = None;
    let term = app.search.clone();

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(Layout::left_to_right(Align::Center))
        .column(Column::auto().at_least(70.0))
        .column(Column::initial(170.0).at_least(100.0))
        .column(Column::initial(210.0).at_least(100.0))
        .column(Column::initial(160.0).at_least(90.0))
        .column(Column::initial(170.0).at_least(90.0))
        .column(Column::auto().at_least(90.0))
        .column(Column::remainder().at_least(60.0))
        .header(24.0, |mut header| {
            for key in SortKey::ALL {
                header.col(|ui| {
                    let arrow = match app.sort.direction_for(key) {
                        Some(SortDirection::Asc) => ARROW_UP,
                        Some(SortDirection::Desc) => ARROW_DOWN,
                        None => ARROWS_DOWN_UP,
                    };
                    let label = RichText::new(format!("{} {arrow}", key.name())).strong();
                    if ui.add(egui::Button::new(label).frame(false)).clicked() {
                        clicked_sort = Some(key);
                    }
                });
            }
            header.col(|ui| {
                ui.strong("Actions");
            });
        })
        .body(|mut body| {
            for emp in &rows {
                body.row(26.0, |mut row| {
                    row.col(|ui| {
                        highlighted(ui, &emp.id, &term);
                    });
                    row.col(|ui| {
                        highlighted(ui, &emp.name, &term);
                        if !emp.phone.is_empty() {
                            ui.label(RichText::new(PHONE).weak()).on_hover_text(&emp.phone);
                        }
                    });
                    row.col(|ui| {
                        let job = highlight_job(ui, &emp.email, &term, ui.visuals().hyperlink_color);
                        let response = ui
                            .add(egui::Label::new(job).sense(egui::Sense::click()))
                            .on_hover_cursor(egui::CursorIcon::PointingHand);
                        if response.clicked() {
                            ui.ctx().open_url(egui::OpenUrl::new_tab(format!("mailto:{}", emp.email)));
                        }
                    });
                    row.col(|ui| {
                        ui.label(department_icon(&emp.department));
                        highlighted(ui, &emp.department, &term);
                    });
                    row.col(|ui| {
                        highlighted(ui, &emp.position, &term);
                    });
                    row.col(|ui| {
                        ui.label(format::salary_label(&emp.salary))
                            .on_hover_text(format!("Added {}", format::date_label(emp.date_added)));
                    });
                    row.col(|ui| {
                        if action_button(ui, PENCIL, "Edit Employee").clicked() {
                            row_action = Some(RowAction::Edit(emp.id.clone()));
                        }
                        ui.add_space(4.0);
                        if danger_action_button(ui, TRASH, "Delete Employee").clicked() {
                            row_action = Some(RowAction::Delete(emp.id.clone()));
                        }
                    });
                });
            }
        });

    if let Some(key) = clicked_sort {
        app.sort.toggle(key);
    }
    match row_action {
        Some(RowAction::Edit(id)) => app.begin_edit(&id),
        Some(RowAction::Delete(id)) => app.request_delete(&id),
        None => {}
    }
}

/// Label with the search term highlighted.
fn highlighted(ui: &mut Ui, text: &str, term: &str) {
    let job = highlight_job(ui, text, term, ui.visuals().text_color());
    ui.label(job);
}

fn highlight_job(ui: &Ui, text: &str, term: &str, text_color: egui::Color32) -> LayoutJob {
    let mut job = LayoutJob::default();
    let font_id = egui::TextStyle::Body.resolve(ui.style());

    for segment in highlight_segments(text, term) {
        let format = if segment.matched {
            egui::TextFormat {
                font_id: font_id.clone(),
                color: egui::Color32::BLACK,
                background: colors::HIGHLIGHT,
                ..Default::default()
            }
        } else {
            egui::TextFormat {
                font_id: font_id.clone(),
                color: text_color,
                ..Default::default()
            }
        };
        job.append(segment.text, 0.0, format);
    }

    job
}
