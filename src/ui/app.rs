//! Main application state and frame loop.

use std::path::Path;
use std::time::{Duration, Instant};

use chrono::{Local, Utc};
use eframe::egui;

use crate::config::AppConfig;
use crate::error::AppError;
use crate::models::{Employee, EmployeeInput};
use crate::query::SortState;
use crate::roster::Roster;
use crate::stats::Statistics;
use crate::store::{self, Store};
use crate::validation::{self, Field, FieldErrors};
use crate::{export, sample};

use super::components::colors;
use super::{employee_form, employee_list, header, statistics};

/// Toast severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// Transient notification shown in the corner of the window.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub shown_at: Instant,
}

/// Form state for adding or editing an employee.
#[derive(Debug, Default, Clone)]
pub struct EmployeeForm {
    pub input: EmployeeInput,
    pub errors: FieldErrors,
    /// Identifier of the record being edited; `None` while adding.
    pub editing: Option<String>,
}

impl EmployeeForm {
    /// Reset the form to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Create a form pre-filled for editing an existing employee.
    pub fn edit(emp: &Employee) -> Self {
        Self {
            input: EmployeeInput::from(emp),
            errors: FieldErrors::default(),
            editing: Some(emp.id.clone()),
        }
    }

    pub fn is_editing(&self) -> bool {
        self.editing.is_some()
    }

    /// Mark a field as edited, clearing its error.
    pub fn touch(&mut self, field: Field) {
        self.errors.clear(field);
    }
}

/// Employee awaiting delete confirmation.
#[derive(Debug, Clone)]
pub struct DeleteTarget {
    pub id: String,
    pub name: String,
}

/// Main application state.
pub struct App {
    // Persistence
    pub config: AppConfig,
    pub store: Store,

    // Cached data
    pub roster: Roster,

    // List state
    pub search: String,
    pub sort: SortState,

    // Forms and dialogs
    pub form: EmployeeForm,
    pub delete_target: Option<DeleteTarget>,
    pub toast: Option<Toast>,

    /// The data file existed but could not be read; it is moved aside before the first save.
    pub load_failed: bool,
}

impl App {
    /// Create the app, loading the saved collection.
    pub fn new(config: AppConfig, store: Store) -> Self {
        let (roster, load_error) = match store.load() {
            Ok(employees) => (Roster::from_employees(employees), None),
            Err(e) => {
                tracing::error!("Failed to load employees from {:?}: {}", store.path(), e);
                (Roster::new(), Some(format!("Failed to load saved employees: {e}")))
            }
        };

        let mut app = Self {
            config,
            store,
            roster,
            search: String::new(),
            sort: SortState::default(),
            form: EmployeeForm::default(),
            delete_target: None,
            toast: None,
            load_failed: load_error.is_some(),
        };

        if let Some(message) = load_error {
            app.show_error(message);
        } else if app.config.ui.load_sample_data && sample::seed_if_empty(&mut app.roster) {
            tracing::info!("Seeded sample employees");
            app.persist();
        }

        app
    }

    /// Show a success toast.
    pub fn show_success(&mut self, message: impl Into<String>) {
        self.show_toast(message.into(), ToastKind::Success);
    }

    /// Show an error toast.
    pub fn show_error(&mut self, message: impl Into<String>) {
        self.show_toast(message.into(), ToastKind::Error);
    }

    fn show_toast(&mut self, message: String, kind: ToastKind) {
        match kind {
            ToastKind::Success => tracing::info!("{}", message),
            ToastKind::Error => tracing::warn!("{}", message),
        }
        self.toast = Some(Toast {
            message,
            kind,
            shown_at: Instant::now(),
        });
    }

    /// Write the collection to the data file.
    fn persist(&mut self) {
        if self.load_failed {
            match self.store.backup() {
                Ok(path) => {
                    self.load_failed = false;
                    self.show_error(format!("Unreadable data file kept as {}", path.display()));
                }
                Err(e) => {
                    tracing::error!("Failed to back up unreadable data file: {}", e);
                    self.show_error(format!("Changes not saved: could not back up data file: {e}"));
                    return;
                }
            }
        }

        if let Err(e) = self.store.save(self.roster.as_slice()) {
            tracing::error!("Failed to save employees: {}", e);
            self.show_error(format!("Failed to save: {e}"));
        }
    }

    /// Statistics for the current collection.
    pub fn statistics(&self) -> Statistics {
        Statistics::compute_with_window(self.roster.as_slice(), Utc::now(), self.config.stats.recent_days)
    }

    /// Validate and submit the form as an add or an update.
    ///
    /// Returns `true` when the roster changed.
    pub fn submit_form(&mut self) -> bool {
        if let Err(errors) = validation::validate(&self.form.input) {
            tracing::debug!("Form rejected: {}", errors);
            self.form.errors = errors;
            return false;
        }

        let input = self.form.input.clone();
        let result = match self.form.editing.clone() {
            Some(original_id) => self.roster.update(&original_id, input).map(|_| "Employee updated successfully!"),
            None => self
                .roster
                .create(input, Utc::now())
                .map(|_| "Employee added successfully!"),
        };

        match result {
            Ok(message) => {
                self.form.reset();
                self.show_success(message);
                self.persist();
                true
            }
            Err(AppError::DuplicateId(_)) => {
                self.show_error("Employee with this ID already exists!");
                false
            }
            Err(e) => {
                self.show_error(e.to_string());
                false
            }
        }
    }

    /// Start editing an employee.
    pub fn begin_edit(&mut self, id: &str) {
        if let Some(emp) = self.roster.find(id) {
            self.form = EmployeeForm::edit(emp);
        }
    }

    /// Ask for confirmation before deleting.
    pub fn request_delete(&mut self, id: &str) {
        if let Some(emp) = self.roster.find(id) {
            self.delete_target = Some(DeleteTarget {
                id: emp.id.clone(),
                name: emp.name.clone(),
            });
        }
    }

    /// Delete an employee by identifier.
    pub fn delete_employee(&mut self, id: &str) {
        match self.roster.remove(id) {
            Ok(_) => {
                if self.form.editing.as_deref() == Some(id) {
                    self.form.reset();
                }
                self.show_success("Employee deleted successfully!");
                self.persist();
            }
            Err(e) => self.show_error(e.to_string()),
        }
    }

    /// Execute the confirmed delete operation.
    fn confirm_delete(&mut self) {
        if let Some(target) = self.delete_target.take() {
            tracing::info!("Deleting employee: {}", target.name);
            self.delete_employee(&target.id);
        }
    }

    /// Export the full collection as JSON.
    pub fn export_json_to(&mut self, path: &Path) {
        match store::export_json(self.roster.as_slice(), path) {
            Ok(()) => self.show_success("Employee data exported successfully!"),
            Err(e) => self.show_error(format!("Export failed: {e}")),
        }
    }

    /// Replace the collection with the contents of a JSON export.
    pub fn import_json_from(&mut self, path: &Path) {
        match store::import_json(path) {
            Ok(employees) => {
                let count = employees.len();
                self.roster.replace_all(employees);
                self.form.reset();
                self.show_success(format!("Imported {count} employees successfully!"));
                self.persist();
            }
            Err(e) => self.show_error(e.to_string()),
        }
    }

    /// Export the full collection to an Excel workbook.
    pub fn export_excel_to(&mut self, path: &Path) {
        match export::export_employees_to_excel(self.roster.as_slice(), path) {
            Ok(()) => self.show_success(format!("Exported to: {}", path.display())),
            Err(e) => self.show_error(format!("Export failed: {e}")),
        }
    }

    /// Seed demonstration data into an empty collection.
    pub fn load_sample_data(&mut self) {
        if sample::seed_if_empty(&mut self.roster) {
            self.show_success(format!("Loaded {} sample employees", self.roster.len()));
            self.persist();
        } else {
            self.show_error("Sample data can only be loaded into an empty list");
        }
    }

    fn handle_header_action(&mut self, action: header::Action) {
        match action {
            header::Action::None => {}
            header::Action::ExportJson => {
                let name = store::default_export_filename(Local::now().date_naive());
                if let Some(path) = export::show_json_save_dialog(&name) {
                    self.export_json_to(&path);
                }
            }
            header::Action::ImportJson => {
                if let Some(path) = export::show_json_open_dialog() {
                    self.import_json_from(&path);
                }
            }
            header::Action::ExportExcel => {
                let name = export::generate_export_filename("employees");
                if let Some(path) = export::show_excel_save_dialog(&name) {
                    self.export_excel_to(&path);
                }
            }
            header::Action::LoadSample => self.load_sample_data(),
        }
    }

    /// Drop the toast once its time is up.
    fn expire_toast(&mut self, ctx: &egui::Context) {
        let lifetime = Duration::from_secs(self.config.ui.toast_seconds);
        if let Some(toast) = &self.toast {
            let elapsed = toast.shown_at.elapsed();
            if elapsed >= lifetime {
                self.toast = None;
            } else {
                ctx.request_repaint_after(lifetime - elapsed);
            }
        }
    }

    /// Render the toast notification.
    fn show_toast_area(&self, ctx: &egui::Context) {
        let Some(toast) = &self.toast else {
            return;
        };
        let color = match toast.kind {
            ToastKind::Success => colors::SUCCESS,
            ToastKind::Error => colors::ERROR,
        };

        egui::Area::new(egui::Id::new("toast"))
            .anchor(egui::Align2::RIGHT_BOTTOM, [-20.0, -20.0])
            .order(egui::Order::Foreground)
            .show(ctx, |ui| {
                egui::Frame::popup(ui.style()).show(ui, |ui| {
                    ui.colored_label(color, &toast.message);
                });
            });
    }

    /// Render the delete confirmation dialog.
    fn show_delete_dialog(&mut self, ctx: &egui::Context) {
        let Some(target) = self.delete_target.clone() else {
            return;
        };

        egui::Window::new("Confirm Delete")
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(format!("Are you sure you want to delete {}?", target.name));
                ui.label(egui::RichText::new("This action cannot be undone.").weak());
                ui.add_space(10.0);
                ui.horizontal(|ui| {
                    if ui.button("Cancel").clicked() {
                        self.delete_target = None;
                    }
                    if ui.button(egui::RichText::new("Delete").color(colors::ERROR)).clicked() {
                        self.confirm_delete();
                    }
                });
            });
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.expire_toast(ctx);

        let action = egui::TopBottomPanel::top("header")
            .show(ctx, |ui| header::show(self, ui))
            .inner;
        self.handle_header_action(action);

        egui::SidePanel::left("form_panel")
            .resizable(true)
            .default_width(380.0)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().id_salt("form_scroll").show(ui, |ui| {
                    employee_form::show(self, ui);
                    ui.add_space(20.0);
                    statistics::show(self, ui);
                });
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            employee_list::show(self, ui);
        });

        self.show_delete_dialog(ctx);
        self.show_toast_area(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app_in(dir: &tempfile::TempDir) -> App {
        App::new(AppConfig::default(), Store::new(dir.path().join("employees.json")))
    }

    fn fill(form: &mut EmployeeForm, id: &str, name: &str) {
        form.input = EmployeeInput {
            id: id.to_string(),
            name: name.to_string(),
            email: "someone@company.com".to_string(),
            department: "Sales".to_string(),
            position: "Representative".to_string(),
            ..Default::default()
        };
    }

    #[test]
    fn test_submit_adds_and_persists() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        fill(&mut app.form, "E1", "Ann");
        assert!(app.submit_form());
        assert_eq!(app.roster.len(), 1);
        assert!(app.roster.find("E1").unwrap().date_added.is_some());
        assert_eq!(app.form.input, EmployeeInput::default());
        assert_eq!(app.store.load().unwrap().len(), 1);
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Success);
    }

    #[test]
    fn test_submit_invalid_sets_field_errors() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        assert!(!app.submit_form());
        assert!(app.form.errors.get(Field::Id).is_some());
        assert!(app.roster.is_empty());
        app.form.touch(Field::Id);
        assert!(app.form.errors.get(Field::Id).is_none());
    }

    #[test]
    fn test_submit_duplicate_shows_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        fill(&mut app.form, "E1", "Ann");
        app.submit_form();
        fill(&mut app.form, "E1", "Bob");
        assert!(!app.submit_form());

        let toast = app.toast.as_ref().unwrap();
        assert_eq!(toast.kind, ToastKind::Error);
        assert_eq!(toast.message, "Employee with this ID already exists!");
        assert_eq!(app.roster.len(), 1);
        assert_eq!(app.form.input.name, "Bob");
    }

    #[test]
    fn test_edit_keeps_date_added() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        fill(&mut app.form, "E1", "Ann");
        app.submit_form();
        let added = app.roster.find("E1").unwrap().date_added;

        app.begin_edit("E1");
        assert!(app.form.is_editing());
        app.form.input.name = "Annabel".to_string();
        assert!(app.submit_form());

        let emp = app.roster.find("E1").unwrap();
        assert_eq!(emp.name, "Annabel");
        assert_eq!(emp.date_added, added);
        assert!(!app.form.is_editing());
    }

    #[test]
    fn test_delete_via_confirmation() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);

        fill(&mut app.form, "E1", "Ann");
        app.submit_form();
        app.request_delete("E1");
        assert_eq!(app.delete_target.as_ref().unwrap().name, "Ann");

        app.confirm_delete();
        assert!(app.roster.is_empty());
        assert!(app.delete_target.is_none());
        assert!(app.store.load().unwrap().is_empty());
    }

    #[test]
    fn test_export_then_import_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.load_sample_data();
        let original = app.roster.clone();

        let path = dir.path().join("export.json");
        app.export_json_to(&path);
        app.roster.replace_all(Vec::new());
        app.import_json_from(&path);

        assert_eq!(app.roster, original);
        assert_eq!(app.toast.as_ref().unwrap().message, "Imported 7 employees successfully!");
    }

    #[test]
    fn test_import_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let mut app = app_in(&dir);
        app.load_sample_data();

        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"employees": []}"#).unwrap();
        app.import_json_from(&path);

        assert_eq!(app.roster.len(), 7);
        assert_eq!(app.toast.as_ref().unwrap().message, "Invalid file format!");
    }

    #[test]
    fn test_unreadable_data_file_is_kept() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.json");
        std::fs::write(&path, "{ not an array").unwrap();

        let mut app = app_in(&dir);
        assert!(app.load_failed);
        assert!(app.roster.is_empty());
        assert_eq!(app.toast.as_ref().unwrap().kind, ToastKind::Error);

        fill(&mut app.form, "E1", "Ann");
        assert!(app.submit_form());
        assert!(!app.load_failed);

        let backup = app.store.backup_path();
        assert_eq!(std::fs::read_to_string(&backup).unwrap(), "{ not an array");
        assert_eq!(app.store.load().unwrap().len(), 1);
        assert!(app.toast.as_ref().unwrap().message.contains("employees.json.bak"));
    }

    #[test]
    fn test_reload_from_store() {
        let dir = tempfile::tempdir().unwrap();
        {
            let mut app = app_in(&dir);
            fill(&mut app.form, "E1", "Ann");
            app.submit_form();
        }
        let app = app_in(&dir);
        assert_eq!(app.roster.len(), 1);
    }
}
