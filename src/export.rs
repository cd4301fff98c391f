//! Excel export and file dialogs.

use crate::models::Employee;
use chrono::Local;
use rust_xlsxwriter::{Color, Format, FormatBorder, Workbook, XlsxError};
use std::path::{Path, PathBuf};

/// Export employees to Excel file.
pub fn export_employees_to_excel(employees: &[Employee], path: &Path) -> Result<(), XlsxError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();

    worksheet.set_name("Employees")?;

    // Header format
    let header_format = Format::new()
        .set_bold()
        .set_background_color(Color::RGB(0x4472C4))
        .set_font_color(Color::White)
        .set_border(FormatBorder::Thin);

    let salary_format = Format::new().set_num_format("$#,##0");

    let headers = [
        "Employee ID",
        "Full Name",
        "Email",
        "Department",
        "Position",
        "Phone",
        "Salary",
        "Date Added",
    ];

    for (col, header) in headers.iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, *header, &header_format)?;
    }

    // Column widths
    worksheet.set_column_width(0, 12)?; // Employee ID
    worksheet.set_column_width(1, 25)?; // Full Name
    worksheet.set_column_width(2, 30)?; // Email
    worksheet.set_column_width(3, 20)?; // Department
    worksheet.set_column_width(4, 28)?; // Position
    worksheet.set_column_width(5, 18)?; // Phone
    worksheet.set_column_width(6, 12)?; // Salary
    worksheet.set_column_width(7, 12)?; // Date Added

    for (idx, emp) in employees.iter().enumerate() {
        let row = (idx + 1) as u32;

        worksheet.write_string(row, 0, &emp.id)?;
        worksheet.write_string(row, 1, &emp.name)?;
        worksheet.write_string(row, 2, &emp.email)?;
        worksheet.write_string(row, 3, &emp.department)?;
        worksheet.write_string(row, 4, &emp.position)?;
        worksheet.write_string(row, 5, &emp.phone)?;

        match emp.salary_amount() {
            Some(amount) => {
                worksheet.write_number_with_format(row, 6, amount, &salary_format)?;
            }
            None => {
                worksheet.write_string(row, 6, &emp.salary)?;
            }
        }

        match emp.date_added {
            Some(date) => {
                let local = date.with_timezone(&Local);
                worksheet.write_string(row, 7, local.format("%Y-%m-%d").to_string())?;
            }
            None => {
                worksheet.write_string(row, 7, "")?;
            }
        }
    }

    // Autofilter
    if !employees.is_empty() {
        let last_row = employees.len() as u32;
        worksheet.autofilter(0, 0, last_row, 7)?;
    }

    // Freeze top row
    worksheet.set_freeze_panes(1, 0)?;

    workbook.save(path)?;
    Ok(())
}

/// Generate default filename for an Excel export.
pub fn generate_export_filename(prefix: &str) -> String {
    let now = Local::now();
    format!("{prefix}_{ts}.xlsx", ts = now.format("%Y%m%d_%H%M%S"))
}

/// Open save file dialog for an Excel workbook.
pub fn show_excel_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("Excel Files", &["xlsx"])
        .save_file()
}

/// Open save file dialog for a JSON export.
pub fn show_json_save_dialog(default_name: &str) -> Option<PathBuf> {
    rfd::FileDialog::new()
        .set_file_name(default_name)
        .add_filter("JSON Files", &["json"])
        .save_file()
}

/// Open file dialog for a JSON import.
pub fn show_json_open_dialog() -> Option<PathBuf> {
    rfd::FileDialog::new()
        .add_filter("JSON Files", &["json"])
        .pick_file()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_export_writes_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("employees.xlsx");
        export_employees_to_excel(&crate::sample::sample_employees(), &path).unwrap();
        assert!(std::fs::metadata(&path).unwrap().len() > 0);
    }

    #[test]
    fn test_export_empty_list() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.xlsx");
        export_employees_to_excel(&[], &path).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_generate_export_filename() {
        let name = generate_export_filename("employees");
        assert!(name.starts_with("employees_"));
        assert!(name.ends_with(".xlsx"));
    }
}
