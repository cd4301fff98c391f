//! One-shot command-line operations against the data file.

use std::io::Write;
use std::path::Path;

use chrono::{DateTime, Utc};
use tracing::info;

use crate::config::AppConfig;
use crate::error::Result;
use crate::query::{self, SortState};
use crate::roster::Roster;
use crate::stats::Statistics;
use crate::store::{self, Store};
use crate::{export, format, sample};

/// Print matching employees as tab-separated rows.
pub fn list(store: &Store, search: &str, sort: SortState, out: &mut impl Write) -> Result<()> {
    let employees = store.load()?;
    let rows = query::visible(&employees, search, sort);

    if rows.is_empty() {
        writeln!(out, "No employees found.")?;
        return Ok(());
    }

    writeln!(out, "ID\tName\tEmail\tDepartment\tPosition\tPhone\tSalary")?;
    for emp in &rows {
        writeln!(
            out,
            "{}\t{}\t{}\t{}\t{}\t{}\t{}",
            emp.id, emp.name, emp.email, emp.department, emp.position, emp.phone, emp.salary
        )?;
    }
    writeln!(out, "\nShowing {} of {} employees", rows.len(), employees.len())?;
    Ok(())
}

/// Print the statistics summary.
pub fn stats(store: &Store, config: &AppConfig, now: DateTime<Utc>, out: &mut impl Write) -> Result<()> {
    let employees = store.load()?;
    let stats = Statistics::compute_with_window(&employees, now, config.stats.recent_days);

    writeln!(out, "Total employees:\t{}", stats.total_employees)?;
    writeln!(out, "Recent hires:\t{}", stats.recent_hires)?;
    writeln!(out, "Average salary:\t{}", format::amount_or_na(stats.average_salary))?;
    writeln!(out, "Total budget:\t{}", format::amount_or_na(stats.total_salary))?;

    if stats.departments.is_empty() {
        return Ok(());
    }

    let top_n = config.stats.top_departments;
    writeln!(out, "\nDepartment breakdown:")?;
    for (department, count) in stats.top_departments(top_n) {
        writeln!(out, "{department}\t{count}\t{:.1}%", stats.percentage(count))?;
    }
    let hidden = stats.hidden_departments(top_n);
    if hidden > 0 {
        writeln!(out, "+{hidden} more departments")?;
    }

    writeln!(out, "\nQuick insights:")?;
    for line in stats.insights() {
        writeln!(out, "{line}")?;
    }
    Ok(())
}

/// Export to JSON, or to Excel when the path ends in `.xlsx`.
pub fn export(store: &Store, path: &Path, out: &mut impl Write) -> Result<()> {
    let employees = store.load()?;
    let is_excel = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("xlsx"));

    if is_excel {
        export::export_employees_to_excel(&employees, path)?;
    } else {
        store::export_json(&employees, path)?;
    }
    writeln!(out, "Exported {} employees to {}", employees.len(), path.display())?;
    Ok(())
}

/// Replace the saved collection with a JSON export.
pub fn import(store: &Store, path: &Path, out: &mut impl Write) -> Result<()> {
    let employees = store::import_json(path)?;
    let count = employees.len();
    store.save(&employees)?;
    info!("Imported {} employees from {:?}", count, path);
    writeln!(out, "Imported {count} employees successfully!")?;
    Ok(())
}

/// Seed demonstration data when the saved collection is empty.
pub fn seed(store: &Store, out: &mut impl Write) -> Result<()> {
    let mut roster = Roster::from_employees(store.load()?);
    if sample::seed_if_empty(&mut roster) {
        store.save(roster.as_slice())?;
        writeln!(out, "Loaded {} sample employees", roster.len())?;
    } else {
        writeln!(out, "Collection already has {} employees; nothing loaded", roster.len())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::query::SortKey;
    use chrono::TimeZone;

    fn seeded_store(dir: &tempfile::TempDir) -> Store {
        let store = Store::new(dir.path().join("employees.json"));
        seed(&store, &mut Vec::new()).unwrap();
        store
    }

    fn output(f: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> String {
        let mut out = Vec::new();
        f(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_list_with_search_and_sort() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(&dir);

        let mut sort = SortState::default();
        sort.toggle(SortKey::Name);
        let text = output(|out| list(&store, "engineering", sort, out));

        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].starts_with("EMP006\tEmily Davis"));
        assert!(lines[2].starts_with("EMP001\tJohn Doe"));
        assert!(text.contains("Showing 2 of 7 employees"));
    }

    #[test]
    fn test_list_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::new(dir.path().join("employees.json"));
        let text = output(|out| list(&store, "", SortState::default(), out));
        assert_eq!(text, "No employees found.\n");
    }

    #[test]
    fn test_stats_output() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(&dir);
        let now = Utc.with_ymd_and_hms(2024, 3, 20, 0, 0, 0).unwrap();

        let text = output(|out| stats(&store, &AppConfig::default(), now, out));
        assert!(text.contains("Total employees:\t7"));
        assert!(text.contains("Recent hires:\t4"));
        assert!(text.contains("Average salary:\t$77,857"));
        assert!(text.contains("Total budget:\t$545,000"));
        assert!(text.contains("Engineering\t2\t28.6%"));
        assert!(text.contains("+3 more departments"));
    }

    #[test]
    fn test_seed_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(&dir);
        let text = output(|out| seed(&store, out));
        assert!(text.contains("already has 7 employees"));
        assert_eq!(store.load().unwrap().len(), 7);
    }

    #[test]
    fn test_export_import_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(&dir);
        let original = store.load().unwrap();

        let path = dir.path().join("backup.json");
        output(|out| export(&store, &path, out));
        store.save(&[]).unwrap();

        let text = output(|out| import(&store, &path, out));
        assert_eq!(text, "Imported 7 employees successfully!\n");
        assert_eq!(store.load().unwrap(), original);
    }

    #[test]
    fn test_import_rejects_non_array() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(&dir);
        let path = dir.path().join("bad.json");
        std::fs::write(&path, "42").unwrap();

        let err = import(&store, &path, &mut Vec::new()).unwrap_err();
        assert_eq!(err.to_string(), "Invalid file format!");
        assert_eq!(store.load().unwrap().len(), 7);
    }

    #[test]
    fn test_export_excel_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let store = seeded_store(&dir);
        let path = dir.path().join("staff.XLSX");
        output(|out| export(&store, &path, out));
        let bytes = std::fs::read(&path).unwrap();
        assert_eq!(&bytes[..2], b"PK");
    }
}
