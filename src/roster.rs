//! In-process employee collection with create, update, and delete operations.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use crate::error::{AppError, Result};
use crate::models::{Employee, EmployeeInput};

/// Employee collection in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap an existing list of employees.
    pub fn from_employees(employees: Vec<Employee>) -> Self {
        Self { employees }
    }

    pub fn len(&self) -> usize {
        self.employees.len()
    }

    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    pub fn as_slice(&self) -> &[Employee] {
        &self.employees
    }

    /// Get employee by identifier.
    pub fn find(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    /// Check if an identifier is taken, optionally ignoring one record.
    pub fn id_exists(&self, id: &str, exclude_id: Option<&str>) -> bool {
        self.employees
            .iter()
            .any(|e| e.id == id && exclude_id.is_none_or(|ex| e.id != ex))
    }

    /// Append a new employee.
    ///
    /// Rejects an identifier already present; the roster is unchanged on error.
    pub fn add(&mut self, employee: Employee) -> Result<&Employee> {
        if self.id_exists(&employee.id, None) {
            debug!("Rejected duplicate employee id {}", employee.id);
            return Err(AppError::duplicate(employee.id));
        }

        info!("Adding employee {} ({})", employee.id, employee.name);
        self.employees.push(employee);
        Ok(&self.employees[self.employees.len() - 1])
    }

    /// Create an employee from form input, stamping the creation time.
    pub fn create(&mut self, input: EmployeeInput, now: DateTime<Utc>) -> Result<&Employee> {
        self.add(input.into_employee(Some(now)))
    }

    /// Replace every field of an employee except its creation time.
    ///
    /// A new identifier must not belong to another employee.
    pub fn update(&mut self, original_id: &str, input: EmployeeInput) -> Result<&Employee> {
        let index = self
            .position(original_id)
            .ok_or_else(|| AppError::not_found(original_id))?;

        let new_id = input.id.trim();
        if self.id_exists(new_id, Some(original_id)) {
            return Err(AppError::duplicate(new_id));
        }

        let date_added = self.employees[index].date_added;
        let updated = input.into_employee(date_added);
        info!("Updating employee {} -> {}", original_id, updated.id);
        self.employees[index] = updated;
        Ok(&self.employees[index])
    }

    /// Remove an employee by identifier and return it.
    pub fn remove(&mut self, id: &str) -> Result<Employee> {
        let index = self.position(id).ok_or_else(|| AppError::not_found(id))?;
        let removed = self.employees.remove(index);
        info!("Removed employee {} ({})", removed.id, removed.name);
        Ok(removed)
    }

    /// Replace the whole collection, as an import does.
    pub fn replace_all(&mut self, employees: Vec<Employee>) {
        info!("Replacing roster: {} -> {} employees", self.employees.len(), employees.len());
        self.employees = employees;
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.employees.iter().position(|e| e.id == id)
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.employees.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn input(id: &str, name: &str) -> EmployeeInput {
        EmployeeInput {
            id: id.to_string(),
            name: name.to_string(),
            email: format!("{}@company.com", name.to_lowercase()),
            department: "Engineering".to_string(),
            position: "Engineer".to_string(),
            ..Default::default()
        }
    }

    fn at(day: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, day, 9, 0, 0).unwrap()
    }

    #[test]
    fn test_add_and_find() {
        let mut roster = Roster::new();
        roster.create(input("E1", "Ann"), at(1)).unwrap();
        roster.create(input("E2", "Bob"), at(2)).unwrap();

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.find("E2").unwrap().name, "Bob");
        assert!(roster.find("E3").is_none());
    }

    #[test]
    fn test_duplicate_id_rejected_and_roster_unchanged() {
        let mut roster = Roster::new();
        roster.create(input("E1", "Ann"), at(1)).unwrap();
        let before = roster.clone();

        let err = roster.create(input("E1", "Impostor"), at(2)).unwrap_err();
        assert!(matches!(err, AppError::DuplicateId(ref id) if id == "E1"));
        assert_eq!(roster, before);
    }

    #[test]
    fn test_remove_missing_reports_not_found() {
        let mut roster = Roster::new();
        roster.create(input("E1", "Ann"), at(1)).unwrap();
        let before = roster.clone();

        let err = roster.remove("nope").unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(roster, before);
    }

    #[test]
    fn test_remove_returns_employee() {
        let mut roster = Roster::new();
        roster.create(input("E1", "Ann"), at(1)).unwrap();
        roster.create(input("E2", "Bob"), at(2)).unwrap();

        let removed = roster.remove("E1").unwrap();
        assert_eq!(removed.name, "Ann");
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.as_slice()[0].id, "E2");
    }

    #[test]
    fn test_update_preserves_date_added() {
        let mut roster = Roster::new();
        roster.create(input("E1", "Ann"), at(1)).unwrap();

        let mut changed = input("E1", "Annabel");
        changed.position = "Lead".to_string();
        let updated = roster.update("E1", changed).unwrap();

        assert_eq!(updated.name, "Annabel");
        assert_eq!(updated.position, "Lead");
        assert_eq!(updated.date_added, Some(at(1)));
    }

    #[test]
    fn test_update_rename_onto_existing_rejected() {
        let mut roster = Roster::new();
        roster.create(input("E1", "Ann"), at(1)).unwrap();
        roster.create(input("E2", "Bob"), at(2)).unwrap();
        let before = roster.clone();

        let err = roster.update("E2", input("E1", "Bob")).unwrap_err();
        assert!(matches!(err, AppError::DuplicateId(_)));
        assert_eq!(roster, before);
    }

    #[test]
    fn test_update_rename_to_free_id() {
        let mut roster = Roster::new();
        roster.create(input("E1", "Ann"), at(1)).unwrap();

        roster.update("E1", input("E9", "Ann")).unwrap();
        assert!(roster.find("E1").is_none());
        assert_eq!(roster.find("E9").unwrap().date_added, Some(at(1)));
    }

    #[test]
    fn test_update_missing() {
        let mut roster = Roster::new();
        assert!(matches!(
            roster.update("E1", input("E1", "Ann")),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_replace_all() {
        let mut roster = Roster::new();
        roster.create(input("E1", "Ann"), at(1)).unwrap();

        let replacement = vec![input("X1", "Xena").into_employee(None)];
        roster.replace_all(replacement.clone());
        assert_eq!(roster.as_slice(), replacement.as_slice());
    }
}
