//! Search filtering and column sorting for the employee list.

use std::cmp::Ordering;

use crate::models::Employee;

/// Column the list can be sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Id,
    Name,
    Email,
    Department,
    Position,
    Salary,
}

impl SortKey {
    /// All sortable columns in display order.
    pub const ALL: [SortKey; 6] = [
        SortKey::Id,
        SortKey::Name,
        SortKey::Email,
        SortKey::Department,
        SortKey::Position,
        SortKey::Salary,
    ];

    /// Get the column header for the key.
    pub fn name(&self) -> &'static str {
        match self {
            SortKey::Id => "ID",
            SortKey::Name => "Name",
            SortKey::Email => "Email",
            SortKey::Department => "Department",
            SortKey::Position => "Position",
            SortKey::Salary => "Salary",
        }
    }

    fn value<'a>(&self, employee: &'a Employee) -> &'a str {
        match self {
            SortKey::Id => &employee.id,
            SortKey::Name => &employee.name,
            SortKey::Email => &employee.email,
            SortKey::Department => &employee.department,
            SortKey::Position => &employee.position,
            SortKey::Salary => &employee.salary,
        }
    }

    /// Compare two employees by this column in ascending order.
    ///
    /// Text compares case-insensitively. Salary compares numerically, with
    /// missing or non-numeric values ordered first.
    pub fn compare(&self, a: &Employee, b: &Employee) -> Ordering {
        match self {
            SortKey::Salary => match (a.salary_amount(), b.salary_amount()) {
                (Some(x), Some(y)) => x.total_cmp(&y),
                (None, Some(_)) => Ordering::Less,
                (Some(_), None) => Ordering::Greater,
                (None, None) => Ordering::Equal,
            },
            _ => self.value(a).to_lowercase().cmp(&self.value(b).to_lowercase()),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Current sort column and direction. No key means insertion order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortState {
    /// Handle a click on a column header.
    ///
    /// Clicking the ascending column flips it to descending; any other click
    /// sorts that column ascending.
    pub fn toggle(&mut self, key: SortKey) {
        self.direction = if self.key == Some(key) && self.direction == SortDirection::Asc {
            SortDirection::Desc
        } else {
            SortDirection::Asc
        };
        self.key = Some(key);
    }

    /// Direction for a column, if it is the active one.
    pub fn direction_for(&self, key: SortKey) -> Option<SortDirection> {
        (self.key == Some(key)).then_some(self.direction)
    }
}

/// Check whether an employee matches a search term.
///
/// Matches case-insensitively against name, identifier, and department.
pub fn matches(employee: &Employee, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();
    employee.name.to_lowercase().contains(&term)
        || employee.id.to_lowercase().contains(&term)
        || employee.department.to_lowercase().contains(&term)
}

/// Employees matching the search term, in collection order.
pub fn filter<'a>(employees: &'a [Employee], term: &str) -> Vec<&'a Employee> {
    employees.iter().filter(|e| matches(e, term)).collect()
}

/// Sort rows in place. The sort is stable in both directions.
pub fn sort(rows: &mut [&Employee], state: SortState) {
    let Some(key) = state.key else {
        return;
    };
    match state.direction {
        SortDirection::Asc => rows.sort_by(|a, b| key.compare(a, b)),
        SortDirection::Desc => rows.sort_by(|a, b| key.compare(b, a)),
    }
}

/// Filter then sort, producing the rows the list displays.
pub fn visible<'a>(employees: &'a [Employee], term: &str, state: SortState) -> Vec<&'a Employee> {
    let mut rows = filter(employees, term);
    sort(&mut rows, state);
    rows
}
