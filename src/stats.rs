//! Company statistics derived from the employee collection.

use chrono::{DateTime, TimeDelta, Utc};

use crate::models::Employee;

/// Trailing window that counts as a recent hire.
pub const DEFAULT_RECENT_DAYS: i64 = 30;

/// Aggregated figures shown in the statistics panel.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Statistics {
    pub total_employees: usize,
    /// Employee count per department, in order of first appearance.
    pub departments: Vec<(String, usize)>,
    pub total_salary: f64,
    pub salary_count: usize,
    pub average_salary: f64,
    pub recent_hires: usize,
}

impl Statistics {
    /// Compute statistics with the default 30-day recent-hire window.
    pub fn compute(employees: &[Employee], now: DateTime<Utc>) -> Self {
        Self::compute_with_window(employees, now, DEFAULT_RECENT_DAYS)
    }

    /// Compute statistics in a single pass over the collection.
    pub fn compute_with_window(employees: &[Employee], now: DateTime<Utc>, recent_days: i64) -> Self {
        if employees.is_empty() {
            return Self::default();
        }

        let threshold = now - TimeDelta::days(recent_days);
        let mut stats = Self {
            total_employees: employees.len(),
            ..Default::default()
        };

        for emp in employees {
            match stats.departments.iter_mut().find(|(name, _)| *name == emp.department) {
                Some((_, count)) => *count += 1,
                None => stats.departments.push((emp.department.clone(), 1)),
            }

            if let Some(amount) = emp.salary_amount() {
                stats.total_salary += amount;
                stats.salary_count += 1;
            }

            if emp.date_added.is_some_and(|added| added > threshold) {
                stats.recent_hires += 1;
            }
        }

        if stats.salary_count > 0 {
            stats.average_salary = stats.total_salary / stats.salary_count as f64;
        }

        stats
    }

    /// Largest departments by head count. Ties keep first-appearance order.
    pub fn top_departments(&self, n: usize) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .departments
            .iter()
            .map(|(name, count)| (name.as_str(), *count))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked.truncate(n);
        ranked
    }

    /// Number of departments not shown in a top-`n` breakdown.
    pub fn hidden_departments(&self, n: usize) -> usize {
        self.departments.len().saturating_sub(n)
    }

    /// Share of all employees, in percent.
    pub fn percentage(&self, count: usize) -> f64 {
        if self.total_employees == 0 {
            return 0.0;
        }
        count as f64 / self.total_employees as f64 * 100.0
    }

    /// Short observations for the "Quick Insights" block.
    pub fn insights(&self) -> Vec<String> {
        if self.total_employees == 0 {
            return Vec::new();
        }

        let mut lines = vec![format!("{} departments active", self.departments.len())];

        if self.recent_hires > 0 {
            let plural = if self.recent_hires > 1 { "s" } else { "" };
            lines.push(format!(
                "Growing team with {} new hire{plural} this month",
                self.recent_hires
            ));
        }

        if let Some((name, count)) = self.top_departments(1).first() {
            lines.push(format!("{name} is the largest department ({count} employees)"));
        }

        lines
    }
}
