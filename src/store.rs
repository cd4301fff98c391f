//! JSON file persistence, import, and export for the employee collection.
//!
//! The whole collection lives as one JSON array in a single data file and is
//! rewritten after every mutation.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::{AppError, Result};
use crate::models::Employee;

/// File-backed storage for the employee list.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
}

impl Store {
    /// Create a store for the given data file. Nothing is read until `load`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the saved collection. A missing file is an empty collection.
    pub fn load(&self) -> Result<Vec<Employee>> {
        if !self.path.exists() {
            debug!("No data file at {:?}, starting empty", self.path);
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        let employees: Vec<Employee> = serde_json::from_str(&content)?;
        info!("Loaded {} employees from {:?}", employees.len(), self.path);
        Ok(employees)
    }

    /// Persist the full collection, replacing the previous file.
    pub fn save(&self, employees: &[Employee]) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string(employees)?;
        fs::write(&self.path, content)?;
        debug!("Saved {} employees to {:?}", employees.len(), self.path);
        Ok(())
    }

    /// Path the data file is moved to by `backup`, e.g. `employees.json.bak`.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = self.path.as_os_str().to_owned();
        name.push(".bak");
        PathBuf::from(name)
    }

    /// Move the current data file aside so the next `save` cannot overwrite it.
    pub fn backup(&self) -> Result<PathBuf> {
        let target = self.backup_path();
        fs::rename(&self.path, &target)?;
        warn!("Moved data file {:?} to {:?}", self.path, target);
        Ok(target)
    }
}

/// Write employees as a pretty-printed JSON array.
pub fn export_json(employees: &[Employee], path: &Path) -> Result<()> {
    let content = serde_json::to_string_pretty(employees)?;
    fs::write(path, content)?;
    info!("Exported {} employees to {:?}", employees.len(), path);
    Ok(())
}

/// Read an exported JSON array.
///
/// A payload that parses but is not an array is `InvalidImport`; anything that
/// cannot be read or decoded is `ImportRead`.
pub fn import_json(path: &Path) -> Result<Vec<Employee>> {
    let content = fs::read_to_string(path).map_err(AppError::import_read)?;
    parse_import(&content)
}

/// Decode import file contents.
pub fn parse_import(content: &str) -> Result<Vec<Employee>> {
    let value: Value = serde_json::from_str(content).map_err(AppError::import_read)?;
    if !value.is_array() {
        warn!("Import rejected: payload is not a JSON array");
        return Err(AppError::InvalidImport);
    }
    let employees: Vec<Employee> = serde_json::from_value(value).map_err(AppError::import_read)?;
    Ok(employees)
}

/// Default export filename, e.g. `employees-2024-03-05.json`.
pub fn default_export_filename(date: NaiveDate) -> String {
    format!("employees-{}.json", date.format("%Y-%m-%d"))
}
