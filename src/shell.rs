//! Interactive numbered-menu shell over stdin/stdout.

use std::io::{self, BufRead, Write};

use tracing::{error, info};

use crate::models::EmployeeInput;
use crate::roster::Roster;
use crate::store::Store;

const APP_TITLE: &str = "Employee Management System";

/// Menu choice parsed from a line of input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Remove,
    Exit,
}

impl MenuChoice {
    /// Parse the menu number. Surrounding whitespace is ignored.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(Self::Add),
            "2" => Some(Self::List),
            "3" => Some(Self::Remove),
            "4" => Some(Self::Exit),
            _ => None,
        }
    }
}

/// Outcome of one menu action.
enum Flow {
    Continue,
    Quit,
}

/// Prompt loop reading commands from `R` and writing to `W`.
pub struct Shell<R, W> {
    input: R,
    output: W,
    roster: Roster,
    store: Option<Store>,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Create a shell over an in-memory roster.
    pub fn new(input: R, output: W, roster: Roster) -> Self {
        Self {
            input,
            output,
            roster,
            store: None,
        }
    }

    /// Start from the saved roster and save back to `store` after every change.
    ///
    /// An unreadable data file is reported on `output` and left untouched; the
    /// session then runs on an empty roster without saving.
    pub fn persistent(input: R, mut output: W, store: Store) -> io::Result<Self> {
        match store.load() {
            Ok(employees) => Ok(Self::new(input, output, Roster::from_employees(employees)).with_store(store)),
            Err(e) => {
                error!("Failed to load {:?}: {}", store.path(), e);
                writeln!(
                    output,
                    "Could not load {} ({e}). Changes in this session will not be saved.",
                    store.path().display()
                )?;
                Ok(Self::new(input, output, Roster::new()))
            }
        }
    }

    /// Save the roster to `store` after every change.
    pub fn with_store(mut self, store: Store) -> Self {
        self.store = Some(store);
        self
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    pub fn into_roster(self) -> Roster {
        self.roster
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.output, "Welcome to {APP_TITLE}!")?;
        writeln!(self.output, "This application helps you manage employee records.")?;

        loop {
            self.show_menu()?;
            let Some(line) = self.prompt("Please select an option (1-4): ")? else {
                writeln!(self.output, "\n\nGoodbye! Thank you for using {APP_TITLE}!")?;
                break;
            };

            let flow = match MenuChoice::parse(&line) {
                Some(MenuChoice::Add) => self.add_employee()?,
                Some(MenuChoice::List) => self.list_employees()?,
                Some(MenuChoice::Remove) => self.remove_employee()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Thank you for using {APP_TITLE}!")?;
                    Flow::Quit
                }
                None => {
                    writeln!(self.output, "Invalid choice! Please select a valid option (1-4).")?;
                    Flow::Continue
                }
            };

            if matches!(flow, Flow::Quit) {
                break;
            }
        }

        self.output.flush()
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== {APP_TITLE} ===")?;
        writeln!(self.output, "1. Add Employee")?;
        writeln!(self.output, "2. List All Employees")?;
        writeln!(self.output, "3. Remove Employee by ID")?;
        writeln!(self.output, "4. Exit")?;
        writeln!(self.output, "=====================================")
    }

    /// Print a prompt and read one line. `None` means input ended.
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        write!(self.output, "{text}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn add_employee(&mut self) -> io::Result<Flow> {
        let Some(name) = self.prompt("Enter employee name: ")? else {
            return Ok(Flow::Quit);
        };
        if name.trim().is_empty() {
            writeln!(self.output, "Employee name cannot be empty!")?;
            return Ok(Flow::Continue);
        }

        let Some(id) = self.prompt("Enter employee ID: ")? else {
            return Ok(Flow::Quit);
        };
        if id.trim().is_empty() {
            writeln!(self.output, "Employee ID cannot be empty!")?;
            return Ok(Flow::Continue);
        }

        let employee = EmployeeInput::basic(&id, &name).into_employee(None);
        match self.roster.add(employee) {
            Ok(emp) => {
                let message = format!(
                    "\nEmployee \"{}\" with ID \"{}\" has been added successfully!",
                    emp.name, emp.id
                );
                writeln!(self.output, "{message}")?;
                self.persist()?;
            }
            Err(e) => writeln!(self.output, "{e}")?,
        }

        Ok(Flow::Continue)
    }

    fn list_employees(&mut self) -> io::Result<Flow> {
        writeln!(self.output, "\n=== Employee List ===")?;

        if self.roster.is_empty() {
            writeln!(self.output, "No employees found.")?;
        } else {
            writeln!(self.output, "ID\t\tName")?;
            writeln!(self.output, "--\t\t----")?;
            for emp in &self.roster {
                writeln!(self.output, "{}\t\t{}", emp.id, emp.name)?;
            }
            writeln!(self.output, "\nTotal employees: {}", self.roster.len())?;
        }

        Ok(Flow::Continue)
    }

    fn remove_employee(&mut self) -> io::Result<Flow> {
        if self.roster.is_empty() {
            writeln!(self.output, "No employees to remove.")?;
            return Ok(Flow::Continue);
        }

        let Some(id) = self.prompt("Enter employee ID to remove: ")? else {
            return Ok(Flow::Quit);
        };
        let id = id.trim();
        if id.is_empty() {
            writeln!(self.output, "Employee ID cannot be empty!")?;
            return Ok(Flow::Continue);
        }

        match self.roster.remove(id) {
            Ok(removed) => {
                writeln!(
                    self.output,
                    "\nEmployee \"{}\" with ID \"{}\" has been removed successfully!",
                    removed.name, removed.id
                )?;
                self.persist()?;
            }
            Err(e) => writeln!(self.output, "{e}")?,
        }

        Ok(Flow::Continue)
    }

    fn persist(&mut self) -> io::Result<()> {
        let Some(store) = &self.store else {
            return Ok(());
        };
        match store.save(self.roster.as_slice()) {
            Ok(()) => info!("Roster saved to {:?}", store.path()),
            Err(e) => {
                error!("Failed to save roster: {}", e);
                writeln!(self.output, "Warning: changes could not be saved ({e})")?;
            }
        }
        Ok(())
    }
}
