//! Employee Manager - employee records with a desktop app and an interactive shell.

use std::io;
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use eframe::egui;
use employee_manager as app;

use app::commands;
use app::config::{AppConfig, ConfigLoadResult};
use app::query::{SortDirection, SortKey, SortState};
use app::roster::Roster;
use app::shell::Shell;
use app::store::Store;
use app::ui::App;

/// Employee records with a desktop app and an interactive shell.
#[derive(Parser)]
#[command(name = "employee-manager", version)]
struct Cli {
    /// Use config.toml from current directory (dev mode)
    #[arg(long, global = true)]
    dev: bool,

    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Data file path, overriding the config
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the desktop app (default)
    Gui,
    /// Interactive add/list/remove menu
    Shell {
        /// Load from and save to the data file instead of starting empty
        #[arg(long)]
        persist: bool,
    },
    /// Print the employee list
    List {
        /// Case-insensitive search term
        #[arg(long, default_value = "")]
        search: String,
        /// Sort column
        #[arg(long, value_enum)]
        sort: Option<SortColumn>,
        /// Sort descending
        #[arg(long, requires = "sort")]
        desc: bool,
    },
    /// Print the statistics summary
    Stats,
    /// Export to JSON, or Excel for a .xlsx path
    Export { path: PathBuf },
    /// Replace all employees with a JSON export
    Import { path: PathBuf },
    /// Load sample employees into an empty collection
    Seed,
}

#[derive(Clone, Copy, ValueEnum)]
enum SortColumn {
    Id,
    Name,
    Email,
    Department,
    Position,
    Salary,
}

impl From<SortColumn> for SortKey {
    fn from(column: SortColumn) -> Self {
        match column {
            SortColumn::Id => SortKey::Id,
            SortColumn::Name => SortKey::Name,
            SortColumn::Email => SortKey::Email,
            SortColumn::Department => SortKey::Department,
            SortColumn::Position => SortKey::Position,
            SortColumn::Salary => SortKey::Salary,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Command::Gui);

    // The shell shares the terminal, so keep console logging quiet there
    let console_level = match command {
        Command::Gui => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };
    let _log_guard = app::logging::init(console_level, Some(app::config::data_dir().as_path()));

    tracing::info!("Employee Manager starting...");

    let config_path = if cli.dev {
        tracing::info!("Dev mode: loading config from current directory");
        PathBuf::from("config.toml")
    } else {
        cli.config.unwrap_or_else(AppConfig::default_path)
    };
    tracing::info!("Config path: {:?}", config_path);

    let (config, first_run) = match AppConfig::try_load(&config_path) {
        ConfigLoadResult::Loaded(config) => {
            tracing::info!("Config loaded successfully");
            (config, false)
        }
        ConfigLoadResult::Missing => {
            tracing::info!("Config missing, using defaults");
            (AppConfig::default(), true)
        }
        ConfigLoadResult::Invalid(e) => {
            tracing::warn!("Config invalid, using defaults: {}", e);
            (AppConfig::default(), false)
        }
    };

    let data_file = cli.data_file.unwrap_or_else(|| config.data_file());
    tracing::info!("Data file: {:?}", data_file);
    let store = Store::new(data_file);

    let mut stdout = io::stdout();
    match command {
        Command::Gui => {
            if first_run
                && let Err(e) = config.save(&config_path)
            {
                tracing::warn!("Failed to write default config: {}", e);
            }
            run_gui(config, store)?;
        }
        Command::Shell { persist } => run_shell(store, persist)?,
        Command::List { search, sort, desc } => {
            let state = SortState {
                key: sort.map(SortKey::from),
                direction: if desc { SortDirection::Desc } else { SortDirection::Asc },
            };
            commands::list(&store, &search, state, &mut stdout)?;
        }
        Command::Stats => commands::stats(&store, &config, chrono::Utc::now(), &mut stdout)?,
        Command::Export { path } => commands::export(&store, &path, &mut stdout)?,
        Command::Import { path } => commands::import(&store, &path, &mut stdout)?,
        Command::Seed => commands::seed(&store, &mut stdout)?,
    }

    Ok(())
}

/// Run the interactive menu on stdin/stdout.
fn run_shell(store: Store, persist: bool) -> anyhow::Result<()> {
    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    if persist {
        Shell::persistent(stdin, stdout, store)?.run()?;
    } else {
        Shell::new(stdin, stdout, Roster::new()).run()?;
    }
    Ok(())
}

/// Run the desktop application.
fn run_gui(config: AppConfig, store: Store) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Employee Management System")
            .with_inner_size([1400.0, 850.0])
            .with_min_inner_size([1000.0, 600.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Employee Management System",
        options,
        Box::new(|cc| {
            let mut fonts = egui::FontDefinitions::default();
            egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
            cc.egui_ctx.set_fonts(fonts);
            Ok(Box::new(App::new(config, store)))
        }),
    )
    .map_err(|e| anyhow::anyhow!("GUI error: {e}"))
}
