//! # Pharmacy Desk Library
//!
//! Command layer and terminal forms for the pharmacy record store.
//!
//! ## Module Organization
//! ```text
//! pharmacy_desk/
//! ├── lib.rs          ◄─── You are here (startup & run)
//! ├── state/
//! │   ├── db.rs       ◄─── DbState (wraps PharmacyStore)
//! │   └── config.rs   ◄─── ConfigState (PHARMACY_* variables)
//! ├── commands/       ◄─── One async fn per user action
//! ├── forms.rs        ◄─── Menu and pages over stdin/stdout
//! └── error.rs        ◄─── API error type for commands
//! ```

pub mod commands;
pub mod error;
pub mod forms;
pub mod state;

use directories::ProjectDirs;
use std::io;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

use forms::FormSession;
use pharmacy_db::{DbConfig, PharmacyStore};
use state::{ConfigState, DbState};

/// Database file name inside the platform data directory.
pub const DATABASE_FILE: &str = "pharmacy.db";

/// Runs the desk application until the user quits or input ends.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                       Application Startup                               │
/// │                                                                         │
/// │  1. Initialize Logging ───────────────────────────────────────────────► │
/// │     • tracing-subscriber with env filter, written to stderr             │
/// │     • Default: info,pharmacy=debug,sqlx=warn; override with RUST_LOG   │
/// │                                                                         │
/// │  2. Load Configuration ───────────────────────────────────────────────► │
/// │     • ConfigState::from_env()                                           │
/// │                                                                         │
/// │  3. Open Database ────────────────────────────────────────────────────► │
/// │     • PHARMACY_DB_PATH, else the platform data directory               │
/// │     • SQLite with WAL mode, missing tables created                      │
/// │                                                                         │
/// │  4. Run Forms ────────────────────────────────────────────────────────► │
/// │     • Menu on stdout, answers from stdin                                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub async fn run() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    info!("Starting Pharmacy Desk");

    let config = ConfigState::from_env();
    let db_path = get_database_path(&config)?;
    info!(?db_path, "Database path determined");

    let store = PharmacyStore::new(
        DbConfig::new(db_path).enforce_foreign_keys(config.enforce_foreign_keys),
    )
    .await?;
    info!("Database connected and tables ready");

    let db = DbState::new(store);

    let stdin = io::stdin();
    FormSession::new(stdin.lock(), io::stdout(), &db, &config)
        .run()
        .await?;

    db.inner().close().await;
    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// Logs go to stderr so they never interleave with the forms on stdout.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=pharmacy_db=trace` - Trace the store only
/// - Default: `info,pharmacy=debug,sqlx=warn`
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,pharmacy=debug,sqlx=warn"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

/// Determines the database file path.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.pharmacy.records/pharmacy.db`
/// - **Windows**: `%APPDATA%\pharmacy\records\data\pharmacy.db`
/// - **Linux**: `~/.local/share/records/pharmacy.db`
///
/// `PHARMACY_DB_PATH` (via [`ConfigState`]) takes precedence.
pub fn get_database_path(config: &ConfigState) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if let Some(path) = &config.database_path {
        return Ok(path.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "pharmacy", "records")
        .ok_or("Could not determine app data directory")?;

    let data_dir = proj_dirs.data_dir();

    // Create directory if it doesn't exist
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join(DATABASE_FILE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_path_wins() {
        let config = ConfigState {
            database_path: Some(PathBuf::from("/srv/pharmacy/test.db")),
            ..ConfigState::default()
        };

        assert_eq!(
            get_database_path(&config).unwrap(),
            PathBuf::from("/srv/pharmacy/test.db")
        );
    }
}
