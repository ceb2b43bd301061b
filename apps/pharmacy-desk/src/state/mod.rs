//! # State Module
//!
//! Application state shared by the command layer and the form loop.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         State Types                                     │
//! │                                                                         │
//! │  ┌──────────────────────┐        ┌──────────────────────┐              │
//! │  │      DbState         │        │     ConfigState      │              │
//! │  │  ──────────────────  │        │  ──────────────────  │              │
//! │  │  PharmacyStore       │        │  database path       │              │
//! │  │  (SqlitePool inside) │        │  currency display    │              │
//! │  │                      │        │  view output format  │              │
//! │  │  Used by: commands   │        │  Used by: run, forms │              │
//! │  └──────────────────────┘        └──────────────────────┘              │
//! │                                                                         │
//! │  Both are read-only after startup, so neither needs a lock.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod db;

pub use config::{ConfigState, ViewFormat};
pub use db::DbState;
