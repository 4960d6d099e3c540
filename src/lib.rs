//! finanzas - terminal personal-finance tracker
//!
//! Records income and expense transactions, tracks monthly spending limits
//! per category and derives summaries, time series and insights from them.
//!
//! # Architecture
//!
//! - `config`: path resolution and user settings
//! - `error`: error types
//! - `models`: transactions, budget goals, users, category catalogue
//! - `storage`: JSON file tables and the signed-in profile
//! - `analytics`: pure aggregations and insight generation
//! - `services`: validation and business rules over storage
//! - `audit`: append-only log of data changes
//! - `display`: table rendering for the CLI
//! - `export`: JSON, YAML and CSV export
//! - `cli`: command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use finanzas::config::{FinancePaths, Settings};
//! use finanzas::storage::initialize_storage;
//!
//! let paths = FinancePaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = initialize_storage(&paths, &settings)?;
//! ```

pub mod analytics;
pub mod audit;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod export;
pub mod logging;
pub mod models;
pub mod services;
pub mod storage;

pub use error::{FinanceError, FinanceResult};
