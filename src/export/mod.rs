//! Data export
//!
//! - JSON and YAML: every transaction and budget goal with metadata
//!   (user accounts are never exported)
//! - CSV: transactions or budget goals, one row each

pub mod csv;
pub mod json;
pub mod yaml;

pub use self::csv::{export_budgets_csv, export_transactions_csv};
pub use json::{export_full_json, FullExport, EXPORT_SCHEMA_VERSION};
pub use yaml::export_full_yaml;
