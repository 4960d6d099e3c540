//! Configuration module for finanzas
//!
//! - Platform path resolution for data, settings and the audit log
//! - User settings persistence

pub mod paths;
pub mod settings;

pub use paths::FinancePaths;
pub use settings::Settings;
