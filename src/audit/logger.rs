//! Persistence for the audit trail
//!
//! `audit.log` is JSON Lines: every data change appends one serialized
//! [`AuditEntry`]. The file is never rewritten, so `finanzas audit` reads it
//! front to back.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{FinanceError, FinanceResult};

use super::entry::AuditEntry;

fn io_error(action: &str, err: std::io::Error) -> FinanceError {
    FinanceError::Io(format!("{} audit log: {}", action, err))
}

pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    pub fn new(log_path: PathBuf) -> Self {
        Self { log_path }
    }

    /// Serialize `entry` and append it as a single line
    ///
    /// The line is built before the file is opened, so a serialization
    /// failure leaves the log untouched.
    pub fn log(&self, entry: &AuditEntry) -> FinanceResult<()> {
        let mut line = serde_json::to_string(entry)
            .map_err(|e| FinanceError::Json(format!("Failed to serialize audit entry: {}", e)))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| io_error("Failed to open", e))?;

        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| io_error("Failed to append to", e))
    }

    /// Every recorded entry in write order; a missing file means no entries
    pub fn read_all(&self) -> FinanceResult<Vec<AuditEntry>> {
        let contents = match fs::read_to_string(&self.log_path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(io_error("Failed to read", e)),
        };

        contents
            .lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|e| {
                    FinanceError::Json(format!("Audit log line {} is not valid: {}", index + 1, e))
                })
            })
            .collect()
    }

    /// At most `count` entries from the end of the log, still oldest first
    pub fn read_recent(&self, count: usize) -> FinanceResult<Vec<AuditEntry>> {
        let mut entries = self.read_all()?;
        let skip = entries.len().saturating_sub(count);
        entries.drain(..skip);
        Ok(entries)
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::entry::{EntityType, Operation};
    use serde_json::json;
    use tempfile::TempDir;

    fn create_test_logger() -> (AuditLogger, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let logger = AuditLogger::new(temp_dir.path().join("audit.log"));
        (logger, temp_dir)
    }

    #[test]
    fn test_log_and_read() {
        let (logger, _temp) = create_test_logger();
        let entry = AuditEntry::create(
            EntityType::Transaction,
            "txn-12345678",
            Some("Supermercado".to_string()),
            &json!({"title": "Supermercado"}),
        );

        logger.log(&entry).unwrap();

        let entries = logger.read_all().unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].operation, Operation::Create);
        assert_eq!(entries[0].entity_type, EntityType::Transaction);
        assert_eq!(entries[0].entity_name.as_deref(), Some("Supermercado"));
    }

    #[test]
    fn test_read_recent() {
        let (logger, _temp) = create_test_logger();

        for i in 0..10 {
            let entry = AuditEntry::create(
                EntityType::Budget,
                format!("bud-{}", i),
                None,
                &json!({"index": i}),
            );
            logger.log(&entry).unwrap();
        }

        let recent = logger.read_recent(3).unwrap();
        let ids: Vec<_> = recent.iter().map(|e| e.entity_id.as_str()).collect();
        assert_eq!(ids, vec!["bud-7", "bud-8", "bud-9"]);

        assert_eq!(logger.read_recent(50).unwrap().len(), 10);
    }

    #[test]
    fn test_empty_log() {
        let (logger, _temp) = create_test_logger();
        assert!(!logger.path().exists());
        assert!(logger.read_all().unwrap().is_empty());
    }

    #[test]
    fn test_blank_lines_are_skipped() {
        let (logger, _temp) = create_test_logger();
        let entry = AuditEntry::create(EntityType::User, "usr-1", None, &json!({}));
        logger.log(&entry).unwrap();

        let mut contents = std::fs::read_to_string(logger.path()).unwrap();
        contents.push_str("\n   \n");
        std::fs::write(logger.path(), contents).unwrap();
        logger.log(&entry).unwrap();

        assert_eq!(logger.read_all().unwrap().len(), 2);
    }

    #[test]
    fn test_corrupt_line_is_reported() {
        let (logger, _temp) = create_test_logger();
        std::fs::write(logger.path(), "{\"broken\n").unwrap();

        let err = logger.read_all().unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
