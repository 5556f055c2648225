//! JSONL file writer for activity events.
//!
//! Each [`ActivityEvent`] is serialized as a single JSON line with a
//! `type` field and `timestamp`, appended to the journal. Unlike a
//! per-run transcript the journal spans sessions, so the file is opened
//! in append mode.

use postpilot_application::ports::activity_log::{ActivityEvent, ActivityLogger};
use serde_json::Value;
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// JSONL activity logger that writes one JSON object per line.
///
/// Thread-safe via `Mutex<BufWriter<File>>`. Flushes after every record.
pub struct JsonlActivityLogger {
    writer: Mutex<BufWriter<File>>,
    path: PathBuf,
}

impl JsonlActivityLogger {
    /// Open (or create) the journal at the given path.
    ///
    /// Creates parent directories if they don't exist.
    /// Returns `None` if the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
            && let Err(e) = std::fs::create_dir_all(parent)
        {
            warn!(
                "Could not create activity log directory {}: {}",
                parent.display(),
                e
            );
            return None;
        }

        let file = match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => f,
            Err(e) => {
                warn!("Could not open activity log {}: {}", path.display(), e);
                return None;
            }
        };

        Some(Self {
            writer: Mutex::new(BufWriter::new(file)),
            path: path.to_path_buf(),
        })
    }

    /// Get the path to the journal.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn to_record(event: ActivityEvent) -> Value {
    let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);

    match event.payload {
        Value::Object(mut map) => {
            map.insert("type".to_string(), Value::String(event.event_type.to_string()));
            map.insert("timestamp".to_string(), Value::String(timestamp));
            Value::Object(map)
        }
        other => serde_json::json!({
            "type": event.event_type,
            "timestamp": timestamp,
            "data": other,
        }),
    }
}

impl ActivityLogger for JsonlActivityLogger {
    fn log(&self, event: ActivityEvent) {
        let Ok(line) = serde_json::to_string(&to_record(event)) else {
            return;
        };

        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", line);
            let _ = writer.flush();
        }
    }
}

impl Drop for JsonlActivityLogger {
    fn drop(&mut self) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writer.flush();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn read_lines(path: &Path) -> Vec<Value> {
        std::fs::read_to_string(path)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_writes_one_record_per_event() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity.jsonl");
        let logger = JsonlActivityLogger::new(&path).unwrap();

        logger.log(ActivityEvent::new(
            "action",
            serde_json::json!({"action": "like", "target": "https://example.com/p/1", "success": true}),
        ));
        logger.log(ActivityEvent::new(
            "post_published",
            serde_json::json!({"caption": "Autumn walks"}),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        for record in &records {
            assert!(record.get("timestamp").is_some());
        }
        assert_eq!(records[0]["type"], "action");
        assert_eq!(records[0]["action"], "like");
        assert_eq!(records[0]["success"], true);
        assert_eq!(records[1]["type"], "post_published");
        assert_eq!(records[1]["caption"], "Autumn walks");
    }

    #[test]
    fn test_non_object_payload_is_wrapped() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("activity.jsonl");
        let logger = JsonlActivityLogger::new(&path).unwrap();

        logger.log(ActivityEvent::new("logout", serde_json::json!("alice")));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records[0]["type"], "logout");
        assert_eq!(records[0]["data"], "alice");
    }

    #[test]
    fn test_reopening_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("activity.jsonl");

        for user in ["alice", "bob"] {
            let logger = JsonlActivityLogger::new(&path).unwrap();
            logger.log(ActivityEvent::new("login", serde_json::json!({"username": user})));
        }

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["username"], "alice");
        assert_eq!(records[1]["username"], "bob");
    }

    #[test]
    fn test_unopenable_path_returns_none() {
        let dir = tempfile::tempdir().unwrap();
        // A directory cannot be opened as the journal file
        assert!(JsonlActivityLogger::new(dir.path()).is_none());
    }
}
