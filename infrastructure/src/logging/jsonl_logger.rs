//! JSONL file writer for conversation events.
//!
//! Each [`ConversationEvent`] becomes one JSON object per line carrying the
//! event `type`, an RFC 3339 `timestamp` and a per-file `seq` number, merged
//! with the event payload. The file is opened in append mode so several
//! sessions can share one transcript.

use roundtable_application::{ConversationEvent, ConversationLogger};
use serde_json::{Map, Value};
use std::fs::{File, OpenOptions};
use std::io::{self, LineWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::warn;

/// Transcript logger writing one JSON object per line.
///
/// `LineWriter` pushes every record to the file as soon as its newline is
/// written.
pub struct JsonlConversationLogger {
    writer: Mutex<LineWriter<File>>,
    path: PathBuf,
    seq: AtomicU64,
}

impl JsonlConversationLogger {
    /// Open (or create) the transcript at `path`, creating parent directories.
    pub fn open(path: impl AsRef<Path>) -> io::Result<Self> {
        let path = path.as_ref();
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            writer: Mutex::new(LineWriter::new(file)),
            path: path.to_path_buf(),
            seq: AtomicU64::new(0),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn next_seq(&self) -> u64 {
        self.seq.fetch_add(1, Ordering::Relaxed) + 1
    }
}

/// Merge the envelope fields into the payload; non-object payloads go under
/// `data`.
fn to_record(event: ConversationEvent, seq: u64, timestamp: String) -> Value {
    let mut record = match event.payload {
        Value::Object(map) => map,
        other => {
            let mut map = Map::new();
            map.insert("data".to_string(), other);
            map
        }
    };
    record.insert("type".to_string(), Value::from(event.event_type));
    record.insert("timestamp".to_string(), Value::from(timestamp));
    record.insert("seq".to_string(), Value::from(seq));
    Value::Object(record)
}

impl ConversationLogger for JsonlConversationLogger {
    fn log(&self, event: ConversationEvent) {
        let timestamp = chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true);
        let record = to_record(event, self.next_seq(), timestamp);

        let Ok(mut writer) = self.writer.lock() else {
            return;
        };
        if let Err(e) = writeln!(writer, "{}", record) {
            warn!(
                "Could not write conversation log {}: {}",
                self.path.display(),
                e
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

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
        let path = dir.path().join("transcript.jsonl");
        let logger = JsonlConversationLogger::open(&path).unwrap();

        logger.log(ConversationEvent::new(
            "user_message",
            json!({ "text": "What's the deployment status?", "strategy": "custom" }),
        ));
        logger.log(ConversationEvent::new(
            "agent_turn",
            json!({ "agent": "DevOpsEngineer", "text": "All green." }),
        ));
        drop(logger);

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["type"], "user_message");
        assert_eq!(records[0]["seq"], 1);
        assert_eq!(records[1]["type"], "agent_turn");
        assert_eq!(records[1]["agent"], "DevOpsEngineer");
        assert_eq!(records[1]["seq"], 2);
        assert!(records[1]["timestamp"].as_str().unwrap().ends_with('Z'));
    }

    #[test]
    fn test_appends_across_sessions() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("transcript.jsonl");

        for text in ["first", "second"] {
            let logger = JsonlConversationLogger::open(&path).unwrap();
            logger.log(ConversationEvent::new("user_message", json!({ "text": text })));
        }

        let records = read_lines(&path);
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["text"], "second");
    }

    #[test]
    fn test_non_object_payload_goes_under_data() {
        let record = to_record(
            ConversationEvent::new("closing_summary", json!("Discussion completed.")),
            7,
            "2026-01-01T00:00:00.000Z".to_string(),
        );
        assert_eq!(record["type"], "closing_summary");
        assert_eq!(record["data"], "Discussion completed.");
        assert_eq!(record["seq"], 7);
    }

    #[test]
    fn test_open_fails_when_parent_is_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let blocker = dir.path().join("blocker");
        std::fs::write(&blocker, "x").unwrap();
        assert!(JsonlConversationLogger::open(blocker.join("log.jsonl")).is_err());
    }
}
