//! Logger setup.
//!
//! Under systemd the records go to the user journal (`journalctl --user -t
//! ticklist -f`), key-value fields included. Anywhere else they are written
//! to stderr as one JSON object per line.

use std::io::Write;
use std::sync::Mutex;

use log::kv::{self, Key, Value as KvValue, VisitSource};
use log::{LevelFilter, Log, Metadata, Record};
use serde_json::{Map, Value};

const CRATE_TARGET: &str = "ticklist";

/// Passes this crate's records at Info (Debug when enabled) and everything
/// else at Warn.
pub struct Filtered<L> {
    inner: L,
}

impl<L: Log> Filtered<L> {
    pub fn new(inner: L) -> Self {
        Self { inner }
    }
}

impl<L: Log> Log for Filtered<L> {
    fn enabled(&self, metadata: &Metadata) -> bool {
        if metadata.target().starts_with(CRATE_TARGET) {
            let max = if crate::debug_logging() {
                LevelFilter::Debug
            } else {
                LevelFilter::Info
            };
            metadata.level() <= max
        } else {
            metadata.level() <= LevelFilter::Warn
        }
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            self.inner.log(record);
        }
    }

    fn flush(&self) {
        self.inner.flush();
    }
}

/// Writes each record as a single JSON line.
pub struct JsonLines<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> JsonLines<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }
}

impl<W: Write + Send> Log for JsonLines<W> {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let line = format_record(record);
        if let Ok(mut out) = self.out.lock() {
            let _ = writeln!(out, "{}", line);
        }
    }

    fn flush(&self) {
        if let Ok(mut out) = self.out.lock() {
            let _ = out.flush();
        }
    }
}

struct Fields(Map<String, Value>);

impl<'kvs> VisitSource<'kvs> for Fields {
    fn visit_pair(&mut self, key: Key<'kvs>, value: KvValue<'kvs>) -> Result<(), kv::Error> {
        let value = if let Some(n) = value.to_u64() {
            Value::from(n)
        } else if let Some(n) = value.to_i64() {
            Value::from(n)
        } else if let Some(b) = value.to_bool() {
            Value::from(b)
        } else {
            Value::from(value.to_string())
        };
        self.0.insert(key.as_str().to_string(), value);
        Ok(())
    }
}

pub fn format_record(record: &Record) -> Value {
    let mut fields = Fields(Map::new());
    fields.0.insert("timestamp".into(), Value::from(chrono::Utc::now().to_rfc3339()));
    fields.0.insert("level".into(), Value::from(record.level().as_str()));
    fields.0.insert("target".into(), Value::from(record.target()));
    fields.0.insert("message".into(), Value::from(record.args().to_string()));
    let _ = record.key_values().visit(&mut fields);
    Value::Object(fields.0)
}

fn journal(identifier: &str) -> Option<systemd_journal_logger::JournalLog> {
    if !systemd_journal_logger::connected_to_journal() {
        return None;
    }
    systemd_journal_logger::JournalLog::new()
        .ok()
        .map(|journal| journal.with_syslog_identifier(identifier.to_string()))
}

/// Install the process-wide logger. Call once, before anything logs.
pub fn install(identifier: &str) -> Result<(), log::SetLoggerError> {
    let logger: Box<dyn Log> = match journal(identifier) {
        Some(journal) => Box::new(Filtered::new(journal)),
        None => Box::new(Filtered::new(JsonLines::new(std::io::stderr()))),
    };
    log::set_boxed_logger(logger)?;
    // Global max must be Debug so debug records can pass once toggled on.
    log::set_max_level(LevelFilter::Debug);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn record_becomes_one_json_object_with_fields() {
        let kvs = ("status", 200u64);
        let value = format_record(
            &Record::builder()
                .args(format_args!("handled request"))
                .level(Level::Info)
                .target("ticklist::server")
                .key_values(&kvs)
                .build(),
        );

        assert_eq!(value["level"], "INFO");
        assert_eq!(value["target"], "ticklist::server");
        assert_eq!(value["message"], "handled request");
        assert_eq!(value["status"], 200);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn json_lines_writes_one_line_per_record() {
        let logger = JsonLines::new(Vec::new());
        logger.log(
            &Record::builder()
                .args(format_args!("first"))
                .level(Level::Warn)
                .target("ticklist")
                .build(),
        );
        logger.log(
            &Record::builder()
                .args(format_args!("second"))
                .level(Level::Error)
                .target("ticklist")
                .build(),
        );

        let out = logger.out.into_inner().unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<Value> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1]["message"], "second");
    }

    fn meta(level: Level, target: &str) -> Metadata<'_> {
        Metadata::builder().level(level).target(target).build()
    }

    #[test]
    fn filter_levels_by_target() {
        let filter = Filtered::new(JsonLines::new(Vec::new()));
        crate::set_debug_logging(false);
        assert!(filter.enabled(&meta(Level::Info, "ticklist::store")));
        assert!(!filter.enabled(&meta(Level::Debug, "ticklist::store")));
        assert!(!filter.enabled(&meta(Level::Info, "hyper::proto")));
        assert!(filter.enabled(&meta(Level::Warn, "hyper::proto")));

        crate::set_debug_logging(true);
        assert!(filter.enabled(&meta(Level::Debug, "ticklist::store")));
        assert!(!filter.enabled(&meta(Level::Debug, "hyper::proto")));
        crate::set_debug_logging(false);
    }
}
