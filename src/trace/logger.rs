use std::{fs::OpenOptions, io::Write, sync::Mutex};

use crate::trace::trace::TraceEvent;

enum Sink {
    File(Mutex<std::fs::File>),
    Memory(Mutex<Vec<String>>),
}

/// Appends resolution events as JSON lines. Logging problems are reported on
/// stderr and never surface to the resolver.
pub struct TraceLogger {
    sink: Option<Sink>,
}

impl TraceLogger {
    /// Append to a JSONL file, or run disabled if it cannot be opened.
    pub fn new(path: &str) -> Self {
        match OpenOptions::new().create(true).append(true).open(path) {
            Ok(f) => Self {
                sink: Some(Sink::File(Mutex::new(f))),
            },
            Err(e) => {
                eprintln!("Warning: could not open trace file '{}': {}", path, e);
                Self::disabled()
            }
        }
    }

    /// Keep serialized events in memory; read them back with `lines()`.
    pub fn in_memory() -> Self {
        Self {
            sink: Some(Sink::Memory(Mutex::new(Vec::new()))),
        }
    }

    pub fn disabled() -> Self {
        Self { sink: None }
    }

    pub fn is_enabled(&self) -> bool {
        self.sink.is_some()
    }

    /// Lines captured by an in-memory logger. Empty for other sinks.
    pub fn lines(&self) -> Vec<String> {
        match &self.sink {
            Some(Sink::Memory(lines)) => lines.lock().map(|l| l.clone()).unwrap_or_default(),
            _ => Vec::new(),
        }
    }

    pub fn log(&self, event: &TraceEvent) {
        let Some(sink) = &self.sink else {
            return;
        };

        let json = match serde_json::to_string(event) {
            Ok(j) => j,
            Err(e) => {
                eprintln!("Warning: failed to serialize trace event: {}", e);
                return;
            }
        };

        match sink {
            Sink::File(file) => {
                let mut file = match file.lock() {
                    Ok(f) => f,
                    Err(e) => {
                        eprintln!("Warning: trace logger lock poisoned: {}", e);
                        return;
                    }
                };
                if let Err(e) = writeln!(file, "{}", json) {
                    eprintln!("Warning: failed to write trace event: {}", e);
                }
            }
            Sink::Memory(lines) => match lines.lock() {
                Ok(mut lines) => lines.push(json),
                Err(e) => eprintln!("Warning: trace logger lock poisoned: {}", e),
            },
        }
    }
}
