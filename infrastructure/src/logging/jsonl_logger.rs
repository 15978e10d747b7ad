//! JSONL session transcript
//!
//! One line per [`SessionEvent`]:
//!
//! ```json
//! {"seq":0,"at":"2024-05-01T12:00:00.000Z","event":"joke_fetched","data":{"category":"chuck","text":"..."}}
//! ```
//!
//! `seq` counts events within one logger, so several sessions appended to the
//! same file can be told apart by `seq` restarting at 0.

use jokebot_application::{SessionEvent, SessionLogger};
use serde::Serialize;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use tracing::warn;

#[derive(Serialize)]
struct TranscriptLine<'a> {
    seq: u64,
    at: String,
    event: &'static str,
    data: &'a serde_json::Value,
}

/// Appends session events to a transcript, one JSON object per line.
///
/// Every line is flushed as soon as it is written. A failed write never
/// reaches the session: the first one is reported with `warn!`, later ones
/// only bump [`JsonlSessionLogger::dropped_events`].
pub struct JsonlSessionLogger<W: Write + Send = File> {
    out: Mutex<W>,
    path: Option<PathBuf>,
    next_seq: AtomicU64,
    write_failed: AtomicBool,
    dropped: AtomicUsize,
}

impl JsonlSessionLogger<File> {
    /// Open (or create) the transcript at `path` for appending.
    ///
    /// Missing parent directories are created. Returns `None`, after a
    /// warning, when the file cannot be opened.
    pub fn new(path: impl AsRef<Path>) -> Option<Self> {
        let path = path.as_ref();
        match open_append(path) {
            Ok(file) => {
                let mut logger = Self::from_writer(file);
                logger.path = Some(path.to_path_buf());
                Some(logger)
            }
            Err(e) => {
                warn!("Could not open transcript {}: {}", path.display(), e);
                None
            }
        }
    }
}

impl<W: Write + Send> JsonlSessionLogger<W> {
    /// Transcript over an arbitrary writer
    pub fn from_writer(out: W) -> Self {
        Self {
            out: Mutex::new(out),
            path: None,
            next_seq: AtomicU64::new(0),
            write_failed: AtomicBool::new(false),
            dropped: AtomicUsize::new(0),
        }
    }

    /// File the transcript goes to, if it was opened from a path
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Events that could not be written
    pub fn dropped_events(&self) -> usize {
        self.dropped.load(Ordering::Relaxed)
    }

    fn write_line(&self, line: &[u8]) -> io::Result<()> {
        let mut out = self
            .out
            .lock()
            .map_err(|_| io::Error::other("transcript writer poisoned"))?;
        out.write_all(line)?;
        out.flush()
    }

    fn record_failure(&self, seq: u64, error: &dyn std::fmt::Display) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
        if !self.write_failed.swap(true, Ordering::Relaxed) {
            let target = self
                .path
                .as_deref()
                .map_or_else(|| "transcript".to_string(), |p| p.display().to_string());
            warn!(
                "Failed to write event {} to {}: {}; further events may be missing",
                seq, target, error
            );
        }
    }
}

impl<W: Write + Send> SessionLogger for JsonlSessionLogger<W> {
    fn log(&self, event: SessionEvent) {
        let seq = self.next_seq.fetch_add(1, Ordering::Relaxed);
        let line = TranscriptLine {
            seq,
            at: chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            event: event.event_type,
            data: &event.payload,
        };

        let mut bytes = match serde_json::to_vec(&line) {
            Ok(bytes) => bytes,
            Err(e) => return self.record_failure(seq, &e),
        };
        bytes.push(b'\n');

        if let Err(e) = self.write_line(&bytes) {
            self.record_failure(seq, &e);
        }
    }
}

impl<W: Write + Send> Drop for JsonlSessionLogger<W> {
    fn drop(&mut self) {
        let dropped = self.dropped_events();
        if dropped > 0 {
            warn!("{} session events were not written to the transcript", dropped);
        }
    }
}

fn open_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}
