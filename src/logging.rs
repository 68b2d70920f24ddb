//! Conversation transcript persistence layer
//!
//! Provides file-based logging of chat messages without blocking the UI
//! thread. Transcripts are stored in XDG_DATA_HOME/botpanel/transcripts/
//! as one YYYY-MM-DD.log file per day.

use chrono::Local;
use crossbeam_channel::{unbounded, Receiver, Sender};
use std::collections::HashMap;
use std::fs::{self, File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;
use std::thread;

/// A transcript entry to be written to disk
#[derive(Debug, Clone)]
pub struct LogEntry {
    pub timestamp: String,
    pub sender: String,
    pub message: String,
}

/// Logger manages file-based transcript logging without blocking the UI thread
pub struct Logger {
    /// Channel to send log entries to the background thread
    tx: Sender<LogEntry>,
    log_dir: PathBuf,
}

impl Logger {
    /// Create a new logger and spawn background thread for async I/O
    pub fn new() -> Result<Self, String> {
        let log_dir = get_transcript_directory()?;

        // Create log directory if it doesn't exist
        fs::create_dir_all(&log_dir)
            .map_err(|e| format!("Failed to create transcript directory: {}", e))?;

        let (tx, rx) = unbounded::<LogEntry>();

        // Spawn background thread for non-blocking I/O
        let log_dir_clone = log_dir.clone();
        thread::spawn(move || {
            run_logger_thread(rx, log_dir_clone);
        });

        Ok(Self { tx, log_dir })
    }

    /// Log a message (non-blocking, queued for background writing)
    pub fn log(&self, entry: LogEntry) {
        // If send fails, the logger thread has stopped - silently ignore
        let _ = self.tx.send(entry);
    }

    pub fn log_directory(&self) -> &PathBuf {
        &self.log_dir
    }
}

/// Background thread that handles all file I/O
fn run_logger_thread(rx: Receiver<LogEntry>, log_dir: PathBuf) {
    // Cache of open file handles to avoid reopening files constantly
    let mut file_cache: HashMap<String, BufWriter<File>> = HashMap::new();

    // Process log entries as they arrive
    while let Ok(entry) = rx.recv() {
        if let Err(e) = write_log_entry(&mut file_cache, &log_dir, &entry) {
            eprintln!("Logger error: {}", e);
        }
    }

    // Flush all cached files on shutdown
    for (_, mut writer) in file_cache.drain() {
        let _ = writer.flush();
    }
}

/// Write a single transcript entry to the day's file
fn write_log_entry(
    file_cache: &mut HashMap<String, BufWriter<File>>,
    log_dir: &std::path::Path,
    entry: &LogEntry,
) -> Result<(), String> {
    let date = Local::now().format("%Y-%m-%d").to_string();
    let log_file_path = log_dir.join(format!("{}.log", date));

    // Get or create buffered writer for this file
    let writer = match file_cache.entry(date) {
        std::collections::hash_map::Entry::Occupied(occupied) => occupied.into_mut(),
        std::collections::hash_map::Entry::Vacant(vacant) => {
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&log_file_path)
                .map_err(|e| format!("Failed to open transcript file: {}", e))?;
            vacant.insert(BufWriter::new(file))
        }
    };

    // Format: [HH:MM:SS] <sender> Message
    writeln!(writer, "[{}] <{}> {}", entry.timestamp, entry.sender, entry.message)
        .map_err(|e| format!("Failed to write transcript entry: {}", e))?;

    // Flush periodically to ensure transcripts are written
    writer
        .flush()
        .map_err(|e| format!("Failed to flush transcript: {}", e))?;

    Ok(())
}

/// Get the platform-specific transcript directory using XDG conventions
fn get_transcript_directory() -> Result<PathBuf, String> {
    let base = directories::BaseDirs::new().ok_or("Failed to determine home directory")?;

    // Use XDG_DATA_HOME on Linux, equivalent on other platforms
    let data_dir = base.data_dir();
    Ok(data_dir.join("botpanel").join("transcripts"))
}
