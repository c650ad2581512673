use std::fs::{self, File, OpenOptions};
use std::io::{self, Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Log file name inside the data directory
pub const LOG_FILE_NAME: &str = "breakeven.log";
/// Size above which the log is truncated on startup (5 MB)
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Tail kept after truncation (1 MB)
const KEEP_SIZE: u64 = 1024 * 1024;

/// Truncate `path` to its most recent `keep` bytes once it grows past `max`.
///
/// The kept tail starts at a line boundary. Returns whether the file was rotated.
pub fn rotate_if_needed(path: &Path, max: u64, keep: u64) -> io::Result<bool> {
    let len = match fs::metadata(path) {
        Ok(metadata) => metadata.len(),
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e),
    };
    if len <= max {
        return Ok(false);
    }

    let mut tail = Vec::new();
    {
        let mut file = File::open(path)?;
        file.seek(SeekFrom::Start(len.saturating_sub(keep)))?;
        file.read_to_end(&mut tail)?;
    }

    let line_start = tail
        .iter()
        .position(|&b| b == b'\n')
        .map_or(0, |i| i + 1);

    let mut file = File::create(path)?;
    file.write_all(b"--- log rotated, older entries removed ---\n")?;
    file.write_all(&tail[line_start..])?;
    Ok(true)
}

/// Hands out writers that share one append-mode log file
#[derive(Clone)]
struct SharedLogFile {
    file: Arc<Mutex<File>>,
}

struct SharedLogWriter {
    file: Arc<Mutex<File>>,
}

fn poisoned() -> io::Error {
    io::Error::other("log file lock poisoned")
}

impl Write for SharedLogWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.lock().map_err(|_| poisoned())?.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.lock().map_err(|_| poisoned())?.flush()
    }
}

impl<'a> MakeWriter<'a> for SharedLogFile {
    type Writer = SharedLogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        SharedLogWriter {
            file: Arc::clone(&self.file),
        }
    }
}

/// Install the global subscriber, logging to `{data_dir}/breakeven.log`.
///
/// The filter defaults to `breakeven={level},breakeven_core=warn`; `RUST_LOG` overrides it.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<PathBuf> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE_NAME);

    if let Err(e) = rotate_if_needed(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: could not rotate {}: {e}", log_path.display());
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    let writer = SharedLogFile {
        file: Arc::new(Mutex::new(file)),
    };

    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("breakeven={level},breakeven_core=warn")));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    tracing::info!(log_path = %log_path.display(), "Logging initialized");
    Ok(log_path)
}
