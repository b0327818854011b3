use std::{
    fs::{self, File, OpenOptions},
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{Arc, Mutex},
};

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::Result;

/// Size-rotating log file writer.
///
/// `tracing-appender` only rotates by time, while this bot keeps the original
/// sink contract: roll the file once it reaches `max_bytes`, keeping
/// `backups` numbered copies (`work_bot.log.1` is the newest backup).
#[derive(Clone)]
pub struct RotatingWriter {
    inner: Arc<Mutex<RotatingFile>>,
}

struct RotatingFile {
    path: PathBuf,
    max_bytes: u64,
    backups: usize,
    file: File,
    written: u64,
}

impl RotatingWriter {
    pub fn open(path: impl Into<PathBuf>, max_bytes: u64, backups: usize) -> io::Result<Self> {
        let path = path.into();
        let file = append_handle(&path)?;
        let written = file.metadata()?.len();
        Ok(Self {
            inner: Arc::new(Mutex::new(RotatingFile {
                path,
                max_bytes,
                backups,
                file,
                written,
            })),
        })
    }
}

impl RotatingFile {
    fn rotate(&mut self) -> io::Result<()> {
        self.file.flush()?;

        if self.backups == 0 {
            let _ = fs::remove_file(&self.path);
        } else {
            for idx in (1..self.backups).rev() {
                let from = backup_path(&self.path, idx);
                if from.exists() {
                    let _ = fs::rename(&from, backup_path(&self.path, idx + 1));
                }
            }
            let _ = fs::rename(&self.path, backup_path(&self.path, 1));
        }

        self.file = append_handle(&self.path)?;
        self.written = 0;
        Ok(())
    }
}

impl Write for RotatingWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer lock poisoned"))?;

        if inner.written > 0 && inner.written + buf.len() as u64 > inner.max_bytes {
            inner.rotate()?;
        }

        let n = inner.file.write(buf)?;
        inner.written += n as u64;
        Ok(n)
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut inner = self
            .inner
            .lock()
            .map_err(|_| io::Error::new(io::ErrorKind::Other, "log writer lock poisoned"))?;
        inner.file.flush()
    }
}

fn append_handle(path: &Path) -> io::Result<File> {
    OpenOptions::new().create(true).append(true).open(path)
}

fn backup_path(path: &Path, idx: usize) -> PathBuf {
    let mut s = path.as_os_str().to_os_string();
    s.push(format!(".{idx}"));
    PathBuf::from(s)
}

/// Initialize logging: one registry with a stdout layer and a size-rotated
/// file layer, both carrying the same line shape (timestamp, target, level,
/// message). Default filter keeps our crates at debug; override with
/// `RUST_LOG`.
pub fn init(log_file: &Path, max_bytes: u64, backups: usize) -> Result<()> {
    let file_writer = RotatingWriter::open(log_file, max_bytes, backups)?;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new("info,hwbot=debug,hwbot_core=debug,hwbot_practicum=debug,hwbot_telegram=debug")
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true).with_ansi(true))
        .with(
            fmt::layer()
                .with_target(true)
                .with_ansi(false)
                .with_writer(move || file_writer.clone()),
        )
        .init();

    Ok(())
}
