//! `FireCsvObserver<W>` — streams fire events to CSV.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use bb_engine::{FactoryObserver, FireEvent};
use csv::Writer;
use tracing::warn;

use crate::{OutputError, OutputResult};

/// A [`FactoryObserver`] writing one CSV row per fire.
///
/// Errors from the writer are stored internally because observer methods
/// have no return value.  After the run, check with
/// [`take_error`][Self::take_error].
pub struct FireCsvObserver<W: Write> {
    writer:     Writer<W>,
    rows:       u64,
    finished:   bool,
    last_error: Option<OutputError>,
}

impl FireCsvObserver<File> {
    /// Create (or truncate) the file at `path` and write the header row.
    pub fn create(path: &Path) -> OutputResult<Self> {
        Self::new(File::create(path)?)
    }
}

impl<W: Write> FireCsvObserver<W> {
    /// Wrap any writer and write the header row.
    pub fn new(inner: W) -> OutputResult<Self> {
        let mut writer = Writer::from_writer(inner);
        writer.write_record(["bot", "low", "high", "depth"])?;
        Ok(Self {
            writer,
            rows:       0,
            finished:   false,
            last_error: None,
        })
    }

    /// Number of fire rows written.
    pub fn rows(&self) -> u64 {
        self.rows
    }

    /// Take the stored write error (if any).
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the underlying writer.  Idempotent once a flush succeeds; a
    /// failed flush is retried on the next call.
    pub fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.writer.flush()?;
        self.finished = true;
        Ok(())
    }

    /// Flush and unwrap the inner writer.
    pub fn into_inner(mut self) -> OutputResult<W> {
        self.finish()?;
        self.writer
            .into_inner()
            .map_err(|e| OutputError::Io(e.into_error()))
    }

    fn write(&mut self, event: &FireEvent) -> OutputResult<()> {
        self.writer.write_record(&[
            event.bot.0.to_string(),
            event.low.to_string(),
            event.high.to_string(),
            event.depth.to_string(),
        ])?;
        self.rows += 1;
        Ok(())
    }
}

impl<W: Write> FactoryObserver for FireCsvObserver<W> {
    fn on_fire(&mut self, event: &FireEvent) {
        if let Err(e) = self.write(event) {
            warn!(bot = %event.bot, error = %e, "fire log write failed");
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}
