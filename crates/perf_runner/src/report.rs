use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use csv::WriterBuilder;
use tracing::debug;

use crate::error::RunnerError;
use crate::runner::RunRecord;

/// CSV sink for [`RunRecord`]s. The header row is derived from the record's
/// field names and is written only into empty output.
pub struct CsvReport<W: Write> {
    writer: csv::Writer<W>,
}

impl CsvReport<File> {
    /// Opens `dir/file_name` for appending, creating the directory if needed.
    pub fn append_to(dir: &Path, file_name: &str) -> Result<(Self, PathBuf), RunnerError> {
        fs::create_dir_all(dir).map_err(|e| RunnerError::io(dir, e))?;

        let path = dir.join(file_name);
        let needs_header = match fs::metadata(&path) {
            Ok(meta) => meta.len() == 0,
            Err(_) => true,
        };
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| RunnerError::io(&path, e))?;
        debug!(path = %path.display(), needs_header, "opened csv report");

        let writer = WriterBuilder::new()
            .has_headers(needs_header)
            .from_writer(file);
        Ok((Self { writer }, path))
    }
}

impl<W: Write> CsvReport<W> {
    pub fn from_writer(inner: W) -> Self {
        Self {
            writer: WriterBuilder::new().has_headers(true).from_writer(inner),
        }
    }

    pub fn write(&mut self, record: &RunRecord) -> Result<(), RunnerError> {
        self.writer.serialize(record)?;
        Ok(())
    }

    pub fn flush(&mut self) -> Result<(), RunnerError> {
        self.writer.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    pub fn into_inner(self) -> Result<W, RunnerError> {
        self.writer
            .into_inner()
            .map_err(|e| RunnerError::Csv(csv::Error::from(e.into_error())))
    }
}
