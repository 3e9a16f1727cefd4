//! JSON fixture populator.

use crate::error::JsonPopulatorError;
use book_generator::Record;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Default buffer size for fixture writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

/// Indentation used for the pretty-printed array.
pub const DEFAULT_INDENT: &[u8] = b"    ";

/// Metrics from a populate operation.
#[derive(Debug, Clone, Default)]
pub struct PopulateMetrics {
    /// Number of records written.
    pub rows_written: u64,
    /// Total time taken.
    pub total_duration: Duration,
    /// Output file size in bytes.
    pub file_size_bytes: u64,
}

impl PopulateMetrics {
    /// Calculate rows per second.
    pub fn rows_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.rows_written as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }

    /// Calculate bytes per second.
    pub fn bytes_per_second(&self) -> f64 {
        if self.total_duration.as_secs_f64() > 0.0 {
            self.file_size_bytes as f64 / self.total_duration.as_secs_f64()
        } else {
            0.0
        }
    }
}

/// Populator that writes records as one JSON array.
///
/// Non-ASCII characters are written as-is, never as `\u` escapes.
#[derive(Debug, Clone)]
pub struct JsonFixturePopulator {
    buffer_size: usize,
}

impl Default for JsonFixturePopulator {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFixturePopulator {
    /// Create a new populator with the default buffer size.
    pub fn new() -> Self {
        Self {
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Set the write buffer size.
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size;
        self
    }

    /// Write `records` to `output_path`, replacing any existing file.
    ///
    /// # Returns
    ///
    /// Metrics about the populate operation.
    pub fn populate<P: AsRef<Path>>(
        &self,
        records: &[Record],
        output_path: P,
    ) -> Result<PopulateMetrics, JsonPopulatorError> {
        let start_time = Instant::now();
        let mut metrics = PopulateMetrics::default();

        let output_path = output_path.as_ref();
        info!(
            "Writing JSON fixture file '{}' with {} records",
            output_path.display(),
            records.len()
        );

        let file = File::create(output_path)?;
        let mut writer = BufWriter::with_capacity(self.buffer_size, file);
        write_records(&mut writer, records)?;
        writer.flush()?;
        drop(writer);

        metrics.rows_written = records.len() as u64;
        metrics.file_size_bytes = std::fs::metadata(output_path)?.len();
        metrics.total_duration = start_time.elapsed();

        debug!(
            "Fixture write throughput: {:.0} bytes/sec",
            metrics.bytes_per_second()
        );
        info!(
            "JSON fixture complete: {} records, {} bytes in {:?} ({:.2} rows/sec)",
            metrics.rows_written,
            metrics.file_size_bytes,
            metrics.total_duration,
            metrics.rows_per_second()
        );

        Ok(metrics)
    }
}

/// Serialize `records` into `writer` as a 4-space indented JSON array.
pub fn write_records<W: Write>(writer: W, records: &[Record]) -> Result<(), JsonPopulatorError> {
    let formatter = PrettyFormatter::with_indent(DEFAULT_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
    records.serialize(&mut serializer)?;
    Ok(())
}
