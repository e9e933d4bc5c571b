//! Phase-space stream writer.
//!
//! [`PhasespaceWriter`] appends records to any `Write` sink in strict
//! arrival order. Streams are write-once: after [`close`] the writer
//! refuses further records.
//!
//! [`close`]: PhasespaceWriter::close

use std::io::Write;

use crate::codec::encode_record;
use crate::error::PhasespaceError;
use crate::record::PhasespaceRecord;

/// Writes phase-space records to a byte stream.
///
/// Generic over `W: Write` so tests can use `Vec<u8>` and production
/// code can use `BufWriter<File>`.
///
/// # Examples
///
/// ```
/// use kerma_core::{ParticleKind, Vec3};
/// use kerma_phasespace::{PhasespaceReader, PhasespaceRecord, PhasespaceWriter};
///
/// let record = PhasespaceRecord {
///     position: Vec3::new(0.0, 0.0, -200.0),
///     momentum: Vec3::new(0.0, 0.0, -6.0),
///     kinetic_energy: 6.0,
///     weight: 1.0,
///     kind: ParticleKind::Photon,
/// };
///
/// let mut buf = Vec::new();
/// let mut writer = PhasespaceWriter::new(&mut buf);
/// writer.write_record(&record).unwrap();
/// writer.close().unwrap();
/// assert_eq!(writer.records_written(), 1);
/// drop(writer);
///
/// let mut reader = PhasespaceReader::new(buf.as_slice());
/// assert_eq!(reader.next_record().unwrap(), Some(record));
/// assert_eq!(reader.next_record().unwrap(), None);
/// ```
pub struct PhasespaceWriter<W: Write> {
    writer: W,
    records_written: u64,
    closed: bool,
}

impl<W: Write> PhasespaceWriter<W> {
    /// Create a writer over `writer`. The format has no header, so
    /// nothing is written until the first record.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            records_written: 0,
            closed: false,
        }
    }

    /// Append one record in strict arrival order.
    ///
    /// # Errors
    ///
    /// [`PhasespaceError::WriterClosed`] after [`close`](Self::close);
    /// otherwise any underlying I/O error, which is fatal for the
    /// stream — records written before the failure remain valid.
    pub fn write_record(&mut self, record: &PhasespaceRecord) -> Result<(), PhasespaceError> {
        if self.closed {
            return Err(PhasespaceError::WriterClosed);
        }
        encode_record(&mut self.writer, record)?;
        self.records_written += 1;
        Ok(())
    }

    /// Flush the underlying writer.
    pub fn flush(&mut self) -> Result<(), PhasespaceError> {
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and close the stream. Idempotent; subsequent writes fail
    /// with [`PhasespaceError::WriterClosed`].
    pub fn close(&mut self) -> Result<(), PhasespaceError> {
        if !self.closed {
            self.writer.flush()?;
            self.closed = true;
        }
        Ok(())
    }

    /// Number of records written so far.
    pub fn records_written(&self) -> u64 {
        self.records_written
    }

    /// Consume the writer and return the underlying `Write` sink.
    pub fn into_inner(self) -> W {
        self.writer
    }
}
