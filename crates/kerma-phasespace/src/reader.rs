//! Phase-space stream reader.
//!
//! [`PhasespaceReader`] decodes records from any `Read` source in
//! stream order. End-of-stream is an ordinary outcome (`Ok(None)`),
//! consumed via branching rather than exception-style control flow.

use std::io::{Read, Seek, SeekFrom};

use crate::codec::decode_record;
use crate::error::PhasespaceError;
use crate::record::PhasespaceRecord;

/// Reads phase-space records from a byte stream.
///
/// Generic over `R: Read` so tests can use `&[u8]` and production
/// code can use `BufReader<File>`.
pub struct PhasespaceReader<R: Read> {
    reader: R,
    records_read: u64,
}

impl<R: Read> PhasespaceReader<R> {
    /// Open a record stream. The format has no header, so nothing is
    /// read until the first record is requested.
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            records_read: 0,
        }
    }

    /// Read the next record, or `None` if the stream is exhausted.
    pub fn next_record(&mut self) -> Result<Option<PhasespaceRecord>, PhasespaceError> {
        let record = decode_record(&mut self.reader)?;
        if record.is_some() {
            self.records_read += 1;
        }
        Ok(record)
    }

    /// Number of records read so far.
    pub fn records_read(&self) -> u64 {
        self.records_read
    }

    /// Convert into a record iterator.
    pub fn records(self) -> RecordIter<R> {
        RecordIter {
            reader: self.reader,
            done: false,
        }
    }
}

impl<R: Read + Seek> PhasespaceReader<R> {
    /// Rewind to the start of the stream, zeroing the read counter.
    ///
    /// Used to replay the same stream again on the next run.
    pub fn rewind(&mut self) -> Result<(), PhasespaceError> {
        self.reader.seek(SeekFrom::Start(0))?;
        self.records_read = 0;
        Ok(())
    }
}

/// Iterator adapter over phase-space records.
pub struct RecordIter<R: Read> {
    reader: R,
    done: bool,
}

impl<R: Read> Iterator for RecordIter<R> {
    type Item = Result<PhasespaceRecord, PhasespaceError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match decode_record(&mut self.reader) {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => {
                self.done = true;
                None
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}
