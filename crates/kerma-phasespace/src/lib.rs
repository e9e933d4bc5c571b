//! Phase-space recording, replay, and inspection.
//!
//! A phase-space stream captures every particle crossing a scoring
//! plane so that the expensive upstream half of a treatment-head
//! simulation can be computed once and replayed many times.
//!
//! # Architecture
//!
//! - [`ScoringPlane`] observes per-step events and appends crossing
//!   particles to a stream through a [`PhasespaceWriter`]
//! - [`PhasespaceReader`] decodes records from any `Read` source
//! - [`PhasespaceSource`] replays a stream as a primary particle
//!   source, with recycling and azimuthal redistribution
//! - [`PhasespaceColumns`] decodes a whole stream into parallel arrays
//!   for offline analysis
//! - All I/O uses a custom binary codec (no serde dependency)
//!
//! # Format
//!
//! ```text
//! [Record 1] [Record 2] ... [Record N]
//! ```
//!
//! Each record is a fixed 68-byte little-endian layout:
//!
//! ```text
//! position  x, y, z   3 x f64
//! momentum  x, y, z   3 x f64
//! kinetic energy      f64
//! weight              f64
//! particle type       i32    (electron = -1, photon/other = 0, positron = +1)
//! ```
//!
//! There is no header, index, or record count: end-of-file is the only
//! termination signal. Compatibility with existing streams requires
//! preserving the field order, widths, and the absence of padding.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod codec;
pub mod error;
pub mod inspector;
pub mod plane;
pub mod reader;
pub mod record;
pub mod source;
pub mod writer;

pub use error::PhasespaceError;
pub use inspector::PhasespaceColumns;
pub use plane::ScoringPlane;
pub use reader::{PhasespaceReader, RecordIter};
pub use record::{PhasespaceRecord, RECORD_BYTES};
pub use source::{
    PhasespaceSource, PhasespaceSourceBuilder, PrimaryVertex, SourceOutcome, SourceSelection,
};
pub use writer::PhasespaceWriter;
