//! Binary encode/decode for the phase-space record format.
//!
//! All values are little-endian. The format is intentionally bare — no
//! magic, no version, no record count — because compatibility with
//! existing streams requires exactly the 68-byte field layout and
//! nothing else. End-of-file is the only termination signal.

use std::io::{Read, Write};

use kerma_core::{ParticleKind, Vec3};

use crate::error::PhasespaceError;
use crate::record::{PhasespaceRecord, RECORD_BYTES};

// ── Primitive writers ───────────────────────────────────────────

/// Write a little-endian f64.
pub fn write_f64_le(w: &mut dyn Write, v: f64) -> Result<(), PhasespaceError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

/// Write a little-endian i32.
pub fn write_i32_le(w: &mut dyn Write, v: i32) -> Result<(), PhasespaceError> {
    w.write_all(&v.to_le_bytes())?;
    Ok(())
}

// ── Primitive readers ───────────────────────────────────────────

/// Read a little-endian f64.
pub fn read_f64_le(r: &mut dyn Read) -> Result<f64, PhasespaceError> {
    let mut buf = [0u8; 8];
    r.read_exact(&mut buf)?;
    Ok(f64::from_le_bytes(buf))
}

/// Read a little-endian i32.
pub fn read_i32_le(r: &mut dyn Read) -> Result<i32, PhasespaceError> {
    let mut buf = [0u8; 4];
    r.read_exact(&mut buf)?;
    Ok(i32::from_le_bytes(buf))
}

// ── Record encode/decode ────────────────────────────────────────

/// Encode one record: position, momentum, kinetic energy, weight,
/// particle-type code.
pub fn encode_record(w: &mut dyn Write, record: &PhasespaceRecord) -> Result<(), PhasespaceError> {
    write_f64_le(w, record.position.x)?;
    write_f64_le(w, record.position.y)?;
    write_f64_le(w, record.position.z)?;

    write_f64_le(w, record.momentum.x)?;
    write_f64_le(w, record.momentum.y)?;
    write_f64_le(w, record.momentum.z)?;

    write_f64_le(w, record.kinetic_energy)?;
    write_f64_le(w, record.weight)?;

    write_i32_le(w, record.kind.code())?;
    Ok(())
}

/// Decode one record.
///
/// Returns `Ok(None)` on clean EOF (zero bytes available),
/// `Ok(Some(record))` on success, or [`PhasespaceError::TruncatedRecord`]
/// when the stream ends partway through the fixed layout.
pub fn decode_record(r: &mut dyn Read) -> Result<Option<PhasespaceRecord>, PhasespaceError> {
    // Fill the fixed-size record buffer incrementally so that clean EOF
    // (zero bytes available) can be distinguished from truncation
    // (1..RECORD_BYTES-1 bytes before EOF).
    let mut buf = [0u8; RECORD_BYTES];
    let mut filled = 0;
    while filled < RECORD_BYTES {
        match r.read(&mut buf[filled..]) {
            Ok(0) => {
                if filled == 0 {
                    // Clean EOF — no more records.
                    return Ok(None);
                }
                return Err(PhasespaceError::TruncatedRecord { got: filled });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == std::io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(PhasespaceError::Io(e)),
        }
    }

    let f64_at = |offset: usize| {
        let mut bytes = [0u8; 8];
        bytes.copy_from_slice(&buf[offset..offset + 8]);
        f64::from_le_bytes(bytes)
    };

    let position = Vec3::new(f64_at(0), f64_at(8), f64_at(16));
    let momentum = Vec3::new(f64_at(24), f64_at(32), f64_at(40));
    let kinetic_energy = f64_at(48);
    let weight = f64_at(56);

    let mut code_bytes = [0u8; 4];
    code_bytes.copy_from_slice(&buf[64..68]);
    let kind = ParticleKind::from_code(i32::from_le_bytes(code_bytes));

    Ok(Some(PhasespaceRecord {
        position,
        momentum,
        kinetic_energy,
        weight,
        kind,
    }))
}
