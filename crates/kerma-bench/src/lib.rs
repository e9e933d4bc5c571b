//! Benchmark profiles and utilities for the kerma scoring framework.
//!
//! Provides pre-built fixtures shared by the benches:
//!
//! - [`reference_geometry`]: the 101x101x100 water-tank grid
//! - [`reference_stream`]: an in-memory phase-space stream of `n` records

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use kerma_core::{ParticleKind, Vec3};
use kerma_phasespace::{PhasespaceRecord, PhasespaceWriter};
use kerma_score::GridGeometry;

/// The reference scoring grid: 101x101x100 voxels over a
/// 151.5 x 151.5 x 50 mm water tank. 101 transverse voxels keep a
/// voxel column on the central axis.
pub fn reference_geometry() -> GridGeometry {
    GridGeometry::new(
        [101, 101, 100],
        Vec3::new(-75.75, -75.75, -50.0),
        Vec3::new(75.75, 75.75, 0.0),
    )
    .expect("reference geometry is valid")
}

/// Encode `n` deterministic records into an in-memory stream.
pub fn reference_stream(n: usize) -> Vec<u8> {
    let mut buf = Vec::with_capacity(n * kerma_phasespace::RECORD_BYTES);
    let mut writer = PhasespaceWriter::new(&mut buf);
    for i in 0..n {
        let spread = (i as f64).sin() * 50.0;
        writer
            .write_record(&PhasespaceRecord {
                position: Vec3::new(spread, -spread, -300.0),
                momentum: Vec3::new(0.01 * spread, 0.0, -6.0),
                kinetic_energy: 6.0 * (0.5 + 0.5 * (i as f64).cos().abs()),
                weight: 1.0,
                kind: if i % 10 == 0 {
                    ParticleKind::Electron
                } else {
                    ParticleKind::Photon
                },
            })
            .expect("writing to Vec cannot fail");
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use kerma_phasespace::PhasespaceReader;

    #[test]
    fn reference_stream_round_trips() {
        let buf = reference_stream(100);
        let reader = PhasespaceReader::new(buf.as_slice());
        let records: Vec<_> = reader.records().collect::<Result<Vec<_>, _>>().unwrap();
        assert_eq!(records.len(), 100);
    }

    #[test]
    fn reference_geometry_matches_the_water_tank() {
        let g = reference_geometry();
        assert_eq!(g.dims(), [101, 101, 100]);
        assert!((g.resolution()[2] - 0.5).abs() < 1e-12);
    }
}
