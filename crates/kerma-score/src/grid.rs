//! The voxel accumulator.

use crate::geometry::GridGeometry;
use kerma_core::Vec3;

/// What the primary grid accumulates per deposit.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ScoringMode {
    /// Deposit divided by local material mass (density × voxel volume):
    /// the grid integrates towards dose.
    #[default]
    Dose,
    /// Raw deposited energy, no normalization.
    EnergyDeposit,
}

/// The three accumulated moments of one voxel.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Voxel {
    /// Summed (optionally mass-normalized) energy deposit.
    pub energy: f32,
    /// Summed squared raw energy deposit, for uncertainty estimation.
    pub energy_squared: f32,
    /// Summed statistical weight — an event-count proxy.
    pub counts: f32,
}

/// A dense 3-D accumulator of per-step energy deposits.
///
/// Owns three grids over the same geometry: energy (or dose, per
/// [`ScoringMode`]), squared raw energy, and weighted counts.
/// Accumulation is purely additive and allocation-free per deposit;
/// [`reset`](DoseGrid::reset) zeroes the grids in place between runs.
///
/// Single-precision accumulation is sufficient for the grids; the
/// reduced values do not depend on scheduling order beyond
/// floating-point addition itself.
pub struct DoseGrid {
    geometry: GridGeometry,
    mode: ScoringMode,
    energy: Vec<f32>,
    energy_squared: Vec<f32>,
    counts: Vec<f32>,
    deposits: u64,
    discarded: u64,
}

impl DoseGrid {
    /// Create a zeroed accumulator over `geometry`.
    pub fn new(geometry: GridGeometry, mode: ScoringMode) -> Self {
        let n = geometry.voxel_count();
        Self {
            geometry,
            mode,
            energy: vec![0.0; n],
            energy_squared: vec![0.0; n],
            counts: vec![0.0; n],
            deposits: 0,
            discarded: 0,
        }
    }

    /// The grid geometry.
    pub fn geometry(&self) -> &GridGeometry {
        &self.geometry
    }

    /// The configured scoring mode.
    pub fn mode(&self) -> ScoringMode {
        self.mode
    }

    /// Accumulate one energy-deposit event.
    ///
    /// `density` is the local material density at the deposit site, as
    /// resolved by the transport engine; it is only consulted in
    /// [`ScoringMode::Dose`].
    ///
    /// Zero deposits are a no-op. Positions binning outside the grid
    /// are discarded (and counted), not clamped.
    pub fn deposit(&mut self, position: Vec3, energy_deposit: f64, weight: f64, density: f64) {
        if energy_deposit == 0.0 {
            return;
        }

        let Some(index) = self.geometry.voxel_index(position) else {
            self.discarded += 1;
            return;
        };
        let offset = self.geometry.offset(index);

        let scored = match self.mode {
            ScoringMode::Dose => energy_deposit / (density * self.geometry.voxel_volume()),
            ScoringMode::EnergyDeposit => energy_deposit,
        };

        self.energy[offset] += scored as f32;
        self.energy_squared[offset] += (energy_deposit * energy_deposit) as f32;
        self.counts[offset] += weight as f32;
        self.deposits += 1;
    }

    /// The accumulated energy (or dose) grid, row-major.
    pub fn energy(&self) -> &[f32] {
        &self.energy
    }

    /// The accumulated squared-energy grid, row-major.
    pub fn energy_squared(&self) -> &[f32] {
        &self.energy_squared
    }

    /// The accumulated weighted-count grid, row-major.
    pub fn counts(&self) -> &[f32] {
        &self.counts
    }

    /// The three moments of one voxel, or `None` out of range.
    pub fn voxel(&self, index: [usize; 3]) -> Option<Voxel> {
        let dims = self.geometry.dims();
        if index[0] >= dims[0] || index[1] >= dims[1] || index[2] >= dims[2] {
            return None;
        }
        let offset = self.geometry.offset(index);
        Some(Voxel {
            energy: self.energy[offset],
            energy_squared: self.energy_squared[offset],
            counts: self.counts[offset],
        })
    }

    /// Deposits accumulated since construction or the last reset.
    pub fn deposits(&self) -> u64 {
        self.deposits
    }

    /// Out-of-bounds deposits discarded since construction or the last
    /// reset.
    pub fn discarded(&self) -> u64 {
        self.discarded
    }

    /// Zero all three grids and the counters in place. Used between
    /// repeated runs in one process; the backing storage is kept.
    pub fn reset(&mut self) {
        self.energy.fill(0.0);
        self.energy_squared.fill(0.0);
        self.counts.fill(0.0);
        self.deposits = 0;
        self.discarded = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn grid(mode: ScoringMode) -> DoseGrid {
        let geometry = GridGeometry::new(
            [4, 4, 4],
            Vec3::ZERO,
            Vec3::new(4.0, 4.0, 4.0),
        )
        .unwrap();
        DoseGrid::new(geometry, mode)
    }

    #[test]
    fn deposit_lands_in_the_floor_voxel() {
        let mut g = grid(ScoringMode::EnergyDeposit);
        g.deposit(Vec3::new(1.5, 2.9, 0.1), 2.0, 0.5, 1.0);

        let voxel = g.voxel([1, 2, 0]).unwrap();
        assert_eq!(voxel.energy, 2.0);
        assert_eq!(voxel.energy_squared, 4.0);
        assert_eq!(voxel.counts, 0.5);
        assert_eq!(g.deposits(), 1);
    }

    #[test]
    fn dose_mode_normalizes_by_voxel_mass() {
        let mut g = grid(ScoringMode::Dose);
        // Unit voxels, density 2 -> voxel mass 2.
        g.deposit(Vec3::new(0.5, 0.5, 0.5), 3.0, 1.0, 2.0);

        let voxel = g.voxel([0, 0, 0]).unwrap();
        assert_eq!(voxel.energy, 1.5);
        // The squared grid always holds raw energy squared.
        assert_eq!(voxel.energy_squared, 9.0);
    }

    #[test]
    fn zero_deposit_changes_nothing() {
        let mut g = grid(ScoringMode::Dose);
        g.deposit(Vec3::new(0.5, 0.5, 0.5), 0.0, 1.0, 1.0);

        assert_eq!(g.deposits(), 0);
        assert!(g.energy().iter().all(|&v| v == 0.0));
        assert!(g.energy_squared().iter().all(|&v| v == 0.0));
        assert!(g.counts().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn out_of_bounds_deposits_are_discarded() {
        let mut g = grid(ScoringMode::EnergyDeposit);
        // Exactly max on x computes to index dim - one past the end.
        g.deposit(Vec3::new(4.0, 0.5, 0.5), 1.0, 1.0, 1.0);
        g.deposit(Vec3::new(0.5, -0.5, 0.5), 1.0, 1.0, 1.0);

        assert_eq!(g.deposits(), 0);
        assert_eq!(g.discarded(), 2);
        assert!(g.energy().iter().all(|&v| v == 0.0));
        assert!(g.energy_squared().iter().all(|&v| v == 0.0));
        assert!(g.counts().iter().all(|&v| v == 0.0));
    }

    #[test]
    fn accumulation_is_additive() {
        let mut g = grid(ScoringMode::EnergyDeposit);
        for _ in 0..3 {
            g.deposit(Vec3::new(0.5, 0.5, 0.5), 1.5, 0.25, 1.0);
        }

        let voxel = g.voxel([0, 0, 0]).unwrap();
        assert_eq!(voxel.energy, 4.5);
        assert_eq!(voxel.energy_squared, 3.0 * 2.25);
        assert_eq!(voxel.counts, 0.75);
    }

    #[test]
    fn reset_zeroes_without_reallocating() {
        let mut g = grid(ScoringMode::Dose);
        g.deposit(Vec3::new(0.5, 0.5, 0.5), 1.0, 1.0, 1.0);
        g.deposit(Vec3::new(9.0, 0.5, 0.5), 1.0, 1.0, 1.0);
        assert_eq!(g.deposits(), 1);
        assert_eq!(g.discarded(), 1);

        g.reset();
        assert_eq!(g.deposits(), 0);
        assert_eq!(g.discarded(), 0);
        assert!(g.energy().iter().all(|&v| v == 0.0));
        assert_eq!(g.energy().len(), 64);
    }

    #[test]
    fn voxel_accessor_bounds_checks() {
        let g = grid(ScoringMode::Dose);
        assert!(g.voxel([3, 3, 3]).is_some());
        assert!(g.voxel([4, 0, 0]).is_none());
        assert!(g.voxel([0, 0, 4]).is_none());
    }

    proptest! {
        #[test]
        fn in_bounds_deposits_conserve_total_energy(
            deposits in prop::collection::vec(
                (0.0f64..4.0, 0.0f64..4.0, 0.0f64..4.0, 0.01f64..5.0),
                1..50,
            ),
        ) {
            let mut g = grid(ScoringMode::EnergyDeposit);
            let mut expected = 0.0f64;
            for (x, y, z, e) in deposits {
                g.deposit(Vec3::new(x, y, z), e, 1.0, 1.0);
                expected += e;
            }
            let total: f64 = g.energy().iter().map(|&v| f64::from(v)).sum();
            prop_assert!((total - expected).abs() < 1e-3 * expected.max(1.0));
        }
    }
}
