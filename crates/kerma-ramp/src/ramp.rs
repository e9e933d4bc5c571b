//! The density ramp: setpoints in, dense material table out.

use indexmap::IndexMap;

use crate::error::RampError;
use crate::material::Material;

/// One calibration point: a scanner intensity at which a known base
/// material has a known density.
#[derive(Clone, Debug, PartialEq)]
pub struct Setpoint {
    /// Scanner intensity value.
    pub intensity: i32,
    /// Base material name.
    pub material: String,
    /// Density at this intensity.
    pub density: f64,
}

impl Setpoint {
    /// Create a setpoint.
    pub fn new(intensity: i32, material: impl Into<String>, density: f64) -> Self {
        Self {
            intensity,
            material: material.into(),
            density,
        }
    }
}

/// A dense mapping from discretized scanner intensities to synthesized
/// materials.
///
/// Built from setpoints strictly increasing in intensity. Within each
/// consecutive pair, intensities from the lower setpoint stepping by
/// the increment (up to, not including, the next setpoint) map to the
/// lower setpoint's base material at the linearly interpolated density.
/// The final setpoint's exact intensity is always present with its own
/// density, whether or not it lands on an increment boundary.
///
/// # Examples
///
/// ```
/// use kerma_ramp::{DensityRamp, Setpoint};
///
/// let ramp = DensityRamp::build(
///     &[
///         Setpoint::new(-1000, "A", 0.001),
///         Setpoint::new(0, "B", 1.0),
///         Setpoint::new(1000, "C", 2.0),
///     ],
///     100,
/// )
/// .unwrap();
///
/// assert_eq!(ramp.len(), 21);
/// assert_eq!(ramp.get(0).unwrap().density(), 1.0);
/// assert_eq!(ramp.get(1000).unwrap().density(), 2.0);
/// ```
#[derive(Clone, Debug)]
pub struct DensityRamp {
    table: IndexMap<i32, Material>,
}

impl DensityRamp {
    /// Build the ramp. Pure: the same setpoints and increment always
    /// produce the same table.
    ///
    /// # Errors
    ///
    /// Fails fast on an empty setpoint list, a non-positive increment,
    /// or intensities that are not strictly increasing.
    pub fn build(setpoints: &[Setpoint], increment: i32) -> Result<Self, RampError> {
        if setpoints.is_empty() {
            return Err(RampError::NoSetpoints);
        }
        if increment <= 0 {
            return Err(RampError::NonPositiveIncrement { increment });
        }
        for (index, pair) in setpoints.windows(2).enumerate() {
            if pair[1].intensity <= pair[0].intensity {
                return Err(RampError::NonIncreasingSetpoints {
                    index: index + 1,
                    previous: pair[0].intensity,
                    value: pair[1].intensity,
                });
            }
        }

        let mut table = IndexMap::new();

        // Intermediate points within each segment.
        for pair in setpoints.windows(2) {
            let rise = pair[1].density - pair[0].density;
            let run = f64::from(pair[1].intensity - pair[0].intensity);
            let gradient = rise / run;

            let mut count = 0;
            let mut intensity = pair[0].intensity;
            while intensity < pair[1].intensity {
                let density = f64::from(count * increment) * gradient + pair[0].density;
                table.insert(intensity, Material::with_density(&pair[0].material, density));
                count += 1;
                intensity = pair[0].intensity + count * increment;
            }
        }

        // The last setpoint keeps its exact intensity and density.
        let last = &setpoints[setpoints.len() - 1];
        table.insert(
            last.intensity,
            Material::with_density(&last.material, last.density),
        );

        Ok(Self { table })
    }

    /// Number of entries in the table.
    pub fn len(&self) -> usize {
        self.table.len()
    }

    /// Whether the table is empty. Never true for a built ramp.
    pub fn is_empty(&self) -> bool {
        self.table.is_empty()
    }

    /// The material at exactly `intensity`, if that bin exists.
    pub fn get(&self, intensity: i32) -> Option<&Material> {
        self.table.get(&intensity)
    }

    /// The material for an arbitrary intensity: the nearest bin at or
    /// below it. `None` below the first setpoint.
    pub fn material_for(&self, intensity: i32) -> Option<&Material> {
        // Keys ascend in insertion order; binary-search the index space.
        let mut lo = 0usize;
        let mut hi = self.table.len();
        while lo < hi {
            let mid = (lo + hi) / 2;
            let (key, _) = self.table.get_index(mid)?;
            if *key <= intensity {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        if lo == 0 {
            return None;
        }
        self.table.get_index(lo - 1).map(|(_, material)| material)
    }

    /// Entries in ascending intensity order.
    pub fn iter(&self) -> impl Iterator<Item = (i32, &Material)> {
        self.table.iter().map(|(k, v)| (*k, v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn reference_setpoints() -> Vec<Setpoint> {
        vec![
            Setpoint::new(-1000, "A", 0.001),
            Setpoint::new(0, "B", 1.0),
            Setpoint::new(1000, "C", 2.0),
        ]
    }

    // ── Validation ──────────────────────────────────────────────

    #[test]
    fn rejects_empty_setpoints() {
        assert_eq!(
            DensityRamp::build(&[], 25).unwrap_err(),
            RampError::NoSetpoints
        );
    }

    #[test]
    fn rejects_non_positive_increment() {
        let sp = reference_setpoints();
        assert!(matches!(
            DensityRamp::build(&sp, 0),
            Err(RampError::NonPositiveIncrement { increment: 0 })
        ));
        assert!(matches!(
            DensityRamp::build(&sp, -25),
            Err(RampError::NonPositiveIncrement { .. })
        ));
    }

    #[test]
    fn rejects_non_increasing_intensities() {
        let sp = vec![
            Setpoint::new(0, "A", 1.0),
            Setpoint::new(0, "B", 2.0),
        ];
        assert!(matches!(
            DensityRamp::build(&sp, 25),
            Err(RampError::NonIncreasingSetpoints {
                index: 1,
                previous: 0,
                value: 0,
            })
        ));
    }

    // ── Interpolation ───────────────────────────────────────────

    #[test]
    fn covers_every_increment_plus_the_final_setpoint() {
        let ramp = DensityRamp::build(&reference_setpoints(), 100).unwrap();

        // Keys at every 100-unit step from -1000 through 900, plus 1000.
        let keys: Vec<i32> = ramp.iter().map(|(k, _)| k).collect();
        let expected: Vec<i32> = (-10..10).map(|k| k * 100).chain([1000]).collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn interpolates_linearly_within_segments() {
        let ramp = DensityRamp::build(&reference_setpoints(), 100).unwrap();

        assert_eq!(ramp.get(-1000).unwrap().density(), 0.001);
        assert_eq!(ramp.get(0).unwrap().density(), 1.0);
        assert_eq!(ramp.get(1000).unwrap().density(), 2.0);

        // Midway through the second segment.
        let mid = ramp.get(500).unwrap().density();
        assert!((mid - 1.5).abs() < 1e-12);

        // Strictly increasing within each segment of this ramp.
        let densities: Vec<f64> = ramp.iter().map(|(_, m)| m.density()).collect();
        assert!(densities.windows(2).all(|w| w[1] > w[0]));
    }

    #[test]
    fn segment_materials_come_from_the_lower_setpoint() {
        let ramp = DensityRamp::build(&reference_setpoints(), 100).unwrap();
        assert_eq!(ramp.get(-1000).unwrap().base(), "A");
        assert_eq!(ramp.get(-100).unwrap().base(), "A");
        assert_eq!(ramp.get(0).unwrap().base(), "B");
        assert_eq!(ramp.get(900).unwrap().base(), "B");
        assert_eq!(ramp.get(1000).unwrap().base(), "C");
    }

    #[test]
    fn off_boundary_final_setpoint_is_still_included() {
        let ramp = DensityRamp::build(
            &[Setpoint::new(0, "A", 1.0), Setpoint::new(130, "B", 2.0)],
            50,
        )
        .unwrap();

        let keys: Vec<i32> = ramp.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![0, 50, 100, 130]);
        assert_eq!(ramp.get(130).unwrap().density(), 2.0);
    }

    #[test]
    fn single_setpoint_maps_only_itself() {
        let ramp = DensityRamp::build(&[Setpoint::new(125, "T", 1.101)], 25).unwrap();
        assert_eq!(ramp.len(), 1);
        assert_eq!(ramp.get(125).unwrap().density(), 1.101);
    }

    // ── Queries ─────────────────────────────────────────────────

    #[test]
    fn material_for_snaps_to_the_bin_at_or_below() {
        let ramp = DensityRamp::build(&reference_setpoints(), 100).unwrap();

        assert_eq!(ramp.material_for(-1000).unwrap().density(), 0.001);
        assert_eq!(
            ramp.material_for(37).unwrap().name(),
            ramp.get(0).unwrap().name()
        );
        assert_eq!(
            ramp.material_for(999).unwrap().name(),
            ramp.get(900).unwrap().name()
        );
        // Past the end snaps to the final setpoint.
        assert_eq!(ramp.material_for(3000).unwrap().density(), 2.0);
        // Below the first setpoint there is no material.
        assert!(ramp.material_for(-1001).is_none());
    }

    // ── Purity ──────────────────────────────────────────────────

    proptest! {
        #[test]
        fn building_is_deterministic(
            intensities in prop::collection::btree_set(-2000i32..2000, 2..6),
            densities in prop::collection::vec(0.001f64..3.0, 6),
            increment in 1i32..200,
        ) {
            let setpoints: Vec<Setpoint> = intensities
                .iter()
                .zip(&densities)
                .map(|(&i, &d)| Setpoint::new(i, "M", d))
                .collect();

            let a = DensityRamp::build(&setpoints, increment).unwrap();
            let b = DensityRamp::build(&setpoints, increment).unwrap();

            prop_assert_eq!(a.len(), b.len());
            for ((ka, ma), (kb, mb)) in a.iter().zip(b.iter()) {
                prop_assert_eq!(ka, kb);
                prop_assert_eq!(ma, mb);
            }

            // The span is covered: first and last setpoints are present.
            let first = *intensities.iter().next().unwrap();
            let last = *intensities.iter().last().unwrap();
            prop_assert!(a.get(first).is_some());
            prop_assert!(a.get(last).is_some());
        }
    }
}
