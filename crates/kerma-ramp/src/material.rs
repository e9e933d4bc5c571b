//! Synthesized materials.

use std::fmt;

/// A concrete material: a base composition at a specific density.
///
/// The name deterministically encodes the density into the base name,
/// so synthesizing the same (base, density) pair twice yields the same
/// identity — no duplicate definitions with ambiguous names.
///
/// # Examples
///
/// ```
/// use kerma_ramp::Material;
///
/// let lung = Material::with_density("G4_LUNG_ICRP", 0.302);
/// assert_eq!(lung.name(), "G4_LUNG_ICRP0.302");
/// assert_eq!(lung, Material::with_density("G4_LUNG_ICRP", 0.302));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Material {
    name: String,
    base: String,
    density: f64,
}

impl Material {
    /// Synthesize a material from `base` at `density`.
    pub fn with_density(base: impl Into<String>, density: f64) -> Self {
        let base = base.into();
        Self {
            name: format!("{base}{density}"),
            base,
            density,
        }
    }

    /// The density-encoding unique name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The base material this was synthesized from.
    pub fn base(&self) -> &str {
        &self.base
    }

    /// The density.
    pub fn density(&self) -> f64 {
        self.density
    }
}

impl fmt::Display for Material {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
