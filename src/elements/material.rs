//! Material properties

use serde::{Deserialize, Serialize};

/// Material properties for frame elements
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Material {
    /// Modulus of elasticity (Young's modulus) in Pa
    pub e: f64,
    /// Poisson's ratio
    pub nu: f64,
    /// Shear modulus in Pa, derived from `e` and `nu`
    pub g: f64,
}

impl Material {
    /// Create an isotropic material from E and nu
    /// G is calculated as E / (2 * (1 + nu))
    pub fn new(e: f64, nu: f64) -> Self {
        Self {
            e,
            nu,
            g: e / (2.0 * (1.0 + nu)),
        }
    }

    /// Create a standard structural steel material
    pub fn steel() -> Self {
        Self::new(200e9, 0.3)
    }

    /// Create an aluminum material (6061-T6)
    pub fn aluminum() -> Self {
        Self::new(68.9e9, 0.33)
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::steel()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shear_modulus_derivation() {
        let mat = Material::new(200e9, 0.3);
        let expected_g = 200e9 / (2.0 * 1.3);
        assert!((mat.g - expected_g).abs() < 1.0);
    }

    #[test]
    fn test_steel_properties() {
        let steel = Material::steel();
        assert_eq!(steel.e, 200e9);
        assert_eq!(steel.nu, 0.3);
    }
}
