//! Cross-section shape families

use serde::{Deserialize, Serialize};

/// Cross-section descriptor for frame elements
///
/// The geometric properties are pure functions of the shape parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Section {
    /// Solid rectangle
    Rectangle {
        /// Width of the section in m
        base: f64,
        /// Depth of the section in m
        height: f64,
    },
    /// Solid circle
    Circular {
        /// Radius of the section in m
        radius: f64,
    },
}

impl Section {
    /// Create a rectangular section
    pub fn rectangle(base: f64, height: f64) -> Self {
        Self::Rectangle { base, height }
    }

    /// Create a circular section
    pub fn circular(radius: f64) -> Self {
        Self::Circular { radius }
    }

    /// Cross-sectional area in m²
    pub fn area(&self) -> f64 {
        match *self {
            Section::Rectangle { base, height } => base * height,
            Section::Circular { radius } => std::f64::consts::PI * radius * radius,
        }
    }

    /// Second moment of area about the bending axis in m⁴
    pub fn inertia(&self) -> f64 {
        match *self {
            Section::Rectangle { base, height } => base * height.powi(3) / 12.0,
            Section::Circular { radius } => std::f64::consts::PI * radius.powi(4) / 4.0,
        }
    }

    /// Radius of gyration in m
    pub fn radius_of_gyration(&self) -> f64 {
        (self.inertia() / self.area()).sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangular_section() {
        let section = Section::rectangle(0.3, 0.5);
        let expected_a = 0.3 * 0.5;
        let expected_i = 0.3 * 0.5_f64.powi(3) / 12.0;

        assert!((section.area() - expected_a).abs() < 1e-12);
        assert!((section.inertia() - expected_i).abs() < 1e-12);
    }

    #[test]
    fn test_circular_section() {
        let section = Section::circular(0.25);
        let expected_a = std::f64::consts::PI * 0.25_f64 * 0.25;
        let expected_i = std::f64::consts::PI * 0.25_f64.powi(4) / 4.0;

        assert!((section.area() - expected_a).abs() < 1e-12);
        assert!((section.inertia() - expected_i).abs() < 1e-12);
    }
}
