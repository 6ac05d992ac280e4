//! Element load patterns and their equivalent nodal forces

use serde::{Deserialize, Serialize};

use crate::math::Vec6;

/// A load applied along an element
///
/// Each pattern maps to a fixed local equivalent nodal force vector in
/// {Tx, Ty, Rz at node 1; Tx, Ty, Rz at node 2} order. Geometric
/// validation against the owning element happens when the load is applied.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub enum Load {
    /// Uniformly distributed transverse load over a span
    Uniform {
        /// Load intensity (force per unit length)
        load: f64,
        /// Span the load acts on
        length: f64,
    },
    /// Concentrated transverse force along the element
    PointForce {
        /// Force magnitude
        force: f64,
        /// Distance from node 1
        a: f64,
        /// Distance from node 2
        b: f64,
    },
}

impl Load {
    /// Create a uniform distributed load
    pub fn uniform(load: f64, length: f64) -> Self {
        Self::Uniform { load, length }
    }

    /// Create a concentrated force at distances `a` from node 1 and `b`
    /// from node 2
    pub fn point_force(force: f64, a: f64, b: f64) -> Self {
        Self::PointForce { force, a, b }
    }

    /// Local equivalent nodal force vector of this load pattern
    pub fn equivalent_forces(&self) -> Vec6 {
        match *self {
            Load::Uniform { load: q, length: l } => Vec6::from_row_slice(&[
                0.0,
                q * l / 2.0,
                q * l * l / 12.0,
                0.0,
                q * l / 2.0,
                -q * l * l / 12.0,
            ]),
            Load::PointForce { force: p, a, b } => {
                let l = a + b;
                let l2 = l * l;
                let l3 = l2 * l;

                Vec6::from_row_slice(&[
                    0.0,
                    p * b * b * (3.0 * a + b) / l3,
                    p * a * b * b / l2,
                    0.0,
                    p * a * a * (a + 3.0 * b) / l3,
                    -p * a * a * b / l2,
                ])
            }
        }
    }
}
