//! Typed read-only views over analysis results

use serde::{Deserialize, Serialize};

use crate::math::Vec6;

/// Displacement results at a node
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct NodeDisplacement {
    /// Displacement in X direction
    pub dx: f64,
    /// Displacement in Y direction
    pub dy: f64,
    /// Rotation about the out-of-plane axis
    pub rz: f64,
}

impl NodeDisplacement {
    /// Get translation magnitude
    pub fn translation_magnitude(&self) -> f64 {
        (self.dx.powi(2) + self.dy.powi(2)).sqrt()
    }
}

/// Reaction forces at a supported node
///
/// Entries at directions the support leaves free are zero.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Reactions {
    /// Reaction force in X direction
    pub fx: f64,
    /// Reaction force in Y direction
    pub fy: f64,
    /// Reaction moment about the out-of-plane axis
    pub mz: f64,
}

impl Reactions {
    /// Get total force magnitude
    pub fn force_magnitude(&self) -> f64 {
        (self.fx.powi(2) + self.fy.powi(2)).sqrt()
    }
}

/// End forces of an element, split per node
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ElementEndForces {
    /// Force at node 1 in X direction
    pub fx1: f64,
    /// Force at node 1 in Y direction
    pub fy1: f64,
    /// Moment at node 1
    pub mz1: f64,
    /// Force at node 2 in X direction
    pub fx2: f64,
    /// Force at node 2 in Y direction
    pub fy2: f64,
    /// Moment at node 2
    pub mz2: f64,
}

impl ElementEndForces {
    /// Create from an element internal force vector
    pub fn from_vector(forces: &Vec6) -> Self {
        Self {
            fx1: forces[0],
            fy1: forces[1],
            mz1: forces[2],
            fx2: forces[3],
            fy2: forces[4],
            mz2: forces[5],
        }
    }

    /// Get maximum absolute end moment
    pub fn max_moment(&self) -> f64 {
        self.mz1.abs().max(self.mz2.abs())
    }
}
