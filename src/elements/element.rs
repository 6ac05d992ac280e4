//! Element - a straight two-node beam-column member

use serde::{Deserialize, Serialize};

use crate::elements::{Material, Section};
use crate::error::{FrameError, FrameResult};
use crate::loads::Load;
use crate::math::{self, Mat6, Vec6};

/// A straight two-node beam-column element
///
/// Combines axial (truss) and Euler-Bernoulli bending behavior. Geometry
/// is derived from the end node positions at construction; the rotation
/// matrix and global stiffness stay zero until the analysis recomputes
/// them, and the displacement/force solution vectors are filled by the
/// back-substitution after the solve.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Element {
    /// Arena index of this element
    pub(crate) index: usize,
    /// Arena indices of the two end nodes
    pub(crate) nodes: [usize; 2],
    /// Material of the element
    pub material: Material,
    /// Cross-section of the element
    pub section: Section,

    /// Chord length
    pub(crate) length: f64,
    /// Inclination angle, arcsine of the normalized Y-delta
    pub(crate) angle: f64,
    /// Direction cosines of the chord (dx/length, dy/length)
    pub(crate) direction: [f64; 2],

    /// Local equivalent nodal load vector, accumulated by superposition
    pub(crate) fel: Vec6,

    /// Global equation indices of the 6 local directions, assigned
    /// during DOF numbering
    #[serde(skip)]
    pub(crate) dofs: Option<[usize; 6]>,

    /// Local-to-global rotation matrix
    #[serde(skip, default = "Mat6::zeros")]
    pub(crate) rotation: Mat6,

    /// Global-frame stiffness matrix
    #[serde(skip, default = "Mat6::zeros")]
    pub(crate) kel: Mat6,

    /// Solved element displacement vector
    #[serde(skip, default = "Vec6::zeros")]
    pub(crate) uel: Vec6,

    /// Solved internal force vector
    #[serde(skip, default = "Vec6::zeros")]
    pub(crate) forces: Vec6,
}

impl Element {
    /// Build an element between two node positions
    ///
    /// Fails when the chord length is not strictly positive.
    pub(crate) fn new(
        index: usize,
        nodes: [usize; 2],
        p1: [f64; 2],
        p2: [f64; 2],
        material: Material,
        section: Section,
    ) -> FrameResult<Self> {
        let dx = p2[0] - p1[0];
        let dy = p2[1] - p1[1];
        let length = (dx * dx + dy * dy).sqrt();

        if length < 1e-10 {
            return Err(FrameError::ZeroLengthElement {
                index,
                node1: nodes[0],
                node2: nodes[1],
            });
        }

        Ok(Self {
            index,
            nodes,
            material,
            section,
            length,
            angle: (dy / length).asin(),
            direction: [dx / length, dy / length],
            fel: Vec6::zeros(),
            dofs: None,
            rotation: Mat6::zeros(),
            kel: Mat6::zeros(),
            uel: Vec6::zeros(),
            forces: Vec6::zeros(),
        })
    }

    /// Arena index of this element
    pub fn index(&self) -> usize {
        self.index
    }

    /// Arena indices of the two end nodes
    pub fn nodes(&self) -> [usize; 2] {
        self.nodes
    }

    /// Chord length
    pub fn length(&self) -> f64 {
        self.length
    }

    /// Inclination angle in radians
    pub fn angle(&self) -> f64 {
        self.angle
    }

    /// Accumulated local equivalent nodal load vector
    pub fn load_vector(&self) -> &Vec6 {
        &self.fel
    }

    /// Local-to-global rotation matrix
    pub fn rotation_matrix(&self) -> &Mat6 {
        &self.rotation
    }

    /// Global-frame stiffness matrix
    pub fn stiffness(&self) -> &Mat6 {
        &self.kel
    }

    /// Solved element displacement vector
    pub fn displacements(&self) -> &Vec6 {
        &self.uel
    }

    /// Solved internal force vector
    pub fn internal_forces(&self) -> &Vec6 {
        &self.forces
    }

    /// Global equation indices of the 6 local directions, once numbering
    /// has run
    pub fn equations(&self) -> Option<[usize; 6]> {
        self.dofs
    }

    /// Check that a load's geometric parameters fit this element
    fn check_load(&self, load: &Load) -> FrameResult<()> {
        match *load {
            Load::Uniform { length, .. } if length > self.length => {
                Err(FrameError::LoadLongerThanElement {
                    element: self.index,
                    load_length: length,
                    element_length: self.length,
                })
            }
            Load::PointForce { a, b, .. } if a + b > self.length => {
                Err(FrameError::PointLoadOutsideElement {
                    element: self.index,
                    a,
                    b,
                    element_length: self.length,
                })
            }
            _ => Ok(()),
        }
    }

    /// Apply loads to this element, superposing their equivalent nodal
    /// forces onto the local load vector
    ///
    /// Every load is validated against the element length before any of
    /// them is accepted.
    pub fn apply_loads(&mut self, loads: &[Load]) -> FrameResult<()> {
        for load in loads {
            self.check_load(load)?;
        }

        for load in loads {
            self.fel += load.equivalent_forces();
        }

        Ok(())
    }

    /// Recompute the rotation matrix from the chord direction cosines
    pub(crate) fn rotate(&mut self) {
        self.rotation = math::rotation_matrix(self.direction[0], self.direction[1]);
    }

    /// Recompute the global-frame stiffness matrix
    ///
    /// Requires `rotate` to have run.
    pub(crate) fn compute_stiffness(&mut self) {
        let local = math::local_stiffness(
            self.material.e,
            self.section.area(),
            self.section.inertia(),
            self.length,
        );

        self.kel = self.rotation.transpose() * local * self.rotation;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn element(p1: [f64; 2], p2: [f64; 2]) -> Element {
        Element::new(
            0,
            [0, 1],
            p1,
            p2,
            Material::new(25e6, 0.3),
            Section::rectangle(0.2, 0.3),
        )
        .unwrap()
    }

    #[test]
    fn test_geometry_derivation() {
        let el = element([1.0, 1.0], [4.0, 5.0]);
        assert_relative_eq!(el.length(), 5.0);
        assert_relative_eq!(el.angle(), (4.0_f64 / 5.0).asin());
        assert_relative_eq!(el.direction[0], 0.6);
        assert_relative_eq!(el.direction[1], 0.8);
    }

    #[test]
    fn test_zero_length_is_rejected() {
        let result = Element::new(
            3,
            [0, 0],
            [2.0, 2.0],
            [2.0, 2.0],
            Material::steel(),
            Section::circular(0.1),
        );
        assert!(matches!(
            result,
            Err(FrameError::ZeroLengthElement { index: 3, .. })
        ));
    }

    #[test]
    fn test_horizontal_global_stiffness_equals_local() {
        let mut el = element([0.0, 0.0], [4.0, 0.0]);
        el.rotate();
        el.compute_stiffness();

        let local = math::local_stiffness(
            el.material.e,
            el.section.area(),
            el.section.inertia(),
            el.length(),
        );

        for i in 0..6 {
            for j in 0..6 {
                assert_relative_eq!(el.kel[(i, j)], local[(i, j)], epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn test_loads_accumulate_by_superposition() {
        let mut el = element([0.0, 0.0], [4.0, 0.0]);
        el.apply_loads(&[Load::uniform(10.0, 4.0)]).unwrap();
        el.apply_loads(&[Load::uniform(10.0, 4.0)]).unwrap();

        let doubled = Load::uniform(20.0, 4.0).equivalent_forces();
        for i in 0..6 {
            assert_relative_eq!(el.load_vector()[i], doubled[i]);
        }
    }

    #[test]
    fn test_uniform_load_longer_than_element_is_rejected() {
        let mut el = element([0.0, 0.0], [4.0, 0.0]);
        let result = el.apply_loads(&[Load::uniform(10.0, 12.0)]);
        assert!(matches!(
            result,
            Err(FrameError::LoadLongerThanElement { element: 0, .. })
        ));
        // Nothing was applied
        assert_eq!(el.load_vector().norm(), 0.0);
    }

    #[test]
    fn test_point_load_outside_element_is_rejected() {
        let mut el = element([0.0, 0.0], [4.0, 0.0]);
        let result = el.apply_loads(&[Load::point_force(5.0, 3.0, 2.0)]);
        assert!(matches!(
            result,
            Err(FrameError::PointLoadOutsideElement { element: 0, .. })
        ));
    }
}
