//! Node - a point of the structure carrying degrees of freedom

use serde::{Deserialize, Serialize};

use crate::elements::{Dof, Support};

/// A 2D node in the structural model
///
/// Identity is the arena index assigned when the node is added to a
/// model; two nodes are the same node exactly when their indices are
/// equal, never by coordinate comparison.
///
/// The DOF map holds three base slots in {Tx, Ty, Rz} order plus, for a
/// hinged node, one extra rotation slot per connecting element beyond the
/// first, so every member can carry its own rotation while sharing the
/// translations. Slots are `None` until the analysis numbers them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Node {
    /// X coordinate
    pub x: f64,
    /// Y coordinate
    pub y: f64,
    /// Support classification
    pub support: Support,
    /// Whether connecting elements rotate independently at this node
    pub hinge: bool,

    /// Number of elements built on this node
    pub(crate) connections: usize,

    /// Elastic supports: (direction, stiffness)
    pub(crate) springs: Vec<(Dof, f64)>,

    /// Prescribed support displacements: (direction, value)
    pub(crate) displacements: Vec<(Dof, f64)>,

    /// Base equation indices, assigned during numbering
    #[serde(skip)]
    pub(crate) dofs: [Option<usize>; 3],

    /// Extra rotation equation indices for hinged nodes
    #[serde(skip)]
    pub(crate) hinge_dofs: Vec<usize>,
}

impl Node {
    /// Create a new node at the given coordinates
    pub fn new(x: f64, y: f64, support: Support) -> Self {
        Self {
            x,
            y,
            support,
            hinge: false,
            connections: 0,
            springs: Vec::new(),
            displacements: Vec::new(),
            dofs: [None; 3],
            hinge_dofs: Vec::new(),
        }
    }

    /// Mark this node as an internal hinge
    pub fn with_hinge(mut self) -> Self {
        self.hinge = true;
        self
    }

    /// Get the coordinates as an array
    pub fn coords(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    /// Calculate distance to another node
    pub fn distance_to(&self, other: &Node) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Number of elements built on this node
    pub fn connections(&self) -> usize {
        self.connections
    }

    /// Equation index assigned to `direction`, once numbering has run
    pub fn equation(&self, direction: Dof) -> Option<usize> {
        self.dofs[direction.slot()]
    }

    /// Extra rotation equation indices of a hinged node
    pub fn hinge_equations(&self) -> &[usize] {
        &self.hinge_dofs
    }

    /// Attached elastic springs
    pub fn springs(&self) -> &[(Dof, f64)] {
        &self.springs
    }

    /// Prescribed support displacements
    pub fn prescribed_displacements(&self) -> &[(Dof, f64)] {
        &self.displacements
    }

    /// Assign fresh indices to the free slots, continuing from `counter`.
    ///
    /// Free directions follow the support table in {Tx, Ty, Rz} order; a
    /// hinged node then receives one extra rotation index per connection
    /// beyond the first. Returns the advanced counter.
    pub(crate) fn number_free(&mut self, mut counter: usize) -> usize {
        for &dof in self.support.free_dofs() {
            self.dofs[dof.slot()] = Some(counter);
            counter += 1;
        }

        if self.hinge {
            for _ in 1..self.connections {
                self.hinge_dofs.push(counter);
                counter += 1;
            }
        }

        counter
    }

    /// Assign fresh indices to the constrained slots, continuing from
    /// `counter`. Returns the advanced counter.
    pub(crate) fn number_constrained(&mut self, mut counter: usize) -> usize {
        for &dof in self.support.constrained_dofs() {
            self.dofs[dof.slot()] = Some(counter);
            counter += 1;
        }

        counter
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_distance() {
        let n1 = Node::new(0.0, 0.0, Support::Free);
        let n2 = Node::new(3.0, 4.0, Support::Free);
        assert!((n1.distance_to(&n2) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_free_node_numbers_all_slots_in_free_pass() {
        let mut node = Node::new(0.0, 0.0, Support::Free);
        let counter = node.number_free(0);
        assert_eq!(counter, 3);
        assert_eq!(node.dofs, [Some(0), Some(1), Some(2)]);
        assert_eq!(node.number_constrained(counter), 3);
    }

    #[test]
    fn test_fixed_node_numbers_all_slots_in_constrained_pass() {
        let mut node = Node::new(0.0, 0.0, Support::Fixed);
        let counter = node.number_free(5);
        assert_eq!(counter, 5);
        assert_eq!(node.dofs, [None; 3]);

        let counter = node.number_constrained(counter);
        assert_eq!(counter, 8);
        assert_eq!(node.dofs, [Some(5), Some(6), Some(7)]);
    }

    #[test]
    fn test_hinged_node_gets_one_extra_slot_per_extra_connection() {
        let mut node = Node::new(0.0, 0.0, Support::Free).with_hinge();
        node.connections = 3;

        let counter = node.number_free(0);
        assert_eq!(counter, 5);
        assert_eq!(node.hinge_equations(), &[3, 4]);
    }

    #[test]
    fn test_roller_splits_slots_between_passes() {
        let mut node = Node::new(1.0, 2.0, Support::RollerX);
        let counter = node.number_free(0);
        assert_eq!(counter, 2);
        let counter = node.number_constrained(counter);
        assert_eq!(counter, 3);

        assert_eq!(node.equation(Dof::Tx), Some(0));
        assert_eq!(node.equation(Dof::Rz), Some(1));
        assert_eq!(node.equation(Dof::Ty), Some(2));
    }
}
