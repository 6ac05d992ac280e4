//! Support classifications and local DOF directions

use serde::{Deserialize, Serialize};

/// A local degree-of-freedom direction at a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dof {
    /// Translation along global X
    Tx,
    /// Translation along global Y
    Ty,
    /// Rotation about the out-of-plane axis
    Rz,
}

impl Dof {
    /// Slot index of this direction in a node's DOF map
    pub fn slot(self) -> usize {
        match self {
            Dof::Tx => 0,
            Dof::Ty => 1,
            Dof::Rz => 2,
        }
    }
}

/// Support classification at a node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Support {
    /// No restraint
    #[default]
    Free,
    /// Rolls along X: vertical translation restrained
    RollerX,
    /// Rolls along Y: horizontal translation restrained
    RollerY,
    /// Both translations restrained, rotation free
    Pinned,
    /// All three directions restrained
    Fixed,
}

impl Support {
    /// Directions left free by this support, in {Tx, Ty, Rz} order.
    ///
    /// Free directions are numbered first and form the unknown partition
    /// of the global system.
    pub fn free_dofs(self) -> &'static [Dof] {
        match self {
            Support::Free => &[Dof::Tx, Dof::Ty, Dof::Rz],
            Support::RollerX => &[Dof::Tx, Dof::Rz],
            Support::RollerY => &[Dof::Ty, Dof::Rz],
            Support::Pinned => &[Dof::Rz],
            Support::Fixed => &[],
        }
    }

    /// Directions restrained by this support, in {Tx, Ty, Rz} order.
    ///
    /// Constrained directions are numbered after every free direction and
    /// form the reaction partition.
    pub fn constrained_dofs(self) -> &'static [Dof] {
        match self {
            Support::Free => &[],
            Support::RollerX => &[Dof::Ty],
            Support::RollerY => &[Dof::Tx],
            Support::Pinned => &[Dof::Tx, Dof::Ty],
            Support::Fixed => &[Dof::Tx, Dof::Ty, Dof::Rz],
        }
    }

    /// Whether a spring or a prescribed displacement may be attached in
    /// `direction`. A direction the support already fixes admits neither.
    pub fn admits(self, direction: Dof) -> bool {
        self.free_dofs().contains(&direction)
    }

    /// Count of restrained directions
    pub fn num_constrained(self) -> usize {
        self.constrained_dofs().len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_free_support_has_no_constraints() {
        assert_eq!(Support::Free.free_dofs(), &[Dof::Tx, Dof::Ty, Dof::Rz]);
        assert!(Support::Free.constrained_dofs().is_empty());
    }

    #[test]
    fn test_fixed_support_constrains_everything() {
        assert!(Support::Fixed.free_dofs().is_empty());
        assert_eq!(Support::Fixed.num_constrained(), 3);
    }

    #[test]
    fn test_slot_tables_are_complements() {
        for support in [
            Support::Free,
            Support::RollerX,
            Support::RollerY,
            Support::Pinned,
            Support::Fixed,
        ] {
            for dof in [Dof::Tx, Dof::Ty, Dof::Rz] {
                let free = support.free_dofs().contains(&dof);
                let constrained = support.constrained_dofs().contains(&dof);
                assert!(free != constrained);
            }
        }
    }

    #[test]
    fn test_admitted_directions() {
        assert!(!Support::Fixed.admits(Dof::Ty));
        assert!(Support::Pinned.admits(Dof::Rz));
        assert!(!Support::Pinned.admits(Dof::Tx));
        assert!(Support::RollerX.admits(Dof::Tx));
        assert!(!Support::RollerX.admits(Dof::Ty));
    }
}
