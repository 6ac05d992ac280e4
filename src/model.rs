//! Structural model - the arena of nodes and elements

use serde::{Deserialize, Serialize};

use crate::elements::{Dof, Element, Material, Node, Section};
use crate::error::{FrameError, FrameResult};
use crate::loads::Load;

/// A 2D structural model owning the node and element arenas
///
/// Node and element identity is the arena index returned at creation and
/// survives serialization; elements refer to their end nodes by index.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameModel {
    pub(crate) nodes: Vec<Node>,
    pub(crate) elements: Vec<Element>,
}

impl FrameModel {
    /// Create a new empty model
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node to the model, returning its index
    pub fn add_node(&mut self, node: Node) -> usize {
        self.nodes.push(node);
        self.nodes.len() - 1
    }

    /// Build an element between two existing nodes, returning its index
    ///
    /// Derives the element geometry from the node positions and counts
    /// the connection on both nodes. Fails on unknown node indices or a
    /// zero-length chord.
    pub fn add_element(
        &mut self,
        node1: usize,
        node2: usize,
        material: Material,
        section: Section,
    ) -> FrameResult<usize> {
        let index = self.elements.len();
        let p1 = self.node(node1)?.coords();
        let p2 = self.node(node2)?.coords();

        let element = Element::new(index, [node1, node2], p1, p2, material, section)?;

        self.nodes[node1].connections += 1;
        self.nodes[node2].connections += 1;
        self.elements.push(element);

        Ok(index)
    }

    /// Apply loads to an element, validating their geometry against the
    /// element length
    pub fn apply_loads(&mut self, element: usize, loads: &[Load]) -> FrameResult<()> {
        self.elements
            .get_mut(element)
            .ok_or(FrameError::ElementNotFound(element))?
            .apply_loads(loads)
    }

    /// Attach elastic springs at a node
    ///
    /// Every direction must be admitted by the node's support
    /// classification; a direction the support already fixes is a fatal
    /// configuration error and nothing is attached.
    pub fn prescribe_spring(&mut self, node: usize, springs: &[(Dof, f64)]) -> FrameResult<()> {
        let n = self
            .nodes
            .get_mut(node)
            .ok_or(FrameError::NodeNotFound(node))?;

        for &(direction, _) in springs {
            if !n.support.admits(direction) {
                return Err(FrameError::SpringNotAllowed {
                    node,
                    support: n.support,
                    direction,
                });
            }
        }

        n.springs.extend_from_slice(springs);
        Ok(())
    }

    /// Prescribe support displacements at a node
    ///
    /// Validated against the same allowed-direction table as springs.
    pub fn prescribe_displacement(
        &mut self,
        node: usize,
        values: &[(Dof, f64)],
    ) -> FrameResult<()> {
        let n = self
            .nodes
            .get_mut(node)
            .ok_or(FrameError::NodeNotFound(node))?;

        for &(direction, _) in values {
            if !n.support.admits(direction) {
                return Err(FrameError::DisplacementNotAllowed {
                    node,
                    support: n.support,
                    direction,
                });
            }
        }

        n.displacements.extend_from_slice(values);
        Ok(())
    }

    /// Get a node by index
    pub fn node(&self, index: usize) -> FrameResult<&Node> {
        self.nodes.get(index).ok_or(FrameError::NodeNotFound(index))
    }

    /// Get an element by index
    pub fn element(&self, index: usize) -> FrameResult<&Element> {
        self.elements
            .get(index)
            .ok_or(FrameError::ElementNotFound(index))
    }

    /// All nodes, in arena order
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// All elements, in arena order
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::Support;

    fn two_node_model() -> (FrameModel, usize, usize) {
        let mut model = FrameModel::new();
        let n1 = model.add_node(Node::new(0.0, 0.0, Support::Fixed));
        let n2 = model.add_node(Node::new(4.0, 0.0, Support::Free));
        (model, n1, n2)
    }

    #[test]
    fn test_add_element_counts_connections() {
        let (mut model, n1, n2) = two_node_model();
        model
            .add_element(n1, n2, Material::steel(), Section::rectangle(0.2, 0.3))
            .unwrap();

        assert_eq!(model.node(n1).unwrap().connections(), 1);
        assert_eq!(model.node(n2).unwrap().connections(), 1);
    }

    #[test]
    fn test_add_element_rejects_unknown_node() {
        let (mut model, n1, _) = two_node_model();
        let result = model.add_element(n1, 7, Material::steel(), Section::circular(0.1));
        assert!(matches!(result, Err(FrameError::NodeNotFound(7))));
    }

    #[test]
    fn test_add_element_rejects_coincident_nodes() {
        let mut model = FrameModel::new();
        let n1 = model.add_node(Node::new(1.0, 1.0, Support::Free));
        let n2 = model.add_node(Node::new(1.0, 1.0, Support::Free));

        let result = model.add_element(n1, n2, Material::steel(), Section::circular(0.1));
        assert!(matches!(
            result,
            Err(FrameError::ZeroLengthElement { .. })
        ));
    }

    #[test]
    fn test_fixed_node_admits_no_spring() {
        let (mut model, n1, _) = two_node_model();
        let result = model.prescribe_spring(n1, &[(Dof::Ty, 1e6)]);
        assert!(matches!(
            result,
            Err(FrameError::SpringNotAllowed {
                support: Support::Fixed,
                direction: Dof::Ty,
                ..
            })
        ));
    }

    #[test]
    fn test_pinned_node_admits_only_rotational_attachments() {
        let mut model = FrameModel::new();
        let n = model.add_node(Node::new(0.0, 0.0, Support::Pinned));

        model.prescribe_spring(n, &[(Dof::Rz, 5e4)]).unwrap();
        model.prescribe_displacement(n, &[(Dof::Rz, 0.002)]).unwrap();

        assert!(matches!(
            model.prescribe_spring(n, &[(Dof::Tx, 1e6)]),
            Err(FrameError::SpringNotAllowed { .. })
        ));
        assert!(matches!(
            model.prescribe_displacement(n, &[(Dof::Ty, 0.01)]),
            Err(FrameError::DisplacementNotAllowed { .. })
        ));
    }

    #[test]
    fn test_rejected_spring_list_attaches_nothing() {
        let mut model = FrameModel::new();
        let n = model.add_node(Node::new(0.0, 0.0, Support::RollerX));

        // Tx is admitted, Ty is not: the whole list must be refused
        let result = model.prescribe_spring(n, &[(Dof::Tx, 1e5), (Dof::Ty, 1e5)]);
        assert!(result.is_err());
        assert!(model.node(n).unwrap().springs().is_empty());
    }
}
