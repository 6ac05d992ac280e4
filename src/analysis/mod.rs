//! Direct stiffness analysis: DOF numbering, assembly and the
//! partitioned solve

use log::debug;
use serde::{Deserialize, Serialize};

use crate::elements::Dof;
use crate::error::{FrameError, FrameResult};
use crate::math::{self, Mat, Vec as FVec, Vec6};
use crate::model::FrameModel;
use crate::results::{ElementEndForces, NodeDisplacement, Reactions};

/// Options controlling an analysis run
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AnalysisOptions {
    /// Rotate element load vectors into the global frame before assembly
    ///
    /// By default the local equivalent loads are assembled untransformed,
    /// which mixes frames for inclined elements. Enabling this applies
    /// the same transformation to the load vector as to the stiffness
    /// matrix, both at assembly and in internal force recovery.
    pub rotate_loads: bool,
}

impl AnalysisOptions {
    /// Rotate element loads into the global frame
    pub fn with_rotated_loads(mut self) -> Self {
        self.rotate_loads = true;
        self
    }
}

/// Direct stiffness analysis over a fixed structural model
///
/// Construction discovers the unique node set, numbers the degrees of
/// freedom and sizes the global system; [`run`](Analysis::run) performs
/// the assembly, the free/constrained partitioned solve and the
/// back-substitution into the elements. The analysis is single-use per
/// structure: changing supports or hinges requires building a new one.
#[derive(Debug, Clone)]
pub struct Analysis {
    model: FrameModel,
    options: AnalysisOptions,
    /// Unique nodes in first-appearance order across elements
    node_order: Vec<usize>,
    number_equations: usize,
    number_free_equations: usize,
    /// Global stiffness matrix
    kg: Mat,
    /// Global load vector
    fg: FVec,
    /// Global displacement vector
    ug: FVec,
    solved: bool,
}

impl Analysis {
    /// Create an analysis with default options
    pub fn new(model: FrameModel) -> Self {
        Self::with_options(model, AnalysisOptions::default())
    }

    /// Create an analysis with explicit options
    pub fn with_options(mut model: FrameModel, options: AnalysisOptions) -> Self {
        let node_order = discover_nodes(&model);
        let (number_free_equations, number_equations) =
            number_equations(&mut model, &node_order);
        resolve_element_equations(&mut model);

        debug!(
            "numbered {} equations ({} free) over {} nodes and {} elements",
            number_equations,
            number_free_equations,
            node_order.len(),
            model.elements().len()
        );

        Self {
            model,
            options,
            node_order,
            number_equations,
            number_free_equations,
            kg: Mat::zeros(number_equations, number_equations),
            fg: FVec::zeros(number_equations),
            ug: FVec::zeros(number_equations),
            solved: false,
        }
    }

    /// Run the analysis: apply boundary conditions, assemble the global
    /// system, solve the free partition and recover element forces
    pub fn run(&mut self) -> FrameResult<()> {
        self.kg.fill(0.0);
        self.fg.fill(0.0);
        self.ug.fill(0.0);

        // Prescribed support displacements enter the displacement vector
        // directly at their mapped equation index
        for &node_index in &self.node_order {
            let node = &self.model.nodes[node_index];
            for &(direction, value) in node.prescribed_displacements() {
                let equation = node.equation(direction).unwrap();
                self.ug[equation] = value;
            }
        }

        // Element kernels and scatter-add assembly
        let rotate_loads = self.options.rotate_loads;
        for element in self.model.elements.iter_mut() {
            element.rotate();
            element.compute_stiffness();

            let equations = element.dofs.unwrap();
            let fel = if rotate_loads {
                element.rotation.transpose() * element.fel
            } else {
                element.fel
            };

            for i in 0..6 {
                self.fg[equations[i]] += fel[i];
                for j in 0..6 {
                    self.kg[(equations[i], equations[j])] += element.kel[(i, j)];
                }
            }
        }

        // Elastic supports act in parallel with the structural stiffness
        for &node_index in &self.node_order {
            let node = &self.model.nodes[node_index];
            for &(direction, stiffness) in node.springs() {
                let equation = node.equation(direction).unwrap();
                self.kg[(equation, equation)] += stiffness;
            }
        }

        // Partitioned solve of the free block
        let n_free = self.number_free_equations;
        if n_free == 0 {
            return Err(FrameError::NoFreeEquations);
        }

        debug!("solving {} free equations", n_free);
        let k00 = self.kg.view((0, 0), (n_free, n_free)).into_owned();
        let f0 = self.fg.rows(0, n_free).into_owned();
        let u0 = math::solve_linear_system(&k00, &f0).ok_or(FrameError::SingularSystem)?;

        self.ug.rows_mut(0, n_free).copy_from(&u0);

        // Back-substitution: gather element displacements and recover
        // internal forces
        for element in self.model.elements.iter_mut() {
            let equations = element.dofs.unwrap();

            let mut uel = Vec6::zeros();
            for i in 0..6 {
                uel[i] = self.ug[equations[i]];
            }

            let fel = if rotate_loads {
                element.rotation.transpose() * element.fel
            } else {
                element.fel
            };

            element.uel = uel;
            element.forces = element.kel * uel - fel;
        }

        self.solved = true;
        Ok(())
    }

    /// The analyzed model
    pub fn model(&self) -> &FrameModel {
        &self.model
    }

    /// Unique node indices in first-appearance order across elements
    pub fn node_order(&self) -> &[usize] {
        &self.node_order
    }

    /// Total number of equations
    pub fn number_equations(&self) -> usize {
        self.number_equations
    }

    /// Number of free (unknown) equations; equations at or beyond this
    /// boundary belong to the constrained partition
    pub fn number_free_equations(&self) -> usize {
        self.number_free_equations
    }

    /// Global stiffness matrix
    pub fn global_stiffness(&self) -> &Mat {
        &self.kg
    }

    /// Global load vector
    pub fn global_loads(&self) -> &FVec {
        &self.fg
    }

    /// Global displacement vector
    pub fn global_displacements(&self) -> &FVec {
        &self.ug
    }

    /// Displacement of a node
    pub fn node_displacement(&self, node: usize) -> FrameResult<NodeDisplacement> {
        if !self.solved {
            return Err(FrameError::NotAnalyzed);
        }

        let node = self.model.node(node)?;
        Ok(NodeDisplacement {
            dx: self.ug[node.equation(Dof::Tx).unwrap()],
            dy: self.ug[node.equation(Dof::Ty).unwrap()],
            rz: self.ug[node.equation(Dof::Rz).unwrap()],
        })
    }

    /// End forces of an element
    pub fn element_forces(&self, element: usize) -> FrameResult<ElementEndForces> {
        if !self.solved {
            return Err(FrameError::NotAnalyzed);
        }

        let element = self.model.element(element)?;
        Ok(ElementEndForces::from_vector(element.internal_forces()))
    }

    /// Support reactions at a node
    ///
    /// Element internal forces are scattered back onto the global
    /// equations; the entries at the node's constrained directions are
    /// the reactions, and free directions report zero.
    pub fn reactions(&self, node: usize) -> FrameResult<Reactions> {
        if !self.solved {
            return Err(FrameError::NotAnalyzed);
        }

        let assembled = self.assembled_internal_forces();
        let node = self.model.node(node)?;

        let mut values = [0.0; 3];
        for &direction in node.support.constrained_dofs() {
            values[direction.slot()] = assembled[node.equation(direction).unwrap()];
        }

        Ok(Reactions {
            fx: values[0],
            fy: values[1],
            mz: values[2],
        })
    }

    fn assembled_internal_forces(&self) -> FVec {
        let mut forces = FVec::zeros(self.number_equations);
        for element in &self.model.elements {
            let equations = element.dofs.unwrap();
            for i in 0..6 {
                forces[equations[i]] += element.forces[i];
            }
        }
        forces
    }
}

/// Concatenate every node referenced by the elements, keeping the first
/// appearance only (dedup is by arena index, never by coordinates)
fn discover_nodes(model: &FrameModel) -> Vec<usize> {
    let mut seen = vec![false; model.nodes.len()];
    let mut order = Vec::new();

    for element in model.elements() {
        for &node in &element.nodes() {
            if !seen[node] {
                seen[node] = true;
                order.push(node);
            }
        }
    }

    order
}

/// Two-pass DOF numbering over the discovered nodes
///
/// The free pass numbers every node's free slots (plus hinge extras)
/// first; the constrained pass continues the same counter over the
/// constrained slots. The counter is threaded by value through the node
/// numbering steps. Returns (free equations, total equations).
fn number_equations(model: &mut FrameModel, order: &[usize]) -> (usize, usize) {
    let mut counter = 0;
    for &node in order {
        counter = model.nodes[node].number_free(counter);
    }
    let free = counter;

    for &node in order {
        counter = model.nodes[node].number_constrained(counter);
    }

    (free, counter)
}

/// Resolve each element's 6 global equation indices
///
/// Translations always map to the node's base slots. Rotations at a
/// hinged node are resolved per attachment: the node's first attachment
/// in element-discovery order keeps the ordinary rotation slot, every
/// later attachment takes the next extra slot, so each connecting member
/// carries its own rotation.
fn resolve_element_equations(model: &mut FrameModel) {
    let mut attachments = vec![0usize; model.nodes.len()];
    let FrameModel { nodes, elements } = model;

    for element in elements.iter_mut() {
        let mut equations = [0usize; 6];

        for (end, &node_index) in element.nodes.iter().enumerate() {
            let node = &nodes[node_index];
            equations[3 * end] = node.dofs[0].unwrap();
            equations[3 * end + 1] = node.dofs[1].unwrap();

            equations[3 * end + 2] = if node.hinge {
                let nth = attachments[node_index];
                attachments[node_index] += 1;
                if nth == 0 {
                    node.dofs[2].unwrap()
                } else {
                    node.hinge_dofs[nth - 1]
                }
            } else {
                node.dofs[2].unwrap()
            };
        }

        element.dofs = Some(equations);
    }
}
