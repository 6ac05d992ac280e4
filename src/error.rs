//! Error types for the solver

use thiserror::Error;

use crate::elements::{Dof, Support};

/// Main error type for model building and analysis
#[derive(Error, Debug)]
pub enum FrameError {
    #[error("Node {0} not found in model")]
    NodeNotFound(usize),

    #[error("Element {0} not found in model")]
    ElementNotFound(usize),

    #[error("Element {index} has zero length: nodes {node1} and {node2} coincide")]
    ZeroLengthElement {
        index: usize,
        node1: usize,
        node2: usize,
    },

    #[error(
        "Element {element}: uniform load length {load_length} exceeds element length {element_length}"
    )]
    LoadLongerThanElement {
        element: usize,
        load_length: f64,
        element_length: f64,
    },

    #[error(
        "Element {element}: point load offsets a + b = {a} + {b} exceed element length {element_length}"
    )]
    PointLoadOutsideElement {
        element: usize,
        a: f64,
        b: f64,
        element_length: f64,
    },

    #[error("Node {node}: {support:?} support does not admit a {direction:?} spring")]
    SpringNotAllowed {
        node: usize,
        support: Support,
        direction: Dof,
    },

    #[error("Node {node}: {support:?} support does not admit a prescribed {direction:?} displacement")]
    DisplacementNotAllowed {
        node: usize,
        support: Support,
        direction: Dof,
    },

    #[error("Singular stiffness matrix - structure may be unstable or under-constrained")]
    SingularSystem,

    #[error("Structure has no free degrees of freedom")]
    NoFreeEquations,

    #[error("Structure not analyzed - call run() first")]
    NotAnalyzed,
}

/// Result type for solver operations
pub type FrameResult<T> = Result<T, FrameError>;
