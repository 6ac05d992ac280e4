//! frame2d - a native Rust direct stiffness solver
//!
//! Static analysis of 2D frame and truss structures built from straight
//! two-node beam-column elements, supporting:
//! - Combined axial (truss) and Euler-Bernoulli bending behavior
//! - Support classifications, internal hinges, elastic springs and
//!   prescribed support displacements
//! - Free/constrained partitioned solve with element force recovery
//!
//! ## Example
//! ```rust
//! use frame2d::prelude::*;
//!
//! let mut model = FrameModel::new();
//!
//! // A 4 m cantilever, fixed at the left end
//! let n1 = model.add_node(Node::new(0.0, 0.0, Support::Fixed));
//! let n2 = model.add_node(Node::new(4.0, 0.0, Support::Free));
//!
//! let beam = model
//!     .add_element(n1, n2, Material::steel(), Section::rectangle(0.2, 0.3))
//!     .unwrap();
//!
//! // 10 kN/m downward over the full span
//! model.apply_loads(beam, &[Load::uniform(-10e3, 4.0)]).unwrap();
//!
//! let mut analysis = Analysis::new(model);
//! analysis.run().unwrap();
//!
//! let tip = analysis.node_displacement(n2).unwrap();
//! assert!(tip.dy < 0.0);
//! ```

pub mod analysis;
pub mod elements;
pub mod error;
pub mod loads;
pub mod math;
pub mod model;
pub mod results;

// Re-export common types
pub mod prelude {
    pub use crate::analysis::{Analysis, AnalysisOptions};
    pub use crate::elements::{Dof, Element, Material, Node, Section, Support};
    pub use crate::error::{FrameError, FrameResult};
    pub use crate::loads::Load;
    pub use crate::model::FrameModel;
    pub use crate::results::{ElementEndForces, NodeDisplacement, Reactions};
}
