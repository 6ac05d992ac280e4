//! Mathematical kernels for the stiffness method

use nalgebra::{DMatrix, DVector, SMatrix, SVector};

pub type Mat = DMatrix<f64>;
pub type Vec = DVector<f64>;

/// 6x6 matrix for element stiffness and rotation
pub type Mat6 = SMatrix<f64, 6, 6>;
/// 6-element vector for element loads, displacements and forces
pub type Vec6 = SVector<f64, 6>;

/// Compute the rotation matrix for a 2D frame element
///
/// # Arguments
/// * `lx` - Direction cosine of the chord (dx / length)
/// * `ly` - Direction sine of the chord (dy / length)
///
/// # Returns
/// Block-diagonal 6x6 matrix transforming global displacements
/// {Tx, Ty, Rz at node 1; Tx, Ty, Rz at node 2} into the local frame.
/// The matrix is orthogonal, so its transpose is its inverse.
pub fn rotation_matrix(lx: f64, ly: f64) -> Mat6 {
    #[rustfmt::skip]
    let data = [
         lx,   ly,  0.0,  0.0,  0.0,  0.0,
        -ly,   lx,  0.0,  0.0,  0.0,  0.0,
        0.0,  0.0,  1.0,  0.0,  0.0,  0.0,
        0.0,  0.0,  0.0,   lx,   ly,  0.0,
        0.0,  0.0,  0.0,  -ly,   lx,  0.0,
        0.0,  0.0,  0.0,  0.0,  0.0,  1.0,
    ];

    Mat6::from_row_slice(&data)
}

/// Axial (truss) contribution to the local stiffness matrix
///
/// Acts on the Tx rows/columns only.
pub fn axial_stiffness(e: f64, a: f64, length: f64) -> Mat6 {
    let ea_l = e * a / length;

    #[rustfmt::skip]
    let data = [
         ea_l,  0.0,  0.0,  -ea_l,  0.0,  0.0,
          0.0,  0.0,  0.0,    0.0,  0.0,  0.0,
          0.0,  0.0,  0.0,    0.0,  0.0,  0.0,
        -ea_l,  0.0,  0.0,   ea_l,  0.0,  0.0,
          0.0,  0.0,  0.0,    0.0,  0.0,  0.0,
          0.0,  0.0,  0.0,    0.0,  0.0,  0.0,
    ];

    Mat6::from_row_slice(&data)
}

/// Euler-Bernoulli bending contribution to the local stiffness matrix
///
/// Acts on the Ty/Rz rows/columns only.
pub fn bending_stiffness(e: f64, i: f64, length: f64) -> Mat6 {
    let l = length;
    let l2 = l * l;
    let l3 = l2 * l;

    let ei_l3 = e * i / l3;
    let ei_l2 = e * i / l2;
    let ei_l = e * i / l;

    #[rustfmt::skip]
    let data = [
        0.0,           0.0,         0.0,  0.0,           0.0,         0.0,
        0.0,   12.0*ei_l3,   6.0*ei_l2,  0.0,  -12.0*ei_l3,   6.0*ei_l2,
        0.0,    6.0*ei_l2,    4.0*ei_l,  0.0,   -6.0*ei_l2,    2.0*ei_l,
        0.0,           0.0,         0.0,  0.0,           0.0,         0.0,
        0.0,  -12.0*ei_l3,  -6.0*ei_l2,  0.0,   12.0*ei_l3,  -6.0*ei_l2,
        0.0,    6.0*ei_l2,    2.0*ei_l,  0.0,   -6.0*ei_l2,    4.0*ei_l,
    ];

    Mat6::from_row_slice(&data)
}

/// Local stiffness matrix of a beam-column element: axial plus bending
pub fn local_stiffness(e: f64, a: f64, i: f64, length: f64) -> Mat6 {
    axial_stiffness(e, a, length) + bending_stiffness(e, i, length)
}

/// Solve a linear system using LU decomposition
///
/// Returns `None` when the matrix is singular.
pub fn solve_linear_system(a: &Mat, b: &Vec) -> Option<Vec> {
    a.clone().lu().solve(b)
}
