//! Cone-constraint formatting for the solver backend.
//!
//! Rewrites axis (second-order) and elementwise cone groups into a single
//! stacked `expression >= 0` inequality whose flattened layout matches the
//! block structure a conic solver consumes. The rewriting is pure index
//! arithmetic: sparse 0/1 selector matrices relocate the entries of each
//! sub-expression, and multiply/sum nodes combine them.

use crate::error::{ConeError, Result};
use crate::expr::lin_utils::{
    create_geq, create_sparse_const, mul_expr, reshape, sum_expr, transpose,
};
use crate::expr::LinOp;
use crate::sparse::csc_from_triplets;

use super::constraint::Constraint;

/// Orientation of the cones within the data matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Each column of the matrix is one cone.
    Columns,
    /// Each row of the matrix is one cone.
    Rows,
}

/// Formats all the row/column cones for the solver.
///
/// `t` is the leader (scalar part) of the second-order constraint and `x` a
/// matrix whose rows or columns each form one cone. The result is a single
/// inequality of shape `(1 + rows, m)` whose column `j` stacks
/// `(t_j; x[:, j])`, with `x` oriented so that cones are columns.
pub fn format_axis(t: &LinOp, x: &LinOp, axis: Axis) -> Result<Vec<Constraint>> {
    // Reduce to norms of columns.
    let x = match axis {
        Axis::Columns => x.clone(),
        Axis::Rows => transpose(x),
    };
    // Cone data is always handled as a matrix; 1-D data is a single cone.
    let x = if x.shape().ndim() == 2 {
        x
    } else {
        reshape(&x, (x.shape().rows(), x.shape().cols()))?
    };
    let x_shape = x.shape();
    let num_cones = x_shape.cols();
    let leader_len = t.shape().size();
    if leader_len != num_cones {
        return Err(ConeError::ShapeMismatch {
            expected: format!("leader with {} entries, one per cone", num_cones),
            got: t.shape().to_string(),
        });
    }

    // Create matrices T, X such that T*t + X*x stacks the leader at row 0 of
    // each output column and the cone data below it.
    let cone_size = 1 + x_shape.rows();
    let mut terms = Vec::with_capacity(2);

    // Leader placement: single 1.0 at row 0.
    let t_mat = csc_from_triplets(cone_size, 1, vec![0], vec![0], vec![1.0]);
    let t_mat = create_sparse_const(t_mat, (cone_size, 1));
    let t_vec = if t.shape().is_scalar() {
        reshape(t, (1, 1))?
    } else {
        reshape(t, (1, leader_len))?
    };
    terms.push(mul_expr(&t_mat, &t_vec)?);

    // Data placement: shifted identity, row j of x lands at row 1 + j.
    let data_rows = x_shape.rows();
    let mut rows = Vec::with_capacity(data_rows);
    let mut cols = Vec::with_capacity(data_rows);
    let mut vals = Vec::with_capacity(data_rows);
    for j in 0..data_rows {
        rows.push(1 + j);
        cols.push(j);
        vals.push(1.0);
    }
    let x_mat = csc_from_triplets(cone_size, data_rows, rows, cols, vals);
    let x_mat = create_sparse_const(x_mat, (cone_size, data_rows));
    terms.push(mul_expr(&x_mat, &x)?);

    Ok(vec![create_geq(sum_expr(terms)?)])
}

/// Formats all the elementwise cones for the solver.
///
/// Builds matrices `A_i` such that `0 <= A_0*x_0 + ... + A_{n-1}*x_n`
/// interleaves the expressions at stride `n`: block `r` of the flattened
/// output holds the `r`-th entry of every expression, in input order. That
/// ordering fixes which slot is which cone argument and must be preserved.
pub fn format_elemwise(exprs: &[LinOp]) -> Result<Vec<Constraint>> {
    let first = exprs.first().ok_or_else(|| {
        ConeError::InvalidConstraint("elementwise cone group needs at least one expression".into())
    })?;
    let shape = first.shape();
    for expr in &exprs[1..] {
        if expr.shape() != shape {
            return Err(ConeError::ShapeMismatch {
                expected: shape.to_string(),
                got: expr.shape().to_string(),
            });
        }
    }

    // Matrix spaces out the entries of each expression.
    let spacing = exprs.len();
    let mat_shape = (spacing * shape.rows(), shape.rows());
    let mut terms = Vec::with_capacity(spacing);
    for (i, expr) in exprs.iter().enumerate() {
        let mat = get_spacing_matrix(mat_shape, spacing, i)?;
        terms.push(mul_expr(&mat, expr)?);
    }
    Ok(vec![create_geq(sum_expr(terms)?)])
}

/// Returns a sparse constant that spaces out an expression.
///
/// The result has exactly one 1.0 per column `c`, at row
/// `spacing * c + offset`: multiplying a length-k vector scatters its
/// entries at stride `spacing` starting from row `offset`.
///
/// The caller is responsible for `shape.0 == spacing * shape.1`; entries
/// falling outside `shape` are dropped by triplet assembly.
pub fn get_spacing_matrix(
    shape: (usize, usize),
    spacing: usize,
    offset: usize,
) -> Result<LinOp> {
    if spacing == 0 || offset >= spacing {
        return Err(ConeError::InvalidSpacing { spacing, offset });
    }
    let (nrows, ncols) = shape;
    let mut rows = Vec::with_capacity(ncols);
    let mut cols = Vec::with_capacity(ncols);
    let mut vals = Vec::with_capacity(ncols);
    // Selects from each column.
    for c in 0..ncols {
        rows.push(spacing * c + offset);
        cols.push(c);
        vals.push(1.0);
    }
    let mat = csc_from_triplets(nrows, ncols, rows, cols, vals);
    Ok(create_sparse_const(mat, (nrows, ncols)))
}
