//! # coneform
//!
//! Canonicalization of cone constraints into solver-ready linear
//! inequalities.
//!
//! High-level cone constraints — second-order cones over the rows or columns
//! of a matrix, and elementwise N-ary cones over a group of aligned
//! expressions — are rewritten into a single stacked `expression >= 0`
//! inequality whose flattened layout matches the block structure a conic
//! solver backend consumes. The rewriting is exact index arithmetic: sparse
//! 0/1 selector matrices relocate the entries of each sub-expression, and
//! linear multiply/sum nodes combine them.
//!
//! ## Quick start
//!
//! ```
//! use coneform::prelude::*;
//!
//! // One second-order cone per column: t_j >= ||X[:, j]||.
//! let t = create_var(2);
//! let x = create_var((3, 2));
//! let constraints = format_axis(&t, &x, Axis::Columns)?;
//!
//! // A single inequality of shape (4, 2): column j stacks (t_j; X[:, j]).
//! assert_eq!(constraints.len(), 1);
//! assert_eq!(constraints[0].shape(), Shape::matrix(4, 2));
//! # Ok::<(), coneform::error::ConeError>(())
//! ```
//!
//! ## Scope
//!
//! This crate only produces the linear-inequality encoding for one
//! constraint group at a time. Solving, convexity checking, and the
//! surrounding problem bookkeeping belong to the caller; the cone-type tag
//! that tells the solver how to interpret each stacked column is the
//! caller's to attach. All operations are pure: each call reads its inputs,
//! allocates fresh output, and retains nothing.

pub mod constraints;
pub mod error;
pub mod expr;
pub mod sparse;

/// Prelude module for convenient imports.
///
/// ```ignore
/// use coneform::prelude::*;
/// ```
pub mod prelude {
    pub use crate::constraints::{
        format_axis, format_elemwise, get_spacing_matrix, Axis, Constraint,
    };
    pub use crate::error::{ConeError, Result};
    pub use crate::expr::{
        create_const, create_eq, create_geq, create_sparse_const, create_var, evaluate, mul_expr,
        reshape, sum_expr, transpose, LinOp, Shape, VarId,
    };
}
