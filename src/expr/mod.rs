//! Linear-operator expression trees.
//!
//! This module provides:
//! - The `LinOp` node type and `Shape` values
//! - Composition helpers (transpose, reshape, multiply, sum, constants)
//! - Concrete evaluation for testing and debugging

pub mod eval;
pub mod lin_op;
pub mod lin_utils;
pub mod shape;

pub use eval::evaluate;
pub use lin_op::{LinOp, VarId};
pub use lin_utils::{
    create_const, create_eq, create_geq, create_sparse_const, create_var, mul_expr, reshape,
    sum_expr, transpose,
};
pub use shape::Shape;
