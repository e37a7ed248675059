//! Concrete evaluation of linear-operator trees.
//!
//! Evaluation is a debugging and testing aid for the surrounding
//! canonicalization pass: given concrete values for every variable node, it
//! folds a tree down to one dense matrix. Scalars evaluate to 1x1 matrices
//! and vectors to n x 1 matrices; reshape follows column-major element
//! order, matching nalgebra storage.

use std::collections::HashMap;

use nalgebra::DMatrix;

use super::lin_op::{LinOp, VarId};
use crate::error::{ConeError, Result};
use crate::sparse::csc_to_dense;

/// Evaluate an expression tree against concrete variable values.
pub fn evaluate(op: &LinOp, env: &HashMap<VarId, DMatrix<f64>>) -> Result<DMatrix<f64>> {
    match op {
        LinOp::Variable { id, .. } => env
            .get(id)
            .cloned()
            .ok_or(ConeError::UnboundVariable(id.raw())),
        LinOp::Constant { value } => Ok(value.clone()),
        LinOp::SparseConstant { value, .. } => Ok(csc_to_dense(value)),
        LinOp::Mul { lhs, rhs, .. } => {
            let l = evaluate(lhs, env)?;
            let r = evaluate(rhs, env)?;
            if l.ncols() != r.nrows() {
                return Err(ConeError::ShapeMismatch {
                    expected: format!("({}, _)", l.ncols()),
                    got: format!("({}, {})", r.nrows(), r.ncols()),
                });
            }
            Ok(&l * &r)
        }
        LinOp::Sum { terms, .. } => {
            let mut acc: Option<DMatrix<f64>> = None;
            for term in terms {
                let value = evaluate(term, env)?;
                acc = Some(match acc {
                    None => value,
                    Some(a) => {
                        if a.shape() != value.shape() {
                            return Err(ConeError::ShapeMismatch {
                                expected: format!("({}, {})", a.nrows(), a.ncols()),
                                got: format!("({}, {})", value.nrows(), value.ncols()),
                            });
                        }
                        a + value
                    }
                });
            }
            acc.ok_or_else(|| ConeError::InvalidConstraint("cannot evaluate an empty sum".into()))
        }
        LinOp::Reshape { arg, shape } => {
            let value = evaluate(arg, env)?;
            if value.len() != shape.size() {
                return Err(ConeError::ShapeMismatch {
                    expected: format!("{} elements", shape.size()),
                    got: format!("{} elements", value.len()),
                });
            }
            Ok(DMatrix::from_column_slice(
                shape.rows(),
                shape.cols(),
                value.as_slice(),
            ))
        }
        LinOp::Transpose { arg, .. } => Ok(evaluate(arg, env)?.transpose()),
    }
}
