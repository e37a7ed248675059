//! Composition helpers for linear-operator expressions.
//!
//! Shape compatibility is checked here, at node construction, so a failure
//! carries both offending shapes instead of surfacing later inside a solver
//! backend.

use std::sync::Arc;

use nalgebra::DMatrix;
use nalgebra_sparse::CscMatrix;

use super::lin_op::{LinOp, VarId};
use super::shape::Shape;
use crate::constraints::Constraint;
use crate::error::{ConeError, Result};

/// Create a fresh opaque variable node with the given shape.
pub fn create_var(shape: impl Into<Shape>) -> LinOp {
    LinOp::Variable {
        id: VarId::new(),
        shape: shape.into(),
    }
}

/// Create a dense constant node.
pub fn create_const(value: DMatrix<f64>) -> LinOp {
    LinOp::Constant { value }
}

/// Create a sparse constant node.
pub fn create_sparse_const(value: CscMatrix<f64>, shape: impl Into<Shape>) -> LinOp {
    LinOp::SparseConstant {
        value,
        shape: shape.into(),
    }
}

/// Transpose an expression.
pub fn transpose(arg: &LinOp) -> LinOp {
    LinOp::Transpose {
        shape: arg.shape().transpose(),
        arg: Arc::new(arg.clone()),
    }
}

/// Reshape an expression, preserving column-major element order.
pub fn reshape(arg: &LinOp, shape: impl Into<Shape>) -> Result<LinOp> {
    let shape = shape.into();
    if arg.shape().size() != shape.size() {
        return Err(ConeError::ShapeMismatch {
            expected: format!("{} elements", arg.shape().size()),
            got: format!("{} ({} elements)", shape, shape.size()),
        });
    }
    Ok(LinOp::Reshape {
        arg: Arc::new(arg.clone()),
        shape,
    })
}

/// Multiply two expressions (matrix product).
pub fn mul_expr(lhs: &LinOp, rhs: &LinOp) -> Result<LinOp> {
    let shape = lhs
        .shape()
        .matmul(&rhs.shape())
        .ok_or_else(|| ConeError::ShapeMismatch {
            expected: format!("shape multiplying {} on the right", lhs.shape()),
            got: rhs.shape().to_string(),
        })?;
    Ok(LinOp::Mul {
        lhs: Arc::new(lhs.clone()),
        rhs: Arc::new(rhs.clone()),
        shape,
    })
}

/// Sum a sequence of equal-shaped expressions.
pub fn sum_expr(terms: Vec<LinOp>) -> Result<LinOp> {
    let first = terms.first().ok_or_else(|| {
        ConeError::InvalidConstraint("cannot sum an empty list of expressions".into())
    })?;
    let shape = first.shape();
    for term in &terms[1..] {
        if term.shape() != shape {
            return Err(ConeError::ShapeMismatch {
                expected: shape.to_string(),
                got: term.shape().to_string(),
            });
        }
    }
    Ok(LinOp::Sum {
        terms: terms.into_iter().map(Arc::new).collect(),
        shape,
    })
}

/// Wrap an expression in an `expr >= 0` constraint.
pub fn create_geq(expr: LinOp) -> Constraint {
    Constraint::NonNeg(Arc::new(expr))
}

/// Wrap an expression in an `expr == 0` constraint.
pub fn create_eq(expr: LinOp) -> Constraint {
    Constraint::Zero(Arc::new(expr))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transpose_shape() {
        let x = create_var((3, 2));
        assert_eq!(transpose(&x).shape(), Shape::matrix(2, 3));

        let v = create_var(4);
        assert_eq!(transpose(&v).shape(), Shape::matrix(1, 4));
    }

    #[test]
    fn test_reshape() {
        let x = create_var(6);
        let r = reshape(&x, (2, 3)).unwrap();
        assert_eq!(r.shape(), Shape::matrix(2, 3));
    }

    #[test]
    fn test_reshape_size_mismatch() {
        let x = create_var(6);
        let err = reshape(&x, (2, 2)).unwrap_err();
        assert!(matches!(err, ConeError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_mul_expr() {
        let a = create_var((3, 4));
        let x = create_var(4);
        let prod = mul_expr(&a, &x).unwrap();
        assert_eq!(prod.shape(), Shape::vector(3));
    }

    #[test]
    fn test_mul_expr_inner_mismatch() {
        let a = create_var((3, 4));
        let x = create_var(3);
        let err = mul_expr(&a, &x).unwrap_err();
        assert!(matches!(err, ConeError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_sum_expr() {
        let a = create_var((2, 2));
        let b = create_var((2, 2));
        let s = sum_expr(vec![a, b]).unwrap();
        assert_eq!(s.shape(), Shape::matrix(2, 2));
    }

    #[test]
    fn test_sum_expr_shape_mismatch() {
        let a = create_var((2, 2));
        let b = create_var((3, 2));
        let err = sum_expr(vec![a, b]).unwrap_err();
        assert!(matches!(err, ConeError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_sum_expr_empty() {
        let err = sum_expr(vec![]).unwrap_err();
        assert!(matches!(err, ConeError::InvalidConstraint(_)));
    }

    #[test]
    fn test_create_geq_and_eq() {
        let x = create_var(3);
        let geq = create_geq(x.clone());
        assert_eq!(geq.expr(), &x);
        assert!(matches!(geq, Constraint::NonNeg(_)));

        let eq = create_eq(x.clone());
        assert_eq!(eq.expr(), &x);
        assert!(matches!(eq, Constraint::Zero(_)));
    }
}
