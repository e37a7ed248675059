//! Canonical constraint values produced by the formatters.
//!
//! Constraints map to cone constraints in the solver:
//! - NonNeg: expr >= 0 (nonnegative orthant)
//! - Zero: expr == 0 (zero cone)
//!
//! A formatted cone group is always one inequality over one combined
//! expression; the cone-type tag and the actual norm/exponential inequality
//! are the solver backend's concern given the stacked layout.

use std::sync::Arc;

use crate::expr::{LinOp, Shape};

/// A linear constraint over one combined expression.
#[derive(Debug, Clone, PartialEq)]
pub enum Constraint {
    /// Inequality constraint: expr >= 0.
    NonNeg(Arc<LinOp>),

    /// Equality constraint: expr == 0.
    Zero(Arc<LinOp>),
}

impl Constraint {
    /// The wrapped expression.
    pub fn expr(&self) -> &LinOp {
        match self {
            Constraint::NonNeg(e) | Constraint::Zero(e) => e.as_ref(),
        }
    }

    /// Shape of the wrapped expression.
    pub fn shape(&self) -> Shape {
        self.expr().shape()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::create_var;

    #[test]
    fn test_expr_accessor() {
        let x = create_var(3);
        let c = Constraint::NonNeg(Arc::new(x.clone()));
        assert_eq!(c.expr(), &x);
        assert_eq!(c.shape(), Shape::vector(3));
    }

    #[test]
    fn test_structural_equality() {
        let x = create_var((2, 2));
        let a = Constraint::Zero(Arc::new(x.clone()));
        let b = Constraint::Zero(Arc::new(x));
        assert_eq!(a, b);
    }
}
