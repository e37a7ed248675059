//! Linear-operator expression nodes.
//!
//! A `LinOp` is an immutable node in a linear expression tree. The formatters
//! only construct constant, multiply, sum, reshape, and transpose nodes;
//! variable nodes are opaque references whose internals belong to the caller
//! and are never inspected beyond their shape.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use nalgebra::DMatrix;
use nalgebra_sparse::CscMatrix;

use super::shape::Shape;

/// Unique identifier for a variable node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VarId(u64);

static NEXT_VAR_ID: AtomicU64 = AtomicU64::new(0);

impl VarId {
    /// Allocate a fresh process-unique id.
    #[allow(clippy::new_without_default)]
    pub fn new() -> Self {
        VarId(NEXT_VAR_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// The raw id value.
    pub fn raw(&self) -> u64 {
        self.0
    }
}

/// A node in a linear-operator expression tree.
///
/// Nodes are never mutated after construction; interior nodes share their
/// children through `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub enum LinOp {
    /// Opaque reference to an optimization variable.
    Variable { id: VarId, shape: Shape },

    /// Dense constant.
    Constant { value: DMatrix<f64> },

    /// Sparse constant (triplet-assembled selector matrices live here).
    SparseConstant { value: CscMatrix<f64>, shape: Shape },

    /// Matrix product of two expressions.
    Mul {
        lhs: Arc<LinOp>,
        rhs: Arc<LinOp>,
        shape: Shape,
    },

    /// Elementwise sum of equal-shaped expressions.
    Sum { terms: Vec<Arc<LinOp>>, shape: Shape },

    /// Column-major reshape, element count preserved.
    Reshape { arg: Arc<LinOp>, shape: Shape },

    /// Transpose of an expression.
    Transpose { arg: Arc<LinOp>, shape: Shape },
}

impl LinOp {
    /// Shape of this expression.
    pub fn shape(&self) -> Shape {
        match self {
            LinOp::Variable { shape, .. }
            | LinOp::SparseConstant { shape, .. }
            | LinOp::Mul { shape, .. }
            | LinOp::Sum { shape, .. }
            | LinOp::Reshape { shape, .. }
            | LinOp::Transpose { shape, .. } => shape.clone(),
            LinOp::Constant { value } => Shape::matrix(value.nrows(), value.ncols()),
        }
    }

    /// The variable id, if this node is a variable reference.
    pub fn variable_id(&self) -> Option<VarId> {
        match self {
            LinOp::Variable { id, .. } => Some(*id),
            _ => None,
        }
    }
}
