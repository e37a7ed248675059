//! Constraint formatting for the solver backend.
//!
//! One call formats one cone group into one stacked inequality; the caller
//! threads the results into its overall constraint list.

pub mod constraint;
pub mod format;

pub use constraint::Constraint;
pub use format::{format_axis, format_elemwise, get_spacing_matrix, Axis};
