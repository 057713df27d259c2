//! Relaxation (master LP) management.

mod backend;
mod minilp_backend;

pub use backend::{
    LinearConstraint, LinearExpr, Relation, RelaxationBackend, Sense, VarHandle, VarKind,
};
pub use minilp_backend::MinilpBackend;
