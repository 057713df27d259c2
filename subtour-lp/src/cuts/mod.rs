//! Subtour elimination constraints.
//!
//! - Synthesis of cut-set constraints from vertex bipartitions
//! - Monotone constraint pool with partition deduplication

mod pool;
pub mod synth;

pub use pool::{CutPool, CutPoolSettings, CutPoolStats, PooledCut};
pub use synth::{synthesize, synthesize_cut, SubtourConstraint};
