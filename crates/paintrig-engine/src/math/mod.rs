//! Transform composition.
//!
//! A [`Transform`] is a running 4x4 model matrix. Every operation
//! right-multiplies it (`M = M * Op`), so the operation written last is the
//! one applied to vertices first.

mod transform;

pub use transform::{Transform, TransformOp};
