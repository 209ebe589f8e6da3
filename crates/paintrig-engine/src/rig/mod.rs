//! Articulated figures built from rigid cube parts.
//!
//! A [`Rig`] is a tree of named [`BodyPart`]s. Each part carries:
//! - `pose` ops: composed onto a copy of the parent's joint frame and
//!   inherited by the part's children
//! - `shape` ops: applied on top of the part's own frame only (size and
//!   offset of the visible cube)
//!
//! Parents are always added before their children, so a single pass in
//! insertion order resolves the whole tree top-down.

mod part;
mod quadruped;

pub use part::{BodyPart, Hinge, Joint, PartId, PartOp, ResolvedPart, Rig};
