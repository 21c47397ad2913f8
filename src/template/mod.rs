//! Angular template generation from Figma SVG exports.
//!
//! - [`instruction`]: parse `$fill(...)` node ids
//! - [`rewrite`]: turn matching nodes into `[attr.fill]="color(...)"` bindings

mod instruction;
mod rewrite;

pub use instruction::{InstructionParser, Target};
pub use rewrite::rewrite;
