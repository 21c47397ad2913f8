//! Command-line interface module.

mod args;
pub mod component;

pub use args::{Cli, Commands, ComponentArgs};
