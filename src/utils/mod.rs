//! Filesystem helpers.
//!
//! - [`path`]: path normalization (`normalize_path`, `expand_tilde`)
//! - [`fs`]: output writing (`write_output`)

pub mod fs;
pub mod path;
