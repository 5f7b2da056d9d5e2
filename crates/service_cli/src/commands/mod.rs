//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod accrue;
pub mod check;
pub mod table;
