//! CLI command implementations for bolt.
//!
//! Each module corresponds to a subcommand (`bolt <command>`).

pub mod new;
pub mod open;
