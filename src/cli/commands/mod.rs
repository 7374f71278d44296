//! Subcommands of the `ttt` binary

pub mod analyze;
pub mod play;
pub mod simulate;
pub mod solve;
