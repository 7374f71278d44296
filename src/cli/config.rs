//! Shared configuration types for CLI commands

use clap::Args;
use serde::{Deserialize, Serialize};

/// Common configuration shared across commands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommonConfig {
    /// Whether to show progress bars and spinners
    pub progress: bool,

    /// Print search statistics alongside results
    pub verbose: bool,
}

impl Default for CommonConfig {
    fn default() -> Self {
        Self {
            progress: true,
            verbose: false,
        }
    }
}

/// Flags accepted by every subcommand
#[derive(Args, Debug, Clone, Default)]
pub struct GlobalArgs {
    /// Hide progress bars
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Print search statistics
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

impl GlobalArgs {
    pub fn config(&self) -> CommonConfig {
        CommonConfig {
            progress: !self.quiet,
            verbose: self.verbose,
        }
    }
}
