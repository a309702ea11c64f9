use clap::Subcommand;

use super::ScopeArgs;

/// Category commands.
#[derive(Clone, Debug, Subcommand)]
pub enum CategoryCommands {
    /// Category-level spending rows.
    List {
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Categories rolled up by sector with contract-weighted risk.
    Sectors {
        #[command(flatten)]
        scope: ScopeArgs,
    },
    /// Sector → category hierarchy.
    Treemap {
        #[command(flatten)]
        scope: ScopeArgs,
    },
}
