use clap::Subcommand;

/// Sector commands.
#[derive(Clone, Debug, Subcommand)]
pub enum SectorCommands {
    /// List all sectors.
    List,
    /// Get one sector.
    Get { id: i64 },
    /// Contracts per risk level within a sector.
    Risk {
        id: i64,
        #[arg(long)]
        year: Option<i32>,
    },
}
