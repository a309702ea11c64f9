use clap::Subcommand;

/// Dossier commands.
#[derive(Clone, Debug, Subcommand)]
pub enum DossierCommands {
    /// List dossiers.
    List {
        /// active, archived, closed
        #[arg(long)]
        status: Option<String>,
    },
    /// Get a dossier.
    Get { id: i64 },
    /// Create a dossier.
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Rename, describe, or change status.
    Update {
        id: i64,
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        status: Option<String>,
    },
    /// Delete a dossier.
    Delete { id: i64 },
    /// Items collected in a dossier.
    Items { id: i64 },
    /// Add an entity to a dossier.
    AddItem {
        id: i64,
        #[arg(long = "type")]
        item_type: String,
        #[arg(long)]
        item_id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        annotation: Option<String>,
        #[arg(long)]
        color: Option<String>,
    },
    /// Remove an item from a dossier.
    RemoveItem { id: i64, item_id: i64 },
}
