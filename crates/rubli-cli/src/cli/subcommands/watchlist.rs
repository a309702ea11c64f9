use clap::Subcommand;

/// Watchlist commands.
#[derive(Clone, Debug, Subcommand)]
pub enum WatchlistCommands {
    /// List watched entities.
    List {
        #[arg(long = "type")]
        item_type: Option<String>,
        /// watching, investigating, resolved
        #[arg(long)]
        status: Option<String>,
        /// high, medium, low
        #[arg(long)]
        priority: Option<String>,
    },
    /// Counts by status and priority.
    Stats,
    /// Start watching an entity.
    Add {
        /// institution, vendor, contract, ...
        #[arg(long = "type")]
        item_type: String,
        #[arg(long)]
        id: i64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        reason: String,
        #[arg(long, default_value = "medium")]
        priority: String,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        alert_threshold: Option<f64>,
    },
    /// Change status, priority, notes, or alert threshold.
    Update {
        id: i64,
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        priority: Option<String>,
        #[arg(long)]
        notes: Option<String>,
        #[arg(long)]
        alert_threshold: Option<f64>,
    },
    /// Stop watching.
    Remove { id: i64 },
}
