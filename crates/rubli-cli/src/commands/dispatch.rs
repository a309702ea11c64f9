use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(command: Commands, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Stats { action } => commands::stats::handle(&action, ctx, flags).await,
        Commands::Contracts { action } => commands::contracts::handle(&action, ctx, flags).await,
        Commands::Vendors { action } => commands::vendors::handle(&action, ctx, flags).await,
        Commands::Institutions { action } => {
            commands::institutions::handle(&action, ctx, flags).await
        }
        Commands::Sectors { action } => commands::sectors::handle(&action, ctx, flags).await,
        Commands::Flows { action } => commands::flows::handle(&action, ctx, flags).await,
        Commands::Categories { action } => commands::categories::handle(&action, ctx, flags).await,
        Commands::Network(args) => commands::network::handle(&args, ctx, flags).await,
        Commands::Hypotheses { action } => commands::hypotheses::handle(&action, ctx, flags).await,
        Commands::Cases { action } => commands::cases::handle(&action, ctx, flags).await,
        Commands::Watchlist { action } => commands::watchlist::handle(&action, ctx, flags).await,
        Commands::Dossiers { action } => commands::dossiers::handle(&action, ctx, flags).await,
        Commands::Feedback(args) => commands::feedback::handle(&args, ctx, flags).await,
    }
}
