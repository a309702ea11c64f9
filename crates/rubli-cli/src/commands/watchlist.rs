use rubli_client::watchlist::WatchlistFilters;
use rubli_core::entities::{WatchlistCreate, WatchlistItem, WatchlistUpdate};
use rubli_core::errors::CoreError;
use rubli_state::{Collection, Mutations, QueryKey};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::WatchlistCommands;
use crate::commands::shared::fetch::{load, params_key};
use crate::commands::shared::parse::{parse_enum, parse_opt};
use crate::context::AppContext;
use crate::output;
use crate::progress::with_spinner;

/// Handle `rubli watchlist`.
pub async fn handle(
    action: &WatchlistCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mutations = Mutations::new(&ctx.client, &ctx.cache);
    match action {
        WatchlistCommands::List {
            item_type,
            status,
            priority,
        } => {
            let filters = WatchlistFilters {
                item_type: parse_opt(item_type.as_deref(), "item type")?,
                status: parse_opt(status.as_deref(), "watchlist status")?,
                priority: parse_opt(priority.as_deref(), "priority")?,
            };
            let key = params_key(Collection::Watchlist, "list", &filters);
            let items = load(ctx, &key, "watchlist", || ctx.client.list_watchlist(&filters)).await?;
            output::output_list(&items, flags)
        }
        WatchlistCommands::Stats => {
            let key = QueryKey::new(Collection::Watchlist).with("stats");
            let stats = load(ctx, &key, "watchlist stats", || ctx.client.watchlist_stats()).await?;
            let pairs = vec![
                ("total", stats.total.to_string()),
                ("watching", stats.watching.to_string()),
                ("investigating", stats.investigating.to_string()),
                ("resolved", stats.resolved.to_string()),
                ("high priority", stats.high_priority.to_string()),
            ];
            output::output_summary(stats.as_ref(), &pairs, flags)
        }
        WatchlistCommands::Add {
            item_type,
            id,
            name,
            reason,
            priority,
            notes,
            alert_threshold,
        } => {
            let item = WatchlistCreate {
                item_type: parse_enum(item_type, "item type")?,
                item_id: *id,
                item_name: name.trim().to_string(),
                reason: reason.clone(),
                priority: parse_enum(priority, "priority")?,
                notes: notes.clone(),
                alert_threshold: *alert_threshold,
            };
            item.validate()?;
            let created =
                with_spinner("adding to watchlist", mutations.add_to_watchlist(&item)).await?;
            tracing::info!(id = created.id, item = %created.item_name, "watching");
            print_item(&created, flags)
        }
        WatchlistCommands::Update {
            id,
            status,
            priority,
            notes,
            alert_threshold,
        } => {
            let update = WatchlistUpdate {
                status: parse_opt(status.as_deref(), "watchlist status")?,
                priority: parse_opt(priority.as_deref(), "priority")?,
                notes: notes.clone(),
                alert_threshold: *alert_threshold,
            };
            update.validate()?;
            if let Some(next) = update.status {
                current_item(ctx, *id).await?.check_transition(next)?;
            }
            let updated = with_spinner(
                "updating watchlist item",
                mutations.update_watchlist_item(*id, &update),
            )
            .await?;
            print_item(&updated, flags)
        }
        WatchlistCommands::Remove { id } => {
            let deleted =
                with_spinner("removing from watchlist", mutations.remove_from_watchlist(*id))
                    .await?;
            output::output_deleted("watchlist item", &deleted, flags)
        }
    }
}

/// The watchlist entry with `id`, read through the cached full list.
async fn current_item(ctx: &AppContext, id: i64) -> anyhow::Result<WatchlistItem> {
    let filters = WatchlistFilters::default();
    let key = params_key(Collection::Watchlist, "list", &filters);
    let items = load(ctx, &key, "watchlist", || ctx.client.list_watchlist(&filters)).await?;
    let item = items
        .data
        .iter()
        .find(|item| item.id == id)
        .cloned()
        .ok_or_else(|| CoreError::NotFound {
            entity_type: String::from("watchlist item"),
            id: id.to_string(),
        })?;
    Ok(item)
}

fn print_item(item: &WatchlistItem, flags: &GlobalFlags) -> anyhow::Result<()> {
    output::output_rows(std::slice::from_ref(item), flags.format)
}
