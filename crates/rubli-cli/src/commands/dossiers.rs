use rubli_core::entities::{Dossier, DossierCreate, DossierItemCreate, DossierUpdate};
use rubli_core::enums::DossierStatus;
use rubli_state::{Collection, Mutations, QueryKey};

use crate::cli::GlobalFlags;
use crate::cli::subcommands::DossierCommands;
use crate::commands::shared::fetch::load;
use crate::commands::shared::parse::{parse_enum, parse_opt};
use crate::context::AppContext;
use crate::output;
use crate::progress::with_spinner;

/// Handle `rubli dossiers`.
pub async fn handle(
    action: &DossierCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mutations = Mutations::new(&ctx.client, &ctx.cache);
    match action {
        DossierCommands::List { status } => {
            let status: Option<DossierStatus> = parse_opt(status.as_deref(), "dossier status")?;
            let key = QueryKey::new(Collection::Dossiers)
                .with("list")
                .with(status.map_or("all", DossierStatus::as_str));
            let dossiers = load(ctx, &key, "dossiers", || ctx.client.list_dossiers(status)).await?;
            output::output_list(&dossiers, flags)
        }
        DossierCommands::Get { id } => {
            let id = *id;
            let key = QueryKey::new(Collection::Dossiers).with("detail").with(id.to_string());
            let dossier = load(ctx, &key, &format!("dossier {id}"), || {
                ctx.client.get_dossier(id)
            })
            .await?;
            print_dossier(&dossier, flags)
        }
        DossierCommands::Items { id } => {
            let id = *id;
            let key = QueryKey::new(Collection::Dossiers).with("items").with(id.to_string());
            let items = load(ctx, &key, &format!("items of dossier {id}"), || {
                ctx.client.dossier_items(id)
            })
            .await?;
            output::output_list(&items, flags)
        }
        DossierCommands::Create { name, description } => {
            let name = name.trim();
            anyhow::ensure!(!name.is_empty(), "a dossier needs a name");
            let dossier = DossierCreate {
                name: name.to_string(),
                description: description.clone(),
            };
            let created = with_spinner("creating dossier", mutations.create_dossier(&dossier)).await?;
            tracing::info!(id = created.id, name = %created.name, "dossier created");
            print_dossier(&created, flags)
        }
        DossierCommands::Update {
            id,
            name,
            description,
            status,
        } => {
            let update = DossierUpdate {
                name: name.clone(),
                description: description.clone(),
                status: parse_opt(status.as_deref(), "dossier status")?,
            };
            anyhow::ensure!(
                update != DossierUpdate::default(),
                "nothing to update: pass --name, --description, or --status"
            );
            let updated =
                with_spinner("updating dossier", mutations.update_dossier(*id, &update)).await?;
            print_dossier(&updated, flags)
        }
        DossierCommands::Delete { id } => {
            let deleted = with_spinner("deleting dossier", mutations.delete_dossier(*id)).await?;
            output::output_deleted("dossier", &deleted, flags)
        }
        DossierCommands::AddItem {
            id,
            item_type,
            item_id,
            name,
            annotation,
            color,
        } => {
            let item = DossierItemCreate {
                item_type: parse_enum(item_type, "item type")?,
                item_id: *item_id,
                item_name: name.clone(),
                annotation: annotation.clone(),
                color: color.clone(),
            };
            let added =
                with_spinner("adding to dossier", mutations.add_dossier_item(*id, &item)).await?;
            output::output_rows(std::slice::from_ref(&added), flags.format)
        }
        DossierCommands::RemoveItem { id, item_id } => {
            let deleted = with_spinner(
                "removing from dossier",
                mutations.remove_dossier_item(*id, *item_id),
            )
            .await?;
            output::output_deleted("dossier item", &deleted, flags)
        }
    }
}

fn print_dossier(dossier: &Dossier, flags: &GlobalFlags) -> anyhow::Result<()> {
    output::output_rows(std::slice::from_ref(dossier), flags.format)
}
