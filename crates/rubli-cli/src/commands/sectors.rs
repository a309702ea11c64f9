use rubli_core::entities::Sector;
use rubli_core::format::{format_compact_mxn, format_optional_risk};
use rubli_state::{Collection, QueryKey};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::SectorCommands;
use crate::commands::shared::fetch::load;
use crate::context::AppContext;
use crate::output::{self, percent};

/// Handle `rubli sectors`.
pub async fn handle(
    action: &SectorCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        SectorCommands::List => {
            let key = QueryKey::new(Collection::Sectors).with("all");
            let sectors = load(ctx, &key, "sectors", || ctx.client.list_sectors()).await?;
            output::output_list(&sectors, flags)
        }
        SectorCommands::Get { id } => {
            let id = *id;
            let key = QueryKey::new(Collection::Sectors).with("detail").with(id.to_string());
            let sector = load(ctx, &key, &format!("sector {id}"), || {
                ctx.client.get_sector(id)
            })
            .await?;
            output::output_summary(sector.as_ref(), &sector_pairs(&sector), flags)
        }
        SectorCommands::Risk { id, year } => {
            let (id, year) = (*id, *year);
            let key = QueryKey::new(Collection::Sectors)
                .with("risk-distribution")
                .with(id.to_string())
                .with(year.map_or_else(String::new, |y| y.to_string()));
            let distribution = load(ctx, &key, &format!("risk distribution of sector {id}"), || {
                ctx.client.sector_risk_distribution(id, year)
            })
            .await?;
            if flags.format == OutputFormat::Table {
                output::output_rows(&distribution.buckets, flags.format)
            } else {
                output::output(distribution.as_ref(), flags.format)
            }
        }
    }
}

fn sector_pairs(sector: &Sector) -> Vec<(&'static str, String)> {
    vec![
        ("id", sector.id.to_string()),
        ("code", sector.code.clone()),
        ("name", sector.name.clone()),
        ("contracts", sector.total_contracts.to_string()),
        ("total value", format_compact_mxn(sector.total_value_mxn)),
        ("avg risk", format_optional_risk(sector.avg_risk_score)),
        ("high-risk contracts", sector.high_risk_count.to_string()),
        ("direct awards", percent(sector.direct_award_pct)),
    ]
}

#[cfg(test)]
mod tests {
    use rubli_core::entities::Sector;

    use super::sector_pairs;

    #[test]
    fn missing_averages_render_as_dashes() {
        let sector = Sector {
            id: 1,
            code: String::from("salud"),
            name: String::from("Salud"),
            total_contracts: 0,
            total_value_mxn: 0.0,
            avg_risk_score: None,
            high_risk_count: 0,
            direct_award_pct: None,
        };
        let pairs = sector_pairs(&sector);
        assert!(pairs.contains(&("avg risk", String::from("-"))));
        assert!(pairs.contains(&("direct awards", String::from("-"))));
        assert!(pairs.contains(&("total value", String::from("$0"))));
    }
}
