use std::sync::Arc;

use rubli_core::entities::CategoryStat;
use rubli_core::responses::ListResponse;
use rubli_state::Collection;
use rubli_core::format::{format_compact_mxn, format_optional_risk};
use rubli_views::{TreemapNode, build_treemap, sectors_from_categories};
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::{CategoryCommands, ScopeArgs};
use crate::commands::shared::fetch::{load, params_key};
use crate::context::AppContext;
use crate::output;

/// Handle `rubli categories`.
pub async fn handle(
    action: &CategoryCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CategoryCommands::List { scope } => {
            let categories = load_categories(ctx, scope).await?;
            output::output_list(&categories, flags)
        }
        CategoryCommands::Sectors { scope } => {
            let categories = load_categories(ctx, scope).await?;
            output::output_rows(&sectors_from_categories(&categories.data), flags.format)
        }
        CategoryCommands::Treemap { scope } => {
            let categories = load_categories(ctx, scope).await?;
            let tree = build_treemap(&categories.data);
            if flags.format == OutputFormat::Table {
                output::output(&treemap_rows(&tree), flags.format)
            } else {
                output::output(&tree, flags.format)
            }
        }
    }
}

async fn load_categories(
    ctx: &AppContext,
    scope: &ScopeArgs,
) -> anyhow::Result<Arc<ListResponse<CategoryStat>>> {
    let scope = scope.analysis();
    let key = params_key(Collection::Categories, "summary", &scope);
    load(ctx, &key, "category summary", || ctx.client.category_summary(&scope)).await
}

#[derive(Debug, Serialize)]
struct TreemapRow<'a> {
    sector: &'a str,
    category: &'a str,
    value: String,
    risk: String,
}

/// One row per leaf, prefixed by its sector.
fn treemap_rows(root: &TreemapNode) -> Vec<TreemapRow<'_>> {
    root.children
        .iter()
        .flat_map(|sector| {
            sector.children.iter().map(move |category| TreemapRow {
                sector: &sector.name,
                category: &category.name,
                value: format_compact_mxn(category.value),
                risk: format_optional_risk(category.avg_risk),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use rubli_views::TreemapNode;

    use super::treemap_rows;

    fn leaf(name: &str, value: f64) -> TreemapNode {
        TreemapNode {
            name: name.to_string(),
            value,
            avg_risk: Some(0.2),
            children: Vec::new(),
        }
    }

    #[test]
    fn treemap_rows_flatten_sector_children() {
        let root = TreemapNode {
            name: String::from("all"),
            value: 3.0e6,
            avg_risk: None,
            children: vec![TreemapNode {
                name: String::from("salud"),
                value: 3.0e6,
                avg_risk: Some(0.2),
                children: vec![leaf("medicamentos", 2.0e6), leaf("equipo", 1.0e6)],
            }],
        };
        let rows = treemap_rows(&root);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].sector, "salud");
        assert_eq!(rows[1].category, "equipo");
        assert_eq!(rows[0].value, "$2.0M");
    }
}
