use std::sync::Arc;

use rubli_core::enums::EntityType;
use rubli_core::format::{format_compact_mxn, format_optional_risk};
use rubli_core::responses::MoneyFlowResponse;
use rubli_views::{FlowSide, SankeyData, build_sankey, flow_kpis, sector_rollup, top_flows};
use serde::Serialize;

use crate::cli::subcommands::{FlowCommands, FlowSideArg, ScopeArgs};
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::fetch::{load, params_key};
use crate::commands::shared::limit::top_n;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output;

/// Handle `rubli flows`.
pub async fn handle(
    action: &FlowCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        FlowCommands::Top {
            side,
            entity,
            scope,
        } => {
            let entity_type: EntityType = parse_enum(entity, "entity type")?;
            let flows = load_flows(ctx, scope).await?;
            let bars = top_flows(
                &flows.flows,
                flow_side(*side),
                entity_type,
                top_n(flags.limit, ctx.config.general.top_n),
                ctx.config.general.label_width,
            );
            output::output_rows(&bars, flags.format)
        }
        FlowCommands::Sectors { scope } => {
            let flows = load_flows(ctx, scope).await?;
            output::output_rows(&sector_rollup(&flows.flows), flags.format)
        }
        FlowCommands::Kpi { scope } => {
            let flows = load_flows(ctx, scope).await?;
            let kpis = flow_kpis(&flows.flows);
            let pairs = vec![
                ("flows", kpis.edge_count.to_string()),
                ("total value", format_compact_mxn(kpis.total_value)),
                ("contracts", kpis.total_contracts.to_string()),
                ("high-risk value", format_compact_mxn(kpis.risk_weighted_value)),
                ("high-risk share", format!("{:.1}%", kpis.high_risk_share * 100.0)),
            ];
            output::output_summary(&kpis, &pairs, flags)
        }
        FlowCommands::Sankey { scope } => {
            let flows = load_flows(ctx, scope).await?;
            let sankey = build_sankey(&flows.flows);
            if flags.format == OutputFormat::Table {
                output::output(&sankey_rows(&sankey), flags.format)
            } else {
                output::output(&sankey, flags.format)
            }
        }
    }
}

const fn flow_side(arg: FlowSideArg) -> FlowSide {
    match arg {
        FlowSideArg::Source => FlowSide::Source,
        FlowSideArg::Target => FlowSide::Target,
    }
}

async fn load_flows(ctx: &AppContext, scope: &ScopeArgs) -> anyhow::Result<Arc<MoneyFlowResponse>> {
    let params = scope.money_flow(None);
    let key = params_key(rubli_state::Collection::Analysis, "money-flow", &params);
    load(ctx, &key, "money flows", || ctx.client.money_flow(&params)).await
}

#[derive(Debug, Serialize)]
struct SankeyRow<'a> {
    source: &'a str,
    target: &'a str,
    value: String,
    contracts: u64,
    risk: String,
}

/// Sankey links with node positions resolved to names, for table display.
fn sankey_rows(data: &SankeyData) -> Vec<SankeyRow<'_>> {
    let name = |index: usize| data.nodes.get(index).map_or("?", |node| node.name.as_str());
    data.links
        .iter()
        .map(|link| SankeyRow {
            source: name(link.source),
            target: name(link.target),
            value: format_compact_mxn(link.value),
            contracts: link.contract_count,
            risk: format_optional_risk(link.avg_risk),
        })
        .collect()
}
