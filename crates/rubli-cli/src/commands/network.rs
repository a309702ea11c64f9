use rubli_client::network::NetworkParams;
use rubli_state::Collection;
use rubli_views::{NetworkFilter, filter_network};

use crate::cli::root_commands::NetworkArgs;
use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::fetch::{load, params_key};
use crate::context::AppContext;
use crate::output;

/// Handle `rubli network`.
pub async fn handle(args: &NetworkArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let params = network_params(args, flags.limit);
    let key = params_key(Collection::Network, "graph", &params);
    let graph = load(ctx, &key, "network graph", || ctx.client.network_graph(&params)).await?;

    let filter = network_filter(args);
    let visible = filter_network(&graph, filter);
    tracing::debug!(
        nodes = graph.nodes.len(),
        visible_nodes = visible.nodes.len(),
        links = graph.links.len(),
        visible_links = visible.links.len(),
        "network filtered"
    );

    if flags.format != OutputFormat::Table {
        return output::output(&visible, flags.format);
    }
    if args.links {
        output::output_rows(&visible.links, flags.format)?;
    } else {
        output::output_rows(&visible.nodes, flags.format)?;
    }
    output::note(
        &format!(
            "{} of {} nodes, {} of {} links",
            visible.nodes.len(),
            graph.total_nodes.max(graph.nodes.len() as u64),
            visible.links.len(),
            graph.total_links.max(graph.links.len() as u64),
        ),
        flags.format,
        flags.quiet,
    );
    Ok(())
}

const fn network_params(args: &NetworkArgs, limit: Option<u32>) -> NetworkParams {
    NetworkParams {
        year: args.scope.year,
        sector_id: args.scope.sector,
        vendor_id: args.vendor,
        institution_id: args.institution,
        min_value: args.min_value,
        limit,
        depth: args.depth,
    }
}

const fn network_filter(args: &NetworkArgs) -> NetworkFilter {
    NetworkFilter {
        show_vendors: !args.hide_vendors,
        show_institutions: !args.hide_institutions,
        high_risk_only: args.high_risk,
    }
}
