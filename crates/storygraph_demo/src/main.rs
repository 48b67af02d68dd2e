// SPDX-License-Identifier: MIT OR Apache-2.0
//! Story graph demo.
//!
//! Builds a small branching story through the selection controller and logs
//! every change plus the resulting layout columns.
//!
//! Usage: `storygraph_demo [config.ron]`

use std::path::PathBuf;
use storygraph::graphs::StoryPointGraph;
use storygraph::{EngineConfig, GraphEngine, GraphEvent, NodeId, SelectionController};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn main() {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("storygraph=debug,storygraph_demo=info"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting storygraph demo v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(std::env::args_os().nth(1).map(PathBuf::from)) {
        tracing::error!("Demo failed: {e}");
        std::process::exit(1);
    }
}

fn run(config_path: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let config = match config_path {
        Some(path) => EngineConfig::load(&path)?,
        None => EngineConfig::default(),
    };

    let mut points = StoryPointGraph::new();
    let start = points.create_point("Arrive in town");
    let mut controller =
        SelectionController::new(GraphEngine::with_config(start, points, config));

    controller.on_event(Box::new(|event: &GraphEvent<NodeId>| {
        tracing::info!(?event, "Graph changed");
    }));

    let help = controller.add_new_node_to(start)?;
    let rob = controller.add_new_node_to(start)?;
    let leave = controller.add_new_node_to(help)?;
    controller.connect_nodes(rob, leave)?;
    let epilogue = controller.add_new_node_between(leave, help)?;

    let adapter = controller.engine_mut().adapter_mut();
    adapter.rename(help, "Help the smith");
    adapter.rename(rob, "Rob the smith");
    adapter.rename(leave, "Leave town");
    adapter.rename(epilogue, "Smith's thanks");
    adapter.set_fan_in(leave, 2);

    controller.select_nodes_until(leave)?;

    let engine = controller.engine();
    let name = |id: NodeId| {
        engine
            .adapter()
            .point(id)
            .map_or_else(|| id.to_string(), |point| point.name.clone())
    };

    for (column, nodes) in engine.levels().into_iter().enumerate() {
        let names: Vec<String> = nodes.into_iter().map(name).collect();
        tracing::info!(column, ?names, "Layout column");
    }

    let path: Vec<String> = controller.selected_nodes().iter().copied().map(name).collect();
    tracing::info!(?path, "Selected path");

    Ok(())
}
