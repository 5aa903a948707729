//! CLI command implementations

use std::io::Read;
use std::path::Path;

use jsonflow_core::{build_flow_with_config, parse_json, resolve_with_tier, FlowConfig, Resolution};
use jsonflow_server::{JsonFlowServer, ServerConfig};

pub fn load_config(path: Option<&Path>) -> anyhow::Result<FlowConfig> {
    let cwd = std::env::current_dir()?;
    Ok(FlowConfig::discover(path, &cwd)?)
}

/// Read a document from `file`, or stdin for `None` / `-`.
fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => {
            tracing::debug!("Reading {}", path.display());
            Ok(std::fs::read_to_string(path)?)
        }
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

pub fn build(file: Option<&Path>, pretty: bool, config: &FlowConfig) -> anyhow::Result<()> {
    let value = parse_json(&read_input(file)?)?;
    let flow = build_flow_with_config(&value, &config.layout);
    tracing::info!("Built {} nodes, {} edges", flow.nodes.len(), flow.edges.len());

    let out = if pretty {
        serde_json::to_string_pretty(&flow)?
    } else {
        serde_json::to_string(&flow)?
    };
    println!("{out}");
    Ok(())
}

pub fn find(file: Option<&Path>, query: &str, config: &FlowConfig) -> anyhow::Result<()> {
    let value = parse_json(&read_input(file)?)?;
    let flow = build_flow_with_config(&value, &config.layout);

    let resolution = resolve_with_tier(query, &flow.node_ids());
    if let Some(r) = &resolution {
        tracing::debug!("Matched by {:?}", r.tier);
    }
    println!("{}", Resolution::status(resolution.as_ref()));
    Ok(())
}

pub async fn serve(config: FlowConfig, host: Option<String>, port: Option<u16>) -> anyhow::Result<()> {
    let server_config = ServerConfig {
        host: host.unwrap_or(config.server.host),
        port: port.unwrap_or(config.server.port),
    };
    let server = JsonFlowServer::new(server_config, config.layout);
    tracing::info!("Starting jsonflow server on {}", server.address());

    server.start().await
}
