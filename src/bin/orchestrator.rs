//! Orchestrator server binary.
//!
//! Usage:
//!   orchestrator
//!   orchestrator --port 8000 --bind 0.0.0.0
//!   orchestrator --agent http://localhost:8001 --agent http://localhost:8002
//!
//! # Environment Variables
//!
//! - `ORCHESTRATOR_AGENT_URLS` - comma-separated agent URLs (overridden by
//!   `--agent` flags)
//! - `RUST_LOG` - log filter (default: info)

use std::net::SocketAddr;
use std::sync::Arc;

use a2a_orchestrator::orchestrator::{server, Orchestrator};
use tracing_subscriber::EnvFilter;
use url::Url;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut port: u16 = 8000;
    let mut host = "127.0.0.1".to_string();
    let mut agent_urls: Vec<Url> = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    port = args[i + 1].parse()?;
                    i += 1;
                }
            }
            "--bind" | "-b" => {
                if i + 1 < args.len() {
                    host = args[i + 1].clone();
                    i += 1;
                }
            }
            "--agent" | "-a" => {
                if i + 1 < args.len() {
                    agent_urls.push(args[i + 1].parse()?);
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("A2A Orchestrator");
                println!();
                println!("Usage: orchestrator [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -p, --port <PORT>   Port to listen on (default: 8000)");
                println!("  -b, --bind <ADDR>   Bind address (default: 127.0.0.1)");
                println!("  -a, --agent <URL>   Agent URL to register (repeatable)");
                println!("  -h, --help          Show this help message");
                println!();
                println!("Environment variables:");
                println!("  ORCHESTRATOR_AGENT_URLS  Comma-separated agent URLs");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    if agent_urls.is_empty() {
        agent_urls = match std::env::var("ORCHESTRATOR_AGENT_URLS") {
            Ok(value) => value
                .split(',')
                .map(|s| s.trim().parse())
                .collect::<Result<_, _>>()?,
            Err(_) => vec![
                "http://localhost:8001".parse()?, // research agent
                "http://localhost:8002".parse()?, // video-analysis agent
            ],
        };
    }

    let mut orchestrator = Orchestrator::new(
        "A2A Orchestrator",
        "Orchestrator that delegates tasks to specialized agents",
    );

    // Blocks readiness until every configured agent has been tried once;
    // unreachable agents are skipped, not fatal.
    orchestrator.discover(&agent_urls).await;

    let names = orchestrator.agent_names();
    if names.is_empty() {
        tracing::warn!("No agents registered; every delegation will miss the registry");
    } else {
        tracing::info!(agents = %names.join(", "), "Registered agents");
    }

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    server::serve(Arc::new(orchestrator), addr).await?;

    Ok(())
}
