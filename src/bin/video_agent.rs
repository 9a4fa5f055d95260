//! Video-analysis agent adapter binary.
//!
//! Serves the video-analysis adapter on port 8002 (by default), wrapping an
//! external analysis agent process configured via `--command`/`VIDEO_AGENT_CMD`.
//!
//! Usage:
//!   video-agent --command my-video-cli
//!   video-agent --port 8002 --command my-video-cli --arg --transcripts

use std::net::SocketAddr;

use a2a_orchestrator::{
    adapter::{self, video::VideoAnalysisAdapter},
    subagent::CommandAgent,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args: Vec<String> = std::env::args().collect();
    let mut port: u16 = 8002;
    let mut host = "127.0.0.1".to_string();
    let mut command: Option<String> = None;
    let mut command_args: Vec<String> = Vec::new();

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
            "--command" | "-c" => {
                if i + 1 < args.len() {
                    command = Some(args[i + 1].clone());
                    i += 1;
                }
            }
            "--arg" => {
                if i + 1 < args.len() {
                    command_args.push(args[i + 1].clone());
                    i += 1;
                }
            }
            "--help" | "-h" => {
                println!("Video Analysis Agent Adapter");
                println!();
                println!("Usage: video-agent [OPTIONS]");
                println!();
                println!("Options:");
                println!("  -p, --port <PORT>       Port to listen on (default: 8002)");
                println!("  -b, --bind <ADDR>       Bind address (default: 127.0.0.1)");
                println!("  -c, --command <PROG>    Analysis agent program (env: VIDEO_AGENT_CMD)");
                println!("      --arg <ARG>         Argument for the agent program (repeatable)");
                println!("  -h, --help              Show this help message");
                return Ok(());
            }
            _ => {}
        }
        i += 1;
    }

    let command = command
        .or_else(|| std::env::var("VIDEO_AGENT_CMD").ok())
        .ok_or_else(|| anyhow::anyhow!("no agent command configured (--command or VIDEO_AGENT_CMD)"))?;

    let base_url = format!("http://{}:{}/", host, port);
    let adapter = VideoAnalysisAdapter::new(CommandAgent::new(command, command_args), base_url);

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    adapter::serve(adapter, addr).await?;

    Ok(())
}
