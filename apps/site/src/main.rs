use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use clap::{Parser, Subcommand};
use client_core::{ApiClient, FetchOrchestrator};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;
mod routes;

use config::{load_settings, Settings};
use routes::{build_router, render_snapshot, AppState};

#[derive(Parser, Debug)]
#[command(name = "site", about = "Heritage x Hustle directory page")]
struct Args {
    /// Address to listen on; overrides site.toml and the environment.
    #[arg(long, global = true)]
    bind: Option<String>,
    /// Backend API base URL; overrides site.toml and the environment.
    #[arg(long, global = true)]
    backend_url: Option<String>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy)]
enum Command {
    /// Serve the page (default).
    Serve,
    /// Load every collection once and print the page to stdout.
    Render,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut settings = load_settings();
    if let Some(bind) = args.bind {
        settings.bind_addr = bind;
    }
    if let Some(backend_url) = args.backend_url {
        settings.backend_url = Some(backend_url);
    }

    let backend_url = settings.resolved_backend_url();
    info!(%backend_url, "using backend api");
    let orchestrator = Arc::new(FetchOrchestrator::new(Arc::new(ApiClient::new(
        backend_url,
    ))));

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(&settings, orchestrator).await,
        Command::Render => {
            orchestrator.mount().await;
            let snapshot = orchestrator.snapshot().await;
            println!("{}", render_snapshot(&snapshot).into_string());
            Ok(())
        }
    }
}

async fn serve(settings: &Settings, orchestrator: Arc<FetchOrchestrator>) -> anyhow::Result<()> {
    let addr: SocketAddr = settings
        .bind_addr
        .parse()
        .with_context(|| format!("invalid bind address '{}'", settings.bind_addr))?;

    tokio::spawn({
        let orchestrator = orchestrator.clone();
        async move {
            let report = orchestrator.mount().await;
            info!(
                professionals = report.professionals.is_committed(),
                events = report.events.is_committed(),
                posts = report.posts.is_committed(),
                "initial load finished"
            );
        }
    });

    let app = build_router(Arc::new(AppState { orchestrator }));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!(%addr, "site listening");
    axum::serve(listener, app).await?;
    Ok(())
}
