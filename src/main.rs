use std::net::TcpListener;

use actix_web::web;
use anyhow::{Context, Result};
use clap::Parser;
use future_skills::{
    cli::{format_skill, format_skill_details, format_summary, Cli, Commands},
    entities::skill_form::SkillForm,
    graceful_shutdown::shutdown_signal,
    settings::AppConfig,
    store::InMemorySkillStore,
    store_server, AppState,
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() {
    let cli = Cli::parse();
    let serving = matches!(cli.command, Commands::Serve { .. });
    init_logging(cli.verbose, serving);

    if let Err(e) = run(cli).await {
        error!("{:#}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool, serving: bool) {
    let default_filter = match (verbose, serving) {
        (true, _) => "future_skills=debug,info",
        (false, true) => "info",
        (false, false) => "warn",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut config = AppConfig::new().context("Configuration error")?;
    if let Some(base_url) = cli.base_url {
        config.api_base_url = base_url;
    }

    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.host = host;
            }
            if let Some(port) = port {
                config.port = port;
            }
            serve(&config).await
        }
        command => run_client(command, &config).await,
    }
}

async fn run_client(command: Commands, config: &AppConfig) -> Result<()> {
    let state = AppState::new(config)?;
    let handler = &state.skill_handler;

    match command {
        Commands::List => {
            let skills = handler.list_skills().await?;
            if skills.is_empty() {
                println!("No skills yet.");
            }
            for skill in &skills {
                println!("{}", format_skill(skill));
            }
        }
        Commands::Show { id } => {
            let skill = handler.get_skill(&id).await?;
            println!("{}", format_skill_details(&skill));
        }
        Commands::Add(args) => {
            let skill = handler.create_skill(SkillForm::from(args)).await?;
            println!("{}", format_skill(&skill));
        }
        Commands::Edit(args) => {
            let (id, edit) = args.into_edit();
            if edit.is_empty() {
                anyhow::bail!("Nothing to change for skill {}; pass at least one field flag", id);
            }
            let skill = handler.edit_skill(&id, edit).await?;
            println!("{}", format_skill_details(&skill));
        }
        Commands::Delete { id } => {
            handler.delete_skill(&id).await?;
            println!("Deleted skill {}", id);
        }
        Commands::Insights => {
            let summary = handler.summary().await?;
            println!("{}", format_summary(&summary));
        }
        Commands::Serve { .. } => serve(config).await?,
    }

    Ok(())
}

async fn serve(config: &AppConfig) -> Result<()> {
    let server_addr = config.server_addr();
    let listener = TcpListener::bind(&server_addr)
        .with_context(|| format!("Failed to bind {}", server_addr))?;

    info!(
        "Starting {} skill store v{} on http://{}/api",
        config.name,
        env!("CARGO_PKG_VERSION"),
        server_addr
    );

    let store = web::Data::new(InMemorySkillStore::new());
    let server = store_server::run(listener, store, config.worker_count)?;
    let handle = server.handle();

    tokio::select! {
        res = server => res?,
        _ = shutdown_signal() => handle.stop(true).await,
    }

    Ok(())
}
