//! Atelier: gateway server and terminal client.

use clap::Parser;
use tracing_subscriber::EnvFilter;

mod cli;
mod terminal;

use cli::{Cli, ClientRequest, Commands, handle_exchange_command, handle_serve_command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let default_filter = match cli.command {
        Commands::Serve { .. } => "info,tower_http=debug",
        _ => "warn",
    };
    init_tracing(default_filter, cli.json_logs);

    let request = match cli.command {
        Commands::Serve { port } => return handle_serve_command(port).await,
        Commands::Chat { prompt } => ClientRequest::Chat(prompt),
        Commands::Image { prompt } => ClientRequest::Image(prompt),
        Commands::Summarise { path } => ClientRequest::Summarise(path),
        Commands::Speak { text } => ClientRequest::Speak(text),
    };

    let settled = handle_exchange_command(&cli.gateway, request).await?;
    if !settled {
        std::process::exit(1);
    }
    Ok(())
}

/// Logs go to stderr so rendered replies own stdout.
fn init_tracing(default_filter: &str, json: bool) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}
