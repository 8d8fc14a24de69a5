use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use session_todos::{api, config::AppConfig};

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 4567;

#[derive(Parser)]
#[command(name = "todos")]
#[command(about = "Session-backed to-do lists served over HTTP")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Address to bind
        #[arg(long, default_value = DEFAULT_HOST)]
        host: String,

        /// Port for HTTP
        #[arg(short, long, default_value_t = DEFAULT_PORT)]
        port: u16,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(std::env::var("RUST_LOG").unwrap_or_else(
        |_| "session_todos=debug,todos_core=debug,tower_http=debug".into(),
    ));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let config = AppConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    let app = api::create_router(api::AppState::in_memory(config));

    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    tracing::info!("Todo server listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    match cli.command {
        Some(Commands::Serve { host, port }) => serve(&host, port).await,
        None => serve(DEFAULT_HOST, DEFAULT_PORT).await,
    }
}
