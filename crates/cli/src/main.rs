use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use persona_chat_core::env_string_with_default;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "persona-chat")]
#[command(about = "Persona-driven chat backend for AI role profiles", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP API server.
    Serve {
        #[arg(short, long, default_value = "3000")]
        port: u16,
        #[arg(short = 'H', long, default_value = "127.0.0.1")]
        host: String,
    },
    /// Import a flat trait file into the store.
    ImportTraits {
        /// Path to the trait file.
        #[arg(short, long)]
        file: PathBuf,
        /// Persona the traits belong to.
        #[arg(short, long, default_value = "1")]
        persona: String,
        /// Parse the legacy dashed-block format instead of the
        /// sectioned format.
        #[arg(long)]
        legacy: bool,
    },
    /// Print the stored traits as JSON.
    ExportTraits,
    /// Send one message through the webhook gateway.
    Chat {
        message: String,
        /// Persona to address.
        #[arg(short, long, default_value = "1")]
        persona: String,
        /// Persist the exchange to history for this user id.
        #[arg(short, long)]
        user: Option<String>,
        /// Start a new conversation before sending.
        #[arg(long)]
        new_session: bool,
    },
}

/// Runtime configuration, assembled from the environment once at startup
/// and injected into every component. Nothing below this layer reads env
/// vars or hardcodes endpoints.
pub(crate) struct Config {
    pub database_url: String,
    pub webhook_url: String,
    pub auth_secret: String,
    pub cors_origin: String,
}

const DEFAULT_WEBHOOK_URL: &str =
    "https://n8n-excollo.azurewebsites.net/webhook/e17df12a-2bfc-4270-8756-0c20442a4b9f";
const DEFAULT_AUTH_SECRET: &str = "your_jwt_secret";

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        let database_url = std::env::var("PERSONA_CHAT_DATABASE_URL")
            .or_else(|_| std::env::var("DATABASE_URL"))
            .map_err(|_| {
                anyhow::anyhow!(
                    "PERSONA_CHAT_DATABASE_URL or DATABASE_URL environment variable must be set"
                )
            })?;
        let auth_secret = env_string_with_default("PERSONA_CHAT_AUTH_SECRET", DEFAULT_AUTH_SECRET);
        if auth_secret == DEFAULT_AUTH_SECRET {
            tracing::warn!("PERSONA_CHAT_AUTH_SECRET not set, using the insecure default");
        }
        Ok(Self {
            database_url,
            webhook_url: env_string_with_default("PERSONA_CHAT_WEBHOOK_URL", DEFAULT_WEBHOOK_URL),
            auth_secret,
            cors_origin: env_string_with_default(
                "PERSONA_CHAT_CORS_ORIGIN",
                "http://localhost:5173",
            ),
        })
    }
}

/// Where the chat command keeps its session ticket between runs.
pub(crate) fn session_ticket_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("persona-chat")
        .join("session_id")
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Serve { port, host } => commands::serve::run(port, host).await,
        Commands::ImportTraits { file, persona, legacy } => {
            commands::import_traits::run(&file, &persona, legacy).await
        },
        Commands::ExportTraits => commands::export_traits::run().await,
        Commands::Chat { message, persona, user, new_session } => {
            commands::chat::run(&message, &persona, user.as_deref(), new_session).await
        },
    }
}
