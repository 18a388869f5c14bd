use dotenvy::dotenv;

mod commands;
mod config {
    pub mod database_config;
    pub mod openai_config;
    pub mod shop_config;
}
mod setup {
    pub mod dependency_injection;
    pub mod food_pairings;
}

use config::database_config;
use setup::dependency_injection::DependencyContainer;

const USAGE: &str = "Usage:
  sommelier advise <catalog.json> <language> <message...>
  sommelier prompts <language>
  sommelier cart list
  sommelier cart add <catalog.json> <wine-id> [quantity]
  sommelier cart remove <wine-id>
  sommelier cart clear
  sommelier cart checkout

Languages: en, fr, nl";

/// CLI entry point.
///
/// Initializes the application, wires dependencies, and dispatches one
/// command against the advisory core.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing with RUST_LOG env filter
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // 2. Load environment variables
    dotenv().ok();

    // 3. Initialize database
    let pool = database_config::init_database().await?;

    // 4. Wire dependencies
    let container = DependencyContainer::new(pool).await?;

    // 5. Dispatch the command
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("advise") => commands::advise(&container, &args[1..]).await,
        Some("prompts") => commands::prompts(&container, &args[1..]).await,
        Some("cart") => commands::cart(&container, &args[1..]).await,
        _ => {
            eprintln!("{}", USAGE);
            Ok(())
        }
    }
}
