mod logger;

use anyhow::Context;
use clap::{Parser, Subcommand};
use hero_core::{Hero, HeroId, HeroService, HeroServiceConfig, MessageService, NewHero};

/// Run one operation against a heroes backend, then print the result and the
/// message log.
#[derive(Debug, Parser)]
#[command(name = "heroes", version)]
struct Cli {
    /// Backend base URL. Defaults to $HEROES_BASE_URL, then http://localhost:3000.
    #[arg(long)]
    base_url: Option<String>,

    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List every hero
    List,
    /// Fetch one hero by id
    Get { id: HeroId },
    /// Search heroes by name
    Search { term: String },
    /// Create a hero
    Add { name: String },
    /// Rename an existing hero
    Update { id: HeroId, name: String },
    /// Delete a hero by id
    Delete { id: HeroId },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logger::init_cli_logger(cli.verbose);
    tracing::debug!("CLI args: {:?}", cli);

    let config = match &cli.base_url {
        Some(url) => HeroServiceConfig::new(url),
        None => HeroServiceConfig::from_env(),
    }
    .context("invalid backend configuration")?;

    let log = MessageService::new();
    let heroes = HeroService::new(&config, reqwest::Client::new(), log.clone());

    let output = match cli.command {
        Command::List => serde_json::to_value(heroes.list_heroes().await)?,
        Command::Get { id } => serde_json::to_value(heroes.get_hero(id).await)?,
        Command::Search { term } => serde_json::to_value(heroes.search_heroes(&term).await)?,
        Command::Add { name } => serde_json::to_value(heroes.add_hero(&NewHero::new(name)).await)?,
        Command::Update { id, name } => {
            let updated = heroes.update_hero(&Hero { id, name }).await;
            serde_json::to_value(updated.is_some())?
        }
        Command::Delete { id } => serde_json::to_value(heroes.delete_hero(id).await)?,
    };

    println!("{}", serde_json::to_string_pretty(&output)?);
    for message in log.messages() {
        println!("{message}");
    }

    Ok(())
}
