use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use comfy_table::Table;
use configuration::{ServerOverrides, Settings};
use core_types::{View, ViewKind};
use database::{DbRepository, PokedexSource};
use serde::Serialize;
use serde_json::Value;
use std::path::PathBuf;

/// The main entry point for the pokeviews service.
#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments
    let cli = Cli::parse();

    let mut settings = configuration::load_config(cli.config.as_deref())
        .context("Failed to load configuration")?;
    let _guard = configuration::init_tracing(&settings.logging)?;

    // Execute the appropriate command
    match cli.command {
        Commands::Serve(overrides) => {
            settings.server.apply(&overrides);
            web_server::run_server(&settings).await?;
        }
        Commands::Dump(args) => handle_dump(args, &settings).await?,
    }

    Ok(())
}

// ==============================================================================
// CLI Structure
// ==============================================================================

/// Read-only JSON API over the Pokémon database views.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a TOML configuration file (defaults to ./config.toml if present).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the HTTP API until interrupted.
    Serve(ServerOverrides),
    /// Print every row of one database view.
    Dump(DumpArgs),
}

#[derive(Parser)]
struct DumpArgs {
    /// The view to read, e.g. "pokemon-full-info" or "team-overview".
    view: ViewKind,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Json,
    Table,
}

// ==============================================================================
// Dump Command Logic
// ==============================================================================

/// Connects, reads the requested view and prints it to stdout.
async fn handle_dump(args: DumpArgs, settings: &Settings) -> Result<()> {
    let db_pool = database::connect(&settings.database)
        .await
        .context("Failed to connect to the database")?;
    let db_repo = DbRepository::new(db_pool);

    let rows = fetch_view(&db_repo, args.view)
        .await
        .with_context(|| format!("Failed to read {}", args.view.view_name()))?;
    tracing::info!(view = %args.view, rows = rows.len(), "Dumped view.");

    let output = match args.format {
        OutputFormat::Json => serde_json::to_string_pretty(&rows)?,
        OutputFormat::Table => render_table(args.view.columns(), &rows).to_string(),
    };
    println!("{output}");

    db_repo.close().await;
    Ok(())
}

/// Reads a whole view as JSON objects so every view can share one printer.
async fn fetch_view(source: &dyn PokedexSource, view: ViewKind) -> Result<Vec<Value>> {
    let rows = match view {
        ViewKind::PokemonFullInfo => to_values(source.list_pokemon_full_info().await?)?,
        ViewKind::TeamPokemonMoves => to_values(source.list_team_pokemon_moves().await?)?,
        ViewKind::PokemonEvolutions => to_values(source.list_pokemon_evolutions().await?)?,
        ViewKind::RaidBossDetails => to_values(source.list_raid_boss_details().await?)?,
        ViewKind::PokemonGoInfo => to_values(source.list_pokemon_go_info().await?)?,
        ViewKind::TeamOverview => to_values(source.list_team_overview().await?)?,
    };
    Ok(rows)
}

fn to_values<V: View + Serialize>(rows: Vec<V>) -> Result<Vec<Value>> {
    rows.iter()
        .map(|row| serde_json::to_value(row).map_err(Into::into))
        .collect()
}

/// Lays the rows out with one column per view column, in declaration order.
fn render_table(columns: &[&str], rows: &[Value]) -> Table {
    let mut table = Table::new();
    table.set_header(columns.iter().copied());
    for row in rows {
        table.add_row(columns.iter().map(|column| cell_text(&row[*column])));
    }
    table
}

fn cell_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
