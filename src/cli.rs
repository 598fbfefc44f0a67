//! Command-line surface over the favorites use cases.
//!
//! Every command prints one pretty JSON document on stdout.

use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use serde_json::{json, Value};

use mr_app::ResolveOptions;
use mr_core::config::AppConfig;
use mr_core::{SavedReference, UserId, VehicleId, VehicleListing};

use crate::bootstrap::{wire, AppDeps};

#[derive(Debug, Parser)]
#[command(name = "myride")]
#[command(about = "My Ride favorites: save vehicles and resolve them for display")]
#[command(long_about = None)]
pub struct Cli {
    /// TOML config file (defaults to ./myride.toml when present)
    #[arg(long, global = true, env = "MYRIDE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Manage a user's saved vehicles
    #[command(subcommand)]
    Favorites(FavoritesCommand),

    /// Resolve a JSON array of saved references read from a file
    Resolve {
        #[arg(long)]
        input: PathBuf,

        #[command(flatten)]
        lookup: LookupArgs,
    },
}

#[derive(Debug, Subcommand)]
pub enum FavoritesCommand {
    /// Show saved vehicles, resolved and ordered for display
    List {
        #[arg(long)]
        user: String,

        #[command(flatten)]
        lookup: LookupArgs,
    },

    /// Save a vehicle, optionally with a JSON snapshot of its listing
    Add {
        #[arg(long)]
        user: String,

        #[arg(long)]
        id: String,

        #[arg(long)]
        snapshot: Option<PathBuf>,
    },

    /// Forget a saved vehicle
    Remove {
        #[arg(long)]
        user: String,

        #[arg(long)]
        id: String,
    },
}

#[derive(Debug, Clone, Copy, Args)]
pub struct LookupArgs {
    /// Skip live lookups for this call
    #[arg(long)]
    pub offline: bool,
}

impl LookupArgs {
    fn options(self, defaults: ResolveOptions) -> ResolveOptions {
        if self.offline {
            ResolveOptions::offline()
        } else {
            defaults
        }
    }
}

/// Run the parsed command and print its JSON result.
pub async fn run(cli: Cli, config: &AppConfig) -> anyhow::Result<()> {
    let output = execute(cli.command, config).await?;
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

/// Run one command against freshly wired dependencies.
pub async fn execute(command: Commands, config: &AppConfig) -> anyhow::Result<Value> {
    let deps = wire(config).await?;
    dispatch(command, &deps).await
}

async fn dispatch(command: Commands, deps: &AppDeps) -> anyhow::Result<Value> {
    match command {
        Commands::Resolve { input, lookup } => {
            let references = read_json::<Vec<SavedReference>>(&input).await?;
            let list = deps
                .resolve
                .execute(&references, lookup.options(deps.default_options))
                .await?;
            Ok(serde_json::to_value(&list)?)
        }
        Commands::Favorites(FavoritesCommand::List { user, lookup }) => {
            let list = deps
                .list
                .execute(&UserId::from(user), lookup.options(deps.default_options))
                .await?;
            Ok(serde_json::to_value(&list)?)
        }
        Commands::Favorites(FavoritesCommand::Add { user, id, snapshot }) => {
            let snapshot = match snapshot {
                Some(path) => Some(read_json::<VehicleListing>(&path).await?),
                None => None,
            };
            let added = deps
                .add
                .execute(&UserId::from(user), VehicleId::from(id.as_str()), snapshot)
                .await?;
            Ok(json!({ "id": id, "added": added }))
        }
        Commands::Favorites(FavoritesCommand::Remove { user, id }) => {
            let removed = deps
                .remove
                .execute(&UserId::from(user), &VehicleId::from(id.as_str()))
                .await?;
            Ok(json!({ "id": id, "removed": removed }))
        }
    }
}

async fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&content).with_context(|| format!("Failed to parse {}", path.display()))
}
