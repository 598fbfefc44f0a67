use clap::Parser;

use myride_lib::bootstrap;
use myride_lib::cli::{self, Cli};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional; real environment variables take precedence
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = bootstrap::resolve_config(cli.config.clone())?;
    bootstrap::tracing::init_tracing_subscriber(&config.log_dir)?;

    cli::run(cli, &config).await
}
