use clap::{Parser, Subcommand};
use posts::config::Config;
use posts::schema::{self, SchemaChange};
use sea_orm::Database;

#[derive(Parser, Debug)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Clone, Subcommand)]
enum Commands {
    /// Apply all pending schema changes
    Apply,
    /// Reverse all applied schema changes
    Reverse,
    /// List schema changes and whether each is applied
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().init();
    let args = Cli::parse();
    let config = Config::load()?;
    let db = Database::connect(&config.database_url).await?;

    match args.command {
        Commands::Apply => schema::run(&db, SchemaChange::Apply).await?,
        Commands::Reverse => schema::run(&db, SchemaChange::Reverse).await?,
        Commands::Status => {
            for migration in schema::status(&db).await? {
                let state = if migration.applied { "applied" } else { "pending" };
                println!("{} {}", state, migration.name);
            }
        }
    }

    Ok(())
}
