use anyhow::Context;
use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tokio::signal;
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use worldpop::http::{router, session_layer, AppState};
use worldpop::migration::{Migrator, MigratorTrait};
use worldpop::{world, Config, DbSessionStore};

/// City and country population service
#[derive(Parser, Debug)]
#[command(name = "worldpop", version, about)]
struct Cli {
    #[command(flatten)]
    config: Config,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default)
    Serve,
    /// Apply pending migrations and exit
    Migrate,
    /// Print a city's population and its share of the country's population
    City {
        /// City name, as stored in the database
        name: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.config.validate()?;

    match cli.command.unwrap_or(Command::Serve) {
        Command::Serve => serve(cli.config).await,
        Command::Migrate => {
            let db = cli.config.connect().await?;
            Migrator::up(&db, None).await.context("running migrations")?;
            info!("migrations applied");
            Ok(())
        }
        Command::City { name } => {
            let db = cli.config.connect().await?;
            let city = world::find_city(&db, &name).await?;
            let country = world::country_summary(&db, &city.country_code).await?;
            println!("{}", world::population_report(&city, &country));
            Ok(())
        }
    }
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let db = config.connect().await?;
    Migrator::up(&db, None).await.context("running migrations")?;

    let store = DbSessionStore::new(db.clone());
    let cleanup = store.spawn_cleanup_task(config.cleanup_interval());

    let app = router(
        AppState::new(db, config.bcrypt_cost),
        session_layer(store, config.session_settings()),
    );

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("binding {}", config.bind_addr))?;
    info!("listening on http://{}", config.bind_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    cleanup.abort();
    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutdown requested");
}
