use citadel::server::{config::Config, model::app::AppState, router, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = run(config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), citadel::server::error::Error> {
    let db = startup::connect_to_database(&config).await?;

    let app = router::routes().with_state(AppState::from(db));

    let listener = tokio::net::TcpListener::bind(config.listen_address()).await?;
    tracing::info!("Starting server on {}", config.listen_address());

    axum::serve(listener, app).await?;

    Ok(())
}
