use emberlog::{Config, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "emberlog=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env()?;

    tracing::info!("Starting emberlog");
    tracing::info!("Web server will listen on: {}", config.web_addr());

    let db_pool = emberlog::db::create_pool(&config.database_url).await?;

    sqlx::migrate!("./migrations")
        .run(&db_pool)
        .await
        .expect("Failed to run migrations");

    let app_state = emberlog::web::AppState::new(db_pool);

    emberlog::web::serve(config.web_addr(), app_state).await?;

    Ok(())
}
