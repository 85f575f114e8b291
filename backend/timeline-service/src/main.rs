use actix_web::{web, App, HttpResponse, HttpServer, Responder};
use anyhow::{Context, Result};
use sqlx::PgPool;
use tracing::info;

use timeline_service::config::Config;

async fn health() -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "service": "timeline-service",
    }))
}

async fn ready(pool: web::Data<PgPool>) -> impl Responder {
    match db_pool::health_check(pool.get_ref()).await {
        Ok(()) => HttpResponse::Ok().json(serde_json::json!({
            "status": "ready",
        })),
        Err(e) => HttpResponse::ServiceUnavailable().body(format!("error: {}", e)),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    info!("🔧 Starting timeline-service");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    info!(
        "✅ Configuration loaded: env={}, http_port={}",
        config.app.env, config.app.http_port
    );
    config.database.log_config();

    // Initialize database pool
    let pool = db_pool::create_pool(&config.database)
        .await
        .context("Failed to connect to database")?;

    // Run database migrations
    sqlx::migrate!("./migrations")
        .run(&pool)
        .await
        .context("Failed to run database migrations")?;
    info!("✅ Database migrations completed");

    // The tweet repository itself is this crate's library interface; the
    // binary only exposes the operational endpoints.
    let bind_host = config.app.host.clone();
    let bind_port = config.app.http_port;
    let pool_data = web::Data::new(pool);

    info!("✅ HTTP server listening on {}:{}", bind_host, bind_port);

    HttpServer::new(move || {
        App::new()
            .app_data(pool_data.clone())
            .route("/health", web::get().to(health))
            .route("/health/ready", web::get().to(ready))
    })
    .bind((bind_host.as_str(), bind_port))
    .context("Failed to bind HTTP server")?
    .run()
    .await
    .context("HTTP server terminated")?;

    Ok(())
}
