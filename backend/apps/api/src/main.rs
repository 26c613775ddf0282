//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use std::env;
use std::net::SocketAddr;
use std::sync::Arc;

use auth::{AuthConfig, PgUserRepository, auth_router};
use axum::{
    Json, Router, http,
    http::{Method, header},
    routing::get,
};
use base64::Engine;
use base64::engine::general_purpose;
use billing::{BillingConfig, HttpBillingProvider, billing_router};
use catalog::{PgCatalogRepository, catalog_router};
use housing::{PgHousingRepository, housing_router};
use platform::mailer::{LogMailer, Mailer, MailerConfig, SmtpMailer};
use platform::storage::DocumentStore;
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use verification::{PgVerificationRepository, admin_verification_router, landowner_router};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            "api=info,auth=info,verification=info,housing=info,billing=info,catalog=info,tower_http=info"
                .into()
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Auth configuration
    let auth_config = if cfg!(debug_assertions) {
        AuthConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("TOKEN_SECRET").expect("TOKEN_SECRET must be set in production");
        let secret_bytes = Engine::decode(&general_purpose::STANDARD, &secret_b64)?;
        anyhow::ensure!(
            secret_bytes.len() == 32,
            "TOKEN_SECRET must decode to 32 bytes, got {}",
            secret_bytes.len()
        );
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);
        AuthConfig {
            token_secret: secret,
            password_pepper: env::var("PASSWORD_PEPPER").ok().map(String::into_bytes),
            ..AuthConfig::default()
        }
    };

    // Billing provider configuration
    let billing_config = if cfg!(debug_assertions) {
        BillingConfig::development()
    } else {
        BillingConfig {
            api_base: env::var("BILLING_API_BASE")
                .unwrap_or_else(|_| "https://api.stripe.com".to_string()),
            api_key: env::var("BILLING_API_KEY")
                .expect("BILLING_API_KEY must be set in production"),
            success_url: env::var("CHECKOUT_SUCCESS_URL")
                .expect("CHECKOUT_SUCCESS_URL must be set in production"),
            cancel_url: env::var("CHECKOUT_CANCEL_URL")
                .expect("CHECKOUT_CANCEL_URL must be set in production"),
        }
    };

    // Ownership document storage
    let document_root =
        env::var("DOCUMENT_STORE_DIR").unwrap_or_else(|_| "./data/documents".to_string());
    let store = DocumentStore::new(document_root);
    store.init().await?;

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:5173,http://127.0.0.1:5173".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router; SMTP when configured, a logging mailer otherwise
    let api = match smtp_config_from_env() {
        Some(config) => {
            tracing::info!(host = %config.smtp_host, "Using SMTP mailer");
            api_router(
                pool,
                SmtpMailer::new(&config)?,
                auth_config,
                billing_config,
                store,
            )
        }
        None => {
            tracing::info!("SMTP not configured, using log mailer");
            api_router(pool, LogMailer, auth_config, billing_config, store)
        }
    };

    let app = Router::new()
        .route("/health", get(health))
        .nest("/api", api)
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(8080);
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

/// Assemble all domain routers over one connection pool and one mailer
fn api_router<M>(
    pool: PgPool,
    mailer: M,
    auth_config: AuthConfig,
    billing_config: BillingConfig,
    store: DocumentStore,
) -> Router
where
    M: Mailer + Clone + Send + Sync + 'static,
{
    let shared_config = Arc::new(auth_config.clone());
    let shared_mailer = Arc::new(mailer.clone());
    let requests = Arc::new(PgVerificationRepository::new(pool.clone()));
    let users = Arc::new(PgUserRepository::new(pool.clone()));

    Router::new()
        .merge(auth_router(
            PgUserRepository::new(pool.clone()),
            auth_config.clone(),
        ))
        .merge(landowner_router(
            requests.clone(),
            users.clone(),
            store.clone(),
            shared_mailer.clone(),
            shared_config.clone(),
        ))
        .merge(admin_verification_router(
            requests,
            users,
            store,
            shared_mailer,
            shared_config,
        ))
        .merge(housing_router(
            PgHousingRepository::new(pool.clone()),
            PgUserRepository::new(pool.clone()),
            mailer,
            auth_config.clone(),
        ))
        .merge(billing_router(
            HttpBillingProvider::new(billing_config),
            PgUserRepository::new(pool.clone()),
            auth_config.clone(),
        ))
        .merge(catalog_router(PgCatalogRepository::new(pool), auth_config))
}

fn smtp_config_from_env() -> Option<MailerConfig> {
    let smtp_host = env::var("SMTP_HOST").ok()?;
    Some(MailerConfig {
        from: env::var("MAIL_FROM")
            .unwrap_or_else(|_| "AbroadEase <noreply@abroadease.example>".to_string()),
        smtp_host,
        smtp_port: env::var("SMTP_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(587),
        smtp_username: env::var("SMTP_USERNAME").unwrap_or_default(),
        smtp_password: env::var("SMTP_PASSWORD").unwrap_or_default(),
    })
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}
