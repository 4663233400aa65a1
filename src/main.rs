//! Arteterapia Backend
//!
//! REST backend for the Arteterapia school: a forum with topics and replies,
//! notices, school enrollment records and user accounts, persisted in SQLite.

mod api;
mod auth;
mod config;
mod db;
mod errors;
mod models;
mod service;

use std::sync::Arc;

use axum::{
    middleware,
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::{Config, LogFormat};
use db::Repository;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    init_logging(&config);

    tracing::info!("Starting Arteterapia Backend");
    tracing::info!("Database path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if PSK is not configured
    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (ARTE_API_PSK). Authentication is disabled!");
    }

    // Initialize database
    let pool = db::init_database(&config.db_path).await?;
    let repo = Arc::new(Repository::new(pool));

    // Create application state
    let state = AppState {
        repo,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
fn init_logging(config: &Config) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    let registry = tracing_subscriber::registry().with(env_filter);
    match config.log_format {
        LogFormat::Json => registry.with(tracing_subscriber::fmt::layer().json()).init(),
        LogFormat::Text => registry.with(tracing_subscriber::fmt::layer()).init(),
    }
}

/// Create the application router with all routes.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Clone PSK for the auth layer
    let psk = state.config.api_psk.clone();

    let api_routes = Router::new()
        // Forums
        .route("/forum", post(api::create_forum))
        .route("/forum", get(api::list_forums))
        .route("/forum/{forum_id}", get(api::get_forum))
        .route("/forum/{forum_id}", patch(api::update_forum))
        .route("/forum/{forum_id}", delete(api::delete_forum))
        // Topics
        .route("/forum/{forum_id}/topics", post(api::create_topic))
        .route("/forum/{forum_id}/topics", get(api::list_topics))
        .route("/forum/{forum_id}/topics/{topic_id}", get(api::get_topic))
        .route("/forum/{forum_id}/topics/{topic_id}", patch(api::update_topic))
        .route("/forum/{forum_id}/topics/{topic_id}", delete(api::delete_topic))
        // Replies
        .route("/forum/{forum_id}/topics/{topic_id}/replies", post(api::create_reply))
        .route("/forum/{forum_id}/topics/{topic_id}/replies", get(api::list_replies))
        .route(
            "/forum/{forum_id}/topics/{topic_id}/replies/{reply_id}",
            get(api::get_reply),
        )
        .route(
            "/forum/{forum_id}/topics/{topic_id}/replies/{reply_id}",
            patch(api::update_reply),
        )
        .route(
            "/forum/{forum_id}/topics/{topic_id}/replies/{reply_id}",
            delete(api::delete_reply),
        )
        // Notices
        .route("/notice", post(api::create_notice))
        .route("/notice", get(api::list_notices))
        .route("/notice/{id}", get(api::get_notice))
        .route("/notice/{id}", put(api::update_notice))
        .route("/notice/{id}", delete(api::delete_notice))
        // School data
        .route("/school-data", post(api::create_school_data))
        .route("/school-data", get(api::list_school_data))
        .route("/school-data/{id}", get(api::get_school_data))
        .route("/school-data/{id}", put(api::update_school_data))
        .route("/school-data/{id}", delete(api::delete_school_data))
        // Users
        .route("/user", post(api::create_user))
        .route("/user", get(api::list_users))
        .route("/user/login", post(api::login))
        .route("/user/{email}", get(api::get_user))
        .route("/user/{email}", put(api::update_user))
        .route("/user/{email}", delete(api::delete_user))
        .route("/user/{email}/content-note", post(api::add_content_note))
        .route(
            "/user/{email}/completed-content",
            post(api::add_completed_content),
        )
        // Apply PSK auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .merge(api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}

#[cfg(test)]
mod tests;
