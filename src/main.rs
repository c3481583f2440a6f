//! Dukaan Admin Backend
//!
//! Serves the admin command center for the Dukaan bookkeeping platform:
//! platform statistics, the shop registry with suspend/activate actions,
//! and the feedback/issue-tracking panel.

mod api;
mod auth;
mod config;
mod data;
mod db;
mod errors;
mod models;
mod panel;

use std::sync::{Arc, RwLock};

use axum::{
    middleware,
    routing::{delete, get, post, put},
    Router,
};
use chrono::Utc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;
use db::KvStore;
use panel::AdminPanel;

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    pub panel: Arc<RwLock<AdminPanel>>,
    pub store: Arc<KvStore>,
    pub config: Arc<Config>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Dukaan Admin Backend");
    tracing::info!("Store path: {:?}", config.db_path);
    tracing::info!("Bind address: {}", config.bind_addr);

    // Warn if PSK is not configured
    if config.api_psk.is_none() {
        tracing::warn!("No API PSK configured (DUKAAN_ADMIN_PSK). Authentication is disabled!");
    }

    // Initialize the store
    let pool = db::init_database(&config.db_path).await?;
    let store = Arc::new(KvStore::new(pool));

    // Seed the panel before serving: users and feedback from the store,
    // issues from the sample set. Missing or unparsable values load as
    // empty collections.
    let now = Utc::now().to_rfc3339();
    let users = store.load_users(&now).await?;
    let feedback = store.load_feedback().await?;
    let issues = data::sample_issues();
    tracing::info!(
        "Panel seeded with {} shops, {} issues, {} feedback entries",
        users.len(),
        issues.len(),
        feedback.len()
    );

    let panel = AdminPanel::new(users, issues, feedback);

    // Create application state
    let state = AppState {
        panel: Arc::new(RwLock::new(panel)),
        store,
        config: Arc::new(config.clone()),
    };

    // Build router
    let app = create_router(state);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!("Server listening on {}", config.bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
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

    // API routes
    let api_routes = Router::new()
        // Panel state
        .route("/panel", get(api::get_panel))
        .route("/panel/revision", get(api::get_revision))
        .route("/panel/tab", put(api::set_active_tab))
        .route("/panel/filter", put(api::set_category_filter))
        // Dashboard
        .route("/dashboard", get(api::get_dashboard))
        // Shop registry
        .route("/shops", get(api::list_shops))
        .route("/shops/{id}/toggle-status", post(api::toggle_shop_status))
        // Feedback
        .route("/feedback", get(api::list_feedback))
        // Issue tracker
        .route("/issues", get(api::list_issues))
        .route("/issues/{id}/status", put(api::update_issue_status))
        .route("/issues/{id}/note-editor", post(api::open_note_editor))
        .route("/issues/note-draft", put(api::set_note_draft))
        .route("/issues/note-editor", delete(api::cancel_note_editor))
        .route("/issues/{id}/note", put(api::save_note))
        // Apply PSK auth middleware
        .layer(middleware::from_fn(move |req, next| {
            auth::psk_auth_layer(psk.clone(), req, next)
        }));

    // Health check (no auth required)
    let health_routes = Router::new().route("/health", get(health_check));

    Router::new()
        .nest("/api", api_routes)
        .merge(health_routes)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health_check() -> &'static str {
    "OK"
}
