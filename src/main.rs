// src/main.rs
use axum::{
    extract::Extension,
    http::{header, HeaderValue, Method},
    middleware, Router,
};
use dotenv::dotenv;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use std::path::PathBuf;
use std::{net::SocketAddr, str::FromStr, sync::Arc};
use tokio::{net::TcpListener, sync::RwLock};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

// ============================================================================
// MODULE IMPORTS
// ============================================================================

mod analysis;
mod assistant;
mod auth;
mod blueprints;
mod common;
mod logging_middleware;
mod profile;
mod services;

// ============================================================================
// COMMON IMPORTS
// ============================================================================

use analysis::catalog::Catalog;
use common::dev_mode::{apply_cli_override, print_dev_mode_status, DevModeConfig};
use common::{AppConfig, AppState};
use services::LlmService;

fn cors_layer(origins: &[String]) -> CorsLayer {
    let origins: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_credentials(true)
}

// ============================================================================
// MAIN APPLICATION ENTRY POINT
// ============================================================================

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    // ========================================================================
    // ENVIRONMENT CONFIGURATION
    // ========================================================================

    let config = AppConfig::from_env();
    info!(
        port = config.port,
        match_mode = ?config.match_mode,
        cors_origins = ?config.cors_origins,
        "Configuration loaded"
    );

    // ========================================================================
    // DEV MODE CONFIGURATION
    // ========================================================================

    let dev_mode = apply_cli_override(DevModeConfig::from_env());
    print_dev_mode_status(&dev_mode);

    // ========================================================================
    // DIRECTORY SETUP
    // ========================================================================

    tokio::fs::create_dir_all(&config.resumes_dir).await?;

    // ========================================================================
    // DATABASE SETUP
    // ========================================================================

    if let Some(path_part) = config.database_url.strip_prefix("sqlite://") {
        let path_without_params = path_part.split('?').next().unwrap_or("");
        if !path_without_params.is_empty() && !path_without_params.starts_with(':') {
            let db_path = PathBuf::from(path_without_params);
            if let Some(parent) = db_path.parent() {
                if !parent.as_os_str().is_empty() {
                    tokio::fs::create_dir_all(parent).await?;
                }
            }
        }
    }

    let connect_options =
        SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);
    let pool = SqlitePoolOptions::new()
        .connect_with(connect_options)
        .await?;

    // Run database migrations
    common::migrations::run_migrations(&pool).await?;

    // ========================================================================
    // SERVICE INITIALIZATION
    // ========================================================================

    let catalog = Arc::new(Catalog::load(config.catalog_path.as_deref())?);
    info!(
        default_role = %catalog.default_role(),
        target_roles = catalog.target_roles().len(),
        "Catalog initialized"
    );

    let llm_service = Arc::new(LlmService::new(config.llm.clone()));
    if llm_service.is_configured() {
        info!(base_url = %config.llm.base_url, "LlmService initialized");
    } else {
        warn!("LLM_API_KEY is not set; skill extraction and project ideas will return 503");
    }

    // ========================================================================
    // APPLICATION STATE
    // ========================================================================

    let app_state = AppState {
        db: pool,
        resumes_dir: config.resumes_dir.clone(),
        jwt_secret: config.jwt_secret.clone(),
        dev_mode,
        match_mode: config.match_mode,
        catalog,
        llm_service,
    };

    let shared = Arc::new(RwLock::new(app_state));

    // ========================================================================
    // ROUTER COMPOSITION
    // ========================================================================

    let api = Router::new()
        // ====================================================================
        // AUTHENTICATION ROUTES
        // ====================================================================
        .merge(auth::auth_routes())
        // ====================================================================
        // ANALYSIS ROUTES (Skill gap, Radar, Catalog, Blueprint template)
        // ====================================================================
        .merge(analysis::analysis_routes())
        // ====================================================================
        // PROFILE ROUTES (Profile, Saved skills, Résumé)
        // ====================================================================
        .merge(profile::profile_routes())
        // ====================================================================
        // BLUEPRINT ROUTES (Saved blueprints, PDF export)
        // ====================================================================
        .merge(blueprints::blueprints_routes())
        .layer(cors_layer(&config.cors_origins));

    let app = api
        // ====================================================================
        // ASSISTANT ROUTES (Public LLM proxies with their own CORS)
        // ====================================================================
        .merge(assistant::assistant_routes())
        // ====================================================================
        // MIDDLEWARE AND LAYERS
        // ====================================================================
        // Add request/response body logging in debug mode
        .layer(middleware::from_fn(logging_middleware::log_request_response))
        .layer(Extension(shared))
        .layer(TraceLayer::new_for_http());

    // ========================================================================
    // SERVER STARTUP
    // ========================================================================

    let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
    info!("Listening on {}", addr);
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}
