//!
//! Regional service pricing REST server.
//! Reads configuration from TOML file (~/.config/pricing-service/config.toml).

use std::sync::Arc;

use sea_orm_migration::MigratorTrait;
use tracing::{error, info, warn};

use pricing_service::application::PricingService;
use pricing_service::config::AppConfig;
use pricing_service::infrastructure::crypto::jwt::JwtConfig;
use pricing_service::infrastructure::database::migrator::Migrator;
use pricing_service::{
    create_api_router, default_config_path, init_database, DatabaseConfig,
    SeaOrmRepositoryProvider,
};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // ── Load configuration ─────────────────────────────────────
    let config_path = std::env::var("PRICING_CONFIG")
        .map(std::path::PathBuf::from)
        .unwrap_or_else(|_| default_config_path());
    let app_cfg = match AppConfig::load(&config_path) {
        Ok(cfg) => {
            // Initialize logging with configured level
            tracing_subscriber::fmt()
                .with_env_filter(
                    tracing_subscriber::EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cfg.logging.level)),
                )
                .init();
            info!("Configuration loaded from {}", config_path.display());
            cfg
        }
        Err(e) => {
            tracing_subscriber::fmt()
                .with_env_filter(tracing_subscriber::EnvFilter::new("info"))
                .init();
            error!("Failed to load config: {}. Using defaults.", e);
            AppConfig::default()
        }
    };

    info!("Starting Regional Service Pricing server...");

    // ── Build sub-configs from AppConfig ───────────────────────
    let db_config = DatabaseConfig {
        url: app_cfg.database.connection_url(),
    };
    info!("Database: {}", db_config.url);

    let jwt_config = JwtConfig {
        secret: app_cfg.security.jwt_secret.clone(),
        expiration_hours: app_cfg.security.jwt_expiration_hours,
        issuer: "pricing-service".to_string(),
    };
    info!(
        "JWT configured with {}h token expiration",
        jwt_config.expiration_hours
    );

    // ── Database ───────────────────────────────────────────────
    let db = match init_database(&db_config).await {
        Ok(db) => db,
        Err(e) => {
            error!("Failed to connect to database: {}", e);
            return Err(e.into());
        }
    };

    info!("Running database migrations...");
    if let Err(e) = Migrator::up(&db, None).await {
        error!("Failed to run migrations: {}", e);
        return Err(e.into());
    }
    info!("Migrations completed");

    // Create default admin user if not exists
    create_default_admin(&db, &app_cfg).await;

    // ── Repositories and application service ───────────────────
    let repos: Arc<dyn pricing_service::domain::RepositoryProvider> =
        Arc::new(SeaOrmRepositoryProvider::new(db.clone()));
    let pricing = Arc::new(PricingService::new(repos.clone()));

    // ── REST API server with graceful shutdown ─────────────────
    let api_router = create_api_router(repos, pricing, db.clone(), jwt_config);

    let api_addr = app_cfg.api_address();
    let listener = tokio::net::TcpListener::bind(&api_addr).await?;
    info!("REST API server listening on http://{}", api_addr);
    info!("Swagger UI available at http://{}/docs/", api_addr);

    axum::serve(listener, api_router)
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutdown signal received");
        })
        .await?;

    // Perform final cleanup
    if let Err(e) = db.close().await {
        warn!("Error closing database connection: {}", e);
    } else {
        info!("Database connection closed");
    }

    info!("Regional Service Pricing server shutdown complete");
    Ok(())
}

/// Create default admin user if no users exist
async fn create_default_admin(db: &sea_orm::DatabaseConnection, app_cfg: &AppConfig) {
    use pricing_service::infrastructure::crypto::password::hash_password;
    use pricing_service::infrastructure::database::entities::user::{self, UserRole};
    use sea_orm::{ActiveModelTrait, EntityTrait, PaginatorTrait, Set};

    let users_count = user::Entity::find().count(db).await.unwrap_or(0);

    if users_count == 0 {
        info!("Creating default admin user...");

        let admin_email = app_cfg.admin.email.clone();
        let admin_username = app_cfg.admin.username.clone();
        let admin_password = app_cfg.admin.password.clone();

        let password_hash = match hash_password(&admin_password) {
            Ok(hash) => hash,
            Err(e) => {
                error!("Failed to hash admin password: {}", e);
                return;
            }
        };

        let admin = user::ActiveModel {
            id: Set(uuid::Uuid::new_v4().to_string()),
            username: Set(admin_username),
            email: Set(admin_email.clone()),
            password_hash: Set(password_hash),
            role: Set(UserRole::Admin),
            is_active: Set(true),
            created_at: Set(chrono::Utc::now()),
            updated_at: Set(chrono::Utc::now()),
            last_login_at: Set(None),
        };

        match admin.insert(db).await {
            Ok(_) => {
                info!("Default admin created: {}", admin_email);
                warn!("Please change the admin password immediately!");
            }
            Err(e) => {
                error!("Failed to create admin user: {}", e);
            }
        }
    }
}
