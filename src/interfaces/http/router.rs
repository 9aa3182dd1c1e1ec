//! API Router with Swagger UI

use std::sync::Arc;
use std::time::Instant;

use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};
use utoipa_swagger_ui::SwaggerUi;

use crate::application::PricingService;
use crate::domain::RepositoryProvider;
use crate::infrastructure::crypto::jwt::JwtConfig;
use crate::interfaces::http::common::ApiResponse;
use crate::interfaces::http::middleware::{auth_middleware, AuthState};
use crate::interfaces::http::modules::{
    auth, health, rates, regions, service_types, services, PricingApiState,
};

/// Security scheme modifier for OpenAPI
struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("JWT Bearer token"))
                        .build(),
                ),
            );
        }
    }
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health
        health::handlers::health_check,
        // Auth
        auth::handlers::login,
        auth::handlers::get_current_user,
        // Service types
        service_types::handlers::list_service_types,
        service_types::handlers::get_service_type,
        service_types::handlers::create_service_type,
        service_types::handlers::update_service_type,
        // Regions
        regions::handlers::list_regions,
        regions::handlers::get_region,
        regions::handlers::create_region,
        regions::handlers::update_region,
        // Services
        services::handlers::list_services,
        services::handlers::get_service,
        services::handlers::create_service,
        // Rates
        rates::handlers::list_rates,
        rates::handlers::create_rate,
        rates::handlers::current_rate,
        rates::handlers::next_future_rate,
    ),
    components(
        schemas(
            // Common
            ApiResponse<String>,
            // Health
            health::handlers::HealthResponse,
            health::handlers::ComponentHealth,
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            // Service types
            service_types::ServiceTypeResponse,
            service_types::CreateServiceTypeRequest,
            service_types::UpdateServiceTypeRequest,
            // Regions
            regions::RegionResponse,
            regions::CreateRegionRequest,
            regions::UpdateRegionRequest,
            // Services
            services::ServiceResponse,
            services::CreateServiceRequest,
            // Rates
            rates::RateResponse,
            rates::CreateRateRequest,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Server health check endpoints"),
        (name = "Authentication", description = "User authentication: JWT login and identity"),
        (name = "Service Types", description = "Service type catalog (reference data)"),
        (name = "Regions", description = "Region management"),
        (name = "Services", description = "Services offered per region"),
        (name = "Rates", description = "Rate history and effective-rate queries"),
    ),
    info(
        title = "Regional Service Pricing API",
        version = "1.0.0",
        description = "REST API for tracking per-region service rates over time",
        license(name = "MIT")
    )
)]
pub struct ApiDoc;

/// Create the API router with all routes
pub fn create_api_router(
    repos: Arc<dyn RepositoryProvider>,
    pricing: Arc<PricingService>,
    db: DatabaseConnection,
    jwt_config: JwtConfig,
) -> Router {
    let auth_state = AuthState {
        jwt_config: jwt_config.clone(),
    };
    let api_state = PricingApiState { repos, pricing };

    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Health (public)
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .with_state(health::HealthState {
            db: db.clone(),
            started_at: Arc::new(Instant::now()),
        });

    // Auth routes (public)
    let auth_handler_state = auth::AuthHandlerState {
        db,
        jwt_config,
    };
    let auth_routes = Router::new()
        .route("/login", post(auth::login))
        .with_state(auth_handler_state.clone());

    // Auth routes (protected)
    let auth_protected_routes = Router::new()
        .route("/me", get(auth::get_current_user))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(auth_handler_state);

    // Service type routes: reads are open, mutations require a token
    let service_type_routes = Router::new()
        .route("/", get(service_types::list_service_types))
        .route("/{name}", get(service_types::get_service_type))
        .with_state(api_state.clone());

    let service_type_admin_routes = Router::new()
        .route("/", post(service_types::create_service_type))
        .route("/{name}", put(service_types::update_service_type))
        .layer(middleware::from_fn_with_state(
            auth_state.clone(),
            auth_middleware,
        ))
        .with_state(api_state.clone());

    // Region routes, including nested services and rates: reads are open
    let region_routes = Router::new()
        .route("/", get(regions::list_regions))
        .route("/{name}", get(regions::get_region))
        .route("/{name}/services", get(services::list_services))
        .route(
            "/{name}/services/{service_type}",
            get(services::get_service),
        )
        .route(
            "/{name}/services/{service_type}/rates",
            get(rates::list_rates),
        )
        .route(
            "/{name}/services/{service_type}/rates/current",
            get(rates::current_rate),
        )
        .route(
            "/{name}/services/{service_type}/rates/future",
            get(rates::next_future_rate),
        )
        .with_state(api_state.clone());

    let region_admin_routes = Router::new()
        .route("/", post(regions::create_region))
        .route("/{name}", put(regions::update_region))
        .route("/{name}/services", post(services::create_service))
        .route(
            "/{name}/services/{service_type}/rates",
            post(rates::create_rate),
        )
        .layer(middleware::from_fn_with_state(
            auth_state,
            auth_middleware,
        ))
        .with_state(api_state);

    let swagger_routes = SwaggerUi::new("/docs").url("/api-doc/openapi.json", ApiDoc::openapi());

    // Build router
    Router::new()
        // Swagger UI
        .merge(swagger_routes)
        // Health
        .merge(health_routes)
        // Auth
        .nest("/api/v1/auth", auth_routes)
        .nest("/api/v1/auth", auth_protected_routes)
        // Service types
        .nest("/api/v1/service-types", service_type_routes)
        .nest("/api/v1/service-types", service_type_admin_routes)
        // Regions (with nested services and rates)
        .nest("/api/v1/regions", region_routes)
        .nest("/api/v1/regions", region_admin_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
