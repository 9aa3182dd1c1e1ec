//! # Regional Service Pricing
//!
//! REST service tracking the price of services offered per geographic
//! region. Each region carries one service per registered service type, and
//! each service owns an append-only history of rates with effective dates;
//! the service answers "what does this cost right now" and "what will it
//! cost next".
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: Core business entities, rate-history resolution and
//!   repository traits
//! - **application**: Pricing use cases orchestrating repositories and the
//!   audit trail
//! - **infrastructure**: External concerns (database, crypto, in-memory
//!   storage)
//! - **interfaces**: REST API with Swagger documentation
//! - **shared**: Error taxonomy and input format checks

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::database::repositories::SeaOrmRepositoryProvider;
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router
pub use interfaces::http::create_api_router;
