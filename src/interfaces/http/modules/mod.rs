use std::sync::Arc;

use crate::application::PricingService;
use crate::domain::RepositoryProvider;

pub mod auth;
pub mod health;
pub mod rates;
pub mod regions;
pub mod service_types;
pub mod services;

/// Shared state for all pricing resource routes.
#[derive(Clone)]
pub struct PricingApiState {
    pub repos: Arc<dyn RepositoryProvider>,
    pub pricing: Arc<PricingService>,
}
