//! Pricing application service

pub mod service;

pub use service::PricingService;
