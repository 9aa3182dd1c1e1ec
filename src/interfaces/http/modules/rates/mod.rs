pub mod dto;
pub mod handlers;

pub use dto::{CreateRateRequest, RateQuery, RateResponse};
pub use handlers::{create_rate, current_rate, list_rates, next_future_rate};
