pub mod dto;
pub mod handlers;

pub use dto::{LoginRequest, LoginResponse, UserInfo};
pub use handlers::{get_current_user, login, AuthHandlerState};
