pub mod client;
pub mod error;
pub mod users;

pub use client::{api_call, api_call_discard, send_request, set_silent};
pub use error::ApiError;
pub use users::{HttpUsersApi, UsersApi};
