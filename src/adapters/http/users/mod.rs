//! HTTP adapter for user endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{PatchUserRequest, UserProfileRequest, UserProfileResponse};
pub use handlers::UsersAppState;
pub use routes::{user_location, user_routes, USERS_PATH};
