//! HTTP routes for user endpoints.

use axum::{
    routing::{get, MethodRouter},
    Router,
};

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

use crate::adapters::http::middleware::method_not_allowed;
use crate::domain::foundation::UserId;

use super::handlers::{
    create_user, delete_user, get_user, list_users, patch_user, replace_user, UsersAppState,
};

/// Base path of the user collection.
pub const USERS_PATH: &str = "/api/v1/users";

/// Bytes escaped inside a single path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// URL of a single user, with the id encoded as one path segment.
///
/// The `:id` extractor decodes it back to the stored id.
pub fn user_location(id: &UserId) -> String {
    format!(
        "{}/{}",
        USERS_PATH,
        utf8_percent_encode(id.as_str(), PATH_SEGMENT)
    )
}

/// Creates the user router with all endpoints.
///
/// # Routes
/// - `GET /api/v1/users` - List users
/// - `POST /api/v1/users` - Create a user
/// - `GET /api/v1/users/:id` - Get a user
/// - `PUT /api/v1/users/:id` - Replace a user
/// - `PATCH /api/v1/users/:id` - Patch a user
/// - `DELETE /api/v1/users/:id` - Delete a user
pub fn user_routes(state: UsersAppState) -> Router {
    let collection: MethodRouter<UsersAppState> = get(list_users)
        .post(create_user)
        .fallback(method_not_allowed);
    let item: MethodRouter<UsersAppState> = get(get_user)
        .put(replace_user)
        .patch(patch_user)
        .delete(delete_user)
        .fallback(method_not_allowed);

    Router::new()
        .route(USERS_PATH, collection)
        .route(&format!("{}/:id", USERS_PATH), item)
        .with_state(state)
}
