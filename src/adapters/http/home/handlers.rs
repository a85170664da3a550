//! HTTP handler for the listing page.

use std::sync::Arc;

use axum::{extract::State, response::Html};

use crate::adapters::http::error::ApiError;
use crate::application::handlers::user::ListUsersHandler;
use crate::ports::UserRepository;

use super::view::render_user_list;

/// State for the listing page.
#[derive(Clone)]
pub struct HomeState {
    list_handler: Arc<ListUsersHandler>,
}

impl HomeState {
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self {
            list_handler: Arc::new(ListUsersHandler::new(repository)),
        }
    }
}

/// GET / - Render all users as an HTML table
pub async fn index(State(state): State<HomeState>) -> Result<Html<String>, ApiError> {
    tracing::info!("GET / endpoint called");
    let users = state.list_handler.handle().await?;
    Ok(Html(render_user_list(&users)))
}
