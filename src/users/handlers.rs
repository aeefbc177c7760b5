use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument, warn};

use super::{dto::CreateUserRequest, repo_types::User};
use crate::{error::RepoError, repo, state::AppState};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", post(create_user))
        .route("/users/:id", get(get_user))
}

#[instrument(skip(state))]
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<User>, (StatusCode, String)> {
    let user = repo::get_or_404::<User>(&state.db, id).await?;
    Ok(Json(user))
}

#[instrument(skip(state, payload))]
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<Json<User>, RepoError> {
    let email = payload.email.clone();
    let user = match User::create(&state.db, payload, &state.config.password_salt).await {
        Ok(u) => u,
        Err(RepoError::Conflict) => {
            warn!(%email, "email already registered");
            return Err(RepoError::Conflict);
        }
        Err(e) => return Err(e),
    };

    info!(user_id = user.id, "user created");
    Ok(Json(user))
}
