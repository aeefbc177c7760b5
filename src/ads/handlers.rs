use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::{info, instrument};

use super::{
    dto::CreateAdRequest,
    repo_types::{Ad, NewAd},
};
use crate::{error::RepoError, repo, state::AppState};

pub fn ad_routes() -> Router<AppState> {
    Router::new()
        .route("/ads", post(create_ad))
        .route("/ads/hello", get(hello))
        .route("/ads/:id", get(get_ad).delete(delete_ad))
}

pub async fn hello() -> &'static str {
    "HELLO"
}

#[instrument(skip(state))]
pub async fn get_ad(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Ad>, (StatusCode, String)> {
    let ad = repo::get_or_404::<Ad>(&state.db, id).await?;
    Ok(Json(ad))
}

#[instrument(skip(state, payload))]
pub async fn create_ad(
    State(state): State<AppState>,
    Json(payload): Json<CreateAdRequest>,
) -> Result<Json<Ad>, RepoError> {
    let ad = repo::create(&state.db, NewAd::from(payload)).await?;
    info!(ad_id = ad.id, creator_id = ad.creator_id, "ad created");
    Ok(Json(ad))
}

#[instrument(skip(state))]
pub async fn delete_ad(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<&'static str, RepoError> {
    let ad = repo::delete_by_id::<Ad>(&state.db, id).await?;
    info!(ad_id = ad.id, title = %ad.title, "ad deleted");
    Ok("Ad was deleted")
}
