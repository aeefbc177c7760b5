use axum::{extract::State, routing::get, Json, Router};
use serde_json::{json, Value};
use tracing::{error, instrument};

use crate::{db, error::RepoError, state::AppState};

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health))
}

/// Dumps the diagnostic table; any failure here is a 500.
#[instrument(skip(state))]
pub async fn health(State(state): State<AppState>) -> Result<Json<Value>, RepoError> {
    let table = &state.config.health_table;
    let rows = db::dump_table(&state.health_db, table).await.map_err(|e| {
        error!(%table, "health query failed");
        RepoError::Db(e)
    })?;
    Ok(Json(json!({ "data": rows })))
}
