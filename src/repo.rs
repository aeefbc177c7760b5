//! Data access shared by every entity.
//!
//! An entity names its table and columns once; lookup, insert and delete are
//! written here a single time and reused by `users` and `ads`.

use async_trait::async_trait;
use axum::http::StatusCode;
use sqlx::{postgres::PgRow, FromRow, PgPool};
use tracing::debug;

use crate::error::RepoError;

/// A persisted record type with an integer primary key named `id`.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    const TABLE: &'static str;
    /// Column list selected and returned for this entity.
    const COLUMNS: &'static str;
}

/// An insert payload for some entity.
#[async_trait]
pub trait NewEntity: Send {
    type Output: Entity;

    async fn insert(self, db: &PgPool) -> Result<Self::Output, sqlx::Error>;
}

/// Fetches by primary key; `NotFound` when absent.
pub async fn get<T: Entity>(db: &PgPool, id: i32) -> Result<T, RepoError> {
    let sql = format!("SELECT {} FROM {} WHERE id = $1", T::COLUMNS, T::TABLE);
    sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or(RepoError::NotFound)
}

/// Like [`get`], but any failure is already shaped as an HTTP error.
pub async fn get_or_404<T: Entity>(db: &PgPool, id: i32) -> Result<T, (StatusCode, String)> {
    get::<T>(db, id).await.map_err(|e| {
        debug!(table = T::TABLE, id, error = %e, "lookup failed");
        e.into_http()
    })
}

/// Inserts a new row; a unique-constraint violation becomes `Conflict`.
pub async fn create<N: NewEntity>(db: &PgPool, new: N) -> Result<N::Output, RepoError> {
    new.insert(db).await.map_err(RepoError::from_insert)
}

/// Removes by primary key and returns the row as it was; `NotFound` when absent.
pub async fn delete_by_id<T: Entity>(db: &PgPool, id: i32) -> Result<T, RepoError> {
    let sql = format!(
        "DELETE FROM {} WHERE id = $1 RETURNING {}",
        T::TABLE,
        T::COLUMNS
    );
    sqlx::query_as::<_, T>(&sql)
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or(RepoError::NotFound)
}
