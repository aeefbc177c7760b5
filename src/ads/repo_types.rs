use serde::Serialize;
use sqlx::FromRow;
use time::OffsetDateTime;

/// Advertisement record in the database.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Ad {
    pub id: i32,
    pub title: String,
    pub description: String,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    #[serde(skip_serializing)]
    pub creator_id: i32, // accepted on input, not echoed back
}

#[derive(Debug)]
pub struct NewAd {
    pub title: String,
    pub description: String,
    pub creator_id: i32,
    pub created_at: Option<OffsetDateTime>,
}
