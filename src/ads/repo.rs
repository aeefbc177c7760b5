use async_trait::async_trait;
use sqlx::PgPool;

use super::repo_types::{Ad, NewAd};
use crate::repo::{Entity, NewEntity};

impl Entity for Ad {
    const TABLE: &'static str = "advertisements";
    const COLUMNS: &'static str = "id, title, description, created_at, creator_id";
}

#[async_trait]
impl NewEntity for NewAd {
    type Output = Ad;

    async fn insert(self, db: &PgPool) -> Result<Ad, sqlx::Error> {
        sqlx::query_as::<_, Ad>(
            r#"
            INSERT INTO advertisements (title, description, created_at, creator_id)
            VALUES ($1, $2, COALESCE($3, now()), $4)
            RETURNING id, title, description, created_at, creator_id
            "#,
        )
        .bind(self.title)
        .bind(self.description)
        .bind(self.created_at)
        .bind(self.creator_id)
        .fetch_one(db)
        .await
    }
}
