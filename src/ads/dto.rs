use serde::Deserialize;
use time::OffsetDateTime;

use super::repo_types::NewAd;

/// Request body for `POST /ads`.
#[derive(Debug, Deserialize)]
pub struct CreateAdRequest {
    pub title: String,
    pub description: String,
    pub creator_id: i32,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
}

impl From<CreateAdRequest> for NewAd {
    fn from(r: CreateAdRequest) -> Self {
        Self {
            title: r.title,
            description: r.description,
            creator_id: r.creator_id,
            created_at: r.created_at,
        }
    }
}
