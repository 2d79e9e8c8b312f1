use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// One issued refresh credential. A row is live iff `expires_at` is still in
/// the future; there is no separate revoked flag.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Token {
    pub id: Uuid,
    pub refresh_token: String,
    pub user_id: Uuid,
    pub expires_at: NaiveDateTime,
    pub created_at: Option<NaiveDateTime>,
}
