use chrono::NaiveDateTime;
use uuid::Uuid;

/// Refresh-token row to persist when a pair is issued.
#[derive(Debug, Clone)]
pub struct CreateToken {
    pub user_id: Uuid,
    pub refresh_token: String,
    pub expires_at: NaiveDateTime,
}
