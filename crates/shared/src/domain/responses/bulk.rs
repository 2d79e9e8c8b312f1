use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Outcome of a skip-duplicates batch insert: rows that already existed are
/// silently left out of the count.
#[derive(Debug, Serialize, Deserialize, ToSchema, Clone)]
pub struct BulkInsertResponse {
    pub inserted: u64,
}
