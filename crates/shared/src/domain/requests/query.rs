use serde::{Deserialize, Serialize};
use utoipa::IntoParams;
use validator::Validate;

pub const MAX_LIST_LIMIT: i64 = 50;

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
pub struct ListQuery {
    /// Maximum number of rows to return; honored only within 1-50.
    pub limit: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, IntoParams)]
pub struct PostListQuery {
    pub limit: Option<i64>,

    /// Filter by rate level: `low`, `medium` or `high`.
    pub rating: Option<String>,
}

/// Out-of-range values fall back to "no limit" rather than erroring.
pub fn clamp_limit(limit: Option<i64>) -> Option<i64> {
    limit.filter(|l| (1..=MAX_LIST_LIMIT).contains(l))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit_accepts_in_range() {
        assert_eq!(clamp_limit(Some(1)), Some(1));
        assert_eq!(clamp_limit(Some(50)), Some(50));
        assert_eq!(clamp_limit(Some(7)), Some(7));
    }

    #[test]
    fn test_clamp_limit_rejects_out_of_range() {
        assert_eq!(clamp_limit(Some(0)), None);
        assert_eq!(clamp_limit(Some(-3)), None);
        assert_eq!(clamp_limit(Some(51)), None);
        assert_eq!(clamp_limit(None), None);
    }
}
