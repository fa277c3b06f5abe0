use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// A student's signup for exactly one activity. `email` is only unique per activity.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Participant {
    pub id: i64,
    pub email: String,
    pub activity_id: i64,
    pub signed_up_at: DateTime<Utc>,
}
