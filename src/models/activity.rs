use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// An extracurricular offering. Owns its participants: deleting an activity
/// goes through `db::activities::delete_activity`, which removes them first.
#[derive(Debug, Clone, PartialEq, FromRow)]
pub struct Activity {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields supplied when creating an activity; ids and timestamps come from the store.
#[derive(Debug, Clone)]
pub struct NewActivity<'a> {
    pub name: &'a str,
    pub description: &'a str,
    pub schedule: &'a str,
    pub max_participants: i64,
}
