use chrono::Utc;
use sqlx::{Connection, SqliteConnection};

use crate::models::{Activity, NewActivity};

const SQL_LIST_ACTIVITIES: &str = r#"
SELECT id, name, description, schedule, max_participants, created_at, updated_at
FROM activities
ORDER BY id
"#;

const SQL_FIND_BY_NAME: &str = r#"
SELECT id, name, description, schedule, max_participants, created_at, updated_at
FROM activities
WHERE name = ?
LIMIT 1
"#;

const SQL_INSERT_ACTIVITY: &str = r#"
INSERT INTO activities (
  name,
  description,
  schedule,
  max_participants,
  created_at,
  updated_at
) VALUES (?, ?, ?, ?, ?, ?)
"#;

pub async fn list_activities(conn: &mut SqliteConnection) -> sqlx::Result<Vec<Activity>> {
    sqlx::query_as::<_, Activity>(SQL_LIST_ACTIVITIES)
        .fetch_all(&mut *conn)
        .await
}

/// Exact, case-sensitive match.
pub async fn find_activity_by_name(
    conn: &mut SqliteConnection,
    name: &str,
) -> sqlx::Result<Option<Activity>> {
    sqlx::query_as::<_, Activity>(SQL_FIND_BY_NAME)
        .bind(name)
        .fetch_optional(&mut *conn)
        .await
}

pub async fn count_activities(conn: &mut SqliteConnection) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM activities")
        .fetch_one(&mut *conn)
        .await
}

pub async fn insert_activity(
    conn: &mut SqliteConnection,
    activity: &NewActivity<'_>,
) -> sqlx::Result<i64> {
    let now = Utc::now();
    let res = sqlx::query(SQL_INSERT_ACTIVITY)
        .bind(activity.name)
        .bind(activity.description)
        .bind(activity.schedule)
        .bind(activity.max_participants)
        .bind(now)
        .bind(now)
        .execute(&mut *conn)
        .await?;
    Ok(res.last_insert_rowid())
}

/// Deletes an activity together with all of its participants in one
/// transaction. Returns the number of participant rows removed, or `None`
/// when no activity had that id.
pub async fn delete_activity(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<Option<u64>> {
    let mut tx = conn.begin().await?;

    let participants = sqlx::query("DELETE FROM participants WHERE activity_id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    let activities = sqlx::query("DELETE FROM activities WHERE id = ?")
        .bind(id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

    if activities == 0 {
        tx.rollback().await?;
        return Ok(None);
    }

    tx.commit().await?;
    Ok(Some(participants))
}
