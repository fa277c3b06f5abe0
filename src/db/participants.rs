use chrono::Utc;
use sqlx::SqliteConnection;

use crate::models::Participant;

const SQL_LIST_PARTICIPANTS: &str = r#"
SELECT id, email, activity_id, signed_up_at
FROM participants
ORDER BY id
"#;

const SQL_FIND_PARTICIPANT: &str = r#"
SELECT id, email, activity_id, signed_up_at
FROM participants
WHERE activity_id = ? AND email = ?
LIMIT 1
"#;

// Capacity and per-activity uniqueness are re-checked inside the INSERT
// itself, so two writers racing for the last seat cannot both land.
const SQL_INSERT_IF_OPEN: &str = r#"
INSERT INTO participants (email, activity_id, signed_up_at)
SELECT ?, a.id, ?
FROM activities a
WHERE a.id = ?
  AND (SELECT COUNT(*) FROM participants p WHERE p.activity_id = a.id) < a.max_participants
  AND NOT EXISTS (
    SELECT 1 FROM participants p WHERE p.activity_id = a.id AND p.email = ?
  )
"#;

/// Every participant of every activity, in signup order.
pub async fn list_participants(conn: &mut SqliteConnection) -> sqlx::Result<Vec<Participant>> {
    sqlx::query_as::<_, Participant>(SQL_LIST_PARTICIPANTS)
        .fetch_all(&mut *conn)
        .await
}

pub async fn find_participant(
    conn: &mut SqliteConnection,
    activity_id: i64,
    email: &str,
) -> sqlx::Result<Option<Participant>> {
    sqlx::query_as::<_, Participant>(SQL_FIND_PARTICIPANT)
        .bind(activity_id)
        .bind(email)
        .fetch_optional(&mut *conn)
        .await
}

pub async fn count_participants(conn: &mut SqliteConnection, activity_id: i64) -> sqlx::Result<i64> {
    sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM participants WHERE activity_id = ?")
        .bind(activity_id)
        .fetch_one(&mut *conn)
        .await
}

/// Inserts the signup unless the activity is full or already has this email.
/// Returns `false` when nothing was written.
pub async fn insert_participant_if_open(
    conn: &mut SqliteConnection,
    activity_id: i64,
    email: &str,
) -> sqlx::Result<bool> {
    let res = sqlx::query(SQL_INSERT_IF_OPEN)
        .bind(email)
        .bind(Utc::now())
        .bind(activity_id)
        .bind(email)
        .execute(&mut *conn)
        .await?;
    Ok(res.rows_affected() == 1)
}

pub async fn delete_participant(conn: &mut SqliteConnection, id: i64) -> sqlx::Result<u64> {
    let res = sqlx::query("DELETE FROM participants WHERE id = ?")
        .bind(id)
        .execute(&mut *conn)
        .await?;
    Ok(res.rows_affected())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::activities::insert_activity;
    use crate::db::test_database;
    use crate::models::NewActivity;

    async fn activity_with_capacity(conn: &mut SqliteConnection, max_participants: i64) -> i64 {
        insert_activity(
            conn,
            &NewActivity {
                name: "Math Club",
                description: "Solve challenging problems and participate in math competitions",
                schedule: "Tuesdays, 3:30 PM - 4:30 PM",
                max_participants,
            },
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_insert_and_find() {
        let db = test_database().await;
        let mut conn = db.session().await.unwrap();
        let activity_id = activity_with_capacity(&mut conn, 10).await;

        assert!(insert_participant_if_open(&mut conn, activity_id, "a@b.com")
            .await
            .unwrap());

        let found = find_participant(&mut conn, activity_id, "a@b.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.email, "a@b.com");
        assert_eq!(found.activity_id, activity_id);
        assert!(find_participant(&mut conn, activity_id, "A@B.com")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_insert_refuses_duplicate_email() {
        let db = test_database().await;
        let mut conn = db.session().await.unwrap();
        let activity_id = activity_with_capacity(&mut conn, 10).await;

        assert!(insert_participant_if_open(&mut conn, activity_id, "a@b.com")
            .await
            .unwrap());
        assert!(!insert_participant_if_open(&mut conn, activity_id, "a@b.com")
            .await
            .unwrap());
        assert_eq!(count_participants(&mut conn, activity_id).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_insert_refuses_when_full() {
        let db = test_database().await;
        let mut conn = db.session().await.unwrap();
        let activity_id = activity_with_capacity(&mut conn, 2).await;

        for email in ["one@b.com", "two@b.com"] {
            assert!(insert_participant_if_open(&mut conn, activity_id, email)
                .await
                .unwrap());
        }
        assert!(!insert_participant_if_open(&mut conn, activity_id, "three@b.com")
            .await
            .unwrap());
        assert_eq!(count_participants(&mut conn, activity_id).await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_insert_for_unknown_activity_writes_nothing() {
        let db = test_database().await;
        let mut conn = db.session().await.unwrap();

        assert!(!insert_participant_if_open(&mut conn, 99, "a@b.com")
            .await
            .unwrap());
        assert!(list_participants(&mut conn).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_participant() {
        let db = test_database().await;
        let mut conn = db.session().await.unwrap();
        let activity_id = activity_with_capacity(&mut conn, 10).await;
        insert_participant_if_open(&mut conn, activity_id, "a@b.com")
            .await
            .unwrap();
        let participant = find_participant(&mut conn, activity_id, "a@b.com")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(delete_participant(&mut conn, participant.id).await.unwrap(), 1);
        assert_eq!(delete_participant(&mut conn, participant.id).await.unwrap(), 0);
        assert_eq!(count_participants(&mut conn, activity_id).await.unwrap(), 0);
    }
}
