use sqlx::SqliteConnection;
use tracing::debug;

// No unique (activity_id, email) constraint: per-activity uniqueness is
// checked by the signup service.
const DDLS: [&str; 5] = [
    r#"
CREATE TABLE IF NOT EXISTS activities (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  name TEXT NOT NULL UNIQUE,
  description TEXT NOT NULL,
  schedule TEXT NOT NULL,
  max_participants INTEGER NOT NULL CHECK (max_participants > 0),
  created_at TEXT NOT NULL,
  updated_at TEXT NOT NULL
)"#,
    r#"
CREATE TABLE IF NOT EXISTS participants (
  id INTEGER PRIMARY KEY AUTOINCREMENT,
  email TEXT NOT NULL,
  activity_id INTEGER NOT NULL REFERENCES activities(id),
  signed_up_at TEXT NOT NULL
)"#,
    "CREATE INDEX IF NOT EXISTS ix_activities_name ON activities(name)",
    "CREATE INDEX IF NOT EXISTS ix_participants_email ON participants(email)",
    "CREATE INDEX IF NOT EXISTS ix_participants_activity_id ON participants(activity_id)",
];

pub async fn create_tables(conn: &mut SqliteConnection) -> sqlx::Result<()> {
    for ddl in DDLS {
        sqlx::query(ddl).execute(&mut *conn).await?;
    }
    debug!("Schema ensured");
    Ok(())
}
