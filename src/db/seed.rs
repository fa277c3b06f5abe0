use sqlx::{Connection, SqliteConnection};
use tracing::info;

use super::activities::{count_activities, insert_activity};
use crate::models::NewActivity;

const SAMPLE_ACTIVITIES: [NewActivity<'static>; 9] = [
    NewActivity {
        name: "Chess Club",
        description: "Learn strategies and compete in chess tournaments",
        schedule: "Fridays, 3:30 PM - 5:00 PM",
        max_participants: 12,
    },
    NewActivity {
        name: "Programming Class",
        description: "Learn programming fundamentals and build software projects",
        schedule: "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
        max_participants: 20,
    },
    NewActivity {
        name: "Gym Class",
        description: "Physical education and sports activities",
        schedule: "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
        max_participants: 30,
    },
    NewActivity {
        name: "Soccer Team",
        description: "Join the school soccer team and compete in matches",
        schedule: "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
        max_participants: 22,
    },
    NewActivity {
        name: "Basketball Team",
        description: "Practice and play basketball with the school team",
        schedule: "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
        max_participants: 15,
    },
    NewActivity {
        name: "Art Club",
        description: "Explore your creativity through painting and drawing",
        schedule: "Thursdays, 3:30 PM - 5:00 PM",
        max_participants: 15,
    },
    NewActivity {
        name: "Drama Club",
        description: "Act, direct, and produce plays and performances",
        schedule: "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
        max_participants: 20,
    },
    NewActivity {
        name: "Math Club",
        description: "Solve challenging problems and participate in math competitions",
        schedule: "Tuesdays, 3:30 PM - 4:30 PM",
        max_participants: 10,
    },
    NewActivity {
        name: "Debate Team",
        description: "Develop public speaking and argumentation skills",
        schedule: "Fridays, 4:00 PM - 5:30 PM",
        max_participants: 12,
    },
];

/// Populates the sample activities when the store has none. Returns how many
/// activities were inserted.
pub async fn seed_database(conn: &mut SqliteConnection) -> sqlx::Result<usize> {
    if count_activities(&mut *conn).await? > 0 {
        info!("Activities already present, skipping seed");
        return Ok(0);
    }

    let mut tx = conn.begin().await?;
    for activity in &SAMPLE_ACTIVITIES {
        insert_activity(&mut tx, activity).await?;
    }
    tx.commit().await?;

    info!(count = SAMPLE_ACTIVITIES.len(), "Seeded sample activities");
    Ok(SAMPLE_ACTIVITIES.len())
}
