use std::collections::HashMap;

use sqlx::SqliteConnection;
use tracing::info;

use crate::db::{activities, participants};
use crate::models::{activity_view, ActivityView, Participant};
use crate::utils::error::AppError;

pub async fn list_activities(conn: &mut SqliteConnection) -> Result<Vec<ActivityView>, AppError> {
    let activities = activities::list_activities(&mut *conn).await?;

    let mut by_activity: HashMap<i64, Vec<Participant>> = HashMap::new();
    for participant in participants::list_participants(&mut *conn).await? {
        by_activity
            .entry(participant.activity_id)
            .or_default()
            .push(participant);
    }

    Ok(activities
        .iter()
        .map(|activity| {
            let signed_up = by_activity
                .get(&activity.id)
                .map(Vec::as_slice)
                .unwrap_or_default();
            activity_view(activity, signed_up)
        })
        .collect())
}

pub async fn sign_up(
    conn: &mut SqliteConnection,
    activity_name: &str,
    email: &str,
) -> Result<(), AppError> {
    let activity = activities::find_activity_by_name(&mut *conn, activity_name)
        .await?
        .ok_or_else(AppError::activity_not_found)?;

    if participants::find_participant(&mut *conn, activity.id, email)
        .await?
        .is_some()
    {
        return Err(AppError::DuplicateSignup);
    }

    let current = participants::count_participants(&mut *conn, activity.id).await?;
    if current >= activity.max_participants {
        return Err(AppError::CapacityExceeded);
    }

    if !participants::insert_participant_if_open(&mut *conn, activity.id, email).await? {
        // Another request took the seat or registered this email between the
        // checks above and the write.
        return Err(rejection_reason(&mut *conn, activity.id, email).await?);
    }

    info!(activity = %activity.name, email, "Signed up participant");
    Ok(())
}

/// Why a conditional insert wrote nothing: the email is already there, or
/// the activity filled up.
async fn rejection_reason(
    conn: &mut SqliteConnection,
    activity_id: i64,
    email: &str,
) -> sqlx::Result<AppError> {
    let duplicate = participants::find_participant(&mut *conn, activity_id, email)
        .await?
        .is_some();
    Ok(if duplicate {
        AppError::DuplicateSignup
    } else {
        AppError::CapacityExceeded
    })
}

pub async fn unregister(
    conn: &mut SqliteConnection,
    activity_name: &str,
    email: &str,
) -> Result<(), AppError> {
    let activity = activities::find_activity_by_name(&mut *conn, activity_name)
        .await?
        .ok_or_else(AppError::activity_not_found)?;

    let participant = participants::find_participant(&mut *conn, activity.id, email)
        .await?
        .ok_or(AppError::NotSignedUp)?;

    participants::delete_participant(&mut *conn, participant.id).await?;

    info!(activity = %activity.name, email, "Unregistered participant");
    Ok(())
}
