use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::models::ActivityView;
use crate::services::signups;
use crate::state::AppState;
use crate::utils::error::AppError;
use crate::utils::response::{message, MessageResponse};

#[derive(Debug, Deserialize)]
pub struct EmailQuery {
    pub email: Option<String>,
}

impl EmailQuery {
    /// Any non-empty string is accepted; the value is used as given.
    fn into_email(self) -> Result<String, AppError> {
        match self.email {
            Some(email) if !email.is_empty() => Ok(email),
            _ => Err(AppError::ValidationError("email is required".to_string())),
        }
    }
}

/// Unwraps the query so undecodable input goes out as a JSON `AppError`.
fn email_from(query: Result<Query<EmailQuery>, QueryRejection>) -> Result<String, AppError> {
    let Query(query) = query?;
    query.into_email()
}

pub async fn get_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityView>>, AppError> {
    let mut session = state.db.session().await?;
    let activities = signups::list_activities(&mut session).await?;
    Ok(Json(activities))
}

pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let email = email_from(query)?;
    let mut session = state.db.session().await?;

    signups::sign_up(&mut session, &activity_name, &email).await?;

    Ok(message(format!("Signed up {email} for {activity_name}")))
}

pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let email = email_from(query)?;
    let mut session = state.db.session().await?;

    signups::unregister(&mut session, &activity_name, &email).await?;

    Ok(message(format!("Unregistered {email} from {activity_name}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_is_required() {
        for email in [None, Some(String::new())] {
            let err = EmailQuery { email }.into_email().unwrap_err();
            assert!(matches!(err, AppError::ValidationError(_)));
        }
    }

    #[test]
    fn test_email_is_not_normalised() {
        for raw in [" Mixed@Case.edu", "   "] {
            let email = EmailQuery {
                email: Some(raw.to_string()),
            }
            .into_email()
            .unwrap();
            assert_eq!(email, raw);
        }
    }
}
