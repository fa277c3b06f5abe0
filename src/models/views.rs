use serde::Serialize;

use super::{Activity, Participant};

/// Wire representation of an activity as returned by `GET /activities`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActivityView {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub max_participants: i64,
    pub participants: Vec<String>,
    pub current_participants: usize,
}

/// `participants` must already be filtered to `activity` and in signup order.
pub fn activity_view(activity: &Activity, participants: &[Participant]) -> ActivityView {
    let emails: Vec<String> = participants.iter().map(|p| p.email.clone()).collect();

    ActivityView {
        id: activity.id,
        name: activity.name.clone(),
        description: activity.description.clone(),
        schedule: activity.schedule.clone(),
        max_participants: activity.max_participants,
        current_participants: emails.len(),
        participants: emails,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_count_matches_participant_list() {
        let now = Utc::now();
        let activity = Activity {
            id: 1,
            name: "Chess Club".to_string(),
            description: "Learn strategies and compete in chess tournaments".to_string(),
            schedule: "Fridays, 3:30 PM - 5:00 PM".to_string(),
            max_participants: 12,
            created_at: now,
            updated_at: now,
        };
        let participants = vec![
            Participant {
                id: 1,
                email: "michael@mergington.edu".to_string(),
                activity_id: 1,
                signed_up_at: now,
            },
            Participant {
                id: 2,
                email: "daniel@mergington.edu".to_string(),
                activity_id: 1,
                signed_up_at: now,
            },
        ];

        let view = activity_view(&activity, &participants);

        assert_eq!(view.current_participants, 2);
        assert_eq!(
            view.participants,
            vec!["michael@mergington.edu", "daniel@mergington.edu"]
        );
        assert_eq!(view.max_participants, 12);
    }

    #[test]
    fn test_empty_activity() {
        let now = Utc::now();
        let activity = Activity {
            id: 7,
            name: "Math Club".to_string(),
            description: "Solve challenging problems".to_string(),
            schedule: "Tuesdays, 3:30 PM - 4:30 PM".to_string(),
            max_participants: 10,
            created_at: now,
            updated_at: now,
        };

        let view = activity_view(&activity, &[]);
        assert_eq!(view.current_participants, 0);
        assert!(view.participants.is_empty());
    }
}
