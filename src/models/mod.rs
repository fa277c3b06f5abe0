pub mod activity;
pub mod participant;
pub mod views;

pub use activity::{Activity, NewActivity};
pub use participant::Participant;
pub use views::{activity_view, ActivityView};
