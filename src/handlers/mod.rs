use axum::{response::IntoResponse, response::Redirect, Json};
use serde::Serialize;

pub mod activities;

pub use activities::{get_activities, signup_for_activity, unregister_from_activity};

const LANDING_PAGE: &str = "/static/index.html";

#[derive(Serialize)]
pub struct HealthPayload {
    status: &'static str,
    service: &'static str,
}

pub async fn health_check() -> Json<HealthPayload> {
    Json(HealthPayload {
        status: "ok",
        service: "activities-api",
    })
}

pub async fn root() -> impl IntoResponse {
    Redirect::temporary(LANDING_PAGE)
}
