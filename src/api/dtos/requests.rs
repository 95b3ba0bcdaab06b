use crate::domain::models::{event::EventStatus, session::Role};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct SignInRequest {
    pub email: String,
    pub password: String,
}

#[derive(Deserialize)]
pub struct SignInPageQuery {
    pub role: Option<Role>,
}

#[derive(Deserialize)]
pub struct VerifyOtpRequest {
    pub otp: String,
    pub email: String,
    #[serde(default)]
    pub role: Role,
    pub name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRequest {
    pub name: String,
    pub date: NaiveDate,
    pub venue: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    #[serde(default)]
    pub status: EventStatus,
}
