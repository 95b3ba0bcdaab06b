use serde::{Deserialize, Serialize};
use chrono::NaiveDate;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Announcement {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub date: NaiveDate,
}
