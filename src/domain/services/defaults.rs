use chrono::NaiveDate;
use crate::domain::models::{
    announcement::Announcement,
    event::{Event, EventStatus},
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn event(id: i64, name: &str, on: NaiveDate, venue: &str, description: &str, registrations: u32, status: EventStatus) -> Event {
    Event {
        id,
        name: name.to_string(),
        date: on,
        venue: venue.to_string(),
        description: Some(description.to_string()),
        image_url: None,
        registrations,
        status,
    }
}

/// Catalog written on first start when nothing is stored yet.
pub fn demo_events() -> Vec<Event> {
    vec![
        event(1, "Tech Innovate 2024", date(2024, 6, 20), "Main Auditorium",
              "Showcase of student projects, startup pitches and tech talks.", 45, EventStatus::Upcoming),
        event(2, "Annual Cultural Fest", date(2024, 7, 15), "Open Air Theatre",
              "Music, dance and drama performances from every department.", 120, EventStatus::Upcoming),
        event(3, "Coding Competition", date(2024, 8, 5), "CS Building",
              "Three hour competitive programming contest, solo entries.", 60, EventStatus::Upcoming),
        event(4, "Freshers Welcome", date(2024, 3, 10), "Seminar Hall",
              "Orientation and welcome evening for first year students.", 210, EventStatus::Completed),
        event(5, "Robotics Workshop", date(2024, 9, 12), "Mechanical Lab",
              "Hands-on workshop building a line follower robot.", 18, EventStatus::Upcoming),
    ]
}

pub fn announcements() -> Vec<Announcement> {
    vec![
        Announcement {
            id: 1,
            title: "Registrations Open".to_string(),
            content: "Registrations for Tech Innovate 2024 are now open on the student dashboard.".to_string(),
            date: date(2024, 5, 25),
        },
        Announcement {
            id: 2,
            title: "Venue Change".to_string(),
            content: "The Coding Competition moves to the CS Building, Lab 3.".to_string(),
            date: date(2024, 6, 2),
        },
        Announcement {
            id: 3,
            title: "Volunteers Wanted".to_string(),
            content: "Sign up at the student council office to volunteer for the Annual Cultural Fest.".to_string(),
            date: date(2024, 6, 10),
        },
    ]
}
