use std::sync::Arc;
use chrono::NaiveDate;
use serde::{de::DeserializeOwned, Serialize};
use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::domain::{
    models::{
        event::{Event, EventStatus, EventView},
        record::{DeviceId, EVENTS_KEY, REGISTERED_EVENTS_KEY},
    },
    ports::RecordStore,
};
use crate::error::AppError;

/// Number of entries shown by the dashboard's "Upcoming Events" widget.
pub const UPCOMING_WIDGET_LIMIT: usize = 3;

/// The stored events of one load, annotated for one device.
#[derive(Debug, Clone, Default)]
pub struct EventCatalog {
    events: Vec<EventView>,
}

impl EventCatalog {
    pub fn new(events: Vec<Event>, registered_ids: &[i64]) -> Self {
        let events = events
            .into_iter()
            .map(|event| {
                let registered = registered_ids.contains(&event.id);
                EventView { event, registered }
            })
            .collect();
        Self { events }
    }

    pub fn events(&self) -> &[EventView] {
        &self.events
    }

    pub fn find(&self, id: i64) -> Option<&EventView> {
        self.events.iter().find(|e| e.event.id == id)
    }

    /// "My Registrations", in stored order.
    pub fn registered(&self) -> Vec<EventView> {
        self.events.iter().filter(|e| e.registered).cloned().collect()
    }

    /// Every upcoming event, in stored order.
    pub fn upcoming(&self) -> Vec<EventView> {
        self.events.iter().filter(|e| e.event.is_upcoming()).cloned().collect()
    }

    /// The first few upcoming events in stored order. Storage order is not
    /// guaranteed to be chronological.
    pub fn upcoming_widget(&self) -> Vec<EventView> {
        self.events
            .iter()
            .filter(|e| e.event.is_upcoming())
            .take(UPCOMING_WIDGET_LIMIT)
            .cloned()
            .collect()
    }
}

/// Fields an admin supplies for a new or edited event.
#[derive(Debug, Clone)]
pub struct EventDraft {
    pub name: String,
    pub date: NaiveDate,
    pub venue: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub status: EventStatus,
}

impl EventDraft {
    fn validate(&self) -> Result<(), AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("Event name is required".into()));
        }
        if self.venue.trim().is_empty() {
            return Err(AppError::Validation("Venue is required".into()));
        }
        Ok(())
    }
}

pub struct CatalogService {
    store: Arc<dyn RecordStore>,
    write_lock: Mutex<()>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store, write_lock: Mutex::new(()) }
    }

    pub fn store(&self) -> &Arc<dyn RecordStore> {
        &self.store
    }

    /// Held by every read-modify-write of the `events` collection.
    pub fn write_lock(&self) -> &Mutex<()> {
        &self.write_lock
    }

    pub async fn load_events(&self, device: DeviceId) -> Result<EventCatalog, AppError> {
        let events = self.stored_events().await?;
        let registered = self.registered_ids(device).await?;
        Ok(EventCatalog::new(events, &registered))
    }

    /// The persisted catalog. Missing or undecodable values read as empty.
    pub async fn stored_events(&self) -> Result<Vec<Event>, AppError> {
        read_collection(self.store.as_ref(), EVENTS_KEY).await
    }

    /// The persisted catalog as the base of a rewrite. An undecodable value is an
    /// error here, so an admin write never replaces events it could not read.
    async fn events_for_update(&self) -> Result<Vec<Event>, AppError> {
        let Some(raw) = self.store.get(EVENTS_KEY).await? else {
            return Ok(Vec::new());
        };
        serde_json::from_slice(&raw)
            .map_err(|e| AppError::InternalWithMsg(format!("Stored event catalog is not decodable: {}", e)))
    }

    pub async fn registered_ids(&self, device: DeviceId) -> Result<Vec<i64>, AppError> {
        read_collection(self.store.as_ref(), &device.key(REGISTERED_EVENTS_KEY)).await
    }

    /// Writes `events` only when the key has never been written.
    pub async fn seed_if_absent(&self, events: Vec<Event>) -> Result<bool, AppError> {
        let _guard = self.write_lock.lock().await;
        if self.store.get(EVENTS_KEY).await?.is_some() {
            return Ok(false);
        }
        info!("Seeding {} demo events", events.len());
        self.store.put(EVENTS_KEY, encode(&events)?).await?;
        Ok(true)
    }

    pub async fn create_event(&self, draft: EventDraft) -> Result<Event, AppError> {
        draft.validate()?;
        let _guard = self.write_lock.lock().await;

        let mut events = self.events_for_update().await?;
        let id = events
            .iter()
            .map(|e| e.id)
            .max()
            .unwrap_or(0)
            .checked_add(1)
            .ok_or_else(|| AppError::InternalWithMsg("Event ids exhausted".into()))?;
        let event = Event {
            id,
            name: draft.name,
            date: draft.date,
            venue: draft.venue,
            description: draft.description,
            image_url: draft.image_url,
            registrations: 0,
            status: draft.status,
        };
        events.push(event.clone());

        self.store.put(EVENTS_KEY, encode(&events)?).await?;
        info!(event_id = event.id, "Event created: {}", event.name);
        Ok(event)
    }

    /// Replaces the editable fields. The registration counter and the id are kept.
    pub async fn update_event(&self, id: i64, draft: EventDraft) -> Result<Event, AppError> {
        draft.validate()?;
        let _guard = self.write_lock.lock().await;

        let mut events = self.events_for_update().await?;
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound("Event not found".into()))?;

        event.name = draft.name;
        event.date = draft.date;
        event.venue = draft.venue;
        event.description = draft.description;
        event.image_url = draft.image_url;
        event.status = draft.status;
        let updated = event.clone();

        self.store.put(EVENTS_KEY, encode(&events)?).await?;
        info!(event_id = id, "Event updated");
        Ok(updated)
    }
}

async fn read_collection<T: DeserializeOwned>(store: &dyn RecordStore, key: &str) -> Result<Vec<T>, AppError> {
    let Some(raw) = store.get(key).await? else {
        return Ok(Vec::new());
    };

    match serde_json::from_slice(&raw) {
        Ok(items) => Ok(items),
        Err(e) => {
            warn!(key, "Stored collection is not decodable, treating it as empty: {}", e);
            Ok(Vec::new())
        }
    }
}

pub(crate) fn encode<T: Serialize + ?Sized>(value: &T) -> Result<Vec<u8>, AppError> {
    serde_json::to_vec(value).map_err(|e| AppError::InternalWithMsg(format!("Encoding failed: {}", e)))
}
