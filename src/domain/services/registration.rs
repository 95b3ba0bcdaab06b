use std::sync::Arc;
use serde::Serialize;
use tracing::{debug, info};

use crate::domain::models::{
    event::EventView,
    record::{DeviceId, EVENTS_KEY, REGISTERED_EVENTS_KEY},
};
use crate::domain::services::catalog::{encode, CatalogService};
use crate::error::AppError;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum RegistrationOutcome {
    Registered { event: EventView },
    AlreadyRegistered,
    /// The id is not an upcoming event. Nothing happens and nothing is reported.
    Ignored,
}

impl RegistrationOutcome {
    pub fn message(&self) -> Option<String> {
        match self {
            RegistrationOutcome::Registered { event } => {
                Some(format!("Successfully registered for {}", event.event.name))
            }
            RegistrationOutcome::AlreadyRegistered => {
                Some("You are already registered for this event".to_string())
            }
            RegistrationOutcome::Ignored => None,
        }
    }
}

pub struct RegistrationService {
    catalog: Arc<CatalogService>,
}

impl RegistrationService {
    pub fn new(catalog: Arc<CatalogService>) -> Self {
        Self { catalog }
    }

    /// Moves `event_id` from NotRegistered to Registered for `device`.
    ///
    /// The membership check runs against the persisted registered set while the
    /// catalog write lock is held, and the counter increment and the set append
    /// land in one batch write.
    pub async fn register_for_event(&self, device: DeviceId, event_id: i64) -> Result<RegistrationOutcome, AppError> {
        let _guard = self.catalog.write_lock().lock().await;

        let mut events = self.catalog.stored_events().await?;
        let mut registered = self.catalog.registered_ids(device).await?;

        let Some(event) = events.iter_mut().find(|e| e.id == event_id && e.is_upcoming()) else {
            debug!(event_id, %device, "Registration ignored: not an upcoming event");
            return Ok(RegistrationOutcome::Ignored);
        };

        if registered.contains(&event_id) {
            debug!(event_id, %device, "Already registered");
            return Ok(RegistrationOutcome::AlreadyRegistered);
        }

        event.registrations = event.registrations.saturating_add(1);
        let view = EventView { event: event.clone(), registered: true };
        registered.push(event_id);

        self.catalog.store().put_many(vec![
            (EVENTS_KEY.to_string(), encode(&events)?),
            (device.key(REGISTERED_EVENTS_KEY), encode(&registered)?),
        ]).await?;

        info!(event_id, %device, registrations = view.event.registrations, "Registered for event");
        Ok(RegistrationOutcome::Registered { event: view })
    }
}
