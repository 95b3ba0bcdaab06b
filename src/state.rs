use std::sync::Arc;
use crate::domain::ports::RecordStore;
use crate::domain::services::{
    auth_service::AuthService, catalog::CatalogService, registration::RegistrationService,
};
use crate::config::Config;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub record_store: Arc<dyn RecordStore>,
    pub catalog: Arc<CatalogService>,
    pub registration_service: Arc<RegistrationService>,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    /// Wires the services over one record store.
    pub fn new(config: Config, record_store: Arc<dyn RecordStore>) -> Self {
        let catalog = Arc::new(CatalogService::new(record_store.clone()));
        let registration_service = Arc::new(RegistrationService::new(catalog.clone()));
        let auth_service = Arc::new(AuthService::new(
            record_store.clone(),
            config.signin_delay,
            config.otp_delay,
        ));

        Self {
            config,
            record_store,
            catalog,
            registration_service,
            auth_service,
        }
    }
}
