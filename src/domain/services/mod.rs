pub mod auth_service;
pub mod catalog;
pub mod defaults;
pub mod registration;
