pub mod memory_record_store;
pub mod postgres_record_store;
pub mod sqlite_record_store;
