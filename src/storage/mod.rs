//! Storage module for persistence and configuration.

pub mod config;
pub mod gateway;
pub mod slot;

pub use config::{AppConfig, ConfigError, LoggingSettings, MapSettings, StorageBackend, StorageSettings};
pub use gateway::{PersistenceGateway, DEFAULT_SLOT_KEY};
pub use slot::{FileStore, KeyValueStore, MemoryStore, StorageError};
