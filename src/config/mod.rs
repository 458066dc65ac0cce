// ==========================================
// Fleetify Import Core - Config Layer
// ==========================================
// Role: import tuning values, key-value store or in-memory struct
// ==========================================

pub mod config_manager;
pub mod import_config;
pub mod import_config_trait;

pub use config_manager::{config_keys, ConfigManager};
pub use import_config::ImportConfig;
pub use import_config_trait::ImportConfigReader;
