//! Port interfaces for the application layer
//!
//! Ports define the contract between the application logic (use cases and
//! services) and the backend process that owns persistence, capability
//! checks and the update machinery. Implementations live outside this crate;
//! the core stays independent of the transport.

pub mod capability;
pub mod dictionary;
pub mod settings;
pub mod system_settings;
pub mod updater;

pub use capability::CapabilityPort;
pub use dictionary::DictionaryPort;
pub use settings::SettingsPort;
pub use system_settings::SystemSettingsPort;
pub use updater::UpdaterPort;
