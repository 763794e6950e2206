//! # ck-core
//!
//! Core domain models and business logic for clipkana.
//!
//! This crate contains pure business logic without any infrastructure dependencies.

// Public module exports
pub mod dictionary;
pub mod logging;
pub mod ports;
pub mod settings;
pub mod update;

// Re-export commonly used types at the crate root
pub use dictionary::{ConversionMethod, DictionaryEntry, MoveDirection};
pub use logging::{LogLevel, LogRecord};
pub use settings::{ConstraintEngine, OnCopyAction, Settings};
pub use update::{DownloadEvent, DownloadProgress, UpdateInfo, UpdateStatus};
