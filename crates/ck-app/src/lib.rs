//! # ck-app
//!
//! Application layer for clipkana: use cases over the backend ports plus the
//! two background services (availability poller, update controller) and the
//! log feed.

pub mod logfeed;
pub mod services;
pub mod usecases;

pub use services::availability::{AvailabilityPoller, CapabilityEnabled, PollerGate};
pub use services::update::UpdateController;
