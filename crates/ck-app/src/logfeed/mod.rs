//! In-app log stream.
//!
//! [`ChannelLayer`] forwards tracing events into a bounded channel;
//! [`LogFeed`] consumes the channel append-only for the debug view.

pub mod feed;
pub mod layer;

pub use feed::LogFeed;
pub use layer::ChannelLayer;
