//! In-process events for teamspace.
//!
//! - [`EventBus`]: publish/subscribe hub backed by `tokio::sync::broadcast`,
//!   usable as the stores' change sink.
//! - [`TeamEvent`]: the event envelope carried on the bus.
//! - [`ActivityFeed`]: background service keeping the dashboard's capped
//!   activity list.

pub mod bus;
pub mod feed;

pub use bus::{EventBus, TeamEvent};
pub use feed::ActivityFeed;
