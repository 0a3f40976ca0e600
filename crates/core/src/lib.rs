//! Shared domain primitives for the teamspace data layer.
//!
//! This crate has zero internal dependencies so that the store, the event bus
//! and the worker binary can all agree on ids, clocks, board columns and the
//! change-notification seam.

pub mod activity;
pub mod board;
pub mod changes;
pub mod clock;
pub mod error;
pub mod naming;
pub mod types;
pub mod validation;
