//! Entity storage for teamspace.
//!
//! Each persisted entity type is a JSON array under one key of a
//! [`KeyValueStore`](kv::KeyValueStore). Repositories wrap a generic
//! write-through [`EntityStore`](store::EntityStore); the [`Workspace`]
//! wires them together with the cross-reference resolver. Task boards and
//! chat are session-only and live in [`board`] and [`chat`].

pub mod board;
pub mod chat;
pub mod kv;
pub mod models;
pub mod repositories;
pub mod resolver;
pub mod seeds;
pub mod store;
pub mod workspace;

pub use kv::{FileKv, KeyValueStore, MemoryKv, StorageError};
pub use workspace::{Workspace, WorkspaceCounts};
