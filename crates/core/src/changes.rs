//! Change notifications emitted by the entity stores after every mutation.
//!
//! The store layer only knows the [`ChangeSink`] trait; the event bus crate
//! implements it so the view layer and background services can react to
//! cache changes without the store depending on tokio.

use serde::Serialize;

use crate::types::EntityId;

/// Known entity kinds.
pub mod entity_kinds {
    pub const USER: &str = "user";
    pub const SQUAD: &str = "squad";
    pub const SPACE: &str = "space";
    pub const DOC: &str = "doc";
    pub const VIDEO_NOTE: &str = "video_note";
}

/// What happened to the entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeAction {
    Created,
    Updated,
    Deleted,
}

impl ChangeAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Created => "created",
            Self::Updated => "updated",
            Self::Deleted => "deleted",
        }
    }
}

/// One committed mutation of one entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EntityChange {
    /// One of [`entity_kinds`].
    pub entity: &'static str,
    pub entity_id: EntityId,
    pub action: ChangeAction,
    /// Display name or title of the entity at the time of the change.
    pub label: Option<String>,
}

impl EntityChange {
    pub fn new(entity: &'static str, entity_id: impl Into<EntityId>, action: ChangeAction) -> Self {
        Self {
            entity,
            entity_id: entity_id.into(),
            action,
            label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Dot-separated event name, e.g. `"space.created"`.
    pub fn event_type(&self) -> String {
        format!("{}.{}", self.entity, self.action.as_str())
    }
}

/// Receiver of store change notifications.
pub trait ChangeSink: Send + Sync {
    fn notify(&self, change: EntityChange);
}

/// Sink that discards every notification.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopSink;

impl ChangeSink for NoopSink {
    fn notify(&self, _change: EntityChange) {}
}
