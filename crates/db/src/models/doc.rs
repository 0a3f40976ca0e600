//! Doc entity model and DTOs.

use serde::{Deserialize, Serialize};
use teamspace_core::types::{EntityId, Timestamp};

use crate::models::deserialize_some;

/// A markdown document, optionally attached to a space.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doc {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    pub content: String,
    pub space_id: Option<EntityId>,
    pub created_at: Timestamp,
}

/// DTO for creating a doc. Id and `created_at` are derived.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateDoc {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub content: String,
    pub space_id: Option<EntityId>,
}

/// DTO for updating a doc. All fields are optional; `created_at` is immutable.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDoc {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub space_id: Option<Option<EntityId>>,
}

impl Doc {
    pub fn apply(&mut self, input: &UpdateDoc) {
        if let Some(title) = &input.title {
            self.title = title.clone();
        }
        if let Some(description) = &input.description {
            self.description = description.clone();
        }
        if let Some(content) = &input.content {
            self.content = content.clone();
        }
        if let Some(space_id) = &input.space_id {
            self.space_id = space_id.clone();
        }
    }

    /// `true` if the doc is attached to `space_id`.
    pub fn belongs_to(&self, space_id: &str) -> bool {
        self.space_id.as_deref() == Some(space_id)
    }
}
