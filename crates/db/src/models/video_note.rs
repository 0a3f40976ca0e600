//! Video note entity model and DTOs.

use serde::{Deserialize, Serialize};
use teamspace_core::types::{EntityId, Timestamp};

use crate::models::deserialize_some;

/// A recorded walkthrough with an optional markdown body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoNote {
    pub id: EntityId,
    pub title: String,
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    pub space_id: Option<EntityId>,
    pub created_at: Timestamp,
    pub video_url: Option<String>,
}

/// DTO for creating a video note. Id and `created_at` are derived.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVideoNote {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub content: Option<String>,
    pub space_id: Option<EntityId>,
    pub video_url: Option<String>,
}

/// DTO for updating a video note. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVideoNote {
    pub title: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub space_id: Option<Option<EntityId>>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub video_url: Option<Option<String>>,
}

impl VideoNote {
    pub fn apply(&mut self, input: &UpdateVideoNote) {
        if let Some(title) = &input.title {
            self.title = title.clone();
        }
        if let Some(description) = &input.description {
            self.description = description.clone();
        }
        if let Some(content) = &input.content {
            self.content = Some(content.clone());
        }
        if let Some(space_id) = &input.space_id {
            self.space_id = space_id.clone();
        }
        if let Some(video_url) = &input.video_url {
            self.video_url = video_url.clone();
        }
    }

    pub fn belongs_to(&self, space_id: &str) -> bool {
        self.space_id.as_deref() == Some(space_id)
    }
}
