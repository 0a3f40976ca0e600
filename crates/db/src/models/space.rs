//! Space entity model and DTOs.

use serde::{Deserialize, Serialize};
use teamspace_core::types::EntityId;

use crate::models::deserialize_some;
use crate::models::squad::Member;

/// A project/work area that can inherit its roster from a squad.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Space {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    /// Completion percentage, 0..=100.
    pub progress: u8,
    /// Snapshot of the roster, refreshed from the squad on create/update.
    pub members: Vec<Member>,
    pub squad_id: Option<EntityId>,
}

/// DTO for creating a space. Id, progress and members are derived.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSpace {
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub squad_id: Option<EntityId>,
}

/// DTO for updating a space. All fields are optional.
///
/// `squad_id` is doubly optional: `None` leaves the assignment alone,
/// `Some(None)` unassigns the squad (and clears the roster).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSpace {
    pub name: Option<String>,
    pub description: Option<String>,
    pub progress: Option<u8>,
    #[serde(default, deserialize_with = "deserialize_some")]
    pub squad_id: Option<Option<EntityId>>,
    pub members: Option<Vec<Member>>,
}

impl Space {
    pub fn apply(&mut self, input: &UpdateSpace) {
        if let Some(name) = &input.name {
            self.name = name.clone();
        }
        if let Some(description) = &input.description {
            self.description = description.clone();
        }
        if let Some(progress) = input.progress {
            self.progress = progress;
        }
        if let Some(squad_id) = &input.squad_id {
            self.squad_id = squad_id.clone();
        }
        if let Some(members) = &input.members {
            self.members = members.clone();
        }
    }
}
