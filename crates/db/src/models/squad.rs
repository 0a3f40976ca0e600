//! Squad entity model, the embedded `Member` record, and DTOs.

use serde::{Deserialize, Serialize};
use teamspace_core::types::EntityId;

use crate::models::user::{Profile, User};

/// Role given to members picked from the user directory without one.
pub const DEFAULT_MEMBER_ROLE: &str = "Member";

/// A person embedded in a squad or space roster.
///
/// `user_id` links back to the [`User`] store; rosters written before the
/// link existed identify people by `name` only, so it is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Member {
    pub name: String,
    pub avatar: String,
    #[serde(default)]
    pub role: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<EntityId>,
}

impl Member {
    /// Roster entry for a directory user, defaulting the role to "Member".
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            avatar: user.avatar.clone(),
            role: user.role().unwrap_or(DEFAULT_MEMBER_ROLE).to_string(),
            user_id: Some(user.id.clone()),
        }
    }
}

/// A reusable named group of people with roles.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Squad {
    pub id: EntityId,
    pub name: String,
    pub description: String,
    pub members: Vec<Member>,
}

/// DTO for creating a squad.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSquad {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub members: Vec<Member>,
}

/// DTO for updating a squad. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateSquad {
    pub name: Option<String>,
    pub description: Option<String>,
    pub members: Option<Vec<Member>>,
}

impl Squad {
    pub fn apply(&mut self, input: &UpdateSquad) {
        if let Some(name) = &input.name {
            self.name = name.clone();
        }
        if let Some(description) = &input.description {
            self.description = description.clone();
        }
        if let Some(members) = &input.members {
            self.members = members.clone();
        }
    }
}
