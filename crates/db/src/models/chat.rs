//! Chat teams, channels, direct messages and messages.
//!
//! These are session-only: they are derived from spaces and users at load
//! time and never written to the key-value store.

use serde::{Deserialize, Serialize};
use teamspace_core::types::EntityId;

use crate::models::user::User;

/// What a chat team was created for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TeamKind {
    /// Synthesized from a space.
    Project,
    Department,
    Group,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Private,
    Public,
}

/// One chat message. `timestamp` is a display string such as `"10:00 AM"`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: EntityId,
    pub user_id: EntityId,
    pub text: String,
    pub timestamp: String,
}

/// A named channel inside a team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "channel", rename_all = "camelCase")]
pub struct Channel {
    pub id: EntityId,
    pub team_id: EntityId,
    pub name: String,
    pub messages: Vec<Message>,
}

/// A two-person conversation outside any team.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename = "dm")]
pub struct Dm {
    pub id: EntityId,
    pub members: [User; 2],
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatTeam {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TeamKind,
    pub description: String,
    /// User id of the owner.
    pub owner: EntityId,
    pub members: Vec<User>,
    pub visibility: Visibility,
    pub icon: String,
    pub channels: Vec<Channel>,
}

/// DTO for creating a chat team. Id is derived; channels start empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeam {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: TeamKind,
    #[serde(default)]
    pub description: String,
    pub owner: EntityId,
    #[serde(default)]
    pub members: Vec<User>,
    pub visibility: Visibility,
    pub icon: String,
}

/// Address of a conversation.
///
/// Channels and DMs live in separate id namespaces; the tag says which one
/// to search, so a channel can never shadow a DM with the same id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "lowercase")]
pub enum ConversationRef {
    Channel(EntityId),
    Dm(EntityId),
}

impl ConversationRef {
    pub fn id(&self) -> &str {
        match self {
            Self::Channel(id) | Self::Dm(id) => id,
        }
    }
}
