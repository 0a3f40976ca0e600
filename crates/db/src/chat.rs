//! Session-only chat state: teams, channels, direct messages.
//!
//! Nothing here is persisted. A [`ChatState`] is built from the workspace at
//! load time (see [`Workspace::chat_state`](crate::workspace::Workspace::chat_state))
//! and mutated in memory for the rest of the session.

use std::sync::Arc;

use teamspace_core::clock::Clock;
use teamspace_core::error::CoreError;
use teamspace_core::naming::prefixed_id;
use teamspace_core::validation::{require_non_empty, validate_name};

use crate::models::chat::{Channel, ChatTeam, ConversationRef, CreateTeam, Dm, Message};
use crate::models::user::User;
use crate::resolver::all_chat_members;
use crate::seeds::CURRENT_USER_ID;

/// Display format of message timestamps, e.g. `03:15 PM`.
pub const MESSAGE_TIME_FORMAT: &str = "%I:%M %p";

pub struct ChatState {
    teams: Vec<ChatTeam>,
    dms: Vec<Dm>,
    clock: Arc<dyn Clock>,
}

impl ChatState {
    pub fn new(teams: Vec<ChatTeam>, dms: Vec<Dm>, clock: Arc<dyn Clock>) -> Self {
        Self { teams, dms, clock }
    }

    pub fn teams(&self) -> &[ChatTeam] {
        &self.teams
    }

    pub fn dms(&self) -> &[Dm] {
        &self.dms
    }

    pub fn team(&self, team_id: &str) -> Option<&ChatTeam> {
        self.teams.iter().find(|t| t.id == team_id)
    }

    pub fn channel(&self, channel_id: &str) -> Option<&Channel> {
        self.teams
            .iter()
            .flat_map(|t| t.channels.iter())
            .find(|c| c.id == channel_id)
    }

    pub fn dm(&self, dm_id: &str) -> Option<&Dm> {
        self.dms.iter().find(|d| d.id == dm_id)
    }

    /// Messages of a conversation, oldest first.
    pub fn messages(&self, conversation: &ConversationRef) -> Option<&[Message]> {
        match conversation {
            ConversationRef::Channel(id) => self.channel(id).map(|c| c.messages.as_slice()),
            ConversationRef::Dm(id) => self.dm(id).map(|d| d.messages.as_slice()),
        }
    }

    /// Everyone in any team or DM, deduplicated by user id.
    pub fn members(&self) -> Vec<User> {
        all_chat_members(&self.teams, &self.dms)
    }

    /// Turn a bare conversation id into a [`ConversationRef`].
    ///
    /// Fails with `Conflict` when a channel and a DM share the id, and with
    /// `NotFound` when neither does.
    pub fn resolve_conversation(&self, id: &str) -> Result<ConversationRef, CoreError> {
        match (self.channel(id).is_some(), self.dm(id).is_some()) {
            (true, true) => Err(CoreError::Conflict(format!(
                "conversation id {id} names both a channel and a direct message"
            ))),
            (true, false) => Ok(ConversationRef::Channel(id.to_string())),
            (false, true) => Ok(ConversationRef::Dm(id.to_string())),
            (false, false) => Err(CoreError::NotFound {
                entity: "conversation",
                id: id.to_string(),
            }),
        }
    }

    /// Append `message` to the addressed conversation.
    ///
    /// Returns `false` and leaves everything untouched if the conversation
    /// does not exist.
    pub fn append_message(&mut self, message: Message, conversation: &ConversationRef) -> bool {
        let messages = match conversation {
            ConversationRef::Channel(id) => self
                .teams
                .iter_mut()
                .flat_map(|t| t.channels.iter_mut())
                .find(|c| &c.id == id)
                .map(|c| &mut c.messages),
            ConversationRef::Dm(id) => self
                .dms
                .iter_mut()
                .find(|d| &d.id == id)
                .map(|d| &mut d.messages),
        };
        match messages {
            Some(messages) => {
                messages.push(message);
                true
            }
            None => false,
        }
    }

    /// Post `text` as the current user.
    pub fn send_message(
        &mut self,
        text: &str,
        conversation: &ConversationRef,
    ) -> Result<Message, CoreError> {
        require_non_empty("text", text)?;
        let now = self.clock.now();
        let message = Message {
            id: prefixed_id("m", now.timestamp_millis()),
            user_id: CURRENT_USER_ID.to_string(),
            text: text.trim().to_string(),
            timestamp: now.format(MESSAGE_TIME_FORMAT).to_string(),
        };
        if !self.append_message(message.clone(), conversation) {
            return Err(CoreError::NotFound {
                entity: "conversation",
                id: conversation.id().to_string(),
            });
        }
        tracing::debug!(message_id = %message.id, conversation = conversation.id(), "Sent message");
        Ok(message)
    }

    /// Add a team with id `t-{ms}` and no channels.
    pub fn create_team(&mut self, input: &CreateTeam) -> Result<ChatTeam, CoreError> {
        validate_name("name", &input.name)?;
        let team = ChatTeam {
            id: prefixed_id("t", self.clock.now_millis()),
            name: input.name.trim().to_string(),
            kind: input.kind,
            description: input.description.clone(),
            owner: input.owner.clone(),
            members: input.members.clone(),
            visibility: input.visibility,
            icon: input.icon.clone(),
            channels: Vec::new(),
        };
        self.teams.push(team.clone());
        Ok(team)
    }

    /// Add an empty channel with id `c-{ms}` to `team_id`.
    pub fn create_channel(&mut self, name: &str, team_id: &str) -> Result<Channel, CoreError> {
        validate_name("name", name)?;
        let id = prefixed_id("c", self.clock.now_millis());
        let team = self
            .teams
            .iter_mut()
            .find(|t| t.id == team_id)
            .ok_or_else(|| CoreError::NotFound {
                entity: "team",
                id: team_id.to_string(),
            })?;
        let channel = Channel {
            id,
            team_id: team_id.to_string(),
            name: name.trim().to_string(),
            messages: Vec::new(),
        };
        team.channels.push(channel.clone());
        Ok(channel)
    }

    /// Remove a channel from whichever team holds it.
    pub fn delete_channel(&mut self, channel_id: &str) -> bool {
        let mut removed = false;
        for team in &mut self.teams {
            let before = team.channels.len();
            team.channels.retain(|c| c.id != channel_id);
            removed |= team.channels.len() != before;
        }
        removed
    }

    /// Remove a team and all its channels.
    pub fn delete_team(&mut self, team_id: &str) -> bool {
        let before = self.teams.len();
        self.teams.retain(|t| t.id != team_id);
        self.teams.len() != before
    }
}
