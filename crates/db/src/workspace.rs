//! The per-session aggregate wiring every store to one backend.

use std::collections::HashSet;
use std::sync::Arc;

use teamspace_core::changes::{ChangeSink, NoopSink};
use teamspace_core::clock::{Clock, SystemClock};

use crate::board::TaskBoard;
use crate::chat::ChatState;
use crate::kv::{KeyValueStore, MemoryKv};
use crate::models::chat::ChatTeam;
use crate::models::doc::Doc;
use crate::models::space::{CreateSpace, Space, UpdateSpace};
use crate::models::squad::Member;
use crate::models::video_note::VideoNote;
use crate::repositories::{DocRepo, SpaceRepo, SquadRepo, UserRepo, VideoNoteRepo};
use crate::resolver;
use crate::seeds;

/// Number of entities in each persisted list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkspaceCounts {
    pub users: usize,
    pub squads: usize,
    pub spaces: usize,
    pub docs: usize,
    pub video_notes: usize,
}

/// All entity stores of one session, sharing a backend, clock and change sink.
///
/// Construct one per session and share it behind an `Arc`.
pub struct Workspace {
    clock: Arc<dyn Clock>,
    pub users: UserRepo,
    pub squads: SquadRepo,
    pub spaces: SpaceRepo,
    pub docs: DocRepo,
    pub video_notes: VideoNoteRepo,
}

impl Workspace {
    /// Workspace over `kv` with the system clock and no change listener.
    pub fn new(kv: Arc<dyn KeyValueStore>) -> Self {
        Self::with_parts(kv, Arc::new(SystemClock::new()), Arc::new(NoopSink))
    }

    /// Ephemeral workspace backed by a fresh [`MemoryKv`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryKv::new()))
    }

    pub fn with_parts(
        kv: Arc<dyn KeyValueStore>,
        clock: Arc<dyn Clock>,
        sink: Arc<dyn ChangeSink>,
    ) -> Self {
        Self {
            users: UserRepo::new(kv.clone(), sink.clone(), clock.clone()),
            squads: SquadRepo::new(kv.clone(), sink.clone(), clock.clone()),
            spaces: SpaceRepo::new(kv.clone(), sink.clone(), clock.clone()),
            docs: DocRepo::new(kv.clone(), sink.clone(), clock.clone()),
            video_notes: VideoNoteRepo::new(kv, sink, clock.clone()),
            clock,
        }
    }

    pub fn clock(&self) -> &Arc<dyn Clock> {
        &self.clock
    }

    /// Load every list, seeding the ones that are absent.
    pub fn counts(&self) -> WorkspaceCounts {
        WorkspaceCounts {
            users: self.users.store().len(),
            squads: self.squads.store().len(),
            spaces: self.spaces.store().len(),
            docs: self.docs.store().len(),
            video_notes: self.video_notes.store().len(),
        }
    }

    /// Drop every cache so the next read reloads from storage.
    pub fn invalidate_all(&self) {
        self.users.store().invalidate();
        self.squads.store().invalidate();
        self.spaces.store().invalidate();
        self.docs.store().invalidate();
        self.video_notes.store().invalidate();
    }

    // -----------------------------------------------------------------------
    // Spaces
    // -----------------------------------------------------------------------

    /// Add a space whose roster is projected from the referenced squad.
    pub fn add_space(&self, input: &CreateSpace) -> Space {
        let squad = input
            .squad_id
            .as_deref()
            .and_then(|id| self.squads.get_by_id(id));
        self.spaces.add(input, squad.as_ref())
    }

    /// Update a space, re-projecting its roster when the squad changes.
    pub fn update_space(&self, id: &str, input: &UpdateSpace) -> Option<Space> {
        self.spaces
            .update(id, input, |squad_id| self.squads.get_by_id(squad_id))
    }

    /// Roster of `space` as of now, following later edits to its squad.
    pub fn resolve_space_members(&self, space: &Space) -> Vec<Member> {
        resolver::live_space_members(space, &self.squads.list())
    }

    /// The space with `id`, its `members` replaced by the live roster.
    pub fn space_with_live_members(&self, id: &str) -> Option<Space> {
        let mut space = self.spaces.get_by_id(id)?;
        space.members = self.resolve_space_members(&space);
        Some(space)
    }

    /// Every space with its live roster, in store order.
    pub fn spaces_with_live_members(&self) -> Vec<Space> {
        let squads = self.squads.list();
        self.spaces
            .list()
            .into_iter()
            .map(|mut space| {
                space.members = resolver::live_space_members(&space, &squads);
                space
            })
            .collect()
    }

    pub fn docs_for_space(&self, space_id: &str) -> Vec<Doc> {
        self.docs.list_for_space(space_id)
    }

    pub fn video_notes_for_space(&self, space_id: &str) -> Vec<VideoNote> {
        self.video_notes.list_for_space(space_id)
    }

    /// Docs pointing at a space that no longer exists.
    pub fn orphaned_docs(&self) -> Vec<Doc> {
        let spaces = self.space_ids();
        self.docs.store().filter(|d| {
            d.space_id
                .as_deref()
                .is_some_and(|id| !spaces.contains(id))
        })
    }

    /// Video notes pointing at a space that no longer exists.
    pub fn orphaned_video_notes(&self) -> Vec<VideoNote> {
        let spaces = self.space_ids();
        self.video_notes.store().filter(|v| {
            v.space_id
                .as_deref()
                .is_some_and(|id| !spaces.contains(id))
        })
    }

    fn space_ids(&self) -> HashSet<String> {
        self.spaces.list().into_iter().map(|s| s.id).collect()
    }

    // -----------------------------------------------------------------------
    // Derived views
    // -----------------------------------------------------------------------

    /// One project team per space, followed by the standalone seed teams.
    pub fn chat_teams(&self) -> Vec<ChatTeam> {
        let users = self.users.list();
        let mut teams = resolver::synthesize_chat_teams(&self.spaces_with_live_members(), &users);
        teams.extend(seeds::chat_teams(&users));
        teams
    }

    /// Fresh chat state for this session.
    pub fn chat_state(&self) -> ChatState {
        let users = self.users.list();
        ChatState::new(
            self.chat_teams(),
            seeds::direct_messages(&users),
            self.clock.clone(),
        )
    }

    /// Everyone on any space or squad roster, once per name.
    ///
    /// Space rosters come first; a name that also appears on a squad takes
    /// the squad's fields.
    pub fn team_roster(&self) -> Vec<Member> {
        let spaces = self.spaces_with_live_members();
        let squads = self.squads.list();
        resolver::unique_members(
            spaces
                .iter()
                .map(|s| s.members.as_slice())
                .chain(squads.iter().map(|s| s.members.as_slice())),
        )
    }

    /// Fresh task board for this session.
    pub fn task_board(&self) -> TaskBoard {
        seeds::task_board()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_use_seeds_every_list() {
        let ws = Workspace::in_memory();
        let counts = ws.counts();
        assert_eq!(counts.users, 20);
        assert_eq!(counts.squads, 3);
        assert_eq!(counts.spaces, 4);
        assert_eq!(counts.docs, 2);
        assert_eq!(counts.video_notes, 2);
    }

    #[test]
    fn chat_teams_put_space_teams_before_seed_teams() {
        let ws = Workspace::in_memory();
        let ids: Vec<_> = ws.chat_teams().into_iter().map(|t| t.id).collect();
        let mut expected: Vec<_> = ws.spaces.list().into_iter().map(|s| s.id).collect();
        expected.extend(["t2".to_string(), "t3".to_string()]);
        assert_eq!(ids, expected);
    }
}
