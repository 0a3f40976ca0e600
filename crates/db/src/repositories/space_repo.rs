//! Repository for the `spaces` list.

use std::sync::Arc;

use teamspace_core::changes::{entity_kinds, ChangeSink};
use teamspace_core::clock::Clock;
use teamspace_core::naming::slug_id;

use crate::kv::{keys, KeyValueStore};
use crate::models::space::{CreateSpace, Space, UpdateSpace};
use crate::models::squad::Squad;
use crate::resolver::project_members;
use crate::seeds;
use crate::store::{Entity, EntityStore, InsertAt, SeedFn};

impl Entity for Space {
    type Update = UpdateSpace;
    const KIND: &'static str = entity_kinds::SPACE;
    const STORAGE_KEY: &'static str = keys::SPACES;
    const INSERT_AT: InsertAt = InsertAt::Back;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn apply_update(&mut self, update: &UpdateSpace) {
        self.apply(update);
    }
}

/// Provides CRUD operations for spaces.
///
/// Roster projection needs the squad store, so `add` and `update` take the
/// squad (or a lookup) from the caller; see
/// [`Workspace`](crate::workspace::Workspace) for the wired-up versions.
pub struct SpaceRepo {
    store: EntityStore<Space>,
    clock: Arc<dyn Clock>,
}

impl SpaceRepo {
    pub fn new(kv: Arc<dyn KeyValueStore>, sink: Arc<dyn ChangeSink>, clock: Arc<dyn Clock>) -> Self {
        let seed: SeedFn<Space> = Arc::new(seeds::spaces);
        Self {
            store: EntityStore::new(kv, sink, seed),
            clock,
        }
    }

    /// Add a space with id `{slug(name)}-{ms}`, zero progress, and the
    /// squad's projected roster.
    ///
    /// `squad` is the squad referenced by `input.squad_id`, if it exists; an
    /// unknown squad id yields an empty roster.
    pub fn add(&self, input: &CreateSpace, squad: Option<&Squad>) -> Space {
        let space = Space {
            id: slug_id(&input.name, self.clock.now_millis()),
            name: input.name.clone(),
            description: input.description.clone(),
            progress: 0,
            members: squad.map(project_members).unwrap_or_default(),
            squad_id: input.squad_id.clone(),
        };
        self.store.insert(space)
    }

    pub fn list(&self) -> Vec<Space> {
        self.store.list()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Space> {
        self.store.get_by_id(id)
    }

    /// Update a space.
    ///
    /// When the patch touches `squad_id`, the roster is recomputed from the
    /// newly referenced squad (resolved with `lookup_squad`), overriding any
    /// `members` in the patch. Unassigning the squad clears the roster.
    pub fn update(
        &self,
        id: &str,
        input: &UpdateSpace,
        lookup_squad: impl Fn(&str) -> Option<Squad>,
    ) -> Option<Space> {
        match &input.squad_id {
            Some(squad_id) => {
                let members = squad_id
                    .as_deref()
                    .and_then(lookup_squad)
                    .map(|squad| project_members(&squad))
                    .unwrap_or_default();
                let patch = UpdateSpace {
                    members: Some(members),
                    ..input.clone()
                };
                self.store.update(id, &patch)
            }
            None => self.store.update(id, input),
        }
    }

    pub fn delete(&self, id: &str) -> bool {
        self.store.delete(id)
    }

    pub fn store(&self) -> &EntityStore<Space> {
        &self.store
    }
}
