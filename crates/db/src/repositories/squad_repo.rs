//! Repository for the `squads` list.

use std::sync::Arc;

use teamspace_core::changes::{entity_kinds, ChangeSink};
use teamspace_core::clock::Clock;
use teamspace_core::naming::slug_id;

use crate::kv::{keys, KeyValueStore};
use crate::models::squad::{CreateSquad, Squad, UpdateSquad};
use crate::seeds;
use crate::store::{Entity, EntityStore, InsertAt, SeedFn};

impl Entity for Squad {
    type Update = UpdateSquad;
    const KIND: &'static str = entity_kinds::SQUAD;
    const STORAGE_KEY: &'static str = keys::SQUADS;
    const INSERT_AT: InsertAt = InsertAt::Back;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn apply_update(&mut self, update: &UpdateSquad) {
        self.apply(update);
    }
}

/// Provides CRUD operations for squads.
pub struct SquadRepo {
    store: EntityStore<Squad>,
    clock: Arc<dyn Clock>,
}

impl SquadRepo {
    pub fn new(kv: Arc<dyn KeyValueStore>, sink: Arc<dyn ChangeSink>, clock: Arc<dyn Clock>) -> Self {
        let seed: SeedFn<Squad> = Arc::new(seeds::squads);
        Self {
            store: EntityStore::new(kv, sink, seed),
            clock,
        }
    }

    /// Add a squad with id `{slug(name)}-{ms}`.
    pub fn add(&self, input: &CreateSquad) -> Squad {
        let squad = Squad {
            id: slug_id(&input.name, self.clock.now_millis()),
            name: input.name.clone(),
            description: input.description.clone(),
            members: input.members.clone(),
        };
        self.store.insert(squad)
    }

    pub fn list(&self) -> Vec<Squad> {
        self.store.list()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Squad> {
        self.store.get_by_id(id)
    }

    /// Update a squad. Spaces that copied its roster keep their snapshot.
    pub fn update(&self, id: &str, input: &UpdateSquad) -> Option<Squad> {
        self.store.update(id, input)
    }

    pub fn delete(&self, id: &str) -> bool {
        self.store.delete(id)
    }

    pub fn store(&self) -> &EntityStore<Squad> {
        &self.store
    }
}
