//! Repository for the `docs` list.

use std::sync::Arc;

use teamspace_core::changes::{entity_kinds, ChangeSink};
use teamspace_core::clock::Clock;
use teamspace_core::naming::prefixed_id;

use crate::kv::{keys, KeyValueStore};
use crate::models::doc::{CreateDoc, Doc, UpdateDoc};
use crate::seeds;
use crate::store::{Entity, EntityStore, InsertAt, SeedFn};

impl Entity for Doc {
    type Update = UpdateDoc;
    const KIND: &'static str = entity_kinds::DOC;
    const STORAGE_KEY: &'static str = keys::DOCS;
    const INSERT_AT: InsertAt = InsertAt::Front;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn apply_update(&mut self, update: &UpdateDoc) {
        self.apply(update);
    }
}

/// Provides CRUD operations for docs. New docs are listed first.
pub struct DocRepo {
    store: EntityStore<Doc>,
    clock: Arc<dyn Clock>,
}

impl DocRepo {
    pub fn new(kv: Arc<dyn KeyValueStore>, sink: Arc<dyn ChangeSink>, clock: Arc<dyn Clock>) -> Self {
        let seed_clock = clock.clone();
        let seed: SeedFn<Doc> = Arc::new(move || seeds::docs(seed_clock.now()));
        Self {
            store: EntityStore::new(kv, sink, seed),
            clock,
        }
    }

    /// Add a doc with id `doc-{ms}` stamped with the current time.
    pub fn add(&self, input: &CreateDoc) -> Doc {
        let now = self.clock.now();
        let doc = Doc {
            id: prefixed_id("doc", now.timestamp_millis()),
            title: input.title.clone(),
            description: input.description.clone(),
            content: input.content.clone(),
            space_id: input.space_id.clone(),
            created_at: now,
        };
        self.store.insert(doc)
    }

    pub fn list(&self) -> Vec<Doc> {
        self.store.list()
    }

    pub fn get_by_id(&self, id: &str) -> Option<Doc> {
        self.store.get_by_id(id)
    }

    /// Docs attached to `space_id`.
    pub fn list_for_space(&self, space_id: &str) -> Vec<Doc> {
        self.store.filter(|d| d.belongs_to(space_id))
    }

    pub fn update(&self, id: &str, input: &UpdateDoc) -> Option<Doc> {
        self.store.update(id, input)
    }

    pub fn delete(&self, id: &str) -> bool {
        self.store.delete(id)
    }

    pub fn store(&self) -> &EntityStore<Doc> {
        &self.store
    }
}
