//! Repository for the `videoNotes` list.

use std::sync::Arc;

use teamspace_core::changes::{entity_kinds, ChangeSink};
use teamspace_core::clock::Clock;
use teamspace_core::naming::prefixed_id;

use crate::kv::{keys, KeyValueStore};
use crate::models::video_note::{CreateVideoNote, UpdateVideoNote, VideoNote};
use crate::seeds;
use crate::store::{Entity, EntityStore, InsertAt, SeedFn};

impl Entity for VideoNote {
    type Update = UpdateVideoNote;
    const KIND: &'static str = entity_kinds::VIDEO_NOTE;
    const STORAGE_KEY: &'static str = keys::VIDEO_NOTES;
    const INSERT_AT: InsertAt = InsertAt::Front;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.title
    }

    fn apply_update(&mut self, update: &UpdateVideoNote) {
        self.apply(update);
    }
}

/// Provides CRUD operations for video notes. New notes are listed first.
pub struct VideoNoteRepo {
    store: EntityStore<VideoNote>,
    clock: Arc<dyn Clock>,
}

impl VideoNoteRepo {
    pub fn new(kv: Arc<dyn KeyValueStore>, sink: Arc<dyn ChangeSink>, clock: Arc<dyn Clock>) -> Self {
        let seed_clock = clock.clone();
        let seed: SeedFn<VideoNote> = Arc::new(move || seeds::video_notes(seed_clock.now()));
        Self {
            store: EntityStore::new(kv, sink, seed),
            clock,
        }
    }

    /// Add a video note with id `vn-{ms}` stamped with the current time.
    pub fn add(&self, input: &CreateVideoNote) -> VideoNote {
        let now = self.clock.now();
        let note = VideoNote {
            id: prefixed_id("vn", now.timestamp_millis()),
            title: input.title.clone(),
            description: input.description.clone(),
            content: input.content.clone(),
            space_id: input.space_id.clone(),
            created_at: now,
            video_url: input.video_url.clone(),
        };
        self.store.insert(note)
    }

    pub fn list(&self) -> Vec<VideoNote> {
        self.store.list()
    }

    pub fn get_by_id(&self, id: &str) -> Option<VideoNote> {
        self.store.get_by_id(id)
    }

    pub fn list_for_space(&self, space_id: &str) -> Vec<VideoNote> {
        self.store.filter(|n| n.belongs_to(space_id))
    }

    pub fn update(&self, id: &str, input: &UpdateVideoNote) -> Option<VideoNote> {
        self.store.update(id, input)
    }

    pub fn delete(&self, id: &str) -> bool {
        self.store.delete(id)
    }

    pub fn store(&self) -> &EntityStore<VideoNote> {
        &self.store
    }
}
