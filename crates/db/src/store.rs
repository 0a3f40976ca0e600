//! Generic write-through entity store.
//!
//! An [`EntityStore`] owns one persisted list: it is materialized from the
//! key-value backend on first use (seeded when absent), cached in memory, and
//! rewritten in full after every mutation. Storage failures never reach the
//! caller; they are logged and the in-memory cache stays authoritative.

use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};

use serde::de::DeserializeOwned;
use serde::Serialize;
use teamspace_core::changes::{ChangeAction, ChangeSink, EntityChange};

use crate::kv::{KeyValueStore, StorageError};

/// Where [`EntityStore::insert`] places new entities.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertAt {
    Front,
    Back,
}

/// A type persisted as one list under one storage key.
pub trait Entity: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Patch type applied by [`EntityStore::update`].
    type Update;

    /// One of `teamspace_core::changes::entity_kinds`.
    const KIND: &'static str;
    const STORAGE_KEY: &'static str;
    const INSERT_AT: InsertAt;

    fn id(&self) -> &str;

    /// Display name or title, attached to change notifications.
    fn label(&self) -> &str;

    /// Shallow-merge `update` into `self`.
    fn apply_update(&mut self, update: &Self::Update);
}

/// Produces the default list for an empty store.
pub type SeedFn<T> = Arc<dyn Fn() -> Vec<T> + Send + Sync>;

pub struct EntityStore<T: Entity> {
    kv: Arc<dyn KeyValueStore>,
    sink: Arc<dyn ChangeSink>,
    seed: SeedFn<T>,
    cache: RwLock<Option<Vec<T>>>,
}

impl<T: Entity> EntityStore<T> {
    pub fn new(kv: Arc<dyn KeyValueStore>, sink: Arc<dyn ChangeSink>, seed: SeedFn<T>) -> Self {
        Self {
            kv,
            sink,
            seed,
            cache: RwLock::new(None),
        }
    }

    /// The full list, materializing it from storage on first use.
    pub fn load(&self) -> Vec<T> {
        self.read(|list| list.to_vec())
    }

    /// Alias of [`load`](Self::load) for call sites that only read.
    pub fn list(&self) -> Vec<T> {
        self.load()
    }

    pub fn len(&self) -> usize {
        self.read(|list| list.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get_by_id(&self, id: &str) -> Option<T> {
        self.read(|list| list.iter().find(|e| e.id() == id).cloned())
    }

    /// First entity matching `predicate`.
    pub fn find(&self, predicate: impl Fn(&T) -> bool) -> Option<T> {
        self.read(|list| list.iter().find(|e| predicate(e)).cloned())
    }

    /// All entities matching `predicate`, in list order.
    pub fn filter(&self, predicate: impl Fn(&T) -> bool) -> Vec<T> {
        self.read(|list| list.iter().filter(|e| predicate(e)).cloned().collect())
    }

    /// Insert a fully-formed entity at [`Entity::INSERT_AT`] and persist.
    ///
    /// Ids are not checked for uniqueness.
    pub fn insert(&self, entity: T) -> T {
        let change = EntityChange::new(T::KIND, entity.id(), ChangeAction::Created)
            .with_label(entity.label());
        self.mutate(|list| match T::INSERT_AT {
            InsertAt::Front => list.insert(0, entity.clone()),
            InsertAt::Back => list.push(entity.clone()),
        });
        self.sink.notify(change);
        entity
    }

    /// Shallow-merge `update` into the entity with `id` and persist the list.
    ///
    /// Returns the updated entity, or `None` (after persisting the unchanged
    /// list) if no entity has that id. The sink only hears about updates that
    /// changed a field.
    pub fn update(&self, id: &str, update: &T::Update) -> Option<T> {
        let (entity, changed) = self.mutate(|list| {
            let entity = list.iter_mut().find(|e| e.id() == id)?;
            let before = entity.clone();
            entity.apply_update(update);
            Some((entity.clone(), *entity != before))
        })?;
        if changed {
            self.sink.notify(
                EntityChange::new(T::KIND, id, ChangeAction::Updated).with_label(entity.label()),
            );
        }
        Some(entity)
    }

    /// Remove the entity with `id` and persist the list.
    ///
    /// Returns `true` if an entity was removed. Deleting an unknown id is a
    /// no-op apart from the rewrite.
    pub fn delete(&self, id: &str) -> bool {
        let removed = self.mutate(|list| {
            let position = list.iter().position(|e| e.id() == id)?;
            Some(list.remove(position))
        });
        match removed {
            Some(entity) => {
                self.sink.notify(
                    EntityChange::new(T::KIND, id, ChangeAction::Deleted)
                        .with_label(entity.label()),
                );
                true
            }
            None => false,
        }
    }

    /// Drop the in-memory cache; the next read reloads from storage.
    pub fn invalidate(&self) {
        *self.write_guard() = None;
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    fn write_guard(&self) -> RwLockWriteGuard<'_, Option<Vec<T>>> {
        self.cache.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn read<R>(&self, f: impl FnOnce(&[T]) -> R) -> R {
        {
            let guard = self.cache.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(list) = guard.as_ref() {
                return f(list);
            }
        }
        let mut guard = self.write_guard();
        let list = guard.get_or_insert_with(|| self.read_persisted());
        f(list)
    }

    fn mutate<R>(&self, f: impl FnOnce(&mut Vec<T>) -> R) -> R {
        let mut guard = self.write_guard();
        let list = guard.get_or_insert_with(|| self.read_persisted());
        let result = f(list);
        self.write_through(list);
        result
    }

    /// Read the persisted list, seeding storage when the key is absent.
    fn read_persisted(&self) -> Vec<T> {
        match self.kv.get(T::STORAGE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<Vec<T>>(&raw) {
                Ok(list) => {
                    tracing::debug!(key = T::STORAGE_KEY, count = list.len(), "Loaded entity list");
                    list
                }
                Err(e) => {
                    tracing::warn!(
                        key = T::STORAGE_KEY,
                        error = %e,
                        "Failed to parse persisted entity list, using defaults"
                    );
                    (self.seed)()
                }
            },
            Ok(None) => {
                let seeded = (self.seed)();
                tracing::info!(key = T::STORAGE_KEY, count = seeded.len(), "Seeding entity list");
                self.write_through(&seeded);
                seeded
            }
            Err(e) => {
                tracing::warn!(
                    key = T::STORAGE_KEY,
                    error = %e,
                    "Failed to read persisted entity list, using defaults"
                );
                (self.seed)()
            }
        }
    }

    fn write_through(&self, list: &[T]) {
        if let Err(e) = self.persist(list) {
            tracing::error!(
                key = T::STORAGE_KEY,
                error = %e,
                "Failed to persist entity list"
            );
        }
    }

    fn persist(&self, list: &[T]) -> Result<(), StorageError> {
        let raw = serde_json::to_string(list)?;
        self.kv.set(T::STORAGE_KEY, &raw)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    use serde::Deserialize;
    use teamspace_core::changes::NoopSink;

    use super::*;
    use crate::kv::MemoryKv;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Widget {
        id: String,
        name: String,
    }

    struct RenameWidget(Option<String>);

    impl Entity for Widget {
        type Update = RenameWidget;
        const KIND: &'static str = "widget";
        const STORAGE_KEY: &'static str = "widgets";
        const INSERT_AT: InsertAt = InsertAt::Back;

        fn id(&self) -> &str {
            &self.id
        }

        fn label(&self) -> &str {
            &self.name
        }

        fn apply_update(&mut self, update: &RenameWidget) {
            if let Some(name) = &update.0 {
                self.name = name.clone();
            }
        }
    }

    fn widget(id: &str) -> Widget {
        Widget {
            id: id.into(),
            name: id.to_uppercase(),
        }
    }

    fn store(kv: Arc<MemoryKv>) -> EntityStore<Widget> {
        EntityStore::new(kv, Arc::new(NoopSink), Arc::new(|| vec![widget("a"), widget("b")]))
    }

    #[derive(Default)]
    struct RecordingSink(Mutex<Vec<EntityChange>>);

    impl ChangeSink for RecordingSink {
        fn notify(&self, change: EntityChange) {
            self.0.lock().unwrap().push(change);
        }
    }

    /// Backend whose writes always fail.
    struct ReadOnlyKv;

    impl KeyValueStore for ReadOnlyKv {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Ok(None)
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Io(std::io::Error::other("read-only")))
        }
        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    /// Backend whose reads always fail. Counts attempted writes.
    #[derive(Default)]
    struct UnreadableKv {
        writes: AtomicUsize,
    }

    impl KeyValueStore for UnreadableKv {
        fn get(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Io(std::io::Error::other("unavailable")))
        }
        fn set(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
        fn remove(&self, _key: &str) -> Result<(), StorageError> {
            Ok(())
        }
    }

    #[test]
    fn first_load_seeds_and_persists() {
        let kv = Arc::new(MemoryKv::new());
        let store = store(kv.clone());
        assert!(!kv.contains("widgets"));
        assert_eq!(store.len(), 2);
        assert!(kv.contains("widgets"));
    }

    #[test]
    fn malformed_json_falls_back_to_seed_without_overwriting() {
        let kv = Arc::new(MemoryKv::new());
        kv.set("widgets", "{not json").unwrap();
        let store = store(kv.clone());
        assert_eq!(store.load(), vec![widget("a"), widget("b")]);
        assert_eq!(kv.get("widgets").unwrap().as_deref(), Some("{not json"));
    }

    /// A failed read serves the seed but must not overwrite whatever the
    /// backend holds until the next mutation.
    #[test]
    fn read_error_falls_back_to_seed_without_writing() {
        let kv = Arc::new(UnreadableKv::default());
        let store: EntityStore<Widget> = EntityStore::new(
            kv.clone(),
            Arc::new(NoopSink),
            Arc::new(|| vec![widget("a"), widget("b")]),
        );

        assert_eq!(store.load(), vec![widget("a"), widget("b")]);
        assert_eq!(kv.writes.load(Ordering::SeqCst), 0);

        assert!(store.update("missing", &RenameWidget(None)).is_none());
        assert_eq!(kv.writes.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn insert_appends_for_back_entities() {
        let store = store(Arc::new(MemoryKv::new()));
        store.insert(widget("c"));
        let ids: Vec<_> = store.load().into_iter().map(|w| w.id).collect();
        assert_eq!(ids, ["a", "b", "c"]);
    }

    #[test]
    fn update_missing_id_returns_none() {
        let store = store(Arc::new(MemoryKv::new()));
        assert!(store.update("zzz", &RenameWidget(Some("x".into()))).is_none());
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn invalidate_then_reload_reads_persisted_state() {
        let kv = Arc::new(MemoryKv::new());
        let store = store(kv.clone());
        store.update("a", &RenameWidget(Some("Renamed".into())));
        store.invalidate();
        assert_eq!(store.get_by_id("a").unwrap().name, "Renamed");
    }

    #[test]
    fn write_failures_keep_the_cache_authoritative() {
        let store: EntityStore<Widget> = EntityStore::new(
            Arc::new(ReadOnlyKv),
            Arc::new(NoopSink),
            Arc::new(|| vec![widget("a")]),
        );
        store.insert(widget("b"));
        assert_eq!(store.len(), 2);
        assert!(store.get_by_id("b").is_some());
    }

    #[test]
    fn mutations_notify_the_sink_only_when_something_changed() {
        let sink = Arc::new(RecordingSink::default());
        let store: EntityStore<Widget> = EntityStore::new(
            Arc::new(MemoryKv::new()),
            sink.clone(),
            Arc::new(|| vec![widget("a")]),
        );
        store.insert(widget("b"));
        store.update("b", &RenameWidget(None));
        store.update("b", &RenameWidget(Some("B".into())));
        let renamed = store.update("b", &RenameWidget(Some("B2".into()))).unwrap();
        assert_eq!(renamed.name, "B2");
        store.update("missing", &RenameWidget(None));
        store.delete("b");
        store.delete("b");

        let actions: Vec<_> = sink
            .0
            .lock()
            .unwrap()
            .iter()
            .map(|c| (c.entity_id.clone(), c.action))
            .collect();
        assert_eq!(
            actions,
            [
                ("b".to_string(), ChangeAction::Created),
                ("b".to_string(), ChangeAction::Updated),
                ("b".to_string(), ChangeAction::Deleted),
            ]
        );
    }
}
