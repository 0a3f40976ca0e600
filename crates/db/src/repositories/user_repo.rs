//! Repository for the `users` list.

use std::sync::Arc;

use teamspace_core::changes::{entity_kinds, ChangeSink};
use teamspace_core::clock::Clock;
use teamspace_core::naming::{prefixed_id, user_avatar};

use crate::kv::{keys, KeyValueStore};
use crate::models::user::{CreateUser, UpdateUser, User, UserProfile};
use crate::seeds;
use crate::store::{Entity, EntityStore, InsertAt, SeedFn};

impl Entity for User {
    type Update = UpdateUser;
    const KIND: &'static str = entity_kinds::USER;
    const STORAGE_KEY: &'static str = keys::USERS;
    const INSERT_AT: InsertAt = InsertAt::Back;

    fn id(&self) -> &str {
        &self.id
    }

    fn label(&self) -> &str {
        &self.name
    }

    fn apply_update(&mut self, update: &UpdateUser) {
        self.apply(update);
    }
}

/// Provides CRUD operations for users.
pub struct UserRepo {
    store: EntityStore<User>,
    clock: Arc<dyn Clock>,
}

impl UserRepo {
    pub fn new(kv: Arc<dyn KeyValueStore>, sink: Arc<dyn ChangeSink>, clock: Arc<dyn Clock>) -> Self {
        let seed: SeedFn<User> = Arc::new(seeds::users);
        Self {
            store: EntityStore::new(kv, sink, seed),
            clock,
        }
    }

    /// Add a user with id `u-{ms}`, a name-seeded avatar, and `online = true`.
    pub fn add(&self, input: &CreateUser) -> User {
        let user = User {
            id: prefixed_id("u", self.clock.now_millis()),
            name: input.name.clone(),
            avatar: user_avatar(&input.name),
            profile: UserProfile::new(input.role.clone(), Some(true)),
        };
        self.store.insert(user)
    }

    pub fn list(&self) -> Vec<User> {
        self.store.list()
    }

    pub fn get_by_id(&self, id: &str) -> Option<User> {
        self.store.get_by_id(id)
    }

    /// First user whose name matches exactly.
    pub fn find_by_name(&self, name: &str) -> Option<User> {
        self.store.find(|u| u.name == name)
    }

    pub fn update(&self, id: &str, input: &UpdateUser) -> Option<User> {
        self.store.update(id, input)
    }

    pub fn delete(&self, id: &str) -> bool {
        self.store.delete(id)
    }

    pub fn store(&self) -> &EntityStore<User> {
        &self.store
    }
}
