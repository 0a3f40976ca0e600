//! Repository layer.
//!
//! Each repository wraps one [`EntityStore`](crate::store::EntityStore),
//! derives the fields a create DTO leaves out (ids, avatars, timestamps) and
//! forwards reads and patches to the store.

pub mod doc_repo;
pub mod space_repo;
pub mod squad_repo;
pub mod user_repo;
pub mod video_note_repo;

pub use doc_repo::DocRepo;
pub use space_repo::SpaceRepo;
pub use squad_repo::SquadRepo;
pub use user_repo::UserRepo;
pub use video_note_repo::VideoNoteRepo;
