//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `Serialize` + `Deserialize` entity struct matching the persisted JSON shape
//! - A create DTO carrying the caller-supplied fields
//! - An update DTO (all `Option` fields) applied as a shallow merge

pub mod chat;
pub mod doc;
pub mod squad;
pub mod space;
pub mod task;
pub mod user;
pub mod video_note;

use serde::{Deserialize, Deserializer};

/// Deserialize a present field (including `null`) as `Some(value)`.
///
/// Paired with `#[serde(default)]` this distinguishes "absent" (`None`) from
/// "explicitly null" (`Some(None)`) for nullable patch fields.
pub(crate) fn deserialize_some<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
