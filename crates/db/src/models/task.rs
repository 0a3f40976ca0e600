//! Kanban task model and DTOs.

use serde::{Deserialize, Serialize};
use teamspace_core::board::Priority;
use teamspace_core::types::EntityId;

/// The person a task card is assigned to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignee {
    pub name: String,
    pub avatar: String,
}

/// One card on a task board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    pub priority: Priority,
    pub tags: Vec<String>,
    pub points: u32,
    pub assignee: Assignee,
}

/// DTO for creating a task. The id is derived from the clock.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub title: String,
    pub priority: Priority,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub points: u32,
    pub assignee: Assignee,
}
