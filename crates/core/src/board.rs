//! Kanban board columns and task priorities.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The fixed set of board columns.
///
/// Any column may transition to any other; there are no guards and no
/// history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ColumnId {
    #[serde(rename = "todo")]
    Todo,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "done")]
    Done,
}

impl ColumnId {
    /// All columns in display order.
    pub const ALL: [ColumnId; 3] = [ColumnId::Todo, ColumnId::InProgress, ColumnId::Done];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for ColumnId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ColumnId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "done" => Ok(Self::Done),
            other => Err(CoreError::Validation(format!(
                "Unknown board column '{other}'. Must be one of: todo, in-progress, done"
            ))),
        }
    }
}

/// Task priority as shown on the card badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl FromStr for Priority {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "High" => Ok(Self::High),
            "Medium" => Ok(Self::Medium),
            "Low" => Ok(Self::Low),
            other => Err(CoreError::Validation(format!(
                "Unknown priority '{other}'. Must be one of: High, Medium, Low"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn column_ids_round_trip_through_strings() {
        for column in ColumnId::ALL {
            assert_eq!(column.as_str().parse::<ColumnId>().unwrap(), column);
        }
    }

    #[test]
    fn column_serializes_with_kebab_names() {
        let json = serde_json::to_string(&ColumnId::InProgress).unwrap();
        assert_eq!(json, "\"in-progress\"");
    }

    #[test]
    fn unknown_column_is_a_validation_error() {
        assert_matches!("backlog".parse::<ColumnId>(), Err(CoreError::Validation(msg)) if msg.contains("backlog"));
    }

    #[test]
    fn priority_parses_capitalized_names() {
        assert_eq!("Medium".parse::<Priority>().unwrap(), Priority::Medium);
        assert!("medium".parse::<Priority>().is_err());
    }
}
