//! Session-only kanban board.
//!
//! Boards are not persisted; a reload starts from the seed board again.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use teamspace_core::board::ColumnId;
use teamspace_core::clock::Clock;
use teamspace_core::naming::prefixed_id;

use crate::models::task::{CreateTask, Task};

/// Tasks grouped by column, newest first within a column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskBoard {
    columns: BTreeMap<ColumnId, Vec<Task>>,
}

impl TaskBoard {
    /// A board with all three columns present and empty.
    pub fn empty() -> Self {
        Self {
            columns: ColumnId::ALL.into_iter().map(|c| (c, Vec::new())).collect(),
        }
    }

    pub fn column(&self, column: ColumnId) -> &[Task] {
        self.columns.get(&column).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn replace_column(&mut self, column: ColumnId, tasks: Vec<Task>) {
        self.columns.insert(column, tasks);
    }

    pub fn total_tasks(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    /// Column currently holding `task_id`.
    pub fn locate(&self, task_id: &str) -> Option<ColumnId> {
        self.columns
            .iter()
            .find(|(_, tasks)| tasks.iter().any(|t| t.id == task_id))
            .map(|(column, _)| *column)
    }

    /// Build a task with id `task-{ms}` from a create DTO.
    ///
    /// Two tasks created within the same millisecond get the same id.
    pub fn new_task(input: &CreateTask, clock: &dyn Clock) -> Task {
        Task {
            id: prefixed_id("task", clock.now_millis()),
            title: input.title.clone(),
            priority: input.priority,
            tags: input.tags.clone(),
            points: input.points,
            assignee: input.assignee.clone(),
        }
    }

    /// Prepend `task` to `column`.
    pub fn create_task(&mut self, task: Task, column: ColumnId) {
        self.columns.entry(column).or_default().insert(0, task);
    }

    /// Remove `task_id` from `column`. Returns `true` if a task was removed.
    pub fn delete_task(&mut self, task_id: &str, column: ColumnId) -> bool {
        let Some(tasks) = self.columns.get_mut(&column) else {
            return false;
        };
        let before = tasks.len();
        tasks.retain(|t| t.id != task_id);
        tasks.len() != before
    }

    /// Move `task_id` from `from` to the top of `to`.
    ///
    /// No-op when `from == to` or when the task is not in `from`. Both
    /// columns are rebuilt off to the side and swapped in together, so the
    /// board is never observed with the task in zero or two columns.
    pub fn move_task(&mut self, task_id: &str, from: ColumnId, to: ColumnId) -> bool {
        if from == to {
            return false;
        }
        let mut source = self.column(from).to_vec();
        let Some(index) = source.iter().position(|t| t.id == task_id) else {
            return false;
        };
        let task = source.remove(index);
        let mut target = self.column(to).to_vec();
        target.insert(0, task);

        self.columns.insert(from, source);
        self.columns.insert(to, target);
        tracing::debug!(task_id, from = %from, to = %to, "Moved task");
        true
    }
}

impl Default for TaskBoard {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use teamspace_core::board::Priority;
    use teamspace_core::clock::ManualClock;

    use super::*;
    use crate::models::task::Assignee;
    use crate::seeds;

    fn count(board: &TaskBoard, column: ColumnId, id: &str) -> usize {
        board.column(column).iter().filter(|t| t.id == id).count()
    }

    #[test]
    fn move_puts_task_on_top_of_target_exactly_once() {
        let mut board = seeds::task_board();
        let total = board.total_tasks();

        assert!(board.move_task("task-2", ColumnId::Todo, ColumnId::Done));

        assert_eq!(count(&board, ColumnId::Todo, "task-2"), 0);
        assert_eq!(count(&board, ColumnId::Done, "task-2"), 1);
        assert_eq!(board.column(ColumnId::Done)[0].id, "task-2");
        assert_eq!(board.total_tasks(), total);
    }

    #[test]
    fn move_within_same_column_is_ignored() {
        let mut board = seeds::task_board();
        let before = board.clone();
        assert!(!board.move_task("task-1", ColumnId::Todo, ColumnId::Todo));
        assert_eq!(board, before);
    }

    #[test]
    fn move_of_task_not_in_source_is_ignored() {
        let mut board = seeds::task_board();
        let before = board.clone();
        assert!(!board.move_task("task-4", ColumnId::Todo, ColumnId::Done));
        assert!(!board.move_task("nope", ColumnId::Todo, ColumnId::Done));
        assert_eq!(board, before);
    }

    #[test]
    fn any_column_can_reach_any_other() {
        let mut board = seeds::task_board();
        for (from, to) in [
            (ColumnId::Done, ColumnId::Todo),
            (ColumnId::Todo, ColumnId::InProgress),
            (ColumnId::InProgress, ColumnId::Done),
        ] {
            assert!(board.move_task("task-7", from, to));
            assert_eq!(board.locate("task-7"), Some(to));
        }
    }

    #[test]
    fn create_prepends_and_delete_filters() {
        let clock = ManualClock::new(1_700_000_000_000);
        let mut board = seeds::task_board();
        let task = TaskBoard::new_task(
            &CreateTask {
                title: "Write release notes".into(),
                priority: Priority::Low,
                tags: vec!["Docs".into()],
                points: 1,
                assignee: Assignee {
                    name: "Sam".into(),
                    avatar: "https://picsum.photos/seed/sam/32/32".into(),
                },
            },
            &clock,
        );
        assert_eq!(task.id, "task-1700000000000");

        board.create_task(task.clone(), ColumnId::InProgress);
        assert_eq!(board.column(ColumnId::InProgress)[0], task);

        assert!(board.delete_task(&task.id, ColumnId::InProgress));
        assert!(!board.delete_task(&task.id, ColumnId::InProgress));
        assert_eq!(board.locate(&task.id), None);
    }

    #[test]
    fn board_serializes_with_column_keys() {
        let json = serde_json::to_value(seeds::task_board()).unwrap();
        assert_eq!(json["in-progress"].as_array().unwrap().len(), 2);
    }
}
