//! Dashboard activity feed: entry type, capped log and the synthetic catalog.

use std::collections::VecDeque;

use rand::seq::IndexedRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::changes::{entity_kinds, ChangeAction, EntityChange};

/// How often a synthetic entry is injected (seconds).
pub const DEFAULT_ACTIVITY_INTERVAL_SECS: u64 = 5;

/// Maximum number of entries kept in the feed.
pub const DEFAULT_FEED_CAP: usize = 10;

/// Relative time label given to freshly recorded entries.
pub const JUST_NOW: &str = "Just now";

/// One line of the activity feed: "{user} {action} {task}".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub user: String,
    /// Avatar seed, not a full URL.
    pub avatar: String,
    pub action: String,
    pub task: String,
    pub time: String,
}

impl ActivityEntry {
    fn from_static(user: &str, avatar: &str, action: &str, task: &str, time: &str) -> Self {
        Self {
            user: user.to_string(),
            avatar: avatar.to_string(),
            action: action.to_string(),
            task: task.to_string(),
            time: time.to_string(),
        }
    }

    /// An entry attributed to the local user ("You").
    pub fn by_you(action: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            user: "You".to_string(),
            avatar: "user".to_string(),
            action: action.into(),
            task: task.into(),
            time: JUST_NOW.to_string(),
        }
    }
}

/// Most-recent-first list that never grows beyond its cap.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    entries: VecDeque<ActivityEntry>,
    cap: usize,
}

impl ActivityLog {
    pub fn new(cap: usize) -> Self {
        Self {
            entries: VecDeque::with_capacity(cap),
            cap,
        }
    }

    /// A log pre-filled with [`initial_feed`], truncated to `cap`.
    pub fn seeded(cap: usize) -> Self {
        let mut log = Self::new(cap);
        log.entries.extend(initial_feed().into_iter().take(cap));
        log
    }

    /// Prepend `entry`, dropping the oldest entries past the cap.
    pub fn push(&mut self, entry: ActivityEntry) {
        self.entries.push_front(entry);
        self.entries.truncate(self.cap);
    }

    pub fn entries(&self) -> impl Iterator<Item = &ActivityEntry> {
        self.entries.iter()
    }

    pub fn latest(&self) -> Option<&ActivityEntry> {
        self.entries.front()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cap(&self) -> usize {
        self.cap
    }
}

impl Default for ActivityLog {
    fn default() -> Self {
        Self::seeded(DEFAULT_FEED_CAP)
    }
}

/// Entries shown when the dashboard first opens.
pub fn initial_feed() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry::from_static("Olivia Martin", "1", "commented on", "Implement new auth flow", "5m ago"),
        ActivityEntry::from_static("Jackson Lee", "2", "created a new Space", "Q3 Marketing", "1h ago"),
        ActivityEntry::from_static("Isabella Nguyen", "3", "completed task", "Design new landing page", "3h ago"),
        ActivityEntry::from_static("William Kim", "4", "pushed a new commit to", "fix(api): user endpoint", "5h ago"),
        ActivityEntry::from_static("Sophia Davis", "5", "added you to Space", "Mobile App Launch", "1d ago"),
    ]
}

/// Catalog the background ticker draws from.
pub fn synthetic_catalog() -> Vec<ActivityEntry> {
    vec![
        ActivityEntry::from_static("Liam Garcia", "6", "assigned you a task", "Update user documentation", "2m ago"),
        ActivityEntry::from_static("Ava Rodriguez", "7", "mentioned you in a comment on", "Q4 planning document", "15m ago"),
        ActivityEntry::from_static("Noah Hernandez", "8", "pushed a new commit to", "feat(chat): real-time messaging", "30m ago"),
        ActivityEntry::from_static("Emma Smith", "9", "archived the Space", "Old Landing Page", "45m ago"),
        ActivityEntry::from_static("Lucas Jones", "10", "requested a review on pull request", "#231 - Refactor auth service", "1h ago"),
        ActivityEntry::from_static("Mia Brown", "11", "deployed a new version to staging", "v1.2.0-beta", "2h ago"),
    ]
}

/// Pick a random catalog entry and relabel it as happening just now.
pub fn pick_synthetic<R: Rng + ?Sized>(rng: &mut R) -> ActivityEntry {
    let catalog = synthetic_catalog();
    let mut entry = catalog
        .choose(rng)
        .cloned()
        .unwrap_or_else(|| ActivityEntry::by_you("opened", "the dashboard"));
    entry.time = JUST_NOW.to_string();
    entry
}

/// Feed entry for a locally made change, if that kind of change is announced.
///
/// Only creations are announced, matching the dashboard's "You created ..."
/// lines.
pub fn entry_for_change(change: &EntityChange) -> Option<ActivityEntry> {
    if change.action != ChangeAction::Created {
        return None;
    }
    let action = match change.entity {
        entity_kinds::SPACE => "created a new Space",
        entity_kinds::SQUAD => "created a new Squad",
        entity_kinds::DOC => "created a new Doc",
        entity_kinds::VIDEO_NOTE => "recorded a new Video Note",
        _ => return None,
    };
    let subject = change.label.clone().unwrap_or_else(|| change.entity_id.clone());
    Some(ActivityEntry::by_you(action, subject))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_prepends_and_caps() {
        let mut log = ActivityLog::new(3);
        for i in 0..5 {
            log.push(ActivityEntry::by_you("did", format!("thing {i}")));
        }
        assert_eq!(log.len(), 3);
        assert_eq!(log.latest().unwrap().task, "thing 4");
        let tasks: Vec<_> = log.entries().map(|e| e.task.as_str()).collect();
        assert_eq!(tasks, ["thing 4", "thing 3", "thing 2"]);
    }

    #[test]
    fn seeded_log_respects_cap() {
        assert_eq!(ActivityLog::seeded(10).len(), 5);
        assert_eq!(ActivityLog::seeded(2).len(), 2);
        assert_eq!(ActivityLog::default().cap(), DEFAULT_FEED_CAP);
    }

    #[test]
    fn synthetic_entries_come_from_catalog_and_are_fresh() {
        let catalog = synthetic_catalog();
        let mut rng = rand::rng();
        for _ in 0..20 {
            let entry = pick_synthetic(&mut rng);
            assert_eq!(entry.time, JUST_NOW);
            assert!(catalog.iter().any(|c| c.user == entry.user && c.task == entry.task));
        }
    }

    #[test]
    fn only_creations_produce_entries() {
        let created = EntityChange::new(entity_kinds::SPACE, "q3-1", ChangeAction::Created)
            .with_label("Q3");
        let entry = entry_for_change(&created).unwrap();
        assert_eq!(entry.user, "You");
        assert_eq!(entry.action, "created a new Space");
        assert_eq!(entry.task, "Q3");

        let updated = EntityChange::new(entity_kinds::SPACE, "q3-1", ChangeAction::Updated);
        assert!(entry_for_change(&updated).is_none());

        let user = EntityChange::new(entity_kinds::USER, "u-1", ChangeAction::Created);
        assert!(entry_for_change(&user).is_none());
    }

    #[test]
    fn unlabelled_change_falls_back_to_id() {
        let change = EntityChange::new(entity_kinds::DOC, "doc-9", ChangeAction::Created);
        assert_eq!(entry_for_change(&change).unwrap().task, "doc-9");
    }
}
