//! Quests and their objectives.
//!
//! A quest is registered once, activated explicitly, and completes when
//! every declared objective has been done. A completed quest is never
//! re-opened and further objective completions are no-ops.

mod manager;

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

pub use manager::QuestManager;

/// Lifecycle state of a quest.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestStatus {
    /// Registered but not followed yet.
    Inactive,
    /// In progress.
    Active,
    /// Every objective done.
    Completed,
}

impl fmt::Display for QuestStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Inactive => "INACTIVE",
            Self::Active => "ACTIVE",
            Self::Completed => "COMPLETED",
        })
    }
}

/// A quest definition plus its progress.
///
/// Only the definition is (de)serialized; progress always starts empty.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Quest {
    /// Short id the player types (`quest <id>`).
    pub id: String,
    /// Display title.
    pub title: String,
    /// One-paragraph description.
    pub description: String,
    /// Objectives, in display order.
    pub objectives: Vec<String>,
    /// Reward lines shown once completed.
    #[serde(default)]
    pub rewards: Vec<String>,
    #[serde(skip)]
    active: bool,
    #[serde(skip)]
    completed: bool,
    #[serde(skip)]
    done: BTreeSet<String>,
}

impl Quest {
    /// Create an inactive quest with no objectives.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            objectives: Vec::new(),
            rewards: Vec::new(),
            active: false,
            completed: false,
            done: BTreeSet::new(),
        }
    }

    /// Builder: declare an objective.
    pub fn with_objective(mut self, objective: impl Into<String>) -> Self {
        self.objectives.push(objective.into());
        self
    }

    /// Builder: add a reward line.
    pub fn with_reward(mut self, reward: impl Into<String>) -> Self {
        self.rewards.push(reward.into());
        self
    }

    /// Start following the quest. No effect once completed.
    pub fn activate(&mut self) {
        if !self.completed {
            self.active = true;
        }
    }

    /// Whether the quest is in progress.
    pub fn is_active(&self) -> bool {
        self.active && !self.completed
    }

    /// Whether every objective is done.
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// Current lifecycle state.
    pub fn status(&self) -> QuestStatus {
        if self.completed {
            QuestStatus::Completed
        } else if self.active {
            QuestStatus::Active
        } else {
            QuestStatus::Inactive
        }
    }

    /// Whether `objective` is declared by this quest.
    pub fn has_objective(&self, objective: &str) -> bool {
        self.objectives.iter().any(|o| o == objective)
    }

    /// Whether `objective` has been done.
    pub fn is_done(&self, objective: &str) -> bool {
        self.done.contains(objective)
    }

    /// Record an objective as done.
    ///
    /// Returns `true` only if this call changed something: the quest must be
    /// active, the objective declared and not done yet. Completing the last
    /// objective completes the quest and deactivates it.
    pub fn complete_objective(&mut self, objective: &str) -> bool {
        if !self.is_active() || !self.has_objective(objective) || self.is_done(objective) {
            return false;
        }
        self.done.insert(objective.to_string());
        if self.done.len() >= self.objectives.len() {
            self.completed = true;
            self.active = false;
        }
        true
    }

    /// `(done, total)` objective counts.
    pub fn progress(&self) -> (usize, usize) {
        (self.done.len(), self.objectives.len())
    }

    /// `done/total` label.
    pub fn progress_label(&self) -> String {
        let (done, total) = self.progress();
        format!("{done}/{total}")
    }

    /// `[id] Title - STATUS (x/y)` line.
    pub fn status_line(&self) -> String {
        format!(
            "[{}] {} - {} ({})",
            self.id,
            self.title,
            self.status(),
            self.progress_label()
        )
    }

    /// Multi-line view with objectives and rewards.
    pub fn details(&self) -> String {
        let mut lines = vec![
            self.status_line(),
            self.description.clone(),
            String::new(),
            "Objectives:".to_string(),
        ];
        for objective in &self.objectives {
            let mark = if self.is_done(objective) { "[x]" } else { "[ ]" };
            lines.push(format!("  {mark} {objective}"));
        }
        if !self.rewards.is_empty() {
            lines.push(String::new());
            lines.push("Rewards:".to_string());
            for reward in &self.rewards {
                lines.push(format!("  * {reward}"));
            }
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragments() -> Quest {
        Quest::new("fragments", "Temporal fragments", "Recover the fragments.")
            .with_objective("Take Fragment_Alpha")
            .with_objective("Take Fragment_Beta")
            .with_reward("Ring access")
    }

    #[test]
    fn inactive_quest_ignores_objectives() {
        let mut quest = fragments();
        assert_eq!(quest.status(), QuestStatus::Inactive);
        assert!(!quest.complete_objective("Take Fragment_Alpha"));
        assert_eq!(quest.progress(), (0, 2));
    }

    #[test]
    fn completes_on_last_objective() {
        let mut quest = fragments();
        quest.activate();
        assert!(quest.complete_objective("Take Fragment_Alpha"));
        assert!(quest.is_active());
        assert!(quest.complete_objective("Take Fragment_Beta"));
        assert!(quest.is_completed());
        assert!(!quest.is_active());
        assert_eq!(quest.status(), QuestStatus::Completed);
        assert_eq!(quest.progress_label(), "2/2");
    }

    #[test]
    fn repeated_and_undeclared_objectives_are_noops() {
        let mut quest = fragments();
        quest.activate();
        assert!(quest.complete_objective("Take Fragment_Alpha"));
        assert!(!quest.complete_objective("Take Fragment_Alpha"));
        assert!(!quest.complete_objective("Take Fragment_Omega"));
        assert_eq!(quest.progress(), (1, 2));
    }

    #[test]
    fn completed_quest_cannot_reactivate() {
        let mut quest = Quest::new("q", "Q", "d").with_objective("o");
        quest.activate();
        quest.complete_objective("o");
        quest.activate();
        assert!(!quest.is_active());
        assert!(quest.is_completed());
    }

    #[test]
    fn status_line_and_details() {
        let mut quest = fragments();
        quest.activate();
        quest.complete_objective("Take Fragment_Beta");
        assert_eq!(
            quest.status_line(),
            "[fragments] Temporal fragments - ACTIVE (1/2)"
        );
        let details = quest.details();
        assert!(details.contains("[ ] Take Fragment_Alpha"));
        assert!(details.contains("[x] Take Fragment_Beta"));
        assert!(details.contains("* Ring access"));
    }

    #[test]
    fn deserialize_definition_starts_inactive() {
        let quest: Quest = serde_json::from_str(
            r#"{
                "id": "helias",
                "title": "Cold signature",
                "description": "Find the shard.",
                "objectives": ["Take Shard_Helias"]
            }"#,
        )
        .unwrap();
        assert_eq!(quest.status(), QuestStatus::Inactive);
        assert!(quest.rewards.is_empty());
        assert_eq!(quest.progress(), (0, 1));
    }
}
