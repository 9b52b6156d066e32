use comfy_table::{ContentArrangement, Table};

use super::Quest;
use crate::error::{CoreError, CoreResult};

/// Registry of quests plus a notification log.
///
/// Every state change made through the manager appends a line to the log;
/// the caller drains it after each turn with [`drain_updates`](Self::drain_updates).
#[derive(Debug, Clone, Default)]
pub struct QuestManager {
    quests: Vec<Quest>,
    followed: Option<String>,
    log: Vec<String>,
}

impl QuestManager {
    /// Create an empty manager.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a quest, replacing any quest with the same id in place.
    pub fn add_quest(&mut self, quest: Quest) {
        match self.quests.iter_mut().find(|q| q.id == quest.id) {
            Some(existing) => *existing = quest,
            None => self.quests.push(quest),
        }
    }

    /// Look up a quest.
    pub fn get(&self, id: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.id == id)
    }

    fn get_mut(&mut self, id: &str) -> Option<&mut Quest> {
        self.quests.iter_mut().find(|q| q.id == id)
    }

    /// All quests in registration order.
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    /// Id of the quest the player follows, if any.
    pub fn followed(&self) -> Option<&str> {
        self.followed.as_deref()
    }

    /// Activate a quest and follow it.
    pub fn activate(&mut self, id: &str) -> CoreResult<()> {
        let quest = self
            .get_mut(id)
            .ok_or_else(|| CoreError::UnknownQuest(id.to_string()))?;
        quest.activate();
        let line = format!("Quest activated: {} ({id})", quest.title);
        tracing::info!(quest = id, "quest activated");
        self.followed = Some(id.to_string());
        self.log.push(line);
        Ok(())
    }

    /// Complete an objective on a quest.
    ///
    /// Returns `true` only if progress changed. Story scripts must only name
    /// declared quests and objectives; anything else is a scripting bug.
    pub fn complete(&mut self, id: &str, objective: &str) -> bool {
        debug_assert!(
            self.get(id).is_some_and(|q| q.has_objective(objective)),
            "undeclared objective {objective:?} on quest {id:?}"
        );
        let Some(quest) = self.get_mut(id) else {
            tracing::warn!(quest = id, "objective on unknown quest");
            return false;
        };
        if !quest.complete_objective(objective) {
            return false;
        }
        let finished = quest.is_completed().then(|| quest.title.clone());
        tracing::info!(quest = id, objective, "objective done");
        self.log.push(format!("Objective done [{id}]: {objective}"));
        if let Some(title) = finished {
            tracing::info!(quest = id, "quest completed");
            self.log.push(format!("Quest completed [{id}]: {title}"));
        }
        true
    }

    /// Complete an objective on the followed quest.
    pub fn complete_on_followed(&mut self, objective: &str) -> bool {
        match self.followed.clone() {
            Some(id) => self.complete(&id, objective),
            None => false,
        }
    }

    /// Take the pending notification lines.
    pub fn drain_updates(&mut self) -> Vec<String> {
        std::mem::take(&mut self.log)
    }

    /// Table of every quest with its status and progress.
    pub fn list_quests(&self) -> String {
        if self.quests.is_empty() {
            return "(no quests)".to_string();
        }

        let mut table = Table::new();
        table.set_content_arrangement(ContentArrangement::Dynamic);
        table.set_header(vec!["Id", "Title", "Status", "Progress"]);
        for quest in &self.quests {
            table.add_row(vec![
                quest.id.clone(),
                quest.title.clone(),
                quest.status().to_string(),
                quest.progress_label(),
            ]);
        }

        format!("{table}\nCommands: quests | quest <id> | activate <id> | rewards")
    }

    /// Detailed view of one quest.
    pub fn quest_details(&self, id: &str) -> CoreResult<String> {
        self.get(id)
            .map(Quest::details)
            .ok_or_else(|| CoreError::UnknownQuest(id.to_string()))
    }

    /// Rewards earned by completed quests.
    pub fn rewards(&self) -> String {
        let mut lines = vec!["Rewards (completed quests):".to_string()];
        let mut any = false;
        for quest in self.quests.iter().filter(|q| q.is_completed()) {
            if quest.rewards.is_empty() {
                continue;
            }
            any = true;
            lines.push(format!("- {} [{}]", quest.title, quest.id));
            for reward in &quest.rewards {
                lines.push(format!("  * {reward}"));
            }
        }
        if !any {
            lines.push("(no rewards yet)".to_string());
        }
        lines.join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager() -> QuestManager {
        let mut qm = QuestManager::new();
        qm.add_quest(
            Quest::new("vault", "The vault", "Reach the vault.")
                .with_objective("Reach Nexus Gate")
                .with_objective("Reach Vault X-09")
                .with_reward("Argos"),
        );
        qm.add_quest(Quest::new("helias", "Cold signature", "Find it.").with_objective("Take Shard_Helias"));
        qm
    }

    #[test]
    fn activate_logs_and_follows() {
        let mut qm = manager();
        qm.activate("vault").unwrap();
        assert_eq!(qm.followed(), Some("vault"));
        assert_eq!(qm.drain_updates(), vec!["Quest activated: The vault (vault)"]);
        assert!(qm.drain_updates().is_empty());
    }

    #[test]
    fn activate_unknown_fails() {
        let mut qm = manager();
        assert!(matches!(qm.activate("nope"), Err(CoreError::UnknownQuest(_))));
        assert!(qm.followed().is_none());
    }

    #[test]
    fn complete_logs_objective_and_completion() {
        let mut qm = manager();
        qm.activate("vault").unwrap();
        qm.drain_updates();

        assert!(qm.complete("vault", "Reach Nexus Gate"));
        assert!(!qm.complete("vault", "Reach Nexus Gate"));
        assert!(qm.complete_on_followed("Reach Vault X-09"));

        let log = qm.drain_updates();
        assert_eq!(log.len(), 3);
        assert!(log[0].contains("Reach Nexus Gate"));
        assert!(log[2].starts_with("Quest completed [vault]"));
        assert!(qm.get("vault").unwrap().is_completed());
    }

    #[test]
    fn complete_on_inactive_quest_is_silent() {
        let mut qm = manager();
        assert!(!qm.complete("helias", "Take Shard_Helias"));
        assert!(qm.drain_updates().is_empty());
    }

    #[test]
    fn complete_on_followed_without_follow() {
        let mut qm = manager();
        assert!(!qm.complete_on_followed("Reach Nexus Gate"));
    }

    #[test]
    fn add_quest_replaces_same_id() {
        let mut qm = manager();
        qm.add_quest(Quest::new("vault", "Another vault", "Changed.").with_objective("x"));
        assert_eq!(qm.quests().len(), 2);
        assert_eq!(qm.quests()[0].title, "Another vault");
    }

    #[test]
    fn listing_and_rewards() {
        let mut qm = manager();
        assert!(qm.rewards().contains("(no rewards yet)"));
        qm.activate("vault").unwrap();
        qm.complete("vault", "Reach Nexus Gate");
        qm.complete("vault", "Reach Vault X-09");

        let list = qm.list_quests();
        assert!(list.contains("vault"));
        assert!(list.contains("COMPLETED"));
        assert!(list.contains("helias"));
        assert!(list.contains("INACTIVE"));
        assert!(qm.rewards().contains("* Argos"));
        assert!(qm.quest_details("helias").unwrap().contains("Take Shard_Helias"));
        assert!(qm.quest_details("nope").is_err());
    }

    #[test]
    fn empty_listing() {
        assert_eq!(QuestManager::new().list_quests(), "(no quests)");
    }
}
