/// Alias for `Result<T, CoreError>`.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised while building maps or addressing quests by id.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No room with this name exists in the graph.
    #[error("room not found: \"{0}\"")]
    UnknownRoom(String),

    /// No quest with this id is registered.
    #[error("quest not found: \"{0}\"")]
    UnknownQuest(String),

    /// A quest exists but does not declare the objective.
    #[error("quest \"{quest}\" has no objective \"{objective}\"")]
    UnknownObjective {
        /// The quest id.
        quest: String,
        /// The undeclared objective.
        objective: String,
    },
}
