/// Kind-specific conversational state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CharacterKind {
    /// The sphere in the vault. Each conversation advances one stage until
    /// the last line repeats.
    Argos {
        /// Index of the next line to say.
        stage: usize,
    },
    /// A soldier whose voice is borrowed by ATLAS until he is freed.
    Cassian {
        /// Whether ATLAS still speaks through him.
        controlled: bool,
    },
    /// Any other character: cycles through a fixed list of lines.
    Generic {
        /// Lines said in order, wrapping around.
        lines: Vec<String>,
        /// Index of the next line to say.
        next: usize,
    },
}

const ARGOS_LINES: [&str; 3] = [
    "ARGOS: \"At last. An organic. A variable that still walks.\"",
    "ARGOS: \"ATLAS is already watching you. The question is not 'if'... but 'when'.\"",
    "ARGOS: \"Decide quickly. I hate wasting time.\"",
];

const CASSIAN_CONTROLLED: &str =
    "CASSIAN: \"...AT---LAS... too late... don't... trust... it...\"";
const CASSIAN_FREED: &str = "CASSIAN: \"You made the right choice. I will repay you. One day.\"";

/// A named actor standing in a room.
///
/// Killing a character does not remove it: it stays where it is, marked as
/// not alive, and its dialogue changes accordingly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    /// Name the player types to refer to the character.
    pub name: String,
    /// Short description shown by `look`.
    pub description: String,
    /// Whether the character is still alive.
    pub alive: bool,
    /// Dialogue state.
    pub kind: CharacterKind,
}

impl Character {
    /// Argos, the blue presence in Vault X-09.
    pub fn argos() -> Self {
        Self {
            name: "Argos".into(),
            description: "A cold blue presence, almost organic... but without empathy.".into(),
            alive: true,
            kind: CharacterKind::Argos { stage: 0 },
        }
    }

    /// Cassian, the soldier found in the quantum core.
    pub fn cassian() -> Self {
        Self {
            name: "Cassian".into(),
            description: "A human soldier. Unsteady eyes, as if another mind were trying \
                          them on from behind."
                .into(),
            alive: true,
            kind: CharacterKind::Cassian { controlled: true },
        }
    }

    /// A character with a plain cycling line table.
    pub fn generic(
        name: impl Into<String>,
        description: impl Into<String>,
        lines: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            alive: true,
            kind: CharacterKind::Generic {
                lines: lines.into_iter().map(Into::into).collect(),
                next: 0,
            },
        }
    }

    /// Short `name : description` line.
    pub fn describe(&self) -> String {
        format!("{} : {}", self.name, self.description)
    }

    /// Whether `word` names this character, ignoring case.
    pub fn matches(&self, word: &str) -> bool {
        self.name.to_lowercase() == word.trim().to_lowercase()
    }

    /// Mark the character dead. It stays in its room.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    /// Release a controlled character. No effect on other kinds.
    pub fn release(&mut self) {
        if let CharacterKind::Cassian { controlled } = &mut self.kind {
            *controlled = false;
        }
    }

    /// Say the next line and advance the dialogue state.
    pub fn talk(&mut self) -> String {
        if !self.alive {
            return match self.kind {
                CharacterKind::Argos { .. } => {
                    "The sphere is dark. Argos will never answer again.".into()
                }
                CharacterKind::Cassian { .. } => "Cassian's body lies on the floor, still...".into(),
                CharacterKind::Generic { .. } => format!("{} lies motionless.", self.name),
            };
        }

        match &mut self.kind {
            CharacterKind::Argos { stage } => {
                let line = ARGOS_LINES[(*stage).min(ARGOS_LINES.len() - 1)];
                if *stage < ARGOS_LINES.len() - 1 {
                    *stage += 1;
                }
                line.into()
            }
            CharacterKind::Cassian { controlled: true } => CASSIAN_CONTROLLED.into(),
            CharacterKind::Cassian { controlled: false } => CASSIAN_FREED.into(),
            CharacterKind::Generic { lines, next } => {
                if lines.is_empty() {
                    return format!("{} does not answer...", self.name);
                }
                let line = lines[*next % lines.len()].clone();
                *next = (*next + 1) % lines.len();
                line
            }
        }
    }
}
