//! Buffered narration output.
//!
//! The engine appends beats as it runs; the shell drains them after every
//! call and decides how to render each kind.

/// One unit of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Beat {
    /// Narration or command output.
    Say(String),
    /// An error or a danger line.
    Alert(String),
    /// Quest progress and other system notices.
    Notice(String),
    /// Wait for the player to acknowledge before showing what follows.
    Pause,
    /// Clear the screen.
    Clear,
}

impl Beat {
    /// The text carried by the beat, if any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Say(text) | Self::Alert(text) | Self::Notice(text) => Some(text),
            Self::Pause | Self::Clear => None,
        }
    }
}

/// Ordered beat buffer.
#[derive(Debug, Clone)]
pub struct Transcript {
    beats: Vec<Beat>,
    pauses: bool,
}

impl Transcript {
    /// Create an empty transcript. With `pauses` off, [`pause`](Self::pause)
    /// records nothing.
    pub fn new(pauses: bool) -> Self {
        Self {
            beats: Vec::new(),
            pauses,
        }
    }

    /// Record narration.
    pub fn say(&mut self, text: impl Into<String>) {
        self.beats.push(Beat::Say(text.into()));
    }

    /// Record an alert.
    pub fn alert(&mut self, text: impl Into<String>) {
        self.beats.push(Beat::Alert(text.into()));
    }

    /// Record a notice.
    pub fn notice(&mut self, text: impl Into<String>) {
        self.beats.push(Beat::Notice(text.into()));
    }

    /// Record a pause.
    pub fn pause(&mut self) {
        if self.pauses {
            self.beats.push(Beat::Pause);
        }
    }

    /// Record a screen clear.
    pub fn clear(&mut self) {
        self.beats.push(Beat::Clear);
    }

    /// Whether nothing is pending.
    pub fn is_empty(&self) -> bool {
        self.beats.is_empty()
    }

    /// Take every pending beat.
    pub fn drain(&mut self) -> Vec<Beat> {
        std::mem::take(&mut self.beats)
    }
}

/// Join the text of `beats`, one beat per line. Pauses and clears are
/// dropped.
pub fn plain_text(beats: &[Beat]) -> String {
    beats
        .iter()
        .filter_map(Beat::text)
        .collect::<Vec<_>>()
        .join("\n")
}
