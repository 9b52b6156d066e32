//! Engine configuration.

use std::path::Path;

use serde::Deserialize;

use crate::error::{FictionError, FictionResult};
use crate::story::Chapter;

/// Configuration for a game.
///
/// Every field has a default, so a JSON file only needs the keys it changes:
///
/// ```json
/// { "start_chapter": 2, "show_intro": false }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Chapter the player starts in.
    pub start_chapter: Chapter,
    /// Play the opening cinematic.
    pub show_intro: bool,
    /// Emit pause beats between scenes.
    pub pauses: bool,
    /// Name used when the player gives none.
    pub fallback_name: String,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            start_chapter: Chapter::One,
            show_intro: true,
            pauses: true,
            fallback_name: "Unknown".to_string(),
        }
    }
}

impl EngineConfig {
    /// Create a config with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the starting chapter.
    pub fn with_start_chapter(mut self, chapter: Chapter) -> Self {
        self.start_chapter = chapter;
        self
    }

    /// Enable or disable the opening cinematic.
    pub fn with_intro(mut self, show: bool) -> Self {
        self.show_intro = show;
        self
    }

    /// Enable or disable pause beats.
    pub fn with_pauses(mut self, pauses: bool) -> Self {
        self.pauses = pauses;
        self
    }

    /// Set the fallback player name.
    pub fn with_fallback_name(mut self, name: impl Into<String>) -> Self {
        self.fallback_name = name.into();
        self
    }

    /// Parse a config from JSON.
    pub fn from_json(json: &str) -> FictionResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: &Path) -> FictionResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|source| FictionError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = EngineConfig::new();
        assert_eq!(config.start_chapter, Chapter::One);
        assert!(config.show_intro);
        assert!(config.pauses);
        assert_eq!(config.fallback_name, "Unknown");
    }

    #[test]
    fn builder_chain() {
        let config = EngineConfig::new()
            .with_start_chapter(Chapter::Three)
            .with_intro(false)
            .with_pauses(false)
            .with_fallback_name("Nobody");
        assert_eq!(config.start_chapter, Chapter::Three);
        assert!(!config.show_intro);
        assert!(!config.pauses);
        assert_eq!(config.fallback_name, "Nobody");
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let config = EngineConfig::from_json(r#"{ "start_chapter": 2, "pauses": false }"#).unwrap();
        assert_eq!(config.start_chapter, Chapter::Two);
        assert!(!config.pauses);
        assert!(config.show_intro);
    }

    #[test]
    fn invalid_chapter_is_rejected() {
        assert!(matches!(
            EngineConfig::from_json(r#"{ "start_chapter": 7 }"#),
            Err(FictionError::Config(_))
        ));
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("atlas.json");
        std::fs::write(&path, r#"{ "show_intro": false }"#).unwrap();
        let config = EngineConfig::load(&path).unwrap();
        assert!(!config.show_intro);

        let missing = EngineConfig::load(&dir.path().join("missing.json"));
        assert!(matches!(missing, Err(FictionError::ConfigIo { .. })));
    }
}
