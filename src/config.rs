use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::info;

/// Top-level mascot configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MascotConfig {
    /// Sprite folder layout.
    #[serde(default)]
    pub sprites: SpritesToml,

    /// Event windows, in precedence order (`[[event]]`).
    #[serde(default, rename = "event")]
    pub events: Vec<EventToml>,

    /// Characters (`[[character]]`).
    #[serde(default, rename = "character")]
    pub characters: Vec<CharacterToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpritesToml {
    #[serde(default = "default_base_path")]
    pub base_path: PathBuf,
    #[serde(default = "default_folder")]
    pub default_folder: String,
}

impl Default for SpritesToml {
    fn default() -> Self {
        Self {
            base_path: default_base_path(),
            default_folder: default_folder(),
        }
    }
}

fn default_base_path() -> PathBuf {
    PathBuf::from("src/sprites")
}
fn default_folder() -> String {
    "default".to_string()
}

/// One `[[event]]` entry. `key` defaults to `name`.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventToml {
    #[serde(default)]
    pub key: Option<String>,
    pub name: String,
    pub start: BoundaryToml,
    pub end: BoundaryToml,
}

/// `{ month, day, year? }`. Omit `year` on both ends for a yearly event.
#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct BoundaryToml {
    pub month: u8,
    pub day: u8,
    #[serde(default)]
    pub year: Option<i32>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharacterToml {
    pub name: String,
    pub class_name: String,
    pub click_sound: String,
    pub sprites: CharacterSpritesToml,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CharacterSpritesToml {
    pub default: SpritePairToml,
    #[serde(default)]
    pub events: BTreeMap<String, EventSpritesToml>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SpritePairToml {
    pub idle: String,
    pub clicked: String,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EventSpritesToml {
    #[serde(default)]
    pub idle: Option<String>,
    #[serde(default)]
    pub clicked: Option<String>,
}

/// Reads and parses a TOML configuration file.
pub fn load(path: &Path) -> Result<MascotConfig> {
    let toml_str = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file: {}", path.display()))?;
    let config: MascotConfig = toml::from_str(&toml_str)
        .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
    info!(
        path = %path.display(),
        n_events = config.events.len(),
        n_characters = config.characters.len(),
        "configuration loaded"
    );
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    const SAMPLE: &str = r#"
[sprites]
base_path = "assets/sprites"

[[event]]
name = "halloween"
start = { month = 10, day = 1 }
end = { month = 10, day = 31 }

[[event]]
key = "obon-2024"
name = "watanagashi"
start = { month = 6, day = 19, year = 2024 }
end = { month = 6, day = 19, year = 2024 }

[[character]]
name = "Rika"
class_name = "clickableImage"
click_sound = "src/nipah.MP3"

[character.sprites.default]
idle = "RikaOG_(1).webp"
clicked = "RikaOG_(4).webp"

[character.sprites.events.halloween]
idle = "Rika_Default.webp"
clicked = "Rika_Happy.webp"
"#;

    #[test]
    fn parse_sample() {
        let config: MascotConfig = toml::from_str(SAMPLE).unwrap();
        assert_eq!(config.sprites.base_path, PathBuf::from("assets/sprites"));
        assert_eq!(config.sprites.default_folder, "default");

        assert_eq!(config.events.len(), 2);
        assert_eq!(config.events[0].name, "halloween");
        assert_eq!(config.events[0].key, None);
        assert_eq!(config.events[0].start.year, None);
        assert_eq!(config.events[1].key.as_deref(), Some("obon-2024"));
        assert_eq!(config.events[1].end.year, Some(2024));

        let rika = &config.characters[0];
        assert_eq!(rika.sprites.default.clicked, "RikaOG_(4).webp");
        assert_eq!(
            rika.sprites.events["halloween"].idle.as_deref(),
            Some("Rika_Default.webp")
        );
    }

    #[test]
    fn empty_document_is_default() {
        let config: MascotConfig = toml::from_str("").unwrap();
        assert!(config.events.is_empty());
        assert!(config.characters.is_empty());
        assert_eq!(config.sprites.base_path, PathBuf::from("src/sprites"));
    }

    #[test]
    fn unknown_field_rejected() {
        let doc = r#"
[[event]]
name = "halloween"
start = { month = 10, day = 1 }
end = { month = 10, day = 31 }
colour = "orange"
"#;
        let err = toml::from_str::<MascotConfig>(doc).unwrap_err();
        assert!(err.to_string().contains("colour"), "{err}");
    }

    #[test]
    fn unknown_boundary_field_rejected() {
        let doc = r#"
[[event]]
name = "halloween"
start = { month = 10, day = 1, hour = 3 }
end = { month = 10, day = 31 }
"#;
        assert!(toml::from_str::<MascotConfig>(doc).is_err());
    }

    #[test]
    fn load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE.as_bytes()).unwrap();
        let config = load(file.path()).unwrap();
        assert_eq!(config.events.len(), 2);
        assert_eq!(config.characters.len(), 1);
    }

    #[test]
    fn load_missing_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = load(&dir.path().join("absent.toml")).unwrap_err();
        assert!(
            format!("{err:#}").contains("failed to read config file"),
            "{err:#}"
        );
    }
}
