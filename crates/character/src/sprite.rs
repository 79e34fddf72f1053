//! Sprite sets and their on-disk layout.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

/// Which of a character's two poses to show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SpriteState {
    /// Resting pose.
    #[default]
    Idle,
    /// Shown while the click sound plays.
    Clicked,
}

impl SpriteState {
    /// Returns the lowercase state name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Clicked => "clicked",
        }
    }
}

impl fmt::Display for SpriteState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The mandatory default sprites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpritePair {
    /// Idle sprite file name.
    pub idle: String,
    /// Clicked sprite file name.
    pub clicked: String,
}

impl SpritePair {
    /// Creates a sprite pair.
    pub fn new(idle: impl Into<String>, clicked: impl Into<String>) -> Self {
        Self {
            idle: idle.into(),
            clicked: clicked.into(),
        }
    }

    /// Returns the file for `state`.
    pub fn get(&self, state: SpriteState) -> &str {
        match state {
            SpriteState::Idle => &self.idle,
            SpriteState::Clicked => &self.clicked,
        }
    }
}

/// Event-specific sprites. Either state may be missing and then falls back
/// to the default sprite for that state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventSprites {
    /// Idle sprite file name.
    pub idle: Option<String>,
    /// Clicked sprite file name.
    pub clicked: Option<String>,
}

impl EventSprites {
    /// Returns the file for `state`, if any.
    pub fn get(&self, state: SpriteState) -> Option<&str> {
        match state {
            SpriteState::Idle => self.idle.as_deref(),
            SpriteState::Clicked => self.clicked.as_deref(),
        }
    }
}

/// All sprites of one character, keyed by event name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteSet {
    /// Sprites shown when no event (or no matching event sprite) applies.
    pub default: SpritePair,
    /// Per-event overrides.
    pub events: BTreeMap<String, EventSprites>,
}

impl SpriteSet {
    /// Creates a sprite set with defaults only.
    pub fn new(default: SpritePair) -> Self {
        Self {
            default,
            events: BTreeMap::new(),
        }
    }

    /// Adds sprites for an event.
    pub fn with_event(mut self, event: impl Into<String>, sprites: EventSprites) -> Self {
        self.events.insert(event.into(), sprites);
        self
    }
}

/// Where sprite folders live.
///
/// Event sprites sit in `<base_path>/<event name>/`, defaults in
/// `<base_path>/<default_folder>/`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteLayout {
    base_path: PathBuf,
    default_folder: String,
}

impl Default for SpriteLayout {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("src/sprites"),
            default_folder: "default".to_string(),
        }
    }
}

impl SpriteLayout {
    /// Creates the default layout (`src/sprites`, `default`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base directory.
    pub fn with_base_path(mut self, base_path: impl Into<PathBuf>) -> Self {
        self.base_path = base_path.into();
        self
    }

    /// Sets the folder holding default sprites.
    pub fn with_default_folder(mut self, folder: impl Into<String>) -> Self {
        self.default_folder = folder.into();
        self
    }

    /// Returns the base directory.
    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Returns the default sprite folder name.
    pub fn default_folder(&self) -> &str {
        &self.default_folder
    }

    pub(crate) fn default_sprite(&self, file: &str) -> PathBuf {
        self.base_path.join(&self.default_folder).join(file)
    }

    pub(crate) fn event_sprite(&self, event: &str, file: &str) -> PathBuf {
        self.base_path.join(event).join(file)
    }
}
