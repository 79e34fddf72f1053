//! Character definitions and event-aware sprite selection.

use std::path::PathBuf;

use mascot_events::EventIdentity;

use crate::error::CharacterError;
use crate::sprite::{SpriteLayout, SpriteSet, SpriteState};

/// A clickable character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Character {
    name: String,
    class_name: String,
    sprites: SpriteSet,
    click_sound: String,
}

impl Character {
    /// Creates a character.
    ///
    /// # Errors
    ///
    /// Returns a [`CharacterError`] if the name, class name, click sound or
    /// any provided sprite file name is blank.
    pub fn new(
        name: impl Into<String>,
        class_name: impl Into<String>,
        sprites: SpriteSet,
        click_sound: impl Into<String>,
    ) -> Result<Self, CharacterError> {
        let name = name.into();
        let class_name = class_name.into();
        let click_sound = click_sound.into();

        if name.trim().is_empty() {
            return Err(CharacterError::EmptyName);
        }
        if class_name.trim().is_empty() {
            return Err(CharacterError::EmptyClassName { character: name });
        }
        if click_sound.trim().is_empty() {
            return Err(CharacterError::EmptyClickSound { character: name });
        }
        check_sprites(&name, &sprites)?;

        Ok(Self {
            name,
            class_name,
            sprites,
            click_sound,
        })
    }

    /// Returns the character name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the element class name.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Returns the sprite set.
    pub fn sprites(&self) -> &SpriteSet {
        &self.sprites
    }

    /// Returns the click sound path.
    pub fn click_sound(&self) -> &str {
        &self.click_sound
    }

    /// Returns the default sprite path for `state`.
    pub fn default_sprite_path(&self, state: SpriteState, layout: &SpriteLayout) -> PathBuf {
        layout.default_sprite(self.sprites.default.get(state))
    }

    /// Returns the sprite path for `state` during `event`.
    ///
    /// Uses the event's sprite when the character has one for that state,
    /// otherwise the default sprite.
    pub fn sprite_path(
        &self,
        state: SpriteState,
        event: Option<&EventIdentity>,
        layout: &SpriteLayout,
    ) -> PathBuf {
        event
            .and_then(|event| {
                self.sprites
                    .events
                    .get(event.name())
                    .and_then(|sprites| sprites.get(state))
                    .map(|file| layout.event_sprite(event.name(), file))
            })
            .unwrap_or_else(|| self.default_sprite_path(state, layout))
    }
}

fn check_sprites(character: &str, sprites: &SpriteSet) -> Result<(), CharacterError> {
    let empty = |folder: &str, state: SpriteState| CharacterError::EmptySprite {
        character: character.to_owned(),
        folder: folder.to_owned(),
        state: state.as_str(),
    };
    for state in [SpriteState::Idle, SpriteState::Clicked] {
        if sprites.default.get(state).trim().is_empty() {
            return Err(empty("default", state));
        }
        for (event, event_sprites) in &sprites.events {
            if event_sprites.get(state).is_some_and(|f| f.trim().is_empty()) {
                return Err(empty(event.as_str(), state));
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sprite::{EventSprites, SpritePair};

    fn rika() -> Character {
        let sprites = SpriteSet::new(SpritePair::new("RikaOG_(1).webp", "RikaOG_(4).webp"))
            .with_event(
                "halloween",
                EventSprites {
                    idle: Some("Rika_Default.webp".into()),
                    clicked: Some("Rika_Happy.webp".into()),
                },
            )
            .with_event(
                "watanagashi",
                EventSprites {
                    idle: Some("Rika_Watanagashi__happy.webp".into()),
                    clicked: None,
                },
            );
        Character::new("Rika", "clickableImage", sprites, "src/nipah.MP3").unwrap()
    }

    #[test]
    fn accessors() {
        let c = rika();
        assert_eq!(c.name(), "Rika");
        assert_eq!(c.class_name(), "clickableImage");
        assert_eq!(c.click_sound(), "src/nipah.MP3");
        assert_eq!(c.sprites().events.len(), 2);
    }

    #[test]
    fn no_event_uses_default() {
        let path = rika().sprite_path(SpriteState::Idle, None, &SpriteLayout::new());
        assert_eq!(path, PathBuf::from("src/sprites/default/RikaOG_(1).webp"));
    }

    #[test]
    fn event_sprite_used() {
        let event = EventIdentity::new("halloween");
        let path = rika().sprite_path(SpriteState::Clicked, Some(&event), &SpriteLayout::new());
        assert_eq!(path, PathBuf::from("src/sprites/halloween/Rika_Happy.webp"));
    }

    #[test]
    fn unknown_event_falls_back() {
        let event = EventIdentity::new("newyear");
        let path = rika().sprite_path(SpriteState::Clicked, Some(&event), &SpriteLayout::new());
        assert_eq!(path, PathBuf::from("src/sprites/default/RikaOG_(4).webp"));
    }

    #[test]
    fn missing_state_falls_back_per_state() {
        let event = EventIdentity::new("watanagashi");
        let layout = SpriteLayout::new();
        assert_eq!(
            rika().sprite_path(SpriteState::Idle, Some(&event), &layout),
            PathBuf::from("src/sprites/watanagashi/Rika_Watanagashi__happy.webp")
        );
        assert_eq!(
            rika().sprite_path(SpriteState::Clicked, Some(&event), &layout),
            PathBuf::from("src/sprites/default/RikaOG_(4).webp")
        );
    }

    #[test]
    fn blank_name_rejected() {
        let sprites = SpriteSet::new(SpritePair::new("a", "b"));
        assert_eq!(
            Character::new("", "c", sprites, "s").unwrap_err(),
            CharacterError::EmptyName
        );
    }

    #[test]
    fn blank_class_name_rejected() {
        let sprites = SpriteSet::new(SpritePair::new("a", "b"));
        assert!(matches!(
            Character::new("Hanyuu", " ", sprites, "s"),
            Err(CharacterError::EmptyClassName { .. })
        ));
    }

    #[test]
    fn blank_click_sound_rejected() {
        let sprites = SpriteSet::new(SpritePair::new("a", "b"));
        assert!(matches!(
            Character::new("Hanyuu", "c", sprites, ""),
            Err(CharacterError::EmptyClickSound { .. })
        ));
    }

    #[test]
    fn blank_default_sprite_rejected() {
        let sprites = SpriteSet::new(SpritePair::new("a", ""));
        assert_eq!(
            Character::new("Hanyuu", "c", sprites, "s").unwrap_err(),
            CharacterError::EmptySprite {
                character: "Hanyuu".into(),
                folder: "default".into(),
                state: "clicked",
            }
        );
    }

    #[test]
    fn blank_event_sprite_rejected() {
        let sprites = SpriteSet::new(SpritePair::new("a", "b")).with_event(
            "halloween",
            EventSprites {
                idle: Some(String::new()),
                clicked: None,
            },
        );
        assert!(matches!(
            Character::new("Hanyuu", "c", sprites, "s"),
            Err(CharacterError::EmptySprite { ref folder, state: "idle", .. }) if folder == "halloween"
        ));
    }
}
