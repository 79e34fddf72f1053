//! Error types for the mascot-character crate.

/// A malformed character definition.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CharacterError {
    /// Returned when the character name is blank.
    #[error("character name must not be empty")]
    EmptyName,

    /// Returned when the element class name is blank.
    #[error("character {character:?}: class name must not be empty")]
    EmptyClassName {
        /// Name of the offending character.
        character: String,
    },

    /// Returned when the click sound path is blank.
    #[error("character {character:?}: click sound must not be empty")]
    EmptyClickSound {
        /// Name of the offending character.
        character: String,
    },

    /// Returned when a sprite file name is blank.
    #[error("character {character:?}: {folder} {state} sprite must not be empty")]
    EmptySprite {
        /// Name of the offending character.
        character: String,
        /// `"default"` or the event name.
        folder: String,
        /// The sprite state (`idle` or `clicked`).
        state: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_empty_sprite() {
        let err = CharacterError::EmptySprite {
            character: "Rika".into(),
            folder: "default".into(),
            state: "idle",
        };
        assert_eq!(
            err.to_string(),
            "character \"Rika\": default idle sprite must not be empty"
        );
    }

    #[test]
    fn error_is_send_and_sync() {
        fn assert_impl<T: Send + Sync + std::error::Error>() {}
        assert_impl::<CharacterError>();
    }
}
