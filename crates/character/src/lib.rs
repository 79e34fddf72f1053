//! # mascot-character
//!
//! Maps the active event (if any) to a character sprite.
//!
//! The resolver in `mascot-events` only reports *which* event is active.
//! This crate owns the other half: a [`Character`] knows its default sprites
//! and optional per-event sprites, and [`Character::sprite_path`] picks the
//! event sprite when one exists and the default otherwise.
//!
//! ```
//! use mascot_character::{Character, EventSprites, SpriteLayout, SpritePair, SpriteSet, SpriteState};
//! use mascot_events::EventIdentity;
//!
//! let sprites = SpriteSet::new(SpritePair::new("idle.webp", "happy.webp")).with_event(
//!     "halloween",
//!     EventSprites { idle: Some("pumpkin.webp".into()), clicked: None },
//! );
//! let rika = Character::new("Rika", "clickableImage", sprites, "nipah.mp3").unwrap();
//!
//! let halloween = EventIdentity::new("halloween");
//! let layout = SpriteLayout::new();
//! assert!(rika.sprite_path(SpriteState::Idle, Some(&halloween), &layout).ends_with("halloween/pumpkin.webp"));
//! assert!(rika.sprite_path(SpriteState::Clicked, Some(&halloween), &layout).ends_with("default/happy.webp"));
//! ```

mod character;
mod error;
mod sprite;

pub use character::Character;
pub use error::CharacterError;
pub use sprite::{EventSprites, SpriteLayout, SpritePair, SpriteSet, SpriteState};
