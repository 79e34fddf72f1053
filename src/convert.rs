//! Pure conversion functions: TOML config structs -> crate API types.

use anyhow::{Context, Result, bail};
use chrono::NaiveDate;
use tracing::warn;

use mascot_calendar::CalendarDate;
use mascot_character::{Character, EventSprites, SpriteLayout, SpritePair, SpriteSet, SpriteState};
use mascot_events::{Boundary, EventTable, EventWindow};

use crate::config::*;

/// Parses a sprite state name into the corresponding enum variant.
pub fn parse_sprite_state(s: &str) -> Result<SpriteState> {
    match s.to_lowercase().as_str() {
        "idle" => Ok(SpriteState::Idle),
        "clicked" => Ok(SpriteState::Clicked),
        other => bail!("unknown sprite state: {other:?} (expected idle or clicked)"),
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<CalendarDate> {
    let date = NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("invalid date {s:?} (expected YYYY-MM-DD)"))?;
    Ok(date.into())
}

fn boundary(b: BoundaryToml) -> Boundary {
    Boundary {
        month: b.month,
        day: b.day,
        year: b.year,
    }
}

/// Builds the ordered [`EventTable`] from `[[event]]` entries.
///
/// Entry order is table order. Entries without a `key` are keyed by name.
pub fn build_event_table(events: &[EventToml]) -> Result<EventTable> {
    let entries = events
        .iter()
        .enumerate()
        .map(|(i, event)| -> Result<(String, EventWindow)> {
            let window = EventWindow::new(&event.name, boundary(event.start), boundary(event.end))
                .with_context(|| format!("invalid [[event]] #{}", i + 1))?;
            let key = event.key.clone().unwrap_or_else(|| event.name.clone());
            Ok((key, window))
        })
        .collect::<Result<Vec<_>>>()?;
    EventTable::new(entries).context("invalid event table")
}

/// Builds a [`SpriteLayout`] from the `[sprites]` table.
pub fn build_sprite_layout(sprites: &SpritesToml) -> SpriteLayout {
    SpriteLayout::new()
        .with_base_path(&sprites.base_path)
        .with_default_folder(&sprites.default_folder)
}

/// Builds a [`Character`] from a `[[character]]` entry.
pub fn build_character(c: &CharacterToml) -> Result<Character> {
    let default = SpritePair::new(&c.sprites.default.idle, &c.sprites.default.clicked);
    let sprites = c
        .sprites
        .events
        .iter()
        .fold(SpriteSet::new(default), |set, (event, s)| {
            set.with_event(
                event,
                EventSprites {
                    idle: s.idle.clone(),
                    clicked: s.clicked.clone(),
                },
            )
        });
    Character::new(&c.name, &c.class_name, sprites, &c.click_sound)
        .with_context(|| format!("invalid [[character]] {:?}", c.name))
}

/// Builds all characters and warns about sprites for events the table lacks.
pub fn build_characters(characters: &[CharacterToml], table: &EventTable) -> Result<Vec<Character>> {
    let built = characters
        .iter()
        .map(build_character)
        .collect::<Result<Vec<_>>>()?;
    for character in &built {
        for event in character.sprites().events.keys() {
            let known = table.iter().any(|(_, window)| window.name() == event);
            if !known {
                warn!(
                    character = character.name(),
                    event = %event,
                    "sprites configured for an event that is not in the event table"
                );
            }
        }
    }
    Ok(built)
}
