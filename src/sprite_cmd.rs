//! Sprite command: print the sprite a character shows on a date.

use anyhow::{Result, anyhow};
use tracing::{debug, info_span};

use mascot_events::EventResolver;

use crate::cli::SpriteArgs;
use crate::clock::CliClock;
use crate::config;
use crate::convert;

/// Run the sprite command.
pub fn run(args: SpriteArgs) -> Result<()> {
    let _cmd = info_span!("sprite", character = %args.character).entered();
    let config = config::load(&args.config)?;
    let table = convert::build_event_table(&config.events)?;
    let characters = convert::build_characters(&config.characters, &table)?;
    let layout = convert::build_sprite_layout(&config.sprites);
    let state = convert::parse_sprite_state(&args.state)?;

    let character = characters
        .iter()
        .find(|c| c.name() == args.character)
        .ok_or_else(|| {
            let available: Vec<_> = characters.iter().map(|c| c.name()).collect();
            anyhow!(
                "unknown character {:?} (available: {:?})",
                args.character,
                available
            )
        })?;

    let resolver = EventResolver::new(table, CliClock::from_arg(args.date.as_deref())?);
    let event = resolver.current();
    let path = character.sprite_path(state, event.as_ref(), &layout);
    debug!(%state, path = %path.display(), "selected sprite");

    println!("{}", path.display());
    Ok(())
}
