//! Check command: validate the configuration and list what it defines.

use anyhow::Result;
use tracing::{info, info_span};

use crate::cli::CheckArgs;
use crate::config;
use crate::convert;

/// Run the check command.
pub fn run(args: CheckArgs) -> Result<()> {
    let _cmd = info_span!("check").entered();
    let config = config::load(&args.config)?;
    let table = convert::build_event_table(&config.events)?;
    let characters = convert::build_characters(&config.characters, &table)?;
    let layout = convert::build_sprite_layout(&config.sprites);
    info!(
        n_events = table.len(),
        n_characters = characters.len(),
        "configuration is valid"
    );

    println!("events (first match wins):");
    if table.is_empty() {
        println!("  (none)");
    }
    for (i, (key, window)) in table.iter().enumerate() {
        if key == window.name() {
            println!("  {}. {window}", i + 1);
        } else {
            println!("  {}. [{key}] {window}", i + 1);
        }
    }

    println!("sprites: {}", layout.base_path().display());
    for character in &characters {
        let events: Vec<&str> = character
            .sprites()
            .events
            .keys()
            .map(String::as_str)
            .collect();
        println!(
            "  {} (.{}): default{}{}",
            character.name(),
            character.class_name(),
            if events.is_empty() { "" } else { ", " },
            events.join(", ")
        );
    }
    Ok(())
}
