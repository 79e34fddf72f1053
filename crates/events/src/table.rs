//! Ordered, immutable event table.

use std::collections::HashSet;

use crate::error::ConfigurationError;
use crate::window::EventWindow;

/// An ordered sequence of `(key, window)` pairs.
///
/// Declaration order is significant: when several windows contain the same
/// day, the one declared first is the active one. Keys and event names are
/// unique within a table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventTable {
    entries: Vec<(String, EventWindow)>,
}

impl EventTable {
    /// Builds a table from entries in declaration order.
    ///
    /// # Errors
    ///
    /// - [`ConfigurationError::DuplicateKey`] if a key repeats.
    /// - [`ConfigurationError::DuplicateName`] if an event name repeats.
    pub fn new<K, I>(entries: I) -> Result<Self, ConfigurationError>
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, EventWindow)>,
    {
        let entries: Vec<(String, EventWindow)> = entries
            .into_iter()
            .map(|(key, window)| (key.into(), window))
            .collect();
        check_unique(&entries)?;
        Ok(Self { entries })
    }

    /// Builds a table keyed by each window's own name.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::DuplicateKey`] if a name repeats.
    pub fn from_windows<I>(windows: I) -> Result<Self, ConfigurationError>
    where
        I: IntoIterator<Item = EventWindow>,
    {
        Self::new(
            windows
                .into_iter()
                .map(|window| (window.name().to_owned(), window)),
        )
    }

    /// Returns the number of windows.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the table has no windows.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over `(key, window)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &EventWindow)> {
        self.entries.iter().map(|(key, window)| (key.as_str(), window))
    }

    /// Looks up a window by key.
    pub fn get(&self, key: &str) -> Option<&EventWindow> {
        self.entries
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, window)| window)
    }
}

fn check_unique(entries: &[(String, EventWindow)]) -> Result<(), ConfigurationError> {
    let mut keys = HashSet::with_capacity(entries.len());
    let mut names = HashSet::with_capacity(entries.len());
    for (key, window) in entries {
        if !keys.insert(key.as_str()) {
            return Err(ConfigurationError::DuplicateKey { key: key.clone() });
        }
        if !names.insert(window.name()) {
            return Err(ConfigurationError::DuplicateName {
                name: window.name().to_owned(),
            });
        }
    }
    Ok(())
}
