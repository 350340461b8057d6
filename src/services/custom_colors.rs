//! Persisted list of user-saved custom colors.
//!
//! The list is ordered newest-first, holds at most
//! [`MAX_CUSTOM_COLORS`](crate::constants::MAX_CUSTOM_COLORS) entries, and
//! contains no duplicates. Entries are canonical `#RRGGBB` uppercase
//! strings. Every successful mutation re-serializes the whole list and
//! writes it to the backing [`KeyValueStore`] under a fixed key.

use std::{error::Error, fmt, io};

use crate::constants::{CUSTOM_COLORS_KEY, MAX_CUSTOM_COLORS};
use crate::models::RgbColor;
use crate::storage::KeyValueStore;

/// Failures surfaced by custom-color mutations.
#[derive(Debug)]
pub enum CustomColorError {
    /// The input is not a parseable hex color.
    InvalidHex(String),
    /// The color is already in the list. No state was changed.
    AlreadyExists(String),
    /// The mutation succeeded in memory but writing it out failed.
    Persist(io::Error),
}

impl fmt::Display for CustomColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidHex(input) => write!(f, "'{input}' is not a valid hex color"),
            Self::AlreadyExists(hex) => write!(f, "{hex} is already saved"),
            Self::Persist(e) => write!(f, "failed to persist custom colors: {e}"),
        }
    }
}

impl Error for CustomColorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Persist(e) => Some(e),
            Self::InvalidHex(_) | Self::AlreadyExists(_) => None,
        }
    }
}

impl From<io::Error> for CustomColorError {
    fn from(e: io::Error) -> Self {
        Self::Persist(e)
    }
}

/// The custom-color list and its backing store.
pub struct CustomColorStore {
    entries: Vec<String>,
    store: Box<dyn KeyValueStore>,
}

impl CustomColorStore {
    /// Load the custom-color list from `store`.
    ///
    /// An absent or malformed payload yields an empty list. Entries that
    /// are not valid hex colors are skipped individually so one bad entry
    /// does not take the rest of the list with it.
    #[must_use]
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let entries = store
            .get(CUSTOM_COLORS_KEY)
            .and_then(|payload| match serde_json::from_str::<Vec<String>>(&payload) {
                Ok(list) => Some(list),
                Err(e) => {
                    tracing::warn!("discarding malformed custom-color payload: {e}");
                    None
                }
            })
            .unwrap_or_default()
            .into_iter()
            .filter(|entry| match Self::canonicalize(entry) {
                Ok(_) => true,
                Err(_) => {
                    tracing::warn!("skipping invalid custom color entry '{entry}'");
                    false
                }
            })
            .collect();

        Self { entries, store }
    }

    /// The saved colors, newest first, as canonical `#RRGGBB` strings.
    #[must_use]
    pub fn colors(&self) -> &[String] {
        &self.entries
    }

    /// Number of saved colors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no colors are saved.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `input` (in any accepted hex spelling) is already saved.
    #[must_use]
    pub fn contains(&self, input: &str) -> bool {
        Self::canonicalize(input)
            .map(|canonical| self.entries.iter().any(|e| e == &canonical))
            .unwrap_or(false)
    }

    /// Save a color at the front of the list.
    ///
    /// The input is canonicalized first, so `ff0000`, `#ff0000`, and
    /// `#FF0000` all name the same entry. If the list would exceed its
    /// capacity the oldest entry is dropped. Returns the canonical form
    /// that was stored.
    ///
    /// # Errors
    ///
    /// [`CustomColorError::InvalidHex`] if the input does not parse,
    /// [`CustomColorError::AlreadyExists`] if the color is already saved
    /// (the list is unchanged), [`CustomColorError::Persist`] if the
    /// write-out fails.
    pub fn add(&mut self, input: &str) -> Result<String, CustomColorError> {
        let canonical = Self::canonicalize(input)?;

        if self.entries.iter().any(|e| e == &canonical) {
            return Err(CustomColorError::AlreadyExists(canonical));
        }

        self.entries.insert(0, canonical.clone());
        self.entries.truncate(MAX_CUSTOM_COLORS);
        self.persist()?;

        Ok(canonical)
    }

    /// Remove a saved color.
    ///
    /// Returns `Ok(true)` if an entry was removed and persisted,
    /// `Ok(false)` if the color was not in the list (nothing is written).
    pub fn remove(&mut self, input: &str) -> io::Result<bool> {
        let Ok(canonical) = Self::canonicalize(input) else {
            return Ok(false);
        };

        let Some(index) = self.entries.iter().position(|e| e == &canonical) else {
            return Ok(false);
        };

        self.entries.remove(index);
        self.persist()?;
        Ok(true)
    }

    /// Canonical stored form: `#RRGGBB`, uppercase.
    fn canonicalize(input: &str) -> Result<String, CustomColorError> {
        RgbColor::from_hex(input)
            .map(|color| color.to_hex_prefixed())
            .map_err(|_| CustomColorError::InvalidHex(input.to_string()))
    }

    fn persist(&mut self) -> io::Result<()> {
        let payload = serde_json::to_string(&self.entries)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        self.store.set(CUSTOM_COLORS_KEY, &payload)
    }
}

impl fmt::Debug for CustomColorStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomColorStore")
            .field("entries", &self.entries)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    fn empty_store() -> CustomColorStore {
        CustomColorStore::load(Box::new(MemoryStore::new()))
    }

    #[test]
    fn test_load_empty() {
        let store = empty_store();
        assert!(store.is_empty());
        assert_eq!(store.colors(), &[] as &[String]);
    }

    #[test]
    fn test_load_existing_list() {
        let backing = MemoryStore::with_entry(CUSTOM_COLORS_KEY, r##"["#FF0000","#00FF00"]"##);
        let store = CustomColorStore::load(Box::new(backing));
        assert_eq!(store.colors(), &["#FF0000", "#00FF00"]);
    }

    #[test]
    fn test_load_skips_invalid_entries() {
        let backing =
            MemoryStore::with_entry(CUSTOM_COLORS_KEY, r##"["#FF0000","nonsense","#00FF00"]"##);
        let store = CustomColorStore::load(Box::new(backing));
        assert_eq!(store.colors(), &["#FF0000", "#00FF00"]);
    }

    #[test]
    fn test_load_malformed_payload_is_empty() {
        let backing = MemoryStore::with_entry(CUSTOM_COLORS_KEY, "{not an array}");
        let store = CustomColorStore::load(Box::new(backing));
        assert!(store.is_empty());
    }

    #[test]
    fn test_add_inserts_at_front() {
        let mut store = empty_store();
        store.add("#FF0000").unwrap();
        store.add("#00FF00").unwrap();

        assert_eq!(store.colors(), &["#00FF00", "#FF0000"]);
    }

    #[test]
    fn test_add_canonicalizes() {
        let mut store = empty_store();
        let stored = store.add("ab12cd").unwrap();
        assert_eq!(stored, "#AB12CD");
        assert_eq!(store.colors(), &["#AB12CD"]);
    }

    #[test]
    fn test_add_duplicate_fails() {
        let mut store = empty_store();
        store.add("#FF0000").unwrap();

        let err = store.add("#FF0000").unwrap_err();
        assert!(matches!(err, CustomColorError::AlreadyExists(_)));
        assert_eq!(store.len(), 1);

        // Different spelling of the same color is still a duplicate
        let err = store.add("ff0000").unwrap_err();
        assert!(matches!(err, CustomColorError::AlreadyExists(_)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_add_invalid_hex_fails() {
        let mut store = empty_store();
        let err = store.add("not-a-color").unwrap_err();
        assert!(matches!(err, CustomColorError::InvalidHex(_)));
        assert!(store.is_empty());
    }

    #[test]
    fn test_capacity_drops_oldest() {
        let mut store = empty_store();
        for i in 0..MAX_CUSTOM_COLORS {
            store.add(&format!("{:06X}", i)).unwrap();
        }
        assert_eq!(store.len(), MAX_CUSTOM_COLORS);
        let oldest = store.colors().last().cloned().unwrap();
        assert_eq!(oldest, "#000000");

        // The 25th distinct color evicts the oldest entry
        store.add("#ABCDEF").unwrap();
        assert_eq!(store.len(), MAX_CUSTOM_COLORS);
        assert_eq!(store.colors()[0], "#ABCDEF");
        assert!(!store.contains("#000000"));
    }

    #[test]
    fn test_remove() {
        let mut store = empty_store();
        store.add("#FF0000").unwrap();
        store.add("#00FF00").unwrap();

        assert!(store.remove("#FF0000").unwrap());
        assert_eq!(store.colors(), &["#00FF00"]);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut store = empty_store();
        store.add("#FF0000").unwrap();

        assert!(!store.remove("#123456").unwrap());
        assert!(!store.remove("garbage").unwrap());
        assert_eq!(store.colors(), &["#FF0000"]);
    }

    #[test]
    fn test_mutations_persist() {
        // Mutate through one store, then reload from the same backing slot
        let mut backing = MemoryStore::new();
        {
            let mut store = CustomColorStore::load(Box::new(MemoryStore::new()));
            store.add("#FF0000").unwrap();
            store.add("#00FF00").unwrap();
            store.remove("#FF0000").unwrap();
            // Copy the payload over to simulate a shared slot
            backing
                .set(
                    CUSTOM_COLORS_KEY,
                    &store.store.get(CUSTOM_COLORS_KEY).unwrap(),
                )
                .unwrap();
        }

        let reloaded = CustomColorStore::load(Box::new(backing));
        assert_eq!(reloaded.colors(), &["#00FF00"]);
    }

    #[test]
    fn test_contains() {
        let mut store = empty_store();
        store.add("#FF0000").unwrap();

        assert!(store.contains("#FF0000"));
        assert!(store.contains("ff0000"));
        assert!(!store.contains("#00FF00"));
        assert!(!store.contains("junk"));
    }
}
