// SPDX-License-Identifier: MPL-2.0
//! The fixed list of remote images offered in the picker.
//!
//! Entries are ordered; the picker shows them in this order and a selection
//! is identified by its index. Lookups with an index outside the list return
//! `None` so callers can reject invalid selections without panicking.

use std::fmt;

/// Index selected at startup.
pub const DEFAULT_INDEX: usize = 0;

/// A named remote image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub url: &'static str,
}

impl fmt::Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

static ENTRIES: [CatalogEntry; 2] = [
    CatalogEntry {
        name: "Cat JPEG",
        url: "https://images.pexels.com/photos/1870376/pexels-photo-1870376.jpeg?auto=compress&cs=tinysrgb&w=800",
    },
    CatalogEntry {
        name: "Rocks PNG",
        url: "https://filesampleshub.com/download/image/png/sample1.png",
    },
];

/// Returns all entries in display order.
#[must_use]
pub fn entries() -> &'static [CatalogEntry] {
    &ENTRIES
}

/// Returns the entry at `index`, or `None` when out of range.
#[must_use]
pub fn entry(index: usize) -> Option<&'static CatalogEntry> {
    ENTRIES.get(index)
}

/// Returns the URL of the entry at `index`.
#[must_use]
pub fn url_for(index: usize) -> Option<&'static str> {
    entry(index).map(|e| e.url)
}

/// Returns the index of the entry with the given display name.
#[must_use]
pub fn position_of(name: &str) -> Option<usize> {
    ENTRIES.iter().position(|e| e.name == name)
}
