//! Train categories and category-keyed lookup tables.
//!
//! The category set is closed.  Every table keyed by category is a
//! [`CategoryTable`], which stores an optional value per category and makes
//! the "missing entry" case explicit: callers pick the fallback at the lookup
//! site with [`CategoryTable::get_or`].

use std::str::FromStr;

use crate::OpsError;

/// Service category of a train.  Used only as a lookup key.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TrainCategory {
    Express,
    Local,
    Freight,
    Special,
}

impl TrainCategory {
    /// All categories in declaration order.
    pub const ALL: [TrainCategory; 4] = [
        TrainCategory::Express,
        TrainCategory::Local,
        TrainCategory::Freight,
        TrainCategory::Special,
    ];

    /// Slot of this category in a [`CategoryTable`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Human-readable label, also used as the CSV column value.
    pub fn as_str(self) -> &'static str {
        match self {
            TrainCategory::Express => "Express",
            TrainCategory::Local   => "Local",
            TrainCategory::Freight => "Freight",
            TrainCategory::Special => "Special",
        }
    }
}

impl std::fmt::Display for TrainCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for TrainCategory {
    type Err = OpsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        TrainCategory::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| OpsError::UnknownCategory(s.to_owned()))
    }
}

// ── CategoryTable ─────────────────────────────────────────────────────────────

/// A mapping from [`TrainCategory`] to `T` in which any category may be absent.
///
/// Absence is never an error.  Lookups either return `Option<T>` or take the
/// fallback explicitly, so the default for a missing key is visible where the
/// table is read (weight tables fall back to `0`, factor tables to `1.0`).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CategoryTable<T> {
    slots: [Option<T>; 4],
}

impl<T> Default for CategoryTable<T> {
    fn default() -> Self {
        Self { slots: [None, None, None, None] }
    }
}

impl<T: Copy> CategoryTable<T> {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, category: TrainCategory, value: T) -> Self {
        self.insert(category, value);
        self
    }

    /// Set the entry for `category`, returning the previous value if any.
    pub fn insert(&mut self, category: TrainCategory, value: T) -> Option<T> {
        self.slots[category.index()].replace(value)
    }

    /// Clear the entry for `category`.
    pub fn remove(&mut self, category: TrainCategory) -> Option<T> {
        self.slots[category.index()].take()
    }

    #[inline]
    pub fn get(&self, category: TrainCategory) -> Option<T> {
        self.slots[category.index()]
    }

    /// The entry for `category`, or `fallback` when it has none.
    #[inline]
    pub fn get_or(&self, category: TrainCategory, fallback: T) -> T {
        self.get(category).unwrap_or(fallback)
    }

    pub fn contains(&self, category: TrainCategory) -> bool {
        self.slots[category.index()].is_some()
    }

    /// Present entries in category order.
    pub fn iter(&self) -> impl Iterator<Item = (TrainCategory, T)> + '_ {
        TrainCategory::ALL
            .into_iter()
            .filter_map(|c| self.get(c).map(|v| (c, v)))
    }

    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T: Copy> FromIterator<(TrainCategory, T)> for CategoryTable<T> {
    fn from_iter<I: IntoIterator<Item = (TrainCategory, T)>>(iter: I) -> Self {
        let mut table = CategoryTable::new();
        for (c, v) in iter {
            table.insert(c, v);
        }
        table
    }
}
