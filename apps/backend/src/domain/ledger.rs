//! Insertion-ordered per-player map.

use serde::{Deserialize, Serialize};

use crate::domain::state::PlayerId;

/// Map keyed by `PlayerId` that iterates in first-appearance order.
///
/// Entries are created lazily and never removed; scorecards and the
/// finalized payload rely on this order for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger<T> {
    entries: Vec<(PlayerId, T)>,
}

impl<T> Default for Ledger<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> Ledger<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: PlayerId) -> Option<&T> {
        self.entries.iter().find(|(k, _)| *k == id).map(|(_, v)| v)
    }

    pub fn get_mut(&mut self, id: PlayerId) -> Option<&mut T> {
        self.entries
            .iter_mut()
            .find(|(k, _)| *k == id)
            .map(|(_, v)| v)
    }

    pub fn contains(&self, id: PlayerId) -> bool {
        self.entries.iter().any(|(k, _)| *k == id)
    }

    /// Insert or overwrite, keeping the original position of an existing key.
    pub fn insert(&mut self, id: PlayerId, value: T) {
        match self.get_mut(id) {
            Some(slot) => *slot = value,
            None => self.entries.push((id, value)),
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, &T)> {
        self.entries.iter().map(|(k, v)| (*k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.entries.iter().map(|(k, _)| *k)
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<T: Default> Ledger<T> {
    /// Fetch the entry for `id`, creating a default one at the end if absent.
    pub fn entry(&mut self, id: PlayerId) -> &mut T {
        let pos = match self.entries.iter().position(|(k, _)| *k == id) {
            Some(pos) => pos,
            None => {
                self.entries.push((id, T::default()));
                self.entries.len() - 1
            }
        };
        &mut self.entries[pos].1
    }
}
