// SPDX-License-Identifier: MPL-2.0
//! Named capability grants.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mapping from capability keys to boolean grants.
///
/// Keys that were never granted read as denied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Permissions(BTreeMap<String, bool>);

impl Permissions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Grants `key`.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>) -> Self {
        self.set(key, true);
        self
    }

    /// Sets the grant for `key`, replacing any previous value.
    pub fn set(&mut self, key: impl Into<String>, granted: bool) {
        self.0.insert(key.into(), granted);
    }

    /// Returns true only if `key` is present and granted.
    #[must_use]
    pub fn is_granted(&self, key: &str) -> bool {
        self.0.get(key).copied().unwrap_or(false)
    }

    /// Iterates over granted keys in sorted order.
    pub fn granted(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, granted)| **granted)
            .map(|(key, _)| key.as_str())
    }
}

impl From<BTreeMap<String, bool>> for Permissions {
    fn from(map: BTreeMap<String, bool>) -> Self {
        Self(map)
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for Permissions {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}
