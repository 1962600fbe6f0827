// Copyright (C) 2026 bcdevtools
// SPDX-License-Identifier: GPL-3.0-or-later

use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// How an address takes part in a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InvolverRole {
    Generic,
    Evm,
}

/// Addresses participating in a message, grouped by role.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct InvolversSet(BTreeMap<InvolverRole, BTreeSet<String>>);

impl InvolversSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds non-empty addresses under `role`.
    pub fn add<I, S>(&mut self, role: InvolverRole, addresses: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for address in addresses {
            let address = address.into();
            if !address.is_empty() {
                self.0.entry(role).or_default().insert(address);
            }
        }
        self
    }

    pub fn merge(&mut self, other: InvolversSet) -> &mut Self {
        for (role, addresses) in other.0 {
            self.0.entry(role).or_default().extend(addresses);
        }
        self
    }

    pub fn get(&self, role: InvolverRole) -> Option<&BTreeSet<String>> {
        self.0.get(&role)
    }

    pub fn contains(&self, role: InvolverRole, address: &str) -> bool {
        self.0.get(&role).is_some_and(|set| set.contains(address))
    }

    pub fn is_empty(&self) -> bool {
        self.0.values().all(BTreeSet::is_empty)
    }
}
