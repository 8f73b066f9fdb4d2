// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::{hash_map::Entry, HashMap};

use hpkg::Package;

/// A snapshot of discovered packages, keyed by name.
///
/// Every record is kept in discovery order, but name lookups only see the
/// first record of each name. Later records sharing that name are reported
/// and listed by [`Catalog::duplicates`]; [`Catalog::packages`] skips them, so
/// indices built from it agree with [`Catalog::get`].
#[derive(Debug, Default)]
pub struct Catalog {
    records: Vec<Package>,
    by_name: HashMap<String, usize>,
}

impl Catalog {
    pub fn new(packages: impl IntoIterator<Item = Package>) -> Self {
        let mut catalog = Self::default();
        for package in packages {
            match catalog.by_name.entry(package.name.clone()) {
                Entry::Occupied(entry) => {
                    let kept = &catalog.records[*entry.get()];
                    tracing::warn!(
                        "Package name {:?} is reported by both {} and {}; graphs ignore the latter",
                        package.name,
                        kept.path.display(),
                        package.path.display()
                    );
                }
                Entry::Vacant(entry) => {
                    entry.insert(catalog.records.len());
                }
            }
            catalog.records.push(package);
        }
        catalog
    }

    /// Every discovered record in discovery order, duplicates included.
    pub fn all_records(&self) -> &[Package] {
        &self.records
    }

    fn is_primary(&self, i: usize, package: &Package) -> bool {
        self.by_name.get(&package.name) == Some(&i)
    }

    /// Packages in discovery order, one per name.
    pub fn packages(&self) -> impl Iterator<Item = &Package> {
        self.records
            .iter()
            .enumerate()
            .filter(|(i, p)| self.is_primary(*i, p))
            .map(|(_, p)| p)
    }

    /// Records shadowed by an earlier record of the same name.
    pub fn duplicates(&self) -> impl Iterator<Item = &Package> {
        self.records
            .iter()
            .enumerate()
            .filter(|(i, p)| !self.is_primary(*i, p))
            .map(|(_, p)| p)
    }

    pub fn get(&self, name: &str) -> Option<&Package> {
        self.by_name.get(name).map(|&i| &self.records[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.packages().map(|p| p.name.as_str())
    }
}
