// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::HashMap;

use hpkg::Package;

/// Maps each capability to the packages providing and requiring it.
///
/// Package names are listed in the order the packages were given. The index
/// is never modified after [`CapabilityIndex::build`].
#[derive(Debug, Default)]
pub struct CapabilityIndex {
    providers: HashMap<String, Vec<String>>,
    requirers: HashMap<String, Vec<String>>,
}

impl CapabilityIndex {
    pub fn build<'a>(packages: impl IntoIterator<Item = &'a Package>) -> Self {
        let mut index = Self::default();
        for package in packages {
            for capability in &package.provides {
                index
                    .providers
                    .entry(capability.clone())
                    .or_default()
                    .push(package.name.clone());
            }
            for capability in &package.requires {
                index
                    .requirers
                    .entry(capability.clone())
                    .or_default()
                    .push(package.name.clone());
            }
        }
        index
    }

    /// Names of packages providing `capability`. Empty if nothing does.
    pub fn providers(&self, capability: &str) -> &[String] {
        self.providers
            .get(capability)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Names of packages requiring `capability`. Empty if nothing does.
    pub fn requirers(&self, capability: &str) -> &[String] {
        self.requirers
            .get(capability)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
