// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::BTreeSet;

use hpkg::Package;

use crate::CapabilityIndex;

/// Enumerates `(capability, provider)` for every capability `package`
/// requires. Capabilities nobody provides contribute nothing.
pub fn labeled_dependencies<'a>(
    package: &'a Package,
    index: &'a CapabilityIndex,
) -> impl Iterator<Item = (&'a str, &'a str)> {
    package.requires.iter().flat_map(move |capability| {
        index
            .providers(capability)
            .iter()
            .map(move |provider| (capability.as_str(), provider.as_str()))
    })
}

/// Enumerates `(capability, requirer)` for every capability `package`
/// provides.
pub fn labeled_dependents<'a>(
    package: &'a Package,
    index: &'a CapabilityIndex,
) -> impl Iterator<Item = (&'a str, &'a str)> {
    package.provides.iter().flat_map(move |capability| {
        index
            .requirers(capability)
            .iter()
            .map(move |requirer| (capability.as_str(), requirer.as_str()))
    })
}

/// Names of the packages `package` directly depends on.
pub fn direct_dependencies<'a>(
    package: &'a Package,
    index: &'a CapabilityIndex,
) -> BTreeSet<&'a str> {
    labeled_dependencies(package, index)
        .map(|(_, provider)| provider)
        .collect()
}

/// Names of the packages that directly depend on `package`.
pub fn dependents<'a>(package: &'a Package, index: &'a CapabilityIndex) -> BTreeSet<&'a str> {
    labeled_dependents(package, index)
        .map(|(_, requirer)| requirer)
        .collect()
}
