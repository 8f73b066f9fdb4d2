// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use anyhow::Result;
use std::{collections::HashSet, io::Write};

use hpkg::Package;

/// Returns the packages that provide nothing any package requires, in input
/// order. A package providing nothing at all is always a leaf.
pub fn find_leaves(packages: &[Package]) -> Vec<&Package> {
    let required: HashSet<&str> = packages
        .iter()
        .flat_map(|package| package.requires.iter().map(String::as_str))
        .collect();
    packages
        .iter()
        .filter(|package| {
            !package
                .provides
                .iter()
                .any(|capability| required.contains(capability.as_str()))
        })
        .collect()
}

/// Writes one `<name> <path>` line per leaf.
pub fn write_leaves<W: Write>(mut w: W, leaves: &[&Package]) -> Result<()> {
    for package in leaves {
        writeln!(w, "{} {}", package.name, package.path.display())?;
    }
    Ok(())
}
