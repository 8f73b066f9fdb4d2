// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Package fixtures shared by the unit tests.

use hpkg::Package;
use proptest::prelude::*;

/// `A` provides `x`, `B` provides `y` and requires `x`, `C` requires `y`.
pub fn chain() -> Vec<Package> {
    vec![
        Package::new("A", "/system/packages/A.hpkg", &["x"], &[]),
        Package::new("B", "/system/packages/B.hpkg", &["y"], &["x"]),
        Package::new("C", "/system/packages/C.hpkg", &[], &["y"]),
    ]
}

/// The pool of capabilities generated packages draw from.
pub const CAPABILITIES: &[&str] = &["a", "b", "c", "lib:libd", "cmd:e", "f"];

/// Generates package lists with unique names and random provides/requires.
pub fn arb_packages() -> impl Strategy<Value = Vec<Package>> {
    let capabilities = || proptest::sample::subsequence(CAPABILITIES, 0..=CAPABILITIES.len());
    proptest::collection::vec((capabilities(), capabilities()), 0..8).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (provides, requires))| {
                Package::new(
                    &format!("pkg{i}"),
                    format!("/boot/system/packages/pkg{i}.hpkg"),
                    &provides,
                    &requires,
                )
            })
            .collect()
    })
}
