// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Reads metadata of Haiku package files (.hpkg).

mod discovery;
mod listing;

pub use crate::discovery::*;
pub use crate::listing::*;

use std::{collections::BTreeSet, path::PathBuf};

/// One installed package, as reported by the package tool.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Package {
    /// Package name. Empty if the listing had no `name:` line.
    pub name: String,
    /// The package file this record was read from.
    pub path: PathBuf,
    /// Capability tokens this package provides.
    pub provides: BTreeSet<String>,
    /// Capability tokens this package requires, including supplements.
    pub requires: BTreeSet<String>,
}

impl Package {
    /// Convenience constructor, mostly for tests and fixtures.
    pub fn new(
        name: &str,
        path: impl Into<PathBuf>,
        provides: &[&str],
        requires: &[&str],
    ) -> Self {
        Self {
            name: name.to_owned(),
            path: path.into(),
            provides: provides.iter().map(|s| s.to_string()).collect(),
            requires: requires.iter().map(|s| s.to_string()).collect(),
        }
    }
}
