// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use anyhow::Result;
use hpkg::{InstalledPackages, Package};
use std::io::Write;

use crate::{
    bounded_graph, closure_graph, find_leaves, render_dot, write_leaves, Catalog,
    CapabilityIndex, EdgeMode,
};

/// Shown unless the user opts out, since the output is easy to over-trust.
pub const WARNING: &str = "\
Be aware that this program:
* relies only on the metadata packages declare, so treat its output as a hint, not a fact
* does not check versions (if A provides dep=1, B provides dep=2 and C requires dep>=2, both A and B are listed as dependencies of C)
* does not know whether a package was installed on purpose or pulled in as a dependency
* treats 'supplements' as 'requires'
* does not look for alternative providers or disjoint sets
* parses the text printed by 'package list -i' for every package file found
";

/// Misuse of an operation, detected before any package is read.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum UsageError {
    #[error("a package list is required with the --all-requirements option")]
    MissingSeeds,
}

/// Settings shared by all operations.
#[derive(Clone, Debug)]
pub struct Options {
    /// Whether to print [`WARNING`] along with the report.
    pub show_warnings: bool,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            show_warnings: true,
        }
    }
}

/// The reports this tool can produce.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Operation {
    /// List packages nothing depends on.
    Leaves,
    /// Graph everything reachable from `seeds` through requirements.
    GraphClosure { seeds: Vec<String> },
    /// Graph `interest` and its immediate neighbors. An empty list means
    /// every discovered package.
    GraphBounded { interest: Vec<String>, edges: EdgeMode },
}

impl Operation {
    pub fn validate(&self) -> Result<(), UsageError> {
        match self {
            Operation::GraphClosure { seeds } if seeds.is_empty() => Err(UsageError::MissingSeeds),
            _ => Ok(()),
        }
    }
}

/// Produces the full list of package records an operation works on.
pub trait PackageSource {
    fn packages(&self) -> Result<Vec<Package>>;
}

impl PackageSource for InstalledPackages {
    fn packages(&self) -> Result<Vec<Package>> {
        self.read_all()
    }
}

impl PackageSource for Vec<Package> {
    fn packages(&self) -> Result<Vec<Package>> {
        Ok(self.clone())
    }
}

/// Runs `operation` over the packages from `source` and writes the report
/// to `w`.
///
/// For `leaves`, [`WARNING`] goes to `notices` so the report stays a plain
/// list; graphs carry it as their label instead. Nothing is written if
/// reading packages fails.
pub fn run<W: Write, N: Write>(
    operation: &Operation,
    options: &Options,
    source: &dyn PackageSource,
    mut w: W,
    mut notices: N,
) -> Result<()> {
    operation.validate()?;

    let catalog = Catalog::new(source.packages()?);
    tracing::info!("Loaded {} packages", catalog.all_records().len());

    let warning = options.show_warnings.then_some(WARNING);

    match operation {
        Operation::Leaves => {
            if let Some(warning) = warning {
                writeln!(notices, "{warning}")?;
                notices.flush()?;
            }
            // Leaves are not name-keyed, so shadowed records still count.
            write_leaves(&mut w, &find_leaves(catalog.all_records()))?;
        }
        Operation::GraphClosure { seeds } => {
            let index = CapabilityIndex::build(catalog.packages());
            let graph = closure_graph(seeds, &catalog, &index);
            render_dot(&mut w, &graph, warning)?;
        }
        Operation::GraphBounded { interest, edges } => {
            let index = CapabilityIndex::build(catalog.packages());
            let interest = if interest.is_empty() {
                catalog.names().map(str::to_owned).collect()
            } else {
                interest.clone()
            };
            let graph = bounded_graph(&interest, &catalog, &index, *edges);
            render_dot(&mut w, &graph, warning)?;
        }
    }
    w.flush()?;
    Ok(())
}
