// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use anyhow::{Context, Result};
use itertools::Itertools;
use rayon::prelude::*;
use std::{
    ffi::OsStr,
    path::{Path, PathBuf},
    process::Command,
};
use walkdir::WalkDir;

use crate::{parse_package_listing, Package};

/// Directory constants understood by `finddir` that hold installed packages.
pub const PACKAGE_DIRECTORY_CONSTANTS: [&str; 2] =
    ["B_SYSTEM_PACKAGES_DIRECTORY", "B_USER_PACKAGES_DIRECTORY"];

/// File extension of Haiku package archives.
pub const PACKAGE_EXTENSION: &str = "hpkg";

/// Specifies where installed packages are found and which tools read them.
#[derive(Clone, Debug)]
pub struct DiscoveryConfig {
    /// The `package` tool, invoked as `package list -i <file>`.
    pub package_tool: PathBuf,
    /// The `finddir` tool, invoked as `finddir <constant>`.
    pub finddir_tool: PathBuf,
    /// Explicit package directories. If empty, the directories are looked up
    /// with `finddir` from [`PACKAGE_DIRECTORY_CONSTANTS`].
    pub directories: Vec<PathBuf>,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            package_tool: PathBuf::from("/bin/package"),
            finddir_tool: PathBuf::from("/bin/finddir"),
            directories: Vec::new(),
        }
    }
}

/// Looks up a platform directory. Any failure is reported as `None`, which
/// callers treat as "no packages there".
pub fn finddir(config: &DiscoveryConfig, which: &str) -> Option<PathBuf> {
    let output = match processes::run_and_capture(Command::new(&config.finddir_tool).arg(which)) {
        Ok(output) => output,
        Err(error) => {
            tracing::debug!("finddir {which} failed: {error:#}");
            return None;
        }
    };
    if !output.status.success() {
        tracing::debug!("finddir {which} exited with {}", output.status);
        return None;
    }
    let stdout = String::from_utf8_lossy(&output.stdout);
    let dir = stdout.strip_suffix('\n').unwrap_or(&stdout);
    if dir.is_empty() {
        return None;
    }
    Some(PathBuf::from(dir))
}

/// Lists the package files directly inside `dir`, sorted by file name.
///
/// A directory that does not exist holds no packages.
pub fn find_package_files(dir: &Path) -> Result<Vec<PathBuf>> {
    if !dir.is_dir() {
        tracing::debug!("Skipping missing package directory {}", dir.display());
        return Ok(Vec::new());
    }
    let mut files = Vec::new();
    for entry in WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let entry = entry.with_context(|| format!("Failed to scan {}", dir.display()))?;
        let path = entry.path();
        if path.extension() == Some(OsStr::new(PACKAGE_EXTENSION)) && !entry.file_type().is_dir()
        {
            files.push(path.to_owned());
        }
    }
    Ok(files)
}

/// Reads one package file with the package tool.
pub fn read_package(config: &DiscoveryConfig, path: &Path) -> Result<Package> {
    let listing = processes::run_and_check_stdout(
        Command::new(&config.package_tool)
            .arg("list")
            .arg("-i")
            .arg(path),
    )
    .with_context(|| format!("Failed to read package {}", path.display()))?;
    Ok(parse_package_listing(path, &listing))
}

/// Returns the package directories to scan.
pub fn package_directories(config: &DiscoveryConfig) -> Vec<PathBuf> {
    if !config.directories.is_empty() {
        return config.directories.clone();
    }
    PACKAGE_DIRECTORY_CONSTANTS
        .iter()
        .filter_map(|which| finddir(config, which))
        .collect()
}

/// Discovers and reads every installed package.
///
/// Packages are read in parallel, but the result keeps discovery order and is
/// only returned once every package has been read. A single failure aborts.
pub fn discover_packages(config: &DiscoveryConfig) -> Result<Vec<Package>> {
    let files: Vec<PathBuf> = package_directories(config)
        .iter()
        .map(|dir| find_package_files(dir))
        .flatten_ok()
        .collect::<Result<_>>()?;
    tracing::info!("Found {} package files", files.len());

    files
        .par_iter()
        .map(|path| read_package(config, path))
        .collect()
}

/// The packages installed on the running system.
#[derive(Clone, Debug, Default)]
pub struct InstalledPackages {
    config: DiscoveryConfig,
}

impl InstalledPackages {
    pub fn new(config: DiscoveryConfig) -> Self {
        Self { config }
    }

    pub fn read_all(&self) -> Result<Vec<Package>> {
        discover_packages(&self.config)
    }
}
