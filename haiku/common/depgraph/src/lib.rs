// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

//! Reconstructs provides/requires relationships between installed packages
//! and renders them as leaf lists or DOT graphs.
//!
//! Capabilities are matched by exact string equality. Versions are never
//! checked, so the output is only as good as the declared metadata.

mod catalog;
mod dot;
mod graph;
mod index;
mod leaves;
mod operation;
mod resolve;
mod traverse;

#[cfg(test)]
mod testdata;

pub use crate::catalog::*;
pub use crate::dot::*;
pub use crate::graph::*;
pub use crate::index::*;
pub use crate::leaves::*;
pub use crate::operation::*;
pub use crate::resolve::*;
pub use crate::traverse::*;

pub use hpkg::Package;
