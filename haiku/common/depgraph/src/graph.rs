// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::{BTreeMap, BTreeSet};

/// How a node is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum NodeKind {
    /// A package that was asked for.
    Normal,
    /// A package only reached through an edge.
    Outside,
    /// A requested name that matches no discovered package.
    Unresolved,
}

#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Edge {
    pub from: String,
    pub to: String,
    /// The capability that produced this edge, if it is tracked.
    pub label: Option<String>,
}

impl Edge {
    pub fn new(from: &str, to: &str, label: Option<&str>) -> Self {
        Self {
            from: from.to_owned(),
            to: to.to_owned(),
            label: label.map(str::to_owned),
        }
    }
}

/// A resolved dependency graph ready to be rendered.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Graph {
    pub nodes: BTreeMap<String, NodeKind>,
    pub edges: Vec<Edge>,
}

impl Graph {
    /// Adds a node unless it is already classified.
    pub fn add_node(&mut self, name: &str, kind: NodeKind) {
        if !self.nodes.contains_key(name) {
            self.nodes.insert(name.to_owned(), kind);
        }
    }

    /// Names of the nodes of the given kind, in name order.
    pub fn nodes_of(&self, kind: NodeKind) -> impl Iterator<Item = &str> {
        self.nodes
            .iter()
            .filter(move |(_, k)| **k == kind)
            .map(|(name, _)| name.as_str())
    }
}

/// Selects how parallel edges between two packages are recorded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EdgeMode {
    /// One unlabeled edge per ordered pair of packages.
    #[default]
    Deduplicated,
    /// One labeled edge per capability connecting two packages.
    AllEdges,
}

impl EdgeMode {
    pub fn collector(self) -> Box<dyn EdgeCollector> {
        match self {
            EdgeMode::Deduplicated => Box::<DedupEdges>::default(),
            EdgeMode::AllEdges => Box::<AllEdges>::default(),
        }
    }
}

/// Accumulates edges discovered by a traversal.
pub trait EdgeCollector {
    /// Records that `from` depends on `to` through `capability`.
    fn add(&mut self, from: &str, to: &str, capability: &str);

    fn into_edges(self: Box<Self>) -> Vec<Edge>;
}

/// Keeps one edge per (from, to) pair, ordered by name.
#[derive(Debug, Default)]
pub struct DedupEdges {
    pairs: BTreeSet<(String, String)>,
}

impl EdgeCollector for DedupEdges {
    fn add(&mut self, from: &str, to: &str, _capability: &str) {
        self.pairs.insert((from.to_owned(), to.to_owned()));
    }

    fn into_edges(self: Box<Self>) -> Vec<Edge> {
        self.pairs
            .into_iter()
            .map(|(from, to)| Edge {
                from,
                to,
                label: None,
            })
            .collect()
    }
}

/// Keeps every edge in discovery order, labeled with its capability.
#[derive(Debug, Default)]
pub struct AllEdges {
    edges: Vec<Edge>,
}

impl EdgeCollector for AllEdges {
    fn add(&mut self, from: &str, to: &str, capability: &str) {
        self.edges.push(Edge::new(from, to, Some(capability)));
    }

    fn into_edges(self: Box<Self>) -> Vec<Edge> {
        self.edges
    }
}
