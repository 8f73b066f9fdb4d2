// Copyright 2023 The ChromiumOS Authors
// Use of this source code is governed by a BSD-style license that can be
// found in the LICENSE file.

use std::collections::{BTreeSet, HashSet};

use crate::{
    dependents, direct_dependencies, labeled_dependencies, labeled_dependents, Catalog,
    CapabilityIndex, Edge, EdgeMode, Graph, NodeKind,
};

/// Follows requirements from `seeds` until no new package is reached.
///
/// Every (capability, provider) pair crossed yields one labeled edge. Seeds
/// are [`NodeKind::Normal`], packages reached from them are
/// [`NodeKind::Outside`], and seeds that name no known package are
/// [`NodeKind::Unresolved`] and never expanded.
pub fn closure_graph<'a, S: AsRef<str>>(
    seeds: &'a [S],
    catalog: &'a Catalog,
    index: &'a CapabilityIndex,
) -> Graph {
    let mut graph = Graph::default();
    let mut frontier: BTreeSet<&str> = seeds.iter().map(AsRef::as_ref).collect();
    for &seed in &frontier {
        let kind = if catalog.contains(seed) {
            NodeKind::Normal
        } else {
            NodeKind::Unresolved
        };
        graph.add_node(seed, kind);
    }

    let mut visited: HashSet<&str> = HashSet::new();
    while let Some(name) = frontier.pop_first() {
        if !visited.insert(name) {
            continue;
        }
        let Some(package) = catalog.get(name) else {
            tracing::debug!("Not expanding unknown package {name:?}");
            continue;
        };
        for (capability, provider) in labeled_dependencies(package, index) {
            graph.edges.push(Edge::new(name, provider, Some(capability)));
            graph.add_node(provider, NodeKind::Outside);
            if !visited.contains(provider) {
                frontier.insert(provider);
            }
        }
    }

    tracing::info!(
        "Closure from {} seeds reached {} packages over {} edges",
        seeds.len(),
        visited.len(),
        graph.edges.len()
    );
    graph
}

/// Computes the edges touching the packages of `interest`, plus one hop of
/// outside packages.
///
/// Requirements of interest packages are always followed, and any provider
/// outside the set becomes an [`NodeKind::Outside`] node. Outside packages
/// requiring something an interest package provides also become outside
/// nodes with an edge into the set, but their own requirements are not
/// followed. Names matching no package are [`NodeKind::Unresolved`] and
/// contribute no edges.
pub fn bounded_graph<S: AsRef<str>>(
    interest: &[S],
    catalog: &Catalog,
    index: &CapabilityIndex,
    mode: EdgeMode,
) -> Graph {
    let interest: BTreeSet<&str> = interest.iter().map(AsRef::as_ref).collect();
    let mut graph = Graph::default();
    let mut edges = mode.collector();

    for &name in &interest {
        let Some(package) = catalog.get(name) else {
            tracing::warn!("No package named {name:?} was found");
            graph.add_node(name, NodeKind::Unresolved);
            continue;
        };
        graph.add_node(name, NodeKind::Normal);

        for (capability, provider) in labeled_dependencies(package, index) {
            edges.add(name, provider, capability);
        }
        // Dependents inside the set are covered by their own requirements.
        for (capability, requirer) in labeled_dependents(package, index) {
            if !interest.contains(requirer) {
                edges.add(requirer, name, capability);
            }
        }

        let neighbors = direct_dependencies(package, index)
            .into_iter()
            .chain(dependents(package, index));
        for neighbor in neighbors {
            if !interest.contains(neighbor) {
                graph.add_node(neighbor, NodeKind::Outside);
            }
        }
    }

    graph.edges = edges.into_edges();
    tracing::info!(
        "Graph of {} packages has {} nodes and {} edges",
        interest.len(),
        graph.nodes.len(),
        graph.edges.len()
    );
    graph
}
