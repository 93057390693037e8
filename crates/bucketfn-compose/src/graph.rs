//! Reference graph of composed resources using `petgraph`.
//!
//! Builds a directed acyclic graph from selector relations and resolves the
//! order in which the controller can bind them: a resource appears after
//! every resource its selectors point at.
//!
//! The composer always emits a complete, acyclic set, so the unresolved
//! selector and cycle errors only guard direct users of [`DependencyGraph`].

use std::collections::HashMap;

use bucketfn_common::error::{BucketError, Result};
use bucketfn_common::types::ResourceName;
use petgraph::graph::NodeIndex;

use crate::model::DesiredComposed;

/// A dependency graph of composed resources.
#[derive(Debug)]
pub struct DependencyGraph {
    graph: petgraph::Graph<ResourceName, ()>,
}

impl DependencyGraph {
    /// Creates an empty dependency graph.
    #[must_use]
    pub fn new() -> Self {
        Self {
            graph: petgraph::Graph::new(),
        }
    }

    /// Builds the graph for a desired set, one edge per selector candidate.
    ///
    /// A selector is satisfied by every desired resource of its target kind.
    /// Choosing among several candidates is left to the controller.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::UnresolvedSelector`] if a selector has no
    /// candidate in the set.
    pub fn from_desired(desired: &DesiredComposed) -> Result<Self> {
        let mut graph = Self::new();
        let nodes: HashMap<&ResourceName, NodeIndex> = desired
            .keys()
            .map(|name| (name, graph.add_resource(name.clone())))
            .collect();

        for (name, resource) in desired {
            for target in resource.references() {
                let mut matched = false;
                for (candidate, other) in desired {
                    if other.kind() == target {
                        graph.add_dependency(nodes[name], nodes[candidate]);
                        matched = true;
                    }
                }
                if !matched {
                    return Err(BucketError::UnresolvedSelector {
                        resource: name.to_string(),
                        target: target.kind(),
                    });
                }
            }
        }

        Ok(graph)
    }

    /// Adds a resource node to the graph.
    pub fn add_resource(&mut self, name: ResourceName) -> NodeIndex {
        self.graph.add_node(name)
    }

    /// Adds a dependency edge: `dependent` selects `dependency`.
    ///
    /// The graph edge points from `dependency` to `dependent`
    /// so that topological sort yields dependencies first.
    pub fn add_dependency(&mut self, dependent: NodeIndex, dependency: NodeIndex) {
        let _ = self.graph.add_edge(dependency, dependent, ());
    }

    /// Returns the resources ordered so that selector targets come first.
    ///
    /// # Errors
    ///
    /// Returns [`BucketError::CyclicReferences`] if the graph has a cycle.
    pub fn resolve_order(&self) -> Result<Vec<ResourceName>> {
        let indices = petgraph::algo::toposort(&self.graph, None)
            .map_err(|_cycle| BucketError::CyclicReferences)?;
        Ok(indices
            .iter()
            .filter_map(|&idx| self.graph.node_weight(idx).cloned())
            .collect())
    }
}

impl Default for DependencyGraph {
    fn default() -> Self {
        Self::new()
    }
}
