//! Kahn's Topological Sort Algorithm
//!
//! O(V + E) complexity, detects cycles among precedence constraints.

use crate::domain::entities::PrecedenceGraph;
use crate::domain::errors::{Contradiction, OrderingError};
use crate::domain::value_objects::Symbol;
use std::collections::{BTreeSet, HashMap};

/// Perform Kahn's topological sort on the precedence graph.
///
/// Returns every node of the graph, each after all of its predecessors.
/// Ready nodes are taken smallest-first so a given graph always sorts the
/// same way; callers must not rely on which valid order that is.
pub fn kahns_topological_sort(graph: &PrecedenceGraph) -> Result<Vec<Symbol>, OrderingError> {
    // 1. Copy in-degree map (we'll modify it)
    let mut in_degree: HashMap<Symbol, usize> = graph.in_degree.clone();

    // 2. Initialize ready set with zero in-degree nodes
    let mut ready: BTreeSet<Symbol> = graph.zero_in_degree_nodes().into_iter().collect();

    // 3. Repeatedly emit a ready node and release its successors
    let mut sorted: Vec<Symbol> = Vec::with_capacity(graph.node_count());

    while let Some(node) = ready.pop_first() {
        sorted.push(node);

        let Some(targets) = graph.adjacency.get(&node) else {
            continue;
        };
        for target in targets {
            let Some(degree) = in_degree.get_mut(target) else {
                continue;
            };
            *degree = degree.saturating_sub(1);
            if *degree == 0 {
                ready.insert(*target);
            }
        }
    }

    // 4. Cycle detection: nodes left with incoming edges were never ready
    if sorted.len() < graph.node_count() {
        let mut unresolved: Vec<Symbol> = in_degree
            .into_iter()
            .filter(|(_, degree)| *degree > 0)
            .map(|(symbol, _)| symbol)
            .collect();
        unresolved.sort_unstable();
        return Err(Contradiction::Cycle { unresolved }.into());
    }

    Ok(sorted)
}
