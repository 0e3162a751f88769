//! Core entities for lexical ordering

use super::errors::Contradiction;
use super::value_objects::{Precedence, Symbol, Word};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::{BTreeSet, HashMap};
use std::fmt;

/// Deduplicated precedence constraints and the symbols they mention
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintSet {
    /// All `(before, after)` pairs, never `(a, a)`
    pub constraints: BTreeSet<Precedence>,
    /// Every symbol appearing in at least one constraint
    pub symbols: BTreeSet<Symbol>,
}

impl ConstraintSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `before < after`. Returns false for self-pairs and duplicates.
    pub fn insert(&mut self, before: Symbol, after: Symbol) -> bool {
        let Some(precedence) = Precedence::new(before, after) else {
            return false;
        };
        self.symbols.insert(before);
        self.symbols.insert(after);
        self.constraints.insert(precedence)
    }

    pub fn contains(&self, before: Symbol, after: Symbol) -> bool {
        Precedence::new(before, after)
            .map(|p| self.constraints.contains(&p))
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.constraints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.constraints.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Precedence> {
        self.constraints.iter()
    }
}

/// Constraint graph keyed by symbol.
///
/// Keeps outgoing edges and an incoming-edge counter per node, so the
/// "no incoming edge" test during sorting is a counter lookup.
#[derive(Debug, Clone, Default)]
pub struct PrecedenceGraph {
    /// Adjacency list: before -> [after, after, ...]
    pub adjacency: HashMap<Symbol, Vec<Symbol>>,
    /// In-degree count for each node
    pub in_degree: HashMap<Symbol, usize>,
    /// All edges, in insertion order
    pub edges: Vec<Precedence>,
}

impl PrecedenceGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the graph for a derived constraint set
    pub fn from_constraints(constraints: &ConstraintSet) -> Self {
        let mut graph = Self::new();
        for symbol in &constraints.symbols {
            graph.add_node(*symbol);
        }
        for precedence in constraints.iter() {
            graph.add_edge(*precedence);
        }
        graph
    }

    /// Add a node with no edges
    pub fn add_node(&mut self, symbol: Symbol) {
        self.adjacency.entry(symbol).or_default();
        self.in_degree.entry(symbol).or_insert(0);
    }

    /// Add an edge; both endpoints become nodes. Duplicates are ignored.
    pub fn add_edge(&mut self, precedence: Precedence) {
        if self.has_edge(precedence.before, precedence.after) {
            return;
        }
        self.add_node(precedence.before);
        self.add_node(precedence.after);

        self.adjacency
            .entry(precedence.before)
            .or_default()
            .push(precedence.after);
        *self.in_degree.entry(precedence.after).or_insert(0) += 1;

        self.edges.push(precedence);
    }

    pub fn has_edge(&self, before: Symbol, after: Symbol) -> bool {
        self.adjacency
            .get(&before)
            .map(|targets| targets.contains(&after))
            .unwrap_or(false)
    }

    /// Nodes with no incoming edge, sorted
    pub fn zero_in_degree_nodes(&self) -> Vec<Symbol> {
        let mut nodes: Vec<Symbol> = self
            .in_degree
            .iter()
            .filter(|(_, &degree)| degree == 0)
            .map(|(symbol, _)| *symbol)
            .collect();
        nodes.sort_unstable();
        nodes
    }

    pub fn node_count(&self) -> usize {
        self.in_degree.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }
}

/// A total order over an alphabet; earlier symbols rank lower.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Symbol>", into = "Vec<Symbol>")]
pub struct SymbolOrdering {
    symbols: Vec<Symbol>,
    ranks: HashMap<Symbol, usize>,
}

impl SymbolOrdering {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        let ranks = symbols
            .iter()
            .enumerate()
            .map(|(rank, symbol)| (*symbol, rank))
            .collect();
        Self { symbols, ranks }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn rank(&self, symbol: Symbol) -> Option<usize> {
        self.ranks.get(&symbol).copied()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Lexicographic comparison under this ordering.
    ///
    /// A strict prefix is smaller. Returns `None` if the first differing
    /// position holds a symbol this ordering does not rank.
    pub fn compare_words(&self, left: &Word, right: &Word) -> Option<Ordering> {
        for (l, r) in left.symbols().iter().zip(right.symbols()) {
            if l == r {
                continue;
            }
            return Some(self.rank(*l)?.cmp(&self.rank(*r)?));
        }
        Some(left.len().cmp(&right.len()))
    }
}

impl From<Vec<Symbol>> for SymbolOrdering {
    fn from(symbols: Vec<Symbol>) -> Self {
        Self::new(symbols)
    }
}

impl From<SymbolOrdering> for Vec<Symbol> {
    fn from(ordering: SymbolOrdering) -> Self {
        ordering.symbols
    }
}

impl fmt::Display for SymbolOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.symbols.iter().try_for_each(|s| write!(f, "{}", s))
    }
}

/// Final answer for one word list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderingOutcome {
    Ordered(SymbolOrdering),
    Impossible(Contradiction),
}

impl OrderingOutcome {
    pub fn is_impossible(&self) -> bool {
        matches!(self, OrderingOutcome::Impossible(_))
    }

    pub fn ordering(&self) -> Option<&SymbolOrdering> {
        match self {
            OrderingOutcome::Ordered(ordering) => Some(ordering),
            OrderingOutcome::Impossible(_) => None,
        }
    }
}

impl fmt::Display for OrderingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderingOutcome::Ordered(ordering) => write!(f, "{}", ordering),
            OrderingOutcome::Impossible(_) => f.write_str("Impossible"),
        }
    }
}
