//! I define [`TripleStore`], a collection of named graphs
//! exposed as a set of quads.
use std::collections::hash_map::Entry;
use std::collections::HashMap;

use trigon_term::{LiteralEqualityMode, Node, Quad, Triple};

use crate::collection::TripleCollection;
use crate::graph::Graph;
use crate::CollectionError;

/// A set of graphs, indexed by name (`None` for the default graph).
#[derive(Clone, Debug)]
pub struct TripleStore {
    mode: LiteralEqualityMode,
    graphs: HashMap<Option<Node>, Graph>,
}

impl TripleStore {
    /// A new empty store, comparing literals strictly.
    pub fn new() -> Self {
        Self::with_mode(LiteralEqualityMode::Strict)
    }

    /// A new empty store, whose graphs compare literals according to `mode`.
    pub fn with_mode(mode: LiteralEqualityMode) -> Self {
        TripleStore {
            mode,
            graphs: HashMap::new(),
        }
    }

    /// The equality mode of the graphs created by this store.
    pub fn equality_mode(&self) -> LiteralEqualityMode {
        self.mode
    }

    /// Add `graph` to this store, under its own name.
    ///
    /// If a graph with the same name already exists,
    /// `graph` is merged into it if `merge_if_exists` is true,
    /// otherwise the store is left unchanged.
    ///
    /// Return `true` iff the store was modified.
    pub fn add_graph(&mut self, graph: Graph, merge_if_exists: bool) -> Result<bool, CollectionError> {
        match self.graphs.entry(graph.name().cloned()) {
            Entry::Vacant(e) => {
                e.insert(graph);
                Ok(true)
            }
            Entry::Occupied(mut e) if merge_if_exists => {
                e.get_mut().merge(&graph)?;
                Ok(true)
            }
            Entry::Occupied(_) => Ok(false),
        }
    }

    /// Remove the graph named `name`, returning it if it existed.
    pub fn remove_graph(&mut self, name: Option<&Node>) -> Option<Graph> {
        self.graphs.remove(&name.cloned())
    }

    /// Whether this store has a graph named `name`.
    pub fn has_graph(&self, name: Option<&Node>) -> bool {
        self.graphs.contains_key(&name.cloned())
    }

    /// The graph named `name`, if any.
    pub fn graph(&self, name: Option<&Node>) -> Option<&Graph> {
        self.graphs.get(&name.cloned())
    }

    /// The graph named `name`, if any.
    pub fn graph_mut(&mut self, name: Option<&Node>) -> Option<&mut Graph> {
        self.graphs.get_mut(&name.cloned())
    }

    /// The names of the graphs of this store, sorted (the default graph first).
    pub fn graph_names(&self) -> Vec<Option<&Node>> {
        let mut names: Vec<_> = self.graphs.keys().map(Option::as_ref).collect();
        names.sort();
        names
    }

    /// The graphs of this store, in no particular order.
    pub fn graphs(&self) -> impl Iterator<Item = &Graph> {
        self.graphs.values()
    }

    /// Assert the triple of `quad` in the graph it names,
    /// creating that graph if needed.
    ///
    /// Return `true` iff the triple was not already asserted in that graph.
    pub fn add_quad(&mut self, quad: Quad) -> Result<bool, CollectionError> {
        let (triple, name) = quad.into_parts();
        let mode = self.mode;
        let graph = self.graphs.entry(name.clone()).or_insert_with(|| {
            let mut g = Graph::with_mode(mode);
            g.set_name(name);
            g
        });
        graph.assert(triple)
    }

    /// Retract the triple of `quad` from the graph it names.
    ///
    /// Return `true` iff the triple was asserted in that graph.
    pub fn delete_quad(&mut self, quad: &Quad) -> bool {
        self.graph_mut(quad.graph())
            .is_some_and(|g| g.retract(quad.triple()))
    }

    /// Whether the triple of `quad` is asserted in the graph it names.
    pub fn contains_quad(&self, quad: &Quad) -> bool {
        self.graph(quad.graph())
            .is_some_and(|g| g.contains(quad.triple()))
    }

    /// All the quads of this store.
    pub fn quads(&self) -> impl Iterator<Item = Quad> + '_ {
        self.quads_matching(None, None, None, None)
    }

    /// The quads matching the given pattern.
    ///
    /// For `s`, `p` and `o`, `None` is a wildcard.
    /// For `g`, `None` is a wildcard, `Some(None)` is the default graph.
    pub fn quads_matching<'s>(
        &'s self,
        s: Option<&Node>,
        p: Option<&Node>,
        o: Option<&Node>,
        g: Option<Option<&Node>>,
    ) -> impl Iterator<Item = Quad> + 's {
        let graphs: Vec<&Graph> = match g {
            None => self.graphs.values().collect(),
            Some(name) => self.graph(name).into_iter().collect(),
        };
        let triples: Vec<(&Triple, Option<&Node>)> = graphs
            .into_iter()
            .flat_map(|g| g.matching(s, p, o).map(move |t| (t, g.name())))
            .collect();
        triples
            .into_iter()
            .map(|(t, name)| Quad::new(t.clone(), name.cloned()))
    }

    /// The total number of asserted triples, across all graphs.
    pub fn triple_count(&self) -> usize {
        self.graphs.values().map(Graph::len).sum()
    }

    /// Whether this store has no asserted triple in any graph.
    pub fn is_empty(&self) -> bool {
        self.triple_count() == 0
    }
}

impl Default for TripleStore {
    fn default() -> Self {
        Self::new()
    }
}
