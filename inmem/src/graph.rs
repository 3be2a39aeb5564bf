//! I define [`Graph`], a (possibly named) set of triples
//! owning its own blank node scope.
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;

use trigon_term::{BlankNode, Iri, LiteralEqualityMode, Node, NodeFactory, Triple};

use crate::collection::{TripleCollection, TripleIter};
use crate::indexed::IndexedTripleCollection;
use crate::CollectionError;

/// An RDF-star graph.
///
/// A graph has an optional name (`None` for the default graph),
/// an optional base IRI, a [`NodeFactory`] minting blank nodes in the graph's own scope,
/// and an [`IndexedTripleCollection`] holding its triples.
#[derive(Clone, Debug)]
pub struct Graph {
    name: Option<Node>,
    base_iri: Option<Iri>,
    factory: NodeFactory,
    triples: IndexedTripleCollection,
}

impl Graph {
    /// A new unnamed empty graph, comparing literals strictly.
    pub fn new() -> Self {
        Self::with_mode(LiteralEqualityMode::Strict)
    }

    /// A new unnamed empty graph, comparing literals according to `mode`.
    pub fn with_mode(mode: LiteralEqualityMode) -> Self {
        Graph {
            name: None,
            base_iri: None,
            factory: NodeFactory::new(),
            triples: IndexedTripleCollection::with_mode(mode),
        }
    }

    /// A new empty graph named `name`.
    pub fn named(name: Node) -> Self {
        let mut g = Self::new();
        g.name = Some(name);
        g
    }

    /// The name of this graph (`None` for the default graph).
    pub fn name(&self) -> Option<&Node> {
        self.name.as_ref()
    }

    /// Rename this graph.
    pub fn set_name(&mut self, name: Option<Node>) {
        self.name = name;
    }

    /// The base IRI of this graph, if any.
    pub fn base_iri(&self) -> Option<&Iri> {
        self.base_iri.as_ref()
    }

    /// Set the base IRI of this graph.
    pub fn set_base_iri(&mut self, base_iri: Option<Iri>) {
        self.base_iri = base_iri;
    }

    /// The factory of this graph, to build nodes.
    pub fn factory(&self) -> &NodeFactory {
        &self.factory
    }

    /// The factory of this graph, to mint blank nodes.
    pub fn factory_mut(&mut self) -> &mut NodeFactory {
        &mut self.factory
    }

    /// Mint a fresh blank node in the scope of this graph.
    pub fn create_blank_node(&mut self) -> Node {
        self.factory.blank()
    }

    /// The blank node labelled `id` in the scope of this graph.
    pub fn create_blank_node_with_id<T: Into<Arc<str>>>(
        &mut self,
        id: T,
    ) -> trigon_term::Result<Node> {
        self.factory.blank_with_id(id)
    }

    /// The underlying triple collection.
    pub fn triples(&self) -> &IndexedTripleCollection {
        &self.triples
    }

    /// Assert `triple` in this graph.
    ///
    /// Return `true` iff the triple was not already asserted.
    pub fn assert(&mut self, triple: Triple) -> Result<bool, CollectionError> {
        self.triples.add(triple)
    }

    /// Assert all `triples` in this graph.
    ///
    /// Return the number of triples that were not already asserted.
    pub fn assert_all<I>(&mut self, triples: I) -> Result<usize, CollectionError>
    where
        I: IntoIterator<Item = Triple>,
    {
        self.triples.add_all(triples)
    }

    /// Retract `triple` from this graph.
    ///
    /// Return `true` iff the triple was asserted.
    pub fn retract(&mut self, triple: &Triple) -> bool {
        self.triples.delete(triple)
    }

    /// Retract all `triples` from this graph.
    ///
    /// Return the number of triples that were asserted.
    pub fn retract_all<'a, I>(&mut self, triples: I) -> usize
    where
        I: IntoIterator<Item = &'a Triple>,
    {
        self.triples.delete_all(triples)
    }

    /// Assert all the triples of `other` in this graph.
    ///
    /// Blank nodes of `other` are replaced by fresh blank nodes of this graph,
    /// even inside quoted triples,
    /// so that they can not be confused with the blank nodes already present.
    pub fn merge(&mut self, other: &Graph) -> Result<(), CollectionError> {
        let mut map: HashMap<BlankNode, Node> = HashMap::new();
        let factory = &mut self.factory;
        let mut fresh = |b: &BlankNode| {
            map.entry(b.clone())
                .or_insert_with(|| factory.blank())
                .clone()
        };
        let mut merged = Vec::with_capacity(other.len());
        for t in other.triples.asserted() {
            if t.is_ground() {
                merged.push(t.clone());
            } else {
                merged.push(t.map_blank_nodes(&mut fresh));
            }
        }
        self.triples.add_all(merged)?;
        Ok(())
    }

    /// The number of asserted triples in this graph.
    pub fn len(&self) -> usize {
        self.triples.count()
    }

    /// The asserted triples involving `node` in any position
    /// (not inside quoted triples).
    pub fn triples_with_node(&self, node: &Node) -> Vec<&Triple> {
        let mut ret: Vec<&Triple> = self.with_subject(node).collect();
        ret.extend(self.with_predicate(node).filter(|t| t.s() != node));
        ret.extend(
            self.with_object(node)
                .filter(|t| t.s() != node && t.p() != node),
        );
        ret
    }

    /// All the distinct nodes used in asserted triples
    /// (not inside quoted triples).
    pub fn nodes(&self) -> BTreeSet<&Node> {
        self.subject_nodes()
            .into_iter()
            .chain(self.predicate_nodes())
            .chain(self.object_nodes())
            .collect()
    }

    /// The blank nodes occurring in asserted triples, even inside quoted triples.
    pub fn blank_nodes(&self) -> BTreeSet<&BlankNode> {
        self.triples
            .asserted()
            .flat_map(|t| t.blank_nodes())
            .collect()
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl TripleCollection for Graph {
    type Error = CollectionError;

    fn add(&mut self, triple: Triple) -> Result<bool, CollectionError> {
        self.triples.add(triple)
    }

    fn delete(&mut self, triple: &Triple) -> bool {
        self.triples.delete(triple)
    }

    fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    fn contains_quoted(&self, triple: &Triple) -> bool {
        self.triples.contains_quoted(triple)
    }

    fn count(&self) -> usize {
        self.triples.count()
    }

    fn quoted_count(&self) -> usize {
        self.triples.quoted_count()
    }

    fn asserted(&self) -> TripleIter<'_> {
        self.triples.asserted()
    }

    fn quoted(&self) -> TripleIter<'_> {
        self.triples.quoted()
    }

    fn matching<'s>(
        &'s self,
        s: Option<&Node>,
        p: Option<&Node>,
        o: Option<&Node>,
    ) -> TripleIter<'s> {
        self.triples.matching(s, p, o)
    }

    fn quoted_matching<'s>(
        &'s self,
        s: Option<&Node>,
        p: Option<&Node>,
        o: Option<&Node>,
    ) -> TripleIter<'s> {
        self.triples.quoted_matching(s, p, o)
    }

    fn subject_nodes(&self) -> Vec<&Node> {
        self.triples.subject_nodes()
    }

    fn predicate_nodes(&self) -> Vec<&Node> {
        self.triples.predicate_nodes()
    }

    fn object_nodes(&self) -> Vec<&Node> {
        self.triples.object_nodes()
    }

    fn clear(&mut self) {
        self.triples.clear()
    }

    fn equality_mode(&self) -> LiteralEqualityMode {
        self.triples.equality_mode()
    }
}
