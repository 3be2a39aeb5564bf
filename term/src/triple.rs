//! I define [`Triple`] and [`Quad`].
use crate::{BlankNode, Node};
use std::sync::Arc;

/// An RDF-star triple: a subject, a predicate and an object.
///
/// Triples are immutable values;
/// ordering is lexicographic over (subject, predicate, object).
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Triple {
    s: Node,
    p: Node,
    o: Node,
}

impl Triple {
    /// Build a triple from its constituents.
    pub fn new(s: Node, p: Node, o: Node) -> Self {
        Triple { s, p, o }
    }

    /// The subject of this triple.
    pub fn s(&self) -> &Node {
        &self.s
    }

    /// The predicate of this triple.
    pub fn p(&self) -> &Node {
        &self.p
    }

    /// The object of this triple.
    pub fn o(&self) -> &Node {
        &self.o
    }

    /// The three nodes of this triple, in subject, predicate, object order.
    pub fn spo(&self) -> [&Node; 3] {
        [&self.s, &self.p, &self.o]
    }

    /// Consume this triple into its three nodes.
    pub fn into_spo(self) -> [Node; 3] {
        [self.s, self.p, self.o]
    }

    /// Iterate over the three nodes of this triple.
    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.spo().into_iter()
    }

    /// Whether no blank node occurs in this triple,
    /// even inside quoted triples.
    pub fn is_ground(&self) -> bool {
        self.nodes().all(Node::is_ground)
    }

    /// Whether `node` occurs in this triple, even inside quoted triples.
    pub fn involves(&self, node: &Node) -> bool {
        self.nodes().any(|n| n.involves(node))
    }

    /// The blank nodes occurring in this triple, even inside quoted triples,
    /// in depth-first order (possibly with repetitions).
    pub fn blank_nodes(&self) -> Vec<&BlankNode> {
        let mut acc = vec![];
        self.collect_blank_nodes(&mut acc);
        acc
    }

    fn collect_blank_nodes<'a>(&'a self, acc: &mut Vec<&'a BlankNode>) {
        for n in self.nodes() {
            match n {
                Node::Blank(b) => acc.push(b),
                Node::Triple(t) => t.collect_blank_nodes(acc),
                _ => {}
            }
        }
    }

    /// The triples directly quoted by this one, in subject, predicate, object order.
    pub fn quoted(&self) -> impl Iterator<Item = &Arc<Triple>> {
        self.nodes().filter_map(|n| match n {
            Node::Triple(t) => Some(t),
            _ => None,
        })
    }

    /// Build a new triple where every blank node (even inside quoted triples)
    /// is replaced by the result of `f`.
    pub fn map_blank_nodes<F>(&self, f: &mut F) -> Triple
    where
        F: FnMut(&BlankNode) -> Node,
    {
        let [s, p, o] = self.spo().map(|n| map_node(n, f));
        Triple::new(s, p, o)
    }
}

fn map_node<F>(n: &Node, f: &mut F) -> Node
where
    F: FnMut(&BlankNode) -> Node,
{
    match n {
        Node::Blank(b) => f(b),
        Node::Triple(t) if !t.is_ground() => Node::Triple(Arc::new(t.map_blank_nodes(f))),
        _ => n.clone(),
    }
}

impl From<[Node; 3]> for Triple {
    fn from([s, p, o]: [Node; 3]) -> Self {
        Triple::new(s, p, o)
    }
}

/// A triple, together with the name of the graph it belongs to.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Quad {
    triple: Triple,
    graph: Option<Node>,
}

impl Quad {
    /// Build a quad; `graph` is `None` for the default graph.
    pub fn new(triple: Triple, graph: Option<Node>) -> Self {
        Quad { triple, graph }
    }

    /// The triple of this quad.
    pub fn triple(&self) -> &Triple {
        &self.triple
    }

    /// The graph name of this quad (`None` for the default graph).
    pub fn graph(&self) -> Option<&Node> {
        self.graph.as_ref()
    }

    /// Consume this quad into its triple and graph name.
    pub fn into_parts(self) -> (Triple, Option<Node>) {
        (self.triple, self.graph)
    }
}
