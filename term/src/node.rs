//! I define [`Node`], the closed sum type of everything that can appear in a triple.
use crate::{BnodeId, Iri, Literal, LiteralEqualityMode, Triple, VarName};
use std::borrow::Cow;
use std::cmp::Ordering;
use std::sync::Arc;

/// Identifies the scope in which blank node identifiers are meaningful.
///
/// Scopes are minted by [`NodeFactory`](crate::NodeFactory);
/// two independently created factories never share a scope.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ScopeId(pub(crate) u64);

impl ScopeId {
    /// The underlying number.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes).
///
/// Two blank nodes are equal only if both their scope and their local identifier are equal.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct BlankNode {
    scope: ScopeId,
    id: BnodeId,
}

impl BlankNode {
    /// Build a blank node from its constituents.
    pub fn new(scope: ScopeId, id: BnodeId) -> Self {
        BlankNode { scope, id }
    }

    /// The scope of this blank node.
    pub fn scope(&self) -> ScopeId {
        self.scope
    }

    /// The local identifier of this blank node.
    pub fn id(&self) -> &BnodeId {
        &self.id
    }
}

/// A node of an RDF-star graph.
///
/// The derived equality and hashing are strict
/// (see [`LiteralEqualityMode::Strict`]);
/// use [`Node::eq_with`] or [`Node::canonical`] for other modes.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Node {
    /// An [RDF IRI](https://www.w3.org/TR/rdf11-concepts/#section-IRIs)
    Iri(Iri),
    /// An RDF [blank node](https://www.w3.org/TR/rdf11-concepts/#section-blank-nodes)
    Blank(BlankNode),
    /// An RDF [literal](https://www.w3.org/TR/rdf11-concepts/#section-Graph-Literal)
    Literal(Literal),
    /// An RDF-star [quoted triple](https://www.w3.org/2021/12/rdf-star.html#dfn-quoted)
    Triple(Arc<Triple>),
    /// A SPARQL or Notation3 variable
    Variable(VarName),
}

/// The kind of a [`Node`], in the order used to sort nodes of different kinds.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum NodeKind {
    /// See [`Node::Variable`]
    Variable,
    /// See [`Node::Blank`]
    Blank,
    /// See [`Node::Iri`]
    Iri,
    /// See [`Node::Literal`]
    Literal,
    /// See [`Node::Triple`]
    Triple,
}

impl Node {
    /// The kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Iri(_) => NodeKind::Iri,
            Node::Blank(_) => NodeKind::Blank,
            Node::Literal(_) => NodeKind::Literal,
            Node::Triple(_) => NodeKind::Triple,
            Node::Variable(_) => NodeKind::Variable,
        }
    }

    /// Whether this node is an IRI.
    pub fn is_iri(&self) -> bool {
        matches!(self, Node::Iri(..))
    }

    /// Whether this node is a blank node.
    pub fn is_blank(&self) -> bool {
        matches!(self, Node::Blank(..))
    }

    /// Whether this node is a literal.
    pub fn is_literal(&self) -> bool {
        matches!(self, Node::Literal(..))
    }

    /// Whether this node is a quoted triple.
    pub fn is_triple(&self) -> bool {
        matches!(self, Node::Triple(..))
    }

    /// Whether this node is a variable.
    pub fn is_variable(&self) -> bool {
        matches!(self, Node::Variable(..))
    }

    /// Whether this node contains no blank node, even inside quoted triples.
    pub fn is_ground(&self) -> bool {
        match self {
            Node::Blank(_) => false,
            Node::Triple(t) => t.is_ground(),
            _ => true,
        }
    }

    /// The IRI, if this node is an IRI.
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Node::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// The blank node, if this node is a blank node.
    pub fn as_blank(&self) -> Option<&BlankNode> {
        match self {
            Node::Blank(b) => Some(b),
            _ => None,
        }
    }

    /// The literal, if this node is a literal.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Node::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// The quoted triple, if this node is a quoted triple.
    pub fn as_triple(&self) -> Option<&Triple> {
        match self {
            Node::Triple(t) => Some(t),
            _ => None,
        }
    }

    /// The variable name, if this node is a variable.
    pub fn as_variable(&self) -> Option<&VarName> {
        match self {
            Node::Variable(v) => Some(v),
            _ => None,
        }
    }

    /// Whether `other` occurs in this node, or is this node.
    pub fn involves(&self, other: &Node) -> bool {
        self == other
            || match self {
                Node::Triple(t) => t.involves(other),
                _ => false,
            }
    }

    /// The representative of this node under the given equality `mode`.
    ///
    /// Two nodes are equal under `mode`
    /// iff their canonical forms are (strictly) equal.
    /// Quoted triples are canonicalized recursively.
    pub fn canonical(&self, mode: LiteralEqualityMode) -> Cow<'_, Node> {
        if mode == LiteralEqualityMode::Strict {
            return Cow::Borrowed(self);
        }
        match self {
            Node::Literal(lit) => match lit.canonical() {
                Some(lit) => Cow::Owned(Node::Literal(lit)),
                None => Cow::Borrowed(self),
            },
            Node::Triple(t) => {
                let [s, p, o] = t.spo().map(|n| n.canonical(mode));
                if [&s, &p, &o].iter().all(|n| matches!(n, Cow::Borrowed(_))) {
                    Cow::Borrowed(self)
                } else {
                    let t = Triple::new(s.into_owned(), p.into_owned(), o.into_owned());
                    Cow::Owned(Node::Triple(Arc::new(t)))
                }
            }
            _ => Cow::Borrowed(self),
        }
    }

    /// Compare this node to `other` for equality under the given `mode`.
    pub fn eq_with(&self, other: &Node, mode: LiteralEqualityMode) -> bool {
        self.canonical(mode) == other.canonical(mode)
    }

    /// Compare this node to `other` under the given `mode`.
    ///
    /// The result is consistent with [`Node::eq_with`] for the same `mode`.
    pub fn cmp_with(&self, other: &Node, mode: LiteralEqualityMode) -> Ordering {
        self.canonical(mode).cmp(&other.canonical(mode))
    }
}

impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Nodes of different kinds are ordered according to [`NodeKind`]
/// (`Variable < Blank < Iri < Literal < Triple`);
/// when wrapped in `Option`, `None` comes before any node.
impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Node::Iri(i1), Node::Iri(i2)) => i1.cmp(i2),
            (Node::Blank(b1), Node::Blank(b2)) => b1.cmp(b2),
            (Node::Literal(l1), Node::Literal(l2)) => l1.cmp(l2),
            (Node::Triple(t1), Node::Triple(t2)) => t1.cmp(t2),
            (Node::Variable(v1), Node::Variable(v2)) => v1.cmp(v2),
            _ => self.kind().cmp(&other.kind()),
        }
    }
}

impl From<Iri> for Node {
    fn from(other: Iri) -> Self {
        Node::Iri(other)
    }
}

impl From<BlankNode> for Node {
    fn from(other: BlankNode) -> Self {
        Node::Blank(other)
    }
}

impl From<Literal> for Node {
    fn from(other: Literal) -> Self {
        Node::Literal(other)
    }
}

impl From<Triple> for Node {
    fn from(other: Triple) -> Self {
        Node::Triple(Arc::new(other))
    }
}

impl From<VarName> for Node {
    fn from(other: VarName) -> Self {
        Node::Variable(other)
    }
}
