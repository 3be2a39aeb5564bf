//! Trigon is an in-memory [RDF-star] store in Rust.
//!
//! RDF is a data model designed to exchange knowledge on the Web in an interoperable way.
//! Each piece of knowledge (a *statement*) is represented by a [triple](term::Triple),
//! made of three [node](term::Node)s.
//! RDF-star extends RDF by allowing a triple to be *quoted*, i.e. used as a node of another triple,
//! without being asserted.
//!
//! This crate re-exports the crates it is made of:
//! * [`term`] defines nodes, triples and quads;
//! * [`inmem`] defines the indexed triple collection, graphs and triple stores;
//! * [`isomorphism`] compares graphs up to a renaming of their blank nodes.
//!
//! # Getting Started
//!
//! ```
//! use trigon::prelude::*;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut g1 = Graph::new();
//! let alice = g1.create_blank_node();
//! let knows = g1.factory().iri("http://xmlns.com/foaf/0.1/knows")?;
//! let bob = g1.factory().iri("http://example.org/bob")?;
//! let says = g1.factory().iri("http://example.org/says")?;
//! let quoted = g1.factory().triple(alice.clone(), knows.clone(), bob.clone());
//! g1.assert(Triple::new(bob.clone(), says.clone(), quoted))?;
//! assert_eq!(g1.len(), 1);
//! assert_eq!(g1.quoted_count(), 1);
//!
//! let mut g2 = Graph::new();
//! let someone = g2.create_blank_node();
//! let quoted = g2.factory().triple(someone, knows, bob.clone());
//! g2.assert(Triple::new(bob, says, quoted))?;
//!
//! let mapping = GraphMatcher::default().equals(&g1, &g2)?;
//! assert!(mapping.is_some());
//! # Ok(())
//! # }
//! ```
//!
//! [RDF-star]: https://www.w3.org/2021/12/rdf-star.html
#![deny(missing_docs)]

pub use trigon_inmem as inmem;
pub use trigon_isomorphism as isomorphism;
pub use trigon_term as term;

/// The most commonly used types and traits of Trigon.
pub mod prelude {
    pub use trigon_inmem::graph::Graph;
    pub use trigon_inmem::store::TripleStore;
    pub use trigon_inmem::sync::{ThreadSafeGraph, ThreadSafeTripleStore};
    pub use trigon_inmem::TripleCollection;
    pub use trigon_isomorphism::{isomorphic, GraphDiff, GraphMatcher, MatcherConfig};
    pub use trigon_term::{
        BlankNode, Iri, LiteralEqualityMode, Node, NodeFactory, Quad, Triple, ValidationMode,
    };
}
