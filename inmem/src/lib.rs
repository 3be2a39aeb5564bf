//! This crate is part of [Trigon],
//! an in-memory [RDF-star] store in Rust.
//!
//! It provides the storage layer:
//! * [`IndexedTripleCollection`](indexed::IndexedTripleCollection),
//!   a multi-indexed set of asserted and quoted triples,
//!   where quoted triples are reference-counted and released in cascade;
//! * [`Graph`](graph::Graph), a triple collection with a name and a blank node scope;
//! * [`TripleStore`](store::TripleStore), a set of named graphs seen as quads;
//! * thread-safe wrappers around graphs and stores, in [`sync`].
//!
//! [Trigon]: https://docs.rs/trigon/latest/trigon/
//! [RDF-star]: https://www.w3.org/2021/12/rdf-star.html

mod _error;
pub use _error::*;
pub mod collection;
pub use collection::{TripleCollection, TripleIter};
pub mod graph;
pub mod index;
pub mod indexed;
pub mod store;
pub mod sync;
