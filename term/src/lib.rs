//! This crate is part of [Trigon],
//! an in-memory [RDF-star] store in Rust.
//!
//! I define the data model shared by the whole workspace:
//! * [`Node`], the closed sum type of IRIs, blank nodes, literals,
//!   quoted triples and variables, with a total order across kinds;
//! * [`Triple`] and [`Quad`];
//! * [`NodeFactory`], building nodes checked according to a [`ValidationMode`];
//! * [`LiteralEqualityMode`], which selects strict or value-aware comparison of literals.
//!
//! [Trigon]: https://docs.rs/trigon/latest/trigon/
//! [RDF-star]: https://www.w3.org/2021/12/rdf-star.html
#![deny(missing_docs)]

#[macro_use]
mod _macro;

mod _display;
mod _error;
pub use _error::*;
mod bnode_id;
pub use bnode_id::*;
mod factory;
pub use factory::*;
mod iri;
pub use iri::*;
mod language_tag;
pub use language_tag::*;
mod literal;
pub use literal::*;
mod mode;
pub use mode::*;
mod node;
pub use node::*;
pub mod ns;
mod triple;
pub use triple::*;
mod var_name;
pub use var_name::*;
