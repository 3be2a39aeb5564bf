//! This crate is part of [Trigon],
//! an in-memory [RDF-star] store in Rust.
//!
//! This crate decides whether two graphs are [equal] up to a renaming of their blank nodes
//! (or whether one is a sub-graph of the other),
//! and exposes the witnessing blank node mapping.
//! It also computes the [difference](GraphDiff) between two graphs,
//! in terms of ground triples and of [minimal spanning graphs](compute_msgs).
//!
//! The [`GraphMatcher`] proceeds in four phases:
//! 1. ground triples are compared directly;
//! 2. each blank node gets a local signature,
//!    and only blank nodes with compatible signatures are candidates for each other;
//! 3. candidates are refined using the candidates of neighbouring blank nodes,
//!    until a fixed point is reached;
//! 4. the remaining ambiguity is resolved by a bounded search.
//!
//! [Trigon]: https://docs.rs/trigon/latest/trigon/
//! [RDF-star]: https://www.w3.org/2021/12/rdf-star.html
//! [equal]: https://www.w3.org/TR/rdf12-concepts/#graph-isomorphism
#![deny(missing_docs)]

use thiserror::Error;

mod diff;
mod generator;
mod hash;
mod matcher;
mod msg;

pub use diff::*;
pub use generator::*;
pub use matcher::*;
pub use msg::*;

/// Graph matching error.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum MatchError {
    /// The search for a mapping was stopped by the configured safeguard,
    /// before it could prove or disprove the match.
    #[error("Matching budget exhausted after {0} attempts")]
    BudgetExhausted(usize),
}

#[cfg(test)]
mod test;

#[cfg(test)]
fn test_setup() {
    TEST_SETUP.call_once(|| {
        env_logger::init();
    });
}

#[cfg(test)]
static TEST_SETUP: std::sync::Once = std::sync::Once::new();
