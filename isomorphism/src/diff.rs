//! I define [`GraphDiff`], reporting the differences between two graphs
//! under blank node renaming.
use std::collections::HashSet;

use trigon_inmem::TripleCollection;
use trigon_term::{LiteralEqualityMode, Triple};

use crate::matcher::{canonical_triple, BlankMapping, Goal, GraphMatcher, MatcherConfig};
use crate::msg::compute_msgs;

/// The differences between an old graph and a new graph.
///
/// Ground triples are compared one by one,
/// while blank-node-bearing triples are compared by [minimal spanning graphs](compute_msgs).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GraphDiffReport {
    /// Ground triples of the new graph missing from the old graph.
    pub added_triples: Vec<Triple>,
    /// Ground triples of the old graph missing from the new graph.
    pub removed_triples: Vec<Triple>,
    /// Minimal spanning graphs of the new graph matching none of the old graph.
    pub added_msgs: Vec<Vec<Triple>>,
    /// Minimal spanning graphs of the old graph matching none of the new graph.
    pub removed_msgs: Vec<Vec<Triple>>,
    /// Whether both graphs have a different number of triples
    /// (a missing graph has no triple, but differs from any graph).
    pub are_different_sizes: bool,
    /// The mapping from blank nodes of the old graph to blank nodes of the new graph,
    /// for the minimal spanning graphs that were matched.
    pub mapping: BlankMapping,
}

impl GraphDiffReport {
    /// Whether both graphs are equal.
    pub fn are_equal(&self) -> bool {
        self.added_triples.is_empty()
            && self.removed_triples.is_empty()
            && self.added_msgs.is_empty()
            && self.removed_msgs.is_empty()
    }
}

/// Computes [`GraphDiffReport`]s.
#[derive(Clone, Copy, Debug, Default)]
pub struct GraphDiff {
    matcher: GraphMatcher,
}

impl GraphDiff {
    /// A new differ, matching minimal spanning graphs according to `config`.
    pub fn new(config: MatcherConfig) -> Self {
        GraphDiff {
            matcher: GraphMatcher::new(config),
        }
    }

    /// The differences from `old` to `new`.
    ///
    /// A minimal spanning graph that can not be matched within the budget of the matcher
    /// is reported as different.
    pub fn difference<G1, G2>(&self, old: Option<&G1>, new: Option<&G2>) -> GraphDiffReport
    where
        G1: TripleCollection + ?Sized,
        G2: TripleCollection + ?Sized,
    {
        match (old, new) {
            (None, None) => GraphDiffReport::default(),
            (None, Some(new)) => {
                let (added_triples, added_msgs) = split(new.asserted());
                GraphDiffReport {
                    added_triples,
                    added_msgs,
                    are_different_sizes: true,
                    ..Default::default()
                }
            }
            (Some(old), None) => {
                let (removed_triples, removed_msgs) = split(old.asserted());
                GraphDiffReport {
                    removed_triples,
                    removed_msgs,
                    are_different_sizes: true,
                    ..Default::default()
                }
            }
            (Some(old), Some(new)) => self.difference_of(old, new),
        }
    }

    fn difference_of<G1, G2>(&self, old: &G1, new: &G2) -> GraphDiffReport
    where
        G1: TripleCollection + ?Sized,
        G2: TripleCollection + ?Sized,
    {
        let mut report = GraphDiffReport {
            are_different_sizes: old.count() != new.count(),
            ..Default::default()
        };
        if !report.are_different_sizes {
            match self.matcher.equals(old, new) {
                Ok(Some(mapping)) => {
                    log::debug!("graphs are equal, no diff to compute");
                    report.mapping = mapping;
                    return report;
                }
                Ok(None) => {}
                Err(err) => log::debug!("comparing whole graphs: {err}"),
            }
        }

        let mode = self.matcher.config().mode;
        let (old_ground, old_msgs) = split(old.asserted());
        let (new_ground, new_msgs) = split(new.asserted());
        let old_set = canonical_set(&old_ground, mode);
        let new_set = canonical_set(&new_ground, mode);
        report.removed_triples = old_ground
            .into_iter()
            .filter(|t| !new_set.contains(&canonical_triple(t, mode)))
            .collect();
        report.added_triples = new_ground
            .into_iter()
            .filter(|t| !old_set.contains(&canonical_triple(t, mode)))
            .collect();

        let mut unmatched: Vec<Option<Vec<Triple>>> = new_msgs.into_iter().map(Some).collect();
        for msg in old_msgs {
            match self.find_match(&msg, &mut unmatched) {
                Some(mapping) => report.mapping.extend(mapping),
                None => report.removed_msgs.push(msg),
            }
        }
        report.added_msgs = unmatched.into_iter().flatten().collect();
        log::debug!(
            "diff: +{}/-{} triples, +{}/-{} MSGs",
            report.added_triples.len(),
            report.removed_triples.len(),
            report.added_msgs.len(),
            report.removed_msgs.len(),
        );
        report
    }

    /// Find and consume the first candidate equal to `msg`.
    fn find_match(
        &self,
        msg: &[Triple],
        candidates: &mut [Option<Vec<Triple>>],
    ) -> Option<BlankMapping> {
        for slot in candidates.iter_mut() {
            let Some(other) = slot else {
                continue;
            };
            if other.len() != msg.len() {
                continue;
            }
            match self.matcher.match_triples(Goal::Equal, msg, other.iter()) {
                Ok(Some(mapping)) => {
                    *slot = None;
                    return Some(mapping);
                }
                Ok(None) => {}
                Err(err) => log::warn!("comparing MSGs: {err}"),
            }
        }
        None
    }
}

/// Split `triples` into ground triples and minimal spanning graphs.
fn split<'a, I>(triples: I) -> (Vec<Triple>, Vec<Vec<Triple>>)
where
    I: Iterator<Item = &'a Triple>,
{
    let (ground, bearing): (Vec<&Triple>, Vec<&Triple>) = triples.partition(|t| t.is_ground());
    let mut ground: Vec<Triple> = ground.into_iter().cloned().collect();
    ground.sort();
    (ground, compute_msgs(bearing))
}

fn canonical_set(triples: &[Triple], mode: LiteralEqualityMode) -> HashSet<Triple> {
    triples.iter().map(|t| canonical_triple(t, mode)).collect()
}
