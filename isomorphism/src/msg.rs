//! Minimal spanning graphs.
use std::collections::{BTreeMap, HashMap};

use trigon_term::{BlankNode, Triple};

/// Split the non-ground triples of `triples` into minimal spanning graphs (MSGs).
///
/// An MSG is a connected component of blank-node-bearing triples,
/// where two triples are connected when they share a blank node
/// (even inside quoted triples).
/// Ground triples belong to no MSG, and are ignored.
///
/// Each MSG is sorted, and MSGs are sorted by their first triple.
pub fn compute_msgs<'a, I>(triples: I) -> Vec<Vec<Triple>>
where
    I: IntoIterator<Item = &'a Triple>,
{
    let mut sets = DisjointSets::default();
    let mut bearing = vec![];
    for t in triples {
        let blanks = t.blank_nodes();
        let Some((first, rest)) = blanks.split_first() else {
            continue;
        };
        let root = sets.index(*first);
        for b in rest {
            let other = sets.index(*b);
            sets.union(root, other);
        }
        bearing.push((root, t));
    }

    let mut components: BTreeMap<usize, Vec<Triple>> = BTreeMap::new();
    for (i, t) in bearing {
        components.entry(sets.find(i)).or_default().push(t.clone());
    }
    let mut msgs: Vec<Vec<Triple>> = components
        .into_values()
        .map(|mut msg| {
            msg.sort();
            msg.dedup();
            msg
        })
        .collect();
    msgs.sort();
    msgs
}

/// Union-find over blank nodes.
#[derive(Debug, Default)]
struct DisjointSets<'a> {
    indices: HashMap<&'a BlankNode, usize>,
    parents: Vec<usize>,
}

impl<'a> DisjointSets<'a> {
    fn index(&mut self, b: &'a BlankNode) -> usize {
        let next = self.parents.len();
        let i = *self.indices.entry(b).or_insert(next);
        if i == next {
            self.parents.push(next);
        }
        i
    }

    fn find(&mut self, mut i: usize) -> usize {
        while self.parents[i] != i {
            self.parents[i] = self.parents[self.parents[i]];
            i = self.parents[i];
        }
        i
    }

    fn union(&mut self, i: usize, j: usize) {
        let (ri, rj) = (self.find(i), self.find(j));
        if ri != rj {
            self.parents[rj.max(ri)] = rj.min(ri);
        }
    }
}
