//! I define parameterized hashing functions,
//! where blank nodes are hashed according to a given colouring.

use std::collections::hash_map::DefaultHasher;
use std::collections::{BTreeMap, HashMap};
use std::hash::{Hash, Hasher};

use trigon_term::{BlankNode, Node, NodeKind, Triple};

/// A colour for each blank node.
pub type Colours = HashMap<BlankNode, u64>;

/// The local signature of a blank node:
/// how many times it occurs in each triple pattern.
pub type Signature = BTreeMap<u64, usize>;

/// Hash this node, using `colours` for hashing blank nodes.
///
/// Occurrences of `focus` are marked, so that the hash of a triple
/// also tells in which positions `focus` occurs.
pub fn hash_node_with<H: Hasher>(n: &Node, colours: &Colours, focus: &BlankNode, state: &mut H) {
    match n {
        Node::Blank(b) => {
            NodeKind::Blank.hash(state);
            (b == focus).hash(state);
            colour_of(colours, b).hash(state);
        }
        Node::Triple(t) if !t.is_ground() => {
            NodeKind::Triple.hash(state);
            hash_triple_with(t, colours, focus, state);
        }
        _ => n.hash(state),
    }
}

/// Hash a triple, using `colours` for hashing blank nodes.
pub fn hash_triple_with<H: Hasher>(t: &Triple, colours: &Colours, focus: &BlankNode, state: &mut H) {
    for n in t.spo() {
        hash_node_with(n, colours, focus, state);
    }
}

/// The hash of the triple pattern that `t` is, from the point of view of `focus`.
pub fn pattern_hash(t: &Triple, colours: &Colours, focus: &BlankNode) -> u64 {
    let mut state = DefaultHasher::new();
    hash_triple_with(t, colours, focus, &mut state);
    state.finish()
}

/// The local signature of `focus`, given the triples it occurs in.
///
/// Other blank nodes are all hashed alike.
pub fn signature<'a, I>(triples: I, focus: &BlankNode) -> Signature
where
    I: IntoIterator<Item = &'a Triple>,
{
    let uncoloured = Colours::new();
    let mut sig = Signature::new();
    for t in triples {
        *sig.entry(pattern_hash(t, &uncoloured, focus)).or_default() += 1;
    }
    sig
}

/// The initial colour of a blank node with signature `sig`.
pub fn signature_colour(sig: &Signature) -> u64 {
    let mut state = DefaultHasher::new();
    sig.hash(&mut state);
    state.finish()
}

/// The next colour of a blank node, given its current colour
/// and the pattern hashes of the triples it occurs in.
pub fn refined_colour(current: u64, mut patterns: Vec<u64>) -> u64 {
    patterns.sort_unstable();
    let mut state = DefaultHasher::new();
    current.hash(&mut state);
    patterns.hash(&mut state);
    state.finish()
}

/// A colour shared by a pinned blank node and its image only.
pub fn pinned_colour(current: u64, rank: usize) -> u64 {
    let mut state = DefaultHasher::new();
    "pinned".hash(&mut state);
    current.hash(&mut state);
    rank.hash(&mut state);
    state.finish()
}

/// The colour of `b`, 0 if it has none.
pub fn colour_of(colours: &Colours, b: &BlankNode) -> u64 {
    colours.get(b).copied().unwrap_or_default()
}
